/// Shared data structures for the application state
///
/// These structs represent the static content that flows between
/// the catalog layer and the UI layer. Everything here is read-only
/// once the catalog has been loaded.

use serde::Deserialize;
use std::fmt;

/// Stable identifier of a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four rooms of the creation map.
///
/// Variant order is the display order used when grouping projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "Interactive Playground - Playful Prototypes")]
    Interactive,
    #[serde(rename = "Narrative Screening Hall - Storytelling Cinema")]
    Narrative,
    #[serde(rename = "Static Inspiration Gallery - Still Moments")]
    Static,
    #[serde(rename = "Handmade Temperature Station - Handcrafted with Care")]
    Handmade,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 4] = [
        Category::Interactive,
        Category::Narrative,
        Category::Static,
        Category::Handmade,
    ];

    /// Full label, as written on the map
    pub fn label(self) -> &'static str {
        match self {
            Category::Interactive => "Interactive Playground - Playful Prototypes",
            Category::Narrative => "Narrative Screening Hall - Storytelling Cinema",
            Category::Static => "Static Inspiration Gallery - Still Moments",
            Category::Handmade => "Handmade Temperature Station - Handcrafted with Care",
        }
    }

    /// Label up to the first " - " (filter buttons)
    pub fn short_label(self) -> &'static str {
        let label = self.label();
        label.split(" - ").next().unwrap_or(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single work in the portfolio
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    /// Opaque image URI, never fetched
    pub image: String,
    pub description: String,
    pub category: Category,
}

/// A journal entry on the research shelf
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResearchEntry {
    pub title: String,
    pub url: String,
}

/// One of the numbered propositions in the artist statement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Proposition {
    pub heading: String,
    pub body: String,
}

/// Content of the about page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub bio: Vec<String>,
    pub statement: String,
    pub propositions: Vec<Proposition>,
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub instagram: String,
    pub twitter: String,
}

/// Background and decoration URIs handed to the media placeholder
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaRefs {
    pub landing_background: String,
    pub about_background: String,
    pub bio_image: String,
    pub map_background: String,
    pub map_marker: String,
    pub see_all_button: String,
    pub research_background: String,
}

/// Background tint of a write-up section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Plain,
    Primary,
    Accent,
}

/// Building block of a write-up section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    Paragraph(String),
    /// Placeholder frames for images that are not part of the catalog
    Gallery { label: String, count: u8 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub tone: Tone,
    pub blocks: Vec<Block>,
}

/// Bespoke long-form detail page for a project
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Writeup {
    #[serde(default)]
    pub video: Option<String>,
    pub sections: Vec<Section>,
}
