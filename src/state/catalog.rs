use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

use super::data::{
    Category, ContactInfo, MediaRefs, Profile, ProjectId, ProjectRecord, ResearchEntry, Writeup,
};
use super::navigator::Selection;

/// Catalog content compiled into the binary
const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");
/// Bespoke project write-ups, keyed by project id
const WRITEUPS_JSON: &str = include_str!("../../assets/writeups.json");

/// Reasons the embedded content can be rejected at startup
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog has no projects")]
    NoProjects,
    #[error("catalog has no research entries")]
    NoResearch,
    #[error("project ids must be positive (\"{title}\" has id 0)")]
    ZeroId { title: String },
    #[error("project id {0} appears more than once")]
    DuplicateId(ProjectId),
    #[error("write-up refers to unknown project {0}")]
    OrphanWriteup(ProjectId),
}

/// On-disk layout of catalog.json
#[derive(Debug, Deserialize)]
struct CatalogFile {
    projects: Vec<ProjectRecord>,
    research: Vec<ResearchEntry>,
    profile: Profile,
    contact: ContactInfo,
    media: MediaRefs,
}

/// The Catalog holds every piece of static content shown by the app.
///
/// It is built once at startup and shared read-only. Construction
/// guarantees both the project list and the research list are non-empty,
/// which is what lets the resolve functions fall back to the first record.
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    research: Vec<ResearchEntry>,
    writeups: HashMap<ProjectId, Writeup>,
    profile: Profile,
    contact: ContactInfo,
    media: MediaRefs,
}

impl Catalog {
    /// Parse and validate the content embedded at build time
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON, WRITEUPS_JSON)
    }

    /// Parse and validate catalog content from JSON documents
    pub fn from_json(catalog: &str, writeups: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(catalog).map_err(|source| {
            CatalogError::Parse {
                file: "catalog.json",
                source,
            }
        })?;

        let raw_writeups: BTreeMap<u32, Writeup> =
            serde_json::from_str(writeups).map_err(|source| CatalogError::Parse {
                file: "writeups.json",
                source,
            })?;

        let writeups = raw_writeups
            .into_iter()
            .map(|(id, writeup)| (ProjectId(id), writeup))
            .collect();

        Self::new(
            file.projects,
            file.research,
            writeups,
            file.profile,
            file.contact,
            file.media,
        )
    }

    /// Assemble a catalog from parts, enforcing its invariants
    pub fn new(
        projects: Vec<ProjectRecord>,
        research: Vec<ResearchEntry>,
        writeups: HashMap<ProjectId, Writeup>,
        profile: Profile,
        contact: ContactInfo,
        media: MediaRefs,
    ) -> Result<Self, CatalogError> {
        if projects.is_empty() {
            return Err(CatalogError::NoProjects);
        }
        if research.is_empty() {
            return Err(CatalogError::NoResearch);
        }

        let mut seen = HashSet::new();
        for project in &projects {
            if project.id.0 == 0 {
                return Err(CatalogError::ZeroId {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }

        // Report the lowest orphan so the error is stable across runs
        if let Some(orphan) = writeups.keys().filter(|id| !seen.contains(id)).min() {
            return Err(CatalogError::OrphanWriteup(*orphan));
        }

        Ok(Catalog {
            projects,
            research,
            writeups,
            profile,
            contact,
            media,
        })
    }

    /// All projects in catalog order
    #[cfg(test)]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Number of projects (never zero)
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// All research entries in shelf order
    pub fn research(&self) -> &[ResearchEntry] {
        &self.research
    }

    /// Projects in the given category, catalog order preserved
    pub fn projects_in(&self, category: Category) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter().filter(move |p| p.category == category)
    }

    /// Project featured at a carousel position, wrapping around
    pub fn featured(&self, carousel_index: usize) -> &ProjectRecord {
        &self.projects[carousel_index % self.projects.len()]
    }

    /// Resolve the project to show on a detail page.
    ///
    /// A missing selection, a research selection or an unknown id all
    /// land on the first project. This is the only place that decides
    /// what a project lookup miss looks like.
    pub fn resolve_project(&self, selection: Option<Selection>) -> &ProjectRecord {
        let found = match selection {
            Some(Selection::Project(id)) => self.projects.iter().find(|p| p.id == id),
            _ => None,
        };
        found.unwrap_or(&self.projects[0])
    }

    /// Resolve the journal entry to show, with the same first-entry fallback.
    /// Returns the entry together with its position on the shelf.
    pub fn resolve_research(&self, selection: Option<Selection>) -> (usize, &ResearchEntry) {
        match selection {
            Some(Selection::Research(index)) if index < self.research.len() => {
                (index, &self.research[index])
            }
            _ => (0, &self.research[0]),
        }
    }

    /// Bespoke write-up for a project, if one was authored
    pub fn writeup(&self, id: ProjectId) -> Option<&Writeup> {
        self.writeups.get(&id)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn media(&self) -> &MediaRefs {
        &self.media
    }
}

// Implement Debug without dumping every paragraph of content
impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("projects", &self.projects.len())
            .field("research", &self.research.len())
            .field("writeups", &self.writeups.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small catalog used by tests across the crate
    pub(crate) fn sample_catalog() -> Catalog {
        let project = |id: u32, title: &str, category: Category| ProjectRecord {
            id: ProjectId(id),
            title: title.to_string(),
            image: format!("https://example.test/{id}.png"),
            description: format!("About {title}"),
            category,
        };

        Catalog::new(
            vec![
                project(1, "Alpha", Category::Interactive),
                project(2, "Beta", Category::Handmade),
                project(3, "Gamma", Category::Interactive),
            ],
            vec![
                ResearchEntry { title: "First note".into(), url: "#".into() },
                ResearchEntry { title: "Second note".into(), url: "#".into() },
            ],
            HashMap::new(),
            sample_profile(),
            ContactInfo {
                email: "a@b.c".into(),
                instagram: "@a".into(),
                twitter: "@b".into(),
            },
            sample_media(),
        )
        .unwrap()
    }

    fn sample_profile() -> Profile {
        Profile {
            bio: vec!["Hello".into()],
            statement: "Statement".into(),
            propositions: vec![],
            closing: "Bye".into(),
        }
    }

    fn sample_media() -> MediaRefs {
        MediaRefs {
            landing_background: "l".into(),
            about_background: "a".into(),
            bio_image: "b".into(),
            map_background: "m".into(),
            map_marker: "k".into(),
            see_all_button: "s".into(),
            research_background: "r".into(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();

        assert_eq!(catalog.project_count(), 10);
        assert_eq!(catalog.research().len(), 3);
        assert_eq!(catalog.projects()[0].title, "Escape to the Outdoors");
        assert!(catalog.writeup(ProjectId(5)).is_some());
        assert!(catalog.writeup(ProjectId(9)).is_none());
    }

    #[test]
    fn test_resolve_project_hit_and_miss() {
        let catalog = Catalog::load().unwrap();

        let hit = catalog.resolve_project(Some(Selection::Project(ProjectId(5))));
        assert_eq!(hit.title, "Colorful");

        let miss = catalog.resolve_project(Some(Selection::Project(ProjectId(999))));
        assert_eq!(miss.title, "Escape to the Outdoors");

        let absent = catalog.resolve_project(None);
        assert_eq!(absent.title, "Escape to the Outdoors");

        let wrong_kind = catalog.resolve_project(Some(Selection::Research(4)));
        assert_eq!(wrong_kind.id, ProjectId(1));
    }

    #[test]
    fn test_resolve_research_falls_back_to_first() {
        let catalog = sample_catalog();

        let (index, entry) = catalog.resolve_research(Some(Selection::Research(1)));
        assert_eq!((index, entry.title.as_str()), (1, "Second note"));

        let (index, entry) = catalog.resolve_research(Some(Selection::Research(42)));
        assert_eq!((index, entry.title.as_str()), (0, "First note"));

        let (index, _) = catalog.resolve_research(None);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_projects_in_keeps_catalog_order() {
        let catalog = sample_catalog();
        let titles: Vec<_> = catalog
            .projects_in(Category::Interactive)
            .map(|p| p.title.as_str())
            .collect();

        assert_eq!(titles, ["Alpha", "Gamma"]);
        assert_eq!(catalog.projects_in(Category::Static).count(), 0);
    }

    #[test]
    fn test_featured_wraps() {
        let catalog = sample_catalog();
        assert_eq!(catalog.featured(0).title, "Alpha");
        assert_eq!(catalog.featured(4).title, "Beta");
    }

    #[test]
    fn test_rejects_empty_projects() {
        let result = Catalog::new(
            vec![],
            vec![ResearchEntry { title: "x".into(), url: "#".into() }],
            HashMap::new(),
            sample_profile(),
            ContactInfo { email: String::new(), instagram: String::new(), twitter: String::new() },
            sample_media(),
        );
        assert!(matches!(result, Err(CatalogError::NoProjects)));
    }

    #[test]
    fn test_rejects_duplicate_and_zero_ids() {
        let catalog = sample_catalog();
        let mut projects = catalog.projects().to_vec();
        projects[1].id = ProjectId(1);

        let result = Catalog::new(
            projects.clone(),
            catalog.research().to_vec(),
            HashMap::new(),
            sample_profile(),
            catalog.contact().clone(),
            sample_media(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(ProjectId(1)))));

        projects[1].id = ProjectId(0);
        let result = Catalog::new(
            projects,
            catalog.research().to_vec(),
            HashMap::new(),
            sample_profile(),
            catalog.contact().clone(),
            sample_media(),
        );
        assert!(matches!(result, Err(CatalogError::ZeroId { .. })));
    }

    #[test]
    fn test_rejects_orphan_writeup() {
        let result = Catalog::from_json(CATALOG_JSON, r#"{"77": {"sections": []}}"#);
        assert!(matches!(result, Err(CatalogError::OrphanWriteup(ProjectId(77)))));
    }

    #[test]
    fn test_reports_parse_errors_with_file_name() {
        let err = Catalog::from_json("{", WRITEUPS_JSON).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse catalog.json"));
    }
}
