/// Screen derivation
///
/// `derive` turns navigator state plus the catalog into a description of
/// what the window shows. It holds no state of its own and needs no
/// window, which keeps every screen testable.

use crate::state::catalog::Catalog;
use crate::state::data::{
    Category, ContactInfo, MediaRefs, Profile, ProjectId, ProjectRecord, ResearchEntry, Writeup,
};
use crate::state::navigator::{NavigatorState, Selection, View};

/// A category marker on the creation map, positioned relative to the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub category: Category,
    /// Fraction of the map width
    pub x: f32,
    /// Fraction of the map height
    pub y: f32,
}

/// Marker positions, one per category, in category order
pub const MAP_MARKERS: [MapMarker; 4] = [
    MapMarker { category: Category::Interactive, x: 0.28, y: 0.28 },
    MapMarker { category: Category::Narrative, x: 0.68, y: 0.42 },
    MapMarker { category: Category::Static, x: 0.24, y: 0.68 },
    MapMarker { category: Category::Handmade, x: 0.75, y: 0.75 },
];

/// Projects of one category, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGroup<'a> {
    pub category: Category,
    pub projects: Vec<&'a ProjectRecord>,
}

/// Body of a project detail page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailBody<'a> {
    /// Authored long-form content
    Bespoke(&'a Writeup),
    /// Built from the record itself
    Generic { title: &'a str, description: &'a str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Home {
        featured: &'a ProjectRecord,
        position: usize,
        total: usize,
        background: &'a str,
    },
    Map {
        markers: &'static [MapMarker],
        media: &'a MediaRefs,
    },
    Projects {
        filter: Option<Category>,
        groups: Vec<ProjectGroup<'a>>,
    },
    ProjectDetail {
        project: &'a ProjectRecord,
        body: DetailBody<'a>,
    },
    About {
        profile: &'a Profile,
        media: &'a MediaRefs,
    },
    Research {
        entries: &'a [ResearchEntry],
        background: &'a str,
    },
    ResearchDetail {
        position: usize,
        entry: &'a ResearchEntry,
    },
    Contact {
        contact: &'a ContactInfo,
    },
}

impl Screen<'_> {
    /// The view this screen was derived for
    #[cfg(test)]
    pub fn view(&self) -> View {
        match self {
            Screen::Home { .. } => View::Home,
            Screen::Map { .. } => View::MapView,
            Screen::Projects { .. } => View::Projects,
            Screen::ProjectDetail { .. } => View::ProjectDetail,
            Screen::About { .. } => View::About,
            Screen::Research { .. } => View::Research,
            Screen::ResearchDetail { .. } => View::ResearchDetail,
            Screen::Contact { .. } => View::Contact,
        }
    }

    /// Heading shown at the top of the page
    pub fn title(&self) -> &str {
        match self {
            Screen::Home { .. } => "My Sketchy Studio",
            Screen::Map { .. } => "Creation Map",
            Screen::Projects { .. } => "Selected Works",
            Screen::ProjectDetail { project, .. } => &project.title,
            Screen::About { .. } => "About Me",
            Screen::Research { .. } => "Research & Thoughts",
            Screen::ResearchDetail { .. } => "Journal Entry",
            Screen::Contact { .. } => "Contact",
        }
    }
}

/// Derive the screen for the current state
pub fn derive<'a>(state: &NavigatorState, catalog: &'a Catalog) -> Screen<'a> {
    match state.view {
        View::Home => Screen::Home {
            featured: catalog.featured(state.carousel_index),
            position: state.carousel_index % catalog.project_count(),
            total: catalog.project_count(),
            background: &catalog.media().landing_background,
        },
        View::MapView => Screen::Map {
            markers: &MAP_MARKERS,
            media: catalog.media(),
        },
        View::Projects => Screen::Projects {
            filter: state.category,
            groups: group_projects(catalog, state.category),
        },
        View::ProjectDetail => {
            let project = catalog.resolve_project(state.selection);
            let selected = match state.selection {
                Some(Selection::Project(id)) => Some(id),
                _ => None,
            };
            Screen::ProjectDetail {
                project,
                body: detail_body(catalog, selected, project),
            }
        }
        View::About => Screen::About {
            profile: catalog.profile(),
            media: catalog.media(),
        },
        View::Research => Screen::Research {
            entries: catalog.research(),
            background: &catalog.media().research_background,
        },
        View::ResearchDetail => {
            let (position, entry) = catalog.resolve_research(state.selection);
            Screen::ResearchDetail { position, entry }
        }
        View::Contact => Screen::Contact {
            contact: catalog.contact(),
        },
    }
}

/// Partition the catalog by category, dropping groups that end up empty
pub fn group_projects(catalog: &Catalog, filter: Option<Category>) -> Vec<ProjectGroup<'_>> {
    Category::ALL
        .into_iter()
        .filter(|category| filter.map_or(true, |wanted| wanted == *category))
        .map(|category| ProjectGroup {
            category,
            projects: catalog.projects_in(category).collect(),
        })
        .filter(|group| !group.projects.is_empty())
        .collect()
}

/// Write-ups are keyed on the id that was asked for. An unknown id gets the
/// generic template filled from the fallback record.
fn detail_body<'a>(
    catalog: &'a Catalog,
    selected: Option<ProjectId>,
    project: &'a ProjectRecord,
) -> DetailBody<'a> {
    match selected.and_then(|id| catalog.writeup(id)) {
        Some(writeup) => DetailBody::Bespoke(writeup),
        None => DetailBody::Generic {
            title: &project.title,
            description: &project.description,
        },
    }
}

/// Video id of a YouTube link: the `v=` value, else the last path segment
pub fn video_id(url: &str) -> &str {
    match url.split_once("v=") {
        Some((_, id)) => id.split('&').next().unwrap_or(id),
        None => url.rsplit('/').next().unwrap_or(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::sample_catalog;
    use crate::state::data::ProjectId;
    use crate::state::navigator::{reduce, Navigation};

    fn state_after(events: &[Navigation], catalog: &Catalog) -> NavigatorState {
        events.iter().fold(NavigatorState::default(), |state, event| {
            reduce(state, *event, catalog.project_count())
        })
    }

    #[test]
    fn test_every_view_derives_matching_screen() {
        let catalog = Catalog::load().unwrap();
        for view in View::ALL {
            let state = NavigatorState { view, ..NavigatorState::default() };
            assert_eq!(derive(&state, &catalog).view(), view);
        }
    }

    #[test]
    fn test_project_detail_title() {
        let catalog = Catalog::load().unwrap();

        let state = state_after(&[Navigation::OpenProject(ProjectId(5))], &catalog);
        assert_eq!(derive(&state, &catalog).title(), "Colorful");

        let state = state_after(&[Navigation::OpenProject(ProjectId(999))], &catalog);
        assert_eq!(derive(&state, &catalog).title(), "Escape to the Outdoors");
    }

    #[test]
    fn test_filtered_projects_show_one_group_in_order() {
        let catalog = Catalog::load().unwrap();
        let state = state_after(
            &[Navigation::GoProjects(Some(Category::Interactive))],
            &catalog,
        );

        let Screen::Projects { filter, groups } = derive(&state, &catalog) else {
            panic!("expected the projects screen");
        };
        assert_eq!(filter, Some(Category::Interactive));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, Category::Interactive);

        let ids: Vec<_> = groups[0].projects.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 5]);
    }

    #[test]
    fn test_unfiltered_projects_omit_empty_groups() {
        let catalog = sample_catalog();
        let groups = group_projects(&catalog, None);

        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, [Category::Interactive, Category::Handmade]);

        assert!(group_projects(&catalog, Some(Category::Static)).is_empty());
    }

    #[test]
    fn test_generic_body_without_writeup() {
        let catalog = sample_catalog();
        let state = state_after(&[Navigation::OpenProject(ProjectId(2))], &catalog);

        let Screen::ProjectDetail { project, body } = derive(&state, &catalog) else {
            panic!("expected a project page");
        };
        assert_eq!(project.title, "Beta");
        assert_eq!(
            body,
            DetailBody::Generic { title: "Beta", description: "About Beta" }
        );
    }

    #[test]
    fn test_unknown_id_gets_generic_body_of_first_project() {
        let catalog = Catalog::load().unwrap();
        let state = state_after(&[Navigation::OpenProject(ProjectId(999))], &catalog);

        let Screen::ProjectDetail { project, body } = derive(&state, &catalog) else {
            panic!("expected a project page");
        };
        assert_eq!(project.id, ProjectId(1));
        assert!(matches!(
            body,
            DetailBody::Generic { title: "Escape to the Outdoors", .. }
        ));
    }

    #[test]
    fn test_bespoke_body_with_writeup() {
        let catalog = Catalog::load().unwrap();
        let state = state_after(&[Navigation::OpenProject(ProjectId(1))], &catalog);

        match derive(&state, &catalog) {
            Screen::ProjectDetail { body: DetailBody::Bespoke(writeup), .. } => {
                assert_eq!(writeup.sections[0].title, "Project Introduction");
                assert_eq!(writeup.video.as_deref(), Some("https://youtu.be/Xp60Bq2VX1U"));
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_research_detail_resolution() {
        let catalog = Catalog::load().unwrap();

        let state = state_after(&[Navigation::OpenResearch(2)], &catalog);
        match derive(&state, &catalog) {
            Screen::ResearchDetail { position, entry } => {
                assert_eq!(position, 2);
                assert_eq!(entry.title, "Generative AI Ethics");
            }
            other => panic!("unexpected screen {other:?}"),
        }

        let state = state_after(&[Navigation::OpenResearch(7)], &catalog);
        match derive(&state, &catalog) {
            Screen::ResearchDetail { position, entry } => {
                assert_eq!(position, 0);
                assert_eq!(entry.title, "Color Theory in Digital Art");
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_home_features_carousel_project() {
        let catalog = Catalog::load().unwrap();
        let state = state_after(
            &[Navigation::AdvanceCarousel, Navigation::AdvanceCarousel],
            &catalog,
        );

        match derive(&state, &catalog) {
            Screen::Home { featured, position, total, .. } => {
                assert_eq!(featured.title, "Little Toad's Great Adventure");
                assert_eq!((position, total), (2, 10));
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_map_markers_cover_each_category_once() {
        let categories: Vec<_> = MAP_MARKERS.iter().map(|m| m.category).collect();
        assert_eq!(categories, Category::ALL);
    }

    #[test]
    fn test_video_id() {
        assert_eq!(video_id("https://youtu.be/Xp60Bq2VX1U"), "Xp60Bq2VX1U");
        assert_eq!(video_id("https://www.youtube.com/watch?v=abc123&t=4"), "abc123");
        assert_eq!(video_id("https://www.youtube.com/watch?v=xyz"), "xyz");
    }
}
