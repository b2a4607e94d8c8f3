/// View navigation state machine
///
/// `NavigatorState` is an immutable value; `reduce` computes the next
/// state for an event. Every event is accepted from every state.

use tracing::debug;

use super::data::{Category, ProjectId};

/// The eight mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    MapView,
    Projects,
    ProjectDetail,
    About,
    Research,
    ResearchDetail,
    Contact,
}

impl View {
    #[cfg(test)]
    pub const ALL: [View; 8] = [
        View::Home,
        View::MapView,
        View::Projects,
        View::ProjectDetail,
        View::About,
        View::Research,
        View::ResearchDetail,
        View::Contact,
    ];
}

/// Which item, in which catalog, a detail view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Project(ProjectId),
    /// Position on the research shelf
    Research(usize),
}

/// Navigation events emitted by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    GoHome,
    GoMap,
    OpenProject(ProjectId),
    OpenResearch(usize),
    /// Show the works list, filtered to one category or to all of them
    GoProjects(Option<Category>),
    GoResearchList,
    GoAbout,
    GoContact,
    /// Return from a project page to the list, keeping its filter
    BackToWorks,
    /// Change the list filter in place
    FilterCategory(Option<Category>),
    /// Feature the next project in the home carousel
    AdvanceCarousel,
}

impl Navigation {
    /// Whether the page should snap back to the top after this event
    pub fn resets_scroll(self) -> bool {
        !matches!(
            self,
            Navigation::FilterCategory(_) | Navigation::AdvanceCarousel
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub view: View,
    /// Present only on detail views
    pub selection: Option<Selection>,
    /// List filter; kept through a project page so "Back to Works" restores it
    pub category: Option<Category>,
    /// Always below the project count
    pub carousel_index: usize,
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self {
            view: View::Home,
            selection: None,
            category: None,
            carousel_index: 0,
        }
    }
}

/// Compute the state that follows `event`.
///
/// `project_count` is the carousel modulus and must be non-zero.
pub fn reduce(state: NavigatorState, event: Navigation, project_count: usize) -> NavigatorState {
    let moved = |view| NavigatorState {
        view,
        selection: None,
        ..state
    };

    match event {
        Navigation::GoHome => NavigatorState {
            category: None,
            ..moved(View::Home)
        },
        Navigation::GoMap => NavigatorState {
            category: None,
            ..moved(View::MapView)
        },
        Navigation::OpenProject(id) => NavigatorState {
            view: View::ProjectDetail,
            selection: Some(Selection::Project(id)),
            ..state
        },
        Navigation::OpenResearch(index) => NavigatorState {
            view: View::ResearchDetail,
            selection: Some(Selection::Research(index)),
            ..state
        },
        Navigation::GoProjects(category) => NavigatorState {
            category,
            ..moved(View::Projects)
        },
        Navigation::GoResearchList => moved(View::Research),
        Navigation::GoAbout => moved(View::About),
        Navigation::GoContact => moved(View::Contact),
        Navigation::BackToWorks => moved(View::Projects),
        Navigation::FilterCategory(category) => NavigatorState { category, ..state },
        Navigation::AdvanceCarousel => NavigatorState {
            carousel_index: (state.carousel_index + 1) % project_count.max(1),
            ..state
        },
    }
}

/// Owns the current state and applies events to it
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigatorState,
    project_count: usize,
}

impl Navigator {
    pub fn new(project_count: usize) -> Self {
        Self {
            state: NavigatorState::default(),
            project_count,
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    /// Apply an event to the current state
    pub fn dispatch(&mut self, event: Navigation) {
        let previous = self.state.view;
        self.state = reduce(self.state, event, self.project_count);

        if event != Navigation::AdvanceCarousel {
            debug!(?event, from = ?previous, to = ?self.state.view, "navigated");
        }
    }
}
