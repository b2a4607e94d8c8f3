use iced::{Element, Subscription, Task, Theme};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod screen;
mod state;
mod ui;

use error::AppError;
use state::carousel::CarouselTimer;
use state::catalog::Catalog;
use state::navigator::{Navigation, Navigator};
use state::settings::{Settings, ThemeChoice};

/// Main application state
struct Portfolio {
    /// Static content, shared read-only
    catalog: Arc<Catalog>,
    /// Current view and selection
    navigator: Navigator,
    /// Home carousel clock
    carousel: CarouselTimer,
    theme: ThemeChoice,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A hotspot, button or card was clicked
    Navigate(Navigation),
    /// The carousel clock of the given generation ticked
    CarouselTick(u64, Instant),
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(catalog: Arc<Catalog>, settings: &Settings) -> (Self, Task<Message>) {
        let navigator = Navigator::new(catalog.project_count());
        let mut carousel = CarouselTimer::new(settings.carousel_interval());
        carousel.sync(navigator.view(), Instant::now());

        info!(interval = ?carousel.interval(), "🎨 Sketch room ready");

        (
            Portfolio {
                catalog,
                navigator,
                carousel,
                theme: settings.theme,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(event) => {
                self.navigator.dispatch(event);

                // The carousel only runs on the home view
                self.carousel.sync(self.navigator.view(), Instant::now());

                if event.resets_scroll() {
                    return ui::pages::scroll_to_top();
                }

                Task::none()
            }
            Message::CarouselTick(generation, at) => {
                if self.carousel.fire(generation, at) {
                    self.navigator.dispatch(Navigation::AdvanceCarousel);
                    debug!(
                        index = self.navigator.state().carousel_index,
                        "carousel advanced"
                    );
                }

                Task::none()
            }
        }
    }

    /// Build the user interface for the current screen
    fn view(&self) -> Element<'_, Message> {
        let screen = screen::derive(self.navigator.state(), &self.catalog);
        ui::pages::view(screen)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.carousel
            .subscription()
            .map(|(generation, at)| Message::CarouselTick(generation, at))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::style::theme(self.theme)
    }
}

/// Install the tracing subscriber; RUST_LOG wins over the settings file
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), AppError> {
    // Settings decide the log filter, so report their errors after logging is up
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_logging(&settings);

    if let Some(err) = settings_error {
        warn!("{err}; falling back to default settings");
    }

    let catalog = Catalog::load().map_err(|err| {
        error!("❌ {err}");
        err
    })?;

    info!(
        projects = catalog.project_count(),
        research = catalog.research().len(),
        "📁 Catalog loaded"
    );

    let catalog = Arc::new(catalog);
    let window_size = (settings.window_width, settings.window_height);

    iced::application("Sketch Room", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Portfolio::new(catalog, &settings))?;

    Ok(())
}
