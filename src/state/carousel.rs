/// Home-screen carousel clock
///
/// The timer runs if and only if the navigator is on the home view.
/// `sync` enforces that rule after every transition; `fire` filters the
/// ticks delivered by the iced subscription so that a stale stream (from
/// an earlier visit to home) can never advance the carousel.

use iced::Subscription;
use std::time::{Duration, Instant};
use tracing::debug;

use super::navigator::View;

/// Default time between carousel advances, in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    generation: u64,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct CarouselTimer {
    interval: Duration,
    /// Bumped on every arm, so each visit to home gets its own stream
    generation: u64,
    armed: Option<Armed>,
}

impl CarouselTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            armed: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Start or stop the timer to match the current view
    pub fn sync(&mut self, view: View, now: Instant) {
        match (view == View::Home, self.armed) {
            (true, None) => {
                self.generation += 1;
                self.armed = Some(Armed {
                    generation: self.generation,
                    deadline: now + self.interval,
                });
                debug!(generation = self.generation, "carousel timer started");
            }
            (false, Some(armed)) => {
                self.armed = None;
                debug!(generation = armed.generation, "carousel timer stopped");
            }
            _ => {}
        }
    }

    /// Decide whether a tick delivered at `at` should advance the carousel
    pub fn fire(&mut self, generation: u64, at: Instant) -> bool {
        match self.armed.as_mut() {
            Some(armed) if armed.generation == generation && at >= armed.deadline => {
                armed.deadline += self.interval;
                true
            }
            _ => false,
        }
    }

    /// Clock subscription for the armed timer, if any
    pub fn subscription(&self) -> Subscription<(u64, Instant)> {
        match self.armed {
            Some(armed) => iced::time::every(self.interval).with(armed.generation),
            None => Subscription::none(),
        }
    }
}

#[cfg(test)]
impl Default for CarouselTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn armed_generation(timer: &CarouselTimer) -> u64 {
        timer.armed.map(|a| a.generation).unwrap()
    }

    #[test]
    fn test_runs_only_on_home() {
        let start = Instant::now();
        let mut timer = CarouselTimer::default();
        assert!(!timer.is_running());

        timer.sync(View::Home, start);
        assert!(timer.is_running());

        for view in View::ALL.into_iter().filter(|v| *v != View::Home) {
            timer.sync(view, start);
            assert!(!timer.is_running(), "timer still running on {view:?}");
        }
    }

    #[test]
    fn test_staying_home_does_not_restart() {
        let start = Instant::now();
        let mut timer = CarouselTimer::default();
        timer.sync(View::Home, start);
        let generation = armed_generation(&timer);

        timer.sync(View::Home, start + ms(3000));
        assert_eq!(armed_generation(&timer), generation);
        assert!(timer.fire(generation, start + ms(4500)));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = CarouselTimer::default();
        timer.sync(View::Home, start);
        let generation = armed_generation(&timer);

        assert!(!timer.fire(generation, start + ms(4499)));
        assert!(timer.fire(generation, start + ms(4500)));
        assert!(!timer.fire(generation, start + ms(8000)));
        assert!(timer.fire(generation, start + ms(9000)));
    }

    #[test]
    fn test_reentering_home_restarts_window() {
        let start = Instant::now();
        let mut timer = CarouselTimer::default();
        timer.sync(View::Home, start);
        let first = armed_generation(&timer);

        // Leave just before the first tick would have fired
        timer.sync(View::About, start + ms(4400));
        assert!(!timer.fire(first, start + ms(4500)));

        let back = start + ms(4600);
        timer.sync(View::Home, back);
        let second = armed_generation(&timer);
        assert_ne!(first, second);

        // Ticks from the old stream are ignored
        assert!(!timer.fire(first, back + ms(5000)));
        // Nothing before a fresh interval, even though 9 s passed since start
        assert!(!timer.fire(second, back + ms(4499)));
        assert!(timer.fire(second, back + ms(4500)));
    }

    #[test]
    fn test_disarmed_timer_ignores_ticks() {
        let mut timer = CarouselTimer::new(ms(1000));
        assert!(!timer.fire(0, Instant::now() + ms(10_000)));
        assert_eq!(timer.interval(), ms(1000));
    }
}
