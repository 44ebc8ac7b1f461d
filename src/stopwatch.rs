//! Scoped timer reporting how long an encode took.

use std::time::{Duration, Instant};

/// Starts timing when created and logs the elapsed whole minutes when dropped.
///
/// ```
/// use reelpress::stopwatch::Stopwatch;
///
/// let watch = Stopwatch::start("Encoding Heat");
/// assert_eq!(watch.minutes(), 0);
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    label: String,
    started: Instant,
}

impl Stopwatch {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time in whole minutes, rounded down.
    pub fn minutes(&self) -> u64 {
        self.elapsed().as_secs() / 60
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        tracing::info!("{} took {} minutes", self.label, self.minutes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_grows() {
        let watch = Stopwatch::start("test");
        std::thread::sleep(Duration::from_millis(5));
        assert!(watch.elapsed() >= Duration::from_millis(5));
        assert_eq!(watch.minutes(), 0);
    }
}
