use web_time::{Duration, Instant};

/// Elapsed play time. Runs from construction until [`Stopwatch::stop`].
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            ended_at: None,
        }
    }

    /// Freezes the elapsed time. Later calls keep the first stop time.
    pub fn stop(&mut self) {
        if self.ended_at.is_none() {
            self.ended_at = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.ended_at
            .unwrap_or_else(Instant::now)
            .saturating_duration_since(self.started_at)
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
