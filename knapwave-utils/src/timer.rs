use std::time::{Duration, Instant};

/// Wall clock timer around a single section of work.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Runs `f` and returns its output together with how long it took.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let stopwatch = Stopwatch::start();
    let output = f();
    (output, stopwatch.elapsed())
}
