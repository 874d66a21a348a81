// ABOUTME: Performance monitoring utilities using tracing spans
// ABOUTME: Times operations such as theme resolution and warns when they exceed a budget

use std::time::{Duration, Instant};
use tracing::{Level, Span, field, span, warn};

/// Timer guard that records elapsed time when dropped
pub struct PerfTimer {
    span: Span,
    start: Instant,
    operation: &'static str,
    warn_threshold: Option<Duration>,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        let span = span!(Level::DEBUG, "perf_timer", operation, elapsed_ms = field::Empty);

        Self {
            span,
            start: Instant::now(),
            operation,
            warn_threshold: None,
        }
    }

    /// Operations taking longer than `threshold` log a warning when the timer finishes.
    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.warn_threshold = Some(threshold);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop timing now and return the elapsed time.
    pub fn finish(self) -> Duration {
        self.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        #[allow(clippy::cast_precision_loss)]
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

        self.span.record("elapsed_ms", elapsed_ms);

        if let Some(threshold) = self.warn_threshold
            && elapsed > threshold
        {
            #[allow(clippy::cast_precision_loss)]
            let threshold_ms = threshold.as_millis() as f64;
            warn!(
                operation = self.operation,
                elapsed_ms,
                threshold_ms,
                "Slow operation detected"
            );
        }
    }
}

/// Time a block of code with a [`PerfTimer`].
#[macro_export]
macro_rules! timed {
    ($name:expr, $code:block) => {{
        let _timer = $crate::performance::PerfTimer::new($name);
        $code
    }};
    ($name:expr, warn_threshold: $threshold:expr, $code:block) => {{
        let _timer = $crate::performance::PerfTimer::new($name).with_warn_threshold($threshold);
        $code
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_perf_timer_elapsed() {
        let timer = PerfTimer::new("test_operation");
        thread::sleep(Duration::from_millis(10));
        assert!(timer.finish() >= Duration::from_millis(10));
    }

    #[test]
    fn test_timed_macro_returns_block_value() {
        let result = timed!("test_macro", {
            thread::sleep(Duration::from_millis(1));
            42
        });
        assert_eq!(result, 42);
    }

    #[test]
    fn test_perf_timer_span_creation() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(
                expect::span()
                    .named("perf_timer")
                    .with_fields(expect::field("operation").with_value(&"resolve")),
            )
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("resolve");
            drop(timer);
        });

        handle.assert_finished();
    }

    #[test]
    fn test_perf_timer_with_warn_threshold() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf_timer"))
            .event(
                expect::event()
                    .at_level(Level::WARN)
                    .with_fields(expect::msg("Slow operation detected")),
            )
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("slow_resolve").with_warn_threshold(Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
            drop(timer);
        });

        handle.assert_finished();
    }

    #[test]
    fn test_fast_operation_does_not_warn() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf_timer"))
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let _timer = PerfTimer::new("fast").with_warn_threshold(Duration::from_secs(60));
        });

        handle.assert_finished();
    }

    #[test]
    fn test_timed_macro_with_tracing() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf_timer"))
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let result = timed!("timed_macro_test", { 7 * 6 });
            assert_eq!(result, 42);
        });

        handle.assert_finished();
    }
}
