use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "sales";

/// Forwards business-layer log lines to `tracing` under the `sales` target,
/// so `RUST_LOG=sales=debug` narrows output to use cases.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(filter: &str, log: impl FnOnce(&TracingLogger)) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || log(&TracingLogger));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn should_emit_use_case_lines_under_sales_target() {
        let output = capture("sales=info", |logger| {
            logger.info("Found 3 sales");
            logger.debug("hidden at info level");
        });

        assert!(output.contains("sales: Found 3 sales"));
        assert!(!output.contains("hidden at info level"));
    }

    #[test]
    fn should_be_silenced_by_target_filter() {
        let output = capture("sales=off", |logger| logger.error("Datamart unreadable"));

        assert!(output.is_empty());
    }
}
