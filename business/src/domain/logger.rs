/// Logging port for the business layer.
///
/// Use cases never touch `tracing` directly; the presentation layer injects an adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
