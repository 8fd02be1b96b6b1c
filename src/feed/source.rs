use anyhow::Result;
use async_trait::async_trait;

/// Trait that every results line source must implement.
#[async_trait]
pub trait LineSource: Send {
    /// Return the next raw line, or `None` once the source is exhausted.
    async fn next_line(&mut self) -> Result<Option<String>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
