//! Input plumbing: line sources and the feed pump.
//!
//! ```text
//!   StdinSource / FileSource / SyntheticFixtures
//!        │ next_line()
//!        ▼
//!   start_line_feed (background task)
//!        │ trims, numbers, drops blank lines
//!        ▼ mpsc (single consumer)
//!   league-table loop in main
//! ```

pub mod input;
pub mod source;
pub mod synthetic;

pub use input::{FileSource, StdinSource};
pub use source::LineSource;
pub use synthetic::SyntheticFixtures;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// One trimmed, non-empty input line, tagged with its 1-based position in
/// the raw stream for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLine {
    pub number: u64,
    pub text: String,
}

/// Spawns a background task that drains `source` and forwards its lines
/// through the returned channel. Lines are trimmed of surrounding
/// whitespace and blank lines are dropped (they keep their line numbers).
/// The channel closes at end of input or on a read error; the receiver
/// cannot tell the two apart, so the pump's join handle carries the read
/// error and `Ok` means the source was drained cleanly.
pub fn start_line_feed(
    mut source: Box<dyn LineSource>,
) -> (mpsc::Receiver<FeedLine>, JoinHandle<Result<()>>) {
    let (tx, rx) = mpsc::channel(1024);

    let pump = tokio::spawn(async move {
        info!("Results feed started ({})", source.name());
        let mut number = 0u64;
        while let Some(raw) = source.next_line().await? {
            number += 1;
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            let line = FeedLine {
                number,
                text: text.to_string(),
            };
            // send() applies backpressure so a slow consumer never
            // loses lines; a closed receiver means shutdown.
            if tx.send(line).await.is_err() {
                break;
            }
        }
        Ok(())
    });

    (rx, pump)
}
