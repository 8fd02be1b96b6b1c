//! Line sources over local input: standard input and results files.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::source::LineSource;

/// Reads lines from standard input until EOF.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        StdinSource {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl LineSource for StdinSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines.next_line().await.context("reading stdin")
    }

    fn name(&self) -> &str {
        "stdin"
    }
}

/// Reads lines from a results file.
pub struct FileSource {
    path: String,
    lines: Lines<BufReader<File>>,
}

impl FileSource {
    pub async fn open(path: &str) -> Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("opening results file {}", path))?;
        Ok(FileSource {
            path: path.to_string(),
            lines: BufReader::new(file).lines(),
        })
    }
}

#[async_trait]
impl LineSource for FileSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .with_context(|| format!("reading {}", self.path))
    }

    fn name(&self) -> &str {
        &self.path
    }
}
