use clap::Parser;

use crate::report::OutputFormat;

/// League standings from a feed of match results
#[derive(Parser, Debug, Clone)]
#[command(name = "matchday", version, about)]
pub struct Config {
    /// Results file to read ("-" or omitted reads stdin)
    #[arg(value_name = "RESULTS")]
    pub input: Option<String>,

    /// Number of teams shown per matchday (0 prints the whole table)
    #[arg(long, env = "MATCHDAY_TOP", default_value = "3")]
    pub top: usize,

    /// Output format: text or json
    #[arg(long, env = "MATCHDAY_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Generate this many matchdays of synthetic results instead of reading a feed
    #[arg(long, value_name = "ROUNDS")]
    pub simulate: Option<u32>,

    /// Number of clubs in the synthetic league (even, at least 2)
    #[arg(long, env = "MATCHDAY_TEAMS", default_value = "6")]
    pub teams: usize,

    /// Seed for the synthetic score generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long, env = "MATCHDAY_STRICT", default_value = "false")]
    pub strict: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.simulate.is_some() && self.input.is_some() {
            anyhow::bail!("--simulate replaces the results feed; drop the RESULTS argument");
        }
        if let Some(rounds) = self.simulate {
            if rounds == 0 {
                anyhow::bail!("--simulate needs at least one matchday");
            }
            if self.teams < 2 || self.teams % 2 != 0 {
                anyhow::bail!(
                    "--teams must be an even number of clubs (at least 2); byes are not modelled"
                );
            }
        }
        Ok(())
    }
}
