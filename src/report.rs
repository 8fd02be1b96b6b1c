//! Rendering of closed matchdays for stdout.

use serde::Serialize;
use std::str::FromStr;

/// Output encoding selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable block per matchday.
    Text,
    /// One JSON object per matchday, newline delimited.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format: {}. Use text or json", other)),
        }
    }
}

/// JSON shape for one closed matchday.
#[derive(Debug, Serialize)]
struct MatchdayReport<'a> {
    matchday: u32,
    table: Vec<TableRow<'a>>,
}

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    team: &'a str,
    points: u32,
}

/// Render one closed matchday.
///
/// The text form is a `Matchday N` header, one `<team>, <points> pt|pts`
/// row per entry, and a trailing blank line. The JSON form is one object
/// followed by a newline.
pub fn render(matchday: u32, rows: &[(String, u32)], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(matchday, rows),
        OutputFormat::Json => render_json(matchday, rows),
    }
}

fn render_text(matchday: u32, rows: &[(String, u32)]) -> String {
    let mut out = format!("Matchday {}\n", matchday);
    for (team, points) in rows {
        out.push_str(&format!("{}, {} {}\n", team, points, points_label(*points)));
    }
    out.push('\n');
    out
}

/// `pt` for exactly one point, `pts` otherwise (zero included).
fn points_label(points: u32) -> &'static str {
    if points == 1 {
        "pt"
    } else {
        "pts"
    }
}

fn render_json(matchday: u32, rows: &[(String, u32)]) -> String {
    let report = MatchdayReport {
        matchday,
        table: rows
            .iter()
            .map(|(team, points)| TableRow {
                team,
                points: *points,
            })
            .collect(),
    };
    // Serializing this shape cannot fail; fall back to an empty object
    // rather than panicking if it somehow does.
    let mut out = serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        pairs.iter().map(|(t, p)| (t.to_string(), *p)).collect()
    }

    #[test]
    fn test_text_block_shape() {
        let out = render(
            1,
            &rows(&[("Tarantulas", 6), ("Lions", 1), ("Grouches", 0)]),
            &OutputFormat::Text,
        );
        assert_eq!(
            out,
            "Matchday 1\nTarantulas, 6 pts\nLions, 1 pt\nGrouches, 0 pts\n\n"
        );
    }

    #[test]
    fn test_single_point_is_singular() {
        assert_eq!(points_label(1), "pt");
        assert_eq!(points_label(0), "pts");
        assert_eq!(points_label(2), "pts");
    }

    #[test]
    fn test_empty_matchday_renders_header_only() {
        let out = render(3, &[], &OutputFormat::Text);
        assert_eq!(out, "Matchday 3\n\n");
    }

    #[test]
    fn test_json_shape() {
        let out = render(2, &rows(&[("Lions", 4)]), &OutputFormat::Json);
        assert_eq!(
            out,
            "{\"matchday\":2,\"table\":[{\"team\":\"Lions\",\"points\":4}]}\n"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
