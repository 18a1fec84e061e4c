use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::factors::SCALE_MAX;
use crate::scoring::{AttributeKey, ScoredState};

/// Attribute groups as shown in the breakdown
const GROUPS: [(&str, &[AttributeKey]); 3] = [
    (
        "Cultural",
        &[
            AttributeKey::Conservativeness,
            AttributeKey::LowCrime,
            AttributeKey::Education,
            AttributeKey::PopulationDensity,
        ],
    ),
    (
        "Economical",
        &[
            AttributeKey::Cost,
            AttributeKey::PropertyAppreciation,
            AttributeKey::PropertyTaxes,
        ],
    ),
    (
        "Aesthetics",
        &[
            AttributeKey::Coastal,
            AttributeKey::Beauty,
            AttributeKey::AverageTemp,
        ],
    ),
];

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals ("312.50")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Traffic-light band of a 0-based position within `total` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Top,
    Middle,
    Bottom,
}

fn band(position: usize, total: usize) -> Band {
    if total == 0 {
        return Band::Middle;
    }
    let third = position * 3 / total;
    match third {
        0 => Band::Top,
        1 => Band::Middle,
        _ => Band::Bottom,
    }
}

fn paint(text: &str, band: Band) -> String {
    match band {
        Band::Top => text.green().to_string(),
        Band::Middle => text.yellow().to_string(),
        Band::Bottom => text.red().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked states as a table with columns: Index, Score, Name, Coast marker.
/// No headers.
/// Index column: 3 chars (fits "50."), right-aligned
/// Score column: 8 chars wide (fits "-1234.56"), right-aligned
pub fn format_ranked_table(states: &[ScoredState], use_colors: bool) -> String {
    if states.is_empty() {
        return "No states to rank.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 8;
    let separator = "  ";
    let marker_width = 7; // "(coast)"

    states
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>width$}.", idx + 1, width = index_width - 1);
            let score_padded = format!("{:>width$}", format_score(scored.score), width = score_width);
            let marker = if scored.state.is_coastal { "(coast)" } else { "" };

            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + marker_width;
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&scored.state.name, width - fixed_width)
                }
                Some(_) => truncate_name(&scored.state.name, 20),
                None => scored.state.name.clone(),
            };

            let line = if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    paint(&index_str, band(idx, states.len())),
                    score_padded.bold(),
                    separator,
                    name,
                    separator,
                    marker.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, marker
                )
            };
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked states as tab-separated values for scripting
/// Columns: rank, score, name (no headers, no colors)
pub fn format_tsv(states: &[ScoredState]) -> String {
    states
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            format!(
                "{}\t{}\t{}",
                idx + 1,
                format_score(scored.score),
                scored.state.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked states as a pretty JSON array
pub fn format_json(states: &[ScoredState]) -> Result<String> {
    serde_json::to_string_pretty(states).context("Failed to serialize ranking to JSON")
}

/// Raw value of an attribute as shown next to its points.
/// Dataset ranks are on the fixed `SCALE_MAX` scale; the appreciation rank is
/// computed over the `total` states in the ranking.
fn raw_value(scored: &ScoredState, attribute: AttributeKey, total: usize) -> String {
    let state = &scored.state;
    let rank = |value: f64| format!("#{} out of {}", value, SCALE_MAX);
    match attribute {
        AttributeKey::Conservativeness => rank(state.conservativeness),
        AttributeKey::LowCrime => format!("{} in crime", rank(state.crime_rate)),
        AttributeKey::Education => rank(state.education),
        AttributeKey::PopulationDensity => format!("{}/sq mi", state.population_per_square_mile),
        AttributeKey::Cost => rank(state.cost),
        AttributeKey::PropertyAppreciation => format!(
            "{}% (#{} out of {})",
            state.property_appreciation,
            scored.appreciation_rank + 1,
            total
        ),
        AttributeKey::PropertyTaxes => rank(state.property_taxes),
        AttributeKey::Coastal => (if state.is_coastal { "yes" } else { "no" }).to_string(),
        AttributeKey::Beauty => rank(state.beauty),
        AttributeKey::AverageTemp => format!("{}F", state.average_temp),
    }
}

/// Format a single state's score breakdown (multi-line).
/// `position` is the 0-based place in a ranking of `total` states.
pub fn format_state_detail(
    scored: &ScoredState,
    position: usize,
    total: usize,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let header = format!("#{} {}", position + 1, scored.state.name);
    lines.push(if use_colors {
        paint(&header, band(position, total)).bold().to_string()
    } else {
        header
    });

    for (group, attributes) in GROUPS {
        lines.push(if use_colors {
            format!("  {}", group.underline())
        } else {
            format!("  {}", group)
        });

        for attribute in attributes {
            let points = scored
                .breakdown
                .get(*attribute)
                .map(|f| format!("{} (x{})", format_score(f.points), f.multiplier))
                .unwrap_or_else(|| "-".to_string());
            let label = format!("{}:", attribute.label());
            lines.push(format!(
                "    {:<28}{:<26}{:>16}",
                label,
                raw_value(scored, *attribute, total),
                points
            ));
        }
    }

    let total_line = format!("  Total Score: {}", format_score(scored.score));
    lines.push(if use_colors {
        total_line.bold().to_string()
    } else {
        total_line
    });

    lines.join("\n")
}
