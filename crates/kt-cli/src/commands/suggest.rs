//! Suggest command implementation.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use kt_core::practice::{move_practice, remove_user_added, toggle_learned};
use kt_core::{
    Combination, Direction, Practice, PracticeId, generate_combinations, learned_practices,
};
use serde::Serialize;

use super::util::{end_time, format_clock, parse_budget};
use crate::{Config, WhatIf};

/// Result of the suggest command for JSON output.
#[derive(Serialize)]
struct SuggestOutput<'a> {
    budget: i64,
    starts_at: String,
    combinations: Vec<CombinationJson<'a>>,
}

#[derive(Serialize)]
struct CombinationJson<'a> {
    #[serde(flatten)]
    combination: &'a Combination<'a>,
    ends_at: String,
}

/// Run the suggest command.
///
/// `minutes` is free text and falls back to the configured available time.
/// `what_if` adjusts the catalogue and learned marks for this run only.
pub fn run<W, Tz>(
    writer: &mut W,
    config: &Config,
    minutes: Option<&str>,
    what_if: &WhatIf,
    json: bool,
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let budget = parse_budget(minutes.unwrap_or(&config.available_time));
    let (catalogue, learned) = apply_what_if(config, what_if)?;

    let practices = learned_practices(&catalogue, &learned);
    tracing::debug!(budget, learned = practices.len(), "suggesting sessions");

    let combinations = generate_combinations(&practices, budget);

    if json {
        output_json(writer, budget, &combinations, now)
    } else {
        output_human(writer, budget, &combinations, now)
    }
}

/// Applies the what-if adjustments to copies of the configured catalogue
/// and learned marks.
///
/// User-added practices are dropped first, then moves run (all `--move-up`
/// in order, then all `--move-down`), then toggles.
fn apply_what_if(config: &Config, what_if: &WhatIf) -> Result<(Vec<Practice>, Vec<PracticeId>)> {
    let mut catalogue = if what_if.builtin_only {
        remove_user_added(&config.practices)
    } else {
        config.practices.clone()
    };

    let moves = what_if
        .move_up
        .iter()
        .map(|raw| (raw, Direction::Up, "--move-up"))
        .chain(what_if.move_down.iter().map(|raw| (raw, Direction::Down, "--move-down")));
    for (raw, direction, flag) in moves {
        let id = parse_id(&catalogue, raw, flag)?;
        catalogue = move_practice(&catalogue, &id, direction);
    }

    let mut learned = config.learned.clone();
    for raw in &what_if.toggle {
        let id = parse_id(&catalogue, raw, "--toggle")?;
        learned = toggle_learned(&learned, &id);
    }

    Ok((catalogue, learned))
}

fn parse_id(catalogue: &[Practice], raw: &str, flag: &str) -> Result<PracticeId> {
    let id = PracticeId::new(raw).with_context(|| format!("invalid {flag} value"))?;
    if !catalogue.iter().any(|p| p.id == id) {
        tracing::warn!(%id, flag, "practice is not in the catalogue");
    }
    Ok(id)
}

fn output_json<W, Tz>(
    writer: &mut W,
    budget: i64,
    combinations: &[Combination<'_>],
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let output = SuggestOutput {
        budget,
        starts_at: format_clock(now),
        combinations: combinations
            .iter()
            .map(|c| CombinationJson {
                combination: c,
                ends_at: format_clock(&end_time(now, c.total_duration)),
            })
            .collect(),
    };

    let json_str = serde_json::to_string_pretty(&output).context("failed to serialize JSON")?;
    writeln!(writer, "{json_str}")?;
    Ok(())
}

fn output_human<W, Tz>(
    writer: &mut W,
    budget: i64,
    combinations: &[Combination<'_>],
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start = format_clock(now);

    writeln!(writer, "Session suggestions")?;
    writeln!(writer, "Combinations that fit in {budget} min")?;
    writeln!(writer, "Current time: {start}")?;

    if combinations.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "No valid combinations found. Try increasing your time or selecting more practices."
        )?;
        return Ok(());
    }

    for combination in combinations {
        let title: Vec<&str> = combination
            .practices
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let count = combination.len();
        let plural = if count == 1 { "" } else { "s" };

        writeln!(writer)?;
        writeln!(writer, "{}", title.join(" → "))?;
        writeln!(
            writer,
            "Duration: {} min ({count} practice{plural})",
            combination.total_duration
        )?;
        writeln!(
            writer,
            "Start: {start} • End: {}",
            format_clock(&end_time(now, combination.total_duration))
        )?;
        for (i, practice) in combination.practices.iter().enumerate() {
            writeln!(
                writer,
                "  {}. {} ({} min)",
                i + 1,
                practice.name,
                practice.duration
            )?;
        }
    }

    Ok(())
}
