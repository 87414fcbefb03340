//! Practices command for listing the catalogue.

use std::io::Write;

use anyhow::{Context, Result};
use kt_core::practice::{sorted_by_order, user_added};
use kt_core::{PracticeId, PracticeOrigin};
use serde::Serialize;

use crate::Config;

#[derive(Serialize)]
struct PracticeJson<'a> {
    id: &'a PracticeId,
    name: &'a str,
    duration: i64,
    order: i64,
    learned: bool,
    origin: PracticeOrigin,
}

/// Run the practices command.
pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let practices = sorted_by_order(&config.practices);
    let is_learned = |id: &PracticeId| config.learned.contains(id);

    if json {
        let output: Vec<PracticeJson<'_>> = practices
            .iter()
            .map(|p| PracticeJson {
                id: &p.id,
                name: &p.name,
                duration: p.duration,
                order: p.order,
                learned: is_learned(&p.id),
                origin: p.origin(),
            })
            .collect();
        let json_str = serde_json::to_string_pretty(&output).context("failed to serialize JSON")?;
        writeln!(writer, "{json_str}")?;
        return Ok(());
    }

    if practices.is_empty() {
        writeln!(writer, "No practices configured.")?;
        return Ok(());
    }

    let learned_count = practices.iter().filter(|p| is_learned(&p.id)).count();
    writeln!(
        writer,
        "Practices ({learned_count} of {} learned)",
        practices.len()
    )?;

    for practice in &practices {
        let mark = if is_learned(&practice.id) { "x" } else { " " };
        let origin = practice.origin();
        let suffix = if origin.is_user_added() {
            format!(" [{origin}]")
        } else {
            String::new()
        };
        writeln!(
            writer,
            "[{mark}] {:>2}. {} ({} min){suffix}",
            practice.order, practice.name, practice.duration
        )?;
    }

    let added = user_added(&practices).len();
    if added > 0 {
        writeln!(writer)?;
        writeln!(writer, "{added} user-added practice(s)")?;
    }

    Ok(())
}
