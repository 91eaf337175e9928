// src/runner.rs
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    calendar::{self, MatchRecord},
    file::{read_table, resolve_out_path, write_table},
    fix, merge,
    params::{Params, TaskKind, DEFAULT_CALENDAR_STEM, DEFAULT_FIX_STEM, DEFAULT_MERGE_STEM},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub rows_written: usize,
}

/// Top-level runner: dispatch on task kind and run.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    match params.task {
        TaskKind::Calendar => run_calendar(params),
        TaskKind::FixStandardization => run_fix(params),
        TaskKind::MergePredictions => run_merge(params),
    }
}

/* ---------------- calendar ---------------- */

fn run_calendar(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let input = single_input(params, "calendar")?;
    let text = fs::read_to_string(input)
        .map_err(|e| format!("read {}: {}", input.display(), e))?;

    let records = calendar::parse_text(&text);
    log_calendar_summary(&records);

    let table = calendar::to_table(&records);
    let out = out_path(params, DEFAULT_CALENDAR_STEM)?;
    write_table(&out, &table, params.format)?;

    Ok(RunSummary { out_path: out, rows_written: table.rows.len() })
}

/// The verification report the operator eyeballs after a run: match count,
/// matches per round, and how many distinct names survived standardization
/// (more than 20 means an alias is missing from the table).
fn log_calendar_summary(records: &[MatchRecord]) {
    logf!("Parsed {} match(es)", records.len());

    let mut per_round: BTreeMap<u32, usize> = BTreeMap::new();
    for r in records {
        *per_round.entry(r.round).or_default() += 1;
    }
    for (round, n) in &per_round {
        logd!("Fecha {}: {} partido(s)", round, n);
    }

    let mut names: BTreeSet<&str> = BTreeSet::new();
    for r in records {
        names.insert(&r.home);
        names.insert(&r.away);
    }
    logf!("{} distinct team name(s) after standardization", names.len());

    let undated = records.iter().filter(|r| r.date.is_none()).count();
    if undated > 0 {
        logf!("{} match(es) left without a resolvable date", undated);
    }
}

/* ---------------- fix ---------------- */

fn run_fix(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let input = single_input(params, "fix")?;
    let mut table = read_table(input, params.format)?;

    let summary = fix::fix_standardization(&mut table)?;
    logf!(
        "Fixed {} team-side and {} opponent-side row(s) of {}",
        summary.teams_fixed,
        summary.opponents_fixed,
        summary.rows_total
    );

    let out = out_path(params, DEFAULT_FIX_STEM)?;
    write_table(&out, &table, params.format)?;

    Ok(RunSummary { out_path: out, rows_written: table.rows.len() })
}

/* ---------------- merge ---------------- */

fn run_merge(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    if params.inputs.is_empty() {
        return Err("merge needs at least one -i <file>".into());
    }
    let table = merge::merge_files(&params.inputs, params.format)?;

    let out = out_path(params, DEFAULT_MERGE_STEM)?;
    write_table(&out, &table, params.format)?;

    Ok(RunSummary { out_path: out, rows_written: table.rows.len() })
}

/* ---------------- helpers ---------------- */

fn single_input<'a>(params: &'a Params, task: &str) -> Result<&'a Path, Box<dyn Error>> {
    match params.inputs.as_slice() {
        [one] => Ok(one),
        [] => Err(format!("{task} needs -i <file>").into()),
        _ => Err(format!("{task} takes exactly one -i <file>").into()),
    }
}

fn out_path(params: &Params, stem: &str) -> Result<PathBuf, Box<dyn Error>> {
    let default_name = format!("{stem}.{}", params.format.ext());
    resolve_out_path(params.out.as_deref(), &default_name)
}
