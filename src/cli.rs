// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::{Params, TaskKind};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    crate::log::set_verbose(params.verbose);

    if params.list_teams {
        for name in crate::teams::CANONICAL_TEAMS {
            println!("{}", name);
        }
        return Ok(());
    }

    let summary = crate::runner::run(&params)?;
    logf!("Wrote {} row(s) to {}", summary.rows_written, summary.out_path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                params.task = match v.to_ascii_lowercase().as_str() {
                    "calendar" => TaskKind::Calendar,
                    "fix" => TaskKind::FixStandardization,
                    "merge" => TaskKind::MergePredictions,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };}
            "-i" | "--in" => {
                let v = args.next().ok_or("Missing input path")?;
                params.inputs.push(PathBuf::from(v));}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--list-teams" => params.list_teams = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
