// tests/calendar_e2e.rs
use std::fs;
use std::path::PathBuf;

use liga_clean::csv::Delim;
use liga_clean::params::{Params, TaskKind};
use liga_clean::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("liga_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const CALENDAR_TXT: &str = "\
LIGA BETPLAY DIMAYOR I-2025

Fecha 1
Lunes 3 de febrero
-Junior vs. Millonarios
-Nacional vs. Santa Fe

Fecha 16
-Cali vs. Pererira
";

#[test]
fn calendar_txt_becomes_a_csv_table() {
    let dir = tmp_dir("calendar_csv");
    let input = dir.join("calendario_2025.txt");
    fs::write(&input, CALENDAR_TXT).unwrap();
    let out = dir.join("calendario.csv");

    let mut params = Params::new();
    params.task = TaskKind::Calendar;
    params.inputs.push(input);
    params.out = Some(out.clone());

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.rows_written, 3);
    assert_eq!(summary.out_path, out);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "RoundNumber,Date,Home,Away");
    assert_eq!(lines[1], "1,2025-02-03,Junior,Millonarios");
    assert_eq!(lines[2], "1,2025-02-03,Atlético Nacional,Independiente Santa Fe");
    // round 16 had no date line; the fallback date applies
    assert_eq!(lines[3], "16,2025-04-26,Deportivo Cali,Pereira");
}

#[test]
fn out_directory_hint_gets_the_default_filename() {
    let dir = tmp_dir("calendar_dir_hint");
    let input = dir.join("calendario_2025.txt");
    fs::write(&input, CALENDAR_TXT).unwrap();

    let mut params = Params::new();
    params.task = TaskKind::Calendar;
    params.inputs.push(input);
    params.out = Some(dir.clone());

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.out_path, dir.join("calendario_2025.csv"));
    assert!(summary.out_path.is_file());
}

#[test]
fn tsv_format_is_honored() {
    let dir = tmp_dir("calendar_tsv");
    let input = dir.join("calendario_2025.txt");
    fs::write(&input, CALENDAR_TXT).unwrap();

    let mut params = Params::new();
    params.task = TaskKind::Calendar;
    params.format = Delim::Tsv;
    params.inputs.push(input);
    params.out = Some(dir.clone());

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.out_path, dir.join("calendario_2025.tsv"));
    let text = fs::read_to_string(&summary.out_path).unwrap();
    assert!(text.starts_with("RoundNumber\tDate\tHome\tAway"));
}

#[test]
fn missing_input_file_fails_fast() {
    let dir = tmp_dir("calendar_missing");

    let mut params = Params::new();
    params.task = TaskKind::Calendar;
    params.inputs.push(dir.join("no_such_file.txt"));
    params.out = Some(dir.join("out.csv"));

    let err = runner::run(&params).unwrap_err().to_string();
    assert!(err.contains("no_such_file.txt"), "unexpected error: {err}");
    // fail fast: no partial output
    assert!(!dir.join("out.csv").exists());
}

#[test]
fn calendar_requires_exactly_one_input() {
    let mut params = Params::new();
    params.task = TaskKind::Calendar;
    assert!(runner::run(&params).is_err());
}
