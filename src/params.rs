// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

// Default output file stems (extension follows --format)
pub const DEFAULT_CALENDAR_STEM: &str = "calendario_2025";
pub const DEFAULT_FIX_STEM: &str = "goleadores_corregidos";
pub const DEFAULT_MERGE_STEM: &str = "predicciones_torneo2025";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Calendar text → match table
    Calendar,
    /// Repair the Independiente mis-standardization
    FixStandardization,
    /// Concatenate prediction tables and rename columns
    MergePredictions,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub task: TaskKind,
    pub inputs: Vec<PathBuf>,   // one file (calendar/fix) or many (merge)
    pub out: Option<PathBuf>,   // file, or directory to place the default name in
    pub format: Delim,
    pub list_teams: bool,       // print canonical team list then exit
    pub verbose: bool,          // enable logd! lines
}

impl Params {
    pub fn new() -> Self {
        Self {
            task: TaskKind::Calendar,
            inputs: Vec::new(),
            out: None,
            format: Delim::Csv,
            list_teams: false,
            verbose: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
