// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod calendar;
pub mod cli;
pub mod csv;
pub mod file;
pub mod fix;
pub mod merge;
pub mod params;
pub mod runner;
pub mod teams;
