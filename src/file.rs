// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::{self, Delim, Table};

/// Read a delimited file into a Table (first row = headers).
/// I/O and encoding problems are the one hard failure in this tool:
/// surface them, never emit partial output.
pub fn read_table(path: &Path, delim: Delim) -> Result<Table, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("read {}: {}", path.display(), e))?;
    Ok(csv::into_table(csv::parse_rows(&text, delim.ch())))
}

/// Write a Table to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_table(
    path: &Path,
    table: &Table,
    delim: Delim,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = csv::table_to_string(table, delim.ch());
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Resolve the effective output path: `-o` may name a file or a directory
/// (trailing separator or existing dir); directories get `default_filename`.
pub fn resolve_out_path(
    user_o: Option<&Path>,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let Some(p) = user_o else {
        return Ok(PathBuf::from(default_filename));
    };
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
