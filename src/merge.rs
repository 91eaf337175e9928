// src/merge.rs
//
// Concatenate the per-player prediction result tables into a single
// season-wide table, then rename the columns downstream consumers expect
// under their newer labels. Alignment is by column name: the merged header
// is the union (first file's order first, new columns appended as they
// appear), and cells absent from a source file become empty strings.
// No further schema validation — that is the contract.

use std::error::Error;
use std::path::PathBuf;

use crate::csv::{Delim, Table};
use crate::file::read_table;

/// Old label → new label, applied after concatenation.
pub const COLUMN_RENAMES: [(&str, &str); 4] = [
    ("Prediccion_Goles", "Prediccion_Entero"),
    ("Prediccion_Continua", "Prediccion_Decimal"),
    ("Promedio_Historico_vs_Oponente", "Promedio_Goles_vs_Oponente"),
    ("Confianza", "Confianza_Modelo"),
];

/// Read and merge all input files, in the order given.
pub fn merge_files(paths: &[PathBuf], delim: Delim) -> Result<Table, Box<dyn Error>> {
    let mut tables = Vec::with_capacity(paths.len());
    for p in paths {
        tables.push(read_table(p, delim)?);
    }
    let mut merged = concat_tables(tables);
    let renamed = rename_columns(&mut merged);
    logd!("Merged {} file(s), {} column(s) renamed", paths.len(), renamed);
    Ok(merged)
}

/// Row-wise concatenation with union-of-columns alignment.
pub fn concat_tables(tables: Vec<Table>) -> Table {
    let mut merged = Table::default();

    for t in &tables {
        for h in &t.headers {
            if !merged.headers.contains(h) {
                merged.headers.push(h.clone());
            }
        }
    }

    for t in &tables {
        // merged column -> source column, computed once per file
        let src_ix: Vec<Option<usize>> = merged.headers.iter().map(|h| t.col(h)).collect();
        for row in &t.rows {
            merged.rows.push(
                src_ix
                    .iter()
                    .map(|src| src.and_then(|ix| row.get(ix)).cloned().unwrap_or_default())
                    .collect(),
            );
        }
    }

    merged
}

/// Apply COLUMN_RENAMES to the header row; returns how many matched.
pub fn rename_columns(table: &mut Table) -> usize {
    let mut renamed = 0;
    for h in &mut table.headers {
        if let Some(&(_, new)) = COLUMN_RENAMES.iter().find(|(old, _)| old == h) {
            *h = s!(new);
            renamed += 1;
        }
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| s!(*c)).collect())
                .collect(),
        }
    }

    #[test]
    fn concat_preserves_file_then_row_order() {
        let a = table(&["Jugador", "Confianza"], &[&["Bacca", "0.9"], &["Moreno", "0.8"]]);
        let b = table(&["Jugador", "Confianza"], &[&["Rodallega", "0.7"]]);
        let m = concat_tables(vec![a, b]);
        assert_eq!(m.rows.len(), 3);
        assert_eq!(m.rows[0][0], "Bacca");
        assert_eq!(m.rows[2][0], "Rodallega");
    }

    #[test]
    fn mismatched_columns_become_blank_or_extra() {
        let a = table(&["Jugador", "Confianza"], &[&["Bacca", "0.9"]]);
        let b = table(&["Jugador", "Goles"], &[&["Castro", "2"]]);
        let m = concat_tables(vec![a, b]);

        assert_eq!(m.headers, vec![s!("Jugador"), s!("Confianza"), s!("Goles")]);
        assert_eq!(m.rows[0], vec![s!("Bacca"), s!("0.9"), s!("")]);
        assert_eq!(m.rows[1], vec![s!("Castro"), s!(""), s!("2")]);
    }

    #[test]
    fn renames_only_the_four_known_columns() {
        let mut t = table(
            &["Jugador", "Prediccion_Goles", "Prediccion_Continua", "Confianza", "Fecha"],
            &[],
        );
        let n = rename_columns(&mut t);
        assert_eq!(n, 3);
        assert_eq!(
            t.headers,
            vec![
                s!("Jugador"),
                s!("Prediccion_Entero"),
                s!("Prediccion_Decimal"),
                s!("Confianza_Modelo"),
                s!("Fecha"),
            ]
        );
    }
}
