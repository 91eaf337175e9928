// src/fix.rs
//
// One-shot repair for a historical standardization mistake: rows whose raw
// team field says "Independiente" were canonicalized as "Independiente
// Santa Fe" when they meant Independiente Medellín. Both the standardized
// name columns and the per-team one-hot indicator columns carry the error.
//
// Invariant restored here: for each side (Equipo / Oponente), the indicator
// columns of a corrected row form a one-hot encoding of that side's
// standardized name.

use std::error::Error;

use crate::csv::Table;
use crate::teams::CANONICAL_TEAMS;

/// The raw spelling that was mis-mapped.
pub const AMBIGUOUS_ALIAS: &str = "Independiente";
/// What it must standardize to.
pub const CORRECT_CANONICAL: &str = "Independiente Medellín";

/// Indicator values are numeric text in the historical CSVs.
const HOT: &str = "1";
const COLD: &str = "0";

/// The two column families in the processed stats tables.
const FAMILIES: [(&str, &str); 2] = [
    ("Equipo", "Equipo_Estandarizado"),
    ("Oponente", "Oponente_Estandarizado"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixSummary {
    pub rows_total: usize,
    pub teams_fixed: usize,
    pub opponents_fixed: usize,
}

/// Apply the correction in place. Fails only on a structurally unusable
/// table (required columns missing); row content never errors.
pub fn fix_standardization(table: &mut Table) -> Result<FixSummary, Box<dyn Error>> {
    let mut summary = FixSummary { rows_total: table.rows.len(), ..Default::default() };

    for (family_ix, (raw_col, std_col)) in FAMILIES.iter().enumerate() {
        let raw_ix = table
            .col(raw_col)
            .ok_or_else(|| format!("missing column: {raw_col}"))?;
        let std_ix = table
            .col(std_col)
            .ok_or_else(|| format!("missing column: {std_col}"))?;

        // The corrected team never had its indicator column; create it.
        let indicator = format!("{raw_col}_{CORRECT_CANONICAL}");
        if table.col(&indicator).is_none() {
            table.push_col(&indicator, COLD);
        }

        // Ragged rows from hand-edited files: pad so indexing is safe.
        let width = table.headers.len();
        for row in &mut table.rows {
            row.resize(width, s!());
        }

        // All indicator columns present for this family, in header order.
        let indicators: Vec<(usize, &'static str)> = CANONICAL_TEAMS
            .iter()
            .filter_map(|t| table.col(&format!("{raw_col}_{t}")).map(|ix| (ix, *t)))
            .collect();

        let mut fixed = 0usize;
        for row in &mut table.rows {
            if row[raw_ix] != AMBIGUOUS_ALIAS {
                continue;
            }
            row[std_ix] = s!(CORRECT_CANONICAL);
            // Re-synchronize the whole family, not just the two columns
            // the mistake touched: one-hot against the standardized name.
            for &(ix, team) in &indicators {
                row[ix] = s!(if team == CORRECT_CANONICAL { HOT } else { COLD });
            }
            fixed += 1;
        }

        if family_ix == 0 {
            summary.teams_fixed = fixed;
        } else {
            summary.opponents_fixed = fixed;
        }
    }

    Ok(summary)
}
