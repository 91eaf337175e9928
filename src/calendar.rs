// src/calendar.rs
//
// Line scanner for the hand-written season calendar. The source text is
// informal: repeated blocks of a `Fecha <N>` round header, usually followed
// by a weekday line ("Lunes 3 de febrero"), then zero or more match lines
// of the form `-<home> vs. <away>`. Anything else is noise and skipped.
//
// Nothing in here is fatal. A round with no parseable date degrades to a
// fallback date (rounds 16-20 were published without date lines) or to an
// empty date; a malformed match line produces no record.

use chrono::NaiveDate;

use crate::csv::Table;
use crate::teams;

/// All dates in the calendar belong to this season.
pub const SEASON_YEAR: i32 = 2025;

/// Column shape of the exported calendar table.
pub const OUTPUT_HEADERS: [&str; 4] = ["RoundNumber", "Date", "Home", "Away"];

const WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Kickoff dates for the rounds published without a date line.
/// Week-over-week continuation of the dated part of the calendar.
const ROUND_DATE_FALLBACK: [(u32, u32, u32); 5] = [
    (16, 4, 26),
    (17, 5, 3),
    (18, 5, 10),
    (19, 5, 17),
    (20, 5, 24),
];

/// One fixture as extracted from the calendar text.
/// Team names are already canonical (see `teams::standardize`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub round: u32,
    pub date: Option<NaiveDate>,
    pub home: String,
    pub away: String,
}

impl MatchRecord {
    /// Shape into an output row: date as ISO-8601 or blank.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.round.to_string(),
            self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            self.home.clone(),
            self.away.clone(),
        ]
    }
}

/// Parse the full calendar text into match records, encounter order.
pub fn parse_text(text: &str) -> Vec<MatchRecord> {
    parse_lines(text.lines())
}

/// Single forward pass. State carried across lines: the current round,
/// the current date, and whether the next line may be the round's date
/// line (only the line immediately after a header is inspected).
pub fn parse_lines<'a, I>(lines: I) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut round: Option<u32> = None;
    let mut date: Option<NaiveDate> = None;
    let mut expect_date_line = false;

    for raw in lines {
        let line = raw.trim();

        if let Some(n) = parse_round_header(line) {
            round = Some(n);
            date = fallback_date(n);
            expect_date_line = true;
            continue;
        }

        if expect_date_line {
            expect_date_line = false;
            if is_weekday_line(line) {
                match extract_date(line) {
                    Some(d) => date = Some(d),
                    // Keep whatever the fallback table seeded.
                    None => logd!(
                        "Fecha {}: weekday line without a usable date: {:?}",
                        round.unwrap_or(0),
                        line
                    ),
                }
                continue; // a date line is never also a match line
            }
        }

        if let Some((home, away)) = parse_match_line(line) {
            match round {
                Some(n) => records.push(MatchRecord {
                    round: n,
                    date,
                    home: teams::standardize(&home),
                    away: teams::standardize(&away),
                }),
                None => logd!("Match line before any round header, dropped: {:?}", line),
            }
        }
    }

    records
}

/// Shape a record sequence into the exported table.
pub fn to_table(records: &[MatchRecord]) -> Table {
    Table {
        headers: OUTPUT_HEADERS.iter().map(|h| s!(*h)).collect(),
        rows: records.iter().map(MatchRecord::to_row).collect(),
    }
}

/* ---------------- line classification ---------------- */

/// `Fecha <N>` at the start of the line; trailing text is tolerated.
fn parse_round_header(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("Fecha ")?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// A date line is recognized by containing a weekday name (any case).
fn is_weekday_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    WEEKDAYS.iter().any(|d| lower.contains(d))
}

/// `-<home> vs. <away>`. Either side empty → not a match line.
fn parse_match_line(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix('-')?;
    let sep = rest.find("vs.")?;
    let home = rest[..sep].trim();
    let away = rest[sep + "vs.".len()..].trim();
    if home.is_empty() || away.is_empty() {
        return None;
    }
    Some((s!(home), s!(away)))
}

/* ---------------- date resolution ---------------- */

/// Pre-seeded date for rounds the published calendar left undated.
pub fn fallback_date(round: u32) -> Option<NaiveDate> {
    ROUND_DATE_FALLBACK
        .iter()
        .find(|&&(n, _, _)| n == round)
        .and_then(|&(_, m, d)| NaiveDate::from_ymd_opt(SEASON_YEAR, m, d))
}

/// Find a `<day> de <month-name>` phrase and combine it with the season
/// year. Returns None when the phrase is absent or names no real date
/// (e.g. "31 de febrero").
fn extract_date(line: &str) -> Option<NaiveDate> {
    let lower = line.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    for w in words.windows(3) {
        if w[1] != "de" {
            continue;
        }
        let day: u32 = match w[0].parse() {
            Ok(d) => d,
            Err(_) => continue,
        };
        let month_word = w[2].trim_matches(|c: char| !c.is_alphabetic());
        let Some(month_ix) = MONTHS.iter().position(|m| *m == month_word) else {
            continue;
        };
        return NaiveDate::from_ymd_opt(SEASON_YEAR, month_ix as u32 + 1, day);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_header_date_line_and_match() {
        let recs = parse_lines(["Fecha 1", "Lunes 3 de febrero", "-Junior vs. Millonarios"]);
        assert_eq!(recs.len(), 1);
        assert_eq!(
            recs[0],
            MatchRecord {
                round: 1,
                date: Some(date(2025, 2, 3)),
                home: s!("Junior"),
                away: s!("Millonarios"),
            }
        );
    }

    #[test]
    fn undated_round_takes_fallback_and_typo_is_corrected() {
        let recs = parse_lines(["Fecha 16", "-Nacional vs. Pererira"]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].round, 16);
        assert_eq!(recs[0].date, Some(date(2025, 4, 26)));
        assert_eq!(recs[0].home, "Atlético Nacional");
        assert_eq!(recs[0].away, "Pereira");
    }

    #[test]
    fn match_before_any_header_is_dropped() {
        let recs = parse_lines(["-Junior vs. Millonarios"]);
        assert!(recs.is_empty());
    }

    #[test]
    fn round_and_date_carry_forward_until_next_header() {
        let recs = parse_lines([
            "Fecha 2",
            "Sábado 8 de febrero",
            "-Cali vs. Tolima",
            "-Envigado vs. Pasto",
            "Fecha 3",
            "-Chicó vs. Llaneros",
        ]);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].round, 2);
        assert_eq!(recs[1].round, 2);
        assert_eq!(recs[1].date, Some(date(2025, 2, 8)));
        assert_eq!(recs[1].home, "Envigado");
        assert_eq!(recs[1].away, "Deportivo Pasto");
        // Fecha 3 has no date line and no fallback entry
        assert_eq!(recs[2].round, 3);
        assert_eq!(recs[2].date, None);
    }

    #[test]
    fn malformed_date_line_keeps_fallback() {
        let recs = parse_lines([
            "Fecha 17",
            "Domingo por definir",
            "-Once Caldas vs. Bucaramanga",
        ]);
        assert_eq!(recs[0].date, Some(date(2025, 5, 3)));
    }

    #[test]
    fn impossible_date_degrades_like_a_missing_one() {
        let recs = parse_lines(["Fecha 4", "Viernes 31 de febrero", "-Junior vs. Nacional"]);
        assert_eq!(recs[0].date, None);
    }

    #[test]
    fn explicit_date_overrides_fallback() {
        let recs = parse_lines(["Fecha 16", "Sábado 19 de abril", "-Equidad vs. América"]);
        assert_eq!(recs[0].date, Some(date(2025, 4, 19)));
        assert_eq!(recs[0].home, "La Equidad");
        assert_eq!(recs[0].away, "América de Cali");
    }

    #[test]
    fn noise_lines_emit_nothing() {
        let recs = parse_lines([
            "LIGA BETPLAY DIMAYOR I-2025",
            "Fecha 1",
            "Lunes 3 de febrero",
            "", // blank
            "-Santa Fe vs. Fortaleza",
            "Nota: horarios por confirmar",
            "- vs. Millonarios",       // empty home side
            "-Junior Millonarios",     // no separator
        ]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].home, "Independiente Santa Fe");
        assert_eq!(recs[0].away, "Fortaleza CEIF");
    }

    #[test]
    fn date_line_with_trailing_note_still_parses() {
        let recs = parse_lines([
            "Fecha 5",
            "Miércoles 26 de febrero, horario unificado",
            "-Medellín vs. Unión Magdalena",
        ]);
        assert_eq!(recs[0].date, Some(date(2025, 2, 26)));
        assert_eq!(recs[0].home, "Independiente Medellín");
    }

    #[test]
    fn record_rows_render_iso_dates_or_blank() {
        let recs = parse_lines(["Fecha 1", "Lunes 3 de febrero", "-Junior vs. Nacional"]);
        assert_eq!(
            recs[0].to_row(),
            vec![s!("1"), s!("2025-02-03"), s!("Junior"), s!("Atlético Nacional")]
        );

        let undated = parse_lines(["Fecha 3", "-Junior vs. Nacional"]);
        assert_eq!(undated[0].to_row()[1], "");
    }
}
