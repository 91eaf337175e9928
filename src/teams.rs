// src/teams.rs
//
// Canonical team names for the 2025 Liga BetPlay season, plus the alias
// table that maps every spelling seen in the wild (press calendars,
// scraped stats, typos) onto its canonical form. The canonical spellings
// are the ones the historical CSVs use; downstream joins depend on them.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The closed set of official names. Order: alphabetical, accents included.
pub const CANONICAL_TEAMS: [&str; 20] = [
    "Alianza FC",
    "América de Cali",
    "Atlético Nacional",
    "Boyacá Chicó",
    "Bucaramanga",
    "Deportes Tolima",
    "Deportivo Cali",
    "Deportivo Pasto",
    "Envigado",
    "Fortaleza CEIF",
    "Independiente Medellín",
    "Independiente Santa Fe",
    "Junior",
    "La Equidad",
    "Llaneros",
    "Millonarios",
    "Once Caldas",
    "Pereira",
    "Rionegro",
    "Unión Magdalena",
];

fn alias_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = HashMap::new();

        // Junior
        m.insert("Atlético Junior", "Junior");
        m.insert("Junior", "Junior");

        // Atlético Nacional
        m.insert("Nacional", "Atlético Nacional");
        m.insert("Atlético Nacional", "Atlético Nacional");

        // Pereira
        m.insert("Deportivo Pereira", "Pereira");
        m.insert("Pereira", "Pereira");
        m.insert("Pererira", "Pereira"); // recurring typo in the source calendar

        // Bucaramanga
        m.insert("Atlético Bucaramanga", "Bucaramanga");
        m.insert("Bucaramanga", "Bucaramanga");

        // Independiente Santa Fe
        m.insert("Santa Fe", "Independiente Santa Fe");
        m.insert("Independiente Santa Fe", "Independiente Santa Fe");

        // Deportivo Cali
        m.insert("Cali", "Deportivo Cali");
        m.insert("Deportivo Cali", "Deportivo Cali");

        // América de Cali
        m.insert("América", "América de Cali");
        m.insert("América de Cali", "América de Cali");

        // Millonarios
        m.insert("Millonarios", "Millonarios");

        // Once Caldas
        m.insert("Once Caldas", "Once Caldas");

        // Rionegro, formerly branded Águilas Doradas
        m.insert("Águilas Doradas", "Rionegro");
        m.insert("Rionegro", "Rionegro");

        // La Equidad
        m.insert("La Equidad", "La Equidad");
        m.insert("Equidad", "La Equidad");

        // Envigado
        m.insert("Envigado", "Envigado");

        // Fortaleza
        m.insert("Fortaleza", "Fortaleza CEIF");
        m.insert("Fortaleza CEIF", "Fortaleza CEIF");

        // Unión Magdalena
        m.insert("Unión Magdalena", "Unión Magdalena");

        // Deportivo Pasto
        m.insert("Pasto", "Deportivo Pasto");
        m.insert("Deportivo Pasto", "Deportivo Pasto");

        // Deportes Tolima
        m.insert("Tolima", "Deportes Tolima");
        m.insert("Deportes Tolima", "Deportes Tolima");

        // Alianza FC
        m.insert("Alianza", "Alianza FC");
        m.insert("Alianza FC", "Alianza FC");

        // Independiente Medellín. Bare "Independiente" belongs here,
        // not to Santa Fe (see src/fix.rs for the historical cleanup).
        m.insert("Independiente", "Independiente Medellín");
        m.insert("Medellín", "Independiente Medellín");
        m.insert("Independiente Medellín", "Independiente Medellín");
        m.insert("DIM", "Independiente Medellín");

        // Boyacá Chicó
        m.insert("Chicó", "Boyacá Chicó");
        m.insert("Boyacá Chicó", "Boyacá Chicó");

        // Llaneros
        m.insert("Llaneros", "Llaneros");

        m
    })
}

/// Map a raw team name onto its canonical spelling.
///
/// Exact, case-sensitive lookup after trimming. Unknown names pass
/// through trimmed — permissive on purpose, so a newly promoted club
/// flows through the pipeline instead of aborting it.
pub fn standardize(raw: &str) -> String {
    let name = raw.trim();
    match alias_table().get(name) {
        Some(canonical) => s!(*canonical),
        None => s!(name),
    }
}
