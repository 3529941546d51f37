// Funciones para parsear horarios y detectar conflictos entre franjas.
use std::sync::OnceLock;

use chrono::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::{FIRST_PERIOD_HOUR, TimeSlot};

/// Criterio para decidir si dos cursos chocan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictRule {
    /// Conflicto sólo si comparten exactamente (día, franja).
    #[default]
    ExactSlot,
    /// Conflicto si el mismo día empiezan con menos de una hora de diferencia.
    WithinHour,
}

// "<día> <hora>(<sala>)", la sala entre paréntesis es opcional.
// La hora termina en el primer separador distinto de '.' y ':'.
fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"(\w+)\s+([0-9][\w.:]*)(?:\(([^)]*)\))?").expect("class time regex")
    })
}

/// Código 1..7 (lunes = 1) para una abreviatura de día; `None` si no se reconoce.
pub fn day_code(token: &str) -> Option<u8> {
    token
        .parse::<Weekday>()
        .ok()
        .map(|d| d.number_from_monday() as u8)
}

/// Convierte una hora decimal ("9", "13.5") a franja de media hora.
/// Las fracciones se truncan a la media hora inferior.
pub fn hour_to_slot(raw: &str, token: &str) -> Result<i32, ParseError> {
    let fail = |reason: &str| ParseError {
        raw: raw.to_string(),
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let (whole, frac) = match token.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (token, None),
    };
    if whole.is_empty() || whole.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(fail("la hora debe ser un número"));
    }
    let hour: i32 = whole.parse().map_err(|_| fail("la hora debe ser un número"))?;
    if hour >= 24 {
        return Err(fail("hora fuera de rango 0..24"));
    }
    let half = match frac {
        None => 0,
        Some(f) if f.len() == 1 && f.chars().all(|c| c.is_ascii_digit()) => {
            if f >= "5" { 1 } else { 0 }
        }
        Some(_) => return Err(fail("se admite un solo decimal")),
    };
    Ok(hour * 2 + half - 2 * FIRST_PERIOD_HOUR)
}

/// Parsear `class_time` a una lista de `TimeSlot`.
/// Ejemplo: "Mon 9(room101) Wed 9(room101)" -> [(1, 0), (3, 0)]
///
/// Un texto vacío significa curso sin horario fijo. Los días no reconocidos
/// se descartan en silencio; una hora mal formada es `ParseError`.
pub fn parse_class_time(class_time: &str) -> Result<Vec<TimeSlot>, ParseError> {
    let trimmed = class_time.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots = Vec::new();
    for caps in token_regex().captures_iter(trimmed) {
        let Some(day) = day_code(&caps[1]) else {
            log::trace!("día desconocido '{}' en \"{}\"", &caps[1], trimmed);
            continue;
        };
        let slot = hour_to_slot(trimmed, &caps[2])?;
        slots.push(TimeSlot::new(day, slot));
    }
    Ok(slots)
}

/// True si alguna franja de `a` choca con alguna de `b` según `rule`.
pub fn slots_conflict(a: &[TimeSlot], b: &[TimeSlot], rule: ConflictRule) -> bool {
    a.iter().any(|s1| {
        b.iter().any(|s2| match rule {
            ConflictRule::ExactSlot => s1 == s2,
            ConflictRule::WithinHour => s1.conflicts_with(s2),
        })
    })
}
