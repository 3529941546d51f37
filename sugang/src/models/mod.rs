// Estructuras de datos principales
mod preferences;

pub use preferences::{DEFAULT_MAX_CREDITS, Preferences, UNDERGRAD_YEAR_TAGS};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Hora del primer periodo académico; la franja 0 corresponde a las 9:00.
pub const FIRST_PERIOD_HOUR: i32 = 9;

/// Una ocurrencia semanal de clase: día (1 = lunes .. 7 = domingo) y
/// franja de media hora relativa a `FIRST_PERIOD_HOUR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: u8,
    pub slot: i32,
}

impl TimeSlot {
    pub fn new(day: u8, slot: i32) -> Self {
        TimeSlot { day, slot }
    }

    /// Hora decimal de inicio (9.0, 9.5, ...).
    pub fn start_hour(&self) -> f64 {
        (self.slot + 2 * FIRST_PERIOD_HOUR) as f64 / 2.0
    }

    /// Regla de proximidad: mismo día y menos de una hora de diferencia.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        self.day == other.day && (self.slot - other.slot).abs() < 2
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.start_hour() * 60.0).round() as i32;
        write!(f, "D{} {:02}:{:02}", self.day, minutes / 60, minutes % 60)
    }
}

/// Registro de curso tal como llega del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub subject_id: String,
    #[serde(default)]
    pub subject_korean_name: String,
    #[serde(default)]
    pub subject_english_name: String,
    #[serde(deserialize_with = "lenient_credits")]
    pub credit_points: u32,
    #[serde(default)]
    pub recommended_year: String,
    #[serde(default)]
    pub course_language: String,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub main_lecturer_name: String,
    #[serde(default)]
    pub class_time: String,
    /// Derivado de `class_time` por `algorithm::conflict::parse_class_time`.
    #[serde(default)]
    pub class_time_processed: Vec<TimeSlot>,
}

impl Course {
    /// Día de cada franja, en el orden de `class_time_processed`.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.class_time_processed.iter().map(|ts| ts.day)
    }

    pub fn has_fixed_time(&self) -> bool {
        !self.class_time_processed.is_empty()
    }
}

// Los catálogos exportados desde planillas traen créditos como número o como texto.
// Sólo se aceptan enteros positivos que caben en u32.
fn lenient_credits<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    fn whole(f: f64) -> Option<u32> {
        (f.fract() == 0.0 && f >= 1.0 && f <= u32::MAX as f64).then_some(f as u32)
    }

    let parsed = match &Raw::deserialize(deserializer)? {
        Raw::Int(n) => u32::try_from(*n).ok().filter(|n| *n > 0),
        Raw::Float(f) => whole(*f),
        Raw::Text(s) => s.trim().parse::<f64>().ok().and_then(whole),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("credit_points debe ser un entero positivo"))
}

/// Resultado del planificador: identificadores en orden de selección.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub selected: Vec<String>,
    pub total_credits: u32,
    /// Cuántos de los primeros elementos vienen de la inclusión forzada.
    pub forced_count: usize,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, subject_id: &str) -> bool {
        self.selected.iter().any(|id| id == subject_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_equality_and_proximity() {
        let a = TimeSlot::new(1, 0);
        let b = TimeSlot::new(1, 0);
        let c = TimeSlot::new(1, 1);
        let d = TimeSlot::new(1, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.conflicts_with(&c));
        assert!(!a.conflicts_with(&d));
        assert!(!a.conflicts_with(&TimeSlot::new(2, 0)));
    }

    #[test]
    fn test_time_slot_display() {
        assert_eq!(TimeSlot::new(3, 3).to_string(), "D3 10:30");
        assert_eq!(TimeSlot::new(1, 0).start_hour(), 9.0);
    }

    #[test]
    fn test_course_credits_as_text() {
        let c: Course = serde_json::from_str(
            r#"{"subject_id":"X1","subject_korean_name":"자료구조","credit_points":"3","class_time":"Mon 9(A)"}"#,
        )
        .expect("course json");
        assert_eq!(c.credit_points, 3);
        assert!(c.recommended_year.is_empty());
        assert!(c.class_time_processed.is_empty());
    }

    #[test]
    fn test_course_credits_must_be_positive_and_fit() {
        for bad in [r#"0"#, r#""0""#, r#"-3"#, r#"2.5"#, r#"5000000000"#, r#""5000000000""#] {
            let json = format!(r#"{{"subject_id":"X1","credit_points":{}}}"#, bad);
            let res: Result<Course, _> = serde_json::from_str(&json);
            assert!(res.is_err(), "se aceptó credit_points = {}", bad);
        }
        let c: Course = serde_json::from_str(r#"{"subject_id":"X1","credit_points":4.0}"#).expect("course json");
        assert_eq!(c.credit_points, 4);
    }

    #[test]
    fn test_course_credits_rejects_garbage() {
        let res: Result<Course, _> =
            serde_json::from_str(r#"{"subject_id":"X1","credit_points":"tres"}"#);
        assert!(res.is_err());
    }
}
