use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CREDITS: u32 = 21;

/// Etiquetas de año que habilitan un curso para pregrado.
pub const UNDERGRAD_YEAR_TAGS: [&str; 4] = ["1학년", "2학년", "3학년", "4학년"];

/// Preferencias del estudiante.
///
/// # JSON esperado:
/// ```json
/// {
///   "max_courses": 6,
///   "max_credits": 21,
///   "preferred_days": [2, 3, 4, 5],
///   "preferred_credits": [3],
///   "preferred_subjects": ["아주강좌1"],
///   "preferred_language": null
/// }
/// ```
///
/// Un campo ausente, `null`, un conjunto vacío o un texto vacío significan
/// "sin restricción" en esa dimensión. `max_credits` vale 21 si no se indica;
/// `null` lo desactiva.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub max_courses: Option<usize>,
    pub max_credits: Option<u32>,
    pub preferred_days: Option<BTreeSet<u8>>,
    pub preferred_credits: Option<BTreeSet<u32>>,
    pub preferred_subjects: Option<BTreeSet<String>>,
    pub preferred_language: Option<String>,
    pub year_tags: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            max_courses: None,
            max_credits: Some(DEFAULT_MAX_CREDITS),
            preferred_days: None,
            preferred_credits: None,
            preferred_subjects: None,
            preferred_language: None,
            year_tags: UNDERGRAD_YEAR_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn active<T>(set: &Option<BTreeSet<T>>) -> Option<&BTreeSet<T>> {
    set.as_ref().filter(|s| !s.is_empty())
}

impl Preferences {
    pub fn days(&self) -> Option<&BTreeSet<u8>> {
        active(&self.preferred_days)
    }

    pub fn credits(&self) -> Option<&BTreeSet<u32>> {
        active(&self.preferred_credits)
    }

    pub fn subjects(&self) -> Option<&BTreeSet<String>> {
        active(&self.preferred_subjects)
    }

    pub fn language(&self) -> Option<&str> {
        self.preferred_language.as_deref().filter(|l| !l.is_empty())
    }

    pub fn is_preferred_subject(&self, korean_name: &str) -> bool {
        self.subjects().is_some_and(|s| s.contains(korean_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let p: Preferences = serde_json::from_str("{}").expect("prefs");
        assert_eq!(p, Preferences::default());
        assert_eq!(p.max_credits, Some(21));
        assert_eq!(p.year_tags.len(), 4);
    }

    #[test]
    fn test_null_max_credits_disables_cap() {
        let p: Preferences = serde_json::from_str(r#"{"max_credits": null}"#).expect("prefs");
        assert_eq!(p.max_credits, None);
    }

    #[test]
    fn test_empty_sets_are_unset() {
        let p: Preferences = serde_json::from_str(
            r#"{"preferred_days": [], "preferred_language": "", "preferred_subjects": ["자료구조"]}"#,
        )
        .expect("prefs");
        assert!(p.days().is_none());
        assert!(p.language().is_none());
        assert!(p.is_preferred_subject("자료구조"));
        assert!(!p.is_preferred_subject("운영체제"));
    }
}
