use std::collections::{BTreeMap, HashSet};

use crate::models::Course;

/// Dentro de cada `subject_korean_name` conserva sólo el primer registro de
/// cada `class_time` distinto. La salida queda agrupada por nombre en orden
/// ascendente; dentro del grupo se respeta el orden de entrada.
pub fn keep_unique_times(courses: Vec<Course>) -> Vec<Course> {
    let before = courses.len();
    let mut groups: BTreeMap<String, Vec<Course>> = BTreeMap::new();
    for c in courses {
        groups.entry(c.subject_korean_name.clone()).or_default().push(c);
    }

    let mut out = Vec::with_capacity(before);
    for (_, group) in groups {
        let mut seen: HashSet<String> = HashSet::new();
        for c in group {
            if seen.insert(c.class_time.clone()) {
                out.push(c);
            }
        }
    }

    if out.len() < before {
        log::info!("duplicados eliminados: {} (quedan {})", before - out.len(), out.len());
    }
    out
}
