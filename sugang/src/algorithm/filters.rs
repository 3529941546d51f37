//! Filtro de preferencias: decide qué cursos entran al conjunto disponible
//! del planificador.
//!
//! Dos capas:
//! 1. Año recomendado (restricción dura).
//! 2. Preferencias (día, créditos, idioma), que un ramo preferido salta.
use std::collections::BTreeSet;

use petgraph::graph::NodeIndex;

use crate::algorithm::graph::ConflictGraph;
use crate::models::{Course, Preferences};

/// Capa 1: el curso es de pregrado (contiene alguna etiqueta de año) o no
/// tiene restricción de año.
pub fn is_year_eligible(course: &Course, year_tags: &[String]) -> bool {
    course.recommended_year.is_empty()
        || year_tags.iter().any(|tag| course.recommended_year.contains(tag.as_str()))
}

/// Capa 2: ramo preferido, o bien cumple todas las dimensiones configuradas.
pub fn passes_preferences(course: &Course, prefs: &Preferences) -> bool {
    if prefs.is_preferred_subject(&course.subject_korean_name) {
        return true;
    }

    if let Some(days) = prefs.days() {
        if !course.days().any(|d| days.contains(&d)) {
            return false;
        }
    }

    if let Some(credits) = prefs.credits() {
        if !credits.contains(&course.credit_points) {
            return false;
        }
    }

    if let Some(lang) = prefs.language() {
        if course.course_language != lang {
            return false;
        }
    }

    true
}

pub fn is_available(course: &Course, prefs: &Preferences) -> bool {
    is_year_eligible(course, &prefs.year_tags) && passes_preferences(course, prefs)
}

/// Conjunto inicial de disponibles, ordenado igual que los nodos del grafo.
pub fn available_courses(graph: &ConflictGraph, prefs: &Preferences) -> BTreeSet<NodeIndex> {
    let available: BTreeSet<NodeIndex> = graph
        .courses()
        .filter(|(_, c)| is_available(c, prefs))
        .map(|(idx, _)| idx)
        .collect();
    log::debug!("disponibles tras filtrar: {} de {}", available.len(), graph.node_count());
    available
}
