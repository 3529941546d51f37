// greedy.rs - Planificador voraz: inclusión forzada + relleno por mejor candidato
use std::cmp::Reverse;
use std::collections::BTreeSet;

use petgraph::graph::NodeIndex;

use crate::algorithm::filters::available_courses;
use crate::algorithm::graph::ConflictGraph;
use crate::models::{Course, Preferences, Schedule};

/// Créditos del tamaño "estándar" que se priorizan en los empates.
pub const STANDARD_CREDITS: u32 = 3;

// Estado de trabajo; nunca se escribe de vuelta en el grafo.
struct Selection<'g> {
    graph: &'g ConflictGraph,
    available: BTreeSet<NodeIndex>,
    selected: Vec<NodeIndex>,
    total_credits: u32,
}

impl<'g> Selection<'g> {
    fn take(&mut self, idx: NodeIndex) {
        self.selected.push(idx);
        self.total_credits = self.total_credits.saturating_add(self.graph.course_at(idx).credit_points);
        self.available.remove(&idx);
        for n in self.graph.neighbor_indices(idx) {
            self.available.remove(&n);
        }
    }

    fn conflicts_with_selected(&self, idx: NodeIndex) -> bool {
        self.graph.neighbor_indices(idx).any(|n| self.selected.contains(&n))
    }

    fn remaining_conflicts(&self, idx: NodeIndex) -> usize {
        self.graph
            .neighbor_indices(idx)
            .filter(|n| self.available.contains(n))
            .count()
    }

    fn caps_reached(&self, prefs: &Preferences) -> bool {
        if let Some(max) = prefs.max_courses {
            if self.selected.len() >= max {
                return true;
            }
        }
        if let Some(max) = prefs.max_credits {
            if self.total_credits >= max {
                return true;
            }
        }
        false
    }
}

/// Clave de orden: menos conflictos, luego 3 créditos, luego más créditos.
/// El empate final lo resuelve el orden de nodo (ascendente por `subject_id`).
fn rank_key(conflicts: usize, course: &Course) -> (usize, bool, Reverse<u32>) {
    (
        conflicts,
        course.credit_points != STANDARD_CREDITS,
        Reverse(course.credit_points),
    )
}

/// Selecciona un horario sin choques a partir del grafo y las preferencias.
///
/// Fase 1: todos los cursos cuyo nombre está en `preferred_subjects`, en orden
/// de nodo; uno que choca con otro ya elegido se omite.
/// Fase 2: mientras queden disponibles, elige el mejor según `rank_key`,
/// lo agrega y descarta sus vecinos.
///
/// Los topes (`max_courses`, `max_credits`) se revisan antes de cada
/// elección en ambas fases, sin mirar hacia adelante, así que el último
/// curso puede sobrepasar `max_credits`.
pub fn optimize_schedule(graph: &ConflictGraph, prefs: &Preferences) -> Schedule {
    let mut state = Selection {
        graph,
        available: available_courses(graph, prefs),
        selected: Vec::new(),
        total_credits: 0,
    };

    // --- Fase 1: inclusión forzada ---
    if prefs.subjects().is_some() {
        for (idx, course) in graph.courses() {
            if !prefs.is_preferred_subject(&course.subject_korean_name) {
                continue;
            }
            if state.conflicts_with_selected(idx) {
                log::warn!(
                    "ramo preferido {} ({}) choca con uno ya elegido; se omite",
                    course.subject_id,
                    course.subject_korean_name
                );
                state.available.remove(&idx);
                continue;
            }
            if state.caps_reached(prefs) {
                log::warn!(
                    "ramo preferido {} ({}) no cabe: tope de cursos o créditos alcanzado",
                    course.subject_id,
                    course.subject_korean_name
                );
                state.available.remove(&idx);
                continue;
            }
            log::debug!("forzado: {} ({})", course.subject_id, course.subject_korean_name);
            state.take(idx);
        }
    }
    let forced_count = state.selected.len();

    // --- Fase 2: relleno voraz ---
    while !state.available.is_empty() && !state.caps_reached(prefs) {
        // min_by_key devuelve el primero entre iguales: orden de nodo
        let best = state
            .available
            .iter()
            .copied()
            .min_by_key(|&idx| rank_key(state.remaining_conflicts(idx), graph.course_at(idx)));
        let Some(best) = best else { break };

        let course = graph.course_at(best);
        log::debug!(
            "elegido: {} ({}, {} créditos, {} conflictos)",
            course.subject_id,
            course.subject_korean_name,
            course.credit_points,
            state.remaining_conflicts(best)
        );
        state.take(best);
    }

    let selected: Vec<String> = state
        .selected
        .iter()
        .map(|&idx| graph.course_at(idx).subject_id.clone())
        .collect();
    log::info!(
        "horario: {} cursos, {} créditos ({} forzados)",
        selected.len(),
        state.total_credits,
        forced_count
    );

    Schedule {
        selected,
        total_credits: state.total_credits,
        forced_count,
    }
}
