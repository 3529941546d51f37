//! Grafo de conflictos: un nodo por curso, una arista por cada par de cursos
//! que comparten alguna franja.
use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::algorithm::conflict::{ConflictRule, slots_conflict};
use crate::models::Course;

#[derive(Debug, Clone)]
pub struct ConflictGraph {
    graph: UnGraph<Course, ()>,
    index: HashMap<String, NodeIndex>,
    rule: ConflictRule,
}

impl ConflictGraph {
    /// Construye el grafo con la regla de igualdad exacta.
    pub fn build(courses: &[Course]) -> Self {
        Self::build_with_rule(courses, ConflictRule::ExactSlot)
    }

    /// Los nodos se insertan ordenados por `subject_id`, de modo que
    /// `NodeIndex` sigue ese mismo orden. Un `subject_id` repetido conserva
    /// el primer registro.
    pub fn build_with_rule(courses: &[Course], rule: ConflictRule) -> Self {
        let mut ordered: Vec<&Course> = courses.iter().collect();
        // sort estable: ante ids repetidos gana el primero del catálogo
        ordered.sort_by(|a, b| a.subject_id.cmp(&b.subject_id));

        let mut graph = UnGraph::<Course, ()>::with_capacity(ordered.len(), 0);
        let mut index: HashMap<String, NodeIndex> = HashMap::with_capacity(ordered.len());
        for course in ordered {
            if index.contains_key(&course.subject_id) {
                log::warn!(
                    "subject_id duplicado '{}' ({}); se conserva el primer registro",
                    course.subject_id,
                    course.subject_korean_name
                );
                continue;
            }
            let idx = graph.add_node(course.clone());
            index.insert(course.subject_id.clone(), idx);
        }

        let nodes: Vec<NodeIndex> = graph.node_indices().collect();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if slots_conflict(
                    &graph[a].class_time_processed,
                    &graph[b].class_time_processed,
                    rule,
                ) {
                    graph.add_edge(a, b, ());
                }
            }
        }

        log::debug!(
            "grafo de conflictos: {} cursos, {} aristas ({:?})",
            graph.node_count(),
            graph.edge_count(),
            rule
        );
        ConflictGraph { graph, index, rule }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn rule(&self) -> ConflictRule {
        self.rule
    }

    pub fn inner(&self) -> &UnGraph<Course, ()> {
        &self.graph
    }

    pub fn node_index(&self, subject_id: &str) -> Option<NodeIndex> {
        self.index.get(subject_id).copied()
    }

    pub fn course(&self, subject_id: &str) -> Option<&Course> {
        self.node_index(subject_id).map(|idx| &self.graph[idx])
    }

    pub fn course_at(&self, idx: NodeIndex) -> &Course {
        &self.graph[idx]
    }

    /// Cursos en orden de nodo (ascendente por `subject_id`).
    pub fn courses(&self) -> impl Iterator<Item = (NodeIndex, &Course)> + '_ {
        self.graph.node_indices().map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn neighbor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Ids de los cursos que chocan con `subject_id`, ordenados.
    pub fn neighbors(&self, subject_id: &str) -> Vec<&str> {
        let Some(idx) = self.node_index(subject_id) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].subject_id.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(x), Some(y)) => self.graph.find_edge(x, y).is_some(),
            _ => false,
        }
    }

    /// Aristas como pares (menor, mayor) de `subject_id`, ordenadas.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| {
                let (x, y) = (&self.graph[a].subject_id, &self.graph[b].subject_id);
                if x <= y { (x.clone(), y.clone()) } else { (y.clone(), x.clone()) }
            })
            .collect();
        out.sort();
        out
    }
}
