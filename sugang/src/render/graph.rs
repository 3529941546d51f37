use std::collections::HashSet;
use std::f64::consts::PI;
use std::path::Path;

use petgraph::dot::{Config, Dot};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::algorithm::graph::ConflictGraph;
use crate::config::DEFAULT_FONT_FAMILY;
use crate::error::Result;
use crate::render::{DrawResult, Drawing, render_to_file};

/// Exporta el grafo en formato Graphviz con los `subject_id` como etiquetas.
pub fn to_dot(graph: &ConflictGraph) -> String {
    let labeled = graph.inner().map(|_, c| c.subject_id.clone(), |_, _| "");
    format!("{}", Dot::with_config(&labeled, &[Config::EdgeNoLabel]))
}

/// Dibujo del grafo con disposición circular (determinista, en orden de nodo).
pub struct GraphRenderer<'a> {
    graph: &'a ConflictGraph,
    highlighted: HashSet<String>,
    pub font_family: String,
    pub size: (u32, u32),
}

impl<'a> GraphRenderer<'a> {
    pub fn new(graph: &'a ConflictGraph) -> Self {
        GraphRenderer {
            graph,
            highlighted: HashSet::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            size: (2000, 2000),
        }
    }

    /// Marca los cursos elegidos para dibujarlos con otro color.
    pub fn highlight<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlighted.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_font(mut self, font_family: &str) -> Self {
        self.font_family = font_family.to_string();
        self
    }

    /// Posición de cada nodo, en el mismo orden que `ConflictGraph::courses`.
    pub fn layout(&self) -> Vec<(i32, i32)> {
        let n = self.graph.node_count();
        let (w, h) = (self.size.0 as f64, self.size.1 as f64);
        let radius = (w.min(h) / 2.0 - 80.0).max(10.0);
        (0..n)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / n as f64;
                (
                    (w / 2.0 + radius * angle.cos()).round() as i32,
                    (h / 2.0 + radius * angle.sin()).round() as i32,
                )
            })
            .collect()
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        render_to_file(self, path)
    }
}

impl Drawing for GraphRenderer<'_> {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        root.fill(&WHITE)?;
        let positions = self.layout();
        let inner = self.graph.inner();

        for e in inner.edge_indices() {
            if let Some((a, b)) = inner.edge_endpoints(e) {
                root.draw(&PathElement::new(
                    vec![positions[a.index()], positions[b.index()]],
                    BLACK.mix(0.25).stroke_width(1),
                ))?;
            }
        }

        let font = FontDesc::new(FontFamily::Name(&self.font_family), 12.0, FontStyle::Normal);
        for (idx, course) in self.graph.courses() {
            let (x, y) = positions[idx.index()];
            let color = if self.highlighted.contains(&course.subject_id) {
                RGBColor(255, 165, 80)
            } else {
                RGBColor(173, 216, 230)
            };
            root.draw(&Circle::new((x, y), 12, color.filled()))?;
            root.draw(&Text::new(course.subject_id.as_str(), (x + 14, y - 6), font.color(&BLACK)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, TimeSlot};

    fn course(id: &str, day: u8) -> Course {
        Course {
            subject_id: id.to_string(),
            subject_korean_name: id.to_string(),
            subject_english_name: String::new(),
            credit_points: 3,
            recommended_year: String::new(),
            course_language: String::new(),
            classroom: String::new(),
            main_lecturer_name: String::new(),
            class_time: String::new(),
            class_time_processed: vec![TimeSlot::new(day, 0)],
        }
    }

    #[test]
    fn test_dot_contains_labels_and_edge() {
        let g = ConflictGraph::build(&[course("A1", 1), course("B2", 1), course("C3", 2)]);
        let dot = to_dot(&g);
        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("\"A1\""));
        assert!(dot.contains("0 -- 1"));
        assert!(!dot.contains("-- 2"));
    }

    #[test]
    fn test_layout_one_position_per_node() {
        let g = ConflictGraph::build(&[course("A", 1), course("B", 2), course("C", 3), course("D", 4)]);
        let r = GraphRenderer::new(&g);
        let pos = r.layout();
        assert_eq!(pos.len(), 4);
        // el primer nodo queda a la derecha del centro
        assert_eq!(pos[0], (1920, 1000));
    }
}
