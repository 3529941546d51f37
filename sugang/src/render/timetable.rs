use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::algorithm::graph::ConflictGraph;
use crate::config::DEFAULT_FONT_FAMILY;
use crate::error::Result;
use crate::models::{Course, Schedule, TimeSlot};
use crate::render::{DrawResult, Drawing, render_to_file};

pub const DAY_LABELS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Filas de media hora desde las 9:00 hasta las 19:30.
pub const GRID_ROWS: usize = 22;

/// Etiqueta de fila en formato 12 h: 0 -> "9:00 AM", 7 -> "12:30 PM".
pub fn row_label(row: usize) -> String {
    let hour = 9 + row / 2;
    let minute = if row % 2 == 0 { "00" } else { "30" };
    let (h12, suffix) = match hour {
        0..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{} {}", h12, minute, suffix)
}

fn describe(course: &Course) -> String {
    format!("{} ({}, {})", course.subject_korean_name, course.classroom, course.main_lecturer_name)
}

/// Modelo de la grilla, independiente del dibujo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    /// `cells[día][fila]`, cada entrada "nombre\n(sala, profesor)".
    pub cells: Vec<Vec<Vec<String>>>,
    /// Cursos sin horario fijo.
    pub footer: Vec<String>,
    /// Franjas que caen fuera de la grilla (fin de semana, antes de 9:00, después de 19:30).
    pub off_grid: Vec<String>,
}

impl Timetable {
    pub fn build(schedule: &Schedule, graph: &ConflictGraph) -> Self {
        let mut table = Timetable {
            cells: vec![vec![Vec::new(); GRID_ROWS]; DAY_LABELS.len()],
            footer: Vec::new(),
            off_grid: Vec::new(),
        };

        for id in schedule.ids() {
            let Some(course) = graph.course(id) else {
                log::warn!("{} no está en el grafo; se omite del horario", id);
                continue;
            };
            if !course.has_fixed_time() {
                table.footer.push(describe(course));
                continue;
            }
            for ts in course.class_time_processed.iter() {
                match Self::grid_position(ts) {
                    Some((d, r)) => table.cells[d][r].push(format!(
                        "{}\n({}, {})",
                        course.subject_korean_name, course.classroom, course.main_lecturer_name
                    )),
                    None => table.off_grid.push(format!("{} @ {}", describe(course), ts)),
                }
            }
        }
        table
    }

    /// (columna de día, fila) si la franja cae dentro de la grilla.
    pub fn grid_position(ts: &TimeSlot) -> Option<(usize, usize)> {
        let day = (ts.day as usize).checked_sub(1)?;
        let row = usize::try_from(ts.slot).ok()?;
        (day < DAY_LABELS.len() && row < GRID_ROWS).then_some((day, row))
    }

    pub fn cell(&self, day: usize, row: usize) -> &[String] {
        self.cells
            .get(day)
            .and_then(|d| d.get(row))
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// Pie del dibujo: cursos sin horario y franjas fuera de la grilla,
    /// cada grupo con su propia etiqueta.
    pub fn footer_text(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.footer.is_empty() {
            parts.push(format!("Courses without class time: {}", self.footer.join(", ")));
        }
        if !self.off_grid.is_empty() {
            parts.push(format!("Outside the grid: {}", self.off_grid.join(", ")));
        }
        (!parts.is_empty()).then(|| parts.join("  |  "))
    }
}

/// Dibuja un `Timetable`. La fuente es local al renderer.
pub struct TimetableRenderer<'a> {
    timetable: &'a Timetable,
    pub font_family: String,
    pub size: (u32, u32),
}

impl<'a> TimetableRenderer<'a> {
    pub fn new(timetable: &'a Timetable) -> Self {
        TimetableRenderer {
            timetable,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            size: (1400, 1000),
        }
    }

    pub fn with_font(mut self, font_family: &str) -> Self {
        self.font_family = font_family.to_string();
        self
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        render_to_file(self, path)
    }
}

const LEFT: i32 = 90;
const TOP: i32 = 40;
const FOOTER: i32 = 70;

impl Drawing for TimetableRenderer<'_> {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
        root.fill(&WHITE)?;

        let (w, h) = (self.size.0 as i32, self.size.1 as i32);
        let cell_w = (w - LEFT - 10) / DAY_LABELS.len() as i32;
        let cell_h = (h - TOP - FOOTER) / GRID_ROWS as i32;

        let header = FontDesc::new(FontFamily::Name(&self.font_family), 16.0, FontStyle::Bold);
        let label = FontDesc::new(FontFamily::Name(&self.font_family), 12.0, FontStyle::Normal);
        let body = FontDesc::new(FontFamily::Name(&self.font_family), 10.0, FontStyle::Normal);

        for (d, name) in DAY_LABELS.iter().enumerate() {
            let x = LEFT + d as i32 * cell_w;
            root.draw(&Text::new(*name, (x + cell_w / 2 - 15, TOP - 25), header.color(&BLACK)))?;
        }

        for r in 0..GRID_ROWS {
            let y = TOP + r as i32 * cell_h;
            root.draw(&Text::new(row_label(r), (8, y + cell_h / 3), label.color(&BLACK)))?;
            for d in 0..DAY_LABELS.len() {
                let x = LEFT + d as i32 * cell_w;
                let entries = self.timetable.cell(d, r);
                if !entries.is_empty() {
                    root.draw(&Rectangle::new(
                        [(x, y), (x + cell_w, y + cell_h)],
                        RGBColor(220, 235, 250).filled(),
                    ))?;
                }
                root.draw(&Rectangle::new(
                    [(x, y), (x + cell_w, y + cell_h)],
                    BLACK.mix(0.4).stroke_width(1),
                ))?;

                let lines = entries.iter().flat_map(|e| e.lines());
                for (i, line) in lines.enumerate() {
                    let ty = y + 2 + i as i32 * 11;
                    if ty + 10 > y + cell_h {
                        break;
                    }
                    root.draw(&Text::new(line, (x + 3, ty), body.color(&BLACK)))?;
                }
            }
        }

        if let Some(text) = self.timetable.footer_text() {
            root.draw(&Text::new(text, (LEFT, h - FOOTER + 20), label.color(&BLACK)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_labels() {
        assert_eq!(row_label(0), "9:00 AM");
        assert_eq!(row_label(5), "11:30 AM");
        assert_eq!(row_label(6), "12:00 PM");
        assert_eq!(row_label(21), "7:30 PM");
    }

    #[test]
    fn test_footer_labels_each_group() {
        let mut table = Timetable::default();
        assert_eq!(table.footer_text(), None);

        table.off_grid.push("주말특강 (R1, 김교수) @ D6 09:00".to_string());
        assert_eq!(
            table.footer_text().as_deref(),
            Some("Outside the grid: 주말특강 (R1, 김교수) @ D6 09:00")
        );

        table.footer.push("아주강좌1 (R2, 이교수)".to_string());
        assert_eq!(
            table.footer_text().as_deref(),
            Some("Courses without class time: 아주강좌1 (R2, 이교수)  |  Outside the grid: 주말특강 (R1, 김교수) @ D6 09:00")
        );
    }

    #[test]
    fn test_grid_position_bounds() {
        assert_eq!(Timetable::grid_position(&TimeSlot::new(1, 0)), Some((0, 0)));
        assert_eq!(Timetable::grid_position(&TimeSlot::new(5, 21)), Some((4, 21)));
        assert_eq!(Timetable::grid_position(&TimeSlot::new(6, 0)), None);
        assert_eq!(Timetable::grid_position(&TimeSlot::new(1, -2)), None);
        assert_eq!(Timetable::grid_position(&TimeSlot::new(1, 22)), None);
    }
}
