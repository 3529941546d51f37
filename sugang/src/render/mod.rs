//! Salidas gráficas del planificador.
//!
//! - `timetable`: grilla día × media hora del horario elegido
//! - `graph`: dibujo del grafo de conflictos y exportación DOT
//!
//! La fuente se configura en cada renderer; no hay estado global de dibujo.
pub mod graph;
pub mod timetable;

pub use graph::{GraphRenderer, to_dot};
pub use timetable::{Timetable, TimetableRenderer};

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};

pub type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Algo que sabe dibujarse sobre cualquier backend de plotters.
pub trait Drawing {
    fn size(&self) -> (u32, u32);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<DB>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// SVG si la extensión es `.svg`, PNG en cualquier otro caso.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// Dibuja `drawing` en `path`, eligiendo el backend según la extensión.
pub fn render_to_file<D: Drawing>(drawing: &D, path: &Path) -> Result<()> {
    let size = drawing.size();
    let to_err = |message: String| Error::Render {
        path: path.to_path_buf(),
        message,
    };

    match ImageFormat::from_path(path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            drawing.draw(&root).map_err(|e| to_err(e.to_string()))?;
            root.present().map_err(|e| to_err(e.to_string()))?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            drawing.draw(&root).map_err(|e| to_err(e.to_string()))?;
            root.present().map_err(|e| to_err(e.to_string()))?;
        }
    }
    log::info!("imagen escrita en {:?}", path);
    Ok(())
}
