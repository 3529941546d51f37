// Biblioteca raíz del crate `sugang`.
// Planificador de inscripción de cursos: grafo de conflictos por franja
// horaria + selección voraz guiada por preferencias.
pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod render;

pub use algorithm::{ConflictGraph, PlanOutcome, optimize_schedule, run_schedule_with_params, run_with_courses};
pub use config::ScheduleParams;
pub use error::{Error, Result};
pub use models::{Course, Preferences, Schedule, TimeSlot};
