// Módulo de alto nivel del planificador
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod conflict;
pub mod filters;
pub mod graph;
pub mod greedy;
pub mod pipeline;

// Reexportar la API pública que usa el binario
pub use conflict::{ConflictRule, parse_class_time};
pub use graph::ConflictGraph;
pub use greedy::optimize_schedule;
pub use pipeline::{PlanOutcome, run_schedule_with_params, run_with_courses};
