// pipeline.rs - Orquestador del flujo completo
//
// PHASE 1: cargar catálogo
//   - Leer todos los JSON del directorio de datos
//   - Eliminar duplicados (mismo ramo, mismo horario) si `dedup`
// PHASE 2: parsear horarios
//   - class_time -> class_time_processed (ParseError según `strict_time_parsing`)
// PHASE 3: construir grafo de conflictos
// PHASE 4: planificador voraz
//   - Output: ids en orden de selección

use crate::algorithm::graph::ConflictGraph;
use crate::algorithm::greedy::optimize_schedule;
use crate::catalog;
use crate::config::ScheduleParams;
use crate::error::Result;
use crate::models::{Course, Schedule};

/// Resultado de una ejecución: el grafo completo y el horario elegido.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub graph: ConflictGraph,
    pub schedule: Schedule,
}

impl PlanOutcome {
    /// Cursos elegidos, en orden de selección.
    pub fn selected_courses(&self) -> Vec<&Course> {
        self.schedule
            .ids()
            .iter()
            .filter_map(|id| self.graph.course(id))
            .collect()
    }
}

/// Ejecuta las fases 2-4 sobre un catálogo ya cargado.
pub fn run_with_courses(courses: Vec<Course>, params: &ScheduleParams) -> Result<PlanOutcome> {
    params.validate()?;

    let courses = if params.dedup { catalog::keep_unique_times(courses) } else { courses };

    log::info!("PHASE 2: parseando horarios de {} cursos", courses.len());
    let courses = catalog::prepare_courses(courses, params.strict_time_parsing)?;

    log::info!("PHASE 3: grafo de conflictos ({:?})", params.conflict_rule);
    let graph = ConflictGraph::build_with_rule(&courses, params.conflict_rule);
    log::info!("   ✓ {} nodos, {} aristas", graph.node_count(), graph.edge_count());

    log::info!("PHASE 4: selección voraz");
    let schedule = optimize_schedule(&graph, &params.preferences);

    if schedule.is_empty() && graph.node_count() > 0 {
        log::warn!("ningún curso cumple las preferencias; considere relajarlas");
    }

    Ok(PlanOutcome { graph, schedule })
}

/// Pipeline completo: lee el catálogo de `params.data_dir` y planifica.
pub fn run_schedule_with_params(params: &ScheduleParams) -> Result<PlanOutcome> {
    let dir = catalog::resolve_data_dir(params.data_dir.as_deref());
    log::info!("PHASE 1: cargando catálogo desde {:?}", dir);
    let courses = catalog::load_catalog_dir(&dir)?;
    run_with_courses(courses, params)
}
