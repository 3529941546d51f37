use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::algorithm::conflict::ConflictRule;
use crate::error::{Error, Result};
use crate::models::Preferences;

/// Parámetros de una ejecución del planificador.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "data_dir": "data",
///   "preferences": {
///     "max_courses": 6,
///     "preferred_days": [2, 3, 4, 5],
///     "preferred_credits": [3],
///     "preferred_subjects": ["아주강좌1"]
///   },
///   "conflict_rule": "exact_slot",
///   "strict_time_parsing": false,
///   "dedup": true,
///   "outputs": {
///     "timetable": "timetable.png",
///     "graph_image": "course_graph.png",
///     "graph_dot": null
///   },
///   "font_family": "NanumGothic"
/// }
/// ```
///
/// # Campos:
/// - `data_dir`: directorio con los JSON del catálogo (si falta: `SUGANG_DATA_DIR` o `data/`)
/// - `preferences`: ver `Preferences`
/// - `conflict_rule`: `exact_slot` (por defecto) o `within_hour`
/// - `strict_time_parsing`: abortar ante un `class_time` mal formado en vez de descartar el curso
/// - `dedup`: eliminar registros del mismo ramo con idéntico horario (por defecto `true`)
/// - `outputs`: rutas opcionales para el horario, el dibujo del grafo y el DOT
/// - `font_family`: fuente de los dibujos (debe soportar hangul)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleParams {
    pub data_dir: Option<PathBuf>,
    pub preferences: Preferences,
    pub conflict_rule: ConflictRule,
    pub strict_time_parsing: bool,
    pub dedup: bool,
    pub outputs: OutputPaths,
    pub font_family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub timetable: Option<PathBuf>,
    pub graph_image: Option<PathBuf>,
    pub graph_dot: Option<PathBuf>,
}

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

impl Default for ScheduleParams {
    fn default() -> Self {
        ScheduleParams {
            data_dir: None,
            preferences: Preferences::default(),
            conflict_rule: ConflictRule::default(),
            strict_time_parsing: false,
            dedup: true,
            outputs: OutputPaths::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ScheduleParams {
    /// Rechaza días fuera de 1..7 y créditos preferidos en cero.
    pub fn validate(&self) -> Result<()> {
        if let Some(days) = &self.preferences.preferred_days {
            if let Some(bad) = days.iter().find(|d| !(1..=7).contains(*d)) {
                return Err(Error::InvalidParams(format!(
                    "preferred_days contiene {}; los días van de 1 (lunes) a 7 (domingo)",
                    bad
                )));
            }
        }
        if let Some(credits) = &self.preferences.preferred_credits {
            if credits.contains(&0) {
                return Err(Error::InvalidParams(
                    "preferred_credits no puede contener 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

pub fn parse_json_input(json_str: &str) -> Result<ScheduleParams> {
    let params = serde_json::from_str::<ScheduleParams>(json_str)?;
    params.validate()?;
    Ok(params)
}

/// Lee los parámetros desde un archivo JSON.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ScheduleParams> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let params = serde_json::from_str::<ScheduleParams>(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    params.validate()?;
    Ok(params)
}
