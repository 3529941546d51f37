//! Módulo `catalog`: lectura del catálogo de cursos desde archivos JSON.
//!
//! Submódulos:
//! - `dedup`: elimina registros repetidos del mismo ramo con el mismo horario

/// Eliminación de duplicados: `keep_unique_times`
pub mod dedup;

pub use dedup::keep_unique_times;

use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::conflict::parse_class_time;
use crate::error::{Error, Result};
use crate::models::Course;

/// Directorio por defecto con los JSON del catálogo (relativo al CWD)
pub const DATA_DIR: &str = "data";

/// Variable de entorno que apunta al directorio de datos.
pub const DATA_DIR_ENV: &str = "SUGANG_DATA_DIR";

/// Resolver el directorio de datos: ruta explícita, luego `SUGANG_DATA_DIR`
/// (también desde `.env`), luego `data/`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let _ = dotenv::dotenv();
    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        let p = PathBuf::from(path);
        if p.exists() {
            log::info!("usando {}: {:?}", DATA_DIR_ENV, p);
            return p;
        }
        log::warn!("{} apunta a {:?}, que no existe; se usa '{}'", DATA_DIR_ENV, p, DATA_DIR);
    }
    PathBuf::from(DATA_DIR)
}

/// Lee un archivo JSON con un arreglo de cursos.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str::<Vec<Course>>(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Lee todos los `*.json` del directorio (orden por nombre de archivo) y
/// concatena sus cursos.
pub fn load_catalog_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<Course>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    if files.is_empty() {
        log::warn!("no hay archivos .json en {:?}", dir);
    }

    let mut courses = Vec::new();
    for file in files.iter() {
        let chunk = load_catalog_file(file)?;
        log::debug!("{:?}: {} cursos", file, chunk.len());
        courses.extend(chunk);
    }
    log::info!("catálogo: {} cursos desde {} archivos", courses.len(), files.len());
    Ok(courses)
}

/// Adjunta `class_time_processed` a cada curso.
///
/// Con `strict = false` un curso con hora mal formada se descarta con un
/// aviso; con `strict = true` el error corta todo el proceso.
pub fn prepare_courses(raw: Vec<Course>, strict: bool) -> Result<Vec<Course>> {
    let mut out = Vec::with_capacity(raw.len());
    for mut course in raw {
        match parse_class_time(&course.class_time) {
            Ok(slots) => {
                course.class_time_processed = slots;
                out.push(course);
            }
            Err(source) if strict => {
                return Err(Error::TimeParse {
                    subject_id: course.subject_id,
                    source,
                });
            }
            Err(e) => {
                log::warn!("se descarta {} ({}): {}", course.subject_id, course.subject_korean_name, e);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(id: &str, time: &str) -> Course {
        serde_json::from_value(json!({
            "subject_id": id,
            "subject_korean_name": "자료구조",
            "credit_points": 3,
            "class_time": time
        }))
        .expect("course")
    }

    #[test]
    fn test_prepare_lenient_drops_bad_course() {
        let out = prepare_courses(vec![raw("A", "Mon 9(a)"), raw("B", "Mon nine(a)"), raw("C", "Tue 9:30")], false)
            .expect("lenient");
        // "nine" no empieza con dígito: no es un token de horario y B queda sin horario
        let ids: Vec<&str> = out.iter().map(|c| c.subject_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert!(out[1].class_time_processed.is_empty());
    }

    #[test]
    fn test_prepare_strict_aborts() {
        let err = prepare_courses(vec![raw("A", "Mon 9(a)"), raw("C", "Tue 9:30")], true).unwrap_err();
        assert!(matches!(err, Error::TimeParse { ref subject_id, .. } if subject_id == "C"));
    }

    #[test]
    fn test_missing_dir_error_names_path() {
        let dir = Path::new("/nonexistent/sugang/catalogo");
        match load_catalog_dir(dir) {
            Err(Error::Read { path, .. }) => assert_eq!(path, dir),
            other => panic!("se esperaba Error::Read, llegó {:?}", other),
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let p = resolve_data_dir(Some(Path::new("/tmp/cursos")));
        assert_eq!(p, PathBuf::from("/tmp/cursos"));
    }
}
