use std::path::PathBuf;
use thiserror::Error;

/// Horario mal formado dentro de `class_time`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hora inválida `{token}` en \"{raw}\": {reason}")]
pub struct ParseError {
    pub raw: String,
    pub token: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("curso {subject_id}: {source}")]
    TimeParse {
        subject_id: String,
        #[source]
        source: ParseError,
    },

    #[error("no se pudo leer '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido en '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parámetros JSON inválidos: {0}")]
    Params(#[from] serde_json::Error),

    #[error("parámetro inválido: {0}")]
    InvalidParams(String),

    #[error("error al dibujar '{}': {message}", path.display())]
    Render { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
