//! Errores del núcleo de inspección.
//!
//! `ResolveError` y los errores de probes nunca salen del `Peeker`: se
//! capturan en un `PeekResult::Failure`.

use std::error::Error as StdError;

use thiserror::Error;

/// Error devuelto por una operación de extracción.
pub type ProbeError = Box<dyn StdError + Send + Sync + 'static>;

/// Fallo al convertir un identificador en entidad.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error("invalid identifier '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Error capturado dentro de un `PeekResult::Failure`.
#[derive(Debug, Error)]
pub enum PeekError {
    #[error("Empty identifier: '{0}'")]
    EmptyIdentifier(String),
    #[error("unable to resolve identifier")]
    Unresolved(#[source] ResolveError),
    #[error("probe '{description}' failed")]
    Probe {
        description: String,
        #[source]
        source: ProbeError,
    },
}

impl PeekError {
    /// Texto visible del error: la causa subyacente si el error es un
    /// envoltorio, o el propio mensaje en caso contrario.
    ///
    /// Para un probe, el envoltorio considerado es el error que devolvió el
    /// extractor: se muestra su causa inmediata si la tiene.
    pub fn render(&self) -> String {
        match self {
            PeekError::Probe { source, .. } => source.source()
                                                     .map(ToString::to_string)
                                                     .unwrap_or_else(|| source.to_string()),
            _ => match self.source() {
                Some(cause) => cause.to_string(),
                None => self.to_string(),
            },
        }
    }
}
