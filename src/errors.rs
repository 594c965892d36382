//! Errores fatales de una ejecución del pipeline.
//!
//! Los errores de resolución y de probes no aparecen aquí: se contienen por
//! identificador dentro de `PeekResult::Failure`.

use std::io;
use std::path::PathBuf;

use peek_sinks::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("No probes found")]
    NoProbes,
    #[error("Not a tty")]
    NoTerminal,
    #[error("cannot read identifiers from {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Indica si el error se produjo al preparar la ejecución (configuración)
    /// en lugar de durante el procesamiento.
    pub fn is_configuration(&self) -> bool {
        matches!(self,
                 RunError::NoProbes
                 | RunError::NoTerminal
                 | RunError::ReadSource { .. }
                 | RunError::Sink(SinkError::NotADirectory(_)))
    }
}
