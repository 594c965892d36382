use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::SinkError;

/// Destino de escritura abierto.
///
/// Las escrituras se serializan con un mutex interno: bajo ejecución
/// concurrente cada línea renderizada llega completa, aunque el orden entre
/// identificadores no está definido.
pub struct Sink {
    path: Option<PathBuf>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Sink {
    /// Salida estándar del proceso. Siempre escribible.
    pub fn stdout() -> Self {
        Self { path: None,
               writer: Mutex::new(Box::new(io::stdout())) }
    }

    /// Abre `path` con semántica de creación nueva.
    pub fn create_new(path: &Path) -> Result<Self, SinkError> {
        let file: File = OpenOptions::new().write(true)
                                           .create_new(true)
                                           .open(path)
                                           .map_err(|e| SinkError::on_open(path.to_path_buf(), e))?;
        Ok(Self { path: Some(path.to_path_buf()),
                  writer: Mutex::new(Box::new(BufWriter::new(file))) })
    }

    /// Envuelve un escritor arbitrario (útil para capturar la salida).
    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self { path: None,
               writer: Mutex::new(writer) }
    }

    /// Ruta del archivo respaldado, si lo hay.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Escribe `text` seguido de un salto de línea.
    pub fn write_line(&self, text: &str) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{text}").map_err(|source| self.io_error(source))
    }

    pub fn flush(&self) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.flush().map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> SinkError {
        SinkError::Io { path: self.path.clone().unwrap_or_else(|| PathBuf::from("<stdout>")),
                        source }
    }
}
