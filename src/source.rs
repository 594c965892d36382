//! Abastecimiento de identificadores.
//!
//! Prioridad de fuentes:
//! 1. Archivo de lectura (precedido por los identificadores posicionales).
//! 2. Identificadores posicionales.
//! 3. Prompt interactivo, sólo si hay una terminal conectada.
//!
//! Cada elemento es `Some(identificador)`; el prompt emite un `None` final al
//! llegar al fin de la entrada.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use log::debug;

use crate::config::RunConfig;
use crate::errors::RunError;

/// Terminal interactiva de la que se leen identificadores.
pub trait Console: Send {
    /// `true` si hay una terminal conectada.
    fn is_interactive(&self) -> bool;

    /// Mensaje inicial del prompt.
    fn greet(&mut self) -> io::Result<()>;

    /// Siguiente línea sin el salto final; `None` al fin de la entrada.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Consola sobre stdin/stderr del proceso.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }

    fn greet(&mut self) -> io::Result<()> {
        let mut err = io::stderr().lock();
        write!(err,
               "Type in the fully-qualified name of a type.\nPress Ctrl-d (or Ctrl-z) to exit the prompt.\n\n")?;
        err.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

pub(crate) fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Origen efectivo de los identificadores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Positional,
    Prompt,
}

/// Secuencia perezosa de identificadores.
pub struct IdentifierSource {
    kind: SourceKind,
    inner: Box<dyn Iterator<Item = io::Result<Option<String>>> + Send>,
}

impl IdentifierSource {
    /// Construye la fuente según `config`.
    ///
    /// Errores: `ReadSource` si el archivo no se puede abrir; `NoTerminal` si
    /// hace falta el prompt y no hay terminal.
    pub fn build(config: &RunConfig, mut console: Box<dyn Console>) -> Result<Self, RunError> {
        let positional = config.identifiers.clone().into_iter().map(|id| Ok(Some(id)));

        if let Some(path) = &config.read_from {
            let file = File::open(path).map_err(|source| RunError::ReadSource { path: path.clone(),
                                                                              source })?;
            debug!("source: reading identifiers from {}", path.display());
            let lines = BufReader::new(file).lines().map(|line| line.map(Some));
            return Ok(Self::new(SourceKind::File, positional.chain(lines)));
        }

        if !config.identifiers.is_empty() {
            return Ok(Self::new(SourceKind::Positional, positional));
        }

        if !console.is_interactive() {
            return Err(RunError::NoTerminal);
        }
        console.greet()?;
        Ok(Self::new(SourceKind::Prompt, Prompt { console, done: false }))
    }

    fn new(kind: SourceKind, inner: impl Iterator<Item = io::Result<Option<String>>> + Send + 'static) -> Self {
        Self { kind,
               inner: Box::new(inner) }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }
}

impl Iterator for IdentifierSource {
    type Item = io::Result<Option<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Lee del prompt hasta el fin de la entrada y emite un `None` final.
struct Prompt {
    console: Box<dyn Console>,
    done: bool,
}

impl Iterator for Prompt {
    type Item = io::Result<Option<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.console.read_line() {
            Ok(Some(line)) => Some(Ok(Some(line))),
            Ok(None) => {
                self.done = true;
                Some(Ok(None))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
