//! Configuración de una ejecución.
//!
//! Se construye una sola vez (normalmente por la capa de línea de comandos)
//! y el runner la trata como valor de sólo lectura. La exclusión mutua entre
//! archivo único y directorio se garantiza por construcción con
//! `OutputTarget`.

use std::path::PathBuf;

use peek_sinks::SinkStrategy;

/// Destino de la salida renderizada.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Salida estándar del proceso.
    #[default]
    Stdout,
    /// Todos los resultados en un archivo NUEVO.
    SingleFile(PathBuf),
    /// Los resultados de cada identificador en su propio archivo NUEVO.
    Directory(PathBuf),
}

impl OutputTarget {
    pub fn strategy(&self) -> SinkStrategy {
        match self {
            OutputTarget::Stdout => SinkStrategy::Stdout,
            OutputTarget::SingleFile(path) => SinkStrategy::SingleFile(path.clone()),
            OutputTarget::Directory(dir) => SinkStrategy::Directory(dir.clone()),
        }
    }
}

/// Parámetros de una ejecución del pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Se pidió el mensaje de ayuda: no se procesa nada.
    pub help: bool,
    /// Detener tras el primer `Failure`.
    pub abort_on_error: bool,
    /// Recorrer los identificadores en paralelo.
    pub concurrent: bool,
    /// Archivo con un identificador por línea, leído tras los posicionales.
    pub read_from: Option<PathBuf>,
    pub output: OutputTarget,
    /// Identificadores posicionales.
    pub identifiers: Vec<String>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn abort_on_error(mut self, abort: bool) -> Self {
        self.abort_on_error = abort;
        self
    }

    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    pub fn read_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_from = Some(path.into());
        self
    }

    pub fn single_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = OutputTarget::SingleFile(path.into());
        self
    }

    pub fn write_to_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output = OutputTarget::Directory(dir.into());
        self
    }

    pub fn identifiers<I, S>(mut self, identifiers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_write_to_stdout() {
        let cfg = RunConfig::new();
        assert_eq!(cfg.output, OutputTarget::Stdout);
        assert!(!cfg.concurrent && !cfg.abort_on_error && !cfg.help);
        assert_eq!(cfg.output.strategy(), SinkStrategy::Stdout);
    }

    #[test]
    fn last_output_choice_wins() {
        let cfg = RunConfig::new().single_file("/tmp/a").write_to_directory("/tmp/d");
        assert_eq!(cfg.output, OutputTarget::Directory("/tmp/d".into()));
    }

    #[test]
    fn identifiers_accept_str_slices() {
        let cfg = RunConfig::new().identifiers(["a", "b"]);
        assert_eq!(cfg.identifiers, vec!["a".to_string(), "b".to_string()]);
    }
}
