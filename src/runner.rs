//! Runner del pipeline de inspección.
//!
//! Estados por ejecución: abastecimiento -> procesamiento -> agregación ->
//! cierre. El cierre de destinos ocurre siempre, tanto si la ejecución
//! termina con un resultado como si termina con un error fatal.
//!
//! Agregación: el resultado global es el AND de las señales de continuación.
//! En modo secuencial el corte ocurre exactamente en el primer resultado que
//! la anula y los identificadores posteriores no se procesan. En modo
//! concurrente el corte es sólo una optimización: qué identificadores llegan
//! a procesarse antes del corte no es determinista, pero el valor devuelto
//! refleja si alguno de los procesados lo anuló.

use log::debug;
use peek_core::{PeekResult, Peeker, Probe, Resolver};
use peek_sinks::SinkManager;
use rayon::prelude::*;

use crate::config::RunConfig;
use crate::errors::RunError;
use crate::source::{Console, IdentifierSource, StdConsole};

pub struct Runner {
    config: RunConfig,
    console: Box<dyn Console>,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config,
               console: Box::new(StdConsole) }
    }

    /// Sustituye la consola usada por el prompt interactivo.
    pub fn with_console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Ejecuta el pipeline.
    ///
    /// Devuelve `false` si algún identificador produjo `Exhausted` o, con
    /// abort-on-error, un `Failure`; `true` en otro caso.
    ///
    /// Errores fatales (antes de procesar nada): lista de probes vacía,
    /// archivo de lectura inaccesible, prompt sin terminal, archivo único ya
    /// existente o directorio inválido. Un destino por identificador que no
    /// se puede abrir es fatal en su primer uso.
    pub fn run<R: Resolver>(self, probes: Vec<Probe<R::Entity>>, resolver: R) -> Result<bool, RunError> {
        if probes.is_empty() {
            return Err(RunError::NoProbes);
        }
        if self.config.help {
            debug!("runner: help requested, nothing to inspect");
            return Ok(false);
        }

        let Runner { config, console } = self;
        let sinks = SinkManager::open(config.output.strategy())?;
        let outcome = IdentifierSource::build(&config, console).and_then(|source| {
            debug!("runner: start source={:?} concurrent={} abort_on_error={}",
                   source.kind(),
                   config.concurrent,
                   config.abort_on_error);
            let peeker = Peeker::new(resolver, probes);
            if config.concurrent {
                traverse_concurrent(source, &peeker, &sinks, config.abort_on_error)
            } else {
                traverse_sequential(source, &peeker, &sinks, config.abort_on_error)
            }
        });
        sinks.close_all();
        debug!("runner: finished outcome={outcome:?}");
        outcome
    }
}

/// Atajo para `Runner::new(config).run(probes, resolver)`.
pub fn run<R: Resolver>(probes: Vec<Probe<R::Entity>>, resolver: R, config: RunConfig) -> Result<bool, RunError> {
    Runner::new(config).run(probes, resolver)
}

fn traverse_sequential<R: Resolver>(source: IdentifierSource,
                                    peeker: &Peeker<R>,
                                    sinks: &SinkManager,
                                    abort_on_error: bool)
                                    -> Result<bool, RunError> {
    for item in source {
        let identifier = item?;
        for result in peeker.peek(identifier.as_deref()) {
            if !emit(sinks, &result, abort_on_error)? {
                debug!("runner: stopping at {:?}", result.identifier());
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn traverse_concurrent<R: Resolver>(source: IdentifierSource,
                                    peeker: &Peeker<R>,
                                    sinks: &SinkManager,
                                    abort_on_error: bool)
                                    -> Result<bool, RunError> {
    let stop = source.par_bridge()
                     .map(|item| -> Result<bool, RunError> {
                         let identifier = item?;
                         // Todos los probes del identificador corren antes de emitir.
                         let results: Vec<PeekResult> = peeker.peek(identifier.as_deref()).collect();
                         for result in &results {
                             if !emit(sinks, result, abort_on_error)? {
                                 return Ok(false);
                             }
                         }
                         Ok(true)
                     })
                     .find_any(|outcome| !matches!(outcome, Ok(true)));

    match stop {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(e),
    }
}

/// Escribe `result` en su destino y devuelve la señal de continuación.
/// `Exhausted` no se escribe.
fn emit(sinks: &SinkManager, result: &PeekResult, abort_on_error: bool) -> Result<bool, RunError> {
    if let Some(identifier) = result.identifier() {
        let sink = sinks.resolve(&sinks.key_for(identifier))?;
        sink.write_line(&result.to_string())?;
    }
    Ok(result.continues(abort_on_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use peek_core::{Primitive, ResolveError};
    use peek_sinks::{Sink, SinkKey};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    struct Echo;

    impl Resolver for Echo {
        type Entity = String;

        fn resolve(&self, name: &str) -> Result<String, ResolveError> {
            match name {
                "B" => Err(ResolveError::NotFound(name.into())),
                _ => Ok(name.into()),
            }
        }

        fn primitive(&self, primitive: Primitive) -> String {
            primitive.name().into()
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn name_probe() -> Vec<Probe<String>> {
        vec![Probe::single("Name:", |s: &String| Some(s.clone()))]
    }

    #[test]
    fn emit_writes_rendered_line_to_shared_sink() {
        let captured = Captured::default();
        let sinks = SinkManager::with_shared(Sink::from_writer(Box::new(captured.clone())), None);
        let peeker = Peeker::new(Echo, name_probe());
        let source = IdentifierSource::build(&RunConfig::new().identifiers(["foo.Bar"]),
                                             Box::new(StdConsole)).unwrap();
        assert!(traverse_sequential(source, &peeker, &sinks, false).unwrap());
        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "\n\tName:\nfoo.Bar\n");
        assert_eq!(sinks.key_for("foo.Bar"), SinkKey::Shared);
    }

    #[test]
    fn exhausted_is_not_written_and_stops() {
        let captured = Captured::default();
        let sinks = SinkManager::with_shared(Sink::from_writer(Box::new(captured.clone())), None);
        assert!(!emit(&sinks, &PeekResult::Exhausted, false).unwrap());
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn sequential_abort_stops_at_first_failure() {
        let captured = Captured::default();
        let sinks = SinkManager::with_shared(Sink::from_writer(Box::new(captured.clone())), None);
        let peeker = Peeker::new(Echo, name_probe());
        let source = IdentifierSource::build(&RunConfig::new().identifiers(["A", "B", "C"]),
                                             Box::new(StdConsole)).unwrap();
        assert!(!traverse_sequential(source, &peeker, &sinks, true).unwrap());
        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "\n\tName:\nA\nentity not found: B\n");
    }

    #[test]
    fn empty_probe_list_is_rejected_before_anything_else() {
        let err = run(Vec::<Probe<String>>::new(), Echo, RunConfig::new()).err().unwrap();
        assert!(matches!(err, RunError::NoProbes));
    }

    #[test]
    fn help_short_circuits_to_false() {
        let outcome = run(name_probe(), Echo, RunConfig::new().help(true).identifiers(["A"])).unwrap();
        assert!(!outcome);
    }
}
