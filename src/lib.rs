//! peekflow
//!
//! Pipeline de inspección: toma identificadores (posicionales, de un archivo
//! o de un prompt interactivo), los resuelve con un `Resolver` inyectado,
//! ejecuta la lista de probes sobre cada entidad y enruta cada resultado a
//! la salida estándar, a un archivo único o a un archivo por identificador.
//!
//! Módulos:
//! - `config`: parámetros de una ejecución (`RunConfig`).
//! - `source`: fuentes de identificadores y la consola interactiva.
//! - `runner`: recorrido secuencial o concurrente y agregación.
//! - `errors`: errores fatales de la ejecución.
//!
//! Los crates `peek-core` y `peek-sinks` se reexportan para los llamadores.

pub mod config;
pub mod errors;
pub mod runner;
pub mod source;

pub use config::{OutputTarget, RunConfig};
pub use errors::RunError;
pub use runner::{run, Runner};
pub use source::{Console, IdentifierSource, SourceKind, StdConsole};

pub use peek_core::{normalize, Extraction, PeekError, PeekResult, Peeker, Primitive, Probe, ProbeError, ResolveError,
                    Resolver};
pub use peek_sinks::{Sink, SinkError, SinkKey, SinkManager, SinkStrategy};
