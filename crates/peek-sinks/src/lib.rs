//! peek-sinks
//!
//! Gestión de destinos de salida del pipeline de inspección. Cada clave se
//! asocia como mucho a un destino abierto durante toda la ejecución, y todo
//! archivo se abre con semántica de creación nueva (nunca se sobrescribe).
//!
//! Módulos:
//! - `sink`: destino de escritura serializado.
//! - `manager`: estrategias de direccionamiento y memoización por clave.
//! - `error`: errores de apertura y escritura.

pub mod error;
pub mod manager;
pub mod sink;

pub use error::SinkError;
pub use manager::{SinkKey, SinkManager, SinkStrategy};
pub use sink::Sink;
