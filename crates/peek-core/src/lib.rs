//! peek-core: resolución de identificadores y ejecución de probes.
//!
//! Este crate contiene las piezas puras del pipeline de inspección:
//! - `normalize`: canonicaliza el texto de un identificador.
//! - `Resolver`: punto de inyección que convierte un identificador en entidad.
//! - `Probe`: operación de extracción de sólo lectura con su descripción.
//! - `Peeker`: aplica la lista de probes y produce un `PeekResult` por probe.
//!
//! Ningún tipo de este crate realiza I/O por sí mismo.

pub mod constants;
pub mod errors;
pub mod normalize;
pub mod peeker;
pub mod primitive;
pub mod probe;
pub mod resolver;
pub mod result;

pub use errors::{PeekError, ProbeError, ResolveError};
pub use normalize::normalize;
pub use peeker::Peeker;
pub use primitive::Primitive;
pub use probe::{Extraction, Probe};
pub use resolver::Resolver;
pub use result::PeekResult;
