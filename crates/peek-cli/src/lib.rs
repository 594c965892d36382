//! Capa de línea de comandos de peekflow: catálogo de tipos, probes
//! estándar, flags y configuración ambiental.

pub mod catalog;
pub mod config;
pub mod options;
pub mod probes;

pub use catalog::{Catalog, CatalogError, TypeDescriptor, TypeKind};
pub use config::AppConfig;
pub use options::Cli;
