//! Probes: operaciones de extracción de sólo lectura.

use std::fmt;
use std::sync::Arc;

use crate::errors::ProbeError;

/// Valores devueltos por una extracción.
///
/// `None` externo: el probe no devolvió secuencia. `None` interno: una
/// posición concreta de la secuencia está vacía. Ninguno de los dos se
/// confunde con el fin de la entrada, que es `PeekResult::Exhausted`.
pub type Extraction = Option<Vec<Option<String>>>;

type Extractor<E> = dyn Fn(&E) -> Result<Extraction, ProbeError> + Send + Sync;

/// Par inmutable (descripción, operación de extracción).
pub struct Probe<E> {
    description: String,
    extractor: Arc<Extractor<E>>,
}

impl<E> Probe<E> {
    pub fn new<F>(description: impl Into<String>, extractor: F) -> Self
        where F: Fn(&E) -> Result<Extraction, ProbeError> + Send + Sync + 'static
    {
        Self { description: description.into(),
               extractor: Arc::new(extractor) }
    }

    /// Atajo para probes que devuelven un único valor opcional.
    pub fn single<F>(description: impl Into<String>, extractor: F) -> Self
        where F: Fn(&E) -> Option<String> + Send + Sync + 'static
    {
        Self::new(description, move |entity| Ok(Some(vec![extractor(entity)])))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn extract(&self, entity: &E) -> Result<Extraction, ProbeError> {
        (self.extractor)(entity)
    }
}

impl<E> Clone for Probe<E> {
    fn clone(&self) -> Self {
        Self { description: self.description.clone(),
               extractor: Arc::clone(&self.extractor) }
    }
}

impl<E> fmt::Debug for Probe<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe").field("description", &self.description).finish_non_exhaustive()
    }
}
