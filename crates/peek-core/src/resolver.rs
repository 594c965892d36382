use crate::errors::ResolveError;
use crate::primitive::Primitive;

/// Convierte un identificador canónico en la entidad a inspeccionar.
///
/// Lo implementa el llamador; el `Peeker` sólo garantiza que `resolve` recibe
/// texto ya normalizado y no vacío, y que los alias de `Primitive` nunca
/// llegan a `resolve` sino a `primitive`.
pub trait Resolver: Send + Sync {
    /// Entidad resuelta sobre la que corren los probes.
    type Entity: Send + Sync;

    fn resolve(&self, name: &str) -> Result<Self::Entity, ResolveError>;

    /// Entidad correspondiente a un alias primitivo.
    fn primitive(&self, primitive: Primitive) -> Self::Entity;
}
