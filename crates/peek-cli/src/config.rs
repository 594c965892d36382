//! Configuración ambiental del binario.
//! Carga `.env` una sola vez y expone los parámetros que no son flags:
//! nombre del programa en la ayuda y catálogo de tipos.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_PROGRAM: &str = "peekflow";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Nombre mostrado en el uso y los ejemplos de la ayuda.
    pub program: String,
    /// Catálogo JSON alternativo; `None` usa el embebido.
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// variables (permite probar sin tocar el entorno del proceso).
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let program = lookup("PEEKFLOW_PROGRAM").filter(|p| !p.trim().is_empty())
                                                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let catalog = lookup("PEEKFLOW_CATALOG").filter(|p| !p.trim().is_empty())
                                                .map(PathBuf::from);
        Self { program, catalog }
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }
}
