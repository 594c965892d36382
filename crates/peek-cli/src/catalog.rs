//! Catálogo JSON de descriptores de tipos.
//!
//! Es el `Resolver` de la línea de comandos: cada nombre canónico del
//! catálogo se resuelve a su descriptor, y los alias primitivos se sintetizan
//! sin consultar el catálogo.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use peekflow::{Primitive, ResolveError, Resolver};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catálogo embebido en el binario.
pub const BUILTIN_CATALOG: &str = include_str!("../catalog/std.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog entry: {0}")]
    Duplicate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Struct,
    Enum,
    Union,
    Trait,
    Primitive,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Union => "union",
            TypeKind::Trait => "trait",
            TypeKind::Primitive => "primitive",
        }
    }
}

/// Descriptor de un tipo: la entidad sobre la que corren los probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Nombre canónico con puntos (`std.vec.Vec`).
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub generics: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    /// Sólo los enums tienen variantes.
    #[serde(default)]
    pub variants: Option<Vec<String>>,
}

impl TypeDescriptor {
    pub fn primitive(primitive: Primitive) -> Self {
        Self { name: primitive.name().to_string(),
               kind: TypeKind::Primitive,
               modifiers: Vec::new(),
               generics: Vec::new(),
               traits: Vec::new(),
               fields: Vec::new(),
               methods: Vec::new(),
               variants: None }
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Ruta del módulo contenedor; los tipos sin módulo devuelven `None`.
    pub fn module(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(module, _)| module)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    types: Vec<TypeDescriptor>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: HashMap<String, Arc<TypeDescriptor>>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let mut types = HashMap::with_capacity(file.types.len());
        for descriptor in file.types {
            let name = descriptor.name.clone();
            if types.insert(name.clone(), Arc::new(descriptor)).is_some() {
                return Err(CatalogError::Duplicate(name));
            }
        }
        Ok(Self { types })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read { path: path.to_path_buf(),
                                                                                  source })?;
        Self::from_json(&text)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Resolver for Catalog {
    type Entity = Arc<TypeDescriptor>;

    fn resolve(&self, name: &str) -> Result<Self::Entity, ResolveError> {
        if name.chars().any(char::is_whitespace) {
            return Err(ResolveError::Invalid { name: name.to_string(),
                                               reason: "contains whitespace".into() });
        }
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }

    fn primitive(&self, primitive: Primitive) -> Self::Entity {
        Arc::new(TypeDescriptor::primitive(primitive))
    }
}
