//! Alias bien conocidos de tipos primitivos.
//!
//! El `Peeker` consulta esta tabla antes que al `Resolver` general.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
}

static PRIMITIVES: Lazy<HashMap<&'static str, Primitive>> =
    Lazy::new(|| Primitive::ALL.iter().map(|p| (p.name(), *p)).collect());

impl Primitive {
    pub const ALL: [Primitive; 9] = [Primitive::Boolean,
                                     Primitive::Byte,
                                     Primitive::Char,
                                     Primitive::Double,
                                     Primitive::Float,
                                     Primitive::Int,
                                     Primitive::Long,
                                     Primitive::Short,
                                     Primitive::Void];

    /// Nombre canónico del alias.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Void => "void",
        }
    }

    /// Busca un alias por su nombre canónico exacto.
    pub fn from_name(name: &str) -> Option<Primitive> {
        PRIMITIVES.get(name).copied()
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
