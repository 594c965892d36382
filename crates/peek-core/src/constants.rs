//! Constantes del normalizador de identificadores.

/// Separador canónico entre segmentos de un identificador.
pub const CANONICAL_SEPARATOR: char = '.';

/// Separador de estilo directorio aceptado en la entrada.
pub const PATH_SEPARATOR: char = '/';

/// Sufijo de archivo de tipo que se elimina al final del identificador.
pub const TYPE_FILE_SUFFIX: &str = ".class";
