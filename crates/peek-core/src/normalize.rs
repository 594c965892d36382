//! Canonicalización de identificadores.
//!
//! Acepta la forma con puntos (`org.example.Foo`), la forma de ruta
//! (`org/example/Foo.class`) o una mezcla de ambas (`./org/example/Foo`).

use crate::constants::{CANONICAL_SEPARATOR, PATH_SEPARATOR, TYPE_FILE_SUFFIX};

/// Devuelve la forma canónica de `raw`.
///
/// Elimina los marcadores de directorio actual iniciales, un sufijo de archivo
/// de tipo final (o un punto suelto final), convierte los separadores de ruta
/// al separador canónico y descarta los segmentos en blanco. La pasada se
/// repite hasta alcanzar un punto fijo, de modo que la función es idempotente.
///
/// Es total: un texto vacío o en blanco produce un texto vacío, y rechazarlo
/// es responsabilidad del llamador.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let trimmed = raw.trim_start_matches(CANONICAL_SEPARATOR);
    let trimmed = trimmed.strip_suffix(TYPE_FILE_SUFFIX)
                         .or_else(|| trimmed.strip_suffix(CANONICAL_SEPARATOR))
                         .unwrap_or(trimmed);
    let segments: Vec<&str> = trimmed.split(PATH_SEPARATOR)
                                     .filter(|segment| !segment.trim().is_empty())
                                     .collect();
    segments.join(CANONICAL_SEPARATOR.to_string().as_str())
}
