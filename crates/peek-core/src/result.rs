//! Resultado de inspeccionar un identificador con un probe.

use std::fmt;

use crate::errors::PeekError;
use crate::probe::Extraction;

/// Resultado inmutable de un probe (o del abastecimiento de un identificador).
///
/// Las transiciones de la señal de continuación son:
/// - `Success` -> continuar
/// - `Failure` -> continuar, salvo con abort-on-error
/// - `Exhausted` -> detener siempre
#[derive(Debug)]
pub enum PeekResult {
    /// Extracción completada.
    Success {
        identifier: String,
        description: String,
        values: Extraction,
    },
    /// Error de resolución, de identificador vacío o de un probe.
    Failure { identifier: String, error: PeekError },
    /// No hay más identificadores (p. ej. fin de la entrada interactiva).
    Exhausted,
}

impl PeekResult {
    /// Identificador bajo inspección; `Exhausted` no tiene ninguno.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            PeekResult::Success { identifier, .. } | PeekResult::Failure { identifier, .. } => Some(identifier),
            PeekResult::Exhausted => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PeekResult::Failure { .. })
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, PeekResult::Exhausted)
    }

    /// Señal de continuación del pipeline para este resultado.
    pub fn continues(&self, abort_on_error: bool) -> bool {
        match self {
            PeekResult::Success { .. } => true,
            PeekResult::Failure { .. } => !abort_on_error,
            PeekResult::Exhausted => false,
        }
    }
}

/// Forma textual sin salto de línea final.
///
/// `Success`: línea en blanco, descripción tabulada y un valor no vacío por
/// línea. `Failure`: texto de la causa. `Exhausted`: texto vacío.
impl fmt::Display for PeekResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeekResult::Success { description, values, .. } => {
                write!(f, "\n\t{description}\n")?;
                let present = values.iter().flatten().flatten();
                for (i, value) in present.enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str(value)?;
                }
                Ok(())
            }
            PeekResult::Failure { error, .. } => f.write_str(&error.render()),
            PeekResult::Exhausted => Ok(()),
        }
    }
}
