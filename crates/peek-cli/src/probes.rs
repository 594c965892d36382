//! Lista estándar de probes sobre `TypeDescriptor`.

use std::sync::Arc;

use peekflow::Probe;

use crate::catalog::{TypeDescriptor, TypeKind};

pub type TypeProbe = Probe<Arc<TypeDescriptor>>;

fn list(values: &[String]) -> Option<Vec<Option<String>>> {
    Some(values.iter().cloned().map(Some).collect())
}

/// Modificadores seguidos del tipo de declaración (`pub, must_use, enum`).
pub fn modifiers(descriptor: &TypeDescriptor) -> String {
    let mut parts: Vec<&str> = descriptor.modifiers.iter().map(String::as_str).collect();
    parts.push(descriptor.kind.as_str());
    parts.join(", ")
}

/// Probes en el orden en que se imprimen.
pub fn standard() -> Vec<TypeProbe> {
    vec![Probe::single("################################\n\n\tType Modifiers:",
                       |d: &Arc<TypeDescriptor>| Some(modifiers(d))),
         Probe::single("Simple Name:", |d: &Arc<TypeDescriptor>| Some(d.simple_name().to_string())),
         Probe::single("Canonical Name:", |d: &Arc<TypeDescriptor>| Some(d.name.clone())),
         Probe::single("Module:", |d: &Arc<TypeDescriptor>| d.module().map(str::to_string)),
         Probe::new("Generic Parameters:", |d: &Arc<TypeDescriptor>| Ok(list(&d.generics))),
         Probe::new("Traits:", |d: &Arc<TypeDescriptor>| Ok(list(&d.traits))),
         Probe::new("Fields:", |d: &Arc<TypeDescriptor>| Ok(list(&d.fields))),
         Probe::new("Methods:", |d: &Arc<TypeDescriptor>| Ok(list(&d.methods))),
         Probe::new("Variants:", |d: &Arc<TypeDescriptor>| {
             Ok(match d.kind {
                 TypeKind::Enum => d.variants.as_deref().and_then(list),
                 _ => None,
             })
         })]
}
