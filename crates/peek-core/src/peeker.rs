//! `Peeker`: resuelve un identificador y le aplica la lista de probes.

use std::iter;

use log::debug;

use crate::errors::PeekError;
use crate::normalize::normalize;
use crate::primitive::Primitive;
use crate::probe::Probe;
use crate::resolver::Resolver;
use crate::result::PeekResult;

/// Inspector sin estado por llamada.
///
/// Los errores de resolución y de probes se capturan aquí y nunca se
/// propagan más allá de `peek`. Un extractor debe informar sus fallos con
/// `Err`: un pánico dentro de un probe no se contiene y, en modo
/// concurrente, aborta toda la ejecución.
pub struct Peeker<R: Resolver> {
    resolver: R,
    probes: Vec<Probe<R::Entity>>,
}

impl<R: Resolver> Peeker<R> {
    pub fn new(resolver: R, probes: Vec<Probe<R::Entity>>) -> Self {
        Self { resolver, probes }
    }

    pub fn probes(&self) -> &[Probe<R::Entity>] {
        &self.probes
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Inspecciona `identifier`.
    ///
    /// - `None`: un único `PeekResult::Exhausted`.
    /// - En blanco, o vacío tras normalizar: un único `Failure` de
    ///   identificador vacío; el resolver no se consulta.
    /// - No resoluble: un único `Failure`, sin ejecutar ningún probe.
    /// - Resuelto: un resultado por probe, en orden; los probes se ejecutan a
    ///   medida que se consume el iterador.
    pub fn peek<'a>(&'a self, identifier: Option<&str>) -> Box<dyn Iterator<Item = PeekResult> + Send + 'a> {
        let raw = match identifier {
            None => return Box::new(iter::once(PeekResult::Exhausted)),
            Some(raw) => raw,
        };
        if raw.trim().is_empty() {
            return Box::new(iter::once(PeekResult::Failure { identifier: raw.to_string(),
                                                             error: PeekError::EmptyIdentifier(raw.to_string()) }));
        }

        let name = normalize(raw);
        if name.is_empty() {
            return Box::new(iter::once(PeekResult::Failure { identifier: name,
                                                             error: PeekError::EmptyIdentifier(raw.to_string()) }));
        }
        let entity = match Primitive::from_name(&name) {
            Some(primitive) => self.resolver.primitive(primitive),
            None => match self.resolver.resolve(&name) {
                Ok(entity) => entity,
                Err(e) => {
                    debug!("peek: unresolved identifier={name}: {e}");
                    return Box::new(iter::once(PeekResult::Failure { identifier: name,
                                                                     error: PeekError::Unresolved(e) }));
                }
            },
        };

        Box::new(self.probes.iter().map(move |probe| apply(&name, probe, &entity)))
    }
}

fn apply<E>(identifier: &str, probe: &Probe<E>, entity: &E) -> PeekResult {
    match probe.extract(entity) {
        Ok(values) => PeekResult::Success { identifier: identifier.to_string(),
                                            description: probe.description().to_string(),
                                            values },
        Err(source) => PeekResult::Failure { identifier: identifier.to_string(),
                                             error: PeekError::Probe { description: probe.description().to_string(),
                                                                       source } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResolveError;

    struct Names;

    impl Resolver for Names {
        type Entity = String;

        fn resolve(&self, name: &str) -> Result<String, ResolveError> {
            if name.starts_with("missing") {
                Err(ResolveError::NotFound(name.to_string()))
            } else {
                Ok(name.to_string())
            }
        }

        fn primitive(&self, primitive: Primitive) -> String {
            format!("<{primitive}>")
        }
    }

    fn probes() -> Vec<Probe<String>> {
        vec![Probe::single("Name:", |s: &String| Some(s.clone())),
             Probe::new("Empty slot:", |_: &String| Ok(Some(vec![None]))),
             Probe::new("No values:", |_: &String| Ok(None)),
             Probe::new("Broken:", |_: &String| Err("Oops!".into()))]
    }

    #[test]
    fn absent_identifier_yields_exhausted() {
        let peeker = Peeker::new(Names, probes());
        let out: Vec<_> = peeker.peek(None).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_exhausted());
    }

    #[test]
    fn blank_identifier_yields_one_failure() {
        let peeker = Peeker::new(Names, probes());
        for raw in ["", "   ", "\t"] {
            let out: Vec<_> = peeker.peek(Some(raw)).collect();
            assert_eq!(out.len(), 1);
            match &out[0] {
                PeekResult::Failure { error, .. } => assert!(error.to_string().starts_with("Empty identifier:")),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn identifier_empty_after_normalizing_never_reaches_resolver() {
        struct Refusing;

        impl Resolver for Refusing {
            type Entity = String;

            fn resolve(&self, name: &str) -> Result<String, ResolveError> {
                panic!("resolve called with {name:?}");
            }

            fn primitive(&self, primitive: Primitive) -> String {
                primitive.name().to_string()
            }
        }

        let peeker = Peeker::new(Refusing, probes());
        for raw in ["./", "/", "...", "./.class"] {
            let out: Vec<_> = peeker.peek(Some(raw)).collect();
            assert_eq!(out.len(), 1);
            match &out[0] {
                PeekResult::Failure { identifier, error: PeekError::EmptyIdentifier(original) } => {
                    assert_eq!(identifier, "");
                    assert_eq!(original, raw);
                }
                other => panic!("unexpected {other:?}"),
            }
            assert_eq!(out[0].to_string(), format!("Empty identifier: '{raw}'"));
        }
    }

    #[test]
    fn one_result_per_probe_in_order() {
        let peeker = Peeker::new(Names, probes());
        let out: Vec<_> = peeker.peek(Some("org/example/Foo.class")).collect();
        assert_eq!(out.len(), 4);
        match &out[0] {
            PeekResult::Success { identifier, description, values } => {
                assert_eq!(identifier, "org.example.Foo");
                assert_eq!(description, "Name:");
                assert_eq!(values, &Some(vec![Some("org.example.Foo".to_string())]));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(&out[1], PeekResult::Success { values: Some(v), .. } if v == &vec![None]));
        assert!(matches!(&out[2], PeekResult::Success { values: None, .. }));
        match &out[3] {
            PeekResult::Failure { identifier, error } => {
                assert_eq!(identifier, "org.example.Foo");
                assert_eq!(error.render(), "Oops!");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "extractor panicked")]
    fn panicking_extractor_is_not_contained() {
        let peeker = Peeker::new(Names, vec![Probe::new("Panics:", |_: &String| panic!("extractor panicked"))]);
        let _ = peeker.peek(Some("foo.Bar")).count();
    }

    #[test]
    fn unresolved_identifier_short_circuits_probes() {
        let peeker = Peeker::new(Names, probes());
        let out: Vec<_> = peeker.peek(Some("missing/Thing")).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_failure());
        assert_eq!(out[0].identifier(), Some("missing.Thing"));
        assert_eq!(out[0].to_string(), "entity not found: missing.Thing");
    }

    #[test]
    fn primitive_alias_bypasses_resolver() {
        let peeker = Peeker::new(Names, vec![Probe::single("Name:", |s: &String| Some(s.clone()))]);
        let out: Vec<_> = peeker.peek(Some("byte")).collect();
        assert_eq!(out[0].to_string(), "\n\tName:\n<byte>");
    }
}
