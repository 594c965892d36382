//! Propiedades observables del `Peeker` con una lista de probes variable.

use peek_core::{normalize, PeekResult, Peeker, Primitive, Probe, ResolveError, Resolver};

struct Catalog(Vec<&'static str>);

impl Resolver for Catalog {
    type Entity = String;

    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        self.0
            .iter()
            .find(|known| **known == name)
            .map(|known| known.to_string())
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }

    fn primitive(&self, primitive: Primitive) -> String {
        primitive.name().to_string()
    }
}

fn name_probes(n: usize) -> Vec<Probe<String>> {
    (0..n).map(|i| Probe::single(format!("Probe #{i}:"), |s: &String| Some(s.clone())))
          .collect()
}

#[test]
fn resolved_identifiers_yield_one_result_per_probe() {
    for n in 1..5 {
        let peeker = Peeker::new(Catalog(vec!["foo.Bar"]), name_probes(n));
        let out: Vec<PeekResult> = peeker.peek(Some("foo/Bar.class")).collect();
        assert_eq!(out.len(), n);
        for (i, r) in out.iter().enumerate() {
            assert!(matches!(r, PeekResult::Success { description, .. } if *description == format!("Probe #{i}:")));
        }
    }
}

#[test]
fn unresolved_identifiers_yield_exactly_one_failure() {
    for n in 1..5 {
        let peeker = Peeker::new(Catalog(vec![]), name_probes(n));
        let out: Vec<PeekResult> = peeker.peek(Some("foo.Bar")).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_failure());
    }
}

#[test]
fn every_primitive_alias_resolves_without_catalog() {
    let peeker = Peeker::new(Catalog(vec![]), name_probes(1));
    for p in Primitive::ALL {
        let out: Vec<PeekResult> = peeker.peek(Some(p.name())).collect();
        assert_eq!(out[0].to_string(), format!("\n\tProbe #0:\n{}", p.name()));
    }
}

#[test]
fn canonical_name_rendering() {
    let probes = vec![Probe::single("Name:", |s: &String| Some(s.clone()))];
    let peeker = Peeker::new(Catalog(vec!["foo.Bar"]), probes);
    let rendered: Vec<String> = peeker.peek(Some("foo.Bar")).map(|r| r.to_string()).collect();
    assert_eq!(rendered, vec!["\n\tName:\nfoo.Bar".to_string()]);
    assert_eq!(normalize("./foo/Bar.class"), "foo.Bar");
}
