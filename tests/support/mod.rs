use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use peekflow::{Console, Primitive, Probe, ResolveError, Resolver};

/// Resolver que registra cada llamada y falla para los nombres indicados.
#[derive(Clone, Default)]
pub struct Recording {
    pub failing: Vec<&'static str>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    pub fn failing(names: &[&'static str]) -> Self {
        Self { failing: names.to_vec(),
               ..Self::default() }
    }

    pub fn resolved(&self) -> Vec<String> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort();
        calls
    }
}

impl Resolver for Recording {
    type Entity = String;

    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.failing.contains(&name) {
            Err(ResolveError::NotFound(name.to_string()))
        } else {
            Ok(name.to_string())
        }
    }

    fn primitive(&self, primitive: Primitive) -> String {
        primitive.name().to_string()
    }
}

pub fn simple_name() -> Vec<Probe<String>> {
    vec![Probe::single("Simple Name:", |s: &String| s.rsplit('.').next().map(str::to_string))]
}

pub fn failing_then_simple_name() -> Vec<Probe<String>> {
    let mut probes = vec![Probe::new("Broken:", |_: &String| Err("Oops!".into()))];
    probes.extend(simple_name());
    probes
}

/// Consola con líneas predefinidas.
pub struct Scripted {
    pub interactive: bool,
    pub lines: VecDeque<String>,
}

impl Scripted {
    pub fn new(interactive: bool, lines: &[&str]) -> Self {
        Self { interactive,
               lines: lines.iter().map(|l| l.to_string()).collect() }
    }
}

impl Console for Scripted {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn greet(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
