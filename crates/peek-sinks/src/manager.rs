//! Gestor de destinos de salida.
//!
//! Estrategias de direccionamiento (fijas durante una ejecución):
//! - `Stdout`: toda clave va a la salida estándar.
//! - `SingleFile`: toda clave va a un único archivo nuevo, abierto al crear el
//!   gestor; falla de inmediato si el archivo ya existe.
//! - `Directory`: cada identificador va a su propio archivo nuevo dentro del
//!   directorio, creado en el primer uso de la clave.
//!
//! La memoización usa la API `entry` de `DashMap`: el shard queda bloqueado
//! mientras se abre el archivo, así que el abridor corre una sola vez por
//! clave aunque varios hilos compitan por ella.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, warn};

use crate::error::SinkError;
use crate::sink::Sink;

/// Clave de direccionamiento de un resultado.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SinkKey {
    /// Salida compartida constante.
    Shared,
    /// Un identificador concreto (modo directorio).
    Entity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkStrategy {
    Stdout,
    SingleFile(PathBuf),
    Directory(PathBuf),
}

pub struct SinkManager {
    directory: Option<PathBuf>,
    sinks: DashMap<SinkKey, Arc<Sink>>,
    opened: AtomicUsize,
    closed: AtomicBool,
}

impl SinkManager {
    /// Prepara el gestor según `strategy`.
    ///
    /// Errores: `AlreadyExists` si el archivo único ya existe;
    /// `NotADirectory` si el directorio no existe o no es un directorio.
    pub fn open(strategy: SinkStrategy) -> Result<Self, SinkError> {
        match strategy {
            SinkStrategy::Stdout => Ok(Self::with_shared(Sink::stdout(), None)),
            SinkStrategy::SingleFile(path) => {
                let sink = Sink::create_new(&path)?;
                debug!("sinks: opened single file {}", path.display());
                let manager = Self::with_shared(sink, None);
                manager.opened.fetch_add(1, Ordering::SeqCst);
                Ok(manager)
            }
            SinkStrategy::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(SinkError::NotADirectory(dir));
                }
                Ok(Self::with_shared(Sink::stdout(), Some(dir)))
            }
        }
    }

    /// Gestor con un destino compartido arbitrario y, opcionalmente, un
    /// directorio para destinos por identificador.
    pub fn with_shared(shared: Sink, directory: Option<PathBuf>) -> Self {
        let sinks = DashMap::new();
        sinks.insert(SinkKey::Shared, Arc::new(shared));
        Self { directory,
               sinks,
               opened: AtomicUsize::new(0),
               closed: AtomicBool::new(false) }
    }

    /// Directorio de destinos por identificador, si la estrategia lo usa.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Clave bajo la cual se escribe `identifier` con la estrategia actual.
    pub fn key_for(&self, identifier: &str) -> SinkKey {
        match self.directory {
            Some(_) => SinkKey::Entity(identifier.to_string()),
            None => SinkKey::Shared,
        }
    }

    /// Devuelve el destino de `key`, abriéndolo en su primer uso.
    ///
    /// Búsquedas posteriores de la misma clave devuelven el mismo `Arc`.
    pub fn resolve(&self, key: &SinkKey) -> Result<Arc<Sink>, SinkError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SinkError::Closed);
        }
        let (dir, name) = match (&self.directory, key) {
            (Some(dir), SinkKey::Entity(name)) => (dir, name),
            _ => {
                return self.sinks
                           .get(&SinkKey::Shared)
                           .map(|shared| Arc::clone(shared.value()))
                           .ok_or(SinkError::Closed)
            }
        };
        let entry = self.sinks.entry(key.clone()).or_try_insert_with(|| {
            let path = dir.join(name);
            let sink = Sink::create_new(&path)?;
            self.opened.fetch_add(1, Ordering::SeqCst);
            debug!("sinks: opened {}", path.display());
            Ok::<_, SinkError>(Arc::new(sink))
        })?;
        Ok(Arc::clone(entry.value()))
    }

    /// Número de archivos abiertos hasta ahora.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Cierra cada destino memoizado exactamente una vez.
    ///
    /// Los fallos individuales se registran y se descartan. Llamadas
    /// posteriores no hacen nada.
    pub fn close_all(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let keys: Vec<SinkKey> = self.sinks.iter().map(|entry| entry.key().clone()).collect();
        for key in keys {
            if let Some((_, sink)) = self.sinks.remove(&key) {
                if let Err(e) = sink.flush() {
                    warn!("sinks: close failed for {key:?}: {e}");
                }
            }
        }
        debug!("sinks: closed");
    }
}

impl Drop for SinkManager {
    fn drop(&mut self) {
        self.close_all();
    }
}
