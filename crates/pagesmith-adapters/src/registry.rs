//! In-memory backend registry.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard},
};

use pagesmith_core::{
    application::{ApplicationError, ports::BackendRegistry, ports::TargetBackend},
    domain::Framework,
    error::PagesmithResult,
};
use tracing::debug;

use crate::backends;

type BackendMap = HashMap<Framework, Arc<dyn TargetBackend>>;

/// Thread-safe framework → backend map.
#[derive(Clone)]
pub struct InMemoryBackendRegistry {
    inner: Arc<RwLock<BackendMap>>,
}

impl InMemoryBackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry with every built-in backend registered.
    pub fn with_builtin() -> PagesmithResult<Self> {
        let registry = Self::new();
        registry.load_builtin()?;
        Ok(registry)
    }

    /// Register the built-in backends.
    pub fn load_builtin(&self) -> PagesmithResult<()> {
        for backend in backends::builtin() {
            self.register(backend)?;
        }
        Ok(())
    }

    /// Get the number of registered backends.
    pub fn len(&self) -> PagesmithResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> PagesmithResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove the backend for `framework`, returning whether one existed.
    pub fn unregister(&self, framework: Framework) -> PagesmithResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryLockError)?;
        Ok(inner.remove(&framework).is_some())
    }

    fn read(&self) -> PagesmithResult<RwLockReadGuard<'_, BackendMap>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::RegistryLockError)?)
    }
}

impl Default for InMemoryBackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRegistry for InMemoryBackendRegistry {
    fn get(&self, framework: Framework) -> PagesmithResult<Option<Arc<dyn TargetBackend>>> {
        Ok(self.read()?.get(&framework).cloned())
    }

    fn register(&self, backend: Arc<dyn TargetBackend>) -> PagesmithResult<()> {
        let framework = backend.framework();
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryLockError)?;
        if inner.insert(framework, backend).is_some() {
            debug!(%framework, "Replaced backend");
        }
        Ok(())
    }

    fn frameworks(&self) -> PagesmithResult<Vec<Framework>> {
        let mut frameworks: Vec<Framework> = self.read()?.keys().copied().collect();
        frameworks.sort();
        Ok(frameworks)
    }
}
