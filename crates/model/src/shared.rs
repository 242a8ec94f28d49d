//! Shared access for parallel discovery.
//!
//! # Concurrency
//!
//! - **Writes:** exclusive. Each [`SharedRegistry::write`] closure runs under
//!   one write lock, so a re-key performed inside it is never observed half
//!   done.
//! - **Reads:** shared. Once discovery is over, [`SharedRegistry::into_inner`]
//!   hands back the plain [`Registry`] and queries need no locking at all.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::registry::Registry;

/// Cloneable handle to a registry shared between discovery workers.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
	inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
	pub fn new(registry: Registry) -> Self {
		Self {
			inner: Arc::new(RwLock::new(registry)),
		}
	}

	/// Runs `f` with exclusive access.
	pub fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
		f(&mut self.inner.write())
	}

	/// Runs `f` with shared access.
	pub fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
		f(&self.inner.read())
	}

	/// Returns the registry if this is the last handle, or the handle back.
	pub fn into_inner(self) -> Result<Registry, Self> {
		Arc::try_unwrap(self.inner)
			.map(RwLock::into_inner)
			.map_err(|inner| Self { inner })
	}
}

impl From<Registry> for SharedRegistry {
	fn from(registry: Registry) -> Self {
		Self::new(registry)
	}
}
