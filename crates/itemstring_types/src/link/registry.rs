//! One-shot library registration with a revision gate.
//!
//! Hosts that hot-reload may try to register the library more than once.
//! The rule is explicit and testable: the first registration wins, and a
//! later one succeeds only when it carries a strictly newer revision. An
//! equal or older revision is rejected with
//! [`RegistryError::StaleRevision`].

use std::sync::{Mutex, OnceLock, PoisonError};

use log::debug;

use super::error::RegistryError;

/// Revision state for one loaded copy of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
	revision: u32,
}

impl Registry {
	/// Creates a registry at the given revision.
	pub const fn new(revision: u32) -> Self {
		Self { revision }
	}

	/// Returns the loaded revision.
	pub fn revision(&self) -> u32 {
		self.revision
	}

	/// Moves the registry to a strictly newer revision.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::StaleRevision`] when `revision` is not newer
	/// than the loaded one.
	pub fn upgrade(&mut self, revision: u32) -> Result<(), RegistryError> {
		if revision <= self.revision {
			return Err(RegistryError::StaleRevision {
				loaded: self.revision,
				offered: revision,
			});
		}
		self.revision = revision;
		Ok(())
	}
}

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

fn registry_at(revision: u32) -> (&'static Mutex<Registry>, bool) {
	let mut fresh = false;
	let registry = REGISTRY.get_or_init(|| {
		fresh = true;
		Mutex::new(Registry::new(revision))
	});
	(registry, fresh)
}

/// Registers the library process-wide at `revision`, or upgrades an
/// already-registered copy when `revision` is strictly newer.
///
/// # Errors
///
/// Returns [`RegistryError::StaleRevision`] when a copy at the same or a
/// newer revision is already registered.
pub fn initialize(revision: u32) -> Result<(), RegistryError> {
	let (registry, fresh) = registry_at(revision);
	if fresh {
		debug!("registered at revision {revision}");
		return Ok(());
	}

	let mut guard = registry.lock().unwrap_or_else(PoisonError::into_inner);
	guard.upgrade(revision)?;
	debug!("upgraded to revision {revision}");
	Ok(())
}

/// Returns the registered revision, `None` before the first
/// [`initialize`] call.
pub fn loaded_revision() -> Option<u32> {
	REGISTRY.get().map(|registry| {
		registry
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.revision()
	})
}
