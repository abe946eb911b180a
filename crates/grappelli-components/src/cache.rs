//! Process-wide component type metadata cache

use crate::injector::InjectorPlan;
use crate::reflect::ComponentType;
use crate::render_mode::RenderMode;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

static GLOBAL_CACHE: Lazy<Arc<TypeMetadataCache>> =
	Lazy::new(|| Arc::new(TypeMetadataCache::new()));

/// Scanned and compiled metadata for one component type.
///
/// Immutable once constructed; shared between all instantiations of the
/// type.
pub struct ComponentTypeInfo {
	render_mode: Option<&'static dyn RenderMode>,
	injector: InjectorPlan,
}

impl ComponentTypeInfo {
	/// Render mode declared on the type, if any.
	pub fn render_mode(&self) -> Option<&'static dyn RenderMode> {
		self.render_mode
	}

	/// The type's compiled injection plan.
	pub fn injector(&self) -> &InjectorPlan {
		&self.injector
	}
}

/// Cache of [`ComponentTypeInfo`] entries, keyed by type identity.
///
/// Filled lazily. Concurrent callers racing on an unseen type may each scan
/// and compile independently; the first entry stored wins and the duplicates
/// are discarded (wasted work, never corruption). Entries are only ever
/// removed by [`clear`](Self::clear), which hosts call at quiescent points
/// such as a hot reload.
pub struct TypeMetadataCache {
	entries: RwLock<HashMap<TypeId, Arc<ComponentTypeInfo>>>,
}

impl TypeMetadataCache {
	/// Creates an empty cache.
	///
	/// Factories default to the process-wide [`global`](Self::global) cache;
	/// a private cache is mainly useful in tests and sandboxed hosts.
	pub fn new() -> Self {
		Self {
			entries: RwLock::new(HashMap::new()),
		}
	}

	/// The process-wide cache shared by all factories.
	pub fn global() -> Arc<TypeMetadataCache> {
		Arc::clone(&GLOBAL_CACHE)
	}

	/// Returns the entry for `component_type`, scanning and compiling it if
	/// this is the first lookup.
	pub fn get_or_create(&self, component_type: ComponentType) -> Arc<ComponentTypeInfo> {
		{
			let entries = self.entries.read();
			if let Some(entry) = entries.get(&component_type.id()) {
				return Arc::clone(entry);
			}
		}

		// Scan outside the lock; a concurrent caller may duplicate the work
		// and whichever entry lands first is the one everyone uses.
		let entry = Arc::new(Self::scan(component_type));

		let mut entries = self.entries.write();
		Arc::clone(entries.entry(component_type.id()).or_insert(entry))
	}

	/// Evicts every entry.
	///
	/// The next lookup for any type re-scans from scratch. Intended for
	/// quiescent points; racing in-flight lookups costs at most one extra
	/// scan.
	pub fn clear(&self) {
		self.entries.write().clear();
	}

	/// Number of cached types.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns `true` when nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	fn scan(component_type: ComponentType) -> ComponentTypeInfo {
		let slots = component_type.dependency_slots();
		tracing::trace!(
			component = component_type.name(),
			slots = slots.len(),
			"scanned component type metadata"
		);
		ComponentTypeInfo {
			render_mode: component_type.declared_render_mode(),
			injector: InjectorPlan::compile(component_type.name(), slots),
		}
	}
}

impl Default for TypeMetadataCache {
	fn default() -> Self {
		Self::new()
	}
}
