//! Application-wide service registry

use crate::locator::ServiceLocator;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Application-wide registry of services, keyed by type.
///
/// At most one service per type is held; registering a second value of the
/// same type replaces the first. Values are shared out as `Arc<T>`.
pub struct ServiceRegistry {
	services: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceRegistry {
	/// Creates an empty registry.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_di::ServiceRegistry;
	///
	/// let registry = ServiceRegistry::new();
	/// assert!(registry.is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			services: RwLock::new(HashMap::new()),
		}
	}

	/// Registers a service value, replacing any previous value of the same
	/// type.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_di::{ServiceLocatorExt, ServiceRegistry};
	///
	/// let registry = ServiceRegistry::new();
	/// registry.register("primary".to_string());
	/// registry.register("replacement".to_string());
	///
	/// assert_eq!(*registry.get::<String>().unwrap(), "replacement");
	/// ```
	pub fn register<T: Any + Send + Sync>(&self, service: T) {
		self.register_arc(Arc::new(service));
	}

	/// Registers an already-shared service without re-wrapping it.
	///
	/// Useful when the caller keeps its own handle to the service and wants
	/// pointer identity preserved.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_di::{ServiceLocatorExt, ServiceRegistry};
	/// use std::sync::Arc;
	///
	/// struct Clock;
	///
	/// let clock = Arc::new(Clock);
	/// let registry = ServiceRegistry::new();
	/// registry.register_arc(Arc::clone(&clock));
	///
	/// assert!(Arc::ptr_eq(&clock, &registry.get::<Clock>().unwrap()));
	/// ```
	pub fn register_arc<T: Any + Send + Sync>(&self, service: Arc<T>) {
		let mut services = self
			.services
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		services.insert(TypeId::of::<T>(), service);
	}

	/// Removes the service registered for type `T`, returning whether one
	/// was present.
	pub fn remove<T: Any + Send + Sync>(&self) -> bool {
		let mut services = self
			.services
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		services.remove(&TypeId::of::<T>()).is_some()
	}

	/// Number of registered services.
	pub fn len(&self) -> usize {
		self.services
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	/// Returns `true` when no services are registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ServiceRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ServiceLocator for ServiceRegistry {
	fn get_by_id(&self, id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
		let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
		services.get(&id).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locator::ServiceLocatorExt;

	#[derive(Debug, PartialEq)]
	struct Greeter {
		greeting: &'static str,
	}

	#[test]
	fn register_and_get_roundtrip() {
		let registry = ServiceRegistry::new();
		registry.register(Greeter { greeting: "hello" });

		let greeter = registry.get::<Greeter>().unwrap();
		assert_eq!(greeter.greeting, "hello");
	}

	#[test]
	fn get_missing_returns_none() {
		let registry = ServiceRegistry::new();
		assert!(registry.get::<Greeter>().is_none());
		assert!(!registry.contains::<Greeter>());
	}

	#[test]
	fn register_replaces_previous_value() {
		let registry = ServiceRegistry::new();
		registry.register(Greeter { greeting: "first" });
		registry.register(Greeter { greeting: "second" });

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.get::<Greeter>().unwrap().greeting, "second");
	}

	#[test]
	fn register_arc_preserves_identity() {
		let registry = ServiceRegistry::new();
		let greeter = Arc::new(Greeter { greeting: "shared" });
		registry.register_arc(Arc::clone(&greeter));

		assert!(Arc::ptr_eq(&greeter, &registry.get::<Greeter>().unwrap()));
	}

	#[test]
	fn remove_unregisters_service() {
		let registry = ServiceRegistry::new();
		registry.register(Greeter { greeting: "gone" });

		assert!(registry.remove::<Greeter>());
		assert!(!registry.remove::<Greeter>());
		assert!(registry.is_empty());
	}

	#[test]
	fn distinct_types_coexist() {
		let registry = ServiceRegistry::new();
		registry.register(1u32);
		registry.register("text".to_string());

		assert_eq!(*registry.get::<u32>().unwrap(), 1);
		assert_eq!(*registry.get::<String>().unwrap(), "text");
		assert_eq!(registry.len(), 2);
	}

	#[test]
	fn shared_across_threads() {
		let registry = Arc::new(ServiceRegistry::new());
		registry.register(0usize);

		let handles: Vec<_> = (0..8)
			.map(|i| {
				let registry = Arc::clone(&registry);
				std::thread::spawn(move || {
					registry.register_arc(Arc::new(i));
					registry.get::<usize>().is_some()
				})
			})
			.collect();

		for handle in handles {
			assert!(handle.join().unwrap());
		}
		assert_eq!(registry.len(), 1);
	}
}
