//! Request-scoped service overlay

use crate::locator::ServiceLocator;
use crate::registry::ServiceRegistry;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Request-scoped overlay on top of a parent locator.
///
/// Lookups consult the scope's own services first and fall through to the
/// parent, so a request can shadow an application-wide service (a per-request
/// theme, the authenticated user, ...) without mutating shared state. One
/// scope is created per request and dropped with it.
///
/// # Examples
///
/// ```
/// use grappelli_di::{ServiceLocatorExt, ServiceRegistry, ServiceScope};
/// use std::sync::Arc;
///
/// let app = Arc::new(ServiceRegistry::new());
/// app.register("app-wide".to_string());
///
/// let scope = ServiceScope::new(app);
/// assert_eq!(*scope.get::<String>().unwrap(), "app-wide");
///
/// scope.register("request-local".to_string());
/// assert_eq!(*scope.get::<String>().unwrap(), "request-local");
/// ```
pub struct ServiceScope {
	parent: Arc<dyn ServiceLocator>,
	local: ServiceRegistry,
}

impl ServiceScope {
	/// Creates a scope over `parent` with no local services.
	pub fn new(parent: Arc<dyn ServiceLocator>) -> Self {
		Self {
			parent,
			local: ServiceRegistry::new(),
		}
	}

	/// Registers a service visible only within this scope.
	pub fn register<T: Any + Send + Sync>(&self, service: T) {
		self.local.register(service);
	}

	/// Registers an already-shared service visible only within this scope.
	pub fn register_arc<T: Any + Send + Sync>(&self, service: Arc<T>) {
		self.local.register_arc(service);
	}
}

impl ServiceLocator for ServiceScope {
	fn get_by_id(&self, id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
		self.local
			.get_by_id(id)
			.or_else(|| self.parent.get_by_id(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locator::ServiceLocatorExt;

	struct Theme {
		name: &'static str,
	}

	#[test]
	fn falls_through_to_parent() {
		let parent = Arc::new(ServiceRegistry::new());
		parent.register(Theme { name: "default" });

		let scope = ServiceScope::new(parent);
		assert_eq!(scope.get::<Theme>().unwrap().name, "default");
	}

	#[test]
	fn local_registration_shadows_parent() {
		let parent = Arc::new(ServiceRegistry::new());
		parent.register(Theme { name: "default" });

		let scope = ServiceScope::new(Arc::clone(&parent) as Arc<dyn ServiceLocator>);
		scope.register(Theme { name: "per-request" });

		assert_eq!(scope.get::<Theme>().unwrap().name, "per-request");
		// Parent is untouched.
		assert_eq!(parent.get::<Theme>().unwrap().name, "default");
	}

	#[test]
	fn missing_everywhere_is_none() {
		let scope = ServiceScope::new(Arc::new(ServiceRegistry::new()));
		assert!(scope.get::<Theme>().is_none());
	}

	#[test]
	fn scopes_can_stack() {
		let app = Arc::new(ServiceRegistry::new());
		app.register(0u8);

		let outer = Arc::new(ServiceScope::new(app));
		outer.register(1u8);

		let inner = ServiceScope::new(outer);
		assert_eq!(*inner.get::<u8>().unwrap(), 1);

		inner.register(2u8);
		assert_eq!(*inner.get::<u8>().unwrap(), 2);
	}
}
