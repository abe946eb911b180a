//! Service locator trait

use std::any::{Any, TypeId};
use std::sync::Arc;

/// Object-safe lookup of a service by its type identity.
///
/// A locator either supplies a value for the requested type or reports its
/// absence; it never fails any other way. Implementations must be safe to
/// share across worker threads.
pub trait ServiceLocator: Send + Sync {
	/// Looks up the service registered under `id`.
	///
	/// Returns `None` when no service of that type is registered.
	fn get_by_id(&self, id: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;
}

/// Typed convenience view over any [`ServiceLocator`].
///
/// Blanket-implemented so it is usable both on concrete registries and on
/// `&dyn ServiceLocator`.
pub trait ServiceLocatorExt: ServiceLocator {
	/// Looks up a service by its concrete type.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_di::{ServiceLocatorExt, ServiceRegistry};
	///
	/// let registry = ServiceRegistry::new();
	/// registry.register(7u32);
	///
	/// assert_eq!(*registry.get::<u32>().unwrap(), 7);
	/// assert!(registry.get::<String>().is_none());
	/// ```
	fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.get_by_id(TypeId::of::<T>())
			.and_then(|service| service.downcast::<T>().ok())
	}

	/// Returns `true` when a service of type `T` is registered.
	fn contains<T: Any + Send + Sync>(&self) -> bool {
		self.get_by_id(TypeId::of::<T>()).is_some()
	}
}

impl<L: ServiceLocator + ?Sized> ServiceLocatorExt for L {}
