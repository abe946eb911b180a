//! Injected dependency slot wrapper

use std::any::type_name;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A dependency slot on a component.
///
/// Declared as a field and marked with `#[inject]`; the component factory
/// binds the slot to the service registered for `T` while the instance is
/// being constructed. A default-constructed slot is unbound; the factory
/// guarantees every marked slot is bound before an instance is handed out,
/// so component code can use [`Deref`] without checking.
///
/// # Examples
///
/// ```
/// use grappelli_components::Injected;
///
/// struct Counter {
/// 	start: u32,
/// }
///
/// let slot = Injected::from_value(Counter { start: 3 });
/// assert_eq!(slot.start, 3);
/// assert!(slot.is_bound());
///
/// let unbound: Injected<Counter> = Injected::default();
/// assert!(!unbound.is_bound());
/// ```
pub struct Injected<T> {
	service: Option<Arc<T>>,
}

impl<T> Injected<T> {
	/// Binds the slot to an already-shared service.
	pub fn from_arc(service: Arc<T>) -> Self {
		Self {
			service: Some(service),
		}
	}

	/// Binds the slot to an owned value.
	///
	/// Mainly useful in tests, where a component is assembled by hand
	/// instead of through the factory.
	pub fn from_value(service: T) -> Self {
		Self::from_arc(Arc::new(service))
	}

	/// Returns `true` when the slot has been bound.
	pub fn is_bound(&self) -> bool {
		self.service.is_some()
	}

	/// Borrows the bound service, if any.
	pub fn get(&self) -> Option<&T> {
		self.service.as_deref()
	}

	/// Borrows the bound service's shared handle, if any.
	pub fn as_arc(&self) -> Option<&Arc<T>> {
		self.service.as_ref()
	}
}

impl<T> Default for Injected<T> {
	fn default() -> Self {
		Self { service: None }
	}
}

impl<T> Clone for Injected<T> {
	fn clone(&self) -> Self {
		Self {
			service: self.service.clone(),
		}
	}
}

impl<T> Deref for Injected<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		match &self.service {
			Some(service) => service,
			None => panic!(
				"dependency slot of type `{}` was never injected; \
				 create the component through `ComponentFactory::instantiate`",
				type_name::<T>()
			),
		}
	}
}

impl<T> fmt::Debug for Injected<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_bound() {
			write!(f, "Injected<{}>(bound)", type_name::<T>())
		} else {
			write!(f, "Injected<{}>(unbound)", type_name::<T>())
		}
	}
}
