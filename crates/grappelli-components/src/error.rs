//! Error types for component instantiation

use thiserror::Error;

/// Error type for component instantiation.
///
/// Every variant is a configuration error: it is reported synchronously at
/// the point of detection, never retried, and nothing about the failed
/// operation is cached. Fixing the underlying registration lets the next
/// instantiation succeed.
#[derive(Debug, Error)]
pub enum ComponentError {
	/// The activation capability produced no instance.
	///
	/// The default activator never does this, but an externally supplied
	/// activator or render mode resolver might.
	#[error("the component activator returned no instance for component type `{component}`")]
	ActivatorReturnedNothing {
		/// Name of the requested component type.
		component: &'static str,
	},

	/// The service locator could not supply a required dependency slot.
	#[error(
		"cannot provide a value for slot `{slot}` on component `{component}`: \
		 no registered service of type `{service}`"
	)]
	MissingService {
		/// Name of the unfilled slot.
		slot: &'static str,
		/// Name of the component type owning the slot.
		component: &'static str,
		/// Name of the missing service type.
		service: &'static str,
	},

	/// A dependency slot rejected the resolved service value.
	///
	/// Only reachable through a hand-written capability registration whose
	/// slot list does not match the component it claims to describe.
	#[error("dependency slot `{slot}` on component `{component}` rejected the resolved service value")]
	SlotTypeMismatch {
		/// Name of the slot that rejected the write.
		slot: &'static str,
		/// Name of the component type the plan was compiled for.
		component: &'static str,
	},
}

/// Result type for component instantiation.
pub type Result<T> = std::result::Result<T, ComponentError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_service_names_slot_owner_and_service() {
		let err = ComponentError::MissingService {
			slot: "logger",
			component: "app::Panel",
			service: "app::Logger",
		};
		let message = err.to_string();
		assert!(message.contains("`logger`"));
		assert!(message.contains("`app::Panel`"));
		assert!(message.contains("`app::Logger`"));
	}

	#[test]
	fn activator_error_names_component() {
		let err = ComponentError::ActivatorReturnedNothing {
			component: "app::Widget",
		};
		assert!(err.to_string().contains("`app::Widget`"));
	}
}
