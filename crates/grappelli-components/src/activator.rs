//! Component activation strategies

use crate::component::Component;
use crate::reflect::ComponentType;

/// Strategy for creating raw, uninjected component instances.
///
/// The factory never constructs components directly; it always goes through
/// an activator, so hosts can pool instances, wrap them, or build them from
/// something other than `Default`. An activator may even return an instance
/// of a different concrete type than requested; the factory injects against
/// the actual type, so a substituted instance is configured correctly. No
/// validation is applied to the substitution; returning a type that cannot
/// serve in place of the requested one is the activator's bug.
pub trait ComponentActivator: Send + Sync {
	/// Creates an instance of (nominally) `component_type`.
	///
	/// Returning `None` is reported to the factory caller as a
	/// configuration error.
	fn create(&self, component_type: ComponentType) -> Option<Box<dyn Component>>;
}

/// Activator backed by the type's registered parameterless constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComponentActivator;

impl ComponentActivator for DefaultComponentActivator {
	fn create(&self, component_type: ComponentType) -> Option<Box<dyn Component>> {
		Some(component_type.construct())
	}
}
