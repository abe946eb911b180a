//! Compiled dependency injection plans

use crate::component::Component;
use crate::error::{ComponentError, Result};
use crate::reflect::DependencySlot;
use grappelli_di::ServiceLocator;

/// Reusable injection plan for one component type.
///
/// Compiled once from the type's scanned slot list and applied to every
/// instance of that type; application resolves each slot from the caller's
/// locator and performs direct typed writes, nothing else. A plan compiled
/// for a type with no slots skips the locator entirely.
pub struct InjectorPlan {
	owner: &'static str,
	slots: Vec<DependencySlot>,
}

impl InjectorPlan {
	/// Compiles the plan for the component type named `owner`.
	pub(crate) fn compile(owner: &'static str, slots: Vec<DependencySlot>) -> Self {
		Self { owner, slots }
	}

	/// Returns `true` when applying this plan does nothing.
	pub fn is_noop(&self) -> bool {
		self.slots.is_empty()
	}

	/// Number of slots the plan fills.
	pub fn slot_count(&self) -> usize {
		self.slots.len()
	}

	/// Fills every slot of `component` from `services`.
	///
	/// Fails on the first slot the locator cannot supply, naming the slot,
	/// the owning type and the missing service. The caller discards the
	/// instance on failure, so a partially injected component is never
	/// observable.
	pub fn apply(
		&self,
		services: &dyn ServiceLocator,
		component: &mut dyn Component,
	) -> Result<()> {
		if self.slots.is_empty() {
			return Ok(());
		}

		for slot in &self.slots {
			let Some(service) = services.get_by_id(slot.service_id()) else {
				tracing::debug!(
					slot = slot.name(),
					component = self.owner,
					service = slot.service_name(),
					"dependency slot has no registered service"
				);
				return Err(ComponentError::MissingService {
					slot: slot.name(),
					component: self.owner,
					service: slot.service_name(),
				});
			};

			if !slot.write(component, service) {
				return Err(ComponentError::SlotTypeMismatch {
					slot: slot.name(),
					component: self.owner,
				});
			}
		}

		Ok(())
	}
}
