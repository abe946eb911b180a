//! Compile-time component capability registration
//!
//! Instead of inspecting types at runtime, every component registers its
//! capabilities (construction, dependency slots, declared render mode)
//! through [`ComponentReflect`]. The `#[component]` attribute writes the
//! implementation; hand-written implementations are equally valid and are
//! how tests observe scanning.

use crate::component::Component;
use crate::injected::Injected;
use crate::render_mode::RenderMode;
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Capability registration for a component type.
///
/// `Default` doubles as the parameterless construction capability the
/// default activator relies on.
pub trait ComponentReflect: Component + Default {
	/// Render mode declared on the type, if any.
	fn declared_render_mode() -> Option<&'static dyn RenderMode> {
		None
	}

	/// Dependency slots in declaration order.
	fn dependency_slots() -> Vec<DependencySlot> {
		Vec::new()
	}
}

/// Identity of a component implementation.
///
/// A cheap `Copy` value: type identity plus the capability entry points the
/// metadata cache scans. Equality and hashing consider only the type
/// identity.
#[derive(Clone, Copy)]
pub struct ComponentType {
	id: TypeId,
	name: &'static str,
	construct: fn() -> Box<dyn Component>,
	dependency_slots: fn() -> Vec<DependencySlot>,
	declared_render_mode: fn() -> Option<&'static dyn RenderMode>,
}

impl ComponentType {
	/// Descriptor of component type `T`.
	pub fn of<T: ComponentReflect>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
			construct: || Box::new(T::default()) as Box<dyn Component>,
			dependency_slots: T::dependency_slots,
			declared_render_mode: T::declared_render_mode,
		}
	}

	/// Type identity.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified type name, for diagnostics.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Constructs a raw, uninjected instance.
	pub fn construct(&self) -> Box<dyn Component> {
		(self.construct)()
	}

	/// Invokes the type's slot registration.
	pub fn dependency_slots(&self) -> Vec<DependencySlot> {
		(self.dependency_slots)()
	}

	/// Invokes the type's render mode registration.
	pub fn declared_render_mode(&self) -> Option<&'static dyn RenderMode> {
		(self.declared_render_mode)()
	}
}

impl PartialEq for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for ComponentType {}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ComponentType").field(&self.name).finish()
	}
}

type SlotWriter = Box<dyn Fn(&mut dyn Component, Arc<dyn Any + Send + Sync>) -> bool + Send + Sync>;

/// One injectable slot discovered on a component type.
///
/// Carries everything the injector plan needs: the service type to resolve
/// and a writer that performs the typed assignment with no further lookups.
pub struct DependencySlot {
	name: &'static str,
	service_id: TypeId,
	service_name: &'static str,
	write: SlotWriter,
}

impl DependencySlot {
	/// Describes the slot `name` on component `C`, holding a service of
	/// type `S`.
	///
	/// `assign` is the direct field write; the surrounding machinery takes
	/// care of resolving the service and downcasting the instance.
	pub fn of<C, S>(name: &'static str, assign: fn(&mut C, Injected<S>)) -> Self
	where
		C: Component,
		S: Any + Send + Sync,
	{
		Self {
			name,
			service_id: TypeId::of::<S>(),
			service_name: type_name::<S>(),
			write: Box::new(move |component, service| {
				let any: &mut dyn Any = component;
				let Some(target) = any.downcast_mut::<C>() else {
					return false;
				};
				let Ok(service) = service.downcast::<S>() else {
					return false;
				};
				assign(target, Injected::from_arc(service));
				true
			}),
		}
	}

	/// Slot name, as declared on the component.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Type identity of the service this slot resolves.
	pub fn service_id(&self) -> TypeId {
		self.service_id
	}

	/// Service type name, for diagnostics.
	pub fn service_name(&self) -> &'static str {
		self.service_name
	}

	/// Writes `service` into `component`.
	///
	/// Returns `false` when either downcast fails, which means the slot was
	/// compiled for a different component type or service type.
	pub(crate) fn write(
		&self,
		component: &mut dyn Component,
		service: Arc<dyn Any + Send + Sync>,
	) -> bool {
		(self.write)(component, service)
	}
}

impl fmt::Debug for DependencySlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DependencySlot")
			.field("name", &self.name)
			.field("service", &self.service_name)
			.finish()
	}
}
