//! # Grappelli Components
//!
//! Component model and dependency-injecting component factory for
//! server-driven UIs.
//!
//! ## How instantiation works
//!
//! Every component type registers its capabilities at compile time through
//! [`ComponentReflect`], normally written for you by the [`component`]
//! attribute, which turns `#[inject]` fields into dependency slots and an
//! optional `render_mode = ...` argument into the type's declared render
//! mode. The first time a type is instantiated, the [`TypeMetadataCache`]
//! scans those capabilities once and compiles an [`InjectorPlan`]; every
//! later instantiation replays the cached plan against a fresh instance with
//! no further inspection.
//!
//! [`ComponentFactory::instantiate`] activates the instance through a
//! pluggable [`ComponentActivator`], consults the [`RenderModeResolver`]
//! when a render mode is declared on the type or supplied at the call site,
//! and binds every `#[inject]` slot from the caller's service locator. The
//! returned component is fully initialized or the call fails; partially
//! injected instances are never observable.
//!
//! ## Example
//!
//! ```
//! use grappelli_components::{
//! 	ComponentFactory, ComponentType, Injected, Markup, Render, component,
//! };
//! use grappelli_di::ServiceRegistry;
//!
//! struct Greeter {
//! 	greeting: &'static str,
//! }
//!
//! #[component]
//! #[derive(Default)]
//! struct Welcome {
//! 	#[inject]
//! 	greeter: Injected<Greeter>,
//! }
//!
//! impl Render for Welcome {
//! 	fn render(&self) -> Markup {
//! 		Markup::text(self.greeter.greeting)
//! 	}
//! }
//!
//! let services = ServiceRegistry::new();
//! services.register(Greeter { greeting: "bonjour" });
//!
//! let factory = ComponentFactory::default();
//! let welcome = factory
//! 	.instantiate(&services, ComponentType::of::<Welcome>(), None)
//! 	.unwrap();
//!
//! assert_eq!(welcome.render().as_str(), "bonjour");
//! ```

mod activator;
mod cache;
mod component;
mod error;
mod factory;
mod injected;
mod injector;
mod reflect;
mod render_mode;

pub use activator::{ComponentActivator, DefaultComponentActivator};
pub use cache::{ComponentTypeInfo, TypeMetadataCache};
pub use component::{Component, Markup, Render};
pub use error::{ComponentError, Result};
pub use factory::ComponentFactory;
pub use injected::Injected;
pub use injector::InjectorPlan;
pub use reflect::{ComponentReflect, ComponentType, DependencySlot};
pub use render_mode::{
	InteractiveAuto, InteractiveServer, InteractiveWasm, RenderMode, RenderModeResolver,
	ServerRenderModeResolver,
};

/// Marks a struct as a component and registers its capabilities.
///
/// See the crate-level documentation for usage.
pub use grappelli_components_macros::component;
