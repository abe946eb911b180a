//! # Grappelli
//!
//! A server-driven UI component framework for Rust.
//!
//! Grappelli lets application authors declare UI components as plain structs,
//! mark the services they need with `#[inject]`, and have the framework hand
//! out fully initialized instances per request. Component capabilities are
//! registered at compile time, scanned once into a process-wide metadata
//! cache, and replayed as a compiled injection plan on every instantiation.
//!
//! ## Feature Flags
//!
//! - `components` - component model, metadata cache and factory
//! - `di` - service registry and locator
//! - `full` (default) - everything
//!
//! ## Example
//!
//! ```
//! use grappelli::prelude::*;
//!
//! struct Clock {
//! 	display: &'static str,
//! }
//!
//! #[component]
//! #[derive(Default)]
//! struct StatusBar {
//! 	#[inject]
//! 	clock: Injected<Clock>,
//! }
//!
//! impl Render for StatusBar {
//! 	fn render(&self) -> Markup {
//! 		Markup::text(self.clock.display)
//! 	}
//! }
//!
//! let services = ServiceRegistry::new();
//! services.register(Clock { display: "12:00" });
//!
//! let factory = ComponentFactory::default();
//! let status_bar = factory
//! 	.instantiate(&services, ComponentType::of::<StatusBar>(), None)
//! 	.unwrap();
//! assert_eq!(status_bar.render().as_str(), "12:00");
//! ```

#[cfg(feature = "components")]
pub use grappelli_components as components;

#[cfg(feature = "di")]
pub use grappelli_di as di;

/// Commonly used types, importable in one line.
pub mod prelude {
	#[cfg(feature = "components")]
	pub use grappelli_components::{
		Component, ComponentError, ComponentFactory, ComponentType, Injected, InteractiveAuto,
		InteractiveServer, InteractiveWasm, Markup, Render, RenderMode, component,
	};
	#[cfg(feature = "di")]
	pub use grappelli_di::{ServiceLocator, ServiceLocatorExt, ServiceRegistry, ServiceScope};
}
