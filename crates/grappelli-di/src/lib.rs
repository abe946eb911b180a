//! # Grappelli Dependency Injection
//!
//! Type-keyed service registry and locator used to supply dependencies to
//! server-driven UI components.
//!
//! ## Features
//!
//! - **Type-safe**: services are stored and retrieved by their concrete type
//! - **Shared**: every service is handed out as an `Arc<T>`
//! - **Scoped**: request-scoped overlays can shadow application-wide services
//! - **Object-safe**: consumers depend on the `ServiceLocator` trait, not on
//!   a concrete registry
//!
//! ## Example
//!
//! ```
//! use grappelli_di::{ServiceLocator, ServiceLocatorExt, ServiceRegistry};
//!
//! struct Mailer {
//!     from: String,
//! }
//!
//! let registry = ServiceRegistry::new();
//! registry.register(Mailer {
//!     from: "noreply@example.com".to_string(),
//! });
//!
//! let locator: &dyn ServiceLocator = &registry;
//! let mailer = locator.get::<Mailer>().unwrap();
//! assert_eq!(mailer.from, "noreply@example.com");
//! ```

mod locator;
mod registry;
mod scope;

pub use locator::{ServiceLocator, ServiceLocatorExt};
pub use registry::ServiceRegistry;
pub use scope::ServiceScope;
