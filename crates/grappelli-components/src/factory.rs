//! Dependency-injecting component factory

use crate::activator::{ComponentActivator, DefaultComponentActivator};
use crate::cache::TypeMetadataCache;
use crate::component::Component;
use crate::error::{ComponentError, Result};
use crate::reflect::ComponentType;
use crate::render_mode::{RenderMode, RenderModeResolver, ServerRenderModeResolver};
use grappelli_di::ServiceLocator;
use std::sync::Arc;

/// Creates fully initialized component instances.
///
/// Instantiation looks up (or fills) the type's cached metadata, activates
/// an instance (directly on the mode-less hot path, through the
/// [`RenderModeResolver`] when a render mode is in play) and then applies
/// the type's injection plan against the caller's service locator. Either
/// every dependency slot is bound on the returned instance or the call
/// fails and the instance is dropped.
///
/// # Example
///
/// ```
/// use grappelli_components::{ComponentFactory, ComponentType, component, Markup, Render};
/// use grappelli_di::ServiceRegistry;
///
/// #[component]
/// #[derive(Default)]
/// struct Widget;
///
/// impl Render for Widget {
/// 	fn render(&self) -> Markup {
/// 		Markup::raw("<widget/>")
/// 	}
/// }
///
/// let factory = ComponentFactory::default();
/// let services = ServiceRegistry::new();
///
/// let widget = factory
/// 	.instantiate(&services, ComponentType::of::<Widget>(), None)
/// 	.unwrap();
/// assert_eq!(widget.render().as_str(), "<widget/>");
/// ```
pub struct ComponentFactory {
	activator: Arc<dyn ComponentActivator>,
	resolver: Arc<dyn RenderModeResolver>,
	cache: Arc<TypeMetadataCache>,
}

impl ComponentFactory {
	/// Creates a factory using the process-wide metadata cache.
	pub fn new(
		activator: Arc<dyn ComponentActivator>,
		resolver: Arc<dyn RenderModeResolver>,
	) -> Self {
		Self::with_cache(activator, resolver, TypeMetadataCache::global())
	}

	/// Creates a factory with a private metadata cache.
	pub fn with_cache(
		activator: Arc<dyn ComponentActivator>,
		resolver: Arc<dyn RenderModeResolver>,
		cache: Arc<TypeMetadataCache>,
	) -> Self {
		Self {
			activator,
			resolver,
			cache,
		}
	}

	/// The metadata cache this factory reads.
	pub fn cache(&self) -> &Arc<TypeMetadataCache> {
		&self.cache
	}

	/// Creates and injects an instance of `component_type`.
	///
	/// `call_site_render_mode` is the mode requested at the use site, if
	/// any; it is passed to the render mode resolver independently of the
	/// mode declared on the type.
	pub fn instantiate(
		&self,
		services: &dyn ServiceLocator,
		component_type: ComponentType,
		call_site_render_mode: Option<&dyn RenderMode>,
	) -> Result<Box<dyn Component>> {
		let info = self.cache.get_or_create(component_type);

		let instance = if call_site_render_mode.is_none() && info.render_mode().is_none() {
			self.activator.create(component_type)
		} else {
			self.resolver.resolve_component(
				component_type,
				self.activator.as_ref(),
				info.render_mode(),
				call_site_render_mode,
			)
		};

		// The default activator never returns None, but an externally
		// supplied activator or resolver might.
		let mut instance = instance.ok_or(ComponentError::ActivatorReturnedNothing {
			component: component_type.name(),
		})?;

		let actual_type = instance.component_type();
		if actual_type == component_type {
			// Fast, common case: reuse the entry we already looked up.
			info.injector().apply(services, instance.as_mut())?;
		} else {
			// The activator/resolver substituted a different type; inject
			// with that type's own plan.
			tracing::debug!(
				requested = component_type.name(),
				actual = actual_type.name(),
				"component instance substituted during activation"
			);
			let actual_info = self.cache.get_or_create(actual_type);
			actual_info.injector().apply(services, instance.as_mut())?;
		}

		Ok(instance)
	}
}

impl Default for ComponentFactory {
	fn default() -> Self {
		Self::new(
			Arc::new(DefaultComponentActivator),
			Arc::new(ServerRenderModeResolver),
		)
	}
}
