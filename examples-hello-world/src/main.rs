//! Minimal Grappelli application.
//!
//! Registers a couple of services, then renders a profile page for two
//! simulated requests, each with its own request-scoped current user.

use grappelli::prelude::*;
use std::sync::Arc;
use tracing::info;

struct SiteInfo {
	name: &'static str,
}

struct CurrentUser {
	name: String,
}

#[component]
#[derive(Default)]
struct SiteHeader {
	#[inject]
	site: Injected<SiteInfo>,
}

impl Render for SiteHeader {
	fn render(&self) -> Markup {
		let mut markup = Markup::raw("<header><h1>");
		markup.push_text(self.site.name);
		markup.push_raw("</h1></header>");
		markup
	}
}

#[component]
#[derive(Default)]
struct ProfilePage {
	#[inject]
	site: Injected<SiteInfo>,
	#[inject]
	user: Injected<CurrentUser>,
}

impl Render for ProfilePage {
	fn render(&self) -> Markup {
		let mut markup = Markup::raw("<main><p>Welcome back, ");
		markup.push_text(&self.user.name);
		markup.push_raw("! You are browsing ");
		markup.push_text(self.site.name);
		markup.push_raw(".</p></main>");
		markup
	}
}

fn main() -> grappelli::components::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let services = Arc::new(ServiceRegistry::new());
	services.register(SiteInfo { name: "Grappelli" });

	let factory = ComponentFactory::default();

	let header = factory.instantiate(
		services.as_ref(),
		ComponentType::of::<SiteHeader>(),
		None,
	)?;
	println!("{}", header.render());

	for visitor in ["Ada", "Grace"] {
		let scope = ServiceScope::new(Arc::clone(&services) as Arc<dyn ServiceLocator>);
		scope.register(CurrentUser {
			name: visitor.to_string(),
		});

		let page = factory.instantiate(&scope, ComponentType::of::<ProfilePage>(), None)?;
		info!(visitor, "rendered profile page");
		println!("{}", page.render());
	}

	Ok(())
}
