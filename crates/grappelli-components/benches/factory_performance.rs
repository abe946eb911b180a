//! Benchmark: factory hot path (cached metadata) vs first instantiation

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grappelli_components::{
	ComponentFactory, ComponentType, DefaultComponentActivator, Injected, Markup, Render,
	ServerRenderModeResolver, TypeMetadataCache, component,
};
use grappelli_di::ServiceRegistry;
use std::sync::Arc;

// Benchmark fixture: services injected into the measured component
struct BenchLogger;

struct BenchConfig;

#[component]
#[derive(Default)]
struct BenchPanel {
	#[inject]
	logger: Injected<BenchLogger>,
	#[inject]
	config: Injected<BenchConfig>,
}

impl Render for BenchPanel {
	fn render(&self) -> Markup {
		Markup::new()
	}
}

fn bench_services() -> ServiceRegistry {
	let services = ServiceRegistry::new();
	services.register(BenchLogger);
	services.register(BenchConfig);
	services
}

fn isolated_factory() -> ComponentFactory {
	ComponentFactory::with_cache(
		Arc::new(DefaultComponentActivator),
		Arc::new(ServerRenderModeResolver),
		Arc::new(TypeMetadataCache::new()),
	)
}

fn benchmark_instantiate_cached(c: &mut Criterion) {
	let services = bench_services();
	let factory = isolated_factory();

	// Warm the cache so only the replay path is measured.
	factory
		.instantiate(&services, ComponentType::of::<BenchPanel>(), None)
		.unwrap();

	c.bench_function("instantiate_cached", |b| {
		b.iter(|| {
			black_box(
				factory
					.instantiate(&services, ComponentType::of::<BenchPanel>(), None)
					.unwrap(),
			)
		});
	});
}

fn benchmark_first_instantiation(c: &mut Criterion) {
	let services = bench_services();

	c.bench_function("instantiate_rescan", |b| {
		b.iter(|| {
			// Fresh cache every iteration: scan + compile + inject.
			let factory = isolated_factory();
			black_box(
				factory
					.instantiate(&services, ComponentType::of::<BenchPanel>(), None)
					.unwrap(),
			)
		});
	});
}

criterion_group!(
	benches,
	benchmark_instantiate_cached,
	benchmark_first_instantiation
);
criterion_main!(benches);
