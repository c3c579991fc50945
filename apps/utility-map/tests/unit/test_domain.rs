use std::sync::Arc;
use utility_map_api::{
    domain::{
        metric::{
            catalog::MetricCatalog,
            category::MetricCategory,
            table::{Coloring, MetricTable},
        },
        region::extractor::RegionNameExtractor,
        shared::errors::DomainError,
        style::{
            bucket::{BucketLevel, classify_bucket, classify_level},
            color::{Color, NO_DATA_GRAY},
            resolver::RegionStyleResolver,
            value::DisplayValue,
        },
    },
    infrastructure::datasets::india_utilities::india_utility_catalog,
};

fn builtin_resolver() -> RegionStyleResolver {
    RegionStyleResolver::new(india_utility_catalog().expect("built-in tables are valid"))
}

#[test]
fn classify_bucket_boundaries_fall_to_lower_bucket() {
    assert_eq!(classify_bucket(80.0), BucketLevel::High.color());
    assert_eq!(classify_bucket(80.0001), BucketLevel::DarkestHigh.color());
    assert_eq!(classify_bucket(0.0), BucketLevel::Lowest.color());
    assert_eq!(classify_bucket(-5.0), BucketLevel::Lowest.color());
    assert_eq!(classify_level(60.0), BucketLevel::Mid);
}

#[test]
fn kerala_resolves_to_darkest_bucket() {
    let style = builtin_resolver()
        .resolve_style("Kerala", MetricCategory::Electricity)
        .unwrap();
    assert_eq!(style.value, DisplayValue::Recorded(99.0));
    assert_eq!(style.color.as_str(), "#7c1608ff");
}

#[test]
fn nagaland_has_no_data_in_bucketed_tables() {
    for category in [MetricCategory::Electricity, MetricCategory::Water] {
        let style = builtin_resolver().resolve_style("Nagaland", category).unwrap();
        assert_eq!(style.value, DisplayValue::NoData);
        assert_eq!(style.color, classify_bucket(0.0));
    }
}

#[test]
fn goa_keeps_stored_color_byte_for_byte() {
    let style = builtin_resolver()
        .resolve_style("Goa", MetricCategory::Utility)
        .unwrap();
    assert_eq!(style.value, DisplayValue::Recorded(97.0));
    assert_eq!(style.color.as_str().as_bytes(), b"#e9e911ff");
    assert_eq!(style.coloring, Coloring::Direct);
}

#[test]
fn direct_color_is_never_rederived_from_value() {
    let stored = Color::from_static("#010203ff");
    let catalog = MetricCatalog::new().with_table(
        MetricCategory::Utility,
        MetricTable::direct([("Kerala", 99.0, stored.clone())]),
    );
    let style = RegionStyleResolver::new(Arc::new(catalog))
        .resolve_style("Kerala", MetricCategory::Utility)
        .unwrap();
    assert_eq!(style.color, stored);
    assert_ne!(style.color, classify_bucket(99.0));
}

#[test]
fn unknown_regions_degrade_to_fallback() {
    let resolver = builtin_resolver();
    for region in ["Atlantis", "", "   ", "kerala"] {
        let style = resolver.resolve_style(region, MetricCategory::Utility).unwrap();
        assert_eq!(style.value, DisplayValue::NoData, "region {region:?}");
        assert_eq!(style.color, NO_DATA_GRAY);
    }
}

#[test]
fn legacy_and_current_names_reach_different_tables() {
    let resolver = builtin_resolver();
    let legacy = resolver
        .resolve_style("Orissa", MetricCategory::Electricity)
        .unwrap();
    let current = resolver.resolve_style("Odisha", MetricCategory::Utility).unwrap();
    assert_eq!(legacy.value, DisplayValue::Recorded(65.0));
    assert_eq!(current.value, DisplayValue::Recorded(62.0));
}

#[test]
fn resolution_is_idempotent() {
    let resolver = builtin_resolver();
    for category in MetricCategory::ALL {
        for region in ["Kerala", "Goa", "Nagaland", ""] {
            let first = resolver.resolve_style(region, category).unwrap();
            let second = resolver.resolve_style(region, category).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn unconfigured_category_fails_fast() {
    let resolver = RegionStyleResolver::new(Arc::new(MetricCatalog::new()));
    assert_eq!(
        resolver.resolve_style("Kerala", MetricCategory::Electricity),
        Err(DomainError::UnconfiguredCategory("electricity".into()))
    );
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = builtin_resolver();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                resolver
                    .resolve_style("Punjab", MetricCategory::Electricity)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let style = handle.join().unwrap();
        assert_eq!(style.color.as_str(), "#7c1608ff");
    }
}

#[test]
fn default_extractor_probes_legacy_name_first() {
    let extractor = RegionNameExtractor::default();
    assert_eq!(extractor.properties(), ["NAME_1", "shapeName"]);
}
