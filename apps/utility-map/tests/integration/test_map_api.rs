use super::helpers::{assert_status, get, post_json, read_json, spawn_app, spawn_app_with};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use utility_map_api::domain::metric::{
    catalog::MetricCatalog, category::MetricCategory, table::MetricTable,
};

#[tokio::test]
async fn health_reports_configured_categories() {
    let app = spawn_app();
    let res = get(&app, "/health").await;
    assert_status(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["categories"], 3);
}

#[tokio::test]
async fn health_is_unhealthy_without_tables() {
    let app = spawn_app_with(MetricCategory::Electricity, Arc::new(MetricCatalog::new()));
    let res = get(&app, "/health").await;
    assert_status(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn region_style_uses_default_category() {
    let app = spawn_app();
    let res = get(&app, "/api/v1/map/styles/Kerala").await;
    assert_status(res.status(), StatusCode::OK);

    let body: Value = read_json(res).await;
    assert_eq!(body["region"], "Kerala");
    assert_eq!(body["value"], 99.0);
    assert_eq!(body["display_value"], "99");
    assert_eq!(body["tooltip"], "Kerala: 99%");
    assert_eq!(body["style"]["fillColor"], "#7c1608ff");
    assert_eq!(body["style"]["weight"], 1.5);
    assert_eq!(body["style"]["fillOpacity"], 0.8);
}

#[tokio::test]
async fn region_without_data_reports_na() {
    let app = spawn_app();
    let res = get(&app, "/api/v1/map/styles/Nagaland?category=water").await;
    assert_status(res.status(), StatusCode::OK);

    let body: Value = read_json(res).await;
    assert_eq!(body["value"], Value::Null);
    assert_eq!(body["tooltip"], "Nagaland: N/A%");
    assert_eq!(body["style"]["fillColor"], "#183488ff");
}

#[tokio::test]
async fn direct_color_category_returns_stored_color() {
    let app = spawn_app();
    let body: Value = read_json(get(&app, "/api/v1/map/styles/Goa?category=utility").await).await;
    assert_eq!(body["value"], 97.0);
    assert_eq!(body["style"]["fillColor"], "#e9e911ff");

    let body: Value =
        read_json(get(&app, "/api/v1/map/styles/Nagaland?category=utility").await).await;
    assert_eq!(body["style"]["fillColor"], "#ccccccff");
}

#[tokio::test]
async fn region_names_may_contain_spaces() {
    let app = spawn_app();
    let res = get(&app, "/api/v1/map/styles/Tamil%20Nadu?category=water").await;
    assert_status(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["tooltip"], "Tamil Nadu: 90%");
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = spawn_app();
    let res = get(&app, "/api/v1/map/styles/Kerala?category=gas").await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("gas"));
}

#[tokio::test]
async fn unconfigured_category_is_rejected() {
    let catalog = MetricCatalog::new().with_table(
        MetricCategory::Electricity,
        MetricTable::bucketed([("Kerala", 99.0)]),
    );
    let app = spawn_app_with(MetricCategory::Electricity, Arc::new(catalog));
    let res = get(&app, "/api/v1/map/styles/Kerala?category=water").await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recorded_styles_cover_the_table() {
    let app = spawn_app();
    let res = get(&app, "/api/v1/map/styles?category=water").await;
    assert_status(res.status(), StatusCode::OK);

    let body: Value = read_json(res).await;
    assert_eq!(body["category"], "water");
    assert_eq!(body["coloring"], "bucketed");
    assert_eq!(body["highlight"]["weight"], 3.0);
    assert_eq!(body["styles"].as_array().unwrap().len(), 8);
    assert_eq!(body["styles"][0]["region"], "Andhra Pradesh");
}

#[tokio::test]
async fn feature_collection_is_styled_in_order() {
    let app = spawn_app();
    let geojson = json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "NAME_1": "Gujarat" }, "geometry": null },
            { "type": "Feature", "properties": { "shapeName": "Telangana" }, "geometry": null },
            { "type": "Feature", "properties": {}, "geometry": null }
        ]
    });

    let res = post_json(&app, "/api/v1/map/styles", geojson.to_string()).await;
    assert_status(res.status(), StatusCode::OK);

    let body: Value = read_json(res).await;
    let styles = body["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 3);
    assert_eq!(styles[0]["index"], 0);
    assert_eq!(styles[0]["region"], "Gujarat");
    assert_eq!(styles[0]["style"]["fillColor"], "#7c1608ff");
    assert_eq!(styles[1]["region"], "Telangana");
    assert_eq!(styles[1]["display_value"], "N/A");
    assert_eq!(styles[2]["name_found"], false);
    assert_eq!(styles[2]["tooltip"], "Unknown region: N/A%");
    assert_eq!(styles[2]["region"], "");
}

#[tokio::test]
async fn legend_lists_bucket_swatches() {
    let app = spawn_app();
    let body: Value = read_json(get(&app, "/api/v1/map/legend").await).await;
    assert_eq!(body["title"], "Electricity Coverage");
    let swatches = body["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 5);
    assert_eq!(swatches[4]["label"], "80%+");
    assert_eq!(swatches[4]["color"], "#7c1608ff");
}

#[tokio::test]
async fn categories_mark_the_default() {
    let app = spawn_app_with(
        MetricCategory::Utility,
        utility_map_api::infrastructure::datasets::india_utilities::india_utility_catalog().unwrap(),
    );
    let body: Value = read_json(get(&app, "/api/v1/map/categories").await).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 3);

    let utility = categories
        .iter()
        .find(|c| c["key"] == "utility")
        .expect("utility category missing");
    assert_eq!(utility["is_default"], true);
    assert_eq!(utility["coloring"], "direct");
    assert_eq!(utility["label"], "Utility Score");
}
