use crate::{
    application::{
        legend::dto::LegendResponse,
        list_categories::dto::CategorySummary,
        resolve_style::dto::{
            FeatureStyleResponse, RegionStyleResponse, ResolveRegionRequest, StyleSheetResponse,
        },
    },
    infrastructure::geography::feature_collection::FeatureCollection,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    Ok(Json(state.categories.execute()?))
}

pub async fn get_legend(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<LegendResponse>, AppError> {
    let category = state.category_or_default(params.category.as_deref())?;
    Ok(Json(state.legend.execute(category)?))
}

pub async fn get_recorded_styles(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<StyleSheetResponse<RegionStyleResponse>>, AppError> {
    let category = state.category_or_default(params.category.as_deref())?;
    Ok(Json(state.resolve_style.resolve_recorded(category)?))
}

pub async fn get_region_style(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<RegionStyleResponse>, AppError> {
    let category = state.category_or_default(params.category.as_deref())?;
    let response = state
        .resolve_style
        .execute(ResolveRegionRequest { region, category })?;
    Ok(Json(response))
}

/// Style a whole GeoJSON feature collection in one pass.
pub async fn style_features(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
    Json(collection): Json<FeatureCollection>,
) -> Result<Json<StyleSheetResponse<FeatureStyleResponse>>, AppError> {
    let category = state.category_or_default(params.category.as_deref())?;
    tracing::info!(
        category = %category,
        features = collection.features.len(),
        "Styling feature collection"
    );
    Ok(Json(
        state.resolve_style.resolve_features(category, &collection)?,
    ))
}
