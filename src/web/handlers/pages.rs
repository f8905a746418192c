// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_htmx::HxRequest;
use chrono::Datelike;

use crate::server::{AppState, SearchParams};
use crate::web::views::{
    build_detail, build_results, example_queries, ExampleQuery, PlantDetailView, ResultsView,
};

const SITE_DESCRIPTION: &str =
    "Skandinavisk planteregister med semantisk søk og norske vekstsoner. \
     Over 380 planter med kjøpslenker.";

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub meta_description: String,
    pub year: i32,
    pub plant_count: usize,
    pub examples: Vec<ExampleQuery>,
    pub results: ResultsView,
}

/// Standalone results fragment for HTMX swaps
#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub results: ResultsView,
}

#[derive(Template)]
#[template(path = "pages/plant.html")]
pub struct PlantTemplate {
    pub title: String,
    pub meta_description: String,
    pub year: i32,
    pub plant: PlantDetailView,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub meta_description: String,
    pub year: i32,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Html(render(home_template(&state, &params)))
}

/// Search endpoint with content negotiation: HTMX requests get only the
/// results fragment, plain requests (bookmark, reload, no-JS form submit)
/// get the full landing page.
pub async fn search_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<SearchParams>,
) -> Response {
    if is_htmx {
        let template = ResultsTemplate {
            results: build_results(&state.catalog, params.query(), params.zone()),
        };
        Html(render(template)).into_response()
    } else {
        Html(render(home_template(&state, &params))).into_response()
    }
}

pub async fn plant_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.by_slug(&slug) {
        Some(plant) => {
            let template = PlantTemplate {
                title: format!("{} ({}) — Spirio", plant.name_no, plant.name_latin),
                meta_description: plant.description.clone(),
                year: current_year(),
                plant: build_detail(plant),
            };
            Html(render(template)).into_response()
        }
        None => not_found_page().await.into_response(),
    }
}

pub async fn not_found_page() -> impl IntoResponse {
    let template = NotFoundTemplate {
        title: "Plante ikke funnet — Spirio".to_string(),
        meta_description: SITE_DESCRIPTION.to_string(),
        year: current_year(),
    };
    (StatusCode::NOT_FOUND, Html(render(template)))
}

// ============================================================================
// Helpers
// ============================================================================

fn home_template(state: &AppState, params: &SearchParams) -> HomeTemplate {
    HomeTemplate {
        title: "Spirio — Finn din neste plante".to_string(),
        meta_description: SITE_DESCRIPTION.to_string(),
        year: current_year(),
        plant_count: state.catalog.len(),
        examples: example_queries(),
        results: build_results(&state.catalog, params.query(), params.zone()),
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

fn render<T: Template>(template: T) -> String {
    template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e))
}
