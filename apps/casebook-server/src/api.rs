//! HTTP handlers for the casebook server
//!
//! Provides endpoints for:
//! - Listing all articles in stored order
//! - Fetching one article by position
//! - Describing and accepting the submission form

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form, Json,
};
use casebook_core::{form_fields, form_schema, normalize, Article, CaseError, FormSchema};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::state::AppState;

/// Query value set on the redirect after a successful submission
pub const NOTICE_ADDED: &str = "added";

/// Message shown on the list view after a successful submission
pub const ADDED_MESSAGE: &str = "Article added successfully!";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "casebook-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Query parameters accepted by the list view
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub notice: Option<String>,
}

/// Article list response
#[derive(Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub count: usize,
    pub notice: Option<&'static str>,
}

/// Handler: GET /
pub async fn handle_list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ArticleListResponse>, ServerError> {
    let articles = state.articles().await?;
    let notice = match params.notice.as_deref() {
        Some(NOTICE_ADDED) => Some(ADDED_MESSAGE),
        _ => None,
    };

    Ok(Json(ArticleListResponse {
        count: articles.len(),
        articles,
        notice,
    }))
}

/// Single article response
#[derive(Serialize)]
pub struct ArticleResponse {
    pub id: usize,
    pub article: Article,
}

/// Handler: GET /article/:id
///
/// Anything that is not an index into the collection, including negative
/// or non-numeric ids, is a 404.
pub async fn handle_get_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ArticleResponse>, ServerError> {
    let id: usize = raw_id
        .parse()
        .map_err(|_| CaseError::NotFound(raw_id.clone()))?;

    let article = state
        .article(id)
        .await?
        .ok_or_else(|| CaseError::NotFound(raw_id))?;

    Ok(Json(ArticleResponse { id, article }))
}

/// Handler: GET /add
pub async fn handle_add_form() -> Json<FormSchema> {
    Json(form_schema())
}

/// Handler: POST /add
pub async fn handle_submit_article(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, ServerError> {
    let fields = form_fields(pairs);
    debug!("Submission with {} fields", fields.len());

    let article = normalize(&fields)?;
    let judges = article.judges.len();
    let timeline = article.timeline.len();
    let id = state.append(article).await?;

    info!(
        "Added article {} ({} judges, {} timeline entries)",
        id, judges, timeline
    );

    Ok(Redirect::to(&format!("/?notice={}", NOTICE_ADDED)))
}
