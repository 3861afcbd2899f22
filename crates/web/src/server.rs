//! HTTP server: leaderboard page, fragment route, GraphQL API and health check.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use podium_core::metrics::record_page_served;
use podium_core::ports::parse_page_number;
use podium_core::services::LeaderboardService;

use crate::error::AppError;
use crate::render::render_fragment;
use crate::schema::{LeaderboardSchema, build_schema};

/// Page shell: results container, loader and the fetch script.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_playground: true,
        }
    }
}

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    service: LeaderboardService,
    schema: LeaderboardSchema,
}

impl AppState {
    pub fn new(service: LeaderboardService) -> Self {
        let schema = build_schema(service.clone());
        Self { service, schema }
    }
}

/// Query string of the fragment route.
///
/// The page number is kept as text so that non-numeric input is reported
/// as such instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let graphql = if config.enable_playground {
        get(graphql_playground).post(graphql_handler)
    } else {
        axum::routing::post(graphql_handler)
    };

    Router::new()
        .route("/", get(index))
        .route("/leaderboard", get(leaderboard_fragment))
        .route("/graphql", graphql)
        .route("/health", get(health_check))
        .with_state(state)
}

/// Start the server with graceful shutdown support.
pub async fn serve_with_shutdown<F>(
    state: AppState,
    config: ServerConfig,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🏆 Leaderboard listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

/// Leaderboard page shell.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// HTML fragment for one page: table, navigation and summary.
#[instrument(skip(state))]
async fn leaderboard_fragment(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page_number = parse_page_number(params.page_number.as_deref())?;
    let page = state.service.get_page(page_number).await?;

    record_page_served("html");
    debug!(page = page.page_number, rows = page.entries.len(), "Rendering page");

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Html(render_fragment(&page)),
    ))
}

/// GraphQL query handler.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground UI.
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.service.is_healthy().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}
