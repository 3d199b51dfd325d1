use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::Registry;
use crate::commands::{CmdCtx, Outcome, process_request};
use crate::error::InfraError;
use crate::input::parser::parse_request;
use crate::net::form::FormData;

/// Builds the application. Every request goes through the same handler, which
/// applies the route table in [`crate::input::parser`].
pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .fallback(handle)
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn serve(addr: std::net::SocketAddr, registry: Arc<Registry>) -> Result<(), InfraError> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Roomcrawl server listening");
    axum::serve(listener, router(registry)).await?;
    Ok(())
}

/// The body is fully buffered by the extractor before anything is dispatched.
async fn handle(State(registry): State<Arc<Registry>>, method: Method, uri: Uri, body: Bytes) -> Outcome {
    dispatch(&registry, &method, uri.path(), &body)
}

/// Decodes, resolves and applies one request while holding the game lock.
pub fn dispatch(registry: &Registry, method: &Method, path: &str, body: &[u8]) -> Outcome {
    let form = FormData::decode(body);
    let intent = parse_request(method, path);

    let mut game = registry.game.lock();
    let mut ctx = CmdCtx {
        game: &mut *game,
        renderer: registry.renderer.as_ref(),
        form: &form,
    };
    process_request(&intent, &mut ctx)
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Page(html) => (StatusCode::OK, Html(html)).into_response(),
            Outcome::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Outcome::BadRequest(html) => (StatusCode::BAD_REQUEST, Html(html)).into_response(),
            Outcome::NotFound(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        }
    }
}
