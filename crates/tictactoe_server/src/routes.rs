//! HTTP routes for the game API and the static browser client.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::middleware::map_response;
use axum::response::{Json, Response};
use axum::routing::{get, post};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::state::SharedGame;
use crate::static_files;
use crate::wire::{GameResponse, MoveRequest};

/// State shared by all routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single global game.
    pub game: SharedGame,
    /// Root directory for static files.
    pub static_dir: PathBuf,
}

/// Builds the application router: four JSON endpoints plus a static
/// file fallback for the browser client.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/game", get(get_game))
        .route("/api/move", post(post_move))
        .route("/api/reset", post(post_reset))
        .route("/api/reset-scores", post(post_reset_scores))
        .fallback(static_files::serve)
        .layer(map_response(allow_any_origin))
        .with_state(state)
}

/// Adds `Access-Control-Allow-Origin: *` to every response; the
/// browser client may be served from a different origin.
async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// `GET /api/game` - current state.
async fn get_game(State(state): State<AppState>) -> Json<GameResponse> {
    debug!("Fetching game state");
    Json(state.game.snapshot())
}

/// `POST /api/move` - applies a move and returns the new state.
///
/// The body is parsed leniently: a malformed body, like an invalid
/// move, leaves the game untouched and still returns the current state
/// with status 200, matching what the browser client expects.
async fn post_move(State(state): State<AppState>, body: String) -> Json<GameResponse> {
    match serde_json::from_str::<MoveRequest>(&body) {
        Ok(req) => Json(state.game.play(req.row, req.col)),
        Err(err) => {
            warn!(error = %err, "Malformed move request body");
            Json(state.game.snapshot())
        }
    }
}

/// `POST /api/reset` - fresh board, scores kept.
async fn post_reset(State(state): State<AppState>) -> Json<GameResponse> {
    Json(state.game.reset())
}

/// `POST /api/reset-scores` - scores zeroed, board kept.
async fn post_reset_scores(State(state): State<AppState>) -> Json<GameResponse> {
    Json(state.game.reset_scores())
}
