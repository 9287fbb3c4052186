/**
 * Application State Management
 *
 * `AppState` is the central state container handed to every handler. It
 * implements `FromRef` for the parts handlers extract on their own, so a
 * board handler can ask for `State<BoardService>` directly.
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone: the service wraps a reference-counted
 * pool and the secret is an `Arc<str>`. No request-scoped data lives here.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::board::BoardService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Secret used by the auth middleware to verify bearer tokens
    pub jwt_secret: Arc<str>,

    /// Board operations over the SQLite pool
    pub board_service: BoardService,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            board_service: BoardService::new(db_pool),
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Implement FromRef for BoardService
///
/// ```rust,ignore
/// async fn handler(State(service): State<BoardService>) { /* ... */ }
/// ```
impl FromRef<AppState> for BoardService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.board_service.clone()
    }
}
