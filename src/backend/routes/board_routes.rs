/**
 * Board Route Configuration
 *
 * All board routes require an authenticated caller; the auth middleware is
 * applied as a route layer so it only runs for matched board paths.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::board::handlers::{
    create_list, create_task, delete_list, delete_task, get_board, update_task,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the `/api/board` routes to a router
pub fn configure_board_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let board_routes = Router::new()
        .route("/api/board", get(get_board))
        .route("/api/board/list", post(create_list))
        .route("/api/board/list/{id}", delete(delete_list))
        .route("/api/board/task", post(create_task))
        .route("/api/board/task/{id}", put(update_task).delete(delete_task))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(board_routes)
}
