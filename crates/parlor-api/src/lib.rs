pub mod error;
pub mod extract;
pub mod identities;
pub mod messages;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::{
        HeaderName, Method,
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
    },
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use parlor_store::Store;
use parlor_types::api::StatusResponse;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }
}

/// All chat routes, with CORS open to any origin so browser clients served
/// from elsewhere can poll.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ]);

    Router::new()
        .route("/", get(index))
        .route(
            "/history",
            get(messages::get_history).post(messages::post_message),
        )
        .route(
            "/nicknames",
            get(identities::list_identities).post(identities::register_identity),
        )
        .route(
            "/nicknames/{id}",
            get(identities::get_identity).delete(identities::delete_identity),
        )
        .layer(cors)
        .with_state(state)
}

async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "parlor chat api works...".into(),
    })
}
