use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{auth, handlers, request_context::request_context_middleware, state::AppState};

pub fn create_router(state: AppState, cors_allow_origin: Option<&str>) -> Router {
    // Reads are public; create/update/delete go through the admin gate.
    let admin_gate = middleware::from_fn_with_state(state.clone(), auth::require_admin);

    Router::new()
        .route(
            "/api/archives",
            get(handlers::list_archives)
                .merge(post(handlers::create_archive).route_layer(admin_gate.clone()))
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/archives/:id",
            get(handlers::get_archive).merge(
                put(handlers::update_archive)
                    .delete(handlers::delete_archive)
                    .route_layer(admin_gate),
            )
            .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_context_middleware))
                .layer(cors_layer(cors_allow_origin)),
        )
}

fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origin = match allow_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(err)) => {
            tracing::warn!("ignoring invalid CORS_ALLOW_ORIGIN: {err}");
            AllowOrigin::any()
        },
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
