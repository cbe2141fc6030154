use axum::{http::Method, Router};
use tower_http::{
  cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{config::CorsOrigin, domains::mail::rest::mail_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  let cors = cors_layer(&state.config.allowed_origin);

  Router::new()
    .nest("/api", mail_routes())
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
  let allow_origin = match origin {
    CorsOrigin::Any => AllowOrigin::from(Any),
    CorsOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods([Method::GET, Method::HEAD, Method::PUT, Method::PATCH, Method::POST, Method::DELETE])
    .allow_headers(AllowHeaders::mirror_request())
}
