pub(crate) mod dto;
mod handlers;
pub(crate) mod repo;
mod services;

use axum::Router;

use crate::state::AppState;

pub fn helps_router() -> Router<AppState> {
    handlers::routes(repo::HELPS)
}

pub fn dangers_router() -> Router<AppState> {
    handlers::routes(repo::DANGERS)
}
