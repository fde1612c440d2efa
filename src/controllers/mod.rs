pub mod admin;
pub mod cart;
pub mod catalog;
pub mod tickets;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(admin::routes())
        .merge(catalog::routes())
        .merge(cart::routes())
        .merge(tickets::routes())
}
