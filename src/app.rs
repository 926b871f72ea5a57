use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/shop", get(handlers::shop_page))
        .route("/buy_energy", post(handlers::buy_energy))
        .route("/buy_item/:item_id", post(handlers::buy_item))
        .route("/equip_item/:item_id", post(handlers::equip))
        .route("/unequip_item/:item_id", post(handlers::unequip))
        .route("/api/wallet", get(handlers::get_wallet))
        .route("/api/notifications", get(handlers::get_notifications))
        .route("/pkg/:file", get(handlers::pkg_asset))
        .with_state(state)
}
