use crate::client::CategoryFilter;
use crate::errors::AppError;
use crate::models::{Notification, ShopQuery, Wallet, WalletResponse};
use crate::protocol::{EnergyPurchase, PurchaseResponse};
use crate::shop::{ShopError, equip_item, purchase_energy, purchase_item, unequip_item};
use crate::state::AppState;
use crate::storage::persist_wallet;
use crate::ui::render_shop;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use tokio::fs;
use tracing::{info, warn};

pub async fn index() -> Redirect {
    Redirect::to("/shop")
}

pub async fn shop_page(State(state): State<AppState>, Query(query): Query<ShopQuery>) -> Html<String> {
    let filter = CategoryFilter::from_key(query.category.as_deref());
    let wallet = state.wallet.lock().await;
    Html(render_shop(&wallet, &state.catalog, &filter))
}

pub async fn buy_energy(State(state): State<AppState>, body: Bytes) -> Result<Json<PurchaseResponse>, AppError> {
    let request: EnergyPurchase = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!("rejecting energy purchase body: {err}");
            return Ok(Json(PurchaseResponse::rejected(ShopError::MissingData.to_string())));
        }
    };

    commit(&state, |wallet| purchase_energy(wallet, &request, Utc::now())).await
}

pub async fn buy_item(
    State(state): State<AppState>,
    Path(item_id): Path<u32>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let item = state
        .catalog
        .item(item_id)
        .ok_or_else(|| AppError::not_found(format!("item {item_id} not found")))?;

    commit(&state, |wallet| purchase_item(wallet, item, Utc::now())).await
}

pub async fn equip(
    State(state): State<AppState>,
    Path(item_id): Path<u32>,
) -> Result<Json<PurchaseResponse>, AppError> {
    commit(&state, |wallet| equip_item(wallet, &state.catalog, item_id)).await
}

pub async fn unequip(
    State(state): State<AppState>,
    Path(item_id): Path<u32>,
) -> Result<Json<PurchaseResponse>, AppError> {
    commit(&state, |wallet| unequip_item(wallet, &state.catalog, item_id)).await
}

pub async fn get_wallet(State(state): State<AppState>) -> Json<WalletResponse> {
    let wallet = state.wallet.lock().await;
    Json(WalletResponse {
        coins: wallet.coins,
        energy: wallet.energy,
        owned_items: wallet.inventory.iter().map(|entry| entry.item_id).collect(),
        equipped_items: wallet
            .inventory
            .iter()
            .filter(|entry| entry.equipped)
            .map(|entry| entry.item_id)
            .collect(),
        unread_notifications: wallet.unread_notifications(),
    })
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    let wallet = state.wallet.lock().await;
    Json(wallet.notifications.iter().rev().cloned().collect())
}

/// Serves the wasm-pack bundle that drives the shop page.
pub async fn pkg_asset(State(state): State<AppState>, Path(file): Path<String>) -> Result<impl IntoResponse, AppError> {
    if file.starts_with('.') || file.contains(['/', '\\']) {
        return Err(AppError::not_found(format!("{file} not found")));
    }

    let bytes = match fs::read(state.pkg_dir.join(&file)).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::not_found(format!("{file} not found")));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(([(header::CONTENT_TYPE, content_type(&file))], bytes))
}

/// Runs a wallet change against a copy and only keeps the result once it is
/// on disk. Refusals are answered with `success: false`.
async fn commit<F>(state: &AppState, change: F) -> Result<Json<PurchaseResponse>, AppError>
where
    F: FnOnce(&mut Wallet) -> Result<PurchaseResponse, ShopError>,
{
    let mut wallet = state.wallet.lock().await;
    let mut updated = wallet.clone();

    match change(&mut updated) {
        Ok(reply) => {
            persist_wallet(&state.data_path, &updated).await?;
            *wallet = updated;
            info!(coins = wallet.coins, energy = wallet.energy, "wallet updated");
            Ok(Json(reply))
        }
        Err(err) => {
            info!("request refused: {err}");
            Ok(Json(PurchaseResponse::rejected(err.to_string())))
        }
    }
}

fn content_type(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
