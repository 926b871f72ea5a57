use serde::{Deserialize, Serialize};

pub const BUY_ENERGY_PATH: &str = "/buy_energy";

pub fn buy_item_path(item_id: &str) -> String {
    format!("/buy_item/{item_id}")
}

/// Body of `POST /buy_energy`.
///
/// Both fields are optional on the way in so a partial body can be answered
/// with a regular `success: false` reply instead of an extractor error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyPurchase {
    pub energy: Option<i64>,
    pub price: Option<i64>,
}

impl EnergyPurchase {
    pub fn new(energy: u32, price: u32) -> Self {
        Self {
            energy: Some(i64::from(energy)),
            price: Some(i64::from(price)),
        }
    }
}

/// Reply shape shared by both purchase endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PurchaseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_coins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_energy: Option<i64>,
}

impl PurchaseResponse {
    pub fn completed(message: impl Into<String>, new_coins: i64, new_energy: i64) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            new_coins: Some(new_coins),
            new_energy: Some(new_energy),
        }
    }

    /// Success without a balance change.
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
