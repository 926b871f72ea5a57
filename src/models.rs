use serde::{Deserialize, Serialize};

pub const ENERGY_CAP: i64 = 100;
pub const STARTING_COINS: i64 = 150;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: i64,
    pub energy: i64,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            energy: ENERGY_CAP,
            inventory: Vec::new(),
            notifications: Vec::new(),
        }
    }
}

impl Wallet {
    pub fn owns(&self, item_id: u32) -> bool {
        self.inventory.iter().any(|entry| entry.item_id == item_id)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|note| !note.read).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item_id: u32,
    #[serde(default)]
    pub equipped: bool,
    pub purchased_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Energy,
    Shop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: i64,
    pub item_type: String,
    pub energy_boost: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyPack {
    pub id: u32,
    pub name: String,
    pub energy_amount: i64,
    pub price: i64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub coins: i64,
    pub energy: i64,
    pub owned_items: Vec<u32>,
    pub equipped_items: Vec<u32>,
    pub unread_notifications: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct ShopQuery {
    pub category: Option<String>,
}
