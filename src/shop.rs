use crate::catalog::Catalog;
use crate::models::{ENERGY_CAP, InventoryEntry, Item, Notification, NotificationKind, Wallet};
use crate::protocol::{EnergyPurchase, PurchaseResponse};
use chrono::{DateTime, Utc};
use std::fmt;

/// Why a purchase or equip request was refused. Shown to the player verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    MissingData,
    MissingFields,
    InsufficientCoins { have: i64, need: i64 },
    Unavailable,
    AlreadyOwned,
    NotInInventory,
    NotEquipped,
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingData => write!(f, "Request data is missing!"),
            Self::MissingFields => write!(f, "Energy amount or price is missing!"),
            Self::InsufficientCoins { have, need } => {
                write!(f, "Not enough coins! You have {have} coins, need {need}")
            }
            Self::Unavailable => write!(f, "This item is not available right now!"),
            Self::AlreadyOwned => write!(f, "You already own this item!"),
            Self::NotInInventory => write!(f, "Item not found in your inventory!"),
            Self::NotEquipped => write!(f, "This item is not equipped!"),
        }
    }
}

impl std::error::Error for ShopError {}

pub fn purchase_energy(
    wallet: &mut Wallet,
    request: &EnergyPurchase,
    now: DateTime<Utc>,
) -> Result<PurchaseResponse, ShopError> {
    let (amount, price) = match (request.energy, request.price) {
        (None, None) => return Err(ShopError::MissingData),
        (Some(amount), Some(price)) if amount > 0 && price > 0 => (amount, price),
        _ => return Err(ShopError::MissingFields),
    };
    ensure_funds(wallet, price)?;
    wallet.coins -= price;

    wallet.energy = add_energy(wallet.energy, amount);
    wallet.notifications.push(Notification {
        title: "⚡ Energy refilled!".to_string(),
        message: format!("You bought {amount} energy! -{price} coins"),
        kind: NotificationKind::Energy,
        read: false,
        created_at: now.to_rfc3339(),
    });

    Ok(PurchaseResponse::completed(
        format!("{amount} energy purchased successfully!"),
        wallet.coins,
        wallet.energy,
    ))
}

pub fn purchase_item(
    wallet: &mut Wallet,
    item: &Item,
    now: DateTime<Utc>,
) -> Result<PurchaseResponse, ShopError> {
    if !item.is_active {
        return Err(ShopError::Unavailable);
    }
    ensure_funds(wallet, item.price)?;
    if wallet.owns(item.id) {
        return Err(ShopError::AlreadyOwned);
    }
    wallet.coins -= item.price;

    if item.energy_boost > 0 {
        wallet.energy = add_energy(wallet.energy, item.energy_boost);
    }
    wallet.inventory.push(InventoryEntry {
        item_id: item.id,
        equipped: false,
        purchased_at: now.to_rfc3339(),
    });
    wallet.notifications.push(Notification {
        title: "🛍️ New item!".to_string(),
        message: format!("You bought {} for {} coins!", item.name, item.price),
        kind: NotificationKind::Shop,
        read: false,
        created_at: now.to_rfc3339(),
    });

    let mut message = format!("{} purchased successfully!", item.name);
    if item.energy_boost > 0 {
        message.push_str(&format!(" +{} energy", item.energy_boost));
    }
    Ok(PurchaseResponse::completed(message, wallet.coins, wallet.energy))
}

/// Equips an owned item, taking off whatever else of the same type is worn.
pub fn equip_item(wallet: &mut Wallet, catalog: &Catalog, item_id: u32) -> Result<PurchaseResponse, ShopError> {
    let item = owned_item(wallet, catalog, item_id)?;

    for entry in &mut wallet.inventory {
        let same_type = catalog
            .item(entry.item_id)
            .is_some_and(|other| other.item_type == item.item_type);
        entry.equipped = entry.item_id == item_id || (entry.equipped && !same_type);
    }

    Ok(PurchaseResponse::succeeded(format!("{} equipped successfully!", item.name)))
}

pub fn unequip_item(wallet: &mut Wallet, catalog: &Catalog, item_id: u32) -> Result<PurchaseResponse, ShopError> {
    let item = owned_item(wallet, catalog, item_id)?;
    let entry = wallet
        .inventory
        .iter_mut()
        .find(|entry| entry.item_id == item_id)
        .ok_or(ShopError::NotInInventory)?;
    if !entry.equipped {
        return Err(ShopError::NotEquipped);
    }
    entry.equipped = false;

    Ok(PurchaseResponse::succeeded(format!("{} unequipped successfully!", item.name)))
}

fn owned_item<'a>(wallet: &Wallet, catalog: &'a Catalog, item_id: u32) -> Result<&'a Item, ShopError> {
    if !wallet.owns(item_id) {
        return Err(ShopError::NotInInventory);
    }
    catalog.item(item_id).ok_or(ShopError::NotInInventory)
}

fn ensure_funds(wallet: &Wallet, price: i64) -> Result<(), ShopError> {
    if wallet.coins < price {
        return Err(ShopError::InsufficientCoins {
            have: wallet.coins,
            need: price,
        });
    }
    Ok(())
}

fn add_energy(current: i64, amount: i64) -> i64 {
    current.saturating_add(amount).min(ENERGY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(coins: i64, energy: i64) -> Wallet {
        Wallet {
            coins,
            energy,
            ..Wallet::default()
        }
    }

    fn request(energy: i64, price: i64) -> EnergyPurchase {
        EnergyPurchase {
            energy: Some(energy),
            price: Some(price),
        }
    }

    #[test]
    fn energy_purchase_charges_and_caps_energy() {
        let mut wallet = wallet(100, 70);

        let reply = purchase_energy(&mut wallet, &request(50, 35), Utc::now()).unwrap();

        assert!(reply.success);
        assert_eq!(wallet.coins, 65);
        assert_eq!(wallet.energy, 100);
        assert_eq!(reply.new_coins, Some(65));
        assert_eq!(reply.new_energy, Some(100));
        assert_eq!(reply.message.as_deref(), Some("50 energy purchased successfully!"));
        assert_eq!(wallet.notifications.len(), 1);
        assert_eq!(wallet.notifications[0].kind, NotificationKind::Energy);
    }

    #[test]
    fn energy_purchase_without_coins_changes_nothing() {
        let mut wallet = wallet(10, 40);

        let err = purchase_energy(&mut wallet, &request(20, 15), Utc::now()).unwrap_err();

        assert_eq!(err, ShopError::InsufficientCoins { have: 10, need: 15 });
        assert_eq!(err.to_string(), "Not enough coins! You have 10 coins, need 15");
        assert_eq!(wallet.coins, 10);
        assert_eq!(wallet.energy, 40);
        assert!(wallet.notifications.is_empty());
    }

    #[test]
    fn energy_purchase_requires_positive_fields() {
        let mut wallet = wallet(100, 40);
        let partial = EnergyPurchase {
            energy: Some(20),
            price: None,
        };

        assert_eq!(
            purchase_energy(&mut wallet, &partial, Utc::now()),
            Err(ShopError::MissingFields)
        );
        assert_eq!(
            purchase_energy(&mut wallet, &EnergyPurchase { energy: None, price: None }, Utc::now()),
            Err(ShopError::MissingData)
        );
        assert_eq!(
            purchase_energy(&mut wallet, &request(0, 15), Utc::now()),
            Err(ShopError::MissingFields)
        );
        assert_eq!(
            purchase_energy(&mut wallet, &request(20, -5), Utc::now()),
            Err(ShopError::MissingFields)
        );
        assert_eq!(wallet.coins, 100);
    }

    #[test]
    fn item_purchase_adds_inventory_once() {
        let catalog = Catalog::default();
        let hat = catalog.item(1).unwrap();
        let mut wallet = wallet(100, 50);

        let reply = purchase_item(&mut wallet, hat, Utc::now()).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Green Cap purchased successfully!"));
        assert_eq!(wallet.coins, 70);
        assert!(wallet.owns(1));

        let err = purchase_item(&mut wallet, hat, Utc::now()).unwrap_err();
        assert_eq!(err, ShopError::AlreadyOwned);
        assert_eq!(wallet.coins, 70);
        assert_eq!(wallet.inventory.len(), 1);
    }

    #[test]
    fn boosted_item_raises_energy() {
        let mut item = Catalog::default().item(12).unwrap().clone();
        item.energy_boost = 30;
        let mut wallet = wallet(200, 90);

        let reply = purchase_item(&mut wallet, &item, Utc::now()).unwrap();

        assert_eq!(wallet.energy, 100);
        assert_eq!(reply.message.as_deref(), Some("Backpack purchased successfully! +30 energy"));
    }

    #[test]
    fn inactive_item_is_refused() {
        let mut item = Catalog::default().item(2).unwrap().clone();
        item.is_active = false;
        let mut wallet = wallet(200, 90);

        assert_eq!(
            purchase_item(&mut wallet, &item, Utc::now()),
            Err(ShopError::Unavailable)
        );
        assert_eq!(wallet.coins, 200);
    }

    #[test]
    fn empty_energy_request_reports_missing_data() {
        let mut wallet = wallet(100, 40);
        let err = purchase_energy(&mut wallet, &EnergyPurchase { energy: None, price: None }, Utc::now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Request data is missing!");
    }

    fn buy(wallet: &mut Wallet, catalog: &Catalog, item_id: u32) {
        purchase_item(wallet, catalog.item(item_id).unwrap(), Utc::now()).unwrap();
    }

    fn equipped(wallet: &Wallet) -> Vec<u32> {
        wallet
            .inventory
            .iter()
            .filter(|entry| entry.equipped)
            .map(|entry| entry.item_id)
            .collect()
    }

    #[test]
    fn equipping_replaces_item_of_same_type_only() {
        let catalog = Catalog::default();
        let mut wallet = wallet(500, 50);
        buy(&mut wallet, &catalog, 1);
        buy(&mut wallet, &catalog, 2);
        buy(&mut wallet, &catalog, 12);

        equip_item(&mut wallet, &catalog, 1).unwrap();
        equip_item(&mut wallet, &catalog, 12).unwrap();
        let reply = equip_item(&mut wallet, &catalog, 2).unwrap();

        assert_eq!(reply.message.as_deref(), Some("Blue Cap equipped successfully!"));
        assert_eq!(reply.new_coins, None);
        assert_eq!(equipped(&wallet), vec![2, 12]);
    }

    #[test]
    fn equipping_requires_ownership() {
        let catalog = Catalog::default();
        let mut wallet = wallet(500, 50);

        assert_eq!(equip_item(&mut wallet, &catalog, 3), Err(ShopError::NotInInventory));
        assert_eq!(unequip_item(&mut wallet, &catalog, 3), Err(ShopError::NotInInventory));
    }

    #[test]
    fn unequipping_needs_an_equipped_item() {
        let catalog = Catalog::default();
        let mut wallet = wallet(500, 50);
        buy(&mut wallet, &catalog, 7);

        assert_eq!(unequip_item(&mut wallet, &catalog, 7), Err(ShopError::NotEquipped));

        equip_item(&mut wallet, &catalog, 7).unwrap();
        let reply = unequip_item(&mut wallet, &catalog, 7).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Sneakers unequipped successfully!"));
        assert!(equipped(&wallet).is_empty());
    }
}
