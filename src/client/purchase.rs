use crate::client::{ClientError, ShopEnv};
use crate::protocol::{BUY_ENERGY_PATH, EnergyPurchase, PurchaseResponse, buy_item_path};
use tracing::{debug, warn};

/// Energy amount and price read off a buy-energy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyOffer {
    pub energy: u32,
    pub price: u32,
}

impl EnergyOffer {
    pub fn from_attributes(energy: Option<&str>, price: Option<&str>) -> Result<Self, ClientError> {
        Ok(Self {
            energy: parse_amount("energy", energy)?,
            price: parse_amount("price", price)?,
        })
    }

    fn confirmation(&self) -> String {
        format!("Pay {} coins for {} energy?", self.price, self.energy)
    }
}

/// Catalog entry referenced by a buy-item control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub id: String,
    pub name: String,
}

impl ItemRef {
    pub fn from_attributes(id: Option<&str>, title: Option<&str>) -> Result<Self, ClientError> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::MissingAttribute("item-id"))?;
        let name = title.ok_or(ClientError::MissingAttribute("card-title"))?;

        Ok(Self {
            id: id.to_string(),
            name: name.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Cancelled,
    Completed(String),
    Rejected(String),
    Failed(String),
}

pub async fn buy_energy<E: ShopEnv>(env: &E, offer: EnergyOffer) -> PurchaseOutcome {
    if !env.confirm(&offer.confirmation()) {
        return PurchaseOutcome::Cancelled;
    }

    let body = match serde_json::to_string(&EnergyPurchase::new(offer.energy, offer.price)) {
        Ok(body) => body,
        Err(err) => return settle(env, Err(err.into())),
    };
    debug!(energy = offer.energy, price = offer.price, "buying energy");

    let reply = env.post(BUY_ENERGY_PATH, Some(body)).await;
    settle(env, reply)
}

pub async fn buy_item<E: ShopEnv>(env: &E, item: &ItemRef) -> PurchaseOutcome {
    if !env.confirm(&format!("Buy {}?", item.name)) {
        return PurchaseOutcome::Cancelled;
    }

    debug!(item_id = %item.id, "buying item");
    let reply = env.post(&buy_item_path(&item.id), None).await;
    settle(env, reply)
}

/// Turns a raw reply into an outcome and shows it to the user.
fn settle<E: ShopEnv>(env: &E, reply: Result<String, ClientError>) -> PurchaseOutcome {
    let outcome = interpret(reply);
    match &outcome {
        PurchaseOutcome::Completed(message) => {
            env.alert(&format!("✅ {message}"));
            env.reload();
        }
        PurchaseOutcome::Rejected(error) => env.alert(&format!("❌ {error}")),
        PurchaseOutcome::Failed(reason) => {
            warn!("purchase request failed: {reason}");
            env.alert(&format!("❌ Something went wrong: {reason}"));
        }
        PurchaseOutcome::Cancelled => {}
    }
    outcome
}

fn interpret(reply: Result<String, ClientError>) -> PurchaseOutcome {
    let parsed = reply.and_then(|body| {
        serde_json::from_str::<PurchaseResponse>(&body).map_err(ClientError::from)
    });

    match parsed {
        Ok(response) if response.success => {
            PurchaseOutcome::Completed(response.message.unwrap_or_default())
        }
        Ok(response) => PurchaseOutcome::Rejected(response.error.unwrap_or_default()),
        Err(err) => PurchaseOutcome::Failed(err.to_string()),
    }
}

/// Reads the leading integer of an attribute value, ignoring anything after
/// the digits. Zero is treated as malformed.
fn parse_amount(name: &'static str, value: Option<&str>) -> Result<u32, ClientError> {
    let raw = value.ok_or(ClientError::MissingAttribute(name))?;
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    match trimmed[..digits_end].parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(ClientError::InvalidAttribute {
            name,
            value: raw.to_string(),
        }),
    }
}
