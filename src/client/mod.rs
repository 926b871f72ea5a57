//! Click handlers for the shop page.
//!
//! The handlers only talk to the page through [`ShopEnv`], [`FilterControl`]
//! and [`ItemCard`], so the same code runs against the DOM in the browser and
//! against recording fakes in tests.

pub mod env;
pub mod error;
pub mod filter;
pub mod purchase;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use env::ShopEnv;
pub use error::ClientError;
pub use filter::{CategoryFilter, FilterControl, FilterSummary, ItemCard, select_filter};
pub use purchase::{EnergyOffer, ItemRef, PurchaseOutcome, buy_energy, buy_item};
