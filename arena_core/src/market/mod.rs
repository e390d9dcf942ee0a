//! Market - Catalog, discounts and atomic purchases

mod offer;
mod product;

pub use offer::{roll_discounts, Offer};
pub use product::{Bonus, Product};

use crate::config::default_catalog;
use crate::entity::{Item, Player};
use crate::types::Rarity;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Products shown per market visit
pub const DEFAULT_OFFER_COUNT: usize = 9;

/// Market error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("no product named '{0}' in the catalog")]
    UnknownProduct(String),
    #[error("not enough currency: need {needed} cents, have {available} cents")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error("the cart is empty")]
    EmptyCart,
    #[error("offer for '{0}' does not match the catalog price or its rarity's discounts")]
    InvalidOffer(String),
}

/// What a successful purchase did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<Item>,
    pub total: u32,
    pub remaining: u32,
}

/// The product catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    products: Vec<Product>,
}

impl Default for Market {
    fn default() -> Self {
        Market::new(default_catalog())
    }
}

impl Market {
    pub fn new(products: Vec<Product>) -> Self {
        Market { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filter_by_rarity(&self, rarity: Rarity) -> Vec<&Product> {
        self.products.iter().filter(|p| p.rarity == rarity).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Discount every product of a rarity; returns how many changed
    pub fn apply_discount(&mut self, rarity: Rarity, percent: i32) -> usize {
        let mut changed = 0;
        for product in self.products.iter_mut().filter(|p| p.rarity == rarity) {
            product.apply_discount(percent);
            changed += 1;
        }
        changed
    }

    pub fn describe(&self) -> Vec<String> {
        self.products.iter().map(Product::describe).collect()
    }

    /// Pick `count` distinct products at random, each discounted by its
    /// rarity's rolled percentage
    pub fn roll_offers<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Offer> {
        let discounts = roll_discounts(rng);
        self.products
            .choose_multiple(rng, count)
            .map(|product| {
                let discount = discounts.get(&product.rarity).copied().unwrap_or(0);
                Offer::new(product.clone(), discount)
            })
            .collect()
    }

    /// Buy every offer in the cart, or nothing
    ///
    /// The whole cart is checked against the catalog and the player's
    /// balance before any currency is spent or any item is added.
    pub fn purchase(&self, player: &mut Player, cart: &[Offer]) -> Result<Receipt, MarketError> {
        if cart.is_empty() {
            return Err(MarketError::EmptyCart);
        }
        let mut listed = Vec::with_capacity(cart.len());
        for offer in cart {
            listed.push(self.check_offer(offer)?);
        }

        let total: u64 = cart.iter().map(|o| u64::from(o.price)).sum();
        let available = player.currency();
        let total = match u32::try_from(total) {
            Ok(total) if total <= available => total,
            _ => {
                let needed = u32::try_from(total).unwrap_or(u32::MAX);
                warn!(target: "arena_core::market", needed, available, "insufficient funds");
                return Err(MarketError::InsufficientFunds { needed, available });
            }
        };

        if !player.spend_currency(total) {
            return Err(MarketError::InsufficientFunds {
                needed: total,
                available,
            });
        }

        let items: Vec<Item> = listed.iter().map(|p| p.to_item()).collect();
        for item in &items {
            player.add_item(item.clone());
        }

        info!(
            target: "arena_core::market",
            player = %player.name,
            count = items.len(),
            total,
            remaining = player.currency(),
            "purchase complete"
        );

        Ok(Receipt {
            items,
            total,
            remaining: player.currency(),
        })
    }
}

impl Market {
    /// Match an offer against the catalog entry it claims to sell
    ///
    /// The discount must be zero or inside the rarity's roll range, and the
    /// price must be the catalog price with that discount applied.
    fn check_offer(&self, offer: &Offer) -> Result<&Product, MarketError> {
        let name = &offer.product.name;
        let Some(product) = self.find(name) else {
            warn!(target: "arena_core::market", product = %name, "unknown product in cart");
            return Err(MarketError::UnknownProduct(name.clone()));
        };

        let (min, max) = product.rarity.discount_range();
        let discount_ok = offer.discount == 0 || (min..=max).contains(&offer.discount);
        // Discount is at most 70 here, so the cast is lossless
        if !discount_ok || offer.price != product.discounted_price(offer.discount as i32) {
            warn!(
                target: "arena_core::market",
                product = %name,
                discount = offer.discount,
                price = offer.price,
                "offer does not match catalog"
            );
            return Err(MarketError::InvalidOffer(name.clone()));
        }
        Ok(product)
    }
}

/// Render cents as a euro amount, e.g. `12.34€`
pub fn format_price(cents: u32) -> String {
    format!("{}.{:02}€", cents / 100, cents % 100)
}
