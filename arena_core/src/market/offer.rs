//! Offers - Discounted products shown to the player

use super::Product;
use crate::types::Rarity;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product as offered, with its rolled discount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub product: Product,
    /// Percent off the catalog price
    pub discount: u32,
    /// What the player pays, in cents
    pub price: u32,
}

impl Offer {
    /// Discounts above 100 percent are capped at 100
    pub fn new(product: Product, discount: u32) -> Self {
        let discount = discount.min(100);
        let price = product.discounted_price(discount as i32);
        Offer {
            product,
            discount,
            price,
        }
    }

    /// Offer at catalog price
    pub fn full_price(product: Product) -> Self {
        Self::new(product, 0)
    }
}

/// Roll one discount per rarity within that rarity's range
pub fn roll_discounts<R: Rng + ?Sized>(rng: &mut R) -> HashMap<Rarity, u32> {
    Rarity::all()
        .iter()
        .map(|&rarity| {
            let (min, max) = rarity.discount_range();
            (rarity, rng.gen_range(min..=max))
        })
        .collect()
}
