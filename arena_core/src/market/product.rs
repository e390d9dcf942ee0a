//! Product - A catalog entry the player can buy

use super::format_price;
use crate::entity::Item;
use crate::types::{ItemKind, Rarity};
use serde::{Deserialize, Serialize};

/// Stat bonuses listed on a product
///
/// Only the field matching the product's kind survives the purchase; a
/// consumable listing an attack bonus grants nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bonus {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub healing: u32,
}

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in cents
    pub price: u32,
    pub rarity: Rarity,
    pub kind: ItemKind,
    #[serde(default)]
    pub bonus: Bonus,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, rarity: Rarity, kind: ItemKind, bonus: Bonus) -> Self {
        Product {
            name: name.into(),
            price,
            rarity,
            kind,
            bonus,
        }
    }

    /// The inventory item this product becomes once bought
    pub fn to_item(&self) -> Item {
        let bonus = match self.kind {
            ItemKind::Weapon => self.bonus.attack,
            ItemKind::Armor => self.bonus.defense,
            ItemKind::Consumable => self.bonus.healing,
        };
        Item::new(self.name.clone(), self.kind, bonus)
    }

    /// Price after a percentage discount, clamped to 0..=100 and rounded
    pub fn discounted_price(&self, percent: i32) -> u32 {
        let percent = percent.clamp(0, 100);
        let price = f64::from(self.price) * (1.0 - f64::from(percent) / 100.0);
        price.round() as u32
    }

    /// Permanently discount this product; returns the new price
    pub fn apply_discount(&mut self, percent: i32) -> u32 {
        self.price = self.discounted_price(percent);
        self.price
    }

    pub fn describe(&self) -> String {
        format!(
            "The product {} is a {}, has {} rarity, costs {} and grants {:?}.",
            self.name,
            self.kind,
            self.rarity,
            format_price(self.price),
            self.bonus
        )
    }
}
