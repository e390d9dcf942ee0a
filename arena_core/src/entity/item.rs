//! Item - Immutable inventory entry

use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// An item held in an inventory
///
/// `bonus` is read according to `kind`: attack for weapons, defense for
/// armor, max health for consumables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub bonus: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, bonus: u32) -> Self {
        Item {
            name: name.into(),
            kind,
            bonus,
        }
    }

    pub fn weapon(name: impl Into<String>, attack: u32) -> Self {
        Self::new(name, ItemKind::Weapon, attack)
    }

    pub fn armor(name: impl Into<String>, defense: u32) -> Self {
        Self::new(name, ItemKind::Armor, defense)
    }

    pub fn consumable(name: impl Into<String>, health: u32) -> Self {
        Self::new(name, ItemKind::Consumable, health)
    }

    /// Bonus counted toward attack (zero unless a weapon)
    pub fn attack_bonus(&self) -> u32 {
        self.bonus_if(ItemKind::Weapon)
    }

    /// Bonus counted toward defense (zero unless armor)
    pub fn defense_bonus(&self) -> u32 {
        self.bonus_if(ItemKind::Armor)
    }

    /// Bonus counted toward max health (zero unless a consumable)
    pub fn health_bonus(&self) -> u32 {
        self.bonus_if(ItemKind::Consumable)
    }

    fn bonus_if(&self, kind: ItemKind) -> u32 {
        if self.kind == kind {
            self.bonus
        } else {
            0
        }
    }
}
