//! Entity model - players, enemies, bosses and the items they carry

mod build;
mod enemy;
mod inventory;
mod item;
mod player;

pub use build::{BuildError, CharacterBuild};
pub use enemy::{Boss, Combatant, Enemy};
pub use inventory::Inventory;
pub use item::Item;
pub use player::{normalize_name, Player, PlayerSnapshot, MAX_NAME_LEN};

/// What any participant in a fight can report about itself
///
/// Enemies have no defense stat, so `defense` is optional rather than zero.
pub trait Fighter {
    fn name(&self) -> &str;

    /// Attack applied each turn
    fn attack(&self) -> u32;

    /// Defense added back each turn, if this fighter has one
    fn defense(&self) -> Option<u32> {
        None
    }
}

/// One-line matchup shown before a fight, e.g. `Hero (ATK 20, DEF 5) vs Goblin (ATK 15)`
pub fn matchup_line(a: &dyn Fighter, b: &dyn Fighter) -> String {
    fn label(f: &dyn Fighter) -> String {
        match f.defense() {
            Some(defense) => format!("{} (ATK {}, DEF {})", f.name(), f.attack(), defense),
            None => format!("{} (ATK {})", f.name(), f.attack()),
        }
    }
    format!("{} vs {}", label(a), label(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchup_line() {
        let hero = Player::new("Hero").with_stats(100, 20, 5);
        let goblin = Enemy::new("Goblin", 15, 50);
        assert_eq!(
            matchup_line(&hero, &goblin),
            "Hero (ATK 20, DEF 5) vs Goblin (ATK 15)"
        );
    }
}
