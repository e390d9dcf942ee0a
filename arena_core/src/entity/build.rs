//! CharacterBuild - Point allocation at character creation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a build spends more than the budget allows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("build spends {spent} points but only {budget} are available")]
    OverBudget { spent: u32, budget: u32 },
}

/// Points spent on each stat when creating a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBuild {
    /// Added to the base max health
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CharacterBuild {
    pub fn new(health: u32, attack: u32, defense: u32) -> Self {
        CharacterBuild {
            health,
            attack,
            defense,
        }
    }

    pub fn spent(&self) -> u32 {
        self.health
            .saturating_add(self.attack)
            .saturating_add(self.defense)
    }

    /// Points left unspent, or `None` if the build is over budget
    pub fn remaining(&self, budget: u32) -> Option<u32> {
        budget.checked_sub(self.spent())
    }

    pub fn validate(&self, budget: u32) -> Result<(), BuildError> {
        match self.remaining(budget) {
            Some(_) => Ok(()),
            None => Err(BuildError::OverBudget {
                spent: self.spent(),
                budget,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_points() {
        let build = CharacterBuild::new(2, 5, 1);
        assert_eq!(build.spent(), 8);
        assert_eq!(build.remaining(10), Some(2));
        assert!(build.validate(10).is_ok());
    }

    #[test]
    fn test_exact_budget_is_valid() {
        assert!(CharacterBuild::new(0, 10, 0).validate(10).is_ok());
    }

    #[test]
    fn test_over_budget() {
        let build = CharacterBuild::new(4, 4, 4);
        assert_eq!(build.remaining(10), None);
        assert_eq!(
            build.validate(10),
            Err(BuildError::OverBudget {
                spent: 12,
                budget: 10
            })
        );
    }
}
