//! Entities doing things

use serde::{Deserialize, Serialize};

use crate::prelude::*;

impl Entity {
    /// Perform a single command.
    pub fn execute(&self, r: &mut impl AsMut<Game>, action: Action) {
        use Action::*;
        let r = r.as_mut();

        match action {
            Attack { target, amount } => self.deal_damage(r, &target, amount),
            Heal { target, amount } => self.heal(r, &target, amount),
            Use(item) => self.use_item(r, &item),
            Join(factions) => self.join(r, &factions),
            Leave(factions) => self.leave(r, &factions),
        }
    }
}

/// Atomic single-step actions.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Attack with an explicit amount, or with the equipped weapon if there
    /// is none.
    Attack {
        target: Entity,
        #[serde(default)]
        amount: Option<i32>,
    },
    Heal {
        target: Entity,
        amount: i32,
    },
    Use(Entity),
    Join(Vec<Entity>),
    Leave(Vec<Entity>),
}
