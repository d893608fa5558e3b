//! Faction membership bookkeeping.

use crate::{ecs::IsFaction, prelude::*};

impl Entity {
    pub fn is_faction(&self, r: &impl AsRef<Game>) -> bool {
        self.get::<IsFaction>(r).0
    }

    /// Current members of a faction, in joining order.
    pub fn members<'a>(
        &self,
        r: &'a impl AsRef<Game>,
    ) -> impl Iterator<Item = Entity> + 'a {
        r.as_ref().members(self)
    }
}

impl Game {
    pub fn join_faction(&mut self, member: &Entity, factions: &[Entity]) {
        for faction in factions {
            if !faction.is_faction(self) {
                log::warn!("Game::join_faction: {faction} is not a faction");
                continue;
            }
            self.factions.entry(*faction).or_default().insert(*member);
        }
    }

    pub fn leave_faction(&mut self, member: &Entity, factions: &[Entity]) {
        for faction in factions {
            if !faction.is_faction(self) {
                log::warn!("Game::leave_faction: {faction} is not a faction");
                continue;
            }
            if let Some(members) = self.factions.get_mut(faction) {
                members.shift_remove(member);
            }
        }
    }

    /// Return whether the two entities share at least one faction.
    ///
    /// Scans every faction, there are expected to be few of them.
    pub fn allied(&self, a: &Entity, b: &Entity) -> bool {
        self.factions
            .values()
            .any(|members| members.contains(a) && members.contains(b))
    }

    pub fn members<'a>(
        &'a self,
        faction: &Entity,
    ) -> impl Iterator<Item = Entity> + 'a {
        self.factions
            .get(faction)
            .into_iter()
            .flat_map(|members| members.iter().copied())
    }

    /// Faction handles with their member sets.
    pub(crate) fn registry(
        &self,
    ) -> impl Iterator<Item = (Entity, &IndexSet<Entity>)> + '_ {
        self.factions.iter().map(|(f, m)| (*f, m))
    }
}
