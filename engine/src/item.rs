//! Entity logic for usable items.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    ecs::{Health, WeaponDamage},
    prelude::*,
};

#[derive(
    Copy,
    Clone,
    Default,
    Debug,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ItemKind {
    // Have a baked-in None value so this can be used directly as a component
    #[default]
    None,
    /// Heals whoever uses it, spending its own charge.
    Consumable,
    /// Gets equipped by whoever uses it.
    Weapon,
}

impl Entity {
    pub fn item_kind(&self, r: &impl AsRef<Game>) -> ItemKind {
        self.get(r)
    }

    pub fn is_item(&self, r: &impl AsRef<Game>) -> bool {
        self.item_kind(r) != ItemKind::None
    }

    pub fn is_weapon(&self, r: &impl AsRef<Game>) -> bool {
        self.item_kind(r) == ItemKind::Weapon
    }

    pub fn is_destroyed(&self, r: &impl AsRef<Game>) -> bool {
        self.health(r) <= 0
    }

    /// How much damage a weapon adds to attacks, zero for everything else.
    pub fn damage(&self, r: &impl AsRef<Game>) -> i32 {
        self.get::<WeaponDamage>(r).0
    }

    /// Apply the item's effect to a character using it.
    pub(crate) fn apply_effect_to(
        &self,
        r: &mut impl AsMut<Game>,
        target: &Entity,
    ) {
        let r = r.as_mut();

        match self.item_kind(r) {
            ItemKind::None => {
                log::warn!("Entity::apply_effect_to: {self} is not an item");
            }
            ItemKind::Consumable => {
                // Offer the whole remaining charge, keep what doesn't fit.
                let charge = self.get::<Health>(r).0;
                let amount = r.actual_heal_amount_for(target, charge);
                target.increase_health(r, amount);
                self.take_damage(r, amount);
            }
            ItemKind::Weapon => {
                // Only one wielder at a time.
                let g: &Game = r;
                let wielders: Vec<Entity> = g
                    .characters()
                    .filter(|c| c != target && c.weapon(g) == Some(*self))
                    .collect();
                for c in wielders {
                    c.set_weapon(r, None);
                }

                target.set_weapon(r, Some(*self));
                r.send_msg(Msg::Equipped(*target, *self));
                // Equipping costs a point of durability.
                self.take_damage(r, 1);
            }
        }
    }
}
