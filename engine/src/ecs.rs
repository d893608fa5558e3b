//! Component types stored in the entity component system.

use derive_more::{Deref, DerefMut};

use crate::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Name(pub String);

/// Hit points for characters, charge or durability for items.
///
/// Zero is also the default value, so an entity with no `Health` component
/// reads as dead or destroyed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Health(pub i32);

/// Character level.
///
/// Only characters have this component. Its presence is what makes an entity
/// take part in level-scaled damage.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Level(pub i32);

/// Total damage taken since the character was created.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct DamageTaken(pub i32);

/// Value `DamageTaken` must reach for the next level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct LevelUpAt(pub i32);

/// Currently equipped weapon.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Wielding(pub Option<Entity>);

/// Damage a weapon adds to its wielder's attacks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct WeaponDamage(pub i32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct IsFaction(pub bool);

////////////////////////////////

/// Entity component system. Stores all the data of game entities.
#[derive(Default, Deref, DerefMut)]
pub(crate) struct Ecs(pub(crate) hecs::World);

impl Ecs {
    pub(crate) fn spawn_character(&mut self, level: i32) -> Entity {
        Entity(self.0.spawn((
            Health(crate::STARTING_HEALTH),
            Level(level),
            LevelUpAt(level.saturating_mul(crate::DAMAGE_FOR_LEVEL_UP)),
        )))
    }

    pub(crate) fn spawn_item(&mut self, kind: ItemKind, health: i32) -> Entity {
        Entity(self.0.spawn((kind, Health(health))))
    }

    pub(crate) fn spawn_faction(&mut self, name: String) -> Entity {
        Entity(self.0.spawn((Name(name), IsFaction(true))))
    }
}
