use std::collections::VecDeque;

use crate::{
    ecs::{Ecs, WeaponDamage},
    prelude::*,
    LEVEL_GAP, STRONG_ATTACKER_MODIFIER, WEAK_ATTACKER_MODIFIER,
};

/// Main data container and rules arbiter.
///
/// Owns every entity and decides whether interactions between them are
/// allowed and how strong they are.
#[derive(Default)]
pub struct Game {
    pub(crate) ecs: Ecs,
    characters: Vec<Entity>,
    items: Vec<Entity>,
    /// Faction registry, faction handles to member sets.
    pub(crate) factions: IndexMap<Entity, IndexSet<Entity>>,
    msgs: VecDeque<Msg>,
}

impl AsRef<Game> for Game {
    fn as_ref(&self) -> &Game {
        self
    }
}

impl AsMut<Game> for Game {
    fn as_mut(&mut self) -> &mut Game {
        self
    }
}

impl Game {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn create_character(&mut self, level: i32) -> Result<Entity> {
        if level < 1 {
            return Err(ConfigurationError::Level(level));
        }

        let e = self.ecs.spawn_character(level);
        self.characters.push(e);
        Ok(e)
    }

    pub fn create_faction(&mut self, name: impl Into<String>) -> Entity {
        let e = self.ecs.spawn_faction(name.into());
        self.factions.insert(e, Default::default());
        e
    }

    /// Create a consumable that heals by up to `health` points in total.
    pub fn create_item(&mut self, health: i32) -> Result<Entity> {
        if health < 0 {
            return Err(ConfigurationError::Health(health));
        }

        let e = self.ecs.spawn_item(ItemKind::Consumable, health);
        self.items.push(e);
        Ok(e)
    }

    pub fn create_weapon(
        &mut self,
        health: i32,
        damage: i32,
    ) -> Result<Entity> {
        if health < 0 {
            return Err(ConfigurationError::Health(health));
        }
        if damage < 0 {
            return Err(ConfigurationError::Damage(damage));
        }

        let e = self.ecs.spawn_item(ItemKind::Weapon, health);
        e.set(self, WeaponDamage(damage));
        self.items.push(e);
        Ok(e)
    }

    pub fn characters(&self) -> impl Iterator<Item = Entity> + '_ {
        self.characters.iter().copied()
    }

    pub fn factions(&self) -> impl Iterator<Item = Entity> + '_ {
        self.factions.keys().copied()
    }

    pub fn items(&self) -> impl Iterator<Item = Entity> + '_ {
        self.items.iter().copied()
    }

    /// Find an entity by name.
    pub fn named(&self, name: &str) -> Option<Entity> {
        self.characters()
            .chain(self.factions())
            .chain(self.items())
            .find(|e| e.name(self) == name)
    }

    pub fn can_damage(&self, from: &Entity, to: &Entity) -> bool {
        from != to && !self.allied(from, to)
    }

    /// Damage multiplier from the level difference of the participants.
    ///
    /// Entities without a level never scale damage.
    pub fn damage_modifier(&self, source: &Entity, target: &Entity) -> f64 {
        let (Some(a), Some(b)) = (source.level(self), target.level(self))
        else {
            return 1.0;
        };

        match b - a {
            d if d >= LEVEL_GAP => WEAK_ATTACKER_MODIFIER,
            d if d <= -LEVEL_GAP => STRONG_ATTACKER_MODIFIER,
            _ => 1.0,
        }
    }

    /// Scale an attack's damage, rounding to the nearest point.
    ///
    /// Negative amounts are treated as zero.
    pub fn actual_damage_amount_for(
        &self,
        source: &Entity,
        target: &Entity,
        amount: i32,
    ) -> i32 {
        let modifier = self.damage_modifier(source, target);
        (amount.max(0) as f64 * modifier).round() as i32
    }

    pub fn deal_damage(&mut self, from: &Entity, to: &Entity, amount: i32) {
        if !self.can_damage(from, to) {
            log::debug!("{} can't damage {}", from.desc(self), to.desc(self));
            return;
        }

        let amount = self.actual_damage_amount_for(from, to, amount);
        to.take_damage(self, amount);
    }

    pub fn can_heal(&self, from: &Entity, to: &Entity) -> bool {
        if !to.is_character(self) || !to.is_alive(self) {
            return false;
        }

        from == to || self.allied(from, to)
    }

    /// How much of a heal actually fits under the target's maximum health.
    pub fn actual_heal_amount_for(&self, target: &Entity, amount: i32) -> i32 {
        amount
            .min(target.max_health(self).saturating_sub(target.health(self)))
            .max(0)
    }

    /// Have a character use an item on itself.
    pub fn use_item(&mut self, character: &Entity, item: &Entity) {
        if !character.is_character(self) || !character.is_alive(self) {
            log::debug!("{} can't use items", character.desc(self));
            return;
        }

        if !item.is_item(self) {
            log::debug!("{} is not usable", item.desc(self));
            return;
        }

        item.apply_effect_to(self, character);
    }

    /// Run a sequence of commands in order.
    pub fn run(
        &mut self,
        commands: impl IntoIterator<Item = (Entity, Action)>,
    ) {
        for (e, action) in commands {
            e.execute(self, action);
        }
    }

    pub(crate) fn send_msg(&mut self, msg: Msg) {
        self.msgs.push_back(msg);
    }

    /// Take the oldest unread event message.
    pub fn poll_msg(&mut self) -> Option<Msg> {
        self.msgs.pop_front()
    }

    /// Take all unread event messages.
    pub fn drain_msgs(&mut self) -> impl Iterator<Item = Msg> + '_ {
        self.msgs.drain(..)
    }
}
