//! Entity logic for combatants.

use crate::{
    ecs::{DamageTaken, Level, LevelUpAt, WeaponDamage, Wielding},
    prelude::*,
    DAMAGE_FOR_LEVEL_UP, HIGH_LEVEL, MAX_HEALTH_HIGH, MAX_HEALTH_LOW,
};

impl Entity {
    pub fn is_character(&self, r: &impl AsRef<Game>) -> bool {
        self.level(r).is_some()
    }

    /// Level of a character, `None` for entities that don't have levels.
    pub fn level(&self, r: &impl AsRef<Game>) -> Option<i32> {
        self.try_get::<Level>(r).map(|l| l.0)
    }

    pub fn is_high_level(&self, r: &impl AsRef<Game>) -> bool {
        self.level(r).is_some_and(|l| l >= HIGH_LEVEL)
    }

    pub fn max_health(&self, r: &impl AsRef<Game>) -> i32 {
        if self.is_high_level(r) {
            MAX_HEALTH_HIGH
        } else {
            MAX_HEALTH_LOW
        }
    }

    pub fn weapon(&self, r: &impl AsRef<Game>) -> Option<Entity> {
        self.get::<Wielding>(r).0
    }

    pub(crate) fn set_weapon(
        &self,
        r: &mut impl AsMut<Game>,
        weapon: Option<Entity>,
    ) {
        self.set(r, Wielding(weapon));
    }

    /// Factions the character currently belongs to.
    pub fn factions<'a>(
        &self,
        r: &'a impl AsRef<Game>,
    ) -> impl Iterator<Item = Entity> + 'a {
        let e = *self;
        r.as_ref()
            .registry()
            .filter_map(move |(f, members)| members.contains(&e).then_some(f))
    }

    /// Attack another entity.
    ///
    /// Without an explicit amount, the damage comes from the equipped weapon.
    /// Attacks the game doesn't allow do nothing.
    pub fn deal_damage(
        &self,
        r: &mut impl AsMut<Game>,
        target: &Entity,
        amount: Option<i32>,
    ) {
        let r = r.as_mut();

        if !r.can_damage(self, target) {
            log::debug!("{} can't damage {}", self.desc(r), target.desc(r));
            return;
        }

        let amount = match amount {
            Some(amount) => amount,
            None => self.weapon_damage(r),
        };

        let amount = r.actual_damage_amount_for(self, target, amount);
        target.take_damage(r, amount);
    }

    /// Damage from the equipped weapon for one attack.
    ///
    /// Wears down the weapon by one point if it's still usable.
    fn weapon_damage(&self, r: &mut impl AsMut<Game>) -> i32 {
        let r = r.as_mut();

        let Some(weapon) = self.weapon(r) else {
            return 0;
        };
        if weapon.is_destroyed(r) {
            return 0;
        }

        weapon.take_damage(r, 1);
        weapon.get::<WeaponDamage>(r).0
    }

    pub fn heal(&self, r: &mut impl AsMut<Game>, target: &Entity, amount: i32) {
        let r = r.as_mut();

        if !r.can_heal(self, target) {
            log::debug!("{} can't heal {}", self.desc(r), target.desc(r));
            return;
        }

        let amount = r.actual_heal_amount_for(target, amount);
        target.increase_health(r, amount);
    }

    pub fn use_item(&self, r: &mut impl AsMut<Game>, item: &Entity) {
        r.as_mut().use_item(self, item);
    }

    pub fn join(&self, r: &mut impl AsMut<Game>, factions: &[Entity]) {
        r.as_mut().join_faction(self, factions);
    }

    pub fn leave(&self, r: &mut impl AsMut<Game>, factions: &[Entity]) {
        r.as_mut().leave_faction(self, factions);
    }

    /// Track damage taken and level up when enough has accumulated.
    pub(crate) fn accumulate_damage(
        &self,
        r: &mut impl AsMut<Game>,
        amount: i32,
    ) {
        let r = r.as_mut();

        let total = self.with_mut::<DamageTaken, _>(r, |d| {
            d.0 = d.0.saturating_add(amount);
            d.0
        });

        // A threshold stuck at the ceiling can never be reached.
        let threshold = self.get::<LevelUpAt>(r).0;
        if threshold < i32::MAX && total >= threshold {
            self.level_up(r);
        }
    }

    fn level_up(&self, r: &mut impl AsMut<Game>) {
        let r = r.as_mut();
        let Some(level) = self.level(r) else { return };

        let level = level.saturating_add(1);
        self.set(r, Level(level));
        self.with_mut::<LevelUpAt, _>(r, |t| {
            t.0 = t.0.saturating_add(level.saturating_mul(DAMAGE_FOR_LEVEL_UP))
        });

        log::info!("{} reaches level {level}", self.desc(r));
        r.send_msg(Msg::LevelUp(*self, level));
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_character() {
        let mut game = Game::new();
        let c = game.create_character(1).unwrap();
        assert_eq!(c.health(&game), 1000);
        assert!(c.is_alive(&game));
        assert_eq!(c.level(&game), Some(1));
        assert_eq!(c.max_health(&game), 1000);
        assert_eq!(c.weapon(&game), None);
    }

    #[test]
    fn health_tiers() {
        let mut game = Game::new();
        for (level, max) in [(1, 1000), (5, 1000), (6, 1500), (60, 1500)] {
            let c = game.create_character(level).unwrap();
            assert_eq!(c.max_health(&game), max);
            // Higher levels don't start with more health.
            assert_eq!(c.health(&game), 1000);
        }
    }

    #[test]
    fn take_damage() {
        let mut game = Game::new();
        let c = game.create_character(1).unwrap();
        c.take_damage(&mut game, 10);
        assert_eq!(c.health(&game), 990);

        c.take_damage(&mut game, 989);
        assert!(c.is_alive(&game));

        c.take_damage(&mut game, 1);
        assert!(!c.is_alive(&game));

        c.take_damage(&mut game, 50);
        assert_eq!(c.health(&game), -50);
    }

    #[test]
    fn increase_health_is_unclamped() {
        let mut game = Game::new();
        let c = game.create_character(1).unwrap();
        c.take_damage(&mut game, 100);
        c.increase_health(&mut game, 50);
        assert_eq!(c.health(&game), 950);
        c.increase_health(&mut game, 500);
        assert_eq!(c.health(&game), 1450);
    }

    #[test]
    fn unarmed_attack_does_nothing() {
        let mut game = Game::new();
        let a = game.create_character(1).unwrap();
        let b = game.create_character(1).unwrap();
        a.deal_damage(&mut game, &b, None);
        assert_eq!(b.health(&game), 1000);
    }

    #[test]
    fn weapon_attack() {
        let mut game = Game::new();
        let a = game.create_character(1).unwrap();
        let b = game.create_character(1).unwrap();
        let sword = game.create_weapon(10, 25).unwrap();

        a.use_item(&mut game, &sword);
        assert_eq!(a.weapon(&game), Some(sword));
        assert_eq!(sword.health(&game), 9);

        a.deal_damage(&mut game, &b, None);
        assert_eq!(b.health(&game), 975);
        assert_eq!(sword.health(&game), 8);

        // Explicit amounts don't touch the weapon.
        a.deal_damage(&mut game, &b, Some(5));
        assert_eq!(b.health(&game), 970);
        assert_eq!(sword.health(&game), 8);
    }

    #[test]
    fn weapon_wears_out() {
        let mut game = Game::new();
        let a = game.create_character(1).unwrap();
        let b = game.create_character(1).unwrap();
        let stick = game.create_weapon(2, 10).unwrap();

        a.use_item(&mut game, &stick);
        assert_eq!(stick.health(&game), 1);
        assert!(!stick.is_destroyed(&game));

        // Last point of durability still lands the hit.
        a.deal_damage(&mut game, &b, None);
        assert!(stick.is_destroyed(&game));
        assert_eq!(b.health(&game), 990);

        // Broken weapon stays equipped but does nothing.
        a.deal_damage(&mut game, &b, None);
        assert_eq!(a.weapon(&game), Some(stick));
        assert_eq!(b.health(&game), 990);
        assert_eq!(stick.health(&game), 0);
    }

    #[test]
    fn blocked_attack_keeps_weapon_intact() {
        let mut game = Game::new();
        let a = game.create_character(1).unwrap();
        let sword = game.create_weapon(10, 25).unwrap();
        a.use_item(&mut game, &sword);

        a.deal_damage(&mut game, &a, None);
        assert_eq!(a.health(&game), 1000);
        assert_eq!(sword.health(&game), 9);
    }

    #[test]
    fn heal_self_and_allies_only() {
        let mut game = Game::new();
        let jedis = game.create_faction("Jedis");
        let a = game.create_character(1).unwrap();
        let b = game.create_character(1).unwrap();
        let c = game.create_character(1).unwrap();
        a.join(&mut game, &[jedis]);
        b.join(&mut game, &[jedis]);

        for e in [a, b, c] {
            e.take_damage(&mut game, 300);
        }

        a.heal(&mut game, &a, 100);
        a.heal(&mut game, &b, 100);
        a.heal(&mut game, &c, 100);

        assert_eq!(a.health(&game), 800);
        assert_eq!(b.health(&game), 800);
        assert_eq!(c.health(&game), 700);
    }

    #[test]
    fn level_up_from_damage() {
        let mut game = Game::new();
        let c = game.create_character(1).unwrap();

        c.take_damage(&mut game, 600);
        assert_eq!(c.level(&game), Some(1));
        c.take_damage(&mut game, 400);
        assert_eq!(c.level(&game), Some(2));

        // Next threshold is 1000 + 2 * 1000.
        c.increase_health(&mut game, 5000);
        c.take_damage(&mut game, 1999);
        assert_eq!(c.level(&game), Some(2));
        c.take_damage(&mut game, 1);
        assert_eq!(c.level(&game), Some(3));

        // One big hit only gives one level.
        c.take_damage(&mut game, 100_000);
        assert_eq!(c.level(&game), Some(4));
    }

    #[test]
    fn level_up_raises_health_tier() {
        let mut game = Game::new();
        let c = game.create_character(5).unwrap();
        assert_eq!(c.max_health(&game), 1000);
        c.increase_health(&mut game, 5000);
        c.take_damage(&mut game, 5000);
        assert_eq!(c.level(&game), Some(6));
        assert_eq!(c.max_health(&game), 1500);
    }

    #[test]
    fn extreme_levels() {
        let mut game = Game::new();
        let c = game.create_character(3_000_000).unwrap();
        c.take_damage(&mut game, i32::MAX);
        assert_eq!(c.level(&game), Some(3_000_000));

        let top = game.create_character(i32::MAX).unwrap();
        top.level_up(&mut game);
        assert_eq!(top.level(&game), Some(i32::MAX));
    }

    #[test]
    fn huge_hits_bottom_out() {
        let mut game = Game::new();
        let a = game.create_character(1).unwrap();
        let b = game.create_character(1).unwrap();
        for _ in 0..3 {
            a.deal_damage(&mut game, &b, Some(1_000_000_000));
        }
        assert_eq!(b.health(&game), i32::MIN);
        // Still one level per hit.
        assert_eq!(b.level(&game), Some(4));

        assert_eq!(game.actual_heal_amount_for(&b, 100), 100);
        b.increase_health(&mut game, i32::MAX);
        assert_eq!(b.health(&game), -1);
    }

    #[test]
    fn faction_listing() {
        let mut game = Game::new();
        let jedis = game.create_faction("Jedis");
        let rebels = game.create_faction("Rebels");
        let siths = game.create_faction("Siths");
        let c = game.create_character(1).unwrap();

        c.join(&mut game, &[jedis, rebels]);
        assert_eq!(c.factions(&game).collect::<Vec<_>>(), vec![jedis, rebels]);
        c.leave(&mut game, &[jedis, siths]);
        assert_eq!(c.factions(&game).collect::<Vec<_>>(), vec![rebels]);
    }
}
