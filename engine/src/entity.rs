//! Generic entity logic.
use std::{fmt, str::FromStr};

use derive_more::Deref;
use hecs::Component;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    ecs::{Health, Name},
    prelude::*,
};

// Dummy wrapper so we can write impls for it directly instead of deriving a
// trait for hecs::Entity and writing every fn signature twice.
/// Game entity identifier datatype. All the actual contents live in the ECS.
#[derive(
    Copy,
    Clone,
    Hash,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Debug,
    Deref,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Entity(pub(crate) hecs::Entity);

impl Entity {
    pub(crate) fn get<T>(&self, r: &impl AsRef<Game>) -> T
    where
        T: Component + Clone + Default,
    {
        let r = r.as_ref();
        r.ecs
            .get::<&T>(**self)
            .map(|c| (*c).clone())
            .unwrap_or_default()
    }

    /// Like `get`, but tells apart a missing component from a default one.
    pub(crate) fn try_get<T>(&self, r: &impl AsRef<Game>) -> Option<T>
    where
        T: Component + Clone,
    {
        let r = r.as_ref();
        r.ecs.get::<&T>(**self).ok().map(|c| (*c).clone())
    }

    pub(crate) fn set<T>(&self, r: &mut impl AsMut<Game>, val: T)
    where
        T: Component + Default + PartialEq,
    {
        let r = r.as_mut();
        if val == T::default() {
            // Remove default values, abstraction layer assumes components are
            // always present but defaulted.
            //
            // Will give an error if the component wasn't there to begin with,
            // just ignore that.
            let _ = r.ecs.remove_one::<T>(**self);
        } else if r.ecs.insert_one(**self, val).is_err() {
            log::warn!("Entity::set: {self} does not belong to this game");
        }
    }

    /// Access and mutate a component using a closure.
    ///
    /// Use for complex components that aren't just atomic values.
    pub(crate) fn with_mut<T: Component + Clone + Default + PartialEq, U>(
        &self,
        r: &mut impl AsMut<Game>,
        f: impl FnOnce(&mut T) -> U,
    ) -> U {
        let r = r.as_mut();
        let mut val = self.get::<T>(r);
        let ret = f(&mut val);
        self.set(r, val);
        ret
    }

    pub fn exists(&self, r: &impl AsRef<Game>) -> bool {
        r.as_ref().ecs.contains(**self)
    }

    pub fn name(&self, r: &impl AsRef<Game>) -> String {
        self.get::<Name>(r).0
    }

    pub(crate) fn set_name(
        &self,
        r: &mut impl AsMut<Game>,
        name: impl Into<String>,
    ) {
        self.set(r, Name(name.into()));
    }

    /// Hit points of a character or remaining durability of an item.
    pub fn health(&self, r: &impl AsRef<Game>) -> i32 {
        self.get::<Health>(r).0
    }

    pub fn is_alive(&self, r: &impl AsRef<Game>) -> bool {
        self.health(r) > 0
    }

    /// Raise health by a precomputed amount.
    ///
    /// No clamping happens here, callers go through
    /// `Game::actual_heal_amount_for` first.
    pub fn increase_health(&self, r: &mut impl AsMut<Game>, amount: i32) {
        let r = r.as_mut();
        self.with_mut::<Health, _>(r, |h| h.0 = h.0.saturating_add(amount));
        if amount > 0 {
            r.send_msg(Msg::Healed(*self, amount));
        }
    }

    /// Lower health by a precomputed amount.
    ///
    /// Health has no floor other than bottoming out at `i32::MIN`.
    pub fn take_damage(&self, r: &mut impl AsMut<Game>, amount: i32) {
        let r = r.as_mut();
        let was_alive = self.is_alive(r);
        self.with_mut::<Health, _>(r, |h| h.0 = h.0.saturating_sub(amount));
        if amount > 0 {
            r.send_msg(Msg::Damaged(*self, amount));
        }

        if self.is_character(r) {
            self.accumulate_damage(r, amount);
        }

        if was_alive && !self.is_alive(r) {
            if self.is_character(r) {
                log::info!("{} dies", self.desc(r));
                r.send_msg(Msg::Died(*self));
            } else {
                log::info!("{} is destroyed", self.desc(r));
                r.send_msg(Msg::Destroyed(*self));
            }
        }
    }

    /// Name for log output, falls back to the handle for unnamed entities.
    pub(crate) fn desc(&self, r: &impl AsRef<Game>) -> String {
        let name = self.name(r);
        if name.is_empty() {
            self.to_string()
        } else {
            name
        }
    }
}

// Print entities as "#id", with the generation appended for recycled ids so
// that handles can be written into command scripts and read back.

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.0.to_bits().get();
        let (id, generation) = (bits & 0xffff_ffff, bits >> 32);
        if generation == 1 {
            write!(f, "#{id}")
        } else {
            write!(f, "#{id}.{generation}")
        }
    }
}

impl FromStr for Entity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(s) = s.strip_prefix('#') else {
            return Err("bad entity");
        };
        let (id, generation) = match s.split_once('.') {
            Some((id, generation)) => (id, generation),
            None => (s, "1"),
        };
        let id: u32 = id.parse().map_err(|_| "bad entity id")?;
        let generation: u32 =
            generation.parse().map_err(|_| "bad entity generation")?;
        let bits = (u64::from(generation) << 32) | u64::from(id);
        Ok(Entity(hecs::Entity::from_bits(bits).ok_or("bad entity")?))
    }
}
