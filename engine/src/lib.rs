//! Combat and faction arbitration rules.
//!
//! All game state lives in a [`Game`]. Characters, items and factions are
//! [`Entity`] handles into it, and every method that reads or changes an
//! entity takes the game as its context argument.

/// Characters at or above this level get the higher health tier.
pub const HIGH_LEVEL: i32 = 6;

/// Health of a newly created character, regardless of level.
pub const STARTING_HEALTH: i32 = 1000;

/// Maximum health for characters below `HIGH_LEVEL`.
pub const MAX_HEALTH_LOW: i32 = 1000;

/// Maximum health for characters at or above `HIGH_LEVEL`.
pub const MAX_HEALTH_HIGH: i32 = 1500;

/// Level difference at which damage starts getting scaled.
pub const LEVEL_GAP: i32 = 5;

/// Damage scaling when the target outlevels the attacker by `LEVEL_GAP`.
pub const WEAK_ATTACKER_MODIFIER: f64 = 0.5;

/// Damage scaling when the attacker outlevels the target by `LEVEL_GAP`.
pub const STRONG_ATTACKER_MODIFIER: f64 = 1.5;

/// Damage a character must take per level to level up.
pub const DAMAGE_FOR_LEVEL_UP: i32 = 1000;

mod action;
pub use action::Action;

mod character;

pub(crate) mod ecs;

mod entity;
pub use entity::Entity;

mod error;
pub use error::ConfigurationError;

mod faction;

mod game;
pub use game::Game;

mod item;
pub use item::ItemKind;

mod msg;
pub use msg::Msg;

pub mod prelude;

mod scenario;
pub use scenario::{CharacterSpec, ItemSpec, Scenario};

pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;
