//! Messages about instant events for the host to display.

use crate::Entity;

/// Events reported by the game as they happen.
///
/// The game queues these in order; read them with `Game::poll_msg` or
/// `Game::drain_msgs`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Msg {
    /// Entity lost health or durability.
    Damaged(Entity, i32),

    /// Entity gained health.
    Healed(Entity, i32),

    /// Character's health dropped to zero or below.
    Died(Entity),

    /// Item ran out of health.
    Destroyed(Entity),

    /// Character reached a new level.
    LevelUp(Entity, i32),

    /// Character equipped a weapon.
    Equipped(Entity, Entity),
}
