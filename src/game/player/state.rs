// Player facing and state definitions

use glam::Vec2;

use super::animation::Activity;

/// The four facings the sprite sheets cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit screen-space offset for this facing (y grows upward)
    pub fn offset(&self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Folder name this facing's frames are loaded from
    pub fn asset_dir(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Which swing of the two-hit combo is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackStage {
    One,
    Two,
}

impl AttackStage {
    /// Activity whose clip animates this swing
    pub fn activity(&self) -> Activity {
        match self {
            Self::One => Activity::AttackOne,
            Self::Two => Activity::AttackTwo,
        }
    }
}

/// What the player is doing right now.
///
/// `elapsed` on the attack arm counts seconds since the current swing
/// began; the first swing measures the combo window against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerState {
    Idle(Direction),
    Walking(Direction),
    Attacking { stage: AttackStage, elapsed: f32 },
}

impl PlayerState {
    /// Activity used to pick the animation clip
    pub fn activity(&self) -> Activity {
        match self {
            Self::Idle(_) => Activity::Idle,
            Self::Walking(_) => Activity::Walk,
            Self::Attacking { stage, .. } => stage.activity(),
        }
    }

    /// Movement and fresh swings are locked out while this is true
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }
}
