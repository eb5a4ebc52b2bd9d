// Player movement, combat state and drawing

use glam::Vec2;

use super::animation::{AnimationClip, AnimationSet};
use super::state::{AttackStage, Direction, PlayerState};
use crate::engine::renderer::SpriteBatch;
use crate::game::config::GameConfig;
use crate::game::world::TileMetrics;

/// The sprite's feet sit this many pixels above the bottom of its frame
const BASELINE_LIFT: f32 = 25.0;

/// Control signals the player consumes each frame.
///
/// Direction flags are levels (held right now), the attack flag is an
/// edge (went down this frame). A plain struct so controller tests need
/// no window or event loop behind them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
}

/// The player: position, facing, combat state and clip timing
pub struct Player {
    position: Vec2,
    facing: Direction,
    state: PlayerState,
    /// Seconds into the current clip; reset only when a swing starts
    state_time: f32,
    animations: AnimationSet,
    metrics: TileMetrics,
    speed: f32,
    combo_window: f32,
    sprite_scale: f32,
}

impl Player {
    /// Spawn at the world origin, facing the camera
    pub fn new(animations: AnimationSet, config: &GameConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            facing: Direction::Down,
            state: PlayerState::Idle(Direction::Down),
            state_time: 0.0,
            animations,
            metrics: config.metrics(),
            speed: config.move_speed,
            combo_window: config.combo_window,
            sprite_scale: config.sprite_scale,
        }
    }

    /// Advance one frame.
    ///
    /// `dt` is in seconds and feeds the clip and combo timers only;
    /// movement applies `speed` once per call. While a swing plays, all
    /// movement input is ignored.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if let PlayerState::Attacking { stage, elapsed } = self.state {
            let elapsed = elapsed + dt;
            self.state = PlayerState::Attacking { stage, elapsed };

            if self.current_clip().is_finished(self.state_time) {
                match stage {
                    AttackStage::One if elapsed > self.combo_window => {
                        self.state = PlayerState::Idle(self.facing);
                    }
                    AttackStage::Two => {
                        self.state = PlayerState::Idle(self.facing);
                    }
                    _ => {}
                }
            }

            // A follow-up press inside the window chains into the second swing
            if let PlayerState::Attacking {
                stage: AttackStage::One,
                elapsed,
            } = self.state
            {
                if input.attack && elapsed <= self.combo_window {
                    self.begin_attack(AttackStage::Two);
                }
            }

            self.state_time += dt;
            return;
        }

        // Vertical input wins; holding both axes never moves diagonally
        let mut step = Vec2::ZERO;
        if input.up {
            step = Direction::Up.offset();
            self.facing = Direction::Up;
        } else if input.down {
            step = Direction::Down.offset();
            self.facing = Direction::Down;
        } else if input.left {
            step = Direction::Left.offset();
            self.facing = Direction::Left;
        } else if input.right {
            step = Direction::Right.offset();
            self.facing = Direction::Right;
        }

        if input.attack {
            // The swing eats this frame's movement
            self.begin_attack(AttackStage::One);
            return;
        }

        if step != Vec2::ZERO {
            self.position += step.normalize() * self.speed;
            self.state = PlayerState::Walking(self.facing);
        } else {
            self.state = PlayerState::Idle(self.facing);
        }

        self.state_time += dt;
    }

    fn begin_attack(&mut self, stage: AttackStage) {
        self.state = PlayerState::Attacking {
            stage,
            elapsed: 0.0,
        };
        self.state_time = 0.0;
    }

    /// Queue this frame's sprite: horizontally centered on the occupied
    /// tile, feet planted just above the tile origin.
    pub fn render(&self, batch: &mut SpriteBatch) {
        let clip = self.current_clip();
        let frame = clip.frame_at(self.state_time);
        let size = clip.frame_size() * self.sprite_scale;

        let x = self.position.x + self.metrics.width / 2.0 - size.x / 2.0;
        let y = self.position.y + self.metrics.height - (size.y - BASELINE_LIFT);
        batch.draw(frame, x, y, size.x, size.y);
    }

    fn current_clip(&self) -> &AnimationClip {
        self.animations.clip(self.facing, self.state.activity())
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport, bypassing movement; for (re)placing the player
    #[allow(dead_code)]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Seconds into the clip currently showing
    pub fn state_time(&self) -> f32 {
        self.state_time
    }
}
