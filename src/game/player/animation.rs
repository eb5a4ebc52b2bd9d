// Animation clips and the per-player clip table

use std::collections::HashMap;

use glam::Vec2;

use super::state::Direction;
use crate::engine::renderer::TextureHandle;
use crate::game::config::ConfigError;

/// What the player is doing, as far as clip selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Idle,
    Walk,
    AttackOne,
    AttackTwo,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Idle,
        Activity::Walk,
        Activity::AttackOne,
        Activity::AttackTwo,
    ];

    /// Idle and walk cycle forever; attack swings play through once
    pub fn loops(&self) -> bool {
        matches!(self, Self::Idle | Self::Walk)
    }

    /// Folder name this activity's frames are loaded from
    pub fn asset_dir(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::AttackOne => "attack_one",
            Self::AttackTwo => "attack_two",
        }
    }
}

/// An immutable strip of frames shown at a fixed rate.
///
/// Clips hold no playback state. The elapsed time lives with whoever is
/// playing the clip, so one clip can back any number of actors at once.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    frames: Vec<TextureHandle>,
    frame_size: Vec2,
    frame_duration: f32,
    looping: bool,
}

impl AnimationClip {
    pub fn new(
        frames: Vec<TextureHandle>,
        frame_size: Vec2,
        frame_duration: f32,
        looping: bool,
    ) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::EmptyClip);
        }
        if frame_duration <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "frame_duration",
                value: frame_duration,
            });
        }
        Ok(Self {
            frames,
            frame_size,
            frame_duration,
            looping,
        })
    }

    /// Frame to show after `elapsed` seconds of playback.
    ///
    /// Looping clips wrap around; one-shot clips hold their last frame.
    pub fn frame_at(&self, elapsed: f32) -> TextureHandle {
        let index = (elapsed / self.frame_duration) as usize;
        let index = if self.looping {
            index % self.frames.len()
        } else {
            index.min(self.frames.len() - 1)
        };
        self.frames[index]
    }

    /// True once one full pass of the clip has elapsed. Only meaningful
    /// for one-shot clips; looping playback never stops.
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.total_duration()
    }

    /// Length of a single pass through every frame
    pub fn total_duration(&self) -> f32 {
        self.frames.len() as f32 * self.frame_duration
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Source pixel size shared by every frame in the strip
    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }
}

/// Every clip the player can show, keyed by facing and activity.
///
/// The builder refuses to finish until all combinations are present, so
/// lookups afterwards can never miss.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    clips: HashMap<(Direction, Activity), AnimationClip>,
}

impl AnimationSet {
    pub fn builder() -> AnimationSetBuilder {
        AnimationSetBuilder::default()
    }

    /// Clip for a facing/activity pair. Completeness was checked at build
    /// time, so this lookup always succeeds.
    pub fn clip(&self, direction: Direction, activity: Activity) -> &AnimationClip {
        &self.clips[&(direction, activity)]
    }
}

/// Collects clips until the set covers every facing/activity pair
#[derive(Debug, Default)]
pub struct AnimationSetBuilder {
    clips: HashMap<(Direction, Activity), AnimationClip>,
}

impl AnimationSetBuilder {
    pub fn clip(mut self, direction: Direction, activity: Activity, clip: AnimationClip) -> Self {
        self.clips.insert((direction, activity), clip);
        self
    }

    pub fn build(self) -> Result<AnimationSet, ConfigError> {
        for direction in Direction::ALL {
            for activity in Activity::ALL {
                if !self.clips.contains_key(&(direction, activity)) {
                    return Err(ConfigError::MissingClip {
                        direction,
                        activity,
                    });
                }
            }
        }
        Ok(AnimationSet { clips: self.clips })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(count: usize) -> Vec<TextureHandle> {
        (0..count).map(TextureHandle::from_raw).collect()
    }

    fn clip(count: usize, frame_duration: f32, looping: bool) -> AnimationClip {
        AnimationClip::new(
            handles(count),
            Vec2::new(32.0, 48.0),
            frame_duration,
            looping,
        )
        .unwrap()
    }

    #[test]
    fn test_looping_clip_wraps_around() {
        let clip = clip(4, 0.25, true);
        assert_eq!(clip.total_duration(), 1.0);

        assert_eq!(clip.frame_at(0.0), TextureHandle::from_raw(0));
        assert_eq!(clip.frame_at(0.26), TextureHandle::from_raw(1));
        assert_eq!(clip.frame_at(0.9), TextureHandle::from_raw(3));

        // One full pass later, same frames come back
        for t in [0.0, 0.26, 0.6, 0.9] {
            assert_eq!(clip.frame_at(t + 1.0), clip.frame_at(t));
            assert_eq!(clip.frame_at(t + 3.0), clip.frame_at(t));
        }
    }

    #[test]
    fn test_one_shot_clip_holds_last_frame() {
        let clip = clip(3, 0.25, false);

        assert_eq!(clip.frame_at(0.0), TextureHandle::from_raw(0));
        assert_eq!(clip.frame_at(0.6), TextureHandle::from_raw(2));
        assert_eq!(clip.frame_at(10.0), TextureHandle::from_raw(2));
    }

    #[test]
    fn test_is_finished_at_total_duration() {
        let clip = clip(3, 0.25, false);

        assert!(!clip.is_finished(0.0));
        assert!(!clip.is_finished(0.74));
        assert!(clip.is_finished(0.75));
        assert!(clip.is_finished(2.0));
    }

    #[test]
    fn test_empty_clip_is_rejected() {
        let result = AnimationClip::new(Vec::new(), Vec2::ZERO, 0.1, true);
        assert!(matches!(result, Err(ConfigError::EmptyClip)));
    }

    #[test]
    fn test_non_positive_frame_duration_is_rejected() {
        let result = AnimationClip::new(handles(2), Vec2::ZERO, 0.0, true);
        assert!(matches!(
            result,
            Err(ConfigError::NonPositive {
                name: "frame_duration",
                ..
            })
        ));
    }

    #[test]
    fn test_activity_loop_policy() {
        assert!(Activity::Idle.loops());
        assert!(Activity::Walk.loops());
        assert!(!Activity::AttackOne.loops());
        assert!(!Activity::AttackTwo.loops());
    }

    fn full_builder() -> AnimationSetBuilder {
        let mut builder = AnimationSet::builder();
        for direction in Direction::ALL {
            for activity in Activity::ALL {
                builder = builder.clip(direction, activity, clip(7, 0.1, activity.loops()));
            }
        }
        builder
    }

    #[test]
    fn test_complete_set_builds() {
        let set = full_builder().build().unwrap();
        let clip = set.clip(Direction::Left, Activity::AttackTwo);
        assert_eq!(clip.frame_count(), 7);
    }

    #[test]
    fn test_incomplete_set_reports_missing_pair() {
        let mut builder = AnimationSet::builder();
        for direction in Direction::ALL {
            for activity in Activity::ALL {
                if direction == Direction::Right && activity == Activity::Walk {
                    continue;
                }
                builder = builder.clip(direction, activity, clip(2, 0.1, true));
            }
        }

        match builder.build() {
            Err(ConfigError::MissingClip {
                direction,
                activity,
            }) => {
                assert_eq!(direction, Direction::Right);
                assert_eq!(activity, Activity::Walk);
            }
            other => panic!("expected missing clip error, got {:?}", other),
        }
    }
}
