//! Walk-and-jump motion: an eased horizontal walk with a single parabolic
//! hop layered on top once the walker crosses a trigger line.

use glam::Vec2;

use crate::extensions::{Easing, Ramp, lerp};

/// Jump sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

/// Static parameters of a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub start_x: f32,
    pub target_x: f32,
    /// Resting y; the jump lifts the walker above it.
    pub base_y: f32,
    /// Walk duration in ticks.
    pub walk_ticks: u32,
    /// The jump starts the first tick `x >= jump_trigger_x`.
    pub jump_trigger_x: f32,
    pub jump_ticks: u32,
    /// Peak lift in world units.
    pub jump_height: f32,
}

/// What happened during one `Motion::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionEvents {
    pub jump_started: bool,
}

#[derive(Debug, Clone)]
pub struct Motion {
    params: MotionParams,
    walking: bool,
    walk: Ramp,
    jump: Ramp,
    jump_state: JumpState,
    pos: Vec2,
}

impl Motion {
    pub fn new(params: MotionParams) -> Self {
        Self {
            walk: Ramp::new(params.walk_ticks, Easing::Smoothstep),
            jump: Ramp::new(params.jump_ticks, Easing::QuadOut),
            walking: false,
            jump_state: JumpState::NotStarted,
            pos: Vec2::new(params.start_x, params.base_y),
            params,
        }
    }

    /// Start walking. Nothing moves until this is called.
    pub fn start_walking(&mut self) {
        self.walking = true;
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// Advance one tick.
    pub fn advance(&mut self) -> MotionEvents {
        let mut events = MotionEvents::default();
        if !self.walking {
            return events;
        }

        if !self.walk.is_complete() {
            self.walk.step();
            self.pos.x = lerp(self.params.start_x, self.params.target_x, self.walk.eased());
        }

        if self.jump_state == JumpState::NotStarted && self.pos.x >= self.params.jump_trigger_x {
            self.jump_state = JumpState::InProgress;
            events.jump_started = true;
        }

        if self.jump_state == JumpState::InProgress {
            self.jump.step();
            let lift = jump_lift(self.params.jump_height, self.jump.progress());
            self.pos.y = self.params.base_y - lift;
            if self.jump.is_complete() {
                self.jump_state = JumpState::Complete;
                self.pos.y = self.params.base_y;
            }
        }

        events
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn walk_progress(&self) -> f32 {
        self.walk.progress()
    }

    pub fn jump_progress(&self) -> f32 {
        self.jump.progress()
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump_state
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }
}

/// Height above the base line for a jump at raw progress `p`.
/// Peaks at `height` where `ease_out(p) == 0.5`; zero at both ends.
pub fn jump_lift(height: f32, p: f32) -> f32 {
    let e = Easing::QuadOut.apply(p);
    height * 4.0 * e * (1.0 - e)
}
