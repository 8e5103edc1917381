//! Touch-mode controls
//!
//! Two independent virtual joysticks anchored in the bottom screen
//! corners. The left stick thresholds its displacement into the four
//! direction flags; the right stick dead-zones and normalizes its
//! displacement into continuous look rates. A tap anywhere else is a pick
//! request through the view center.

use macroquad::prelude::*;

use super::{ControlsOutput, MoveFlags, MovementState};
use crate::config::{
    STICK_BASE_RADIUS, STICK_DEAD_ZONE, STICK_FLAG_THRESHOLD, STICK_MARGIN, STICK_MAX_RADIUS,
};

/// How far outside the base circle a touch still grabs the stick
const GRAB_RADIUS: f32 = STICK_BASE_RADIUS * 1.5;

/// One virtual stick: the bound touch and its displacement from center
#[derive(Debug, Default)]
struct StickState {
    touch_id: Option<u64>,
    offset: Vec2,
}

impl StickState {
    fn release(&mut self) {
        self.touch_id = None;
        self.offset = Vec2::ZERO;
    }
}

pub struct TouchControls {
    left: StickState,
    right: StickState,
}

impl TouchControls {
    pub fn new() -> Self {
        Self {
            left: StickState::default(),
            right: StickState::default(),
        }
    }

    /// Left stick anchor (movement)
    pub fn left_anchor() -> Vec2 {
        vec2(STICK_MARGIN, screen_height() - STICK_MARGIN)
    }

    /// Right stick anchor (look)
    pub fn right_anchor() -> Vec2 {
        vec2(screen_width() - STICK_MARGIN, screen_height() - STICK_MARGIN)
    }

    /// Stick displacements clamped to the base radius, for the widgets
    pub fn stick_offsets(&self) -> (Vec2, Vec2) {
        (
            self.left.offset.clamp_length_max(STICK_BASE_RADIUS),
            self.right.offset.clamp_length_max(STICK_BASE_RADIUS),
        )
    }

    pub fn update(&mut self, movement: &mut MovementState) -> ControlsOutput {
        let mut tapped = false;
        let left_anchor = Self::left_anchor();
        let right_anchor = Self::right_anchor();

        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => {
                    if self.left.touch_id.is_none()
                        && touch.position.distance(left_anchor) <= GRAB_RADIUS
                    {
                        self.left.touch_id = Some(touch.id);
                        self.left.offset = touch.position - left_anchor;
                    } else if self.right.touch_id.is_none()
                        && touch.position.distance(right_anchor) <= GRAB_RADIUS
                    {
                        self.right.touch_id = Some(touch.id);
                        self.right.offset = touch.position - right_anchor;
                    } else {
                        tapped = true;
                    }
                }
                TouchPhase::Moved | TouchPhase::Stationary => {
                    if self.left.touch_id == Some(touch.id) {
                        self.left.offset = touch.position - left_anchor;
                    } else if self.right.touch_id == Some(touch.id) {
                        self.right.offset = touch.position - right_anchor;
                    }
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    if self.left.touch_id == Some(touch.id) {
                        self.left.release();
                    } else if self.right.touch_id == Some(touch.id) {
                        self.right.release();
                    }
                }
            }
        }

        movement.flags = if self.left.touch_id.is_some() {
            direction_flags(self.left.offset)
        } else {
            MoveFlags::default()
        };
        movement.look_rate = if self.right.touch_id.is_some() {
            stick_vector(self.right.offset)
        } else {
            Vec2::ZERO
        };

        ControlsOutput {
            pick_requested: tapped,
        }
    }
}

impl Default for TouchControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Threshold a left-stick displacement into the four direction flags.
/// Screen Y grows downward, so pushing up (negative dy) means forward.
pub fn direction_flags(offset: Vec2) -> MoveFlags {
    MoveFlags {
        forward: offset.y < -STICK_FLAG_THRESHOLD,
        backward: offset.y > STICK_FLAG_THRESHOLD,
        left: offset.x < -STICK_FLAG_THRESHOLD,
        right: offset.x > STICK_FLAG_THRESHOLD,
    }
}

/// Normalize a right-stick displacement against the dead zone and max
/// radius: zero inside the dead zone, then a linear ramp that reaches
/// unit deflection at the max radius and stays there.
pub fn stick_vector(offset: Vec2) -> Vec2 {
    let dist = offset.length();
    if dist <= STICK_DEAD_ZONE {
        return Vec2::ZERO;
    }
    let deflection = ((dist - STICK_DEAD_ZONE) / (STICK_MAX_RADIUS - STICK_DEAD_ZONE)).min(1.0);
    offset / dist * deflection
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn dead_zone_suppresses_jitter() {
        assert_eq!(stick_vector(vec2(0.0, 0.0)), Vec2::ZERO);
        assert_eq!(stick_vector(vec2(3.0, -3.0)), Vec2::ZERO);
    }

    #[test]
    fn deflection_ramps_to_unit_at_max_radius() {
        let half = stick_vector(vec2(
            (STICK_DEAD_ZONE + STICK_MAX_RADIUS) / 2.0,
            0.0,
        ));
        assert!((half.x - 0.5).abs() < EPS, "half deflection: {:?}", half);
        assert!(half.y.abs() < EPS);

        let full = stick_vector(vec2(STICK_MAX_RADIUS, 0.0));
        assert!((full.length() - 1.0).abs() < EPS);

        // Past the max radius the deflection saturates
        let past = stick_vector(vec2(STICK_MAX_RADIUS * 3.0, 0.0));
        assert!((past.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn deflection_keeps_its_direction() {
        let v = stick_vector(vec2(30.0, -30.0));
        assert!(v.x > 0.0);
        assert!(v.y < 0.0);
        assert!((v.x + v.y).abs() < EPS, "should stay diagonal: {:?}", v);
    }

    #[test]
    fn flags_threshold_each_axis_independently() {
        assert_eq!(direction_flags(vec2(0.0, 0.0)), MoveFlags::default());

        let up = direction_flags(vec2(0.0, -20.0));
        assert!(up.forward && !up.backward && !up.left && !up.right);

        let down_right = direction_flags(vec2(25.0, 25.0));
        assert!(down_right.backward && down_right.right);
        assert!(!down_right.forward && !down_right.left);

        // Inside the threshold nothing fires
        let slight = direction_flags(vec2(5.0, -5.0));
        assert_eq!(slight, MoveFlags::default());
    }
}
