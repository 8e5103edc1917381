//! Pointer-mode controls
//!
//! Desktop strategy: click grabs the cursor, WASD/arrow keys drive the
//! four direction flags, and mouse travel (tracked as a delta against the
//! last frame's position) steers yaw and pitch. Escape releases the
//! cursor and kills horizontal velocity so the camera doesn't coast while
//! the instruction overlay is up.

use macroquad::prelude::*;

use super::{ControlsOutput, MovementState};
use crate::config::LOOK_SENSITIVITY;

pub struct PointerControls {
    locked: bool,
    /// The session has grabbed the cursor at least once; after that the
    /// touch-mode latch stays off for good
    ever_locked: bool,
    last_mouse: (f32, f32),
    /// The grab teleports the OS cursor; skip one frame of look so the
    /// jump doesn't whip the camera
    skip_look_frame: bool,
}

impl PointerControls {
    pub fn new() -> Self {
        Self {
            locked: false,
            ever_locked: false,
            last_mouse: mouse_position(),
            skip_look_frame: false,
        }
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn has_locked(&self) -> bool {
        self.ever_locked
    }

    pub fn update(&mut self, movement: &mut MovementState) -> ControlsOutput {
        if !self.locked {
            movement.flags.clear();
            if is_mouse_button_pressed(MouseButton::Left) {
                self.locked = true;
                self.ever_locked = true;
                self.skip_look_frame = true;
                set_cursor_grab(true);
                show_mouse(false);
            }
            // The locking click never doubles as a pick
            return ControlsOutput::default();
        }

        if is_key_pressed(KeyCode::Escape) {
            self.locked = false;
            set_cursor_grab(false);
            show_mouse(true);
            movement.flags.clear();
            movement.velocity.x = 0.0;
            movement.velocity.z = 0.0;
            return ControlsOutput::default();
        }

        movement.flags.forward = is_key_down(KeyCode::W) || is_key_down(KeyCode::Up);
        movement.flags.backward = is_key_down(KeyCode::S) || is_key_down(KeyCode::Down);
        movement.flags.left = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        movement.flags.right = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);

        let mouse = mouse_position();
        if self.skip_look_frame {
            self.skip_look_frame = false;
        } else {
            let dx = mouse.0 - self.last_mouse.0;
            let dy = mouse.1 - self.last_mouse.1;
            movement.yaw -= dx * LOOK_SENSITIVITY;
            movement.pitch -= dy * LOOK_SENSITIVITY;
            movement.clamp_pitch();
        }
        self.last_mouse = mouse;

        ControlsOutput {
            pick_requested: is_mouse_button_pressed(MouseButton::Left),
        }
    }
}

impl Default for PointerControls {
    fn default() -> Self {
        Self::new()
    }
}
