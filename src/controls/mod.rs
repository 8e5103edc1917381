//! Movement controller
//!
//! One [`MovementState`] owns everything the camera needs: direction
//! flags, velocity, yaw/pitch and the continuous look rates. Input
//! handlers (pointer or touch) mutate it; [`MovementState::tick`] folds it
//! into position and orientation once per rendered frame. The tick does no
//! I/O and never reads the input layer, so the physics is testable on its
//! own.

mod pointer;
mod touch;

pub use pointer::PointerControls;
pub use touch::{direction_flags, stick_vector, TouchControls};

use macroquad::prelude::*;

use crate::config::{
    BOUNDARY_OFFSET, DECELERATION, EYE_HEIGHT, MOVE_SPEED, ROOM_HALF_SIZE, TOUCH_LOOK_SPEED,
};

/// Pitch stops just short of straight up/down to avoid gimbal flip
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// The four discrete direction flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn clear(&mut self) {
        *self = MoveFlags::default();
    }
}

/// Camera movement state, integrated every frame
#[derive(Debug, Clone)]
pub struct MovementState {
    pub flags: MoveFlags,
    pub position: Vec3,
    /// Sign convention: moving into the screen is negative Z, so held
    /// flags drive the velocity negative and the displacement negates it
    /// back along the facing vectors
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Continuous look rates in unit deflection (touch right stick);
    /// stays zero in pointer mode where the mouse writes yaw directly
    pub look_rate: Vec2,
}

impl MovementState {
    pub fn new() -> Self {
        Self {
            flags: MoveFlags::default(),
            position: vec3(0.0, EYE_HEIGHT, 0.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            look_rate: Vec2::ZERO,
        }
    }

    /// Advance one simulation tick by `delta` seconds.
    ///
    /// Decay, accelerate, displace, clamp to the room, then integrate the
    /// continuous look. A zero delta leaves the state untouched.
    pub fn tick(&mut self, delta: f32) {
        // Exponential velocity decay on the two horizontal axes
        self.velocity.x -= self.velocity.x * DECELERATION * delta;
        self.velocity.z -= self.velocity.z * DECELERATION * delta;

        // Unit direction from the active flags
        let mut direction = vec3(
            (self.flags.right as i32 - self.flags.left as i32) as f32,
            0.0,
            (self.flags.forward as i32 - self.flags.backward as i32) as f32,
        );
        if direction.length_squared() > 0.0 {
            direction = direction.normalize();
        }

        if self.flags.forward || self.flags.backward {
            self.velocity.z -= direction.z * MOVE_SPEED * delta;
        }
        if self.flags.left || self.flags.right {
            self.velocity.x -= direction.x * MOVE_SPEED * delta;
        }

        // Project velocity through the current yaw
        let forward = self.forward_xz();
        let right = self.right_xz();
        self.position -= forward * self.velocity.z * delta;
        self.position -= right * self.velocity.x * delta;

        // Hard rectangular boundary; axis clamp only, no sliding response
        let limit = ROOM_HALF_SIZE - BOUNDARY_OFFSET;
        self.position.x = self.position.x.clamp(-limit, limit);
        self.position.z = self.position.z.clamp(-limit, limit);

        // Continuous look integration (touch mode)
        self.yaw -= self.look_rate.x * TOUCH_LOOK_SPEED * delta;
        self.pitch -= self.look_rate.y * TOUCH_LOOK_SPEED * delta;
        self.clamp_pitch();
    }

    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Walk direction on the ground plane; yaw 0 faces the north wall (-Z)
    pub fn forward_xz(&self) -> Vec3 {
        vec3(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Strafe direction on the ground plane
    pub fn right_xz(&self) -> Vec3 {
        vec3(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Full view direction, yaw composed before pitch so roll stays zero
    pub fn view_dir(&self) -> Vec3 {
        vec3(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// The 3D camera for the current position and orientation
    pub fn camera(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.position + self.view_dir(),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new()
    }
}

/// The two mutually exclusive input strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Pointer,
    Touch,
}

/// Pick the control mode for this session.
///
/// There is no windowing query for touch capability, so detection is
/// compile-target based; desktop sessions can still latch into touch mode
/// if a touch event arrives before the first cursor grab (see
/// [`Controls::update`]).
pub fn detect_control_mode() -> ControlMode {
    if cfg!(any(target_os = "android", target_os = "ios")) {
        ControlMode::Touch
    } else {
        ControlMode::Pointer
    }
}

/// What the input layer reported this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlsOutput {
    /// The user clicked/tapped to pick the panel under the view center
    pub pick_requested: bool,
}

/// The active input strategy
pub enum Controls {
    Pointer(PointerControls),
    Touch(TouchControls),
}

impl Controls {
    pub fn new(mode: ControlMode) -> Self {
        match mode {
            ControlMode::Pointer => Controls::Pointer(PointerControls::new()),
            ControlMode::Touch => Controls::Touch(TouchControls::new()),
        }
    }

    /// Poll input and update the movement state. Called once per frame
    /// before the movement tick.
    pub fn update(&mut self, movement: &mut MovementState) -> ControlsOutput {
        // One-way latch: a touch before the first cursor grab means this
        // is a touch device that the compile-target detection missed
        if let Controls::Pointer(pointer) = self {
            if !pointer.has_locked() && !touches().is_empty() {
                println!("Touch input detected, switching to joystick controls");
                *self = Controls::Touch(TouchControls::new());
            }
        }

        match self {
            Controls::Pointer(pointer) => pointer.update(movement),
            Controls::Touch(touch) => touch.update(movement),
        }
    }

    /// Whether the pointer-mode instruction overlay should be visible
    pub fn wants_instructions(&self) -> bool {
        match self {
            Controls::Pointer(pointer) => !pointer.locked(),
            Controls::Touch(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn zero_delta_changes_nothing() {
        let mut state = MovementState::new();
        state.flags.forward = true;
        state.velocity = vec3(3.0, 0.0, -2.0);
        state.position = vec3(1.0, EYE_HEIGHT, 4.0);
        let before = state.clone();

        state.tick(0.0);

        assert_eq!(state.position, before.position);
        assert_eq!(state.velocity, before.velocity);
        assert_eq!(state.yaw, before.yaw);
    }

    #[test]
    fn held_forward_approaches_terminal_speed() {
        let mut state = MovementState::new();
        state.flags.forward = true;
        let dt = 1.0 / 60.0;

        for _ in 0..2000 {
            state.tick(dt);
        }

        // Steady state of v -= v*DECEL*dt + SPEED*dt is -SPEED/DECEL
        let terminal = MOVE_SPEED / DECELERATION;
        assert!(
            (state.velocity.z + terminal).abs() < 0.5,
            "velocity.z = {}, expected about {}",
            state.velocity.z,
            -terminal
        );

        // And the walls held the camera inside the room the whole time
        let limit = ROOM_HALF_SIZE - BOUNDARY_OFFSET;
        assert!(state.position.z >= -limit - EPS);
        assert!(state.position.x.abs() <= limit + EPS);
    }

    #[test]
    fn forward_moves_toward_the_faced_wall() {
        let mut state = MovementState::new();
        state.flags.forward = true;
        state.tick(0.1);
        // Yaw 0 faces the north wall at negative Z
        assert!(state.position.z < 0.0, "position.z = {}", state.position.z);
        assert!(state.position.x.abs() < EPS);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let mut straight = MovementState::new();
        straight.flags.forward = true;
        straight.tick(0.01);

        let mut diagonal = MovementState::new();
        diagonal.flags.forward = true;
        diagonal.flags.right = true;
        diagonal.tick(0.01);

        let straight_speed = straight.velocity.z.abs();
        let diagonal_axis_speed = diagonal.velocity.z.abs();
        assert!(
            (diagonal_axis_speed - straight_speed / 2f32.sqrt()).abs() < EPS,
            "axis speed {} vs straight {}",
            diagonal_axis_speed,
            straight_speed
        );
    }

    #[test]
    fn out_of_bounds_clamps_to_the_nearest_boundary() {
        let limit = ROOM_HALF_SIZE - BOUNDARY_OFFSET;

        let mut state = MovementState::new();
        state.position = vec3(50.0, EYE_HEIGHT, -50.0);
        state.tick(1.0 / 60.0);
        assert!((state.position.x - limit).abs() < EPS);
        assert!((state.position.z + limit).abs() < EPS);
    }

    #[test]
    fn pitch_clamps_short_of_vertical() {
        let mut state = MovementState::new();
        state.look_rate = vec2(0.0, -1.0); // push up hard
        for _ in 0..600 {
            state.tick(1.0 / 30.0);
        }
        assert!(state.pitch <= PITCH_LIMIT + EPS);
        assert!(state.pitch > 0.0);

        state.look_rate = vec2(0.0, 1.0);
        for _ in 0..1200 {
            state.tick(1.0 / 30.0);
        }
        assert!(state.pitch >= -PITCH_LIMIT - EPS);
    }

    #[test]
    fn yaw_rotates_the_walk_basis() {
        let mut state = MovementState::new();
        state.yaw = std::f32::consts::FRAC_PI_2; // quarter turn left, facing -X
        let forward = state.forward_xz();
        assert!((forward.x + 1.0).abs() < EPS);
        assert!(forward.z.abs() < EPS);

        state.flags.forward = true;
        state.tick(0.1);
        assert!(state.position.x < 0.0);
        assert!(state.position.z.abs() < EPS);
    }

    #[test]
    fn view_dir_is_unit_length() {
        let mut state = MovementState::new();
        state.yaw = 1.2;
        state.pitch = 0.7;
        assert!((state.view_dir().length() - 1.0).abs() < EPS);
    }
}
