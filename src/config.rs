//! Museum tuning constants
//!
//! Room dimensions, panel sizing, movement physics, content endpoints and
//! the color palette. Everything here is a plain constant so the rest of
//! the crate never reaches for ambient configuration state.

use macroquad::prelude::Color;

// ─────────────────────────────────────────────────────────────────────────────
// Room
// ─────────────────────────────────────────────────────────────────────────────

/// Half the room side length; walls sit at ±ROOM_HALF_SIZE on X and Z
pub const ROOM_HALF_SIZE: f32 = 15.0;

/// Wall height (floor at y=0, ceiling at y=WALL_HEIGHT)
pub const WALL_HEIGHT: f32 = 5.0;

/// Wall slab thickness
pub const WALL_THICKNESS: f32 = 0.1;

/// Camera height above the floor
pub const EYE_HEIGHT: f32 = 1.7;

// ─────────────────────────────────────────────────────────────────────────────
// Panels
// ─────────────────────────────────────────────────────────────────────────────

/// Panel canvas width in world units
pub const PANEL_WIDTH: f32 = 2.5;

/// Panel canvas height in world units
pub const PANEL_HEIGHT: f32 = 2.0;

/// Height of the panel centerline above the floor
pub const PANEL_ELEVATION: f32 = 1.5;

/// Distance panels float off their wall
pub const PANEL_WALL_OFFSET: f32 = 0.15;

/// Extra lift of the canvas out of its frame, along the wall normal
pub const PANEL_SURFACE_LIFT: f32 = 0.06;

/// How far the frame extends past the canvas on each side
pub const FRAME_MARGIN: f32 = 0.2;

/// Frame depth per panel kind
pub const FRAME_THICKNESS_REPO: f32 = 0.10;
pub const FRAME_THICKNESS_TRACK: f32 = 0.08;
pub const FRAME_THICKNESS_INFO: f32 = 0.12;

/// Offscreen canvas resolution panels are painted at
pub const CANVAS_WIDTH: u32 = 512;
pub const CANVAS_HEIGHT: u32 = 341;

/// Album art square side on the track canvas, in canvas pixels
pub const ALBUM_ART_SIZE: f32 = 200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Movement
// ─────────────────────────────────────────────────────────────────────────────

/// Acceleration applied while a direction flag is held
pub const MOVE_SPEED: f32 = 120.0;

/// Exponential velocity decay rate
pub const DECELERATION: f32 = 10.0;

/// Minimum distance the camera keeps from the walls
pub const BOUNDARY_OFFSET: f32 = 1.0;

/// Pointer-mode look sensitivity, radians per pixel of mouse travel
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Touch-mode look speed, radians per second at full stick deflection
pub const TOUCH_LOOK_SPEED: f32 = 1.3;

/// Left-stick displacement (px) past which a direction flag turns on
pub const STICK_FLAG_THRESHOLD: f32 = 10.0;

/// Right-stick displacement (px) below which look input is ignored
pub const STICK_DEAD_ZONE: f32 = 5.0;

/// Right-stick displacement (px) that counts as full deflection
pub const STICK_MAX_RADIUS: f32 = 40.0;

/// On-screen joystick base circle radius (px)
pub const STICK_BASE_RADIUS: f32 = 60.0;

/// Joystick anchor inset from the bottom screen corners (px)
pub const STICK_MARGIN: f32 = 110.0;

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

/// GitHub account whose repositories fill the walls
pub const GITHUB_USER: &str = "davidyen1124";

/// Fixed page size for the repository listing; no pagination beyond it
pub const REPOS_PER_PAGE: u32 = 20;

/// Recently-played track feed
pub const TRACK_FEED_URL: &str = "https://spotify.daviddennislinda.com/api/recently-played";

/// Where the track panel lands in the merged content list
pub const TRACK_INSERT_INDEX: usize = 1;

/// Cap on downloaded album art, bytes
pub const MAX_ART_BYTES: u64 = 4 * 1024 * 1024;

/// Cap on either JSON response body, bytes
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Repository listing endpoint for a user
pub fn repos_url() -> String {
    format!(
        "https://api.github.com/users/{}/repos?sort=updated&per_page={}",
        GITHUB_USER, REPOS_PER_PAGE
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Fog-less stand-in for the museum atmosphere (0x1a2c42)
pub const BACKGROUND: Color = Color::new(0.102, 0.173, 0.259, 1.0);
/// Floor slab (0x1e2d3d)
pub const FLOOR: Color = Color::new(0.118, 0.176, 0.239, 1.0);
/// Ceiling slab (0x213040)
pub const CEILING: Color = Color::new(0.129, 0.188, 0.251, 1.0);
/// Wall slabs (0x2c425e)
pub const WALLS: Color = Color::new(0.173, 0.259, 0.369, 1.0);
/// Baseboards (0x222222)
pub const BASEBOARD: Color = Color::new(0.133, 0.133, 0.133, 1.0);
/// Repository panel frame (0x7e6338)
pub const FRAME_REPO: Color = Color::new(0.494, 0.388, 0.220, 1.0);
/// Track panel frame (0x1db954)
pub const FRAME_TRACK: Color = Color::new(0.114, 0.725, 0.329, 1.0);
/// Info panel frame (0x3f6e74)
pub const FRAME_INFO: Color = Color::new(0.247, 0.431, 0.455, 1.0);
/// Canvas text (#cccccc)
pub const CANVAS_TEXT: Color = Color::new(0.8, 0.8, 0.8, 1.0);
/// Canvas background (#1a1a1a)
pub const CANVAS_BACKGROUND: Color = Color::new(0.102, 0.102, 0.102, 1.0);
/// Placeholder square shown where album art will land
pub const ART_PLACEHOLDER: Color = Color::new(0.2, 0.2, 0.2, 1.0);
/// Overlay scrim behind the instruction text
pub const OVERLAY_SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Language dot color, GitHub's linguist palette for the common cases
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::new(0.945, 0.878, 0.353, 1.0),
        "Python" => Color::new(0.208, 0.447, 0.647, 1.0),
        "Java" => Color::new(0.690, 0.447, 0.098, 1.0),
        "Ruby" => Color::new(0.439, 0.082, 0.086, 1.0),
        "PHP" => Color::new(0.310, 0.365, 0.584, 1.0),
        "TypeScript" => Color::new(0.169, 0.455, 0.537, 1.0),
        "C#" => Color::new(0.090, 0.525, 0.000, 1.0),
        "Go" => Color::new(0.000, 0.678, 0.847, 1.0),
        "C++" => Color::new(0.953, 0.294, 0.490, 1.0),
        "C" => Color::new(0.333, 0.333, 0.333, 1.0),
        "Rust" => Color::new(0.870, 0.518, 0.333, 1.0),
        _ => Color::new(0.533, 0.533, 0.533, 1.0),
    }
}
