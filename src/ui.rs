//! Screen-space overlays
//!
//! Loading indicator, inline fetch error, the pointer-mode instruction
//! card, the crosshair, and the touch joystick widgets. All drawn with
//! the default 2D camera after the 3D pass; which ones show is driven
//! entirely by app lifecycle state.

use macroquad::prelude::*;

use crate::config::{OVERLAY_SCRIM, STICK_BASE_RADIUS};
use crate::controls::TouchControls;

const TITLE_COLOR: Color = Color::new(0.95, 0.95, 0.95, 1.0);
const BODY_COLOR: Color = Color::new(0.75, 0.78, 0.82, 1.0);
const ERROR_COLOR: Color = Color::new(1.0, 0.45, 0.45, 1.0);
const STICK_RING: Color = Color::new(1.0, 1.0, 1.0, 0.25);
const STICK_KNOB: Color = Color::new(1.0, 1.0, 1.0, 0.55);

/// Shown while the startup fetches are in flight
pub fn draw_loading() {
    draw_centered(
        "Loading museum...",
        screen_width() / 2.0,
        screen_height() / 2.0,
        32.0,
        TITLE_COLOR,
    );
}

/// Inline error when the primary content fetch failed
pub fn draw_error(message: &str) {
    draw_centered(
        message,
        screen_width() / 2.0,
        screen_height() / 2.0 + 60.0,
        24.0,
        ERROR_COLOR,
    );
}

/// Full-screen instruction card while the cursor is not grabbed
pub fn draw_instructions() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY_SCRIM);

    let cx = screen_width() / 2.0;
    let mut y = screen_height() / 2.0 - 80.0;

    draw_centered("Click to explore", cx, y, 40.0, TITLE_COLOR);
    y += 60.0;
    for line in [
        "Move: WASD or arrow keys",
        "Look: mouse",
        "Open a project: click its panel",
        "Release the cursor: Esc",
    ] {
        draw_centered(line, cx, y, 24.0, BODY_COLOR);
        y += 34.0;
    }
}

/// Small dot marking the pick ray while the cursor is grabbed
pub fn draw_crosshair() {
    draw_circle(
        screen_width() / 2.0,
        screen_height() / 2.0,
        2.5,
        Color::new(1.0, 1.0, 1.0, 0.7),
    );
}

/// The two joystick widgets: base rings plus displaced knobs
pub fn draw_joysticks(touch: &TouchControls) {
    let (left_offset, right_offset) = touch.stick_offsets();
    let widgets = [
        (TouchControls::left_anchor(), left_offset),
        (TouchControls::right_anchor(), right_offset),
    ];

    for (anchor, offset) in widgets {
        draw_circle_lines(anchor.x, anchor.y, STICK_BASE_RADIUS, 2.0, STICK_RING);
        draw_circle(anchor.x + offset.x, anchor.y + offset.y, 24.0, STICK_KNOB);
    }
}

fn draw_centered(text: &str, cx: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, font_size, color);
}
