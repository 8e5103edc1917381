//! The room shell
//!
//! Floor, ceiling, four walls and baseboards as flat-colored slabs.
//! Everything is static geometry rebuilt from constants each frame;
//! there is no lighting rig, the palette carries the museum mood.

use macroquad::prelude::*;

use crate::config::{
    BASEBOARD, CEILING, FLOOR, ROOM_HALF_SIZE, WALLS, WALL_HEIGHT, WALL_THICKNESS,
};

/// Baseboard height along the bottom of each wall
const BASEBOARD_HEIGHT: f32 = 0.3;

/// Baseboard depth; slightly prouder than the wall so it reads as trim
const BASEBOARD_DEPTH: f32 = 0.12;

/// Draw the room interior. Call between `set_camera` and the panel pass.
pub fn draw_room() {
    let size = ROOM_HALF_SIZE * 2.0;
    let half = ROOM_HALF_SIZE;

    // Floor and ceiling slabs
    draw_cube(
        vec3(0.0, -WALL_THICKNESS / 2.0, 0.0),
        vec3(size, WALL_THICKNESS, size),
        None,
        FLOOR,
    );
    draw_cube(
        vec3(0.0, WALL_HEIGHT + WALL_THICKNESS / 2.0, 0.0),
        vec3(size, WALL_THICKNESS, size),
        None,
        CEILING,
    );

    // North/south walls run along X, east/west along Z
    let wall_y = WALL_HEIGHT / 2.0;
    draw_cube(
        vec3(0.0, wall_y, -half),
        vec3(size, WALL_HEIGHT, WALL_THICKNESS),
        None,
        WALLS,
    );
    draw_cube(
        vec3(0.0, wall_y, half),
        vec3(size, WALL_HEIGHT, WALL_THICKNESS),
        None,
        WALLS,
    );
    draw_cube(
        vec3(half, wall_y, 0.0),
        vec3(WALL_THICKNESS, WALL_HEIGHT, size),
        None,
        WALLS,
    );
    draw_cube(
        vec3(-half, wall_y, 0.0),
        vec3(WALL_THICKNESS, WALL_HEIGHT, size),
        None,
        WALLS,
    );

    // Baseboards, nudged into the room so they sit proud of the walls
    let base_y = BASEBOARD_HEIGHT / 2.0;
    let inset = BASEBOARD_DEPTH / 2.0;
    draw_cube(
        vec3(0.0, base_y, -half + inset),
        vec3(size, BASEBOARD_HEIGHT, BASEBOARD_DEPTH),
        None,
        BASEBOARD,
    );
    draw_cube(
        vec3(0.0, base_y, half - inset),
        vec3(size, BASEBOARD_HEIGHT, BASEBOARD_DEPTH),
        None,
        BASEBOARD,
    );
    draw_cube(
        vec3(half - inset, base_y, 0.0),
        vec3(BASEBOARD_DEPTH, BASEBOARD_HEIGHT, size),
        None,
        BASEBOARD,
    );
    draw_cube(
        vec3(-half + inset, base_y, 0.0),
        vec3(BASEBOARD_DEPTH, BASEBOARD_HEIGHT, size),
        None,
        BASEBOARD,
    );
}
