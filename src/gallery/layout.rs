//! Wall layout engine
//!
//! Distributes the merged content list across the four walls and turns
//! each (wall, position-on-wall) pair into a 3D placement.
//!
//! Distribution policy: equal remainder. Every wall gets
//! `total / 4` panels and the first `total % 4` walls get one extra, so
//! the full list is always placed (nothing is ever trimmed) and per-wall
//! counts differ by at most one. Within a wall the gaps are uniform:
//! `gap = (wall_length - count * panel_width) / (count + 1)`, and the
//! i-th panel's centerline sits at
//! `wall_start + gap + panel_width / 2 + i * (panel_width + gap)`,
//! which keeps the arrangement symmetric about the wall's midpoint.

use macroquad::prelude::{vec3, Vec3};

use crate::config::{PANEL_ELEVATION, PANEL_WALL_OFFSET, PANEL_WIDTH, ROOM_HALF_SIZE};

/// Number of walls panels are spread across
pub const WALL_COUNT: usize = 4;

/// The four walls, in fill order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    pub const ALL: [Wall; WALL_COUNT] = [Wall::North, Wall::East, Wall::South, Wall::West];

    /// Yaw of a panel hung on this wall, facing into the room
    pub fn rotation(&self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Wall::North => 0.0,
            Wall::East => -FRAC_PI_2,
            Wall::South => PI,
            Wall::West => FRAC_PI_2,
        }
    }

    /// Unit normal pointing off the wall into the room
    pub fn normal(&self) -> Vec3 {
        let rotation = self.rotation();
        vec3(rotation.sin(), 0.0, rotation.cos())
    }
}

/// One computed placement: wall, 3D position and facing rotation
#[derive(Debug, Clone, Copy)]
pub struct WallSlot {
    pub wall: Wall,
    pub position: Vec3,
    pub rotation: f32,
}

/// Geometry inputs for the layout; `Default` pulls the museum config
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Half the room side; walls span -room_half..room_half
    pub room_half: f32,
    pub panel_width: f32,
    /// Distance the panel centerline floats off its wall
    pub wall_offset: f32,
    /// Panel centerline height
    pub elevation: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            room_half: ROOM_HALF_SIZE,
            panel_width: PANEL_WIDTH,
            wall_offset: PANEL_WALL_OFFSET,
            elevation: PANEL_ELEVATION,
        }
    }
}

/// Per-wall panel counts under the equal-remainder policy.
///
/// The sum always equals `total`; counts differ by at most one and the
/// extra panels land on the earliest walls.
pub fn per_wall_counts(total: usize) -> [usize; WALL_COUNT] {
    let base = total / WALL_COUNT;
    let remainder = total % WALL_COUNT;
    let mut counts = [base; WALL_COUNT];
    for count in counts.iter_mut().take(remainder) {
        *count += 1;
    }
    counts
}

/// Evenly spaced panel centerlines along one wall axis.
///
/// Positions run from the wall's start corner (-room_half) toward its end
/// corner and are symmetric about the wall midpoint.
pub fn wall_centerlines(count: usize, room_half: f32, panel_width: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let wall_length = room_half * 2.0;
    let gap = (wall_length - panel_width * count as f32) / (count as f32 + 1.0);
    (0..count)
        .map(|i| -room_half + gap + panel_width / 2.0 + i as f32 * (panel_width + gap))
        .collect()
}

/// Compute a placement for every one of `total` items.
///
/// Slots come back in fill order (north wall first, then east, south,
/// west; left-to-right along each wall), so zipping with the content list
/// preserves its ordering. Zero items yields an empty result.
pub fn layout_slots(total: usize, params: &LayoutParams) -> Vec<WallSlot> {
    let counts = per_wall_counts(total);
    let mut slots = Vec::with_capacity(total);

    for (wall, &count) in Wall::ALL.iter().zip(counts.iter()) {
        let near = -params.room_half + params.wall_offset;
        let far = params.room_half - params.wall_offset;

        for along in wall_centerlines(count, params.room_half, params.panel_width) {
            let position = match wall {
                Wall::North => vec3(along, params.elevation, near),
                Wall::East => vec3(far, params.elevation, along),
                Wall::South => vec3(along, params.elevation, far),
                Wall::West => vec3(near, params.elevation, along),
            };
            slots.push(WallSlot {
                wall: *wall,
                position,
                rotation: wall.rotation(),
            });
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn counts_sum_to_total_for_any_n() {
        for total in 0..40 {
            let counts = per_wall_counts(total);
            assert_eq!(counts.iter().sum::<usize>(), total, "total {}", total);
        }
    }

    #[test]
    fn counts_differ_by_at_most_one() {
        for total in 0..40 {
            let counts = per_wall_counts(total);
            let max = counts.iter().max().copied().unwrap_or(0);
            let min = counts.iter().min().copied().unwrap_or(0);
            assert!(max - min <= 1, "total {} gave {:?}", total, counts);
        }
    }

    #[test]
    fn remainder_lands_on_the_earliest_walls() {
        assert_eq!(per_wall_counts(6), [2, 2, 1, 1]);
        assert_eq!(per_wall_counts(9), [3, 2, 2, 2]);
    }

    #[test]
    fn centerlines_increase_and_stay_symmetric() {
        for count in 1..8 {
            let positions = wall_centerlines(count, 15.0, 2.5);
            assert_eq!(positions.len(), count);

            for pair in positions.windows(2) {
                assert!(pair[0] < pair[1], "not increasing: {:?}", positions);
            }

            // Wall midpoint is 0, so the first and last centerlines mirror
            let first = positions[0];
            let last = positions[count - 1];
            assert!(
                (first + last).abs() < EPS,
                "count {} not symmetric: {:?}",
                count,
                positions
            );
        }
    }

    #[test]
    fn single_item_is_centered() {
        let positions = wall_centerlines(1, 15.0, 2.5);
        assert!((positions[0]).abs() < EPS);

        let slots = layout_slots(1, &LayoutParams::default());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].wall, Wall::North);
        assert!(slots[0].position.x.abs() < EPS);
    }

    #[test]
    fn zero_items_build_nothing() {
        assert!(layout_slots(0, &LayoutParams::default()).is_empty());
    }

    #[test]
    fn eight_items_fill_two_per_wall() {
        let params = LayoutParams::default();
        let slots = layout_slots(8, &params);
        assert_eq!(slots.len(), 8);

        for (i, wall) in Wall::ALL.iter().enumerate() {
            let on_wall: Vec<_> = slots.iter().filter(|s| s.wall == *wall).collect();
            assert_eq!(on_wall.len(), 2, "wall {} ({:?})", i, wall);
        }

        // First slot on the north wall: x = -half + gap + width/2
        let gap = (30.0 - 2.0 * 2.5) / 3.0;
        let expected_x = -15.0 + gap + 2.5 / 2.0;
        assert!((slots[0].position.x - expected_x).abs() < EPS);
        assert!((slots[0].position.z - (-15.0 + params.wall_offset)).abs() < EPS);
        assert!((slots[0].rotation).abs() < EPS);
    }

    #[test]
    fn slots_sit_on_their_walls_facing_inward() {
        let params = LayoutParams::default();
        let slots = layout_slots(12, &params);
        let near = -params.room_half + params.wall_offset;
        let far = params.room_half - params.wall_offset;

        for slot in &slots {
            match slot.wall {
                Wall::North => assert!((slot.position.z - near).abs() < EPS),
                Wall::East => assert!((slot.position.x - far).abs() < EPS),
                Wall::South => assert!((slot.position.z - far).abs() < EPS),
                Wall::West => assert!((slot.position.x - near).abs() < EPS),
            }
            assert!((slot.position.y - params.elevation).abs() < EPS);

            // Normal points back toward the room center
            let normal = slot.wall.normal();
            let to_center = -slot.position;
            assert!(
                normal.x * to_center.x + normal.z * to_center.z > 0.0,
                "{:?} normal points out of the room",
                slot.wall
            );
        }
    }
}
