//! Panel picking
//!
//! Casts a ray from the camera through the exact view center and finds
//! the nearest panel whose canvas rectangle it crosses. Pure geometry;
//! the click side effects (viewpoint snapshot, opening the URL) live with
//! the app.

use macroquad::prelude::*;

use crate::config::{PANEL_HEIGHT, PANEL_SURFACE_LIFT, PANEL_WIDTH};
use crate::gallery::WallSlot;

/// A 3D ray with origin and normalized direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance t along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Distance along the ray to a plane, or None when the ray runs parallel
/// to it or the intersection lies behind the origin
pub fn ray_plane_intersection(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() < 1e-4 {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Index of the nearest slot whose canvas rectangle the view ray crosses.
///
/// Each slot's canvas is a `PANEL_WIDTH × PANEL_HEIGHT` rectangle lifted
/// off the wall along its normal; the hit point is bounds-checked in the
/// panel's local right/up frame.
pub fn pick_slot(origin: Vec3, view_dir: Vec3, slots: &[WallSlot]) -> Option<usize> {
    let ray = Ray::new(origin, view_dir);
    let mut nearest: Option<(usize, f32)> = None;

    for (index, slot) in slots.iter().enumerate() {
        let normal = slot.wall.normal();
        let surface = slot.position + normal * PANEL_SURFACE_LIFT;

        let Some(t) = ray_plane_intersection(&ray, surface, normal) else {
            continue;
        };

        let hit = ray.at(t);
        let offset = hit - surface;
        let right = vec3(slot.rotation.cos(), 0.0, -slot.rotation.sin());
        let u = offset.dot(right);
        let v = offset.y;
        if u.abs() > PANEL_WIDTH / 2.0 || v.abs() > PANEL_HEIGHT / 2.0 {
            continue;
        }

        match nearest {
            Some((_, best)) if best <= t => {}
            _ => nearest = Some((index, t)),
        }
    }

    nearest.map(|(index, _)| index)
}
