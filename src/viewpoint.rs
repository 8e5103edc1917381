//! Persisted last viewpoint
//!
//! The one piece of cross-session state: right before a pick opens a
//! panel's URL, the camera position and orientation are snapshotted to a
//! RON file in the platform config directory. The next launch restores
//! it, so coming back from the opened link drops the visitor where they
//! were standing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{BOUNDARY_OFFSET, EYE_HEIGHT, ROOM_HALF_SIZE};
use crate::controls::MovementState;

/// A saved camera pose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Error type for viewpoint persistence
#[derive(Debug)]
pub enum ViewpointError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for ViewpointError {
    fn from(e: std::io::Error) -> Self {
        ViewpointError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ViewpointError {
    fn from(e: ron::error::SpannedError) -> Self {
        ViewpointError::Parse(e)
    }
}

impl From<ron::Error> for ViewpointError {
    fn from(e: ron::Error) -> Self {
        ViewpointError::Serialize(e)
    }
}

impl std::fmt::Display for ViewpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewpointError::Io(e) => write!(f, "IO error: {}", e),
            ViewpointError::Parse(e) => write!(f, "Parse error: {}", e),
            ViewpointError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl Viewpoint {
    pub fn from_movement(movement: &MovementState) -> Self {
        Self {
            x: movement.position.x,
            y: movement.position.y,
            z: movement.position.z,
            yaw: movement.yaw,
            pitch: movement.pitch,
        }
    }

    /// Restore this pose onto a movement state
    pub fn apply(&self, movement: &mut MovementState) {
        movement.position.x = self.x;
        movement.position.y = self.y;
        movement.position.z = self.z;
        movement.yaw = self.yaw;
        movement.pitch = self.pitch;
        movement.clamp_pitch();
    }

    /// Reject garbage from a tampered or stale file: everything must be
    /// finite and the position is clamped back inside the room
    pub fn sanitized(mut self) -> Option<Self> {
        let values = [self.x, self.y, self.z, self.yaw, self.pitch];
        if values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let limit = ROOM_HALF_SIZE - BOUNDARY_OFFSET;
        self.x = self.x.clamp(-limit, limit);
        self.z = self.z.clamp(-limit, limit);
        self.y = EYE_HEIGHT;
        Some(self)
    }
}

/// Where the viewpoint file lives
fn viewpoint_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repo-museum")
        .join("viewpoint.ron")
}

/// Save the last viewpoint; failures are reported, not fatal
pub fn save(viewpoint: &Viewpoint) -> Result<(), ViewpointError> {
    save_to(&viewpoint_path(), viewpoint)
}

/// Load and sanitize the last viewpoint, if any was ever saved
pub fn load() -> Option<Viewpoint> {
    load_from(&viewpoint_path()).ok().and_then(Viewpoint::sanitized)
}

fn save_to(path: &Path, viewpoint: &Viewpoint) -> Result<(), ViewpointError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = ron::to_string(viewpoint)?;
    fs::write(path, contents)?;
    Ok(())
}

fn load_from(path: &Path) -> Result<Viewpoint, ViewpointError> {
    let contents = fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewpoint.ron");

        let saved = Viewpoint {
            x: 3.5,
            y: EYE_HEIGHT,
            z: -7.25,
            yaw: 1.25,
            pitch: -0.3,
        };
        save_to(&path, &saved).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.ron"));
        assert!(matches!(result, Err(ViewpointError::Io(_))));
    }

    #[test]
    fn garbage_contents_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewpoint.ron");
        std::fs::write(&path, "not ron at all").unwrap();
        assert!(matches!(load_from(&path), Err(ViewpointError::Parse(_))));
    }

    #[test]
    fn sanitize_clamps_back_into_the_room() {
        let vp = Viewpoint {
            x: 100.0,
            y: 0.0,
            z: -100.0,
            yaw: 0.5,
            pitch: 0.0,
        }
        .sanitized()
        .unwrap();

        let limit = ROOM_HALF_SIZE - BOUNDARY_OFFSET;
        assert_eq!(vp.x, limit);
        assert_eq!(vp.z, -limit);
        assert_eq!(vp.y, EYE_HEIGHT);
    }

    #[test]
    fn sanitize_rejects_non_finite_values() {
        let vp = Viewpoint {
            x: f32::NAN,
            y: EYE_HEIGHT,
            z: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        assert!(vp.sanitized().is_none());
    }

    #[test]
    fn apply_restores_the_pose() {
        let mut movement = MovementState::new();
        let vp = Viewpoint {
            x: 2.0,
            y: EYE_HEIGHT,
            z: 3.0,
            yaw: 0.7,
            pitch: 5.0, // past the clamp; apply must rein it in
        };
        vp.apply(&mut movement);

        assert_eq!(movement.position.x, 2.0);
        assert_eq!(movement.position.z, 3.0);
        assert_eq!(movement.yaw, 0.7);
        assert!(movement.pitch < std::f32::consts::FRAC_PI_2);
    }
}
