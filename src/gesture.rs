//! Gesture geometry: swipe classification and virtual-joystick resolution
//!
//! Pure math over touch positions; listening for the touches is the host's
//! job. Coordinates are screen-space, y growing downward.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// The four cardinal swipe directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Classify a start→end touch pair as a swipe along its dominant axis.
/// Returns `None` for movements shorter than `min_distance`. On an exact
/// diagonal the horizontal axis wins.
pub fn classify_swipe(start: Vec2, end: Vec2, min_distance: f64) -> Option<SwipeDirection> {
    let delta = end - start;
    if delta.length_squared() < min_distance * min_distance {
        return None;
    }
    if delta.x.abs() >= delta.y.abs() {
        Some(if delta.x >= 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else {
        Some(if delta.y >= 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        })
    }
}

/// A resolved joystick sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickRead {
    /// Touch offset from the stick center, clamped to the stick radius
    pub offset: Vec2,
    /// Unit direction of the deflection, zero when the touch is centered
    pub direction: Vec2,
    /// Deflection strength in [0, 1]
    pub magnitude: f64,
}

/// Resolve a touch position against a virtual joystick at `center` with the
/// given `radius`. The offset is clamped to the stick's rim; a non-positive
/// radius reads as a centered stick.
pub fn resolve_joystick(center: Vec2, touch: Vec2, radius: f64) -> JoystickRead {
    if radius <= 0.0 {
        return JoystickRead {
            offset: Vec2::ZERO,
            direction: Vec2::ZERO,
            magnitude: 0.0,
        };
    }

    let raw = touch - center;
    let dist = raw.length();
    let direction = raw.normalize_or_zero();
    let magnitude = (dist / radius).min(1.0);
    let offset = if dist > radius { direction * radius } else { raw };

    JoystickRead {
        offset,
        direction,
        magnitude,
    }
}
