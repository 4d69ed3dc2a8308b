//! Playfield - a 2D game engine core
//!
//! Core modules:
//! - `math`: f64 vector and matrix value types
//! - `shape`: geometric primitives (circle, rect, line, polygon, arc, wedge)
//! - `collision`: shape-pair overlap tests and elastic collision response
//! - `tilemap`: grid storage, isometric projection, viewport-windowed iteration
//! - `camera`: follow/clamp/shake viewport
//! - `sprite`: tick-driven animation sequencing
//! - `gesture`: swipe and joystick geometry
//!
//! The crate draws nothing and owns no event loop: the host game loop feeds
//! positions and velocities in, reads query results out, and supplies the
//! per-tile draw callback.

pub mod camera;
pub mod collision;
pub mod error;
pub mod gesture;
pub mod math;
pub mod shape;
pub mod sprite;
pub mod tilemap;

pub use camera::Camera;
pub use error::Error;
pub use math::{Mat3, Mat4, Vec2, Vec3};
pub use shape::{Arc, Capsule, Circle, Line, Polygon, Rect, Shape, Wedge};
pub use tilemap::{TileIndex, TileMap};

/// Wrap an angle to [0, 2π) - the convention used by arc/wedge containment
#[inline]
pub fn wrap_angle(mut angle: f64) -> f64 {
    use std::f64::consts::TAU;
    angle %= TAU;
    if angle < 0.0 {
        angle += TAU;
    }
    angle
}
