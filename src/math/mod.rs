//! Vector and matrix value types
//!
//! Everything here is value-semantic: operations take copies and return new
//! values, never mutating an input in place.

mod mat3;
mod mat4;
mod vec2;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
