//! Geometric primitives consumed by the collision kernel
//!
//! Each shape is a struct carrying exactly its fields; [`Shape`] is the sum
//! type over all of them. Angular shapes normalize their angles to [0, 2π)
//! at construction so containment tests never re-normalize stored state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::Vec2;
use crate::wrap_angle;

/// A circle: center position and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub const fn new(pos: Vec2, r: f64) -> Self {
        Self { pos, r }
    }
}

/// An axis-aligned rectangle: top-left corner plus width/height.
/// Both dimensions are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub dim: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(pos: Vec2, dim: Vec2) -> Self {
        Self { pos, dim }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.dim.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.dim.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.dim * 0.5
    }

    /// Half extents (half width, half height)
    #[inline]
    pub fn half(&self) -> Vec2 {
        self.dim * 0.5
    }

    /// The four edges as line segments, clockwise from the top edge
    pub fn edges(&self) -> [Line; 4] {
        let tl = self.pos;
        let tr = Vec2::new(self.right(), self.top());
        let br = Vec2::new(self.right(), self.bottom());
        let bl = Vec2::new(self.left(), self.bottom());
        [
            Line::new(tl, tr),
            Line::new(tr, br),
            Line::new(br, bl),
            Line::new(bl, tl),
        ]
    }
}

/// A line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// end - start
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().length()
    }
}

/// A polygon: reference position plus vertices relative to it.
/// Storage only - the collision kernel does not test polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub pos: Vec2,
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(pos: Vec2, vertices: Vec<Vec2>) -> Self {
        Self { pos, vertices }
    }

    /// Vertices translated to world space
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(move |v| self.pos + *v)
    }
}

/// An annular arc band: everything between `inner_radius` and
/// `outer_radius` within the angular span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub pos: Vec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Start angle, normalized to [0, 2π)
    pub start_angle: f64,
    /// End angle, normalized to [0, 2π)
    pub end_angle: f64,
}

impl Arc {
    /// Angles are wrapped to [0, 2π). Fails when the radii are negative or
    /// inverted.
    pub fn new(
        pos: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if inner_radius < 0.0 || outer_radius < inner_radius {
            return Err(Error::validation(
                "arc radii",
                format!("inner {inner_radius} must satisfy 0 <= inner <= outer {outer_radius}"),
            ));
        }
        Ok(Self {
            pos,
            inner_radius,
            outer_radius,
            start_angle: wrap_angle(start_angle),
            end_angle: wrap_angle(end_angle),
        })
    }

    /// Check if a wrapped angle falls within the angular span, handling the
    /// span crossing the 0/2π seam.
    pub fn contains_angle(&self, theta: f64) -> bool {
        let theta = wrap_angle(theta);
        if self.start_angle <= self.end_angle {
            theta >= self.start_angle && theta <= self.end_angle
        } else {
            theta >= self.start_angle || theta <= self.end_angle
        }
    }
}

/// A filled circular sector ("pie slice") of radius `r`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub pos: Vec2,
    pub r: f64,
    /// Start angle, normalized to [0, 2π)
    pub start_angle: f64,
    /// End angle, normalized to [0, 2π)
    pub end_angle: f64,
}

impl Wedge {
    /// Angles are wrapped to [0, 2π). Fails on a negative radius.
    pub fn new(pos: Vec2, r: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if r < 0.0 {
            return Err(Error::validation(
                "wedge radius",
                format!("radius {r} must be non-negative"),
            ));
        }
        Ok(Self {
            pos,
            r,
            start_angle: wrap_angle(start_angle),
            end_angle: wrap_angle(end_angle),
        })
    }

    pub fn contains_angle(&self, theta: f64) -> bool {
        let theta = wrap_angle(theta);
        if self.start_angle <= self.end_angle {
            theta >= self.start_angle && theta <= self.end_angle
        } else {
            theta >= self.start_angle || theta <= self.end_angle
        }
    }
}

/// Sum type over every primitive the engine understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Line(Line),
    Polygon(Polygon),
    Arc(Arc),
    Wedge(Wedge),
}

/// A wall capsule: a chain of overlapping circles along a segment plus the
/// quad that connects the two side edges.
///
/// The quad's winding is fixed: it runs along the left perpendicular from
/// start to end, then back along the right perpendicular. No orientation
/// is ever chosen at random; flipping the segment flips the winding and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    pub circles: Vec<Circle>,
    pub quad: Polygon,
}

impl Capsule {
    pub fn new(start: Vec2, end: Vec2, radius: f64) -> Self {
        let axis = end - start;
        let length = axis.length();
        let dir = axis.normalize_or_zero();
        let (left, right) = dir.perpendiculars();

        // Circles spaced at most one radius apart so neighbours overlap
        let steps = if radius > 0.0 {
            (length / radius).ceil() as usize
        } else {
            0
        };
        let mut circles = Vec::with_capacity(steps + 1);
        circles.push(Circle::new(start, radius));
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            circles.push(Circle::new(start.add_scaled(axis, t), radius));
        }

        let quad = Polygon::new(
            start,
            vec![
                left * radius,
                axis + left * radius,
                axis + right * radius,
                right * radius,
            ],
        );

        Self { circles, quad }
    }
}
