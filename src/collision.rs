//! Pairwise collision and containment tests, plus elastic response
//!
//! Every predicate is a stateless pure function. Geometric non-intersection
//! is an ordinary `false`/`None`, never an error; parallel segments and
//! zero-length projections have defined results.
//!
//! Distance comparisons use squared distance against squared radius
//! throughout, so no test pays for a square root.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::shape::{Arc, Circle, Line, Rect, Wedge};

/// Two circles overlap when their centers are within the sum of radii.
/// Touching exactly counts as overlapping.
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let reach = a.r + b.r;
    a.pos.distance_squared(b.pos) <= reach * reach
}

/// Axis-aligned rectangle overlap, open-interval on every edge: rectangles
/// that merely touch do not overlap.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Circle-vs-rect via the clamped-distance test. When the circle center sits
/// inside the rect's half-extent band on either axis the overlap is decided
/// without the corner check.
pub fn circle_rect_overlap(c: &Circle, r: &Rect) -> bool {
    let center = r.center();
    let half = r.half();
    let dx = (c.pos.x - center.x).abs();
    let dy = (c.pos.y - center.y).abs();

    if dx > half.x + c.r || dy > half.y + c.r {
        return false;
    }
    if dx <= half.x || dy <= half.y {
        return true;
    }

    // Corner region: squared distance from the nearest corner
    let corner = Vec2::new(dx - half.x, dy - half.y);
    corner.length_squared() <= c.r * c.r
}

/// Parametric segment-segment test. Parallel segments (zero cross product)
/// never intersect, including the collinear-overlap case.
pub fn segments_intersect(a: &Line, b: &Line) -> bool {
    segment_intersection(a, b).is_some()
}

/// Like [`segments_intersect`], additionally returning the intersection
/// point, evaluated at the parameter along `a`.
pub fn segment_intersection(a: &Line, b: &Line) -> Option<Vec2> {
    let d1 = a.delta();
    let d2 = b.delta();
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom == 0.0 {
        return None;
    }

    let diff = b.start - a.start;
    let u1 = (diff.x * d2.y - diff.y * d2.x) / denom;
    let u2 = (diff.x * d1.y - diff.y * d1.x) / denom;

    if (0.0..=1.0).contains(&u1) && (0.0..=1.0).contains(&u2) {
        Some(a.start.add_scaled(d1, u1))
    } else {
        None
    }
}

/// Project the circle center onto the segment, clamp the parameter to
/// [0, 1], and compare the clamped point against the radius. A zero-length
/// segment degrades to a point-vs-circle test.
pub fn segment_circle_overlap(l: &Line, c: &Circle) -> bool {
    let d = l.delta();
    let len_sq = d.length_squared();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((c.pos - l.start).dot(d) / len_sq).clamp(0.0, 1.0)
    };
    let closest = l.start.add_scaled(d, t);
    closest.distance_squared(c.pos) <= c.r * c.r
}

/// True when the segment crosses any of the rect's four edges. A segment
/// entirely inside the rect crosses nothing and reports false.
pub fn segment_rect_overlap(l: &Line, r: &Rect) -> bool {
    r.edges().iter().any(|edge| segments_intersect(l, edge))
}

/// Point containment in a circle, boundary inclusive.
#[inline]
pub fn point_in_circle(p: Vec2, c: &Circle) -> bool {
    p.distance_squared(c.pos) <= c.r * c.r
}

/// Strict interior test: a point on the boundary is not inside.
#[inline]
pub fn point_in_rect(p: Vec2, r: &Rect) -> bool {
    p.x > r.left() && p.x < r.right() && p.y > r.top() && p.y < r.bottom()
}

/// Point containment in an annular arc band: radial band inclusive on both
/// edges, angle wrapped to [0, 2π) before the span test.
pub fn point_in_arc(p: Vec2, arc: &Arc) -> bool {
    let d = p - arc.pos;
    let dist_sq = d.length_squared();
    dist_sq >= arc.inner_radius * arc.inner_radius
        && dist_sq <= arc.outer_radius * arc.outer_radius
        && arc.contains_angle(d.angle())
}

/// Point containment in a wedge (filled sector), radius inclusive.
pub fn point_in_wedge(p: Vec2, w: &Wedge) -> bool {
    let d = p - w.pos;
    d.length_squared() <= w.r * w.r && w.contains_angle(d.angle())
}

/// A point body with velocity and mass, as supplied by the host each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f64,
}

impl Body {
    pub const fn new(pos: Vec2, vel: Vec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }
}

/// Resolve a two-body elastic collision along the line of centers.
///
/// Both velocities are rotated into the center-to-center axis, the 1D
/// elastic formula is applied to the axial component, the perpendicular
/// component is left alone, and the results are rotated back. Only the
/// velocities change. Bodies moving apart (`(pos_b - pos_a) · (vel_a -
/// vel_b) < 0`) are left untouched so a pair cannot re-collide while
/// separating.
///
/// No restitution coefficient and no angular momentum. Two zero-mass bodies
/// divide by zero and come out NaN; callers feed real masses.
pub fn elastic_collision(a: &mut Body, b: &mut Body) {
    let axis = b.pos - a.pos;
    if axis.dot(a.vel - b.vel) < 0.0 {
        return;
    }

    let theta = axis.angle();
    let u1 = a.vel.rotated(-theta);
    let u2 = b.vel.rotated(-theta);
    let total = a.mass + b.mass;

    let v1 = Vec2::new(
        ((a.mass - b.mass) * u1.x + 2.0 * b.mass * u2.x) / total,
        u1.y,
    );
    let v2 = Vec2::new(
        ((b.mass - a.mass) * u2.x + 2.0 * a.mass * u1.x) / total,
        u2.y,
    );

    a.vel = v1.rotated(theta);
    b.vel = v2.rotated(theta);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Vec2::new(x, y), r)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn test_circles_touching_is_overlap() {
        // Centers exactly r1 + r2 apart
        let a = circle(0.0, 0.0, 3.0);
        let b = circle(7.0, 0.0, 4.0);
        assert!(circles_overlap(&a, &b));

        let c = circle(7.1, 0.0, 4.0);
        assert!(!circles_overlap(&a, &c));
    }

    #[test]
    fn test_circles_overlap_symmetric() {
        let a = circle(1.0, 2.0, 2.0);
        let b = circle(3.0, 3.0, 1.5);
        assert_eq!(circles_overlap(&a, &b), circles_overlap(&b, &a));
    }

    #[test]
    fn test_rects_overlap_scenarios() {
        assert!(rects_overlap(
            &rect(0.0, 0.0, 10.0, 10.0),
            &rect(5.0, 5.0, 10.0, 10.0)
        ));
        // Corner-touching rects do not overlap under the open-interval rule
        assert!(!rects_overlap(
            &rect(0.0, 0.0, 10.0, 10.0),
            &rect(10.0, 10.0, 10.0, 10.0)
        ));
        // Edge-touching either
        assert!(!rects_overlap(
            &rect(0.0, 0.0, 10.0, 10.0),
            &rect(10.0, 0.0, 10.0, 10.0)
        ));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        // Center inside the rect
        assert!(circle_rect_overlap(&circle(5.0, 5.0, 1.0), &r));
        // Center outside, edge reaches in
        assert!(circle_rect_overlap(&circle(-1.0, 5.0, 2.0), &r));
        // Near the corner but out of radius reach
        assert!(!circle_rect_overlap(&circle(12.0, 12.0, 2.0), &r));
        // Corner just within reach: dist from (10,10) is 2*sqrt(2) ≈ 2.83
        assert!(circle_rect_overlap(&circle(12.0, 12.0, 3.0), &r));
    }

    #[test]
    fn test_segment_intersection_point() {
        let a = line(0.0, 0.0, 10.0, 10.0);
        let b = line(0.0, 10.0, 10.0, 0.0);
        let p = segment_intersection(&a, &b).unwrap();
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let a = line(0.0, 0.0, 10.0, 0.0);
        let b = line(0.0, 1.0, 10.0, 1.0);
        assert!(!segments_intersect(&a, &b));
        // Collinear overlap is still "parallel"
        let c = line(5.0, 0.0, 15.0, 0.0);
        assert!(!segments_intersect(&a, &c));
    }

    #[test]
    fn test_segments_miss_outside_parameter_range() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(3.0, 0.0, 0.0, 3.0);
        // The infinite lines cross at (1.5, 1.5), past the end of `a`
        assert!(!segments_intersect(&a, &b));
    }

    #[test]
    fn test_segment_circle_overlap() {
        let c = circle(5.0, 5.0, 1.0);
        assert!(segment_circle_overlap(&line(0.0, 5.0, 10.0, 5.0), &c));
        assert!(!segment_circle_overlap(&line(0.0, 0.0, 10.0, 0.0), &c));
        // Projection clamps to the near endpoint
        assert!(!segment_circle_overlap(&line(0.0, 5.0, 2.0, 5.0), &c));
        assert!(segment_circle_overlap(&line(0.0, 5.0, 4.5, 5.0), &c));
    }

    #[test]
    fn test_segment_circle_zero_length_segment() {
        let c = circle(1.0, 1.0, 0.5);
        assert!(segment_circle_overlap(&line(1.2, 1.2, 1.2, 1.2), &c));
        assert!(!segment_circle_overlap(&line(5.0, 5.0, 5.0, 5.0), &c));
    }

    #[test]
    fn test_segment_rect_overlap() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(segment_rect_overlap(&line(-5.0, 5.0, 5.0, 5.0), &r));
        assert!(!segment_rect_overlap(&line(-5.0, -5.0, -1.0, 5.0), &r));
        // Fully interior segment crosses no edge
        assert!(!segment_rect_overlap(&line(2.0, 2.0, 8.0, 8.0), &r));
    }

    #[test]
    fn test_point_in_circle_boundary_inclusive() {
        let c = circle(0.0, 0.0, 5.0);
        assert!(point_in_circle(Vec2::new(5.0, 0.0), &c));
        assert!(point_in_circle(Vec2::new(3.0, 4.0), &c));
        assert!(!point_in_circle(Vec2::new(5.0, 0.1), &c));
    }

    #[test]
    fn test_point_in_rect_boundary_exclusive() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(Vec2::new(5.0, 5.0), &r));
        // On the right edge: not inside
        assert!(!point_in_rect(Vec2::new(10.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(0.0, 5.0), &r));
        assert!(!point_in_rect(Vec2::new(5.0, 10.0), &r));
    }

    #[test]
    fn test_point_in_arc() {
        use std::f64::consts::FRAC_PI_2;
        let arc = Arc::new(Vec2::ZERO, 5.0, 10.0, 0.0, FRAC_PI_2).unwrap();
        assert!(point_in_arc(Vec2::new(7.0, 0.0), &arc));
        assert!(point_in_arc(Vec2::new(0.0, 10.0), &arc));
        // Inside the hole
        assert!(!point_in_arc(Vec2::new(3.0, 0.0), &arc));
        // Right band, wrong angle
        assert!(!point_in_arc(Vec2::new(-7.0, 0.0), &arc));
    }

    #[test]
    fn test_point_in_arc_offset_center() {
        use std::f64::consts::FRAC_PI_2;
        let arc = Arc::new(Vec2::new(100.0, 100.0), 5.0, 10.0, 0.0, FRAC_PI_2).unwrap();
        assert!(point_in_arc(Vec2::new(107.0, 100.0), &arc));
        assert!(!point_in_arc(Vec2::new(93.0, 100.0), &arc));
    }

    #[test]
    fn test_point_in_wedge() {
        use std::f64::consts::FRAC_PI_2;
        let w = Wedge::new(Vec2::ZERO, 10.0, 0.0, FRAC_PI_2).unwrap();
        assert!(point_in_wedge(Vec2::new(3.0, 3.0), &w));
        // Wedges are filled to the tip, unlike arcs
        assert!(point_in_wedge(Vec2::new(0.5, 0.5), &w));
        assert!(!point_in_wedge(Vec2::new(-3.0, 3.0), &w));
        assert!(!point_in_wedge(Vec2::new(8.0, 8.0), &w));
    }

    #[test]
    fn test_elastic_head_on_equal_masses_swap() {
        let mut a = Body::new(Vec2::ZERO, Vec2::new(5.0, 0.0), 1.0);
        let mut b = Body::new(Vec2::new(10.0, 0.0), Vec2::new(-5.0, 0.0), 1.0);
        elastic_collision(&mut a, &mut b);
        assert!((a.vel.x - (-5.0)).abs() < 1e-9);
        assert!(a.vel.y.abs() < 1e-9);
        assert!((b.vel.x - 5.0).abs() < 1e-9);
        assert!(b.vel.y.abs() < 1e-9);
    }

    #[test]
    fn test_elastic_conserves_momentum() {
        let mut a = Body::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0), 2.0);
        let mut b = Body::new(Vec2::new(4.0, 1.0), Vec2::new(-2.0, 0.5), 5.0);
        let before = a.vel * a.mass + b.vel * b.mass;
        elastic_collision(&mut a, &mut b);
        let after = a.vel * a.mass + b.vel * b.mass;
        assert!((before.x - after.x).abs() < 1e-6);
        assert!((before.y - after.y).abs() < 1e-6);
    }

    #[test]
    fn test_elastic_skips_separating_bodies() {
        let mut a = Body::new(Vec2::ZERO, Vec2::new(-5.0, 0.0), 1.0);
        let mut b = Body::new(Vec2::new(10.0, 0.0), Vec2::new(5.0, 0.0), 1.0);
        let (va, vb) = (a.vel, b.vel);
        elastic_collision(&mut a, &mut b);
        assert_eq!(a.vel, va);
        assert_eq!(b.vel, vb);
    }

    #[test]
    fn test_elastic_glancing_keeps_perpendicular_component() {
        // Collision axis is x; a's y velocity must survive untouched
        let mut a = Body::new(Vec2::ZERO, Vec2::new(4.0, 3.0), 1.0);
        let mut b = Body::new(Vec2::new(5.0, 0.0), Vec2::ZERO, 1.0);
        elastic_collision(&mut a, &mut b);
        assert!(a.vel.x.abs() < 1e-9);
        assert!((a.vel.y - 3.0).abs() < 1e-9);
        assert!((b.vel.x - 4.0).abs() < 1e-9);
        assert!(b.vel.y.abs() < 1e-9);
    }
}
