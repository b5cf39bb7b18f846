//! Bézier curves over generic point types.

use crate::{VectorSpace, lerp};
use serde::{Deserialize, Serialize};

/// A quadratic Bézier: start `p0`, control `p1`, end `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadBezier<V> {
    pub p0: V,
    pub p1: V,
    pub p2: V,
}

impl<V: VectorSpace> QuadBezier<V> {
    pub fn new(p0: V, p1: V, p2: V) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates `B(t) = (1-t)^2 P0 + 2(1-t)t P1 + t^2 P2`.
    pub fn position_at(&self, t: f32) -> V {
        let mt = 1.0 - t;
        self.p0 * (mt * mt) + self.p1 * (2.0 * mt * t) + self.p2 * (t * t)
    }

    /// Evaluates the derivative `B'(t) = 2(1-t)(P1-P0) + 2t(P2-P1)`.
    pub fn tangent_at(&self, t: f32) -> V {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (2.0 * mt) + (self.p2 - self.p1) * (2.0 * t)
    }

    /// Splits at `t` via De Casteljau.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = lerp(self.p0, self.p1, t);
        let p12 = lerp(self.p1, self.p2, t);
        let mid = lerp(p01, p12, t);
        (Self::new(self.p0, p01, mid), Self::new(mid, p12, self.p2))
    }

    /// Exact degree elevation to a cubic.
    pub fn elevate(&self) -> CubicBezier<V> {
        CubicBezier::new(
            self.p0,
            lerp(self.p0, self.p1, 2.0 / 3.0),
            lerp(self.p1, self.p2, 1.0 / 3.0),
            self.p2,
        )
    }

    /// Samples the curve into `segments + 1` evenly spaced points
    /// (in parameter space), endpoints included.
    pub fn flatten(&self, segments: u32) -> Vec<V> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.position_at(i as f32 / segments as f32))
            .collect()
    }
}

/// A cubic Bézier: start `p0`, controls `p1`/`p2`, end `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier<V> {
    pub p0: V,
    pub p1: V,
    pub p2: V,
    pub p3: V,
}

impl<V: VectorSpace> CubicBezier<V> {
    pub fn new(p0: V, p1: V, p2: V, p3: V) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the Bernstein form.
    pub fn position_at(&self, t: f32) -> V {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        self.p0 * (mt2 * mt)
            + self.p1 * (3.0 * mt2 * t)
            + self.p2 * (3.0 * mt * t2)
            + self.p3 * (t2 * t)
    }

    /// Evaluates the derivative.
    pub fn tangent_at(&self, t: f32) -> V {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * mt * mt)
            + (self.p2 - self.p1) * (6.0 * mt * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Splits at `t` via De Casteljau.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = lerp(self.p0, self.p1, t);
        let p12 = lerp(self.p1, self.p2, t);
        let p23 = lerp(self.p2, self.p3, t);
        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);
        let mid = lerp(p012, p123, t);
        (
            Self::new(self.p0, p01, p012, mid),
            Self::new(mid, p123, p23, self.p3),
        )
    }

    /// Samples the curve into `segments + 1` evenly spaced points
    /// (in parameter space), endpoints included.
    pub fn flatten(&self, segments: u32) -> Vec<V> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.position_at(i as f32 / segments as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_quad_endpoints() {
        let curve = QuadBezier::new(Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
        assert!((curve.position_at(0.0) - Vec2::ZERO).length() < 1e-5);
        assert!((curve.position_at(1.0) - Vec2::new(2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_quad_split_meets_at_split_point() {
        let curve = QuadBezier::new(Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
        let (left, right) = curve.split(0.3);
        let at = curve.position_at(0.3);
        assert!((left.position_at(1.0) - at).length() < 1e-5);
        assert!((right.position_at(0.0) - at).length() < 1e-5);
    }

    #[test]
    fn test_elevate_matches_quad() {
        let quad = QuadBezier::new(Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
        let cubic = quad.elevate();
        for step in 0..=8 {
            let t = step as f32 / 8.0;
            assert!((quad.position_at(t) - cubic.position_at(t)).length() < 1e-4);
        }
    }

    #[test]
    fn test_cubic_endpoints() {
        let curve = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!((curve.position_at(0.0) - Vec3::ZERO).length() < 1e-5);
        assert!((curve.position_at(1.0) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_cubic_split_meets_at_split_point() {
        let curve = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let (left, right) = curve.split(0.5);
        let mid = curve.position_at(0.5);
        assert!((left.position_at(1.0) - mid).length() < 1e-5);
        assert!((right.position_at(0.0) - mid).length() < 1e-5);
    }

    #[test]
    fn test_straight_cubic_tangent_is_constant() {
        let curve = CubicBezier::new(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        );
        let t0 = curve.tangent_at(0.0).normalize();
        let t1 = curve.tangent_at(0.7).normalize();
        assert!(t0.dot(t1) > 0.999);
    }

    #[test]
    fn test_flatten_includes_endpoints() {
        let curve = QuadBezier::new(0.0f32, 2.0, 1.0);
        let points = curve.flatten(4);
        assert_eq!(points.len(), 5);
        assert!((points[0] - 0.0).abs() < 1e-6);
        assert!((points[4] - 1.0).abs() < 1e-6);
    }
}
