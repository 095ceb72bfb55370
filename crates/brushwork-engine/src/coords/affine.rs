use core::ops::Mul;

use super::Vec2;

/// 2D affine transform stored as the top two rows of a 3×3 matrix:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// `self * other` applies `other` first, then `self`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: offset.x, f: offset.y }
    }

    /// Rotation about the origin. Positive angles turn clockwise on a +Y-down screen.
    #[inline]
    pub fn rotation_degrees(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Affine { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Rotation by `degrees` about `pivot`: translate(pivot) · rotate · translate(-pivot).
    #[inline]
    pub fn rotation_about(pivot: Vec2, degrees: f32) -> Self {
        Affine::translation(pivot) * Affine::rotation_degrees(degrees) * Affine::translation(-pivot)
    }

    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Affine::IDENTITY
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Affine::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        // +X axis rotates onto +Y (downwards) for +90°.
        let p = Affine::rotation_degrees(90.0).transform_point(Vec2::new(1.0, 0.0));
        assert!(approx(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotation_about_pivot_keeps_pivot_fixed() {
        let pivot = Vec2::new(50.0, 20.0);
        let m = Affine::rotation_about(pivot, 37.0);
        assert!(approx(m.transform_point(pivot), pivot));
    }

    #[test]
    fn half_turn_about_pivot_mirrors_point() {
        let m = Affine::rotation_about(Vec2::new(10.0, 10.0), 180.0);
        assert!(approx(m.transform_point(Vec2::new(20.0, 10.0)), Vec2::new(0.0, 10.0)));
    }
}
