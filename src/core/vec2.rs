/// Magnitudes below this are treated as degenerate (no direction).
pub const MIN_MAGNITUDE: f32 = 0.0001;

/// 2D Vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or zero when the length is below
    /// [`MIN_MAGNITUDE`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len >= MIN_MAGNITUDE {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Clamp the length to `max`, keeping the direction.
    pub fn clamp_length(&self, max: f32) -> Self {
        if self.length() > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    /// Mirror `self` about the plane with normal `normal`: `v - 2(v·n)n`.
    ///
    /// The normal is normalized first; a degenerate normal leaves `self` unchanged.
    pub fn reflect(&self, normal: Vec2) -> Self {
        let n = normal.normalize();
        let d = self.dot(n);
        *self - n * (2.0 * d)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(Vec2::new(0.00005, 0.0).normalize(), Vec2::zero());
        let n = Vec2::new(3.0, 4.0).normalize();
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.y, 0.8);
    }

    #[test]
    fn normalize_at_threshold_is_unit() {
        let n = Vec2::new(MIN_MAGNITUDE, 0.0).normalize();
        assert_relative_eq!(n.x, 1.0);
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let v = Vec2::new(-5.0, 3.0).reflect(Vec2::new(1.0, 0.0));
        assert_eq!(v, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn reflect_with_degenerate_normal_is_identity() {
        let v = Vec2::new(-5.0, 3.0).reflect(Vec2::zero());
        assert_eq!(v, Vec2::new(-5.0, 3.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotate(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn clamp_length_keeps_direction() {
        let v = Vec2::new(60.0, 80.0).clamp_length(50.0);
        assert_relative_eq!(v.length(), 50.0, epsilon = 1e-4);
        assert_relative_eq!(v.x / v.y, 0.75, epsilon = 1e-5);
        let slow = Vec2::new(1.0, 1.0);
        assert_eq!(slow.clamp_length(50.0), slow);
    }
}
