use crate::core::Vec2;

/// Result of testing one particle against one obstacle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionInfo {
    pub has_collision: bool,
    /// World-space contact estimate
    pub collision_point: Vec2,
    /// Unit, world-space, pointing out of the obstacle
    pub collision_normal: Vec2,
    /// Overlap along the normal (>= 0; always 0 for sweep hits)
    pub penetration_depth: f32,
}

impl CollisionInfo {
    #[inline]
    pub fn none() -> Self {
        Self {
            has_collision: false,
            collision_point: Vec2::zero(),
            collision_normal: Vec2::zero(),
            penetration_depth: 0.0,
        }
    }
}

impl Default for CollisionInfo {
    fn default() -> Self {
        Self::none()
    }
}
