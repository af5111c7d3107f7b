/// Identity rotation in row-major layout.
pub const IDENTITY_ROTATION: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Current pose estimate held by an adapter.
///
/// The rotation maps coordinates from the **world** frame to the **camera**
/// frame. The translation is the camera position expressed in the world frame.
///
/// Orthonormality of the rotation is the caller's responsibility and is not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseState {
    rotation: [[f64; 3]; 3],
    translation: [f64; 3],
}

impl Default for PoseState {
    fn default() -> Self {
        Self {
            rotation: IDENTITY_ROTATION,
            translation: [0.0; 3],
        }
    }
}

impl PoseState {
    /// Create a pose from a rotation and a translation.
    pub fn new(rotation: [[f64; 3]; 3], translation: [f64; 3]) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create a pose from a rotation with a zero translation.
    pub fn from_rotation(rotation: [[f64; 3]; 3]) -> Self {
        Self::new(rotation, [0.0; 3])
    }

    /// Get the world to camera rotation.
    #[inline]
    pub fn rotation(&self) -> &[[f64; 3]; 3] {
        &self.rotation
    }

    /// Get the camera position in the world frame.
    #[inline]
    pub fn translation(&self) -> &[f64; 3] {
        &self.translation
    }

    /// Replace rotation and translation together.
    pub fn set_pose(&mut self, rotation: [[f64; 3]; 3], translation: [f64; 3]) {
        *self = Self::new(rotation, translation);
    }

    /// Replace the rotation, keeping the current translation.
    pub fn set_rotation(&mut self, rotation: [[f64; 3]; 3]) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_default() {
        let pose = PoseState::default();
        assert_eq!(pose.rotation(), &IDENTITY_ROTATION);
        assert_eq!(pose.translation(), &[0.0; 3]);
    }

    #[test]
    fn test_set_pose() {
        let rz = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let mut pose = PoseState::from_rotation(rz);
        assert_eq!(pose.rotation(), &rz);
        assert_eq!(pose.translation(), &[0.0; 3]);

        pose.set_pose(IDENTITY_ROTATION, [1.0, 2.0, 3.0]);
        assert_eq!(pose, PoseState::new(IDENTITY_ROTATION, [1.0, 2.0, 3.0]));

        pose.set_rotation(rz);
        assert_eq!(pose.rotation(), &rz);
        assert_eq!(pose.translation(), &[1.0, 2.0, 3.0]);
    }
}
