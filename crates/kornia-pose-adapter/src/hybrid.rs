use crate::adapter::AbsoluteAdapter;
use crate::bearing::BearingPointAdapter;
use crate::channel::ChannelState;
use crate::error::{check_index, check_len, AdapterError};
use crate::pose::PoseState;

/// How the per-component sentinel check of a camera-frame point is combined.
///
/// A component is missing when it is NaN, e.g. a pixel without depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidityPolicy {
    /// Valid if at least one component is present.
    #[default]
    AnyComponent,
    /// Valid only if every component is present.
    AllComponents,
}

impl ValidityPolicy {
    /// Check a camera-frame point against the policy.
    pub fn is_valid(&self, point: &[f64; 3]) -> bool {
        match self {
            ValidityPolicy::AnyComponent => point.iter().any(|c| !c.is_nan()),
            ValidityPolicy::AllComponents => point.iter().all(|c| !c.is_nan()),
        }
    }
}

/// Adapter for joint 2D-3D and 3D-3D absolute pose problems.
///
/// Extends a [`BearingPointAdapter`] with a camera-frame point per
/// correspondence. Both channels share the same index space and keep
/// independent inlier flags and weights.
#[derive(Debug, Clone)]
pub struct HybridPointAdapter<'a> {
    base: BearingPointAdapter<'a>,
    camera_points: &'a [[f64; 3]],
    camera: ChannelState,
    validity: ValidityPolicy,
}

impl<'a> HybridPointAdapter<'a> {
    /// Create an adapter with an identity rotation and zero translation.
    ///
    /// # Arguments
    ///
    /// * `bearing_vectors` - Unit bearing vectors in the camera frame.
    /// * `camera_points` - Points in the camera frame, NaN components mark missing data.
    /// * `global_points` - Corresponding points in the world frame.
    ///
    /// # Errors
    ///
    /// Fails if the three slices do not have the same length.
    pub fn new(
        bearing_vectors: &'a [[f64; 3]],
        camera_points: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
    ) -> Result<Self, AdapterError> {
        let base = BearingPointAdapter::new(bearing_vectors, global_points)?;
        Self::from_base(base, camera_points)
    }

    /// Create an adapter with an initial rotation and zero translation.
    pub fn with_rotation(
        bearing_vectors: &'a [[f64; 3]],
        camera_points: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
        rotation: [[f64; 3]; 3],
    ) -> Result<Self, AdapterError> {
        let base = BearingPointAdapter::with_rotation(bearing_vectors, global_points, rotation)?;
        Self::from_base(base, camera_points)
    }

    /// Create an adapter with an initial rotation and translation.
    pub fn with_pose(
        bearing_vectors: &'a [[f64; 3]],
        camera_points: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
        rotation: [[f64; 3]; 3],
        translation: [f64; 3],
    ) -> Result<Self, AdapterError> {
        let base =
            BearingPointAdapter::with_pose(bearing_vectors, global_points, rotation, translation)?;
        Self::from_base(base, camera_points)
    }

    fn from_base(
        base: BearingPointAdapter<'a>,
        camera_points: &'a [[f64; 3]],
    ) -> Result<Self, AdapterError> {
        check_len(
            "camera points",
            camera_points.len(),
            "bearing vectors",
            base.num_correspondences(),
        )?;
        Ok(Self {
            camera: ChannelState::new(camera_points.len()),
            base,
            camera_points,
            validity: ValidityPolicy::default(),
        })
    }

    /// Replace the policy used by [`AbsoluteAdapter::is_valid_entry`].
    pub fn with_validity_policy(mut self, validity: ValidityPolicy) -> Self {
        self.validity = validity;
        self
    }

    /// Get the active validity policy.
    pub fn validity_policy(&self) -> ValidityPolicy {
        self.validity
    }

    /// Get the bearing channel adapter.
    pub fn base(&self) -> &BearingPointAdapter<'a> {
        &self.base
    }

    /// Get the borrowed camera-frame points.
    pub fn camera_points(&self) -> &'a [[f64; 3]] {
        self.camera_points
    }

    /// Get the inlier and weight state of the camera channel.
    pub fn camera_channel(&self) -> &ChannelState {
        &self.camera
    }

    /// Number of camera correspondences flagged as inliers.
    pub fn num_camera_inliers(&self) -> usize {
        self.camera.num_inliers()
    }

    /// Ascending indices of the camera correspondences flagged as inliers.
    ///
    /// Recomputed from the current flags on every call, so call it again after
    /// [`AbsoluteAdapter::set_inliers`].
    pub fn compact_inlier_indices(&self) -> Vec<usize> {
        self.camera.inlier_indices()
    }

    /// Ascending indices whose camera-frame point passes the validity policy.
    pub fn valid_indices(&self) -> Vec<usize> {
        self.camera_points
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| self.validity.is_valid(p).then_some(idx))
            .collect()
    }
}

impl AbsoluteAdapter for HybridPointAdapter<'_> {
    fn pose(&self) -> &PoseState {
        self.base.pose()
    }

    fn pose_mut(&mut self) -> &mut PoseState {
        self.base.pose_mut()
    }

    fn num_correspondences(&self) -> usize {
        self.base.num_correspondences()
    }

    fn bearing_vector(&self, index: usize) -> Result<[f64; 3], AdapterError> {
        self.base.bearing_vector(index)
    }

    fn global_point(&self, index: usize) -> Result<[f64; 3], AdapterError> {
        self.base.global_point(index)
    }

    fn is_inlier(&self, index: usize) -> Result<bool, AdapterError> {
        self.base.is_inlier(index)
    }

    fn weight(&self, index: usize) -> Result<f64, AdapterError> {
        self.base.weight(index)
    }

    fn set_inliers(&mut self, columns: &[&[bool]]) -> Result<(), AdapterError> {
        match columns {
            [_] => self.base.set_inliers(columns),
            [bearing, camera] => {
                self.base.channel().check_inliers(bearing)?;
                self.camera.check_inliers(camera)?;
                self.base.channel_mut().set_inliers(bearing)?;
                self.camera.set_inliers(camera)?;
                log::debug!(
                    "inliers: bearing {}/{}, camera {}/{}",
                    self.base.num_inliers(),
                    self.base.channel().len(),
                    self.camera.num_inliers(),
                    self.camera.len()
                );
                Ok(())
            }
            _ => Err(AdapterError::InvalidColumnCount {
                max: 2,
                actual: columns.len(),
            }),
        }
    }

    fn set_weights(&mut self, columns: &[&[u16]]) -> Result<(), AdapterError> {
        match columns {
            [_] => self.base.set_weights(columns),
            [bearing, camera] => {
                self.base.channel().check_weights(bearing)?;
                self.camera.check_weights(camera)?;
                self.base.channel_mut().set_weights(bearing)?;
                self.camera.set_weights(camera)
            }
            _ => Err(AdapterError::InvalidColumnCount {
                max: 2,
                actual: columns.len(),
            }),
        }
    }

    fn has_camera_points(&self) -> bool {
        true
    }

    fn camera_point(&self, index: usize) -> Result<[f64; 3], AdapterError> {
        check_index(index, self.camera_points.len())?;
        Ok(self.camera_points[index])
    }

    fn is_valid_entry(&self, index: usize) -> Result<bool, AdapterError> {
        let point = self.camera_point(index)?;
        Ok(self.validity.is_valid(&point))
    }

    fn is_camera_inlier(&self, index: usize) -> Result<bool, AdapterError> {
        self.camera.is_inlier(index)
    }

    fn camera_weight(&self, index: usize) -> Result<f64, AdapterError> {
        self.camera.weight(index)
    }

    fn inlier_report(&self) -> String {
        format!(
            "{}\ncamera inliers: {}",
            self.base.inlier_report(),
            self.camera.format_inliers()
        )
    }
}
