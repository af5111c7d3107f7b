use crate::adapter::AbsoluteAdapter;
use crate::channel::ChannelState;
use crate::error::{check_index, check_len, AdapterError};
use crate::pose::PoseState;

/// Adapter for bearing-vector-to-point correspondences.
///
/// The bearing vectors and global points are borrowed from the caller for the
/// lifetime `'a` and are never copied or resized. Only the inlier flags and
/// weights are owned.
#[derive(Debug, Clone)]
pub struct BearingPointAdapter<'a> {
    pose: PoseState,
    // unit directions in the camera frame
    bearing_vectors: &'a [[f64; 3]],
    // points in the world frame, same index space
    global_points: &'a [[f64; 3]],
    channel: ChannelState,
}

impl<'a> BearingPointAdapter<'a> {
    /// Create an adapter with an identity rotation and zero translation.
    ///
    /// # Arguments
    ///
    /// * `bearing_vectors` - Unit bearing vectors in the camera frame.
    /// * `global_points` - Corresponding points in the world frame.
    ///
    /// # Errors
    ///
    /// Fails if both slices do not have the same length.
    pub fn new(
        bearing_vectors: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
    ) -> Result<Self, AdapterError> {
        Self::from_pose(bearing_vectors, global_points, PoseState::default())
    }

    /// Create an adapter with an initial rotation and zero translation.
    pub fn with_rotation(
        bearing_vectors: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
        rotation: [[f64; 3]; 3],
    ) -> Result<Self, AdapterError> {
        Self::from_pose(
            bearing_vectors,
            global_points,
            PoseState::from_rotation(rotation),
        )
    }

    /// Create an adapter with an initial rotation and translation.
    pub fn with_pose(
        bearing_vectors: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
        rotation: [[f64; 3]; 3],
        translation: [f64; 3],
    ) -> Result<Self, AdapterError> {
        Self::from_pose(
            bearing_vectors,
            global_points,
            PoseState::new(rotation, translation),
        )
    }

    fn from_pose(
        bearing_vectors: &'a [[f64; 3]],
        global_points: &'a [[f64; 3]],
        pose: PoseState,
    ) -> Result<Self, AdapterError> {
        check_len(
            "bearing vectors",
            bearing_vectors.len(),
            "global points",
            global_points.len(),
        )?;
        Ok(Self {
            pose,
            bearing_vectors,
            global_points,
            channel: ChannelState::new(bearing_vectors.len()),
        })
    }

    /// Get the borrowed bearing vectors.
    pub fn bearing_vectors(&self) -> &'a [[f64; 3]] {
        self.bearing_vectors
    }

    /// Get the borrowed global points.
    pub fn global_points(&self) -> &'a [[f64; 3]] {
        self.global_points
    }

    /// Get the inlier and weight state of the bearing channel.
    pub fn channel(&self) -> &ChannelState {
        &self.channel
    }

    pub(crate) fn channel_mut(&mut self) -> &mut ChannelState {
        &mut self.channel
    }

    /// Number of bearing correspondences flagged as inliers.
    pub fn num_inliers(&self) -> usize {
        self.channel.num_inliers()
    }

    /// Ascending indices of the bearing correspondences flagged as inliers.
    pub fn inlier_indices(&self) -> Vec<usize> {
        self.channel.inlier_indices()
    }
}

impl AbsoluteAdapter for BearingPointAdapter<'_> {
    fn pose(&self) -> &PoseState {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut PoseState {
        &mut self.pose
    }

    fn num_correspondences(&self) -> usize {
        self.bearing_vectors.len()
    }

    fn bearing_vector(&self, index: usize) -> Result<[f64; 3], AdapterError> {
        check_index(index, self.bearing_vectors.len())?;
        Ok(self.bearing_vectors[index])
    }

    fn global_point(&self, index: usize) -> Result<[f64; 3], AdapterError> {
        check_index(index, self.global_points.len())?;
        Ok(self.global_points[index])
    }

    fn is_inlier(&self, index: usize) -> Result<bool, AdapterError> {
        self.channel.is_inlier(index)
    }

    fn weight(&self, index: usize) -> Result<f64, AdapterError> {
        self.channel.weight(index)
    }

    fn set_inliers(&mut self, columns: &[&[bool]]) -> Result<(), AdapterError> {
        match columns {
            [bearing] => {
                self.channel.set_inliers(bearing)?;
                log::debug!(
                    "bearing inliers: {}/{}",
                    self.channel.num_inliers(),
                    self.channel.len()
                );
                Ok(())
            }
            _ => Err(AdapterError::InvalidColumnCount {
                max: 1,
                actual: columns.len(),
            }),
        }
    }

    fn set_weights(&mut self, columns: &[&[u16]]) -> Result<(), AdapterError> {
        match columns {
            [bearing] => self.channel.set_weights(bearing),
            _ => Err(AdapterError::InvalidColumnCount {
                max: 1,
                actual: columns.len(),
            }),
        }
    }

    fn inlier_report(&self) -> String {
        format!("bearing inliers: {}", self.channel.format_inliers())
    }
}
