use crate::error::AdapterError;
use crate::pose::PoseState;

/// Capability interface consumed by absolute pose solvers and robust estimators.
///
/// Every adapter carries the bearing/global channel. The camera/global channel
/// is optional: adapters without it report `false` from
/// [`AbsoluteAdapter::has_camera_points`] and fail the camera queries with
/// [`AdapterError::MissingCameraChannel`].
///
/// Multi-column setters take one column per channel: column 0 is routed to the
/// bearing channel and column 1, when present, to the camera channel. Every
/// column is validated before any state is replaced.
pub trait AbsoluteAdapter {
    /// Get the current pose estimate.
    fn pose(&self) -> &PoseState;

    /// Get the current pose estimate for modification.
    fn pose_mut(&mut self) -> &mut PoseState;

    /// Get the world to camera rotation.
    fn rotation(&self) -> &[[f64; 3]; 3] {
        self.pose().rotation()
    }

    /// Get the camera position in the world frame.
    fn translation(&self) -> &[f64; 3] {
        self.pose().translation()
    }

    /// Replace rotation and translation together.
    fn set_pose(&mut self, rotation: [[f64; 3]; 3], translation: [f64; 3]) {
        self.pose_mut().set_pose(rotation, translation);
    }

    /// Number of correspondences shared by all channels.
    fn num_correspondences(&self) -> usize;

    /// Get the unit bearing vector at `index`, in the camera frame.
    fn bearing_vector(&self, index: usize) -> Result<[f64; 3], AdapterError>;

    /// Get the point at `index`, in the world frame.
    fn global_point(&self, index: usize) -> Result<[f64; 3], AdapterError>;

    /// Check whether the bearing correspondence at `index` is an inlier.
    fn is_inlier(&self, index: usize) -> Result<bool, AdapterError>;

    /// Get the weight of the bearing correspondence at `index`.
    fn weight(&self, index: usize) -> Result<f64, AdapterError>;

    /// Replace the inlier flags of one or more channels.
    fn set_inliers(&mut self, columns: &[&[bool]]) -> Result<(), AdapterError>;

    /// Replace the quantized weights of one or more channels.
    fn set_weights(&mut self, columns: &[&[u16]]) -> Result<(), AdapterError>;

    /// Whether the adapter holds camera-frame points.
    fn has_camera_points(&self) -> bool {
        false
    }

    /// Get the camera-frame point at `index`.
    fn camera_point(&self, _index: usize) -> Result<[f64; 3], AdapterError> {
        Err(AdapterError::MissingCameraChannel)
    }

    /// Check whether the camera-frame point at `index` carries usable data.
    fn is_valid_entry(&self, _index: usize) -> Result<bool, AdapterError> {
        Err(AdapterError::MissingCameraChannel)
    }

    /// Check whether the camera correspondence at `index` is an inlier.
    fn is_camera_inlier(&self, _index: usize) -> Result<bool, AdapterError> {
        Err(AdapterError::MissingCameraChannel)
    }

    /// Get the weight of the camera correspondence at `index`.
    fn camera_weight(&self, _index: usize) -> Result<f64, AdapterError> {
        Err(AdapterError::MissingCameraChannel)
    }

    /// Human readable dump of the inlier flags, one line per channel.
    fn inlier_report(&self) -> String;

    /// Log the inlier flags of every channel.
    fn print_inliers(&self) {
        for line in self.inlier_report().lines() {
            log::info!("{line}");
        }
    }
}
