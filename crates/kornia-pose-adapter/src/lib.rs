#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Pose Adapter
//!
//! Correspondence containers consumed by absolute pose solvers and robust
//! estimators. An adapter borrows the correspondence arrays from the caller and
//! owns the mutable classification state (inlier flags and weights) that a
//! RANSAC-style loop rewrites after every scoring pass.
//!
//! ## Key Features
//!
//! - **Bearing channel**: unit bearing vectors paired with world points
//! - **Camera channel**: optional camera-frame points sharing the same indices
//! - **Per-channel state**: independent inlier flags and quantized weights
//! - **Capability trait**: solvers are generic over [`AbsoluteAdapter`]
//!
//! ## Example
//!
//! ```rust
//! use kornia_pose_adapter::{AbsoluteAdapter, HybridPointAdapter};
//!
//! let bearings = [[0.0, 0.0, 1.0], [0.6, 0.0, 0.8], [0.0, 0.6, 0.8]];
//! let camera = [[0.0, 0.0, 2.0], [1.5, 0.0, 2.0], [0.0, 1.5, 2.0]];
//! let world = [[1.0, 0.0, 2.0], [2.5, 0.0, 2.0], [1.0, 1.5, 2.0]];
//!
//! let mut adapter = HybridPointAdapter::new(&bearings, &camera, &world)?;
//! adapter.set_inliers(&[&[true, false, true], &[true, true, false]])?;
//!
//! assert!(!adapter.is_inlier(1)?);
//! assert_eq!(adapter.compact_inlier_indices(), vec![0, 1]);
//! assert_eq!(adapter.weight(0)?, 1.0);
//! # Ok::<(), kornia_pose_adapter::AdapterError>(())
//! ```

/// Capability trait shared by every adapter.
pub mod adapter;

/// Adapter for bearing-vector-to-point correspondences.
pub mod bearing;

/// Inlier and weight state of a single channel.
pub mod channel;

/// Error types for the adapters.
pub mod error;

/// Adapter adding camera-frame points to the bearing correspondences.
pub mod hybrid;

/// Pose estimate held by the adapters.
pub mod pose;

pub use adapter::AbsoluteAdapter;
pub use bearing::BearingPointAdapter;
pub use channel::{quantize_weight, ChannelState, DEFAULT_WEIGHT, MAX_WEIGHT_VALUE};
pub use error::AdapterError;
pub use hybrid::{HybridPointAdapter, ValidityPolicy};
pub use pose::{PoseState, IDENTITY_ROTATION};
