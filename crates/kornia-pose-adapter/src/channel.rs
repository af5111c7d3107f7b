//! Inlier and weight bookkeeping for a single correspondence channel.

use crate::error::{check_index, check_len, AdapterError};

/// Divisor applied to stored weights on read.
///
/// Weights are kept quantized as `u16`, so a stored value `w` reads back as
/// `w / 65535` and the quantization error of a round trip through
/// [`quantize_weight`] is at most `1 / (2 * 65535)`.
pub const MAX_WEIGHT_VALUE: u16 = u16::MAX;

/// Weight reported for every correspondence while no weights are stored.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Quantize a confidence in `[0, 1]` to its stored representation.
///
/// Values outside the unit interval are clamped, NaN maps to zero.
pub fn quantize_weight(weight: f64) -> u16 {
    if weight.is_nan() {
        return 0;
    }
    (weight.clamp(0.0, 1.0) * MAX_WEIGHT_VALUE as f64).round() as u16
}

/// Per-channel classification state: one inlier flag per correspondence and
/// an optional quantized weight per correspondence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelState {
    inliers: Vec<bool>,
    // empty until weights are set, then one entry per correspondence
    weights: Vec<u16>,
}

impl ChannelState {
    /// Create the state for `len` correspondences, all marked as inliers.
    pub fn new(len: usize) -> Self {
        Self {
            inliers: vec![true; len],
            weights: Vec::new(),
        }
    }

    /// Number of correspondences tracked by the channel.
    #[inline]
    pub fn len(&self) -> usize {
        self.inliers.len()
    }

    /// Check if the channel tracks no correspondences.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inliers.is_empty()
    }

    /// Get the inlier flags.
    pub fn inliers(&self) -> &[bool] {
        &self.inliers
    }

    /// Get the stored quantized weights, empty if none were set.
    pub fn weights(&self) -> &[u16] {
        &self.weights
    }

    /// Check whether the correspondence at `index` is an inlier.
    pub fn is_inlier(&self, index: usize) -> Result<bool, AdapterError> {
        check_index(index, self.len())?;
        Ok(self.inliers[index])
    }

    /// Get the weight of the correspondence at `index` in `[0, 1]`.
    ///
    /// Returns [`DEFAULT_WEIGHT`] while no weights are stored.
    pub fn weight(&self, index: usize) -> Result<f64, AdapterError> {
        check_index(index, self.len())?;
        if self.weights.is_empty() {
            return Ok(DEFAULT_WEIGHT);
        }
        Ok(self.weights[index] as f64 / MAX_WEIGHT_VALUE as f64)
    }

    /// Number of correspondences currently flagged as inliers.
    pub fn num_inliers(&self) -> usize {
        self.inliers.iter().filter(|&&flag| flag).count()
    }

    /// Ascending indices of the correspondences flagged as inliers.
    ///
    /// Rebuilt from the flags on every call.
    pub fn inlier_indices(&self) -> Vec<usize> {
        self.inliers
            .iter()
            .enumerate()
            .filter_map(|(idx, &flag)| flag.then_some(idx))
            .collect()
    }

    /// Replace all inlier flags, failing if the length differs.
    pub fn set_inliers(&mut self, inliers: &[bool]) -> Result<(), AdapterError> {
        self.check_inliers(inliers)?;
        self.inliers.copy_from_slice(inliers);
        Ok(())
    }

    /// Replace all weights, failing unless `weights` is empty or matches the length.
    ///
    /// An empty slice clears the weights back to the default.
    pub fn set_weights(&mut self, weights: &[u16]) -> Result<(), AdapterError> {
        self.check_weights(weights)?;
        self.weights.clear();
        self.weights.extend_from_slice(weights);
        Ok(())
    }

    pub(crate) fn check_inliers(&self, inliers: &[bool]) -> Result<(), AdapterError> {
        check_len("inlier flags", inliers.len(), "correspondences", self.len())
    }

    pub(crate) fn check_weights(&self, weights: &[u16]) -> Result<(), AdapterError> {
        if weights.is_empty() {
            return Ok(());
        }
        check_len("weights", weights.len(), "correspondences", self.len())
    }

    /// Render the flags as a row of `0`/`1` separated by spaces.
    pub(crate) fn format_inliers(&self) -> String {
        self.inliers
            .iter()
            .map(|&flag| if flag { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_channel_defaults() -> Result<(), AdapterError> {
        let channel = ChannelState::new(3);
        assert_eq!(channel.len(), 3);
        assert_eq!(channel.num_inliers(), 3);
        for i in 0..3 {
            assert!(channel.is_inlier(i)?);
            assert_eq!(channel.weight(i)?, DEFAULT_WEIGHT);
        }
        assert!(channel.weights().is_empty());
        Ok(())
    }

    #[test]
    fn test_channel_out_of_range() {
        let channel = ChannelState::new(2);
        assert_eq!(
            channel.is_inlier(2),
            Err(AdapterError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(channel.weight(5).is_err());
    }

    #[test]
    fn test_channel_set_inliers() -> Result<(), AdapterError> {
        let mut channel = ChannelState::new(4);
        channel.set_inliers(&[true, false, false, true])?;
        assert_eq!(channel.inlier_indices(), vec![0, 3]);
        assert_eq!(channel.num_inliers(), 2);
        assert_eq!(channel.format_inliers(), "1 0 0 1");

        let err = channel.set_inliers(&[false; 3]).unwrap_err();
        assert!(matches!(err, AdapterError::MismatchedArrayLengths { .. }));
        assert_eq!(channel.inliers(), &[true, false, false, true]);
        Ok(())
    }

    #[test]
    fn test_channel_set_weights() -> Result<(), AdapterError> {
        let mut channel = ChannelState::new(3);
        channel.set_weights(&[0, MAX_WEIGHT_VALUE, quantize_weight(0.25)])?;
        assert_eq!(channel.weight(0)?, 0.0);
        assert_eq!(channel.weight(1)?, 1.0);
        assert_relative_eq!(channel.weight(2)?, 0.25, epsilon = 1e-4);

        assert!(channel.set_weights(&[1, 2]).is_err());
        assert_eq!(channel.weights().len(), 3);

        channel.set_weights(&[])?;
        assert_eq!(channel.weight(2)?, DEFAULT_WEIGHT);
        Ok(())
    }

    #[test]
    fn test_quantize_weight() {
        assert_eq!(quantize_weight(0.0), 0);
        assert_eq!(quantize_weight(1.0), MAX_WEIGHT_VALUE);
        assert_eq!(quantize_weight(2.0), MAX_WEIGHT_VALUE);
        assert_eq!(quantize_weight(-1.0), 0);
        assert_eq!(quantize_weight(f64::NAN), 0);
        let w = 0.3;
        let back = quantize_weight(w) as f64 / MAX_WEIGHT_VALUE as f64;
        assert_relative_eq!(back, w, epsilon = 0.5 / MAX_WEIGHT_VALUE as f64);
    }
}
