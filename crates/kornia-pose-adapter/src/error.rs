use thiserror::Error;

/// Error types for the correspondence adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// A correspondence index beyond the number of stored correspondences.
    #[error("Index {index} out of range for {len} correspondences")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of correspondences held by the adapter.
        len: usize,
    },

    /// Invalid input data - mismatched array lengths with descriptive labels.
    #[error("Mismatched array lengths: {left_name} ({left_len}) != {right_name} ({right_len})")]
    MismatchedArrayLengths {
        /// Label for the left-hand slice
        left_name: &'static str,
        /// Length of the left-hand slice
        left_len: usize,
        /// Label for the right-hand slice
        right_name: &'static str,
        /// Length of the right-hand slice
        right_len: usize,
    },

    /// A multi-channel setter received zero columns or more columns than channels.
    #[error("Expected between 1 and {max} columns, got {actual}")]
    InvalidColumnCount {
        /// Number of channels the adapter holds.
        max: usize,
        /// Number of columns supplied.
        actual: usize,
    },

    /// A camera-frame query on an adapter without camera points.
    #[error("Adapter has no camera-frame point channel")]
    MissingCameraChannel,
}

/// Fails with [`AdapterError::IndexOutOfRange`] unless `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), AdapterError> {
    if index >= len {
        return Err(AdapterError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Fails with [`AdapterError::MismatchedArrayLengths`] unless both lengths agree.
#[inline]
pub(crate) fn check_len(
    left_name: &'static str,
    left_len: usize,
    right_name: &'static str,
    right_len: usize,
) -> Result<(), AdapterError> {
    if left_len != right_len {
        return Err(AdapterError::MismatchedArrayLengths {
            left_name,
            left_len,
            right_name,
            right_len,
        });
    }
    Ok(())
}
