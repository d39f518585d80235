//! Index and range validation
//!
//! Every public tree operation validates through these helpers before
//! touching any state, so a rejected call never leaves a partial mutation.

use crate::RangeQueryError;

/// Validate a 0-indexed point index against a sequence of length `len`.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), RangeQueryError> {
    if index < len {
        Ok(())
    } else {
        Err(RangeQueryError::IndexOutOfRange { index, len })
    }
}

/// Validate a 0-indexed inclusive range `[left, right]` against length `len`.
#[inline]
pub fn check_range(left: usize, right: usize, len: usize) -> Result<(), RangeQueryError> {
    if left <= right && right < len {
        Ok(())
    } else {
        Err(RangeQueryError::InvalidRange { left, right, len })
    }
}

/// Validate a 1-indexed Fenwick position, which must satisfy `1 <= pos <= len`.
#[inline]
pub fn check_position(position: usize, len: usize) -> Result<(), RangeQueryError> {
    if position >= 1 && position <= len {
        Ok(())
    } else {
        Err(RangeQueryError::IndexOutOfRange {
            index: position,
            len,
        })
    }
}

/// Validate a 1-indexed inclusive span `[left, right]` with `right <= len`.
#[inline]
pub fn check_span(left: usize, right: usize, len: usize) -> Result<(), RangeQueryError> {
    if left >= 1 && left <= right && right <= len {
        Ok(())
    } else {
        Err(RangeQueryError::InvalidRange { left, right, len })
    }
}
