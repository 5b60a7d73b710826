//! Core types for channel synthesis
//!
//! Defines the complex sample alias used throughout the crate, the error
//! taxonomy for configuration and synthesis failures, and the unordered
//! link identifier that tags a synthesized channel with its two endpoints.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// Result type for channel configuration and synthesis operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors that can occur while configuring ray parameters or synthesizing
/// a channel matrix.
///
/// These are programmer-supplied-data errors, not transient failures: there
/// is no retry path, the caller is expected to correct the input and call
/// again. A failed setter leaves the store unchanged; a failed synthesis
/// returns before any coefficient is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChannelError {
    #[error("carrier frequency must be non-negative, got {0} Hz")]
    NegativeFrequency(f64),

    #[error("elevation {value} deg at index {index} outside [0, 180]")]
    ElevationOutOfRange { value: f64, index: usize },

    #[error("ray vector '{field}' has length {actual}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Unordered pair of node identifiers naming a radio link.
///
/// A link is symmetric for identification purposes: the pair (a, b) and the
/// pair (b, a) denote the same link. The constructor normalizes the order so
/// that equality and hashing behave set-like.
///
/// # Example
///
/// ```rust
/// use raychan::types::LinkId;
///
/// assert_eq!(LinkId::new(7, 3), LinkId::new(3, 7));
/// assert_eq!(LinkId::new(7, 3).nodes(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId {
    lo: u32,
    hi: u32,
}

impl LinkId {
    /// Create a link identifier from two node ids, in either order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The two node ids as `(smaller, larger)`.
    pub fn nodes(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }

    /// True if `node` is one of the two endpoints.
    pub fn contains(&self, node: u32) -> bool {
        self.lo == node || self.hi == node
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<->{}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_id_unordered() {
        let ab = LinkId::new(1, 9);
        let ba = LinkId::new(9, 1);
        assert_eq!(ab, ba);
        assert_eq!(ab.nodes(), (1, 9));
        assert_eq!(ba.nodes(), (1, 9));
    }

    #[test]
    fn test_link_id_same_node() {
        let link = LinkId::new(4, 4);
        assert_eq!(link.nodes(), (4, 4));
        assert!(link.contains(4));
        assert!(!link.contains(5));
    }

    #[test]
    fn test_link_id_display() {
        assert_eq!(LinkId::new(12, 3).to_string(), "3<->12");
    }

    #[test]
    fn test_link_id_hash_set_like() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(LinkId::new(2, 5));
        assert!(set.contains(&LinkId::new(5, 2)));
    }

    #[test]
    fn test_error_display() {
        let err = ChannelError::LengthMismatch {
            field: "aoaAz",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "ray vector 'aoaAz' has length 2, expected 3"
        );
    }
}
