//! Array elements and their transient display statuses.

use serde::{Deserialize, Serialize};

/// Display status of one array slot at a point in time.
///
/// The status is a transient annotation for playback: it is reset to
/// `Unsorted` at the end of each partition pass except for a pivot's final
/// resting slot, and the terminal trace step forces every element to
/// `Sorted`.
///
/// Serialised in lowercase (`"unsorted"`, `"pivot"`, ...) to match the wire
/// shape presentation layers consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    /// Not yet known to be in its final position.
    #[default]
    Unsorted,
    /// Currently selected as the partition pivot.
    Pivot,
    /// In its final sorted position.
    Sorted,
    /// Currently being compared against the pivot.
    Processing,
}

/// One array slot at a point in time: a value plus its display status.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::{ElementStatus, SortElement};
///
/// let element = SortElement::new(42.0);
/// assert_eq!(element.value, 42.0);
/// assert_eq!(element.status, ElementStatus::Unsorted);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortElement {
    /// The element's value.
    pub value: f64,
    /// Transient display status.
    pub status: ElementStatus,
}

impl SortElement {
    /// Creates an element in the `Unsorted` state.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            status: ElementStatus::Unsorted,
        }
    }

    /// Creates an element with an explicit status.
    #[inline]
    pub fn with_status(value: f64, status: ElementStatus) -> Self {
        Self { value, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_unsorted() {
        let element = SortElement::new(3.5);
        assert_eq!(element.value, 3.5);
        assert_eq!(element.status, ElementStatus::Unsorted);
    }

    #[test]
    fn test_status_default() {
        assert_eq!(ElementStatus::default(), ElementStatus::Unsorted);
    }

    #[test]
    fn test_status_serialises_lowercase() {
        let json = serde_json::to_string(&ElementStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");

        let back: ElementStatus = serde_json::from_str("\"pivot\"").unwrap();
        assert_eq!(back, ElementStatus::Pivot);
    }

    #[test]
    fn test_element_serde_roundtrip() {
        let element = SortElement::with_status(7.0, ElementStatus::Sorted);
        let json = serde_json::to_string(&element).unwrap();
        let back: SortElement = serde_json::from_str(&json).unwrap();
        assert_eq!(element, back);
    }
}
