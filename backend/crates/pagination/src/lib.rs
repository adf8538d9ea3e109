//! Page-number pagination primitives shared by roster backend endpoints.
//!
//! A [`Pager`] describes a bounded result window using a one-based page
//! number and a page size. Callers usually receive both values from query
//! strings, so [`Pager::from_request`] tolerates missing or out-of-range input
//! by falling back to defaults and clamping, while [`Pager::try_new`] is the
//! strict constructor for programmatic use.
//!
//! ```
//! use pagination::Pager;
//!
//! let pager = Pager::from_request(Some(3), Some(20));
//! assert_eq!(pager.offset(), 40);
//! assert_eq!(pager.limit(), 20);
//! ```

use serde::{Deserialize, Serialize};

/// Page number used when the caller omits one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller omits one or asks for zero rows.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page size a single request may ask for.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Errors raised by [`Pager::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// Page numbers are one-based.
    #[error("page number must be at least 1")]
    ZeroPage,
    /// A page must hold at least one row.
    #[error("page size must be at least 1")]
    ZeroSize,
    /// The requested page size exceeds [`MAX_PAGE_SIZE`].
    #[error("page size must be at most {max}")]
    SizeTooLarge {
        /// The configured upper bound.
        max: u32,
    },
}

/// One-based page window.
///
/// ## Invariants
/// - `current >= 1`
/// - `1 <= size <= MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PagerDto", into = "PagerDto")]
pub struct Pager {
    current: u32,
    size: u32,
}

impl Pager {
    /// Validate and construct a pager.
    ///
    /// # Errors
    /// Returns [`PagerError`] when either value violates the invariants.
    pub const fn try_new(current: u32, size: u32) -> Result<Self, PagerError> {
        if current == 0 {
            return Err(PagerError::ZeroPage);
        }
        if size == 0 {
            return Err(PagerError::ZeroSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PagerError::SizeTooLarge { max: MAX_PAGE_SIZE });
        }
        Ok(Self { current, size })
    }

    /// Build a pager from loosely specified request parameters.
    ///
    /// Missing or zero page numbers become [`DEFAULT_PAGE`]; missing or zero
    /// sizes become [`DEFAULT_PAGE_SIZE`]; oversized pages are clamped to
    /// [`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn from_request(current: Option<u32>, size: Option<u32>) -> Self {
        let current = current.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE);
        let size = size
            .filter(|rows| *rows > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { current, size }
    }

    /// One-based page number.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Rows per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows to skip before the window starts.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.current - 1) * i64::from(self.size)
    }

    /// Maximum number of rows in the window.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PagerDto {
    current: u32,
    size: u32,
}

impl From<Pager> for PagerDto {
    fn from(value: Pager) -> Self {
        Self {
            current: value.current,
            size: value.size,
        }
    }
}

impl TryFrom<PagerDto> for Pager {
    type Error = PagerError;

    fn try_from(value: PagerDto) -> Result<Self, Self::Error> {
        Self::try_new(value.current, value.size)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for pager construction and window arithmetic.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, DEFAULT_PAGE, DEFAULT_PAGE_SIZE)]
    #[case(Some(0), Some(0), DEFAULT_PAGE, DEFAULT_PAGE_SIZE)]
    #[case(Some(4), Some(25), 4, 25)]
    #[case(Some(2), Some(MAX_PAGE_SIZE + 1), 2, MAX_PAGE_SIZE)]
    fn from_request_applies_defaults_and_clamps(
        #[case] current: Option<u32>,
        #[case] size: Option<u32>,
        #[case] expected_current: u32,
        #[case] expected_size: u32,
    ) {
        let pager = Pager::from_request(current, size);
        assert_eq!(pager.current(), expected_current);
        assert_eq!(pager.size(), expected_size);
    }

    #[rstest]
    #[case(0, 10, PagerError::ZeroPage)]
    #[case(1, 0, PagerError::ZeroSize)]
    #[case(1, MAX_PAGE_SIZE + 1, PagerError::SizeTooLarge { max: MAX_PAGE_SIZE })]
    fn try_new_rejects_invalid_windows(
        #[case] current: u32,
        #[case] size: u32,
        #[case] expected: PagerError,
    ) {
        assert_eq!(Pager::try_new(current, size), Err(expected));
    }

    #[rstest]
    fn first_page_starts_at_zero() {
        let pager = Pager::default();
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.limit(), i64::from(DEFAULT_PAGE_SIZE));
    }

    #[rstest]
    fn offset_does_not_overflow_for_the_last_page() {
        let pager = Pager::try_new(u32::MAX, MAX_PAGE_SIZE).expect("valid pager");
        assert_eq!(
            pager.offset(),
            i64::from(u32::MAX - 1) * i64::from(MAX_PAGE_SIZE)
        );
    }

    #[rstest]
    fn deserialisation_enforces_invariants() {
        let err = serde_json::from_str::<Pager>(r#"{"current":0,"size":5}"#)
            .expect_err("zero page rejected");
        assert!(err.to_string().contains("page number must be at least 1"));
    }
}
