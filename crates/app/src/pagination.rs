//! Offset pagination

/// Default page size when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// A `LIMIT`/`OFFSET` window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: u32,
    offset: u32,
}

impl Page {
    /// Build a page, clamping `limit` into `1..=MAX_LIMIT`.
    #[must_use]
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    #[must_use]
    pub const fn limit(self) -> i64 {
        self.limit as i64
    }

    #[must_use]
    pub const fn offset(self) -> i64 {
        self.offset as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}
