//! Book configuration.
//!
//! ```
//! use aggregated_lob::BookConfig;
//!
//! let config = BookConfig::from_json(r#"{ "max_depth": 10 }"#).unwrap();
//! assert_eq!(config.depth_limit(), Some(10));
//!
//! // Missing fields fall back to defaults (unbounded)
//! let config = BookConfig::from_json("{}").unwrap();
//! assert_eq!(config.depth_limit(), None);
//! ```

use serde::Deserialize;

use crate::error::Result;

/// Construction parameters for an [`OrderBook`](crate::OrderBook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookConfig {
    /// Maximum number of levels returned per side; `<= 0` means unbounded.
    ///
    /// Bounds what the book returns and serializes, not what it stores.
    pub max_depth: i32,
}

impl BookConfig {
    pub fn new(max_depth: i32) -> Self {
        Self { max_depth }
    }

    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The depth bound as a level count, or `None` when unbounded
    pub fn depth_limit(&self) -> Option<usize> {
        positive_limit(self.max_depth)
    }
}

/// Map the "`<= 0` means unbounded" integer convention to an `Option`.
pub(crate) fn positive_limit(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|&n| n > 0)
}
