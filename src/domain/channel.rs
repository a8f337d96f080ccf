//! Marketing channel taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A marketing distribution category.
///
/// The set is fixed; per-channel behavior lives in the generator's profile
/// table, keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Search,
    Social,
    Email,
    Display,
}

impl Channel {
    /// All channels in stable order. Position + 1 doubles as the
    /// star-schema channel key.
    pub const ALL: [Channel; 4] = [
        Channel::Search,
        Channel::Social,
        Channel::Email,
        Channel::Display,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Search => "search",
            Channel::Social => "social",
            Channel::Email => "email",
            Channel::Display => "display",
        }
    }

    /// Star-schema surrogate key (1-based).
    #[must_use]
    pub fn key(self) -> u32 {
        Channel::ALL.iter().position(|c| *c == self).unwrap_or(0) as u32 + 1
    }

    /// Channels with no cost per click (spend is always zero).
    #[must_use]
    pub const fn is_zero_cost(self) -> bool {
        matches!(self, Channel::Email)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
