//! Authority partitions of the suffix list.

use std::fmt;

/// Authority represents which section of the list a rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Authority {
    /// Delegated through the DNS root (ICANN section)
    #[default]
    Icann = 0,
    /// Submitted by a private party (PRIVATE section)
    Private = 1,
}

impl Authority {
    /// Both partitions, in lookup preference order.
    pub const ALL: [Authority; 2] = [Authority::Icann, Authority::Private];

    /// Get the string representation, as used in the list's section markers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Icann => "ICANN",
            Authority::Private => "PRIVATE",
        }
    }

    /// Convert to an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_icann(self) -> bool {
        self == Authority::Icann
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
