//! Output kinds and per-host classification results.

use serde::Serialize;
use std::fmt;

use crate::error::Error;

/// OutputKind names one of the five per-host results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Whether the longest match is ICANN-managed
    IsIcann,
    /// Longest ICANN suffix (eTLD)
    PublicSuffix,
    /// Longest suffix of any authority
    DomainSuffix,
    /// ICANN suffix plus one label (eTLD+1)
    RegisteredDomain,
    /// Registered domain, gated on the longest match being ICANN
    PublicRegisteredDomain,
}

impl OutputKind {
    /// All output kinds.
    pub const ALL: [OutputKind; 5] = [
        OutputKind::IsIcann,
        OutputKind::PublicSuffix,
        OutputKind::DomainSuffix,
        OutputKind::RegisteredDomain,
        OutputKind::PublicRegisteredDomain,
    ];

    /// Parse an output kind from its snake_case name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "is_icann" => Some(OutputKind::IsIcann),
            "public_suffix" => Some(OutputKind::PublicSuffix),
            "domain_suffix" => Some(OutputKind::DomainSuffix),
            "registered_domain" => Some(OutputKind::RegisteredDomain),
            "public_registered_domain" => Some(OutputKind::PublicRegisteredDomain),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::IsIcann => "is_icann",
            OutputKind::PublicSuffix => "public_suffix",
            OutputKind::DomainSuffix => "domain_suffix",
            OutputKind::RegisteredDomain => "registered_domain",
            OutputKind::PublicRegisteredDomain => "public_registered_domain",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownOutput(s.to_string()))
    }
}

/// A single output value. Text outputs use the empty string for "none".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Bool(b) => write!(f, "{}", b),
            OutputValue::Text(s) => f.write_str(s),
        }
    }
}

/// All five results for one host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_icann: bool,
    pub public_suffix: String,
    pub domain_suffix: String,
    pub registered_domain: String,
    pub public_registered_domain: String,
}

impl Classification {
    /// Select one result.
    pub fn get(&self, kind: OutputKind) -> OutputValue {
        match kind {
            OutputKind::IsIcann => OutputValue::Bool(self.is_icann),
            OutputKind::PublicSuffix => OutputValue::Text(self.public_suffix.clone()),
            OutputKind::DomainSuffix => OutputValue::Text(self.domain_suffix.clone()),
            OutputKind::RegisteredDomain => OutputValue::Text(self.registered_domain.clone()),
            OutputKind::PublicRegisteredDomain => {
                OutputValue::Text(self.public_registered_domain.clone())
            }
        }
    }
}
