//! Rule kind definitions.

use bitflags::bitflags;
use std::fmt;

/// RuleKind represents how a rule matches the labels of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Matches exactly its own labels (`co.uk`)
    Exact,
    /// Matches one arbitrary label to the left of its labels (`*.ck`)
    Wildcard,
    /// Carves a shorter suffix out of a covering wildcard (`!www.ck`)
    Exception,
}

impl RuleKind {
    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Exact => "EXACT",
            RuleKind::Wildcard => "WILDCARD",
            RuleKind::Exception => "EXCEPTION",
        }
    }

    /// The prefix this kind carries in list syntax.
    pub fn prefix(&self) -> &'static str {
        match self {
            RuleKind::Exact => "",
            RuleKind::Wildcard => "*.",
            RuleKind::Exception => "!",
        }
    }

    /// Convert to the flag used in the lookup index.
    pub fn as_flag(&self) -> RuleKinds {
        match self {
            RuleKind::Exact => RuleKinds::EXACT,
            RuleKind::Wildcard => RuleKinds::WILDCARD,
            RuleKind::Exception => RuleKinds::EXCEPTION,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// Set of rule kinds registered under one suffix key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleKinds: u8 {
        const EXACT = 0b0000_0001;
        const WILDCARD = 0b0000_0010;
        const EXCEPTION = 0b0000_0100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_prefix() {
        assert_eq!(RuleKind::Exact.prefix(), "");
        assert_eq!(RuleKind::Wildcard.prefix(), "*.");
        assert_eq!(RuleKind::Exception.prefix(), "!");
    }

    #[test]
    fn test_rule_kind_flags_are_distinct() {
        let all = RuleKind::Exact.as_flag() | RuleKind::Wildcard.as_flag();
        assert!(all.contains(RuleKinds::EXACT));
        assert!(all.contains(RuleKinds::WILDCARD));
        assert!(!all.contains(RuleKinds::EXCEPTION));
    }

    #[test]
    fn test_rule_kind_display() {
        assert_eq!(RuleKind::Exception.to_string(), "EXCEPTION");
    }
}
