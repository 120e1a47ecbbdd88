//! A single public suffix rule.

use std::fmt;

use crate::error::MalformedReason;
use crate::{Authority, RuleKind};

/// Rule is one entry of the suffix list.
///
/// Labels are stored right-to-left, so `co.uk` becomes `["uk", "co"]` and
/// `*.kawasaki.jp` becomes `["jp", "kawasaki"]` with kind `Wildcard`.
///
/// # Examples
/// ```
/// use k2psl::{Authority, RuleKind, rule::Rule};
///
/// let rule = Rule::parse("!city.kawasaki.jp", Authority::Icann).unwrap();
/// assert_eq!(rule.kind(), RuleKind::Exception);
/// assert_eq!(rule.labels(), ["jp", "kawasaki", "city"]);
/// assert_eq!(rule.suffix_len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    labels: Vec<String>,
    kind: RuleKind,
    authority: Authority,
}

impl Rule {
    /// Parse a rule from list syntax. The input is lower-cased.
    pub fn parse(text: &str, authority: Authority) -> Result<Self, MalformedReason> {
        let text = text.to_lowercase();

        let (kind, body) = if let Some(rest) = text.strip_prefix('!') {
            (RuleKind::Exception, rest)
        } else if text == "*" {
            return Err(MalformedReason::BareWildcard);
        } else if let Some(rest) = text.strip_prefix("*.") {
            (RuleKind::Wildcard, rest)
        } else {
            (RuleKind::Exact, text.as_str())
        };

        let mut labels = Vec::new();
        for label in body.rsplit('.') {
            if label.is_empty() {
                return Err(MalformedReason::EmptyLabel);
            }
            if label.contains('*') {
                return Err(match kind {
                    RuleKind::Exception => MalformedReason::WildcardException,
                    _ => MalformedReason::MisplacedWildcard,
                });
            }
            labels.push(label.to_string());
        }

        if kind == RuleKind::Exception && labels.len() < 2 {
            return Err(MalformedReason::ShortException);
        }

        Ok(Self {
            labels,
            kind,
            authority,
        })
    }

    /// Labels, rightmost first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// Dotted form of the literal labels, without any prefix (`kawasaki.jp`).
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, label) in self.labels.iter().rev().enumerate() {
            if i > 0 {
                key.push('.');
            }
            key.push_str(label);
        }
        key
    }

    /// Number of trailing domain labels this rule consumes when it wins.
    pub fn suffix_len(&self) -> usize {
        match self.kind {
            RuleKind::Exact => self.labels.len(),
            RuleKind::Wildcard => self.labels.len() + 1,
            RuleKind::Exception => self.labels.len() - 1,
        }
    }

    /// Deepest domain label count at which this rule can match.
    pub fn depth(&self) -> usize {
        match self.kind {
            RuleKind::Wildcard => self.labels.len() + 1,
            _ => self.labels.len(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.key())
    }
}
