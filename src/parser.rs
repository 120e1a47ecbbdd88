//! Public suffix list text format parser.
//!
//! The format is line oriented:
//!
//! ```text
//! // ===BEGIN ICANN DOMAINS===
//! com
//! *.ck
//! !www.ck
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! // ===END PRIVATE DOMAINS===
//! ```
//!
//! Blank lines and `//` comments are skipped. A rule ends at the first
//! whitespace character. Rules outside any section are ICANN rules.

use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::Authority;

const COMMENT: &str = "//";

/// Section boundary found in a comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Begin(Authority),
    End(Authority),
}

impl Marker {
    fn parse(comment: &str) -> Option<Self> {
        match comment.trim() {
            "===BEGIN ICANN DOMAINS===" => Some(Marker::Begin(Authority::Icann)),
            "===END ICANN DOMAINS===" => Some(Marker::End(Authority::Icann)),
            "===BEGIN PRIVATE DOMAINS===" => Some(Marker::Begin(Authority::Private)),
            "===END PRIVATE DOMAINS===" => Some(Marker::End(Authority::Private)),
            _ => None,
        }
    }
}

/// Suffix list text parser.
pub struct ListParser;

impl ListParser {
    /// Parse every rule in `text`, failing on the first bad line.
    pub fn parse(text: &str) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        let mut section: Option<Authority> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_start_matches('\u{feff}').trim();

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix(COMMENT) {
                match Marker::parse(comment) {
                    Some(Marker::Begin(authority)) => {
                        if section.is_some() {
                            return Err(Error::UnbalancedSection {
                                line: line_no,
                                marker: line.to_string(),
                            });
                        }
                        section = Some(authority);
                    }
                    Some(Marker::End(authority)) => {
                        if section != Some(authority) {
                            return Err(Error::UnbalancedSection {
                                line: line_no,
                                marker: line.to_string(),
                            });
                        }
                        section = None;
                    }
                    None => {}
                }
                continue;
            }

            // Only the first whitespace-delimited token is the rule
            let token = line.split_whitespace().next().unwrap_or(line);
            let authority = section.unwrap_or(Authority::Icann);

            let rule = Rule::parse(token, authority).map_err(|reason| Error::MalformedRule {
                line: line_no,
                content: raw.to_string(),
                reason,
            })?;
            rules.push(rule);
        }

        if let Some(authority) = section {
            return Err(Error::UnterminatedSection(authority));
        }

        Ok(rules)
    }
}
