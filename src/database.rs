//! Immutable, indexed rule database with longest-match lookup.

use ahash::AHashMap;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::parser::ListParser;
use crate::rule::Rule;
use crate::rule_kind::RuleKinds;
use crate::{Authority, RuleKind};

/// Outcome of a longest-match lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// Number of trailing domain labels consumed by the winning rule
    pub suffix_label_count: usize,
    /// Partition of the winning rule, `Icann` when nothing matched
    pub authority: Authority,
    /// Whether a listed rule matched, as opposed to the implicit default
    pub listed: bool,
}

impl MatchResult {
    /// The implicit rule: unlisted TLDs are single-label ICANN suffixes.
    pub const DEFAULT: MatchResult = MatchResult {
        suffix_label_count: 1,
        authority: Authority::Icann,
        listed: false,
    };

    fn listed(suffix_label_count: usize, authority: Authority) -> Self {
        Self {
            suffix_label_count,
            authority,
            listed: true,
        }
    }
}

/// Rule kinds registered under one suffix key, per partition.
#[derive(Debug, Clone, Copy)]
struct Entry {
    kinds: [RuleKinds; 2],
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            kinds: [RuleKinds::empty(); 2],
        }
    }
}

impl Entry {
    fn get(&self, authority: Authority) -> RuleKinds {
        self.kinds[authority.index()]
    }
}

/// Rule counts by partition and kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub icann: usize,
    pub private: usize,
    pub exact: usize,
    pub wildcard: usize,
    pub exception: usize,
    pub max_depth: usize,
}

impl DatabaseStats {
    /// Total number of rules.
    pub fn total(&self) -> usize {
        self.icann + self.private
    }
}

/// RuleDatabase is the immutable, indexed form of a suffix list.
///
/// Rules are keyed by their dotted label sequence (`co.uk`), so checking
/// the last `L` labels of a domain is a single hash probe on a slice of the
/// domain itself. Each key records which rule kinds exist for it in the
/// ICANN and PRIVATE partitions separately.
///
/// Once built it is never mutated and can be shared freely across threads.
///
/// # Examples
/// ```
/// use k2psl::{Authority, Domain, RuleDatabase};
///
/// let db = RuleDatabase::parse("com\nuk\nco.uk\n").unwrap();
/// let m = db.lookup(&Domain::parse("www.example.co.uk").unwrap());
/// assert_eq!(m.suffix_label_count, 2);
/// assert_eq!(m.authority, Authority::Icann);
/// ```
#[derive(Debug, Default)]
pub struct RuleDatabase {
    index: AHashMap<Box<str>, Entry>,
    max_depth: usize,
    stats: DatabaseStats,
}

impl RuleDatabase {
    /// Build a database from suffix list text.
    pub fn parse(text: &str) -> Result<Self> {
        let rules = ListParser::parse(text)?;
        Ok(Self::from_rules(rules))
    }

    /// Build a database from already parsed rules.
    ///
    /// Duplicate rules are ignored.
    pub fn from_rules<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        let mut db = Self::default();

        for rule in rules {
            let flag = rule.kind().as_flag();
            let entry = db.index.entry(rule.key().into_boxed_str()).or_default();
            let kinds = &mut entry.kinds[rule.authority().index()];

            if kinds.contains(flag) {
                log::warn!("Ignoring duplicate {} rule: {}", rule.authority(), rule);
                continue;
            }
            kinds.insert(flag);

            match rule.authority() {
                Authority::Icann => db.stats.icann += 1,
                Authority::Private => db.stats.private += 1,
            }
            match rule.kind() {
                RuleKind::Exact => db.stats.exact += 1,
                RuleKind::Wildcard => db.stats.wildcard += 1,
                RuleKind::Exception => db.stats.exception += 1,
            }
            db.max_depth = db.max_depth.max(rule.depth());
        }
        db.stats.max_depth = db.max_depth;

        log::debug!(
            "Built rule database: {} ICANN rules, {} PRIVATE rules, max depth {}",
            db.stats.icann,
            db.stats.private,
            db.max_depth
        );

        db
    }

    /// Build a database from a reader over suffix list text.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Build a database from raw list bytes, gzip-compressed or not.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let data = if is_gzip(&data) {
            let mut decoder = GzDecoder::new(&data[..]);
            let mut out = Vec::new();
            decoder
                .read_to_end(&mut out)
                .map_err(|e| Error::Decompress(e.to_string()))?;
            out
        } else {
            data
        };

        let text = String::from_utf8(data).map_err(|_| Error::InvalidEncoding)?;
        Self::parse(&text)
    }

    /// Load a database from a local list file (`.dat` or `.dat.gz`).
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let db = Self::from_bytes(data)?;
        log::info!("Loaded {} suffix rules from {:?}", db.len(), path);
        Ok(db)
    }

    /// Longest-match lookup over both partitions.
    ///
    /// Exception rules win over everything else. Otherwise the match that
    /// consumes the most labels wins, ICANN before PRIVATE at equal depth.
    /// When nothing matches the implicit single-label ICANN rule applies.
    pub fn lookup(&self, domain: &Domain<'_>) -> MatchResult {
        let deepest = domain.len().min(self.max_depth);
        let mut best: Option<MatchResult> = None;

        for depth in (1..=deepest).rev() {
            let entry = self.index.get(domain.suffix(depth));

            if let Some(entry) = entry {
                for authority in Authority::ALL {
                    if entry.get(authority).contains(RuleKinds::EXCEPTION) {
                        return MatchResult::listed(depth - 1, authority);
                    }
                }
            }

            if best.is_some() {
                continue;
            }

            // A wildcard stored one label up covers this depth
            let parent = if depth > 1 {
                self.index.get(domain.suffix(depth - 1))
            } else {
                None
            };

            for authority in Authority::ALL {
                let exact = entry.is_some_and(|e| e.get(authority).contains(RuleKinds::EXACT));
                let wildcard =
                    parent.is_some_and(|e| e.get(authority).contains(RuleKinds::WILDCARD));
                if exact || wildcard {
                    best = Some(MatchResult::listed(depth, authority));
                    break;
                }
            }
        }

        best.unwrap_or(MatchResult::DEFAULT)
    }

    /// Number of distinct rules.
    pub fn len(&self) -> usize {
        self.stats.total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number of domain labels any rule can match.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of rules in one partition.
    pub fn count(&self, authority: Authority) -> usize {
        match authority {
            Authority::Icann => self.stats.icann,
            Authority::Private => self.stats.private,
        }
    }

    pub fn stats(&self) -> DatabaseStats {
        self.stats
    }
}

/// Check if data is gzip compressed.
fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}
