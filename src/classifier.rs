//! Suffix classification on top of the rule database.

use std::borrow::Cow;

use crate::database::RuleDatabase;
use crate::domain::{fold_case, normalize_host, Domain};
use crate::output::{Classification, OutputKind, OutputValue};

/// Classifier derives the per-host results from database lookups.
///
/// The per-output methods take a name without a port and match it
/// case-insensitively. A name that is already lower case is answered with
/// slices of it; otherwise the result is an owned lower-case string.
/// [`Classifier::classify`] and [`Classifier::evaluate`] accept a raw host
/// token and normalize it first.
///
/// # Examples
/// ```
/// use k2psl::{Classifier, RuleDatabase};
///
/// let db = RuleDatabase::parse(
///     "// ===BEGIN ICANN DOMAINS===\ncom\n// ===END ICANN DOMAINS===\n\
///      // ===BEGIN PRIVATE DOMAINS===\nblogspot.com\n// ===END PRIVATE DOMAINS===\n",
/// )
/// .unwrap();
/// let classifier = Classifier::new(&db);
///
/// assert_eq!(classifier.domain_suffix("foo.blogspot.com"), "blogspot.com");
/// assert_eq!(classifier.public_suffix("Foo.BlogSpot.com"), "com");
/// assert!(!classifier.is_icann("foo.blogspot.com"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    db: &'a RuleDatabase,
}

impl<'a> Classifier<'a> {
    pub fn new(db: &'a RuleDatabase) -> Self {
        Self { db }
    }

    /// Whether the overall longest match is an ICANN rule (or the implicit
    /// default). Invalid names are never ICANN.
    pub fn is_icann(&self, domain: &str) -> bool {
        self.icann_of(&fold_case(domain))
    }

    /// Longest matching suffix regardless of authority.
    pub fn domain_suffix<'d>(&self, domain: &'d str) -> Cow<'d, str> {
        with_folded(domain, |name| self.domain_suffix_of(name))
    }

    /// Longest matching ICANN suffix.
    ///
    /// When the longest match is a private rule, its leftmost label is peeled
    /// off and the rest of the matched suffix is looked up again, until an
    /// ICANN match turns up or a single private label is left.
    pub fn public_suffix<'d>(&self, domain: &'d str) -> Cow<'d, str> {
        with_folded(domain, |name| self.public_suffix_of(name))
    }

    /// Compute all five results for a raw host token.
    pub fn classify(&self, raw_host: &str) -> Classification {
        self.classify_name(&normalize_host(raw_host))
    }

    /// Compute all five results for an already normalized name.
    pub fn classify_name(&self, name: &str) -> Classification {
        Classification {
            is_icann: self.icann_of(name),
            public_suffix: self.public_suffix_of(name).to_string(),
            domain_suffix: self.domain_suffix_of(name).to_string(),
            registered_domain: self.registered_domain_of(name).to_string(),
            public_registered_domain: self.public_registered_domain_of(name).to_string(),
        }
    }

    /// Compute a single result for a raw host token.
    pub fn evaluate(&self, raw_host: &str, kind: OutputKind) -> OutputValue {
        let host = normalize_host(raw_host);
        match kind {
            OutputKind::IsIcann => OutputValue::Bool(self.icann_of(&host)),
            OutputKind::PublicSuffix => OutputValue::Text(self.public_suffix_of(&host).to_string()),
            OutputKind::DomainSuffix => OutputValue::Text(self.domain_suffix_of(&host).to_string()),
            OutputKind::RegisteredDomain => {
                OutputValue::Text(self.registered_domain_of(&host).to_string())
            }
            OutputKind::PublicRegisteredDomain => {
                OutputValue::Text(self.public_registered_domain_of(&host).to_string())
            }
        }
    }

    // The `_of` variants below expect a lower-case name.

    pub(crate) fn icann_of(&self, name: &str) -> bool {
        match Domain::parse(name) {
            Some(d) => self.db.lookup(&d).authority.is_icann(),
            None => false,
        }
    }

    pub(crate) fn domain_suffix_of<'n>(&self, name: &'n str) -> &'n str {
        match Domain::parse(name) {
            Some(d) => d.suffix(self.db.lookup(&d).suffix_label_count),
            None => "",
        }
    }

    pub(crate) fn public_suffix_of<'n>(&self, name: &'n str) -> &'n str {
        let mut probe = match Domain::parse(name) {
            Some(d) => d,
            None => return "",
        };

        loop {
            let result = self.db.lookup(&probe);
            let matched = probe.suffix(result.suffix_label_count);

            if result.authority.is_icann() {
                return matched;
            }

            // Peel the matched private suffix, not the original domain
            let rest = match matched.split_once('.') {
                Some((_, rest)) => rest,
                None => return "",
            };
            probe = match Domain::parse(rest) {
                Some(d) => d,
                None => return "",
            };
        }
    }
}

/// Run `f` over the lower-case form of `domain`, borrowing when no case
/// folding was needed.
pub(crate) fn with_folded<'d, F>(domain: &'d str, f: F) -> Cow<'d, str>
where
    F: for<'n> FnOnce(&'n str) -> &'n str,
{
    match fold_case(domain) {
        Cow::Borrowed(name) => Cow::Borrowed(f(name)),
        Cow::Owned(name) => Cow::Owned(f(&name).to_string()),
    }
}
