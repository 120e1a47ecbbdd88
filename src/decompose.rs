//! Registered domain (eTLD+1) derivation.

use std::borrow::Cow;

use crate::classifier::{with_folded, Classifier};

/// Return `suffix` with one more label of `domain` prepended.
///
/// Empty when there is no label left of the suffix, or when the byte just
/// before the suffix is not a dot (the inputs do not line up).
///
/// # Examples
/// ```
/// use k2psl::suffix_plus_one;
///
/// assert_eq!(suffix_plus_one("a.b.example.co.uk", "co.uk"), "example.co.uk");
/// assert_eq!(suffix_plus_one("co.uk", "co.uk"), "");
/// ```
pub fn suffix_plus_one<'d>(domain: &'d str, suffix: &str) -> &'d str {
    if suffix.len() >= domain.len() {
        return "";
    }
    let i = domain.len() - suffix.len() - 1;
    if domain.as_bytes()[i] != b'.' {
        return "";
    }
    match domain[..i].rfind('.') {
        Some(dot) => &domain[dot + 1..],
        None => domain,
    }
}

impl Classifier<'_> {
    /// The public suffix plus one label.
    pub fn registered_domain<'d>(&self, domain: &'d str) -> Cow<'d, str> {
        with_folded(domain, |name| self.registered_domain_of(name))
    }

    /// The registered domain, but only when the unpeeled longest match is an
    /// ICANN rule.
    pub fn public_registered_domain<'d>(&self, domain: &'d str) -> Cow<'d, str> {
        with_folded(domain, |name| self.public_registered_domain_of(name))
    }

    pub(crate) fn registered_domain_of<'n>(&self, name: &'n str) -> &'n str {
        suffix_plus_one(name, self.public_suffix_of(name))
    }

    pub(crate) fn public_registered_domain_of<'n>(&self, name: &'n str) -> &'n str {
        if self.icann_of(name) {
            self.registered_domain_of(name)
        } else {
            ""
        }
    }
}
