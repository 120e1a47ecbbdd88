//! Host normalization and domain label splitting.

use std::borrow::Cow;

/// Strip an optional `:port` from a raw host token and lower-case it.
///
/// The port split follows the usual host/port rules: `host:port` and
/// `[v6addr]:port` are split, while a token with no colon, more than one
/// colon outside brackets, or a bracketed address without a port is taken
/// as-is.
///
/// # Examples
/// ```
/// use k2psl::normalize_host;
///
/// assert_eq!(normalize_host("Example.COM:8080"), "example.com");
/// assert_eq!(normalize_host("[::1]:443"), "::1");
/// assert_eq!(normalize_host("::1"), "::1");
/// ```
pub fn normalize_host(raw: &str) -> String {
    let host = split_host_port(raw).unwrap_or(raw);
    host.to_lowercase()
}

/// Lower-case `name`, borrowing it when it has nothing to fold.
pub(crate) fn fold_case(name: &str) -> Cow<'_, str> {
    if name.chars().all(|c| c.to_lowercase().eq(std::iter::once(c))) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.to_lowercase())
    }
}

/// Split `host:port`, returning the host part. `None` when no port can be
/// parsed off the token.
fn split_host_port(raw: &str) -> Option<&str> {
    let colon = raw.rfind(':')?;
    let (host, port) = (&raw[..colon], &raw[colon + 1..]);

    if port.contains('[') || port.contains(']') {
        return None;
    }

    if let Some(inner) = host.strip_prefix('[') {
        // Bracketed host must close right before the port colon
        let inner = inner.strip_suffix(']')?;
        if inner.contains('[') || inner.contains(']') {
            return None;
        }
        return Some(inner);
    }

    if host.contains(':') || host.contains('[') || host.contains(']') {
        return None;
    }

    Some(host)
}

/// Domain is a normalized hostname split into its dot-separated labels.
///
/// Labels are kept as byte offsets into the original string so every suffix
/// handed out is a slice of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain<'a> {
    name: &'a str,
    /// Byte offset where each label starts, left to right
    starts: Vec<usize>,
}

impl<'a> Domain<'a> {
    /// Split a normalized name into labels.
    ///
    /// Returns `None` for an empty name or one with an empty label
    /// (`a..b`, `.com`, `com.`).
    pub fn parse(name: &'a str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let mut starts = Vec::with_capacity(4);
        let mut start = 0;
        for label in name.split('.') {
            if label.is_empty() {
                return None;
            }
            starts.push(start);
            start += label.len() + 1;
        }

        Some(Self { name, starts })
    }

    /// The full name.
    pub fn as_str(&self) -> &'a str {
        self.name
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Labels left to right as written.
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.name.split('.')
    }

    /// The last `count` labels joined with dots. Empty for zero; the whole
    /// name when `count` covers every label.
    pub fn suffix(&self, count: usize) -> &'a str {
        if count == 0 {
            return &self.name[self.name.len()..];
        }
        let n = self.starts.len();
        if count >= n {
            return self.name;
        }
        &self.name[self.starts[n - count]..]
    }
}
