//! K2PSL - A public suffix classification engine.
//!
//! Given a hostname and a public suffix list, this crate answers:
//!
//! - **`is_icann`**: whether the longest matching suffix is ICANN-managed
//! - **`domain_suffix`**: the longest matching suffix of any authority
//!   (`foo.blogspot.com` -> `blogspot.com`)
//! - **`public_suffix`**: the longest ICANN suffix, the eTLD
//!   (`foo.blogspot.com` -> `com`)
//! - **`registered_domain`**: the eTLD plus one label, the eTLD+1
//!   (`foo.blogspot.com` -> `blogspot.com`)
//! - **`public_registered_domain`**: the eTLD+1, but only when the longest
//!   match is ICANN-managed (`foo.blogspot.com` -> empty)
//!
//! # Quick Start
//!
//! ```
//! use k2psl::{Classifier, RuleDatabase};
//!
//! let db = RuleDatabase::parse(
//!     "// ===BEGIN ICANN DOMAINS===\ncom\nau\ncom.au\n// ===END ICANN DOMAINS===\n",
//! )
//! .unwrap();
//! let classifier = Classifier::new(&db);
//!
//! let result = classifier.classify("foo.bar.com.au:8443");
//! assert_eq!(result.public_suffix, "com.au");
//! assert_eq!(result.registered_domain, "bar.com.au");
//! ```
//!
//! # Hot Reload
//!
//! [`SuffixEngine`] keeps the database behind an atomic pointer so a fresh
//! list can be swapped in while lookups continue:
//!
//! ```ignore
//! use k2psl::{EngineConfig, SuffixEngine};
//! use std::path::Path;
//!
//! let engine = SuffixEngine::open_with_config(
//!     Path::new("public_suffix_list.dat"),
//!     EngineConfig::with_capacity(50_000),
//! )?;
//! let result = engine.classify("sub.example.co.uk");
//!
//! engine.reload(Path::new("public_suffix_list.new.dat"))?;
//! ```
//!
//! # Matching Rules
//!
//! 1. Exception rules (`!www.ck`) win and give their labels minus one
//! 2. Otherwise the rule consuming the most labels wins, where a wildcard
//!    (`*.ck`) consumes one label more than it lists
//! 3. With no match, the rightmost label is an ICANN suffix

mod authority;
mod error;
mod global;
mod rule_kind;

pub mod classifier;
pub mod database;
pub mod decompose;
pub mod domain;
pub mod engine;
pub mod output;
pub mod parser;
pub mod rule;

// Re-export core types
pub use authority::Authority;
pub use error::{Error, MalformedReason, Result};
pub use rule_kind::{RuleKind, RuleKinds};

pub use classifier::Classifier;
pub use database::{DatabaseStats, MatchResult, RuleDatabase};
pub use decompose::suffix_plus_one;
pub use domain::{normalize_host, Domain};
pub use engine::{CacheStats, EngineConfig, SuffixEngine};
pub use output::{Classification, OutputKind, OutputValue};

// Re-export global API functions
pub use global::{classify, evaluate, global, init_global, init_global_from_path, is_initialized};
