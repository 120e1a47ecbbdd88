//! Process-wide engine and convenience API.

use once_cell::sync::OnceCell;
use std::path::Path;

use crate::engine::{EngineConfig, SuffixEngine};
use crate::error::{Error, Result};
use crate::output::{Classification, OutputKind, OutputValue};

/// Global engine, set once at startup
static GLOBAL_ENGINE: OnceCell<SuffixEngine> = OnceCell::new();

/// Install the process-wide engine.
///
/// Fails with [`Error::AlreadyInitialized`] on a second call; use
/// [`SuffixEngine::reload`] on [`global()`] to swap rules afterwards.
pub fn init_global(engine: SuffixEngine) -> Result<()> {
    GLOBAL_ENGINE
        .set(engine)
        .map_err(|_| Error::AlreadyInitialized)?;
    log::debug!("Initialized global suffix engine");
    Ok(())
}

/// Load a list file and install it as the process-wide engine.
pub fn init_global_from_path(path: &Path, config: EngineConfig) -> Result<()> {
    if is_initialized() {
        return Err(Error::AlreadyInitialized);
    }
    init_global(SuffixEngine::open_with_config(path, config)?)
}

/// Check if the global engine is initialized.
pub fn is_initialized() -> bool {
    GLOBAL_ENGINE.get().is_some()
}

/// The process-wide engine.
pub fn global() -> Result<&'static SuffixEngine> {
    GLOBAL_ENGINE.get().ok_or(Error::NotInitialized)
}

/// Classify a raw host with the global engine.
///
/// # Examples
/// ```ignore
/// use k2psl::classify;
///
/// let result = classify("sub.example.co.uk:8443")?;
/// println!("eTLD+1: {}", result.registered_domain);
/// ```
pub fn classify(raw_host: &str) -> Result<Classification> {
    Ok(global()?.classify(raw_host))
}

/// Compute one result for a raw host with the global engine.
pub fn evaluate(raw_host: &str, kind: OutputKind) -> Result<OutputValue> {
    Ok(global()?.evaluate(raw_host, kind))
}
