//! Adapter resolution and singleton lifecycle.
//!
//! This module is the single access point for obtaining a terminal adapter:
//! it probes the execution environment, walks the decision table, constructs
//! the matching adapter exactly once per resolver, and forwards output
//! operations so callers never have to hold an adapter reference themselves.
//!
//! # Quick start
//!
//! ```no_run
//! use termadapt::Resolver;
//!
//! let resolver = Resolver::system();
//! resolver.write_line("hello from whichever adapter fits this terminal")?;
//! # Ok::<(), termadapt::ResolveError>(())
//! ```

use std::io;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};

use crate::adapter::{AdapterKind, TerminalAdapter};
use crate::charset::CharsetKind;
use crate::env::{Environment, SystemEnvironment};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("unknown terminal adapter \"{0}\"")]
    UnknownAdapter(String),

    #[error("unknown terminal charset \"{0}\"")]
    UnknownCharset(String),

    #[error("cannot create terminal adapter - not running in an interactive session")]
    NoAdapterAvailable,

    #[error("adapter operation failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// The process-wide adapter instance, shareable across callers.
pub type SharedAdapter = Arc<Mutex<Box<dyn TerminalAdapter>>>;

/// Resolves and owns the terminal adapter for one process.
///
/// The environment is injected so the decision logic stays testable; real
/// callers use [`Resolver::system`] or the shared [`Resolver::global`].
pub struct Resolver<E: Environment = SystemEnvironment> {
    env: E,
    instance: OnceCell<SharedAdapter>,
}

impl Resolver<SystemEnvironment> {
    /// Resolver over the real process environment.
    pub fn system() -> Self {
        Self::new(SystemEnvironment)
    }

    /// The shared process-wide resolver.
    ///
    /// One adapter instance per process, matching the classic static
    /// entry-point ergonomics while keeping the state in one explicit value.
    pub fn global() -> &'static Self {
        static GLOBAL: Lazy<Resolver> = Lazy::new(Resolver::system);
        &GLOBAL
    }
}

impl Default for Resolver<SystemEnvironment> {
    fn default() -> Self {
        Self::system()
    }
}

impl<E: Environment> Resolver<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            instance: OnceCell::new(),
        }
    }

    /// Whether the process is running in an interactive terminal session.
    pub fn is_interactive_session(&self) -> bool {
        self.env.is_interactive()
    }

    /// Whether the host OS is in the Windows family.
    ///
    /// True when either the build target is Windows or the `OS` environment
    /// variable starts with "windows" (case-insensitive). Missing or unknown
    /// signals mean false.
    pub fn is_host_windows(&self) -> bool {
        if self.env.os_family_is_windows() {
            return true;
        }
        self.env
            .var("OS")
            .map(|value| {
                let value = value.trim();
                value
                    .get(..7)
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case("windows"))
            })
            .unwrap_or(false)
    }

    /// Whether the ANSICON wrapper is present. Presence is the signal; the
    /// variable's value is ignored.
    pub fn has_terminal_emulation_wrapper(&self) -> bool {
        self.env.var("ANSICON").is_some()
    }

    /// Pick the adapter kind that best matches the current environment.
    ///
    /// Returns `None` outside an interactive session, where terminal control
    /// codes are meaningless. The chain is ordered: the interactive check
    /// gates everything, and Windows-with-wrapper beats plain Windows.
    pub fn select_adapter_kind(&self) -> Option<AdapterKind> {
        if !self.is_interactive_session() {
            debug!("not an interactive session, no adapter selected");
            return None;
        }

        let kind = if self.is_host_windows() {
            if self.has_terminal_emulation_wrapper() {
                AdapterKind::WindowsAnsicon
            } else {
                AdapterKind::Windows
            }
        } else {
            AdapterKind::Posix
        };

        debug!(adapter = %kind, "selected adapter for environment");
        Some(kind)
    }

    /// The process adapter, resolving it on first use with no overrides.
    pub fn adapter(&self) -> Result<SharedAdapter> {
        self.adapter_with(None, None)
    }

    /// The process adapter, with optional overrides for the first resolution.
    ///
    /// Once an adapter has been constructed the cached instance is returned
    /// and both overrides are ignored. A failed resolution caches nothing, so
    /// a later call may still succeed.
    pub fn adapter_with(
        &self,
        force_adapter: Option<AdapterKind>,
        force_charset: Option<CharsetKind>,
    ) -> Result<SharedAdapter> {
        let shared = self.instance.get_or_try_init(|| {
            let kind = match force_adapter {
                Some(kind) => kind,
                None => self
                    .select_adapter_kind()
                    .ok_or(ResolveError::NoAdapterAvailable)?,
            };

            let mut adapter = kind.construct();
            if let Some(charset) = force_charset {
                adapter.set_charset(charset.construct());
            }

            info!(adapter = %kind, charset = adapter.charset().name(), "constructed terminal adapter");
            Ok::<_, ResolveError>(Arc::new(Mutex::new(adapter)))
        })?;

        Ok(Arc::clone(shared))
    }

    /// String-identifier boundary for overrides coming from CLI flags or
    /// configuration. Identifiers are validated against the known kinds
    /// before the typed path runs; see [`AdapterKind::resolve`] for the
    /// accepted forms.
    pub fn adapter_named(
        &self,
        force_adapter: Option<&str>,
        force_charset: Option<&str>,
    ) -> Result<SharedAdapter> {
        let force_adapter = force_adapter.map(AdapterKind::resolve).transpose()?;
        let force_charset = force_charset.map(CharsetKind::resolve).transpose()?;
        self.adapter_with(force_adapter, force_charset)
    }

    // --- Forwarding facade ------------------------------------------------
    //
    // Each call resolves with no overrides and delegates, so the resolver can
    // stand in for the adapter until first real use. Adapter errors pass
    // through unchanged.

    /// Write text through the resolved adapter.
    pub fn write(&self, text: &str) -> Result<()> {
        Ok(self.adapter()?.lock().write(text)?)
    }

    /// Write a line through the resolved adapter.
    pub fn write_line(&self, text: &str) -> Result<()> {
        Ok(self.adapter()?.lock().write_line(text)?)
    }

    /// Clear the screen through the resolved adapter.
    pub fn clear(&self) -> Result<()> {
        Ok(self.adapter()?.lock().clear()?)
    }

    /// Terminal dimensions reported by the resolved adapter.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(self.adapter()?.lock().size()?)
    }
}
