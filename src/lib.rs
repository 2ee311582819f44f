//! termadapt - runtime terminal adapter resolution
//!
//! termadapt picks the terminal-output adapter that fits the current
//! execution environment and hands out one shared instance per process.
//! Callers write through the resolver without knowing whether the output
//! goes to an ANSI terminal, a bare Windows console, or a console wrapped
//! by ANSICON.
//!
//! # Features
//!
//! - **Environment probing**: interactive session, Windows host (build fact
//!   or `OS` variable), ANSICON wrapper presence
//! - **Decision table**: wrapper beats plain Windows, POSIX is the fallback,
//!   non-interactive sessions get no adapter at all
//! - **Overrides**: force an adapter and/or charset on first resolution,
//!   by enum or by validated string identifier
//! - **Forwarding facade**: `write`/`write_line`/`clear`/`size` on the
//!   resolver itself, resolving lazily on first use
//!
//! # Quick start
//!
//! ```no_run
//! use termadapt::Resolver;
//!
//! let resolver = Resolver::system();
//! if let Some(kind) = resolver.select_adapter_kind() {
//!     println!("would use the {kind} adapter");
//! }
//! ```

pub mod adapter;
pub mod charset;
pub mod config;
pub mod env;
pub mod resolver;

pub use adapter::{AdapterKind, PosixAdapter, TerminalAdapter, WindowsAdapter, WindowsAnsiconAdapter};
pub use charset::{Charset, CharsetKind};
pub use config::Config;
pub use env::{Environment, SystemEnvironment};
pub use resolver::{ResolveError, Resolver, SharedAdapter};
