//! Adapter variants and the capability trait the resolver forwards to.
//!
//! The resolver never names a concrete adapter type after construction; it
//! holds a boxed [`TerminalAdapter`] and delegates the fixed operation set.
//! New variants are added by extending [`AdapterKind`] and its registry.

mod posix;
mod windows;
mod windows_ansicon;

pub use posix::PosixAdapter;
pub use windows::WindowsAdapter;
pub use windows_ansicon::WindowsAnsiconAdapter;

use std::fmt;
use std::io;

use crate::charset::Charset;
use crate::resolver::ResolveError;

/// Terminal output operations an adapter must support.
///
/// Default construction plus this trait is the whole contract the resolver
/// relies on; everything else an adapter does is its own business.
pub trait TerminalAdapter: Send {
    /// Which variant this adapter is.
    fn kind(&self) -> AdapterKind;

    /// The charset currently assigned to this adapter.
    fn charset(&self) -> &dyn Charset;

    /// Replace the assigned charset.
    fn set_charset(&mut self, charset: Box<dyn Charset>);

    /// Current terminal dimensions as (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Write text to the terminal.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;
}

/// Identifier for a concrete adapter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// ANSI-capable terminal on a POSIX host.
    Posix,
    /// Native Windows console, no escape-code interpretation assumed.
    Windows,
    /// Windows console wrapped by ANSICON.
    WindowsAnsicon,
}

impl AdapterKind {
    /// Resolve a caller-supplied identifier to an adapter kind.
    ///
    /// Accepts a fully-qualified path (`termadapt::adapter::Posix`), a path
    /// relative to the crate root (`adapter::Posix`), or a bare variant name
    /// (`Posix`, case-insensitive, `-`/`_` tolerated).
    pub fn resolve(name: &str) -> Result<Self, ResolveError> {
        let bare = strip_namespace(name, "adapter")
            .ok_or_else(|| ResolveError::UnknownAdapter(name.to_string()))?;
        match bare.to_lowercase().replace(['-', '_'], "").as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            "windowsansicon" => Ok(Self::WindowsAnsicon),
            _ => Err(ResolveError::UnknownAdapter(name.to_string())),
        }
    }

    /// Construct the adapter this kind names, with its default charset.
    pub fn construct(self) -> Box<dyn TerminalAdapter> {
        match self {
            Self::Posix => Box::new(PosixAdapter::new()),
            Self::Windows => Box::new(WindowsAdapter::new()),
            Self::WindowsAnsicon => Box::new(WindowsAnsiconAdapter::new()),
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
            Self::WindowsAnsicon => "windows-ansicon",
        };
        f.write_str(name)
    }
}

/// Reduce a possibly-qualified identifier to its bare variant name.
///
/// `segment` is the namespace the bare form is relative to (`adapter` or
/// `charset`). Returns `None` when the path is qualified against a different
/// namespace, or when an absolute/crate-qualified path skips the namespace
/// and addresses the root directly.
pub(crate) fn strip_namespace<'a>(name: &'a str, segment: &str) -> Option<&'a str> {
    let name = name.trim();
    let (absolute, name) = match name.strip_prefix("::") {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    let (crate_qualified, name) = match name.strip_prefix("termadapt::") {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    // An absolute path must name this crate
    if absolute && !crate_qualified {
        return None;
    }
    match name.split_once("::") {
        // Qualified form must address the expected namespace
        Some((ns, bare)) if ns == segment && !bare.contains("::") => Some(bare),
        Some(_) => None,
        // Nothing lives at the crate root; only the bare form may omit the
        // namespace
        None if crate_qualified => None,
        None => Some(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_names() {
        assert_eq!(AdapterKind::resolve("Posix").unwrap(), AdapterKind::Posix);
        assert_eq!(AdapterKind::resolve("windows").unwrap(), AdapterKind::Windows);
        assert_eq!(
            AdapterKind::resolve("windows-ansicon").unwrap(),
            AdapterKind::WindowsAnsicon
        );
        assert_eq!(
            AdapterKind::resolve("Windows_Ansicon").unwrap(),
            AdapterKind::WindowsAnsicon
        );
    }

    #[test]
    fn test_resolve_qualified_names() {
        assert_eq!(
            AdapterKind::resolve("adapter::Posix").unwrap(),
            AdapterKind::Posix
        );
        assert_eq!(
            AdapterKind::resolve("termadapt::adapter::WindowsAnsicon").unwrap(),
            AdapterKind::WindowsAnsicon
        );
        assert_eq!(
            AdapterKind::resolve("::termadapt::adapter::Windows").unwrap(),
            AdapterKind::Windows
        );
    }

    #[test]
    fn test_resolve_unknown_fails() {
        assert!(matches!(
            AdapterKind::resolve("DoesNotExist"),
            Err(ResolveError::UnknownAdapter(_))
        ));
        assert!(AdapterKind::resolve("charset::Posix").is_err());
        assert!(AdapterKind::resolve("other_crate::adapter::Posix").is_err());
    }

    #[test]
    fn test_resolve_rejects_root_level_paths() {
        // Absolute and crate-qualified paths must go through the namespace;
        // nothing constructible lives at the root
        assert!(AdapterKind::resolve("::Posix").is_err());
        assert!(AdapterKind::resolve("::adapter::Posix").is_err());
        assert!(AdapterKind::resolve("termadapt::Posix").is_err());
    }

    #[test]
    fn test_construct_matches_kind() {
        for kind in [
            AdapterKind::Posix,
            AdapterKind::Windows,
            AdapterKind::WindowsAnsicon,
        ] {
            assert_eq!(kind.construct().kind(), kind);
        }
    }

    #[test]
    fn test_default_charsets() {
        assert_eq!(AdapterKind::Posix.construct().charset().name(), "utf8");
        assert_eq!(
            AdapterKind::Windows.construct().charset().name(),
            "ascii-extended"
        );
        assert_eq!(
            AdapterKind::WindowsAnsicon.construct().charset().name(),
            "ascii-extended"
        );
    }

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace("Posix", "adapter"), Some("Posix"));
        assert_eq!(strip_namespace("adapter::Posix", "adapter"), Some("Posix"));
        assert_eq!(
            strip_namespace("termadapt::adapter::Posix", "adapter"),
            Some("Posix")
        );
        assert_eq!(strip_namespace("charset::Posix", "adapter"), None);
        assert_eq!(strip_namespace("a::b::c::Posix", "adapter"), None);
        assert_eq!(strip_namespace("::Posix", "adapter"), None);
        assert_eq!(strip_namespace("termadapt::Posix", "adapter"), None);
    }
}
