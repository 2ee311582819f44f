//! Charset variants an adapter can render with.
//!
//! Charsets are opaque to the resolver: it only ever constructs one and hands
//! it to the adapter. The trait exposes the activation escape sequences some
//! terminals need (DEC Special Graphics); everything else lives behind the
//! adapter.

use crate::resolver::ResolveError;

/// A glyph/encoding table an adapter renders symbols with.
pub trait Charset: Send {
    /// Human-readable charset name.
    fn name(&self) -> &'static str;

    /// Escape sequence that switches the terminal into this charset.
    fn activate(&self) -> &'static str {
        ""
    }

    /// Escape sequence that switches the terminal back out.
    fn deactivate(&self) -> &'static str {
        ""
    }
}

/// Identifier for a concrete charset variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharsetKind {
    Ascii,
    AsciiExtended,
    Utf8,
    Utf8Heavy,
    DecSg,
}

impl CharsetKind {
    /// Resolve a caller-supplied identifier to a charset kind.
    ///
    /// Accepts a fully-qualified path (`termadapt::charset::Utf8`), a path
    /// relative to the crate root (`charset::Utf8`), or a bare variant name
    /// (`Utf8`, case-insensitive, `-`/`_` tolerated).
    pub fn resolve(name: &str) -> Result<Self, ResolveError> {
        let bare = crate::adapter::strip_namespace(name, "charset")
            .ok_or_else(|| ResolveError::UnknownCharset(name.to_string()))?;
        match bare.to_lowercase().replace(['-', '_'], "").as_str() {
            "ascii" => Ok(Self::Ascii),
            "asciiextended" => Ok(Self::AsciiExtended),
            "utf8" => Ok(Self::Utf8),
            "utf8heavy" => Ok(Self::Utf8Heavy),
            "decsg" => Ok(Self::DecSg),
            _ => Err(ResolveError::UnknownCharset(name.to_string())),
        }
    }

    /// Construct the charset this kind names.
    pub fn construct(self) -> Box<dyn Charset> {
        match self {
            Self::Ascii => Box::new(Ascii),
            Self::AsciiExtended => Box::new(AsciiExtended),
            Self::Utf8 => Box::new(Utf8),
            Self::Utf8Heavy => Box::new(Utf8Heavy),
            Self::DecSg => Box::new(DecSg),
        }
    }
}

/// Plain 7-bit ASCII.
#[derive(Debug, Default)]
pub struct Ascii;

impl Charset for Ascii {
    fn name(&self) -> &'static str {
        "ascii"
    }
}

/// ASCII plus the CP437 extended range.
#[derive(Debug, Default)]
pub struct AsciiExtended;

impl Charset for AsciiExtended {
    fn name(&self) -> &'static str {
        "ascii-extended"
    }
}

/// UTF-8 with light box-drawing glyphs.
#[derive(Debug, Default)]
pub struct Utf8;

impl Charset for Utf8 {
    fn name(&self) -> &'static str {
        "utf8"
    }
}

/// UTF-8 with heavy box-drawing glyphs.
#[derive(Debug, Default)]
pub struct Utf8Heavy;

impl Charset for Utf8Heavy {
    fn name(&self) -> &'static str {
        "utf8-heavy"
    }
}

/// DEC Special Graphics; requires terminal charset switching.
#[derive(Debug, Default)]
pub struct DecSg;

impl Charset for DecSg {
    fn name(&self) -> &'static str {
        "decsg"
    }

    fn activate(&self) -> &'static str {
        "\x1b(0"
    }

    fn deactivate(&self) -> &'static str {
        "\x1b(B"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_names() {
        assert_eq!(CharsetKind::resolve("Utf8").unwrap(), CharsetKind::Utf8);
        assert_eq!(CharsetKind::resolve("utf-8").unwrap(), CharsetKind::Utf8);
        assert_eq!(
            CharsetKind::resolve("ascii_extended").unwrap(),
            CharsetKind::AsciiExtended
        );
        assert_eq!(CharsetKind::resolve("DECSG").unwrap(), CharsetKind::DecSg);
    }

    #[test]
    fn test_resolve_qualified_names() {
        assert_eq!(
            CharsetKind::resolve("charset::Utf8Heavy").unwrap(),
            CharsetKind::Utf8Heavy
        );
        assert_eq!(
            CharsetKind::resolve("termadapt::charset::Ascii").unwrap(),
            CharsetKind::Ascii
        );
    }

    #[test]
    fn test_resolve_unknown_fails() {
        assert!(matches!(
            CharsetKind::resolve("Klingon"),
            Err(ResolveError::UnknownCharset(_))
        ));
        // Wrong namespace segment is not a charset path
        assert!(CharsetKind::resolve("adapter::Utf8").is_err());
        // Absolute bare names address the root, which names nothing
        assert!(CharsetKind::resolve("::Utf8").is_err());
    }

    #[test]
    fn test_only_decsg_switches_charsets() {
        for kind in [
            CharsetKind::Ascii,
            CharsetKind::AsciiExtended,
            CharsetKind::Utf8,
            CharsetKind::Utf8Heavy,
        ] {
            assert!(kind.construct().activate().is_empty());
        }
        let decsg = CharsetKind::DecSg.construct();
        assert_eq!(decsg.activate(), "\x1b(0");
        assert_eq!(decsg.deactivate(), "\x1b(B");
    }
}
