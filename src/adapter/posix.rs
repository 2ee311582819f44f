//! ANSI terminal adapter for POSIX hosts.

use std::io::{self, Write};

use crate::adapter::{AdapterKind, TerminalAdapter};
use crate::charset::{Charset, Utf8};

/// Adapter for ANSI-capable terminals (the default on anything non-Windows).
pub struct PosixAdapter {
    charset: Box<dyn Charset>,
}

impl PosixAdapter {
    pub fn new() -> Self {
        Self {
            charset: Box::new(Utf8),
        }
    }
}

impl Default for PosixAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalAdapter for PosixAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Posix
    }

    fn charset(&self) -> &dyn Charset {
        self.charset.as_ref()
    }

    fn set_charset(&mut self, charset: Box<dyn Charset>) {
        self.charset = charset;
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        // ED (erase display) + CUP (cursor home)
        self.write("\x1b[2J\x1b[H")
    }
}
