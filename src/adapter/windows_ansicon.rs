//! Windows console adapter for sessions wrapped by ANSICON.

use std::io::{self, Write};

use crate::adapter::{AdapterKind, TerminalAdapter};
use crate::charset::{AsciiExtended, Charset};

/// Adapter for a Windows console running under the ANSICON wrapper.
///
/// ANSICON interprets ANSI escape codes on the native console, so this
/// behaves like the POSIX adapter for control sequences while keeping the
/// Windows charset defaults.
pub struct WindowsAnsiconAdapter {
    charset: Box<dyn Charset>,
}

impl WindowsAnsiconAdapter {
    pub fn new() -> Self {
        Self {
            charset: Box::new(AsciiExtended),
        }
    }
}

impl Default for WindowsAnsiconAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalAdapter for WindowsAnsiconAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::WindowsAnsicon
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
        stdout.write_all(b"\r\n")?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.write("\x1b[2J\x1b[H")
    }
}
