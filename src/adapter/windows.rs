//! Native Windows console adapter.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::adapter::{AdapterKind, TerminalAdapter};
use crate::charset::{AsciiExtended, Charset};

/// Adapter for the bare Windows console.
///
/// Makes no assumption about escape-code interpretation; screen clearing goes
/// through the console API (via crossterm) instead of ANSI sequences.
pub struct WindowsAdapter {
    charset: Box<dyn Charset>,
}

impl WindowsAdapter {
    pub fn new() -> Self {
        Self {
            charset: Box::new(AsciiExtended),
        }
    }
}

impl Default for WindowsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalAdapter for WindowsAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Windows
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
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}
