//! Core utilities and shared types
//!
//! - `clock`: Injectable time source for commit timestamps
//! - `PagerWriter`: `Write` adapter over the minus pager for long listings

pub mod clock;

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. Long listings
/// such as the command reference are written through it when stdout is a
/// terminal.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Print `text` through the pager on a terminal, or straight to stdout otherwise
pub fn page_or_print(text: &str) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        return Ok(stdout.flush()?);
    }

    let mut writer = PagerWriter::new(Pager::new());
    writer.write_all(text.as_bytes())?;
    minus::page_all(writer.pager().clone())?;

    Ok(())
}
