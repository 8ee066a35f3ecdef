//! Terminal size probing for auto-resize.
//!
//! The writer's output sink is asked for its file descriptor; if it has one and
//! the descriptor is a terminal, `TIOCGWINSZ` reports columns and rows.
//! Everything else falls back to 80x24.

use std::io::{self, Write};

use log::{debug, warn};

use crate::types::{FALLBACK_COLUMNS, FALLBACK_ROWS, RESERVED_ROWS};

/// A byte sink the writer can serialize frames into.
///
/// Sinks backed by a file descriptor report it so the terminal size can be
/// probed; in-memory sinks keep the default `None`.
pub trait TerminalOutput: Write {
    fn terminal_fd(&self) -> Option<i32> {
        None
    }
}

#[cfg(unix)]
mod fd_impls {
    use std::os::unix::io::AsRawFd;

    use super::TerminalOutput;

    impl TerminalOutput for std::io::Stdout {
        fn terminal_fd(&self) -> Option<i32> {
            Some(self.as_raw_fd())
        }
    }

    impl TerminalOutput for std::io::StdoutLock<'_> {
        fn terminal_fd(&self) -> Option<i32> {
            Some(self.as_raw_fd())
        }
    }

    impl TerminalOutput for std::io::Stderr {
        fn terminal_fd(&self) -> Option<i32> {
            Some(self.as_raw_fd())
        }
    }

    impl TerminalOutput for std::fs::File {
        fn terminal_fd(&self) -> Option<i32> {
            Some(self.as_raw_fd())
        }
    }
}

#[cfg(not(unix))]
mod fd_impls {
    use super::TerminalOutput;

    impl TerminalOutput for std::io::Stdout {}
    impl TerminalOutput for std::io::StdoutLock<'_> {}
    impl TerminalOutput for std::io::Stderr {}
    impl TerminalOutput for std::fs::File {}
}

impl TerminalOutput for Vec<u8> {}
impl TerminalOutput for io::Sink {}
impl TerminalOutput for io::Cursor<Vec<u8>> {}

impl<W: TerminalOutput> TerminalOutput for io::BufWriter<W> {
    fn terminal_fd(&self) -> Option<i32> {
        self.get_ref().terminal_fd()
    }
}

impl<W: TerminalOutput + ?Sized> TerminalOutput for &mut W {
    fn terminal_fd(&self) -> Option<i32> {
        (**self).terminal_fd()
    }
}

impl<W: TerminalOutput + ?Sized> TerminalOutput for Box<W> {
    fn terminal_fd(&self) -> Option<i32> {
        (**self).terminal_fd()
    }
}

/// Terminal `(columns, rows)` for `out`, or 80x24 if it cannot be queried.
pub fn terminal_size<O: TerminalOutput + ?Sized>(out: &O) -> (u16, u16) {
    let Some(fd) = out.terminal_fd() else {
        debug!("output has no file descriptor; assuming {FALLBACK_COLUMNS}x{FALLBACK_ROWS}");
        return (FALLBACK_COLUMNS, FALLBACK_ROWS);
    };
    match window_size(fd) {
        Some(size) => size,
        None => {
            warn!(
                "window size query failed for fd {fd}; assuming {FALLBACK_COLUMNS}x{FALLBACK_ROWS}"
            );
            (FALLBACK_COLUMNS, FALLBACK_ROWS)
        }
    }
}

/// Bitmap size that fills a `cols x rows` terminal.
///
/// Width is compressed by `symbol_wh_fraction` because a glyph is narrower
/// than it is tall; one row is kept free for input.
pub fn frame_size_for(cols: u16, rows: u16, symbol_wh_fraction: f64) -> (usize, usize) {
    let w = (cols as f64 * symbol_wh_fraction) as usize;
    let h = rows.saturating_sub(RESERVED_ROWS) as usize;
    (w, h)
}

/// Probe `out` and return the bitmap size that fills it.
pub fn output_frame_size<O: TerminalOutput + ?Sized>(
    out: &O,
    symbol_wh_fraction: f64,
) -> (usize, usize) {
    let (cols, rows) = terminal_size(out);
    frame_size_for(cols, rows, symbol_wh_fraction)
}

#[cfg(unix)]
fn window_size(fd: i32) -> Option<(u16, u16)> {
    // SAFETY: `winsize` is plain data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };
    if rc == -1 || ws.ws_col == 0 || ws.ws_row == 0 {
        return None;
    }
    Some((ws.ws_col, ws.ws_row))
}

#[cfg(not(unix))]
fn window_size(_fd: i32) -> Option<(u16, u16)> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sinks_fall_back_to_80x24() {
        assert_eq!(terminal_size(&Vec::<u8>::new()), (80, 24));
        assert_eq!(terminal_size(&io::sink()), (80, 24));
    }

    #[test]
    fn frame_size_reserves_a_row_and_compresses_width() {
        assert_eq!(frame_size_for(80, 24, 1.0), (80, 23));
        assert_eq!(frame_size_for(80, 24, 0.5), (40, 23));
        assert_eq!(frame_size_for(48, 0, 11.0 / 24.0), (22, 0));
    }

    #[test]
    fn fallback_frame_size_uses_default_ratio() {
        let (w, h) = output_frame_size(&Vec::<u8>::new(), 11.0 / 24.0);
        assert_eq!((w, h), (36, 23));
    }

    #[cfg(unix)]
    #[test]
    fn regular_file_is_not_a_terminal() {
        let file = tempfile_in_target();
        assert_eq!(terminal_size(&file), (80, 24));
    }

    #[cfg(unix)]
    fn tempfile_in_target() -> std::fs::File {
        let path = std::env::temp_dir().join(format!("term-raster-size-{}", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        file
    }
}
