//! Per-request verdict lines.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes one admit/reject line for request number `index` (1-based).
pub fn print_verdict<W: Write>(
    writer: &mut W,
    index: u32,
    admitted: bool,
    supports_color: bool,
) -> io::Result<()> {
    let line = if admitted {
        format!("Request {} processed successfully.", index)
    } else {
        format!("Request {} rejected due to rate limiting.", index)
    };

    match (supports_color, admitted) {
        (true, true) => writeln!(writer, "{}", line.green()),
        (true, false) => writeln!(writer, "{}", line.red()),
        (false, _) => writeln!(writer, "{}", line),
    }
}
