//! The three output lines.

use std::io::{self, Write};

use hello_quote::QuoteSource;
use hello_text::reverse_runes;

pub const GREETING: &str = "Hello, world.";

/// Printed reversed as the second line.
pub const REVERSE_INPUT: &str = "!oG ,olleH";

/// Write the greeting, the reversed literal, and the quotation, one per line.
pub fn write_greeting<W, Q>(out: &mut W, quotes: &Q) -> io::Result<()>
where
    W: Write,
    Q: QuoteSource + ?Sized,
{
    writeln!(out, "{GREETING}")?;
    writeln!(out, "{}", reverse_runes(REVERSE_INPUT))?;
    writeln!(out, "{}", quotes.hello())?;
    Ok(())
}
