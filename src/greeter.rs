use std::io::{self, Write};

use log::{debug, error};

/// Text written by [`hello`], without the trailing newline.
pub const GREETING: &str = "Hello";

/// Print the greeting followed by a newline to standard output.
pub fn hello() {
    debug!("Writing greeting to stdout");
    if let Err(e) = write_hello(&mut io::stdout().lock()) {
        error!("Failed to write greeting: {}", e);
    }
}

/// Write the greeting followed by a newline to `out`.
pub fn write_hello<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)
}
