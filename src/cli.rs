use std::io::{self, Write};

use crate::rng::DEFAULT_SEED;
use crate::stream::OutputStream;

/// How many values the program emits.
pub const EMIT_COUNT: usize = 10;

/// The program recognizes no arguments; extra argv entries are ignored so the
/// output is identical however it is invoked.
pub fn run_with_args(_args: &[String]) -> i32 {
    let stdout = io::stdout();
    match write_sequence(&mut stdout.lock(), DEFAULT_SEED, EMIT_COUNT) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("write error: {err}");
            1
        }
    }
}

/// Write `count` outputs for `seed`, one decimal value per line.
pub fn write_sequence<W: Write>(out: &mut W, seed: u64, count: usize) -> io::Result<()> {
    for value in OutputStream::new(seed, count) {
        writeln!(out, "{value}")?;
    }
    out.flush()
}
