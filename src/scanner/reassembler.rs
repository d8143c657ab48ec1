use std::io::{self, BufRead};

/// Column at which the compiler hard-wraps its transcript (pdfTeX's
/// max_print_line). Observed variants use 78 or 79; tunable per instance.
pub const DEFAULT_WRAP_COLUMN: usize = 79;

/// Joins physical lines that the compiler hard-wrapped at a fixed column
/// back into one logical line.
pub struct Reassembler<R> {
    reader: R,
    wrap_column: usize,
}

impl<R: BufRead> Reassembler<R> {
    pub fn new(reader: R) -> Self {
        Self::with_wrap_column(reader, DEFAULT_WRAP_COLUMN)
    }

    pub fn with_wrap_column(reader: R, wrap_column: usize) -> Self {
        Self { reader, wrap_column }
    }

    /// Next logical line, or `None` at end of stream.
    ///
    /// A physical line whose trailing-whitespace-trimmed length reaches the
    /// wrap column is assumed to have been wrapped mid-token and is
    /// concatenated (no separator) with the following physical lines until
    /// one falls short of the column. A genuine line exactly at the column
    /// is still joined; that approximation is inherent to the format.
    pub fn next_logical(&mut self) -> io::Result<Option<String>> {
        let mut logical = String::new();
        let mut read_any = false;

        loop {
            let mut physical = String::new();
            let n = self.reader.read_line(&mut physical)?;
            if n == 0 {
                // End of stream; mid-join we return what was accumulated.
                return Ok(if read_any { Some(logical) } else { None });
            }
            read_any = true;

            while physical.ends_with('\n') || physical.ends_with('\r') {
                physical.pop();
            }

            let stripped = physical.trim_end();
            if stripped.len() >= self.wrap_column {
                logical.push_str(stripped);
                continue;
            }

            logical.push_str(&physical);
            return Ok(Some(logical));
        }
    }
}
