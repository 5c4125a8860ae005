//! Lazy reader for FROSTT coordinate files.
//!
//! A `.tns` file is line-oriented text: comment lines start with `#`,
//! every other line is one non-zero entry as whitespace-separated tokens.
//! Files with a trailing `.gz` extension are decompressed transparently;
//! the consumer sees the same token stream either way.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{FrosttError, Result};

/// One non-comment line of a tensor file, split into tokens.
///
/// The last token is the stored value; the preceding tokens are the
/// 1-based indices of the entry. Token counts are not validated here;
/// the statistics accumulator decides what to do with short lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source file (comments included).
    pub line: u64,
    /// Whitespace-separated tokens of the line.
    pub tokens: Vec<String>,
}

impl Record {
    /// Tensor order implied by this record: token count minus one,
    /// saturating at zero for empty lines.
    #[must_use]
    pub fn order(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// The index tokens (everything but the value).
    #[must_use]
    pub fn indices(&self) -> &[String] {
        &self.tokens[..self.order()]
    }

    /// The value token, if the line had any tokens at all.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }
}

/// Forward-only iterator over the records of a `.tns` / `.tns.gz` file.
///
/// The file handle is owned by the reader and released on drop, so
/// stopping iteration early still closes the file.
pub struct TnsReader {
    lines: Lines<Box<dyn BufRead>>,
    line_no: u64,
}

// The boxed line iterator has no Debug impl, so derive is not an option.
impl fmt::Debug for TnsReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TnsReader")
            .field("line_no", &self.line_no)
            .finish_non_exhaustive()
    }
}

impl TnsReader {
    /// Open a tensor file, selecting gzip decompression when the path
    /// ends in `.gz`.
    ///
    /// # Errors
    ///
    /// Returns [`FrosttError::Io`] when the path does not exist or
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self {
            lines: reader.lines(),
            line_no: 0,
        })
    }
}

impl Iterator for TnsReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(FrosttError::Io(e))),
            };
            self.line_no += 1;

            if line.starts_with('#') {
                continue;
            }

            let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
            return Some(Ok(Record {
                line: self.line_no,
                tokens,
            }));
        }
    }
}
