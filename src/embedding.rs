//! Binary embedding file parser.
//!
//! Reads word vectors in the dict2vec binary dump format. The file opens
//! with a fixed 10-byte header line `"<word_count> <dimension>\n"`: a
//! 6-character decimal word count, one space, a 2-digit decimal dimension,
//! and a newline. Record 0 starts at byte 10. Each record is a
//! variable-length word token terminated by a single space byte, then
//! `dimension` little-endian IEEE-754 f32 components, then one separator
//! byte. The fixed header width is part of the format: files whose header
//! deviates from it are rejected rather than re-parsed loosely.

use crate::error::{EvalError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Exact byte length of the header line, including its newline.
const HEADER_LEN: usize = 10;

/// Width of the dimension field in the header, in ASCII digits.
const DIMENSION_DIGITS: usize = 2;

/// Placeholder word substituted for a token that is not valid UTF-8.
const UNKNOWN_TOKEN: &str = "unknown";

/// A word-embedding table parsed from one binary vector file.
///
/// Rows live in a dense row-major matrix in file order; the index maps each
/// word to the row reachable under that name. A word token that appears
/// twice keeps both rows in the matrix, but only the later row stays
/// reachable by name.
#[derive(Debug, Clone)]
pub struct Embedding {
    matrix: Vec<f32>,
    index: HashMap<String, usize>,
    word_count: usize,
    dimension: usize,
}

impl Embedding {
    /// Parse a binary embedding file.
    ///
    /// Fails on unreadable files, malformed headers, and truncation; a word
    /// token that fails UTF-8 decoding is replaced by `"unknown"` and the
    /// parse continues.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| EvalError::io(path, e))?;
        let mut reader = BufReader::new(file);

        let mut header = [0u8; HEADER_LEN];
        reader
            .read_exact(&mut header)
            .map_err(|e| header_read_error(path, e))?;
        let (word_count, dimension) = parse_header(path, &header)?;

        let mut matrix = vec![0.0f32; word_count * dimension];
        let mut index = HashMap::with_capacity(word_count);
        let mut token = Vec::new();
        let mut float_buf = vec![0u8; dimension * 4];

        for row in 0..word_count {
            token.clear();
            let n = reader
                .read_until(b' ', &mut token)
                .map_err(|e| EvalError::io(path, e))?;
            if n == 0 || token.last() != Some(&b' ') {
                return Err(EvalError::TruncatedFile {
                    path: path.to_path_buf(),
                    reason: format!("end of file inside the word token of record {row}"),
                });
            }
            let word = match std::str::from_utf8(&token[..n - 1]) {
                Ok(text) => text.to_string(),
                // Undecodable token: keep the row, file it under the
                // placeholder word.
                Err(_) => UNKNOWN_TOKEN.to_string(),
            };
            index.insert(word, row);

            reader
                .read_exact(&mut float_buf)
                .map_err(|e| read_error(path, &format!("the vector of record {row}"), e))?;
            let values = &mut matrix[row * dimension..(row + 1) * dimension];
            for (value, bytes) in values.iter_mut().zip(float_buf.chunks_exact(4)) {
                *value = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            }

            // Record separator. A file may end right after the last
            // record's vector; end of file anywhere else is truncation.
            let mut separator = [0u8; 1];
            match reader.read_exact(&mut separator) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof && row + 1 == word_count => {}
                Err(e) => {
                    return Err(read_error(
                        path,
                        &format!("the separator of record {row}"),
                        e,
                    ));
                }
            }
        }

        debug!(
            "parsed {} words of dimension {} from {} ({} distinct)",
            word_count,
            dimension,
            path.display(),
            index.len()
        );

        Ok(Self {
            matrix,
            index,
            word_count,
            dimension,
        })
    }

    /// Number of vectors declared by the header.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Vector dimensionality.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of distinct words reachable by name.
    pub fn vocab_size(&self) -> usize {
        self.index.len()
    }

    /// Vector for a word, if present. Lookup is case-sensitive.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).and_then(|&row| self.row(row))
    }

    /// Matrix row by position, in file order.
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.word_count {
            return None;
        }
        Some(&self.matrix[row * self.dimension..(row + 1) * self.dimension])
    }

    /// Row index a word currently resolves to.
    pub fn row_index(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }
}

/// The header bytes are part of the fixed format: a file too short to hold
/// them has a malformed header, not a truncated record stream.
fn header_read_error(path: &Path, source: io::Error) -> EvalError {
    if source.kind() == io::ErrorKind::UnexpectedEof {
        EvalError::MalformedHeader {
            path: path.to_path_buf(),
            reason: format!("file ends before the {HEADER_LEN}-byte header line is complete"),
        }
    } else {
        EvalError::io(path, source)
    }
}

/// Map a read failure to truncation when the file simply ran out of bytes.
fn read_error(path: &Path, what: &str, source: io::Error) -> EvalError {
    if source.kind() == io::ErrorKind::UnexpectedEof {
        EvalError::TruncatedFile {
            path: path.to_path_buf(),
            reason: format!("end of file while reading {what}"),
        }
    } else {
        EvalError::io(path, source)
    }
}

/// Parse the fixed-width header. Width violations are format errors: the
/// record framing assumes records begin at byte 10, so a header of any
/// other shape must be rejected, not re-interpreted.
fn parse_header(path: &Path, header: &[u8; HEADER_LEN]) -> Result<(usize, usize)> {
    let malformed = |reason: String| EvalError::MalformedHeader {
        path: path.to_path_buf(),
        reason,
    };

    if header[HEADER_LEN - 1] != b'\n' {
        return Err(malformed(format!(
            "header line is not exactly {HEADER_LEN} bytes (missing terminating newline)"
        )));
    }
    let line = std::str::from_utf8(&header[..HEADER_LEN - 1])
        .map_err(|_| malformed("header is not ASCII text".to_string()))?;
    let (count_field, dimension_field) = line
        .split_once(' ')
        .ok_or_else(|| malformed("header has no space separator".to_string()))?;
    if dimension_field.len() != DIMENSION_DIGITS {
        return Err(malformed(format!(
            "dimension field '{dimension_field}' is not exactly {DIMENSION_DIGITS} digits"
        )));
    }
    let word_count: usize = count_field
        .parse()
        .map_err(|_| malformed(format!("cannot parse word count '{count_field}'")))?;
    let dimension: usize = dimension_field
        .parse()
        .map_err(|_| malformed(format!("cannot parse dimension '{dimension_field}'")))?;
    if word_count == 0 || dimension == 0 {
        return Err(malformed(
            "word count and dimension must be positive".to_string(),
        ));
    }

    Ok((word_count, dimension))
}
