//! Matrix Market reader
//!
//! The input boundary of the crate: turns a `.mtx` file into a
//! [`TripletBuffer`] ready for the CSR and HLL builders. Only the
//! coordinate format with real or pattern entries is supported, in the
//! general and symmetric variants. Unsupported banners fail before any
//! data line is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::MarketError;
use crate::matrix::TripletBuffer;

/// Flags decoded from the `%%MatrixMarket` banner line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Banner {
    pattern: bool,
    symmetric: bool,
}

fn parse_banner(line: &str) -> Result<Banner, MarketError> {
    let unsupported = || MarketError::UnsupportedFormat(line.trim().to_string());

    // "%%MatrixMarket matrix coordinate real general"
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 || !fields[0].eq_ignore_ascii_case("%%MatrixMarket") {
        return Err(unsupported());
    }

    if !fields[1].eq_ignore_ascii_case("matrix") || !fields[2].eq_ignore_ascii_case("coordinate") {
        return Err(unsupported());
    }

    let pattern = match fields[3].to_ascii_lowercase().as_str() {
        "real" => false,
        "pattern" => true,
        _ => return Err(unsupported()), // complex, integer
    };

    let symmetric = match fields[4].to_ascii_lowercase().as_str() {
        "general" => false,
        "symmetric" => true,
        _ => return Err(unsupported()), // skew-symmetric, hermitian
    };

    Ok(Banner { pattern, symmetric })
}

/// Reads a Matrix Market file into a triplet buffer.
///
/// Indices are converted from the format's 1-based convention to 0-based;
/// pattern entries get the implicit value 1.0; symmetric inputs are
/// expanded into explicit mirrored entries, so the returned buffer may
/// hold up to twice the declared nonzero count.
pub fn read_matrix_market<P: AsRef<Path>>(path: P) -> Result<TripletBuffer<f64>, MarketError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut lineno = 0usize;

    // Banner is the first non-blank line, always.
    let (banner_line, banner_text) =
        next_nonblank_line(&mut lines, &mut lineno)?.ok_or(MarketError::Parse {
            line: 0,
            msg: "empty file".to_string(),
        })?;
    if !banner_text.starts_with("%%") {
        return Err(MarketError::Parse {
            line: banner_line,
            msg: "missing %%MatrixMarket banner".to_string(),
        });
    }
    let banner = parse_banner(&banner_text)?;

    // Size line follows the comment block: "M N NZ".
    let (size_lineno, size_line) = loop {
        match next_nonblank_line(&mut lines, &mut lineno)? {
            Some((_, line)) if line.starts_with('%') => continue,
            Some(found) => break found,
            None => {
                return Err(MarketError::Parse {
                    line: lineno,
                    msg: "missing size line".to_string(),
                })
            }
        }
    };

    let dims = parse_fields::<usize>(&size_line, 3, size_lineno)?;
    let (n_rows, n_cols, declared_nz) = (dims[0], dims[1], dims[2]);

    // Worst case after symmetric expansion.
    let capacity = if banner.symmetric {
        2 * declared_nz
    } else {
        declared_nz
    };
    let mut triplets = TripletBuffer::with_capacity(n_rows, n_cols, capacity);

    for _ in 0..declared_nz {
        let (no, line) =
            next_nonblank_line(&mut lines, &mut lineno)?.ok_or(MarketError::Parse {
                line: lineno,
                msg: "unexpected end of file before all entries were read".to_string(),
            })?;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let expected = if banner.pattern { 2 } else { 3 };
        if fields.len() < expected {
            return Err(MarketError::Parse {
                line: no,
                msg: format!("expected {} fields, found {}", expected, fields.len()),
            });
        }

        let row: usize = parse_field(fields[0], no)?;
        let col: usize = parse_field(fields[1], no)?;
        if row == 0 || row > n_rows || col == 0 || col > n_cols {
            return Err(MarketError::Parse {
                line: no,
                msg: format!(
                    "entry ({}, {}) outside declared {}x{} shape",
                    row, col, n_rows, n_cols
                ),
            });
        }

        let val: f64 = if banner.pattern {
            1.0
        } else {
            parse_field(fields[2], no)?
        };

        triplets.push_expanded(row - 1, col - 1, val, banner.symmetric);
    }

    debug!(
        "read {}x{} matrix: {} declared entries, {} stored after expansion",
        n_rows,
        n_cols,
        declared_nz,
        triplets.len()
    );

    Ok(triplets)
}

fn next_nonblank_line<B: BufRead>(
    lines: &mut std::io::Lines<B>,
    lineno: &mut usize,
) -> Result<Option<(usize, String)>, MarketError> {
    for line in lines.by_ref() {
        *lineno += 1;
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some((*lineno, line)));
        }
    }
    Ok(None)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, MarketError> {
    field.parse().map_err(|_| MarketError::Parse {
        line,
        msg: format!("invalid field {:?}", field),
    })
}

fn parse_fields<T: std::str::FromStr>(
    line_text: &str,
    expected: usize,
    line: usize,
) -> Result<Vec<T>, MarketError> {
    let fields: Vec<&str> = line_text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(MarketError::Parse {
            line,
            msg: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    fields.iter().map(|f| parse_field(f, line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_banner_real_general() {
        let banner = parse_banner("%%MatrixMarket matrix coordinate real general").unwrap();
        assert_eq!(
            banner,
            Banner {
                pattern: false,
                symmetric: false
            }
        );
    }

    #[test]
    fn test_parse_banner_pattern_symmetric() {
        let banner = parse_banner("%%MatrixMarket matrix coordinate pattern symmetric").unwrap();
        assert_eq!(
            banner,
            Banner {
                pattern: true,
                symmetric: true
            }
        );
    }

    #[test]
    fn test_parse_banner_rejects_complex() {
        assert!(matches!(
            parse_banner("%%MatrixMarket matrix coordinate complex general"),
            Err(MarketError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_banner_rejects_array_format() {
        assert!(matches!(
            parse_banner("%%MatrixMarket matrix array real general"),
            Err(MarketError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_banner_rejects_hermitian() {
        assert!(matches!(
            parse_banner("%%MatrixMarket matrix coordinate real hermitian"),
            Err(MarketError::UnsupportedFormat(_))
        ));
    }
}
