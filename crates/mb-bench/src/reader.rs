use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mb_matrix::Matrix;

use crate::error::{BenchError, Result};

/// Parse one matrix from its text encoding: `n,v0,v1,...,v_{n*n-1}`.
///
/// `line_no` is the 1-based line number, used only for error reporting.
///
/// # Errors
/// Any malformed field (missing size, non-numeric token, wrong value count)
/// is fatal for the whole input file, per the corpus format contract.
pub fn parse_matrix_line(line: &str, line_no: usize) -> Result<Matrix> {
    let mut fields = line.split(',');

    let size_token = fields
        .next()
        .ok_or(BenchError::MissingSize { line: line_no })?;
    let n: usize = size_token
        .trim()
        .parse()
        .map_err(|_| BenchError::InvalidSize {
            line: line_no,
            token: size_token.to_string(),
        })?;
    if n == 0 {
        return Err(BenchError::InvalidSize {
            line: line_no,
            token: size_token.to_string(),
        });
    }

    let tokens: Vec<&str> = fields.collect();
    let expected = n * n;
    if tokens.len() != expected {
        return Err(BenchError::ValueCount {
            line: line_no,
            n,
            expected,
            got: tokens.len(),
        });
    }

    let mut data = Vec::with_capacity(expected);
    for token in tokens {
        let value: f64 = token.trim().parse().map_err(|_| BenchError::InvalidValue {
            line: line_no,
            token: token.to_string(),
        })?;
        data.push(value);
    }

    Ok(Matrix::new(data, n))
}

/// Read a corpus file into sequential matrix pairs.
///
/// Blank lines are skipped. The remaining lines must form a non-zero, even
/// count; consecutive lines are paired in order. Dimension agreement within
/// a pair is not checked here: that is the engine's contract, and a
/// mismatched pair should fail the pair, not the file.
pub fn read_matrix_pairs(path: &Path) -> Result<Vec<(Matrix, Matrix)>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut matrices = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        matrices.push(parse_matrix_line(&line, idx + 1)?);
    }

    if matrices.is_empty() {
        return Err(BenchError::EmptyInput);
    }
    if matrices.len() % 2 != 0 {
        return Err(BenchError::OddLineCount(matrices.len()));
    }

    let mut pairs = Vec::with_capacity(matrices.len() / 2);
    let mut iter = matrices.into_iter();
    while let (Some(a), Some(b)) = (iter.next(), iter.next()) {
        pairs.push((a, b));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_line() {
        let m = parse_matrix_line("2,1,2,3,4", 1).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_fractional_values() {
        let m = parse_matrix_line("1,3.25", 1).unwrap();
        assert_eq!(m.data(), &[3.25]);
    }

    #[test]
    fn test_parse_invalid_size() {
        assert!(matches!(
            parse_matrix_line("two,1,2,3,4", 5).unwrap_err(),
            BenchError::InvalidSize { line: 5, .. }
        ));
        assert!(matches!(
            parse_matrix_line("0", 1).unwrap_err(),
            BenchError::InvalidSize { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_missing_values() {
        assert!(matches!(
            parse_matrix_line("2,1,2,3", 2).unwrap_err(),
            BenchError::ValueCount {
                line: 2,
                n: 2,
                expected: 4,
                got: 3,
            }
        ));
    }

    #[test]
    fn test_parse_trailing_comma() {
        // A trailing comma produces one extra (empty) field.
        assert!(matches!(
            parse_matrix_line("2,1,2,3,4,", 1).unwrap_err(),
            BenchError::ValueCount { got: 5, .. }
        ));
    }

    #[test]
    fn test_parse_non_numeric_value() {
        assert!(matches!(
            parse_matrix_line("2,1,x,3,4", 3).unwrap_err(),
            BenchError::InvalidValue { line: 3, .. }
        ));
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_read_pairs() {
        let f = write_temp("2,1,2,3,4\n2,5,6,7,8\n1,9\n1,10\n");
        let pairs = read_matrix_pairs(f.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.dim(), 2);
        assert_eq!(pairs[1].1.data(), &[10.0]);
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let f = write_temp("2,1,2,3,4\n\n2,5,6,7,8\n\n");
        let pairs = read_matrix_pairs(f.path()).unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_read_odd_count() {
        let f = write_temp("1,1\n1,2\n1,3\n");
        assert!(matches!(
            read_matrix_pairs(f.path()).unwrap_err(),
            BenchError::OddLineCount(3)
        ));
    }

    #[test]
    fn test_read_empty_file() {
        let f = write_temp("\n\n");
        assert!(matches!(
            read_matrix_pairs(f.path()).unwrap_err(),
            BenchError::EmptyInput
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_matrix_pairs(Path::new("/no/such/corpus.txt")).unwrap_err(),
            BenchError::Io(_)
        ));
    }

    #[test]
    fn test_read_mismatched_pair_is_loaded() {
        // Pair dimension agreement is the engine's check, not the reader's.
        let f = write_temp("1,1\n2,1,2,3,4\n");
        let pairs = read_matrix_pairs(f.path()).unwrap();
        assert_eq!(pairs[0].0.dim(), 1);
        assert_eq!(pairs[0].1.dim(), 2);
    }
}
