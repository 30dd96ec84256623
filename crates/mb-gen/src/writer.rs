use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mb_matrix::Matrix;

use crate::generator::MatrixGenerator;

/// Encode a matrix as one text line: `n,v0,v1,...,v_{n*n-1}`.
///
/// Values use `f64`'s shortest round-trip formatting, so parsing the line
/// back recovers the exact bit patterns. No trailing comma, no newline.
pub fn encode_line(m: &Matrix) -> String {
    let mut line = String::new();
    write!(line, "{}", m.dim()).unwrap();
    for v in m.data() {
        write!(line, ",{}", v).unwrap();
    }
    line
}

/// Write one matrix pair per requested size to `out`, one matrix per line.
pub fn write_pairs<W: Write>(
    out: &mut W,
    sizes: &[usize],
    gen: &mut MatrixGenerator,
) -> io::Result<()> {
    for &n in sizes {
        let (a, b) = gen.generate_pair(n);
        writeln!(out, "{}", encode_line(&a))?;
        writeln!(out, "{}", encode_line(&b))?;
    }
    Ok(())
}

/// Generate a corpus file at `path` with one matrix pair per size.
pub fn write_corpus(path: &Path, sizes: &[usize], gen: &mut MatrixGenerator) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_pairs(&mut out, sizes, gen)?;
    out.flush()
}
