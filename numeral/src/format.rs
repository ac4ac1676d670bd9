//! Delimiter-based text rendering for vectors and matrices
//!
//! A format string splits on its first comma. The part before it lists
//! delimiter characters: `open`, `separator`, `close` for vectors and
//! `open`, `column separator`, `row separator`, `close` for matrices. The
//! part after it is a cell spec `[width][.precision]` applied to every
//! element. Either part may be empty to keep the defaults.
//!
//! ```rust
//! use numeral::{format, DenseVector};
//!
//! let v = DenseVector::pack([1.5f64, 2.25]);
//! assert_eq!(format::format_vector_with(&v, "<|>,.3").unwrap(), "<1.500|2.250>");
//! assert_eq!(v.to_string(), "[1.5, 2.25]");
//! ```

use std::fmt::{self, Display, Write};

use numeral_core::{
    parse_cell_spec, split_format, Matrix, MatrixIndices, NumeralError, Result, Vector,
};

/// Display configuration for vectors and matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    open: String,
    separator: String,
    row_separator: String,
    close: String,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            open: "[".to_owned(),
            separator: ", ".to_owned(),
            row_separator: "; ".to_owned(),
            close: "]".to_owned(),
            width: None,
            precision: None,
        }
    }
}

impl FormatSpec {
    /// Set the opening, element separator and closing delimiters
    pub fn with_delimiters(mut self, open: &str, separator: &str, close: &str) -> Self {
        self.open = open.to_owned();
        self.separator = separator.to_owned();
        self.close = close.to_owned();
        self
    }

    /// Set the delimiter placed between matrix rows
    pub fn with_row_separator(mut self, row_separator: &str) -> Self {
        self.row_separator = row_separator.to_owned();
        self
    }

    /// Right-align every cell to at least `width` characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Digits after the decimal point for fractional representations
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Parse a vector format string
    pub fn parse_vector(format: &str) -> Result<Self> {
        let (outer, cell) = split_format(format);
        let mut spec = Self::default().with_cell(cell)?;
        if !outer.is_empty() {
            let [open, separator, close] = delimiters::<3>(outer)?;
            spec = spec.with_delimiters(open, separator, close);
        }
        Ok(spec)
    }

    /// Parse a matrix format string
    pub fn parse_matrix(format: &str) -> Result<Self> {
        let (outer, cell) = split_format(format);
        let mut spec = Self::default().with_cell(cell)?;
        if !outer.is_empty() {
            let [open, separator, row_separator, close] = delimiters::<4>(outer)?;
            spec = spec
                .with_delimiters(open, separator, close)
                .with_row_separator(row_separator);
        }
        Ok(spec)
    }

    fn with_cell(mut self, cell: &str) -> Result<Self> {
        let (width, precision) = parse_cell_spec(cell)?;
        self.width = width;
        self.precision = precision;
        Ok(self)
    }

    fn write_cell<W: Write, T: Display>(&self, out: &mut W, value: T) -> fmt::Result {
        match (self.width, self.precision) {
            (Some(width), Some(precision)) => write!(out, "{value:>width$.precision$}"),
            (Some(width), None) => write!(out, "{value:>width$}"),
            (None, Some(precision)) => write!(out, "{value:.precision$}"),
            (None, None) => write!(out, "{value}"),
        }
    }
}

/// Split the outer part into exactly `N` one-character delimiters
fn delimiters<const N: usize>(outer: &str) -> Result<[&str; N]> {
    let mut parts = [""; N];
    let mut count = 0;
    for (offset, ch) in outer.char_indices() {
        if count == N {
            return Err(NumeralError::InvalidFormat("too many delimiter characters"));
        }
        parts[count] = &outer[offset..offset + ch.len_utf8()];
        count += 1;
    }
    if count != N {
        return Err(NumeralError::InvalidFormat("too few delimiter characters"));
    }
    Ok(parts)
}

/// Write a vector using `spec`
pub fn write_vector<W, V>(out: &mut W, vector: &V, spec: &FormatSpec) -> fmt::Result
where
    W: Write,
    V: Vector + ?Sized,
{
    out.write_str(&spec.open)?;
    for i in 0..vector.len() {
        if i > 0 {
            out.write_str(&spec.separator)?;
        }
        spec.write_cell(out, vector.direct_get(i))?;
    }
    out.write_str(&spec.close)
}

/// Write a matrix row by row using `spec`
pub fn write_matrix<W, M>(out: &mut W, matrix: &M, spec: &FormatSpec) -> fmt::Result
where
    W: Write,
    M: Matrix + ?Sized,
{
    let size = matrix.size();
    out.write_str(&spec.open)?;
    for row in 0..size.row {
        if row > 0 {
            out.write_str(&spec.row_separator)?;
        }
        for col in 0..size.col {
            if col > 0 {
                out.write_str(&spec.separator)?;
            }
            spec.write_cell(out, matrix.direct_get(MatrixIndices::new(row, col)))?;
        }
    }
    out.write_str(&spec.close)
}

/// Render a vector into a new string
///
/// An element whose `Display` fails reports an error instead of a
/// truncated string.
pub fn format_vector<V: Vector + ?Sized>(vector: &V, spec: &FormatSpec) -> Result<String> {
    let mut out = String::new();
    write_vector(&mut out, vector, spec).map_err(|_| RENDER_FAILED)?;
    Ok(out)
}

/// Render a matrix into a new string
pub fn format_matrix<M: Matrix + ?Sized>(matrix: &M, spec: &FormatSpec) -> Result<String> {
    let mut out = String::new();
    write_matrix(&mut out, matrix, spec).map_err(|_| RENDER_FAILED)?;
    Ok(out)
}

const RENDER_FAILED: NumeralError = NumeralError::InvalidFormat("element could not be rendered");

/// Render a vector with a format string
pub fn format_vector_with<V: Vector + ?Sized>(vector: &V, format: &str) -> Result<String> {
    format_vector(vector, &FormatSpec::parse_vector(format)?)
}

/// Render a matrix with a format string
pub fn format_matrix_with<M: Matrix + ?Sized>(matrix: &M, format: &str) -> Result<String> {
    format_matrix(matrix, &FormatSpec::parse_matrix(format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DenseMatrix;
    use numeral_core::Decimal;

    #[test]
    fn test_parse_vector_format() {
        let spec = FormatSpec::parse_vector("(;),6.2").unwrap();
        assert_eq!(
            spec,
            FormatSpec::default()
                .with_delimiters("(", ";", ")")
                .with_width(6)
                .with_precision(2)
        );
        assert_eq!(FormatSpec::parse_vector("").unwrap(), FormatSpec::default());
        assert!(FormatSpec::parse_vector("[]").is_err());
        assert!(FormatSpec::parse_vector("[;;]").is_err());
        assert!(FormatSpec::parse_vector(",x").is_err());
    }

    #[test]
    fn test_vector_rendering() {
        let indices = MatrixIndices::new(3, 14);
        assert_eq!(format_vector(&indices, &FormatSpec::default()).unwrap(), "[3, 14]");
        assert_eq!(format_vector_with(&indices, "<|>,3").unwrap(), "<  3| 14>");
    }

    #[test]
    fn test_matrix_rendering() {
        let m = DenseMatrix::from_rows([[1i32, 2], [3, 4]]).unwrap();
        assert_eq!(format_matrix(&m, &FormatSpec::default()).unwrap(), "[1, 2; 3, 4]");
        assert_eq!(format_matrix_with(&m, "{ |},2").unwrap(), "{ 1  2| 3  4}");
        assert!(format_matrix_with(&m, "{ }").is_err());

        let d = DenseMatrix::from_rows([[Decimal::from_int(1)], [Decimal::from_raw(2_500_000_000)]])
            .unwrap();
        assert_eq!(format_matrix_with(&d, ",.2").unwrap(), "[1.00; 2.50]");
    }

    #[test]
    fn test_wide_precision_is_not_truncated() {
        let v = DenseMatrix::from_rows([[Decimal::MAX, Decimal::MIN]]).unwrap();
        let rendered = format_matrix_with(&v, ",.40").unwrap();
        let max = Decimal::MAX.to_string();
        assert!(rendered.starts_with(&format!("[{max}")));
        assert!(rendered.ends_with(&format!("{}]", "0".repeat(31))));
        assert_eq!(rendered.matches('.').count(), 2);

        let wide = DenseMatrix::from_rows([[Decimal::ONE]]).unwrap();
        assert_eq!(
            format_matrix_with(&wide, ",60.40").unwrap(),
            format!("[{:>60}]", format!("1.{}", "0".repeat(40)))
        );
    }
}
