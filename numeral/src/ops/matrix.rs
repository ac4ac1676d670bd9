//! Element-wise and linear-algebra operations on matrices

use numeral_core::{
    check_same_len, check_same_size, Matrix, MatrixIndices, MatrixMut, Numeral, NumeralError,
    Result, Vector, VectorMut,
};

use crate::registry::registry;

fn check_writable<D: Matrix + ?Sized>(dest: &D) -> Result<()> {
    if !dest.is_mutable() {
        return Err(NumeralError::NotMutable);
    }
    Ok(())
}

/// Iterate every cell index of a size in row-major order
fn indices(size: MatrixIndices) -> impl Iterator<Item = MatrixIndices> {
    (0..size.row).flat_map(move |row| (0..size.col).map(move |col| MatrixIndices::new(row, col)))
}

/// `dest[i, j] = f(source[i, j])`
pub fn map<S, D, F>(source: &S, dest: &mut D, mut f: F) -> Result<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    F: FnMut(S::Element) -> D::Element,
{
    let size = source.size();
    check_same_size(size, dest.size())?;
    check_writable(dest)?;
    for index in indices(size) {
        dest.direct_set(index, f(source.direct_get(index)));
    }
    Ok(())
}

/// `dest[i, j] = f(left[i, j], right[i, j])`
pub fn combine<L, R, D, F>(left: &L, right: &R, dest: &mut D, mut f: F) -> Result<()>
where
    L: Matrix + ?Sized,
    R: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    F: FnMut(L::Element, R::Element) -> D::Element,
{
    let size = left.size();
    check_same_size(size, right.size())?;
    check_same_size(size, dest.size())?;
    check_writable(dest)?;
    for index in indices(size) {
        dest.direct_set(index, f(left.direct_get(index), right.direct_get(index)));
    }
    Ok(())
}

/// `dest[i, k] = Σ_j mul(left[i, j], right[j, k])`, each sum seeded at `zero`
///
/// Requires `left.cols == right.rows` and `dest.size == (left.rows, right.cols)`.
pub fn multiply_with<L, R, D, M, A>(
    left: &L,
    right: &R,
    dest: &mut D,
    mut mul: M,
    mut add: A,
    zero: D::Element,
) -> Result<()>
where
    L: Matrix + ?Sized,
    R: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    M: FnMut(L::Element, R::Element) -> D::Element,
    A: FnMut(D::Element, D::Element) -> D::Element,
{
    let (lhs, rhs) = (left.size(), right.size());
    check_same_len(lhs.col, rhs.row)?;
    check_same_size(MatrixIndices::new(lhs.row, rhs.col), dest.size())?;
    check_writable(dest)?;
    for i in 0..lhs.row {
        for k in 0..rhs.col {
            let mut sum = zero;
            for j in 0..lhs.col {
                let product = mul(
                    left.direct_get(MatrixIndices::new(i, j)),
                    right.direct_get(MatrixIndices::new(j, k)),
                );
                sum = add(sum, product);
            }
            dest.direct_set(MatrixIndices::new(i, k), sum);
        }
    }
    Ok(())
}

/// Matrix product using the element capability
pub fn multiply<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Numeral,
    L: Matrix<Element = T> + ?Sized,
    R: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    multiply_with(
        left,
        right,
        dest,
        |a, b| natural.multiply(a, b),
        |a, b| natural.add(a, b),
        natural.zero(),
    )
}

/// `dest = matrix × vector`
pub fn transform<T, M, V, D>(matrix: &M, vector: &V, dest: &mut D) -> Result<()>
where
    T: Numeral,
    M: Matrix<Element = T> + ?Sized,
    V: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    let size = matrix.size();
    check_same_len(size.col, vector.len())?;
    check_same_len(size.row, dest.len())?;
    if !dest.is_mutable() {
        return Err(NumeralError::NotMutable);
    }
    for row in 0..size.row {
        let mut sum = natural.zero();
        for col in 0..size.col {
            let product = natural.multiply(
                matrix.direct_get(MatrixIndices::new(row, col)),
                vector.direct_get(col),
            );
            sum = natural.add(sum, product);
        }
        dest.direct_set(row, sum);
    }
    Ok(())
}

/// Overwrite `dest` with ones on the diagonal and zeros elsewhere
pub fn fill_identity<T, D>(dest: &mut D) -> Result<()>
where
    T: Numeral,
    D: MatrixMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    check_writable(dest)?;
    for index in indices(dest.size()) {
        let value = if index.row == index.col {
            natural.one()
        } else {
            natural.zero()
        };
        dest.direct_set(index, value);
    }
    Ok(())
}

/// `dest = -source` (Integer level)
pub fn negate<T, S, D>(source: &S, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let integer = registry().integer::<T>()?;
    map(source, dest, |a| integer.negate(a))
}

/// `dest = left + right`
pub fn add<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Numeral,
    L: Matrix<Element = T> + ?Sized,
    R: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    combine(left, right, dest, |a, b| natural.add(a, b))
}

/// `dest = left - right` (Integer level)
pub fn subtract<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Numeral,
    L: Matrix<Element = T> + ?Sized,
    R: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let integer = registry().integer::<T>()?;
    combine(left, right, dest, |a, b| integer.subtract(a, b))
}

/// `dest = source * factor`
pub fn scale<T, S, D>(source: &S, factor: T, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    map(source, dest, |a| natural.multiply(a, factor))
}

/// `dest = source / divisor` (Real level)
pub fn divide<T, S, D>(source: &S, divisor: T, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let real = registry().real::<T>()?;
    let size = source.size();
    check_same_size(size, dest.size())?;
    check_writable(dest)?;
    for index in indices(size) {
        let quotient = real.divide(source.direct_get(index), divisor)?;
        dest.direct_set(index, quotient);
    }
    Ok(())
}

/// `dest = source⁻¹` by Gauss-Jordan elimination (Real level)
///
/// Pivots on the row with the largest `absolute` value in each column.
/// Reports `SingularMatrix` when a pivot equals zero; `dest` is untouched
/// on any error.
pub fn invert<T, S, D>(source: &S, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Matrix<Element = T> + ?Sized,
    D: MatrixMut<Element = T> + ?Sized,
{
    let real = registry().real::<T>()?;
    let size = source.size();
    let n = size.row;
    check_same_size(MatrixIndices::new(n, n), size)?;
    check_same_size(size, dest.size())?;
    check_writable(dest)?;

    let mut work = source.to_vec();
    let mut inverse = vec![real.zero(); n * n];
    for i in 0..n {
        inverse[i * n + i] = real.one();
    }

    let magnitude = |value: T| real.absolute(value).into_scalar().to_f64();

    for col in 0..n {
        let mut pivot_row = col;
        let mut best = magnitude(work[col * n + col]);
        for row in col + 1..n {
            let candidate = magnitude(work[row * n + col]);
            if candidate > best {
                best = candidate;
                pivot_row = row;
            }
        }

        let pivot = work[pivot_row * n + col];
        if real.equals(pivot, real.zero()) {
            return Err(NumeralError::SingularMatrix);
        }
        if pivot_row != col {
            for k in 0..n {
                work.swap(pivot_row * n + k, col * n + k);
                inverse.swap(pivot_row * n + k, col * n + k);
            }
        }

        let scale = real.invert(pivot)?;
        for k in 0..n {
            work[col * n + k] = real.multiply(work[col * n + k], scale);
            inverse[col * n + k] = real.multiply(inverse[col * n + k], scale);
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work[row * n + col];
            if real.equals(factor, real.zero()) {
                continue;
            }
            for k in 0..n {
                work[row * n + k] =
                    real.subtract(work[row * n + k], real.multiply(factor, work[col * n + k]));
                inverse[row * n + k] = real.subtract(
                    inverse[row * n + k],
                    real.multiply(factor, inverse[col * n + k]),
                );
            }
        }
    }

    for index in indices(size) {
        dest.direct_set(index, inverse[size.offset_of(index)]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DenseMatrix, DenseVector, SparseMatrix};
    use crate::view::TransposedMatrix;
    use numeral_core::Decimal;

    #[test]
    fn test_identity_multiply_leaves_matrix_unchanged() {
        let identity = DenseMatrix::<i32>::identity(2).unwrap();
        let m = DenseMatrix::from_rows([[3, -1, 4], [1, 5, -9]]).unwrap();
        let mut out = DenseMatrix::<i32>::zero(2, 3).unwrap();
        multiply(&identity, &m, &mut out).unwrap();
        assert_eq!(out, m);
    }

    #[test]
    fn test_multiply_shapes() {
        let a = DenseMatrix::from_rows([[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
        let b = DenseMatrix::from_rows([[5.0f64, 6.0], [7.0, 8.0]]).unwrap();
        let mut out = DenseMatrix::<f64>::zero(2, 2).unwrap();
        multiply(&a, &b, &mut out).unwrap();
        assert_eq!(
            out,
            DenseMatrix::from_rows([[19.0, 22.0], [43.0, 50.0]]).unwrap()
        );

        let tall = DenseMatrix::<f64>::zero(3, 1).unwrap();
        assert_eq!(
            multiply(&a, &tall, &mut out),
            Err(NumeralError::SizeMismatch {
                expected: 2,
                got: 3
            })
        );
        let mut wrong = DenseMatrix::<f64>::zero(2, 3).unwrap();
        assert!(multiply(&a, &b, &mut wrong).is_err());
    }

    #[test]
    fn test_multiply_across_storage() {
        let sparse = SparseMatrix::zero(2, 2)
            .unwrap()
            .with_entries([(MatrixIndices::new(0, 1), 2i64)])
            .unwrap();
        let dense = DenseMatrix::from_rows([[1i64, 2], [3, 4]]).unwrap();
        let mut out = SparseMatrix::<i64>::zero(2, 2).unwrap();
        multiply(&sparse, &TransposedMatrix::new(&dense), &mut out).unwrap();
        assert_eq!(out, DenseMatrix::from_rows([[4i64, 8], [0, 0]]).unwrap());
        assert_eq!(out.non_default_count(), 2);
    }

    #[test]
    fn test_transform_and_fill_identity() {
        let m = DenseMatrix::from_rows([[1u32, 2], [3, 4], [5, 6]]).unwrap();
        let v = DenseVector::pack([1u32, 1]);
        let mut out = DenseVector::<u32>::zero(3);
        transform(&m, &v, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[3, 7, 11]);

        let mut square = DenseMatrix::filled(2, 2, 7u8).unwrap();
        fill_identity(&mut square).unwrap();
        assert_eq!(square, DenseMatrix::<u8>::identity(2).unwrap());
    }

    #[test]
    fn test_element_wise() {
        let a = DenseMatrix::from_rows([[1i16, 2], [3, 4]]).unwrap();
        let mut out = DenseMatrix::<i16>::zero(2, 2).unwrap();
        add(&a, &a, &mut out).unwrap();
        assert_eq!(out, DenseMatrix::from_rows([[2i16, 4], [6, 8]]).unwrap());
        subtract(&a, &a, &mut out).unwrap();
        assert_eq!(out, DenseMatrix::<i16>::zero(2, 2).unwrap());
        negate(&a, &mut out).unwrap();
        assert_eq!(out.get(MatrixIndices::new(1, 1)), Ok(-4));
        scale(&a, 3, &mut out).unwrap();
        assert_eq!(out.get(MatrixIndices::new(1, 0)), Ok(9));
        assert!(divide(&a, 2, &mut out).is_err());
    }

    #[test]
    fn test_invert_decimal_exact() {
        let d = |v: i64| Decimal::from_int(v);
        let m = DenseMatrix::from_rows([[d(0), d(2)], [d(4), d(0)]]).unwrap();
        let mut out = DenseMatrix::<Decimal>::zero(2, 2).unwrap();
        invert(&m, &mut out).unwrap();
        let half = Decimal::from_raw(500_000_000);
        let quarter = Decimal::from_raw(250_000_000);
        assert_eq!(
            out,
            DenseMatrix::from_rows([[Decimal::ZERO, quarter], [half, Decimal::ZERO]]).unwrap()
        );
    }

    #[test]
    fn test_invert_float() {
        let m = DenseMatrix::from_rows([[4.0f64, 7.0], [2.0, 6.0]]).unwrap();
        let mut out = DenseMatrix::<f64>::zero(2, 2).unwrap();
        invert(&m, &mut out).unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (got, want) in out.as_slice().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }

        let mut product = DenseMatrix::<f64>::zero(2, 2).unwrap();
        multiply(&m, &out, &mut product).unwrap();
        assert!((product.get(MatrixIndices::new(0, 0)).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invert_failures() {
        let singular = DenseMatrix::from_rows([[1.0f32, 2.0], [2.0, 4.0]]).unwrap();
        let mut out = DenseMatrix::<f32>::filled(2, 2, 9.0).unwrap();
        assert_eq!(invert(&singular, &mut out), Err(NumeralError::SingularMatrix));
        assert_eq!(out, DenseMatrix::<f32>::filled(2, 2, 9.0).unwrap());

        let integers = DenseMatrix::<i32>::identity(2).unwrap();
        let mut int_out = DenseMatrix::<i32>::zero(2, 2).unwrap();
        assert!(invert(&integers, &mut int_out).is_err());

        let rect = DenseMatrix::<f64>::zero(2, 3).unwrap();
        let mut rect_out = DenseMatrix::<f64>::zero(2, 3).unwrap();
        assert!(matches!(
            invert(&rect, &mut rect_out),
            Err(NumeralError::ShapeMismatch { .. })
        ));
    }
}
