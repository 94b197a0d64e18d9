use crate::dtype::Float;
use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense 2-D matrix — the data interchange type between featurizers,
/// transformers, and estimators.
///
/// Stores data in a flat contiguous `Vec<T>` with row-major layout,
/// one sample per row and one feature per column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: Float")]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// ─── Construction ───────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Create a matrix from raw row-major data.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> CoreResult<Self> {
        if data.len() != rows * cols {
            return Err(CoreError::ShapeMismatch {
                expected: (rows, cols),
                got: (1, data.len()),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::ONE; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from a slice of equal-length rows.
    pub fn from_rows(rows: &[Vec<T>]) -> CoreResult<Self> {
        if rows.is_empty() {
            return Ok(Matrix::zeros(0, 0));
        }
        let cols = rows[0].len();
        for row in rows {
            if row.len() != cols {
                return Err(CoreError::ShapeMismatch {
                    expected: (rows.len(), cols),
                    got: (rows.len(), row.len()),
                });
            }
        }
        let data: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Matrix::new(data, rows.len(), cols)
    }

    /// Stack matrices vertically. All inputs must have the same column count.
    pub fn vstack(mats: &[&Matrix<T>]) -> CoreResult<Self> {
        if mats.is_empty() {
            return Err(CoreError::EmptyMatrix);
        }
        let cols = mats[0].cols;
        let mut data = Vec::new();
        let mut rows = 0;
        for m in mats {
            if m.cols != cols {
                return Err(CoreError::ShapeMismatch {
                    expected: (m.rows, cols),
                    got: (m.rows, m.cols),
                });
            }
            data.extend_from_slice(&m.data);
            rows += m.rows;
        }
        Matrix::new(data, rows, cols)
    }

    /// Stack matrices horizontally. All inputs must have the same row count.
    pub fn hstack(mats: &[&Matrix<T>]) -> CoreResult<Self> {
        if mats.is_empty() {
            return Err(CoreError::EmptyMatrix);
        }
        let rows = mats[0].rows;
        for m in mats {
            if m.rows != rows {
                return Err(CoreError::ShapeMismatch {
                    expected: (rows, m.cols),
                    got: (m.rows, m.cols),
                });
            }
        }
        let cols: usize = mats.iter().map(|m| m.cols).sum();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for m in mats {
                data.extend_from_slice(&m.data[i * m.cols..(i + 1) * m.cols]);
            }
        }
        Matrix::new(data, rows, cols)
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> CoreResult<T> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> CoreResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrow a single row as a slice.
    pub fn row(&self, i: usize) -> CoreResult<&[T]> {
        if i >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                row: i,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols.max(1))
    }

    // ─── Operations ─────────────────────────────────────────────────────────

    /// Matrix transpose.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = vec![T::ZERO; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix multiply: (m × k) · (k × n) → (m × n).
    pub fn matmul(&self, other: &Matrix<T>) -> CoreResult<Matrix<T>> {
        if self.cols != other.rows {
            return Err(CoreError::ShapeMismatch {
                expected: (self.cols, other.cols),
                got: (other.rows, other.cols),
            });
        }
        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut data = vec![T::ZERO; m * n];
        for i in 0..m {
            for p in 0..k {
                let a = self.data[i * k + p];
                for j in 0..n {
                    data[i * n + j] += a * other.data[p * n + j];
                }
            }
        }
        Matrix::new(data, m, n)
    }

    /// Matrix-vector product: (m × n) · n → m.
    pub fn matvec(&self, v: &[T]) -> CoreResult<Vec<T>> {
        if self.cols != v.len() {
            return Err(CoreError::ShapeMismatch {
                expected: (self.cols, 1),
                got: (v.len(), 1),
            });
        }
        Ok(self
            .iter_rows()
            .map(|row| row.iter().zip(v).map(|(&a, &b)| a * b).sum())
            .collect())
    }

    /// Apply a function element-wise.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Per-column mean.
    pub fn column_mean(&self) -> CoreResult<Vec<T>> {
        if self.rows == 0 {
            return Err(CoreError::EmptyMatrix);
        }
        let n = T::from_usize(self.rows);
        let mut means = vec![T::ZERO; self.cols];
        for row in self.iter_rows() {
            for (m, &v) in means.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in means.iter_mut() {
            *m /= n;
        }
        Ok(means)
    }

    /// Per-column population standard deviation.
    pub fn column_std(&self) -> CoreResult<Vec<T>> {
        let means = self.column_mean()?;
        let n = T::from_usize(self.rows);
        let mut vars = vec![T::ZERO; self.cols];
        for row in self.iter_rows() {
            for ((v, &x), &m) in vars.iter_mut().zip(row).zip(&means) {
                let d = x - m;
                *v += d * d;
            }
        }
        Ok(vars.into_iter().map(|v| (v / n).sqrt()).collect())
    }
}

impl<T: Float> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

// ─── Display ────────────────────────────────────────────────────────────────

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix([")?;
        for i in 0..self.rows.min(8) {
            write!(f, "  [")?;
            for j in 0..self.cols.min(8) {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.data[i * self.cols + j])?;
            }
            if self.cols > 8 {
                write!(f, ", ...")?;
            }
            writeln!(f, "],")?;
        }
        if self.rows > 8 {
            writeln!(f, "  ...")?;
        }
        write!(f, "], shape=({}, {}))", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let m: Matrix<f64> = Matrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.data()[0], 0.0);

        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 3.0);

        assert!(Matrix::new(vec![1.0, 2.0, 3.0], 2, 2).is_err());
    }

    #[test]
    fn test_from_rows() {
        let m: Matrix<f64> =
            Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2).unwrap(), 6.0);

        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_vstack() {
        let a: Matrix<f64> = Matrix::new(vec![1.0, 2.0], 1, 2).unwrap();
        let b: Matrix<f64> = Matrix::new(vec![3.0, 4.0, 5.0, 6.0], 2, 2).unwrap();
        let c = Matrix::vstack(&[&a, &b]).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(Matrix::<f64>::vstack(&[]).is_err());
        let w: Matrix<f64> = Matrix::zeros(1, 3);
        assert!(Matrix::vstack(&[&a, &w]).is_err());
    }

    #[test]
    fn test_hstack() {
        let ones: Matrix<f64> = Matrix::ones(2, 1);
        let x: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let aug = Matrix::hstack(&[&ones, &x]).unwrap();
        assert_eq!(aug.shape(), (2, 3));
        assert_eq!(aug.data(), &[1.0, 1.0, 2.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_matmul() {
        let a: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let b: Matrix<f64> = Matrix::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.data(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matvec() {
        let a: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let y = a.matvec(&[1.0, 1.0]).unwrap();
        assert_eq!(y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_transpose() {
        let a: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(0, 1).unwrap(), 4.0);
        assert_eq!(t.get(2, 0).unwrap(), 3.0);
    }

    #[test]
    fn test_column_stats() {
        let m: Matrix<f64> =
            Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.column_mean().unwrap(), vec![3.0, 4.0]);
        let std = m.column_std().unwrap();
        assert!((std[0] - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_iter_rows_order() {
        let m: Matrix<f64> = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let rows: Vec<&[f64]> = m.iter_rows().collect();
        assert_eq!(rows[0], &[1.0, 2.0]);
        assert_eq!(rows[1], &[3.0, 4.0]);
    }
}
