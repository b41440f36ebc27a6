/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{MatrixError, Result};

use ::mathkern_assert_close::{CheckClose, CheckCloseError, Tolerances};
use ::rand::Rng;
use ::slice_of_array::prelude::*;
use ::slice_of_array::IsSliceomorphic;
use ::std::fmt;
use ::std::ops::{Index, IndexMut};

/// Owned matrix type with C layout.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: height * width == data.len()
    // invariant: height > 0 && width > 0
    height: usize,
    width: usize,
}

pub type ContiguousRows<'a, T> = ::std::slice::Chunks<'a, T>;
pub type ContiguousRowsMut<'a, T> = ::std::slice::ChunksMut<'a, T>;

pub(crate) fn check_dims((rows, cols): (usize, usize)) -> Result<()> {
    match rows == 0 || cols == 0 {
        true => Err(MatrixError::EmptyDims { rows, cols }),
        false => Ok(()),
    }
}

impl<T> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `data.len() != height * width` or either dimension is zero.
    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Self
    {
        assert!(height > 0 && width > 0, "matrix dims must be nonzero");
        assert_eq!(data.len(), height * width);
        Matrix { data, height, width }
    }

    /// Fallible form of `from_row_major_data`, for data that came from outside.
    pub fn try_from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Result<Self>
    {
        check_dims((height, width))?;
        if data.len() != height * width {
            return Err(MatrixError::ShapeMismatch {
                op: "from_row_major_data",
                left: (height, width),
                right: (1, data.len()),
            });
        }
        Ok(Matrix { data, height, width })
    }

    /// Build from a list of rows, rejecting empty or jagged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self>
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        check_dims((height, width))?;

        let mut data = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                let len = values.len();
                return Err(MatrixError::JaggedRows { row, len, expected: width });
            }
            data.extend(values);
        }
        Ok(Matrix { data, height, width })
    }

    /// `1 x n` matrix.
    pub fn from_row_vector(values: Vec<T>) -> Result<Self>
    {
        let width = values.len();
        check_dims((1, width))?;
        Ok(Matrix { data: values, height: 1, width })
    }

    /// `n x 1` matrix.
    pub fn from_column_vector(values: Vec<T>) -> Result<Self>
    {
        let height = values.len();
        check_dims((height, 1))?;
        Ok(Matrix { data: values, height, width: 1 })
    }

    /// Flatten a `1 x n` or `n x 1` matrix into its elements.
    pub fn into_vector(self) -> Result<Vec<T>>
    {
        match self.is_vector() {
            true => Ok(self.data),
            false => Err(MatrixError::NotVector { op: "into_vector", dims: self.dims() }),
        }
    }

    pub fn into_row_major_data(self) -> Vec<T> { self.data }
    pub fn row_major_data(&self) -> &[T] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [T] { &mut self.data }
    pub fn rows(&self) -> ContiguousRows<'_, T> { self.data.chunks(self.width) }
    pub fn rows_mut(&mut self) -> ContiguousRowsMut<'_, T> { self.data.chunks_mut(self.width) }

    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn size(&self) -> usize { self.data.len() }
    pub fn row_stride(&self) -> usize { self.width }

    pub fn is_square(&self) -> bool { self.height == self.width }
    pub fn is_vector(&self) -> bool { self.height == 1 || self.width == 1 }
    pub fn is_scalar(&self) -> bool { self.height == 1 && self.width == 1 }

    /// The side length, or `NotSquare` naming `op`.
    pub fn require_square(&self, op: &'static str) -> Result<usize> {
        match self.is_square() {
            true => Ok(self.height),
            false => Err(MatrixError::NotSquare { op, dims: self.dims() }),
        }
    }

    /// Build a matrix of the same shape by applying a function to each element.
    pub fn map<B>(&self, f: impl FnMut(&T) -> B) -> Matrix<B>
    { Matrix {
        data: self.data.iter().map(f).collect(),
        height: self.height,
        width: self.width,
    }}

    pub fn from_fn((height, width): (usize, usize), mut f: impl FnMut(usize, usize) -> T) -> Self
    {
        assert!(height > 0 && width > 0, "matrix dims must be nonzero");
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Matrix { data, height, width }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn new_filled((height, width): (usize, usize), fill: &T) -> Self
    {
        assert!(height > 0 && width > 0, "matrix dims must be nonzero");
        Matrix {
            data: (0..height * width).map(|_| fill.clone()).collect(),
            height,
            width,
        }
    }

    pub fn to_transpose(&self) -> Self
    {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols() {
            for r in 0..self.num_rows() {
                data.push(self[(r, c)].clone());
            }
        }
        Matrix { data, height: self.width, width: self.height }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    { self.rows().map(|row| row.to_vec()).collect() }

    pub fn to_vector(&self) -> Result<Vec<T>>
    { self.clone().into_vector() }
}

impl Matrix<f64> {
    pub fn zeros(dims: (usize, usize)) -> Self
    { Matrix::new_filled(dims, &0.0) }

    /// Ones on the main diagonal. (rectangular shapes are allowed)
    pub fn identity(rows: usize, cols: usize) -> Self
    { Matrix::from_fn((rows, cols), |r, c| if r == c { 1.0 } else { 0.0 }) }

    /// Uniformly random entries in `[0, 0.999)`, resampled until at least one is nonzero.
    pub fn random_nonzero<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self
    {
        loop {
            let m = Matrix::from_fn((rows, cols), |_, _| rng.gen_range(0.0..0.999));
            if m.data.iter().any(|&x| x != 0.0) {
                return m;
            }
            trace!("random_nonzero: rejected an all-zero {}x{} sample", rows, cols);
        }
    }

    /// Copy with every element rounded to `accuracy` decimal places.
    pub fn round(&self, accuracy: u32) -> Self
    { self.map(|&x| ::mathkern_slice_math::round_to(x, accuracy)) }

    pub fn is_finite(&self) -> bool
    { self.data.iter().all(|x| x.is_finite()) }

    pub fn diagonal(&self) -> Vec<f64>
    { (0..usize::min(self.height, self.width)).map(|i| self[(i, i)]).collect() }
}

impl<'a, T, V> From<&'a [V]> for Matrix<T>
where
    T: Clone,
    V: IsSliceomorphic<Element = T>,
{
    /// # Panics
    ///
    /// Panics on an empty slice or zero-length rows.
    fn from(slice: &'a [V]) -> Self {
        Matrix::from_row_major_data(
            (slice.len(), V::LEN),
            slice.flat().to_vec(),
        )
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        assert!(c < self.width, "column index {} out of bounds ({})", c, self.width);
        &self.data[r * self.width + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output
    {
        assert!(c < self.width, "column index {} out of bounds ({})", c, self.width);
        &mut self.data[r * self.width + c]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (i, x) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:>w$.p$}", x, w = p + 4, p = p)?,
                    None => write!(f, "{}", x)?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl CheckClose for Matrix<f64> {
    fn check_close(&self, other: &Matrix<f64>, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError>
    {
        assert_eq!(self.dims(), other.dims(), "check_close: matrix shapes differ");
        self.data.check_close(&other.data, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn construction() {
        let m = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]][..]);
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row_major_data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Matrix::from_rows(m.to_rows()), Ok(m));
    }

    #[test]
    fn bad_construction() {
        assert_eq!(
            Matrix::<f64>::from_rows(vec![]),
            Err(MatrixError::EmptyDims { rows: 0, cols: 0 }),
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::JaggedRows { row: 1, len: 1, expected: 2 }),
        );
        assert!(Matrix::try_from_row_major_data((2, 2), vec![1.0; 3]).is_err());
        assert!(Matrix::<f64>::from_column_vector(vec![]).is_err());
    }

    #[test]
    fn vector_conversions() {
        let col = Matrix::from_column_vector(vec![1.0, 2.0, 3.0]).unwrap();
        let row = Matrix::from_row_vector(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(col.dims(), (3, 1));
        assert_eq!(row.dims(), (1, 3));
        assert_eq!(col.to_transpose(), row);
        assert_eq!(col.to_vector(), Ok(vec![1.0, 2.0, 3.0]));
        assert_eq!(
            Matrix::identity(2, 2).into_vector(),
            Err(MatrixError::NotVector { op: "into_vector", dims: (2, 2) }),
        );
    }

    #[test]
    fn transpose_twice_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for &(r, c) in &[(1, 1), (1, 5), (4, 2), (3, 3)] {
            let m = Matrix::random_nonzero(r, c, &mut rng);
            assert_eq!(m.to_transpose().dims(), (c, r));
            assert_eq!(m.to_transpose().to_transpose(), m);
        }
    }

    #[test]
    fn random_nonzero_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = Matrix::random_nonzero(6, 6, &mut rng);
        assert!(m.row_major_data().iter().all(|&x| 0.0 <= x && x < 0.999));
        assert!(m.row_major_data().iter().any(|&x| x != 0.0));
    }

    #[test]
    fn identity_is_rectangular_friendly() {
        let eye = Matrix::identity(2, 3);
        assert_eq!(eye.row_major_data(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(eye.diagonal(), vec![1.0, 1.0]);
    }

    #[test]
    fn display() {
        let m = Matrix::from(&[[1.0, -2.5]][..]);
        assert_eq!(format!("{}", m), "[1, -2.5]\n");
        assert_eq!(format!("{:.1}", m), "[  1.0,  -2.5]\n");
    }

    #[test]
    #[should_panic]
    fn index_checks_columns() {
        let m = Matrix::identity(2, 2);
        let _ = m[(0, 2)];
    }
}
