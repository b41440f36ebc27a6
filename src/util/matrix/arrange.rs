/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Shape-changing operations: slicing, stacking, swapping, rotating.
//!
//! These work for any `T: Clone` since they never look at the values.

use crate::{Axis, Matrix, MatrixError, Result};
use crate::matrix::check_dims;

use ::std::ops::Range;

fn check_index(op: &'static str, axis: Axis, index: usize, len: usize) -> Result<()> {
    match index < len {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { op, axis, index, len }),
    }
}

fn check_range(op: &'static str, axis: Axis, range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end {
        return Err(MatrixError::InvertedRange { op, axis, start: range.start, end: range.end });
    }
    if range.end > len {
        return Err(MatrixError::OutOfRange { op, axis, index: range.end, len });
    }
    Ok(())
}

impl<T: Clone> Matrix<T> {
    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Result<Vec<T>> {
        check_index("row", Axis::Rows, r, self.num_rows())?;
        Ok(self.rows().nth(r).expect("BUG").to_vec())
    }

    /// Copy of column `c`.
    pub fn col(&self, c: usize) -> Result<Vec<T>> {
        check_index("col", Axis::Cols, c, self.num_cols())?;
        Ok(self.rows().map(|row| row[c].clone()).collect())
    }

    /// Extract the block at 0-based half-open ranges of rows and columns.
    pub fn sub_block(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Matrix<T>> {
        check_range("sub_block", Axis::Rows, &rows, self.num_rows())?;
        check_range("sub_block", Axis::Cols, &cols, self.num_cols())?;
        check_dims((rows.len(), cols.len()))?;

        let data = self.rows()
            .skip(rows.start)
            .take(rows.len())
            .flat_map(|row| row[cols.clone()].iter().cloned())
            .collect();
        Ok(Matrix::from_row_major_data((rows.len(), cols.len()), data))
    }

    /// Keep rows `r_first..=r_last` and columns `c_first..=c_last`.
    ///
    /// Indices are **1-based** and inclusive.
    pub fn truncate(
        &self,
        (r_first, r_last): (usize, usize),
        (c_first, c_last): (usize, usize),
    ) -> Result<Matrix<T>> {
        let op = "truncate";
        let one_based = |axis, first: usize, last: usize, len: usize| -> Result<Range<usize>> {
            if first == 0 {
                return Err(MatrixError::OutOfRange { op, axis, index: 0, len });
            }
            if first > last {
                return Err(MatrixError::InvertedRange { op, axis, start: first, end: last });
            }
            if last > len {
                return Err(MatrixError::OutOfRange { op, axis, index: last, len });
            }
            Ok(first - 1..last)
        };
        let rows = one_based(Axis::Rows, r_first, r_last, self.num_rows())?;
        let cols = one_based(Axis::Cols, c_first, c_last, self.num_cols())?;
        self.sub_block(rows, cols)
    }

    /// Place `other` to the right of `self`.
    pub fn concat_horizontal(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        hstack(&[self, other])
    }

    /// Place `other` below `self`.
    pub fn concat_vertical(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        vstack(&[self, other])
    }

    /// Overwrite the region of a copy of `self` starting at `(row, col)` with `block`.
    pub fn merge(&self, block: &Matrix<T>, (row, col): (usize, usize)) -> Result<Matrix<T>> {
        let (height, width) = block.dims();
        if row + height > self.num_rows() || col + width > self.num_cols() {
            return Err(MatrixError::ShapeMismatch {
                op: "merge",
                left: self.dims(),
                right: (row + height, col + width),
            });
        }

        let mut out = self.clone();
        for (r, block_row) in block.rows().enumerate() {
            let out_row = out.rows_mut().nth(row + r).expect("BUG");
            out_row[col..col + width].clone_from_slice(block_row);
        }
        Ok(out)
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_cw(&self) -> Matrix<T> {
        let (rows, cols) = self.dims();
        Matrix::from_fn((cols, rows), |r, c| self[(rows - 1 - c, r)].clone())
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_ccw(&self) -> Matrix<T> {
        let (rows, cols) = self.dims();
        Matrix::from_fn((cols, rows), |r, c| self[(c, cols - 1 - r)].clone())
    }

    /// Build a matrix whose columns are the given vectors.
    pub fn from_columns(columns: &[Vec<T>]) -> Result<Matrix<T>> {
        let rows = columns.iter().map(|c| c.to_vec()).collect();
        Ok(Matrix::from_rows(rows)?.to_transpose())
    }
}

impl<T> Matrix<T> {
    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        let rows = self.num_rows();
        check_index("swap_rows", Axis::Rows, a, rows)?;
        check_index("swap_rows", Axis::Rows, b, rows)?;
        let w = self.num_cols();
        for c in 0..w {
            self.row_major_data_mut().swap(a * w + c, b * w + c);
        }
        Ok(())
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<()> {
        let cols = self.num_cols();
        check_index("swap_cols", Axis::Cols, a, cols)?;
        check_index("swap_cols", Axis::Cols, b, cols)?;
        for row in self.rows_mut() {
            row.swap(a, b);
        }
        Ok(())
    }
}

/// Join matrices side by side.  All must have the same number of rows.
pub fn hstack<T: Clone>(blocks: &[&Matrix<T>]) -> Result<Matrix<T>> {
    let first = match blocks.first() {
        Some(first) => first,
        None => return Err(MatrixError::EmptyDims { rows: 0, cols: 0 }),
    };
    let height = first.num_rows();
    for b in &blocks[1..] {
        if b.num_rows() != height {
            return Err(MatrixError::ShapeMismatch {
                op: "hstack",
                left: first.dims(),
                right: b.dims(),
            });
        }
    }

    let width: usize = blocks.iter().map(|b| b.num_cols()).sum();
    let mut data = Vec::with_capacity(height * width);
    for r in 0..height {
        for b in blocks {
            data.extend(b.rows().nth(r).expect("BUG").iter().cloned());
        }
    }
    Ok(Matrix::from_row_major_data((height, width), data))
}

/// Join matrices top to bottom.  All must have the same number of columns.
pub fn vstack<T: Clone>(blocks: &[&Matrix<T>]) -> Result<Matrix<T>> {
    let first = match blocks.first() {
        Some(first) => first,
        None => return Err(MatrixError::EmptyDims { rows: 0, cols: 0 }),
    };
    let width = first.num_cols();
    for b in &blocks[1..] {
        if b.num_cols() != width {
            return Err(MatrixError::ShapeMismatch {
                op: "vstack",
                left: first.dims(),
                right: b.dims(),
            });
        }
    }

    let height: usize = blocks.iter().map(|b| b.num_rows()).sum();
    let data = blocks.iter().flat_map(|b| b.row_major_data().iter().cloned()).collect();
    Ok(Matrix::from_row_major_data((height, width), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m23() -> Matrix {
        Matrix::from(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ][..])
    }

    #[test]
    fn rows_and_cols() {
        let m = m23();
        assert_eq!(m.row(1), Ok(vec![4.0, 5.0, 6.0]));
        assert_eq!(m.col(2), Ok(vec![3.0, 6.0]));
        assert_eq!(
            m.col(3),
            Err(MatrixError::OutOfRange { op: "col", axis: Axis::Cols, index: 3, len: 3 }),
        );
    }

    #[test]
    fn truncate_is_one_based_inclusive() {
        let m = m23();
        assert_eq!(m.truncate((1, 2), (2, 3)), Ok(Matrix::from(&[[2.0, 3.0], [5.0, 6.0]][..])));
        assert_eq!(m.truncate((2, 2), (1, 1)), Ok(Matrix::from(&[[4.0]][..])));
        assert_eq!(m.truncate((1, 2), (1, 3)), Ok(m.clone()));
    }

    #[test]
    fn truncate_rejects_bad_bounds() {
        let m = m23();
        assert!(matches!(m.truncate((0, 1), (1, 1)), Err(MatrixError::OutOfRange { .. })));
        assert!(matches!(m.truncate((1, 3), (1, 1)), Err(MatrixError::OutOfRange { .. })));
        assert!(matches!(m.truncate((2, 1), (1, 1)), Err(MatrixError::InvertedRange { .. })));
        assert!(matches!(m.truncate((1, 1), (3, 2)), Err(MatrixError::InvertedRange { .. })));
    }

    #[test]
    fn sub_block() {
        let m = m23();
        assert_eq!(m.sub_block(0..1, 1..3), Ok(Matrix::from(&[[2.0, 3.0]][..])));
        assert!(m.sub_block(1..1, 0..3).is_err());
        assert!(m.sub_block(0..3, 0..3).is_err());
    }

    #[test]
    fn swaps_mutate_in_place() {
        let mut m = m23();
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m, Matrix::from(&[[4.0, 5.0, 6.0], [1.0, 2.0, 3.0]][..]));
        m.swap_cols(0, 2).unwrap();
        assert_eq!(m, Matrix::from(&[[6.0, 5.0, 4.0], [3.0, 2.0, 1.0]][..]));
        assert!(m.swap_rows(0, 2).is_err());
        assert!(m.swap_cols(3, 0).is_err());
    }

    #[test]
    fn concatenation() {
        let m = m23();
        let eye = Matrix::identity(2, 2);
        assert_eq!(
            m.concat_horizontal(&eye),
            Ok(Matrix::from(&[
                [1.0, 2.0, 3.0, 1.0, 0.0],
                [4.0, 5.0, 6.0, 0.0, 1.0],
            ][..])),
        );
        assert_eq!(m.concat_vertical(&m).map(|x| x.dims()), Ok((4, 3)));
        assert_eq!(
            m.concat_vertical(&eye),
            Err(MatrixError::ShapeMismatch { op: "vstack", left: (2, 3), right: (2, 2) }),
        );
        assert!(m.concat_horizontal(&Matrix::identity(3, 3)).is_err());
        assert!(hstack::<f64>(&[]).is_err());
    }

    #[test]
    fn merge_overwrites_a_region() {
        let base = Matrix::zeros((3, 3));
        let block = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]][..]);
        assert_eq!(
            base.merge(&block, (1, 1)),
            Ok(Matrix::from(&[
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 2.0],
                [0.0, 3.0, 4.0],
            ][..])),
        );
        assert!(base.merge(&block, (2, 0)).is_err());
    }

    #[test]
    fn rotation() {
        let m = m23();
        let cw = Matrix::from(&[[4.0, 1.0], [5.0, 2.0], [6.0, 3.0]][..]);
        let ccw = Matrix::from(&[[3.0, 6.0], [2.0, 5.0], [1.0, 4.0]][..]);
        assert_eq!(m.rotate_cw(), cw);
        assert_eq!(m.rotate_ccw(), ccw);
        assert_eq!(m.rotate_cw().rotate_ccw(), m);
        assert_eq!(m.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), m);
    }

    #[test]
    fn from_columns() {
        let cols = vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]];
        assert_eq!(Matrix::from_columns(&cols), Ok(m23()));
    }
}
