//! Dense boolean matrix with one byte per entry.

use crate::MatrixError;
use std::fmt;

/// A boolean relation over `rows x cols`, one byte per entry.
///
/// Entries are stored row-major; entry `(i, j)` lives at byte `i * cols + j`
/// and is either 0 or 1. Each matrix owns its buffer, so nothing is shared
/// between relations of one registration pass.
#[derive(Clone, PartialEq, Eq)]
pub struct DependencyMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl DependencyMatrix {
    /// Create an all-zero matrix.
    ///
    /// # Errors
    ///
    /// Fails if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            data: vec![0u8; len],
        })
    }

    /// Build a matrix from a row accessor.
    ///
    /// Returns `Ok(None)` if the relation has no rows or columns, or if the
    /// accessor reports row 0 as absent. Other absent rows stay all-zero.
    ///
    /// # Errors
    ///
    /// Fails if `rows * cols` overflows `usize`. No row is queried then.
    pub fn from_rows<F, R>(
        rows: usize,
        cols: usize,
        mut row_at: F,
    ) -> Result<Option<Self>, MatrixError>
    where
        F: FnMut(usize) -> Option<R>,
        R: AsRef<[i32]>,
    {
        if rows == 0 || cols == 0 {
            return Ok(None);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(MatrixError::TooLarge { rows, cols });
        }

        let Some(first) = row_at(0) else {
            return Ok(None);
        };
        let mut matrix = Self::new(rows, cols)?;
        matrix.fill_row(0, first.as_ref());

        for i in 1..rows {
            let Some(row) = row_at(i) else {
                continue;
            };
            matrix.fill_row(i, row.as_ref());
        }

        Ok(Some(matrix))
    }

    fn fill_row(&mut self, i: usize, row: &[i32]) {
        debug_assert!(
            row.len() >= self.cols,
            "row {i} has {} entries, expected {}",
            row.len(),
            self.cols
        );
        for (j, &v) in row.iter().take(self.cols).enumerate() {
            if v != 0 {
                self.set(i, j);
            }
        }
    }

    /// Mark entry `(i, j)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, i: usize, j: usize) {
        if i < self.rows && j < self.cols {
            self.data[i * self.cols + j] = 1;
        }
    }

    /// Clear entry `(i, j)`. Out-of-range coordinates are ignored.
    pub fn clear(&mut self, i: usize, j: usize) {
        if i < self.rows && j < self.cols {
            self.data[i * self.cols + j] = 0;
        }
    }

    /// Check entry `(i, j)`.
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.data[i * self.cols + j] != 0
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The bytes of row `i`.
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Column indices set in row `i`.
    pub fn row_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(i)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, b)| **b != 0)
            .map(|(j, _)| j)
    }

    /// Row indices set in column `j`.
    pub fn col_indices(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows).filter(move |&i| self.is_set(i, j))
    }

    /// Iterate over the coordinates of every set entry, row-major.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, b)| **b != 0)
            .map(move |(k, _)| (k / cols, k % cols))
    }

    /// Count the set entries.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }

    /// Check if no entry is set.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// The raw row-major bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for DependencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DependencyMatrix({}x{}", self.rows, self.cols)?;
        for i in 0..self.rows {
            f.write_str(if i == 0 { ": " } else { "|" })?;
            for &b in self.row(i).unwrap_or(&[]) {
                f.write_str(if b != 0 { "1" } else { "0" })?;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_basic() {
        let mut m = DependencyMatrix::new(2, 3).unwrap();
        assert!(m.is_empty());

        m.set(0, 1);
        m.set(1, 2);
        m.set(5, 5); // Out of bounds

        assert!(m.is_set(0, 1));
        assert!(m.is_set(1, 2));
        assert!(!m.is_set(0, 0));
        assert!(!m.is_set(5, 5));
        assert_eq!(m.count_ones(), 2);
        assert_eq!(m.as_bytes(), &[0, 1, 0, 0, 0, 1]);

        m.clear(0, 1);
        assert!(!m.is_set(0, 1));
    }

    #[test]
    fn test_indices() {
        let mut m = DependencyMatrix::new(3, 3).unwrap();
        m.set(0, 0);
        m.set(0, 2);
        m.set(2, 2);

        assert_eq!(m.row_indices(0).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(m.row_indices(7).count(), 0);
        assert_eq!(m.col_indices(2).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(m.iter_set().collect::<Vec<_>>(), vec![(0, 0), (0, 2), (2, 2)]);
    }

    #[test]
    fn test_from_rows_skips_absent_rows() {
        let rows: Vec<Option<Vec<i32>>> = vec![Some(vec![1, 0]), None, Some(vec![0, 7])];
        let m = DependencyMatrix::from_rows(3, 2, |i| rows[i].clone())
            .unwrap()
            .unwrap();

        assert_eq!(m.row(0), Some(&[1u8, 0][..]));
        assert_eq!(m.row(1), Some(&[0u8, 0][..]));
        assert_eq!(m.row(2), Some(&[0u8, 1][..]));
    }

    #[test]
    fn test_from_rows_absent_first_row() {
        let rows: Vec<Option<Vec<i32>>> = vec![None, Some(vec![1, 1])];
        assert_eq!(DependencyMatrix::from_rows(2, 2, |i| rows[i].clone()), Ok(None));
    }

    #[test]
    fn test_size_overflow() {
        assert_eq!(
            DependencyMatrix::new(usize::MAX, 2),
            Err(MatrixError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(
            DependencyMatrix::from_rows(2, usize::MAX / 2 + 1, |_| -> Option<Vec<i32>> {
                panic!("row queried")
            }),
            Err(MatrixError::TooLarge {
                rows: 2,
                cols: usize::MAX / 2 + 1
            })
        );
    }

    #[test]
    fn test_from_rows_truncates_long_rows() {
        let m = DependencyMatrix::from_rows(1, 2, |_| Some(vec![0, 1, 1, 1]))
            .unwrap()
            .unwrap();
        assert_eq!(m.as_bytes(), &[0, 1]);
    }

    #[test]
    fn test_debug_format() {
        let mut m = DependencyMatrix::new(2, 2).unwrap();
        m.set(1, 0);
        assert_eq!(format!("{m:?}"), "DependencyMatrix(2x2: 00|10)");
    }
}
