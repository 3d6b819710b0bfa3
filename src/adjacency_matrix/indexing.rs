use std::ops::Range;

/// Returns the nth triangular number, `n(n + 1) / 2`.
pub(crate) fn triangular(n: usize) -> usize {
    (n * (n + 1)) / 2
}

/// Flat indexing for a symmetric square matrix.  Only entries with
/// `col <= row` are stored, so a 4×4 matrix occupies 10 slots:
///
/// ```text
/// ⎛ 0 1 3 6 ⎞
/// ⎟ 1 2 4 7 ⎟
/// ⎟ 3 4 5 8 ⎟
/// ⎝ 6 7 8 9 ⎠
/// ```
///
/// Row `r` starts at `triangular(r)`, so the slots for `(r, 0..=r)` are
/// contiguous and the rest of the row is spread over later rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TriangularIndexing {
    size: usize,
}

impl TriangularIndexing {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots needed to store the matrix.
    pub fn storage_size(&self) -> usize {
        triangular(self.size)
    }

    /// Returns the slot for `(i, j)` without bounds checking.
    pub fn unchecked_index(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        triangular(hi) + lo
    }

    /// Returns the slots of row `i` for columns `cols`, in column order.
    pub fn row(&self, i: usize, cols: Range<usize>) -> impl Iterator<Item = (usize, usize)> + '_ {
        cols.map(move |j| (j, self.unchecked_index(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular() {
        assert_eq!(triangular(0), 0);
        assert_eq!(triangular(1), 1);
        assert_eq!(triangular(4), 10);
        assert_eq!(triangular(5), 15);
    }

    #[test]
    fn test_slots_fit_storage() {
        let indexing = TriangularIndexing::new(4);
        assert_eq!(indexing.size(), 4);
        assert_eq!(indexing.unchecked_index(3, 3), indexing.storage_size() - 1);
        assert!((0..4).all(|i| indexing.row(i, 0..4).all(|(_, slot)| slot < 10)));
    }

    #[test]
    fn test_symmetry() {
        let indexing = TriangularIndexing::new(5);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(indexing.unchecked_index(i, j), indexing.unchecked_index(j, i));
            }
        }
    }

    #[test]
    fn test_slots_are_distinct_and_dense() {
        let indexing = TriangularIndexing::new(6);
        let mut seen = vec![false; indexing.storage_size()];
        for i in 0..6 {
            for j in 0..=i {
                let slot = indexing.unchecked_index(i, j);
                assert!(!seen[slot], "slot {} reused", slot);
                seen[slot] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_diagonal() {
        let indexing = TriangularIndexing::new(5);
        assert_eq!(indexing.unchecked_index(0, 0), 0);
        assert_eq!(indexing.unchecked_index(1, 1), 2);
        assert_eq!(indexing.unchecked_index(2, 2), 5);
    }

    #[test]
    fn test_row() {
        let indexing = TriangularIndexing::new(4);
        assert_eq!(
            indexing.row(2, 0..4).collect::<Vec<_>>(),
            vec![(0, 3), (1, 4), (2, 5), (3, 8)]
        );
        assert_eq!(indexing.row(1, 0..2).collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }
}
