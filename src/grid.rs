use std::ops::{Index, IndexMut};

/// A representation of a 2d grid.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner and
/// coordinates are given as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T, const ROWS: usize, const COLS: usize>(Vec<T>);

impl<T, const ROWS: usize, const COLS: usize> Default for Grid<T, ROWS, COLS>
where
    T: Default + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const ROWS: usize, const COLS: usize> Grid<T, ROWS, COLS>
where
    T: Default + Clone,
{
    pub fn new() -> Self {
        Grid(vec![T::default(); ROWS * COLS])
    }
}

impl<T, const ROWS: usize, const COLS: usize> Grid<T, ROWS, COLS> {
    /// Build a grid from its rows, top to bottom.
    pub fn from_rows(rows: [[T; COLS]; ROWS]) -> Self {
        Grid(rows.into_iter().flatten().collect())
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    pub fn idx(row: usize, col: usize) -> Option<usize> {
        (row < ROWS && col < COLS).then(|| (row * COLS) + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        Self::idx(row, col).map(|idx| &self.0[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        Self::idx(row, col).map(|idx| &mut self.0[idx])
    }

    /// Iterate over every cell in row-major order, along with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, value)| ((idx / COLS, idx % COLS), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut T)> {
        self.0
            .iter_mut()
            .enumerate()
            .map(|(idx, value)| ((idx / COLS, idx % COLS), value))
    }

    /// Iterate over the rows of this grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.0.chunks(COLS)
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Grid<T, ROWS, COLS> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col).unwrap()
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Grid<T, ROWS, COLS> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.get_mut(row, col).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Small = Grid<u8, 2, 3>;

    #[rstest]
    #[case(0, 0, Some(0))]
    #[case(0, 2, Some(2))]
    #[case(1, 0, Some(3))]
    #[case(1, 2, Some(5))]
    #[case(2, 0, None)]
    #[case(0, 3, None)]
    #[case(usize::MAX, 0, None)]
    #[case(usize::MAX / 3 + 1, 1, None)]
    fn idx_is_row_major(#[case] row: usize, #[case] col: usize, #[case] expect: Option<usize>) {
        assert_eq!(Small::idx(row, col), expect);
    }

    #[test]
    fn from_rows_preserves_layout() {
        let grid = Small::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(grid[(0, 1)], 2);
        assert_eq!(grid[(1, 0)], 4);
        assert_eq!(grid.get(2, 0), None);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4u8, 5, 6][..]]);
    }

    #[test]
    fn iter_yields_coordinates() {
        let grid = Small::from_rows([[1, 2, 3], [4, 5, 6]]);
        let cells: Vec<_> = grid.iter().map(|(pos, &v)| (pos, v)).collect();
        assert_eq!(cells[4], ((1, 1), 5));
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut grid = Small::new();
        grid[(1, 2)] = 9;
        assert_eq!(grid.get(1, 2), Some(&9));
        assert_eq!(grid.iter().filter(|&(_, &v)| v != 0).count(), 1);
    }
}
