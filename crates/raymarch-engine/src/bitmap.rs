//! Binary occupancy buffer.

/// A row-major binary image. Cell `(x, y)` lives at `y * width + x` and
/// holds either 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Bitmap {
    /// Create an all-zero bitmap.
    ///
    /// Panics if `width * height` overflows; callers validate sizes first.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a bitmap from raw cells. Returns `None` if the length does not
    /// match or a cell is neither 0 nor 1.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Option<Self> {
        if width.checked_mul(height) != Some(cells.len()) || cells.iter().any(|&c| c > 1) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Value of cell `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at flat `index` to 1. Cells never go back to 0 except
    /// through [`Bitmap::clear`].
    #[inline]
    pub fn mark(&mut self, index: usize) {
        self.cells[index] = 1;
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of cells set to 1.
    pub fn count_marked(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate over rows, top row (`y = 0`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() panics on 0; a zero-width bitmap has no cells to yield anyway.
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let bitmap = Bitmap::new(4, 3);
        assert_eq!(bitmap.cells().len(), 12);
        assert_eq!(bitmap.count_marked(), 0);
    }

    #[test]
    fn test_row_major_index() {
        let mut bitmap = Bitmap::new(4, 3);
        let idx = bitmap.index(1, 2);
        assert_eq!(idx, 9);
        bitmap.mark(idx);
        assert_eq!(bitmap.get(1, 2), 1);
        assert_eq!(bitmap.get(2, 1), 0);
        assert_eq!(bitmap.rows().nth(2).unwrap(), &[0, 1, 0, 0]);
    }

    #[test]
    fn test_mark_is_idempotent_and_clear_resets() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap.mark(3);
        bitmap.mark(3);
        assert_eq!(bitmap.count_marked(), 1);
        bitmap.clear();
        assert_eq!(bitmap.count_marked(), 0);
    }

    #[test]
    fn test_from_cells_validates() {
        assert!(Bitmap::from_cells(2, 2, vec![0, 1, 1, 0]).is_some());
        assert!(Bitmap::from_cells(2, 2, vec![0, 1, 1]).is_none());
        assert!(Bitmap::from_cells(2, 1, vec![0, 2]).is_none());
        assert!(Bitmap::from_cells(usize::MAX, 2, vec![0]).is_none());
    }
}
