use std::num::NonZeroUsize;

/// Initial number of cells on a fresh tape.
pub const DEFAULT_CELL_COUNT: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(count) => count,
    None => unreachable!(),
};

/// A bit tape that is unbounded in both directions.
///
/// The cells live in one contiguous buffer. The logical `cursor` may go negative,
/// `offset` translates it into a buffer index so that `cursor + offset` is always
/// in bounds. Moving off the right end doubles the buffer, moving off the left
/// end prepends a block as large as the current buffer and shifts `offset` by the
/// same amount, so every written cell keeps its logical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<bool>,
    cursor: isize,
    offset: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Tape::new(DEFAULT_CELL_COUNT)
    }
}

impl Tape {
    pub fn new(cell_count: NonZeroUsize) -> Self {
        Tape {
            cells: vec![false; cell_count.get()],
            cursor: 0,
            offset: 0,
        }
    }

    fn index(&self) -> usize {
        // Never negative: move_left grows the tape before the cursor can leave it
        (self.cursor + self.offset as isize) as usize
    }

    pub fn read(&self) -> bool {
        self.cells[self.index()]
    }

    pub fn write(&mut self, bit: bool) {
        let index = self.index();
        self.cells[index] = bit;
    }

    pub fn flip(&mut self) {
        let index = self.index();
        self.cells[index] = !self.cells[index];
    }

    pub fn move_right(&mut self) {
        self.cursor += 1;
        if self.index() >= self.cells.len() {
            let capacity = self.cells.len();
            self.cells.resize(capacity * 2, false);
            log::debug!("Tape grown right from {} to {} cells", capacity, capacity * 2);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor -= 1;
        if self.cursor + (self.offset as isize) < 0 {
            let capacity = self.cells.len();
            let mut grown = vec![false; capacity];
            grown.append(&mut self.cells);
            self.cells = grown;
            self.offset += capacity;
            log::debug!(
                "Tape grown left from {} to {} cells, offset now {}",
                capacity,
                capacity * 2,
                self.offset
            );
        }
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Logical positions of every cell holding a 1, in ascending order.
    pub fn set_cells(&self) -> Vec<isize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(|(index, _)| index as isize - self.offset as isize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape_with(cell_count: usize) -> Tape {
        Tape::new(NonZeroUsize::new(cell_count).expect("non-zero cell count"))
    }

    #[test]
    fn test_tape_initialization() {
        let tape = Tape::default();
        assert_eq!(tape.capacity(), DEFAULT_CELL_COUNT.get());
        assert_eq!(tape.cursor(), 0);
        assert_eq!(tape.offset(), 0);
        assert!(!tape.read());
        assert!(tape.set_cells().is_empty());
    }

    #[test]
    fn test_write_flip_read() {
        let mut tape = tape_with(4);
        tape.flip();
        assert!(tape.read());
        tape.flip();
        assert!(!tape.read());
        tape.write(true);
        assert!(tape.read());
        tape.write(false);
        assert!(!tape.read());
    }

    #[test]
    fn test_move_right_doubles_capacity() {
        let mut tape = tape_with(2);
        tape.write(true);
        tape.move_right();
        assert_eq!(tape.capacity(), 2);
        tape.move_right();
        assert_eq!(tape.capacity(), 4);
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.capacity(), 8);
        assert_eq!(tape.cursor(), 4);
        assert!(!tape.read());
        assert_eq!(tape.set_cells(), vec![0]);
    }

    #[test]
    fn test_move_left_prepends_and_shifts_offset() {
        let mut tape = tape_with(3);
        tape.write(true);
        tape.move_left();
        assert_eq!(tape.cursor(), -1);
        assert_eq!(tape.offset(), 3);
        assert_eq!(tape.capacity(), 6);
        assert!(!tape.read());
        tape.move_right();
        assert!(tape.read());
        assert_eq!(tape.set_cells(), vec![0]);
    }

    #[test]
    fn test_left_growth_preserves_markers() {
        let mut tape = tape_with(8);
        let markers = [0isize, 2, 5, 7, 12];

        // Write a marker at each position, moving right as needed
        for &marker in &markers {
            while tape.cursor() < marker {
                tape.move_right();
            }
            tape.write(true);
        }

        // Walk far past the left edge several times over, dropping a marker there too
        while tape.cursor() > -1000 {
            tape.move_left();
        }
        tape.write(true);
        assert!(tape.capacity() >= 1013);

        // Walk back and check every cell along the way
        while tape.cursor() < 20 {
            tape.move_right();
            let expected = markers.contains(&tape.cursor());
            assert_eq!(tape.read(), expected, "Cell {} changed", tape.cursor());
        }

        let mut expected_cells = vec![-1000];
        expected_cells.extend_from_slice(&markers);
        assert_eq!(tape.set_cells(), expected_cells);
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut tape = tape_with(1);
        let mut last_capacity = tape.capacity();
        for step in 0..200 {
            if step % 3 == 0 {
                tape.move_left();
            } else {
                tape.move_right();
            }
            assert!(tape.capacity() >= last_capacity);
            last_capacity = tape.capacity();
        }
    }
}
