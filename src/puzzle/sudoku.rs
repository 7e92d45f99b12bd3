use crate::prelude::*;

use core::fmt;
use smallvec::SmallVec;

const EMPTY: u8 = 0;

/// An n×n sudoku grid where n is a perfect square no larger than 9.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku {
    size: usize,
    box_size: usize,
    // Row-major, `EMPTY` for blanks.
    cells: Vec<u8>,
}

impl Sudoku {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        match self.cells[row * self.size + col] {
            EMPTY => None,
            v => Some(v),
        }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&v| v == EMPTY)
    }

    /// Cells sharing a row, column or box with `index`, including `index`.
    fn peers(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = (index / self.size, index % self.size);
        let box_row = row - row % self.box_size;
        let box_col = col - col % self.box_size;

        let row_cells = (0..self.size).map(move |c| row * self.size + c);
        let col_cells = (0..self.size).map(move |r| r * self.size + col);
        let box_cells = (0..self.size).map(move |i| {
            (box_row + i / self.box_size) * self.size + box_col + i % self.box_size
        });

        row_cells.chain(col_cells).chain(box_cells)
    }

    fn candidates(&self, index: usize) -> SmallVec<[u8; 9]> {
        let used = self
            .peers(index)
            .fold(0u16, |mask, peer| mask | (1 << self.cells[peer]));

        (1..=self.size as u8)
            .filter(|v| used & (1 << v) == 0)
            .collect()
    }

    fn has_conflict(&self, index: usize) -> bool {
        let value = self.cells[index];
        value != EMPTY
            && self
                .peers(index)
                .any(|peer| peer != index && self.cells[peer] == value)
    }

    fn with(&self, index: usize, value: u8) -> Sudoku {
        let mut cells = self.cells.clone();
        cells[index] = value;
        Sudoku { cells, ..*self }
    }
}

impl Puzzle for Sudoku {
    fn extensions(&self) -> Vec<Self> {
        match self.first_empty() {
            None => Vec::new(),
            Some(index) => self
                .candidates(index)
                .into_iter()
                .map(|v| self.with(index, v))
                .collect(),
        }
    }

    fn is_solved(&self) -> bool {
        self.is_full() && !(0..self.cells.len()).any(|i| self.has_conflict(i))
    }

    fn fail_fast(&self) -> bool {
        (0..self.cells.len())
            .filter(|&i| self.cells[i] == EMPTY)
            .any(|i| self.candidates(i).is_empty())
    }
}

impl core::str::FromStr for Sudoku {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Sudoku> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        let size = (1..=9)
            .find(|n| n * n == chars.len())
            .ok_or_else(|| anyhow::anyhow!("Grid has {} cells, not a square", chars.len()))?;
        let box_size = (1..=3)
            .find(|n| n * n == size)
            .ok_or_else(|| anyhow::anyhow!("Grid size {} is not a perfect square", size))?;

        let cells = chars
            .into_iter()
            .map(|c| match c {
                '.' | '0' => Ok(EMPTY),
                c => match c.to_digit(10) {
                    Some(d) if (d as usize) <= size => Ok(d as u8),
                    _ => Err(anyhow::anyhow!("Unrecognized cell {:?}", c)),
                },
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Sudoku {
            size,
            box_size,
            cells,
        })
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &v in row {
                let c = match v {
                    EMPTY => '.',
                    v => (b'0' + v) as char,
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_4: &str = "1234 3412 2143 4321";

    fn grid(s: &str) -> Sudoku {
        s.parse().unwrap()
    }

    #[test]
    fn parses_blanks_and_digits() {
        let sudoku = grid("1.3. 0000 .... ...4");
        assert_eq!(sudoku.size(), 4);
        assert_eq!(sudoku.get(0, 0), Some(1));
        assert_eq!(sudoku.get(0, 1), None);
        assert_eq!(sudoku.get(1, 0), None);
        assert_eq!(sudoku.get(3, 3), Some(4));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        assert!("123".parse::<Sudoku>().is_err());
    }

    #[test]
    fn rejects_non_square_size() {
        assert!("1".parse::<Sudoku>().is_ok());
        assert!(".".repeat(4).parse::<Sudoku>().is_err());
        assert!(".".repeat(9).parse::<Sudoku>().is_err());
    }

    #[test]
    fn rejects_digit_larger_than_size() {
        assert!("5... .... .... ....".parse::<Sudoku>().is_err());
    }

    #[test]
    fn full_valid_grid_is_solved() {
        assert!(grid(SOLVED_4).is_solved());
    }

    #[test]
    fn full_grid_with_conflict_is_not_solved() {
        assert!(!grid("1234 3412 2143 4312").is_solved());
    }

    #[test]
    fn extensions_fill_first_empty_cell() {
        let sudoku = grid("12.. 34.. .... ....");
        let filled: Vec<_> = sudoku
            .extensions()
            .into_iter()
            .map(|s| s.get(0, 2))
            .collect();

        assert_eq!(filled, vec![Some(3), Some(4)]);
    }

    #[test]
    fn forced_cell_has_single_extension() {
        let extensions = grid(".234 3412 2143 4321").extensions();
        assert_eq!(extensions.len(), 1);
        assert!(extensions[0].is_solved());
    }

    #[test]
    fn blocked_cell_fails_fast() {
        let sudoku = grid("1... .2.. .3.. .4..");
        assert!(sudoku.fail_fast());
        assert!(sudoku.extensions().is_empty());
    }

    #[test]
    fn open_grid_does_not_fail_fast() {
        assert!(!grid("12.. 34.. .... ....").fail_fast());
    }

    #[test]
    fn displays_rows() {
        assert_eq!(grid("12.. 34.. .... ...1").to_string(), "12..\n34..\n....\n...1");
    }
}
