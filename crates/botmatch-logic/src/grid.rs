//! An agent's personal game board.
//!
//! Each opponent plays on its own rectangular grid of symbol codes (career
//! codes, in the shipped game). The board is dealt once at session start and
//! never mutated; rounds only read it. Lookups return `Option` — a round's
//! target being absent from one agent's board is an expected condition the
//! decision engine absorbs, not an error.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell coordinate on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Immutable rectangular board of symbol codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Wrap pre-built rows. Well-formedness (non-empty, rectangular) is the
    /// room controller's responsibility; a malformed grid degrades to
    /// "not found" lookups rather than a panic.
    pub fn new(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    /// Deal a board by shuffling `symbols` across `rows * cols` cells.
    ///
    /// Every symbol appears at least once as long as the board has at least
    /// `symbols.len()` cells; larger boards repeat the shuffled alphabet.
    /// Each call with a distinct RNG stream deals a distinct board, which is
    /// how every agent in a room ends up with its own layout.
    pub fn shuffled(symbols: &[&str], rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let mut deck: Vec<&str> = symbols.to_vec();
        deck.shuffle(rng);

        let mut cells = Vec::with_capacity(rows);
        let mut dealt = 0;
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                if deck.is_empty() {
                    break;
                }
                if dealt == deck.len() {
                    deck.shuffle(rng);
                    dealt = 0;
                }
                row.push(deck[dealt].to_string());
                dealt += 1;
            }
            cells.push(row);
        }
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// First cell holding `symbol`, scanning rows top-to-bottom and columns
    /// left-to-right. `None` means the symbol is not on this board.
    pub fn find(&self, symbol: &str) -> Option<Position> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell == symbol {
                    return Some(Position { row, col });
                }
            }
        }
        None
    }

    /// Symbol stored at `pos`, if the coordinate is on the board.
    pub fn symbol_at(&self, pos: Position) -> Option<&str> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(String::as_str)
    }

    /// Uniformly random cell. `None` only for an empty board.
    pub fn random_position(&self, rng: &mut impl Rng) -> Option<Position> {
        let occupied: Vec<Position> = self
            .cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| (0..cells.len()).map(move |col| Position { row, col }))
            .collect();
        occupied.choose(rng).copied()
    }

    /// Distinct symbols on the board, in scan order.
    pub fn distinct_symbols(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.cells {
            for cell in row {
                if !seen.contains(&cell.as_str()) {
                    seen.push(cell.as_str());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn find_returns_first_match_in_scan_order() {
        let grid = board(&[
            &["CHEF", "PILOT", "VET"],
            &["VET", "DOCTOR", "CHEF"],
        ]);
        assert_eq!(grid.find("VET"), Some(Position { row: 0, col: 2 }));
        assert_eq!(grid.find("DOCTOR"), Some(Position { row: 1, col: 1 }));
    }

    #[test]
    fn find_reports_absent_symbol() {
        let grid = board(&[&["CHEF", "PILOT"]]);
        assert_eq!(grid.find("ASTRONAUT"), None);
    }

    #[test]
    fn find_round_trips_with_symbol_at() {
        let grid = board(&[
            &["CHEF", "PILOT", "VET"],
            &["NURSE", "DOCTOR", "FARMER"],
        ]);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = Position { row, col };
                let symbol = grid.symbol_at(pos).unwrap();
                assert_eq!(grid.find(symbol), Some(pos));
            }
        }
    }

    #[test]
    fn symbol_at_rejects_out_of_bounds() {
        let grid = board(&[&["CHEF"]]);
        assert_eq!(grid.symbol_at(Position { row: 1, col: 0 }), None);
        assert_eq!(grid.symbol_at(Position { row: 0, col: 1 }), None);
    }

    #[test]
    fn random_position_stays_on_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = board(&[&["A", "B"], &["C", "D"], &["E", "F"]]);
        for _ in 0..200 {
            let pos = grid.random_position(&mut rng).unwrap();
            assert!(grid.symbol_at(pos).is_some());
        }
    }

    #[test]
    fn random_position_of_empty_board_is_none() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(vec![]);
        assert_eq!(grid.random_position(&mut rng), None);
    }

    #[test]
    fn shuffled_covers_alphabet_when_board_is_large_enough() {
        let mut rng = StdRng::seed_from_u64(9);
        let symbols = ["DOCTOR", "CHEF", "PILOT", "VET", "NURSE", "FARMER"];
        let grid = Grid::shuffled(&symbols, 3, 3, &mut rng);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        for symbol in symbols {
            assert!(grid.find(symbol).is_some(), "{symbol} missing from board");
        }
    }

    #[test]
    fn shuffled_deals_distinct_boards() {
        let mut rng = StdRng::seed_from_u64(2);
        // Same alphabet, two deals: layouts differ for a 16-symbol alphabet.
        let symbols = ["A", "B", "C", "D", "E", "F", "G", "H", "I",
                       "J", "K", "L", "M", "N", "O", "P"];
        let a = Grid::shuffled(&symbols, 4, 4, &mut rng);
        let b = Grid::shuffled(&symbols, 4, 4, &mut rng);
        let flatten = |g: &Grid| {
            (0..4)
                .flat_map(|r| (0..4).map(move |c| (r, c)))
                .map(|(row, col)| g.symbol_at(Position { row, col }).unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_ne!(flatten(&a), flatten(&b));
    }

    #[test]
    fn distinct_symbols_deduplicates() {
        let grid = board(&[&["CHEF", "VET"], &["VET", "CHEF"]]);
        assert_eq!(grid.distinct_symbols(), vec!["CHEF", "VET"]);
    }
}
