use crate::models::{
    dungeon::{ErrorCode, SolveResult},
    Matrix, Position,
};

/// Minimum health required on entering each cell, stored row-major.
///
/// `need(r, c)` is the smallest positive health a traveler may hold just before
/// cell `(r, c)` applies its effect and still reach the destination with health
/// of at least 1 after every step.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthTable {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

/// Arithmetic fault while filling the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("health requirement overflowed at cell [{row},{col}]")]
pub struct Overflow {
    pub row: usize,
    pub col: usize,
}

impl HealthTable {
    /// Fills the table backward from the destination. `grid` must be rectangular
    /// with at least one cell.
    pub fn compute(grid: &Matrix<i32>) -> Result<Self, Overflow> {
        let rows = grid.len();
        let cols = grid[0].len();
        let mut table = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        for r in (0..rows).rev() {
            for c in (0..cols).rev() {
                let below = (r + 1 < rows).then(|| table.need(r + 1, c));
                let right = (c + 1 < cols).then(|| table.need(r, c + 1));
                let next = match (right, below) {
                    (Some(a), Some(b)) => a.min(b),
                    (Some(a), None) | (None, Some(a)) => a,
                    (None, None) => 1,
                };
                let need = next
                    .checked_sub(i64::from(grid[r][c]))
                    .ok_or(Overflow { row: r, col: c })?
                    .max(1);
                table.cells[r * cols + c] = need;
            }
        }
        Ok(table)
    }

    pub fn need(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.cols + col]
    }

    /// Walks from the top-left corner to the destination, stepping toward the
    /// cheaper successor. Ties go right.
    pub fn trace_path(&self) -> Vec<Position> {
        let (last_row, last_col) = (self.rows - 1, self.cols - 1);
        let mut path = Vec::with_capacity(self.rows + self.cols - 1);
        let (mut r, mut c) = (0, 0);
        path.push(Position::new(r, c));

        while (r, c) != (last_row, last_col) {
            if r == last_row {
                c += 1;
            } else if c == last_col {
                r += 1;
            } else if self.need(r, c + 1) <= self.need(r + 1, c) {
                c += 1;
            } else {
                r += 1;
            }
            path.push(Position::new(r, c));
        }
        path
    }
}

/// Computes the minimum starting health and one optimal right/down route.
///
/// Malformed input is reported as a `Failure` rather than trapped; the grid is
/// expected to have passed [`crate::logic::validator::validate`] already.
pub fn solve(grid: Option<Matrix<i32>>) -> SolveResult {
    let Some(grid) = grid else {
        return SolveResult::failure(None, "Dungeon grid cannot be null", ErrorCode::InvalidInput);
    };
    if grid.is_empty() || grid[0].is_empty() {
        return SolveResult::failure(
            Some(grid),
            "Dungeon grid must contain at least one cell",
            ErrorCode::InvalidInput,
        );
    }
    let cols = grid[0].len();
    if let Some(r) = grid.iter().position(|row| row.len() != cols) {
        return SolveResult::failure(
            Some(grid),
            format!("Dungeon grid is not rectangular: row {r} differs in length"),
            ErrorCode::InvalidInput,
        );
    }

    log::debug!(
        "Filling health table for {}x{} dungeon",
        grid.len(),
        cols
    );

    let table = match HealthTable::compute(&grid) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Error in solver processing: {e}");
            return SolveResult::failure(
                Some(grid),
                format!("Solver processing error: {e}"),
                ErrorCode::ProcessingError,
            );
        }
    };

    let min_hp = match i32::try_from(table.need(0, 0)) {
        Ok(hp) => hp,
        Err(_) => {
            log::error!(
                "Minimum health {} does not fit in a 32-bit integer",
                table.need(0, 0)
            );
            return SolveResult::failure(
                Some(grid),
                "Solver processing error: minimum health exceeds the representable range",
                ErrorCode::ProcessingError,
            );
        }
    };

    let path = table.trace_path();
    log::debug!("Solver found solution with minimum HP: {min_hp}");
    SolveResult::Success {
        input: grid,
        min_hp,
        path,
    }
}
