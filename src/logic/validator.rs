use crate::models::{Matrix, RawGrid};

/// Why a grid was rejected before reaching the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridViolation {
    #[error("Dungeon cannot be null")]
    Missing,
    #[error("Dungeon cannot be empty")]
    Empty,
    #[error("Dungeon height cannot exceed {max} rows")]
    TooManyRows { max: usize },
    #[error("Row {row} cannot be null")]
    RowMissing { row: usize },
    #[error("Dungeon rows cannot be empty")]
    EmptyRow,
    #[error("Dungeon width cannot exceed {max} columns")]
    TooManyColumns { max: usize },
    #[error("All rows must have the same length. Expected {expected}, but row {row} has {actual}")]
    Ragged {
        expected: usize,
        row: usize,
        actual: usize,
    },
    #[error("Cell value at position [{row},{col}] must be between {min} and {max}, but was {value}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        min: i32,
        max: i32,
        value: i32,
    },
    #[error("Dungeon appears to be unsolvable")]
    Unsolvable,
}

/// Input-hygiene limits and the cheap solvability screen applied before solving.
///
/// The heuristic is a gate, not a proof: it can reject grids the solver would
/// handle, never the reverse.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPolicy {
    pub max_rows: usize,
    pub max_cols: usize,
    pub min_cell: i32,
    pub max_cell: i32,
    /// A start or destination cell at or below this value is rejected outright.
    pub lethal_cell: i32,
    /// Cells at or below this value count as extreme.
    pub extreme_cell: i32,
    /// Grids whose extreme share reaches this ratio are rejected.
    pub max_extreme_ratio: f64,
    /// Grids no larger than this on both axes skip the ratio check.
    pub small_grid: usize,
}

impl Default for GridPolicy {
    fn default() -> Self {
        Self {
            max_rows: 200,
            max_cols: 200,
            min_cell: -1000,
            max_cell: 100,
            lethal_cell: -1000,
            extreme_cell: -500,
            max_extreme_ratio: 0.8,
            small_grid: 2,
        }
    }
}

impl GridPolicy {
    /// Checks structure, cell range and plausibility, in that order.
    /// On success returns the grid with every row present.
    pub fn validate(&self, grid: Option<&RawGrid>) -> Result<Matrix<i32>, GridViolation> {
        let grid = grid.ok_or(GridViolation::Missing)?;
        if grid.is_empty() {
            return Err(GridViolation::Empty);
        }
        if grid.len() > self.max_rows {
            return Err(GridViolation::TooManyRows { max: self.max_rows });
        }

        let cols = match &grid[0] {
            None => return Err(GridViolation::RowMissing { row: 0 }),
            Some(first) if first.is_empty() => return Err(GridViolation::EmptyRow),
            Some(first) => first.len(),
        };
        if cols > self.max_cols {
            return Err(GridViolation::TooManyColumns { max: self.max_cols });
        }

        let mut rows = Vec::with_capacity(grid.len());
        for (r, row) in grid.iter().enumerate() {
            let row = row.as_ref().ok_or(GridViolation::RowMissing { row: r })?;
            if row.len() != cols {
                return Err(GridViolation::Ragged {
                    expected: cols,
                    row: r,
                    actual: row.len(),
                });
            }
            if let Some((c, &value)) = row
                .iter()
                .enumerate()
                .find(|(_, v)| !(self.min_cell..=self.max_cell).contains(*v))
            {
                return Err(GridViolation::CellOutOfRange {
                    row: r,
                    col: c,
                    min: self.min_cell,
                    max: self.max_cell,
                    value,
                });
            }
            rows.push(row.clone());
        }

        if !self.looks_solvable(&rows) {
            return Err(GridViolation::Unsolvable);
        }
        Ok(rows)
    }

    fn looks_solvable(&self, grid: &Matrix<i32>) -> bool {
        let rows = grid.len();
        let cols = grid[0].len();

        if grid[0][0] <= self.lethal_cell || grid[rows - 1][cols - 1] <= self.lethal_cell {
            return false;
        }
        if rows <= self.small_grid && cols <= self.small_grid {
            return true;
        }

        let extreme = grid
            .iter()
            .flatten()
            .filter(|&&cell| cell <= self.extreme_cell)
            .count();
        (extreme as f64) / ((rows * cols) as f64) < self.max_extreme_ratio
    }
}

/// Validates `grid` under the default policy.
pub fn validate(grid: Option<&RawGrid>) -> Result<Matrix<i32>, GridViolation> {
    GridPolicy::default().validate(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(grid: Vec<Vec<i32>>) -> RawGrid {
        grid.into_iter().map(Some).collect()
    }

    #[test]
    fn test_valid_grid_is_returned_unchanged() {
        let grid = vec![vec![-2, -3, 3], vec![-5, -10, 1], vec![10, 30, -5]];
        assert_eq!(validate(Some(&raw(grid.clone()))), Ok(grid));
    }

    #[test]
    fn test_missing_grid_rejected() {
        assert_eq!(validate(None), Err(GridViolation::Missing));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(validate(Some(&vec![])), Err(GridViolation::Empty));
    }

    #[test]
    fn test_empty_first_row_rejected() {
        assert_eq!(
            validate(Some(&raw(vec![vec![], vec![]]))),
            Err(GridViolation::EmptyRow)
        );
    }

    #[test]
    fn test_null_row_rejected() {
        let grid = vec![Some(vec![1, 2]), None];
        assert_eq!(
            validate(Some(&grid)),
            Err(GridViolation::RowMissing { row: 1 })
        );
    }

    #[test]
    fn test_ragged_grid_rejected_with_message() {
        let err = validate(Some(&raw(vec![vec![1, 2, 3], vec![4, 5]]))).unwrap_err();
        assert_eq!(
            err,
            GridViolation::Ragged {
                expected: 3,
                row: 1,
                actual: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "All rows must have the same length. Expected 3, but row 1 has 2"
        );
    }

    #[test]
    fn test_too_many_rows_rejected() {
        let grid = raw(vec![vec![0]; 201]);
        assert_eq!(
            validate(Some(&grid)),
            Err(GridViolation::TooManyRows { max: 200 })
        );
    }

    #[test]
    fn test_too_many_columns_rejected() {
        let grid = raw(vec![vec![0; 201]]);
        assert_eq!(
            validate(Some(&grid)),
            Err(GridViolation::TooManyColumns { max: 200 })
        );
    }

    #[test]
    fn test_max_dimensions_accepted() {
        let grid = raw(vec![vec![0; 200]; 200]);
        assert!(validate(Some(&grid)).is_ok());
    }

    #[test]
    fn test_cell_above_range_rejected() {
        let err = validate(Some(&raw(vec![vec![1, 200]]))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cell value at position [0,1] must be between -1000 and 100, but was 200"
        );
    }

    #[test]
    fn test_cell_below_range_rejected() {
        assert!(matches!(
            validate(Some(&raw(vec![vec![0], vec![-1001]]))),
            Err(GridViolation::CellOutOfRange { row: 1, col: 0, .. })
        ));
    }

    #[test]
    fn test_lethal_start_rejected() {
        assert_eq!(
            validate(Some(&raw(vec![vec![-1000, 0], vec![0, 0]]))),
            Err(GridViolation::Unsolvable)
        );
    }

    #[test]
    fn test_lethal_destination_rejected_even_for_single_cell() {
        assert_eq!(
            validate(Some(&raw(vec![vec![-1000]]))),
            Err(GridViolation::Unsolvable)
        );
    }

    #[test]
    fn test_small_grid_skips_extreme_ratio() {
        let grid = raw(vec![vec![-999, -999], vec![-999, -999]]);
        assert!(validate(Some(&grid)).is_ok());
    }

    #[test]
    fn test_mostly_extreme_grid_rejected() {
        // 8 of 9 cells at or below -500 → 0.89 ≥ 0.8
        let grid = raw(vec![
            vec![0, -500, -500],
            vec![-500, -500, -500],
            vec![-500, -500, -500],
        ]);
        assert_eq!(validate(Some(&grid)), Err(GridViolation::Unsolvable));
    }

    #[test]
    fn test_extreme_ratio_just_below_threshold_accepted() {
        // 7 of 9 cells extreme → 0.78 < 0.8
        let grid = raw(vec![
            vec![0, -500, -500],
            vec![-500, -500, -500],
            vec![-500, -500, 0],
        ]);
        assert!(validate(Some(&grid)).is_ok());
    }

    #[test]
    fn test_extreme_ratio_at_threshold_rejected() {
        // 16 of 20 cells extreme → exactly 0.8
        let grid = raw(vec![
            vec![0, 0, -500, -500, -500],
            vec![-500; 5],
            vec![-500; 5],
            vec![-500, -500, -500, 0, 0],
        ]);
        assert_eq!(validate(Some(&grid)), Err(GridViolation::Unsolvable));
    }

    #[test]
    fn test_two_by_three_grid_is_not_exempt() {
        // 5 of 6 cells extreme → 0.83
        let wide = raw(vec![vec![-500, -500, -500], vec![-500, -500, 0]]);
        assert_eq!(validate(Some(&wide)), Err(GridViolation::Unsolvable));

        let tall = raw(vec![vec![-500, -500], vec![-500, -500], vec![-500, 0]]);
        assert_eq!(validate(Some(&tall)), Err(GridViolation::Unsolvable));

        // 4 of 6 → 0.67
        let sparse = raw(vec![vec![0, -500, -500], vec![-500, -500, 0]]);
        assert!(validate(Some(&sparse)).is_ok());
    }

    #[test]
    fn test_custom_policy_limits() {
        let policy = GridPolicy {
            max_rows: 2,
            ..GridPolicy::default()
        };
        assert_eq!(
            policy.validate(Some(&raw(vec![vec![1]; 3]))),
            Err(GridViolation::TooManyRows { max: 2 })
        );
    }
}
