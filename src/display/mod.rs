use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use num_traits::Float;

use crate::linalg::Matrix;

impl<F: Float + Display> Matrix<F> {
    /// Boxed table rendering of the matrix for terminal inspection.
    ///
    /// Rows appear in visual row-major order for both storage layouts, the
    /// same order [`Matrix::to_delimited`] uses.
    pub fn pretty(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        for i in 0..self.rows() {
            table.add_row(
                self.row(i)
                    .iter()
                    .map(|x| Cell::new(x).set_alignment(CellAlignment::Right))
                    .collect::<Vec<_>>(),
            );
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_renders_every_cell_in_row_major_order() {
        let m = Matrix::from_columns(vec![vec![1.0, 3.0], vec![2.0, 4.0]]).unwrap();
        let rendered = m.pretty();
        for value in ["1", "2", "3", "4"] {
            assert!(rendered.contains(value), "missing {value} in:\n{rendered}");
        }
        let row_of_1 = rendered.lines().position(|l| l.contains('1')).unwrap();
        let row_of_3 = rendered.lines().position(|l| l.contains('3')).unwrap();
        assert!(row_of_1 < row_of_3, "rows out of order:\n{rendered}");
    }
}
