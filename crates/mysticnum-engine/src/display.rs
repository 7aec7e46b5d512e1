//! Text rendering of the 3x3 matrix.

use mysticnum_core::models::FrequencyMatrix;

const CELL_WIDTH: usize = 9;

/// Rows read down the columns: 1 4 7 / 2 5 8 / 3 6 9.
const ROWS: [[u8; 3]; 3] = [[1, 4, 7], [2, 5, 8], [3, 6, 9]];

/// Box-drawing grid of the matrix cells, each centered in a fixed width.
pub fn render_grid(matrix: &FrequencyMatrix) -> String {
    let border = |l: &str, m: &str, r: &str| {
        let bar = "━".repeat(CELL_WIDTH);
        format!("{l}{bar}{m}{bar}{m}{bar}{r}")
    };
    let row = |cells: &[u8; 3]| {
        let inner: Vec<String> = cells.iter().map(|&p| pad(matrix.cell(p))).collect();
        format!("┃{}┃", inner.join("┃"))
    };

    [
        border("┏", "┳", "┓"),
        row(&ROWS[0]),
        border("┣", "╋", "┫"),
        row(&ROWS[1]),
        border("┣", "╋", "┫"),
        row(&ROWS[2]),
        border("┗", "┻", "┛"),
    ]
    .join("\n")
}

fn pad(s: &str) -> String {
    let len = s.chars().count();
    let padding = CELL_WIDTH.saturating_sub(len);
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
