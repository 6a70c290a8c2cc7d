//! Checkerboard backdrop for translucent colors.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Cells of a `cell`-sized checkerboard covering `rect` that are painted dark.
/// The top-left cell is light.
pub(crate) fn dark_cells(rect: Rect, cell: f64) -> impl Iterator<Item = Rect> {
    let cols = (rect.width() / cell).ceil().max(0.0) as usize;
    let rows = (rect.height() / cell).ceil().max(0.0) as usize;
    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| (row, col)))
        .filter(|(row, col)| (row + col) % 2 == 1)
        .map(move |(row, col)| {
            let x = rect.x0 + col as f64 * cell;
            let y = rect.y0 + row as f64 * cell;
            Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1))
        })
}

pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, cell: f64) {
    cx.fill(&rect, LIGHT, 0.0);
    for dark in dark_cells(rect, cell) {
        cx.fill(&dark, DARK, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_cells_alternate_and_stay_inside() {
        let rect = Rect::new(0.0, 0.0, 12.0, 10.0);
        let cells: Vec<Rect> = dark_cells(rect, 5.0).collect();
        // 3 columns x 2 rows, half of them dark
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], Rect::new(5.0, 0.0, 10.0, 5.0));
        assert!(cells.iter().all(|c| c.x1 <= rect.x1 && c.y1 <= rect.y1));
    }
}
