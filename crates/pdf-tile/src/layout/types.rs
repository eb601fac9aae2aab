//! Layout data types for tiling
//!
//! These types represent the intermediate layout calculations between
//! grid planning and PDF rendering. All coordinates are in points with the
//! origin at the top-left corner of the page and y growing downwards.

/// Grid of equally sized cells on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Number of columns in the grid
    pub columns: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Width of each cell in points
    pub cell_width: f32,
    /// Height of each cell in points
    pub cell_height: f32,
    /// Space between neighbouring cells in points
    pub gap: f32,
    /// Left edge of the first column
    pub origin_x: f32,
    /// Top edge of the first row
    pub origin_y: f32,
}

impl GridSpec {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Total (width, height) covered by the cells and the gaps between them
    pub fn footprint(&self) -> (f32, f32) {
        let width = self.columns as f32 * self.cell_width
            + self.columns.saturating_sub(1) as f32 * self.gap;
        let height =
            self.rows as f32 * self.cell_height + self.rows.saturating_sub(1) as f32 * self.gap;
        (width, height)
    }

    /// Move the grid so its first cell starts at (x, y)
    pub fn at_origin(self, x: f32, y: f32) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            ..self
        }
    }

    /// Bounds of the cell at a 0-based index, in row-major order
    pub fn cell_box(&self, index: usize) -> CellBox {
        let row = index / self.columns;
        let col = index % self.columns;

        CellBox {
            x: self.origin_x + col as f32 * (self.cell_width + self.gap),
            y: self.origin_y + row as f32 * (self.cell_height + self.gap),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// The first `count` cells, in row-major order
    pub fn cells(&self, count: usize) -> impl Iterator<Item = CellBox> + '_ {
        (0..count).map(move |index| self.cell_box(index))
    }
}

/// One cell's top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// How the source is placed inside one cell
///
/// Paint order: translate to (`translate_x`, `translate_y`), scale uniformly,
/// and when `rotate90` is set, shift right by the source height and rotate
/// +90 degrees before painting the source at its native origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotate90: bool,
}

/// 2D affine transform in PDF matrix order
///
/// Maps (x, y) to (a*x + c*y + e, b*x + d*y + f).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(s: f32) -> Self {
        Self::new(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    /// Quarter turn; clockwise on a y-down page
    pub fn rotate90() -> Self {
        Self::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0)
    }

    /// Apply `self` first, then `next`
    pub fn then(self, next: Affine) -> Affine {
        Affine {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    /// Map a point through the transform
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_applies_left_to_right() {
        let m = Affine::scale(2.0).then(Affine::translate(10.0, 20.0));
        assert_eq!(m.apply(1.0, 1.0), (12.0, 22.0));

        let m = Affine::translate(10.0, 20.0).then(Affine::scale(2.0));
        assert_eq!(m.apply(1.0, 1.0), (22.0, 42.0));
    }

    #[test]
    fn test_rotate90_turns_x_axis_down() {
        let r = Affine::rotate90();
        assert_eq!(r.apply(1.0, 0.0), (0.0, 1.0));
        assert_eq!(r.apply(0.0, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn test_cell_box_row_major() {
        let grid = GridSpec {
            columns: 3,
            rows: 2,
            cell_width: 100.0,
            cell_height: 50.0,
            gap: 5.0,
            origin_x: 10.0,
            origin_y: 20.0,
        };

        let cell = grid.cell_box(4);
        assert_eq!(cell, CellBox::new(115.0, 75.0, 100.0, 50.0));
        assert_eq!(cell.right(), 215.0);
        assert_eq!(cell.bottom(), 125.0);

        let xs: Vec<f32> = grid.cells(4).map(|c| c.x).collect();
        assert_eq!(xs, vec![10.0, 115.0, 220.0, 10.0]);
    }

    #[test]
    fn test_footprint() {
        let grid = GridSpec {
            columns: 2,
            rows: 5,
            cell_width: 252.0,
            cell_height: 144.0,
            gap: 18.0,
            origin_x: 0.0,
            origin_y: 0.0,
        };
        assert_eq!(grid.footprint(), (522.0, 792.0));
    }
}
