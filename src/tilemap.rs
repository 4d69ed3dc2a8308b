//! Tile-map storage and coordinate engine
//!
//! Maps between pixel space and grid cells, projects between Cartesian and
//! 2:1 isometric space, and walks a viewport-bounded window of the grid,
//! handing each visible tile to the host's draw callback.
//!
//! The grid is either flat row-major or nested rows; which one is decided
//! once at construction by the [`TileGrid`] variant, never re-detected per
//! access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::Vec2;

/// Integer tile identifier. By caller convention 0 is the empty/background
/// tile; the engine does not enforce that.
pub type TileId = u32;

/// Grid storage: a flat row-major sequence or a sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileGrid {
    Flat(Vec<TileId>),
    Nested(Vec<Vec<TileId>>),
}

/// A (column, row) cell address. Distinct from pixel/world position and
/// allowed to be negative: a camera hanging off the map's edge produces
/// negative indices, which the render window clamp absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileIndex {
    pub col: i64,
    pub row: i64,
}

impl TileIndex {
    #[inline]
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

/// Map a pixel position to the grid cell containing it (floor division
/// per component).
#[inline]
pub fn index_at(pos: Vec2, tile_size: Vec2) -> TileIndex {
    TileIndex::new(
        (pos.x / tile_size.x).floor() as i64,
        (pos.y / tile_size.y).floor() as i64,
    )
}

/// Project a Cartesian point into 2:1 isometric space.
#[inline]
pub fn cart_to_iso(p: Vec2) -> Vec2 {
    Vec2::new(p.x - p.y, (p.x + p.y) / 2.0)
}

/// Exact algebraic inverse of [`cart_to_iso`].
#[inline]
pub fn iso_to_cart(p: Vec2) -> Vec2 {
    Vec2::new(p.y + p.x / 2.0, p.y - p.x / 2.0)
}

/// Per-tile draw callback: cell index, tile id, and the tile's world-space
/// origin (top-left pixel).
pub type DrawFn = Box<dyn FnMut(TileIndex, TileId, Vec2)>;

/// A tile map: grid data, tile pixel size, and grid dimensions.
pub struct TileMap {
    grid: TileGrid,
    tile_size: Vec2,
    cols: u32,
    rows: u32,
    on_draw: Option<DrawFn>,
}

impl TileMap {
    /// Build a map over `grid`, validating that the declared `cols`/`rows`
    /// match the actual storage extents.
    pub fn new(grid: TileGrid, tile_size: Vec2, cols: u32, rows: u32) -> Result<Self> {
        match &grid {
            TileGrid::Flat(cells) => {
                let expected = cols as usize * rows as usize;
                if cells.len() != expected {
                    return Err(Error::validation(
                        "tile grid",
                        format!(
                            "flat grid has {} cells, expected {cols}x{rows} = {expected}",
                            cells.len()
                        ),
                    ));
                }
            }
            TileGrid::Nested(grid_rows) => {
                if grid_rows.len() != rows as usize
                    || grid_rows.iter().any(|r| r.len() != cols as usize)
                {
                    return Err(Error::validation(
                        "tile grid",
                        format!("nested grid does not match declared {cols}x{rows}"),
                    ));
                }
            }
        }

        log::debug!(
            "tile map created: {cols}x{rows}, tile size {}x{}",
            tile_size.x,
            tile_size.y
        );

        Ok(Self {
            grid,
            tile_size,
            cols,
            rows,
            on_draw: None,
        })
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    #[inline]
    pub fn in_bounds(&self, index: TileIndex) -> bool {
        index.col >= 0
            && index.row >= 0
            && (index.col as u64) < u64::from(self.cols)
            && (index.row as u64) < u64::from(self.rows)
    }

    fn bounds_error(&self, index: TileIndex) -> Error {
        Error::IndexOutOfBounds {
            col: index.col,
            row: index.row,
            cols: self.cols,
            rows: self.rows,
        }
    }

    /// Read the tile id at a cell. Out-of-range access is an error, not a
    /// silent clamp.
    pub fn id_at(&self, index: TileIndex) -> Result<TileId> {
        if !self.in_bounds(index) {
            return Err(self.bounds_error(index));
        }
        Ok(self.cell(index.col as usize, index.row as usize))
    }

    /// Write the tile id at a cell.
    pub fn set_id(&mut self, index: TileIndex, id: TileId) -> Result<()> {
        if !self.in_bounds(index) {
            return Err(self.bounds_error(index));
        }
        let (col, row) = (index.col as usize, index.row as usize);
        match &mut self.grid {
            TileGrid::Flat(cells) => cells[row * self.cols as usize + col] = id,
            TileGrid::Nested(rows) => rows[row][col] = id,
        }
        Ok(())
    }

    /// The grid cell containing a pixel position.
    #[inline]
    pub fn index_at(&self, pos: Vec2) -> TileIndex {
        index_at(pos, self.tile_size)
    }

    /// Install the per-tile draw callback used by [`render`](Self::render).
    pub fn set_draw_callback(&mut self, f: impl FnMut(TileIndex, TileId, Vec2) + 'static) {
        self.on_draw = Some(Box::new(f));
    }

    /// Walk the half-open window `[min.col, max.col) x [min.row, max.row)`
    /// row-major, invoking the draw callback once per tile with the cell
    /// index, the tile id, and the tile's world origin.
    ///
    /// The window is clamped to the grid, so a camera partly off the map
    /// renders the visible part. Calling with no draw callback configured is
    /// an error every time.
    pub fn render(&mut self, min: TileIndex, max: TileIndex) -> Result<()> {
        let mut draw = self.on_draw.take().ok_or(Error::MissingCallback)?;

        let col_start = min.col.max(0) as usize;
        let col_end = max.col.clamp(0, i64::from(self.cols)) as usize;
        let row_start = min.row.max(0) as usize;
        let row_end = max.row.clamp(0, i64::from(self.rows)) as usize;

        for row in row_start..row_end {
            for col in col_start..col_end {
                let id = self.cell(col, row);
                let origin = Vec2::new(
                    col as f64 * self.tile_size.x,
                    row as f64 * self.tile_size.y,
                );
                draw(TileIndex::new(col as i64, row as i64), id, origin);
            }
        }

        self.on_draw = Some(draw);
        Ok(())
    }

    /// Unchecked cell read; callers guarantee bounds.
    #[inline]
    fn cell(&self, col: usize, row: usize) -> TileId {
        match &self.grid {
            TileGrid::Flat(cells) => cells[row * self.cols as usize + col],
            TileGrid::Nested(rows) => rows[row][col],
        }
    }
}

impl fmt::Debug for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileMap")
            .field("grid", &self.grid)
            .field("tile_size", &self.tile_size)
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("on_draw", &self.on_draw.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
