//! Evaluate a light over a whole grid of surface samples.
//!
//! The grid is cut into tiles which worker threads take from a
//! **BlockQueue**. Finished tiles are sent back over a channel and
//! merged into the map by the calling thread.

// others
use tracing::{debug, info};
// felights
use crate::blockqueue::BlockQueue;
use crate::core::error::{LightError, Result};
use crate::core::felights::Float;
use crate::core::geometry::Vector3f;
use crate::core::light::Light;

const TILE_SIZE: usize = 16;

/// Placement of the sample grid in user space. Rows start at
/// `y + row * dy`; along a row the sample x coordinate starts at the
/// tile's first column and is stepped by adding `dx` per sample, so
/// for fractional steps it may differ from `x + col * dx` in the last
/// bits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightMapGrid {
    pub x: Float,
    pub y: Float,
    pub dx: Float,
    pub dy: Float,
    pub width: usize,
    pub height: usize,
}

impl LightMapGrid {
    pub fn n_samples(&self) -> usize {
        self.width * self.height
    }
}

struct LightTile {
    x0: usize,
    y0: usize,
    x1: usize,
    vectors: Vec<Vector3f>,
}

/// Light vectors for every sample of a grid, stored row by row.
#[derive(Debug, Clone)]
pub struct LightMap {
    width: usize,
    height: usize,
    vectors: Vec<Vector3f>,
}

impl LightMap {
    /// Evaluates `light` for every grid sample, taking the surface
    /// height of sample `(col, row)` from `heights[row * width + col]`.
    /// With `num_threads == 0` one worker per detected core is used.
    pub fn compute(
        light: &(dyn Light + Send + Sync),
        grid: &LightMapGrid,
        heights: &[Float],
        num_threads: u8,
    ) -> Result<LightMap> {
        let n_samples: usize = grid.n_samples();
        if heights.len() != n_samples {
            return Err(LightError::HeightField {
                expected: n_samples,
                found: heights.len(),
            });
        }
        if light.is_constant() {
            debug!("constant light, evaluating once for {} samples", n_samples);
            let l: Vector3f = light.get_light(grid.x, grid.y, 0.0 as Float);
            return Ok(LightMap {
                width: grid.width,
                height: grid.height,
                vectors: vec![l; n_samples],
            });
        }
        let num_cores: usize = if num_threads == 0_u8 {
            num_cpus::get()
        } else {
            num_threads as usize
        };
        let block_queue = BlockQueue::new(
            (grid.width as u32, grid.height as u32),
            (TILE_SIZE as u32, TILE_SIZE as u32),
        );
        info!(
            "Evaluating {}x{} light map in {} tile(s) with {} thread(s) ...",
            grid.width,
            grid.height,
            block_queue.n_blocks(),
            num_cores
        );
        let mut vectors: Vec<Vector3f> = vec![Vector3f::default(); n_samples];
        {
            let bq = &block_queue;
            let vectors = &mut vectors;
            let grid: LightMapGrid = *grid;
            crossbeam::scope(|scope| {
                let (tile_tx, tile_rx) = crossbeam_channel::bounded(num_cores);
                // spawn worker threads
                for _ in 0..num_cores {
                    let tile_tx = tile_tx.clone();
                    scope.spawn(move |_| {
                        while let Some((tx, ty)) = bq.next() {
                            let tile: LightTile = evaluate_tile(light, &grid, heights, tx, ty);
                            if tile_tx.send(tile).is_err() {
                                break;
                            }
                        }
                    });
                }
                drop(tile_tx);
                // merge tiles as they arrive
                for tile in tile_rx.iter() {
                    let tile_width: usize = tile.x1 - tile.x0;
                    for (i, row) in tile.vectors.chunks(tile_width).enumerate() {
                        let start: usize = (tile.y0 + i) * grid.width + tile.x0;
                        vectors[start..start + tile_width].copy_from_slice(row);
                    }
                }
            })
            .map_err(|_| LightError::WorkerPanic)?;
        }
        Ok(LightMap {
            width: grid.width,
            height: grid.height,
            vectors,
        })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Light vector of sample `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Vector3f {
        self.vectors[row * self.width + col]
    }
    pub fn vectors(&self) -> &[Vector3f] {
        &self.vectors
    }
}

fn evaluate_tile(
    light: &(dyn Light + Send + Sync),
    grid: &LightMapGrid,
    heights: &[Float],
    tx: u32,
    ty: u32,
) -> LightTile {
    let x0: usize = tx as usize * TILE_SIZE;
    let x1: usize = (x0 + TILE_SIZE).min(grid.width);
    let y0: usize = ty as usize * TILE_SIZE;
    let y1: usize = (y0 + TILE_SIZE).min(grid.height);
    let mut vectors: Vec<Vector3f> = Vec::with_capacity((x1 - x0) * (y1 - y0));
    let x: Float = grid.x + x0 as Float * grid.dx;
    for row in y0..y1 {
        let y: Float = grid.y + row as Float * grid.dy;
        let z_row: &[Float] = &heights[row * grid.width + x0..row * grid.width + x1];
        vectors.extend(light.get_light_row(x, y, grid.dx, z_row));
    }
    LightTile { x0, y0, x1, vectors }
}
