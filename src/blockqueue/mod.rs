//! Provides a queue of tile indices for the worker threads of a light
//! map evaluation. The queue itself is not changed after creation we
//! simply work through it with an atomic counter to track the index
//! of the next tile to work on.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The queue of tiles to be worked on shared immutably between worker threads.
pub struct BlockQueue {
    /// The tile indices to work on
    blocks: Vec<(u32, u32)>,
    /// Index of the next tile to be worked on
    next: AtomicUsize,
}

impl BlockQueue {
    /// Create a block queue covering a grid with dimensions `grid`
    /// using tiles of dimension `dim`. Tiles on the right and bottom
    /// border may stick out of the grid; callers clip them.
    pub fn new(grid: (u32, u32), dim: (u32, u32)) -> BlockQueue {
        let dim: (u32, u32) = (dim.0.max(1), dim.1.max(1));
        let num_blocks = (
            (grid.0 + dim.0 - 1) / dim.0,
            (grid.1 + dim.1 - 1) / dim.1,
        );
        let mut blocks: Vec<(u32, u32)> = (0..num_blocks.0 * num_blocks.1)
            .map(|i| (i % num_blocks.0, i / num_blocks.0))
            .collect();
        blocks.sort_by(|a, b| morton2(*a).cmp(&morton2(*b)));
        BlockQueue {
            blocks,
            next: AtomicUsize::new(0),
        }
    }
    /// Get the next tile in the queue or None if the queue is finished
    pub fn next(&self) -> Option<(u32, u32)> {
        let i = self.next.fetch_add(1, Ordering::AcqRel);
        if i >= self.blocks.len() {
            None
        } else {
            Some(self.blocks[i])
        }
    }
    /// Number of tiles covering the grid
    pub fn n_blocks(&self) -> usize {
        self.blocks.len()
    }
}

// 2D Morton codes after Fabian Giesen,
// https://fgiesen.wordpress.com/2009/12/13/decoding-morton-codes/

/// Insert a 0 bit between each of the low 16 bits of x
fn part1_by1(mut x: u32) -> u32 {
    // x = ---- ---- ---- ---- fedc ba98 7654 3210
    x &= 0x0000_ffff;
    // x = ---- ---- fedc ba98 ---- ---- 7654 3210
    x = (x ^ (x << 8)) & 0x00ff_00ff;
    // x = ---- fedc ---- ba98 ---- 7654 ---- 3210
    x = (x ^ (x << 4)) & 0x0f0f_0f0f;
    // x = --fe --dc --ba --98 --76 --54 --32 --10
    x = (x ^ (x << 2)) & 0x3333_3333;
    // x = -f-e -d-c -b-a -9-8 -7-6 -5-4 -3-2 -1-0
    (x ^ (x << 1)) & 0x5555_5555
}

/// Compute the Morton code for the `(x, y)` position.
fn morton2(p: (u32, u32)) -> u32 {
    (part1_by1(p.1) << 1) + part1_by1(p.0)
}
