//! Block-diagonal assembly of dense and symmetric matrices.
//!
//! Inputs with no elements are dropped before sizing, so they never
//! contribute a block. The output is allocated once and every block is
//! copied into its own diagonal slot; everything else stays zero.

use ndarray::{s, Array2, ArrayView2};

use crate::symmetric::SymmetricMatrix;
use crate::Matrix;

#[derive(Debug)]
enum Block<'a> {
    Dense(ArrayView2<'a, f64>),
    Symmetric(&'a SymmetricMatrix),
}

impl Block<'_> {
    fn dim(&self) -> (usize, usize) {
        match self {
            Block::Dense(view) => view.dim(),
            Block::Symmetric(sym) => (sym.size(), sym.size()),
        }
    }
}

/// Collects blocks and assembles them into a single block-diagonal matrix.
///
/// Dense views and packed symmetric matrices may be mixed; a symmetric block
/// is expanded into its full square form when the result is built.
#[derive(Debug, Default)]
pub struct BlockDiagBuilder<'a> {
    blocks: Vec<Block<'a>>,
    rows: usize,
    cols: usize,
}

impl<'a> BlockDiagBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `block`; a block with zero rows or columns is ignored.
    pub fn push(&mut self, block: ArrayView2<'a, f64>) -> &mut Self {
        self.queue(Block::Dense(block))
    }

    /// Queues a symmetric `block` of size `n` as an `n x n` dense block.
    pub fn push_symmetric(&mut self, block: &'a SymmetricMatrix) -> &mut Self {
        self.queue(Block::Symmetric(block))
    }

    fn queue(&mut self, block: Block<'a>) -> &mut Self {
        let (r, c) = block.dim();
        if r == 0 || c == 0 {
            log::trace!("block_diag: skipping empty {r}x{c} block");
            return self;
        }
        self.rows += r;
        self.cols += c;
        self.blocks.push(block);
        self
    }

    /// Shape of the matrix [`build`](Self::build) will return.
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn build(&self) -> Matrix {
        let mut out = Array2::zeros((self.rows, self.cols));
        let (mut r0, mut c0) = (0, 0);
        for block in &self.blocks {
            let (r, c) = block.dim();
            let mut slot = out.slice_mut(s![r0..r0 + r, c0..c0 + c]);
            match block {
                Block::Dense(view) => slot.assign(view),
                Block::Symmetric(sym) => {
                    slot.indexed_iter_mut().for_each(|((i, j), v)| *v = sym.get(i, j))
                }
            }
            r0 += r;
            c0 += c;
        }
        log::debug!(
            "block_diag: assembled {} blocks into {}x{}",
            self.blocks.len(),
            self.rows,
            self.cols
        );
        out
    }
}

/// Places `matrices` along the diagonal in order. Returns the empty `0x0`
/// matrix when every input is empty.
///
/// Symmetric inputs can be mixed in through
/// [`BlockDiagBuilder::push_symmetric`].
pub fn block_diag<'a, I>(matrices: I) -> Matrix
where
    I: IntoIterator<Item = ArrayView2<'a, f64>>,
{
    let mut builder = BlockDiagBuilder::new();
    for m in matrices {
        builder.push(m);
    }
    builder.build()
}

/// Symmetric counterpart of [`block_diag`]: each non-empty input of size `n`
/// becomes an `n x n` diagonal block of the result.
pub fn block_diag_symmetric<'a, I>(matrices: I) -> SymmetricMatrix
where
    I: IntoIterator<Item = &'a SymmetricMatrix>,
{
    let blocks: Vec<&SymmetricMatrix> = matrices.into_iter().filter(|m| !m.is_empty()).collect();
    let n = blocks.iter().map(|m| m.size()).sum();
    let mut out = SymmetricMatrix::zeros(n);
    let mut offset = 0;
    for block in &blocks {
        let size = block.size();
        for i in 0..size {
            for j in i..size {
                out.set(offset + i, offset + j, block.get(i, j));
            }
        }
        offset += size;
    }
    log::debug!(
        "block_diag_symmetric: assembled {} blocks into size {n}",
        blocks.len()
    );
    out
}
