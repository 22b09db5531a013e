//! Error correction block splitting and codeword interleaving

use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::VersionParams;
use crate::error::{EncodeError, Result};

/// One error correction block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Data codewords
    pub data: Vec<u8>,
    /// Reed-Solomon parity for `data`
    pub parity: Vec<u8>,
}

impl Block {
    /// Data plus parity codewords
    pub(crate) fn len(&self) -> usize {
        self.data.len() + self.parity.len()
    }
}

/// Block geometry for one version/level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Blocks of `short_block_len` codewords, placed first
    pub num_short_blocks: usize,
    /// Blocks one data codeword longer
    pub num_long_blocks: usize,
    /// Total (data + parity) length of a short block
    pub short_block_len: usize,
    /// Parity codewords in every block
    pub ecc_per_block: usize,
}

impl BlockLayout {
    /// Split `params.total_codewords` over `params.num_blocks`
    pub fn new(params: &VersionParams) -> Self {
        let num_long_blocks = params.total_codewords % params.num_blocks;
        Self {
            num_short_blocks: params.num_blocks - num_long_blocks,
            num_long_blocks,
            short_block_len: params.total_codewords / params.num_blocks,
            ecc_per_block: params.ecc_per_block,
        }
    }

    /// Short plus long blocks
    pub fn num_blocks(&self) -> usize {
        self.num_short_blocks + self.num_long_blocks
    }

    /// Data codewords in block `index`; long blocks come last and carry one more
    pub fn data_len(&self, index: usize) -> usize {
        let short = self.short_block_len - self.ecc_per_block;
        if index < self.num_short_blocks {
            short
        } else {
            short + 1
        }
    }

    /// Total (data + parity) codewords in block `index`
    pub fn block_len(&self, index: usize) -> usize {
        self.data_len(index) + self.ecc_per_block
    }
}

fn check_block_lengths(blocks: &[Block], layout: &BlockLayout) -> Result<()> {
    if blocks.len() != layout.num_blocks() {
        return Err(EncodeError::InternalInconsistency(format!(
            "{} blocks built, layout has {}",
            blocks.len(),
            layout.num_blocks()
        )));
    }
    for (index, block) in blocks.iter().enumerate() {
        if block.len() != layout.block_len(index) {
            return Err(EncodeError::InternalInconsistency(format!(
                "block {index} holds {} codewords, expected {}",
                block.len(),
                layout.block_len(index)
            )));
        }
    }
    Ok(())
}

/// Split data codewords into blocks and attach each block's parity
pub fn split_into_blocks(data: &[u8], params: &VersionParams) -> Result<Vec<Block>> {
    if data.len() != params.data_capacity {
        return Err(EncodeError::InternalInconsistency(format!(
            "{} data codewords supplied, version {} expects {}",
            data.len(),
            params.version,
            params.data_capacity
        )));
    }

    let layout = BlockLayout::new(params);
    let declared: usize = (0..layout.num_blocks()).map(|i| layout.data_len(i)).sum();
    if declared != params.data_capacity {
        return Err(EncodeError::InternalInconsistency(format!(
            "block data lengths sum to {declared}, version {} declares {}",
            params.version, params.data_capacity
        )));
    }

    let rs = ReedSolomonEncoder::new(params.ecc_per_block)?;
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(layout.num_blocks())?;

    let mut offset = 0;
    for index in 0..layout.num_blocks() {
        let chunk = &data[offset..offset + layout.data_len(index)];
        offset += chunk.len();
        blocks.push(Block {
            data: chunk.to_vec(),
            parity: rs.compute_parity(chunk)?,
        });
    }

    check_block_lengths(&blocks, &layout)?;
    Ok(blocks)
}

/// Interleave block codewords column by column: all data codewords first, then all parity
pub fn interleave(blocks: &[Block], params: &VersionParams) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    result.try_reserve_exact(params.total_codewords)?;

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_data {
        // Short blocks have no codeword at the last data position
        result.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    for i in 0..params.ecc_per_block {
        result.extend(blocks.iter().filter_map(|b| b.parity.get(i)));
    }

    if result.len() != params.total_codewords {
        return Err(EncodeError::InternalInconsistency(format!(
            "interleaved {} codewords, version {} holds {}",
            result.len(),
            params.version,
            params.total_codewords
        )));
    }
    Ok(result)
}

/// Compute parity for every block and produce the final codeword sequence
pub fn add_ecc_and_interleave(data: &[u8], params: &VersionParams) -> Result<Vec<u8>> {
    let blocks = split_into_blocks(data, params)?;
    interleave(&blocks, params)
}
