// src/encoder.rs

//! One-pass compression: drives input bytes through the adaptive tree and
//! emits prefix codes or NYT escape sequences.

use crate::bitstream::BitWriter;
use crate::container;
use crate::tree::AdaptiveHuffmanTree;
use crate::utils::error::Result;
use log::debug;
use std::io::{Read, Seek, SeekFrom, Write};

/// Streaming adaptive Huffman encoder over a bit sink.
///
/// The encoder does not write the container header; [`compress_stream`]
/// wraps it with the placeholder-then-patch dance.
pub struct Encoder<W: Write> {
    tree: AdaptiveHuffmanTree,
    bits: BitWriter<W>,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            tree: AdaptiveHuffmanTree::new(),
            bits: BitWriter::new(writer),
        }
    }

    /// Compresses a single byte.
    ///
    /// A byte with a live leaf emits that leaf's code; an unseen byte emits
    /// the current NYT code followed by the raw 8-bit literal. Either way
    /// the tree is updated afterwards, exactly as the decoder will update
    /// its own.
    pub fn encode_byte(&mut self, byte: u8) -> Result<()> {
        match self.tree.leaf_for(byte) {
            Some(leaf) => {
                let code = self.tree.code_for(leaf);
                self.bits.write_code(&code)?;
                self.tree.increment_and_rebalance(leaf);
            }
            None => {
                let escape = self.tree.code_for(self.tree.nyt());
                self.bits.write_code(&escape)?;
                self.bits.write_bits(byte as u32, 8)?;
                self.tree.introduce_symbol(byte);
            }
        }
        Ok(())
    }

    /// Total payload bits emitted so far.
    pub fn bits_written(&self) -> u64 {
        self.bits.bits_written()
    }

    /// Flushes the final padded byte and returns the sink together with the
    /// exact payload bit count for the container header.
    pub fn finish(mut self) -> Result<(W, u64)> {
        self.bits.flush()?;
        let total_bits = self.bits.bits_written();
        debug!(
            "encoder finished: {total_bits} payload bits, {} tree nodes",
            self.tree.node_count()
        );
        Ok((self.bits.into_inner(), total_bits))
    }

    #[cfg(test)]
    pub(crate) fn tree(&self) -> &AdaptiveHuffmanTree {
        &self.tree
    }
}

/// Compresses `reader` into `writer` in container format.
///
/// The header slot is written as a zero placeholder up front and patched
/// with the real bit count after the payload, so the sink must be seekable.
/// Returns the payload bit count.
pub fn compress_stream<R: Read, W: Write + Seek>(reader: R, mut writer: W) -> Result<u64> {
    let header_pos = writer.stream_position()?;
    container::write_bit_count(&mut writer, 0)?;

    let mut encoder = Encoder::new(writer);
    for byte in reader.bytes() {
        encoder.encode_byte(byte?)?;
    }
    let (mut writer, total_bits) = encoder.finish()?;

    writer.seek(SeekFrom::Start(header_pos))?;
    container::write_bit_count(&mut writer, total_bits)?;
    writer.flush()?;
    Ok(total_bits)
}
