// src/decoder.rs

//! One-pass decompression: mirrors the encoder by walking its own copy of
//! the adaptive tree, bit by bit, and growing it identically.

use crate::bitstream::BitReader;
use crate::container;
use crate::tree::{AdaptiveHuffmanTree, NodeKind};
use crate::utils::error::{CodecError, Result};
use log::debug;
use std::io::{Read, Write};

/// Streaming adaptive Huffman decoder over a bounded bit source.
pub struct Decoder<R: Read> {
    tree: AdaptiveHuffmanTree,
    bits: BitReader<R>,
}

impl<R: Read> Decoder<R> {
    /// `total_bits` is the payload bit count declared in the container
    /// header; the decoder never reads past it, so the pad bits in the
    /// final byte cannot be mistaken for a code.
    pub fn new(reader: R, total_bits: u64) -> Self {
        Self {
            tree: AdaptiveHuffmanTree::new(),
            bits: BitReader::new(reader, total_bits),
        }
    }

    /// Decodes the next byte, or `None` once the declared bit count has
    /// been consumed.
    ///
    /// Running dry in the middle of a code walk or an escape literal is a
    /// [`CodecError::TruncatedStream`]: a partial symbol is never emitted.
    pub fn decode_byte(&mut self) -> Result<Option<u8>> {
        if self.bits.bits_remaining() == 0 {
            return Ok(None);
        }

        // Before anything has been decoded the root itself is the NYT leaf
        // and its code is empty, so the first byte is a bare literal.
        if self.tree.is_seed() {
            let byte = self.bits.read_u8()?;
            self.tree.introduce_symbol(byte);
            return Ok(Some(byte));
        }

        let mut cur = self.tree.root();
        loop {
            let bit = self
                .bits
                .read_bit()?
                .ok_or(CodecError::TruncatedStream)?;
            cur = self.tree.descend(cur, bit);
            match self.tree.kind(cur) {
                NodeKind::Internal { .. } => continue,
                NodeKind::Leaf { symbol } => {
                    self.tree.increment_and_rebalance(cur);
                    return Ok(Some(symbol));
                }
                NodeKind::Nyt => {
                    let byte = self.bits.read_u8()?;
                    self.tree.introduce_symbol(byte);
                    return Ok(Some(byte));
                }
            }
        }
    }
}

/// Decompresses a container-format stream from `reader` into `writer`.
/// Returns the number of bytes produced.
pub fn decompress_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<u64> {
    let total_bits = container::read_bit_count(&mut reader)?;
    let mut decoder = Decoder::new(reader, total_bits);

    let mut bytes_out = 0u64;
    while let Some(byte) = decoder.decode_byte()? {
        writer.write_all(&[byte])?;
        bytes_out += 1;
    }
    writer.flush()?;
    debug!("decoder finished: {total_bits} bits -> {bytes_out} bytes");
    Ok(bytes_out)
}
