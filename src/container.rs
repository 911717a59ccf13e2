// src/container.rs

//! The fixed container layout: an 8-byte big-endian payload bit count,
//! followed by the MSB-first bit-packed payload with its final byte
//! zero-padded on the low bits.

use crate::utils::error::{CodecError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read, Write};

/// Size of the bit-count header in bytes.
pub const HEADER_LEN: u64 = 8;

/// Writes the bit-count slot. The encoder first writes a zero placeholder,
/// then seeks back and rewrites it once the payload length is known.
pub fn write_bit_count<W: Write>(writer: &mut W, bits: u64) -> Result<()> {
    Ok(writer.write_u64::<BigEndian>(bits)?)
}

/// Reads the declared payload bit count. An input shorter than the header
/// is a truncated stream, not a bare I/O error.
pub fn read_bit_count<R: Read>(reader: &mut R) -> Result<u64> {
    reader.read_u64::<BigEndian>().map_err(|err| {
        if err.kind() == ErrorKind::UnexpectedEof {
            CodecError::TruncatedStream
        } else {
            CodecError::Io(err)
        }
    })
}
