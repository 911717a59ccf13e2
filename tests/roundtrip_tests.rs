use adaptive_huffman::{compress, decompress, CodecError};

fn assert_roundtrip(input: &[u8]) {
    let packed = compress(input).expect("compression failed");
    let unpacked = decompress(&packed).expect("decompression failed");
    assert_eq!(unpacked, input, "round trip mismatch for {} bytes", input.len());
}

#[test]
fn test_empty_input() {
    assert_roundtrip(&[]);
}

#[test]
fn test_single_byte() {
    for byte in [0x00, 0x41, 0x7F, 0xFF] {
        assert_roundtrip(&[byte]);
    }
}

#[test]
fn test_all_identical_bytes() {
    assert_roundtrip(&vec![0x55; 1000]);
}

#[test]
fn test_full_alphabet() {
    let ascending: Vec<u8> = (0..=255).collect();
    assert_roundtrip(&ascending);

    // Every byte value seen twice, second pass in reverse order.
    let mut both_ways = ascending.clone();
    both_ways.extend(ascending.iter().rev());
    assert_roundtrip(&both_ways);
}

#[test]
fn test_text_input() {
    assert_roundtrip(b"the rain in spain stays mainly in the plain");
    assert_roundtrip(b"abracadabra");
}

#[test]
fn test_skewed_distribution() {
    // Long runs force repeated weight collisions and block-leader swaps.
    let mut input = Vec::new();
    for (count, byte) in [(500, b'a'), (120, b'b'), (30, b'c'), (7, b'd'), (1, b'e')] {
        input.extend(std::iter::repeat(byte).take(count));
    }
    assert_roundtrip(&input);
}

#[test]
fn test_pseudorandom_input() {
    // Fixed-seed LCG keeps the test deterministic without extra crates.
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let input: Vec<u8> = (0..4096)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect();
    assert_roundtrip(&input);
}

#[test]
fn test_deterministic_output() {
    let input = b"compression must be reproducible bit for bit";
    let first = compress(input).expect("compression failed");
    let second = compress(input).expect("compression failed");
    assert_eq!(first, second);
}

#[test]
fn test_first_symbol_escape_is_raw_literal() {
    // The singleton tree's NYT code is empty, so the whole payload for a
    // one-byte input is the raw literal padded to a byte.
    for value in [0x00u8, 0x41, 0xFF] {
        let packed = compress(&[value]).expect("compression failed");
        assert_eq!(packed.len(), 9);
        assert_eq!(&packed[..8], &[0, 0, 0, 0, 0, 0, 0, 8]);
        assert_eq!(packed[8], value);
    }
}

#[test]
fn test_concrete_aab_artifact() {
    // "AAB": raw 'A' literal (8 bits), 1-bit code for the second 'A', 1-bit
    // NYT escape plus the raw 'B' literal (9 bits); 18 bits in all, padded
    // to three payload bytes.
    let packed = compress(&[0x41, 0x41, 0x42]).expect("compression failed");
    assert_eq!(&packed[..8], &[0, 0, 0, 0, 0, 0, 0, 18]);
    assert_eq!(&packed[8..], &[0x41, 0x90, 0x80]);
    assert_eq!(decompress(&packed).expect("decompression failed"), &[0x41, 0x41, 0x42]);
}

#[test]
fn test_truncated_payload_fails() {
    let packed = compress(b"truncation must not pass silently").expect("compression failed");
    for keep in [8, 9, packed.len() - 1] {
        let result = decompress(&packed[..keep]);
        assert!(
            matches!(result, Err(CodecError::TruncatedStream)),
            "expected TruncatedStream with {keep} of {} bytes",
            packed.len()
        );
    }
}

#[test]
fn test_short_header_fails() {
    for len in 0..8 {
        let result = decompress(&vec![0u8; len]);
        assert!(matches!(result, Err(CodecError::TruncatedStream)));
    }
}

#[test]
fn test_overdeclared_bit_count_fails() {
    // A header claiming more bits than the payload holds must surface as a
    // truncated stream, never as garbage output.
    let mut packed = compress(&[0x41, 0x41, 0x42]).expect("compression failed");
    packed[7] = 200;
    assert!(matches!(
        decompress(&packed),
        Err(CodecError::TruncatedStream)
    ));
}
