const STATE_WORDS: usize = 16;
// each loop iteration below is a double round
const ROUNDS: usize = 4;

pub(crate) const BLOCK_LEN: usize = 64;

/// Applies the Salsa20/8 core to a 64-byte block in place: the block is read
/// as 16 little-endian words, permuted through four double rounds, and each
/// word of the result is added (wrapping) back to the input word. scrypt
/// consumes the sum directly; this is a mixing primitive, not a keystream.
pub(crate) fn salsa20_8(block: &mut [u8; BLOCK_LEN]) {
    let mut state = [0; STATE_WORDS];
    for (word, chunk) in state.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }
    let res = run_rounds(&state);
    for (chunk, word) in block.chunks_exact_mut(4).zip(res.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

// one double round: a column pass over the four columns, then a row pass
// over the four rows, each entry naming the words of one quarter round
const QUARTER_ROUNDS: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [5, 9, 13, 1],
    [10, 14, 2, 6],
    [15, 3, 7, 11],
    [0, 1, 2, 3],
    [5, 6, 7, 4],
    [10, 11, 8, 9],
    [15, 12, 13, 14],
];

#[inline(always)]
fn run_rounds(state: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let mut res = *state;
    for _ in 0..ROUNDS {
        for [a, b, c, d] in QUARTER_ROUNDS {
            res[b] ^= res[a].wrapping_add(res[d]).rotate_left(7);
            res[c] ^= res[b].wrapping_add(res[a]).rotate_left(9);
            res[d] ^= res[c].wrapping_add(res[b]).rotate_left(13);
            res[a] ^= res[d].wrapping_add(res[c]).rotate_left(18);
        }
    }
    for (s1, s0) in res.iter_mut().zip(state.iter()) {
        *s1 = s1.wrapping_add(*s0);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::salsa20_8;

    // RFC 7914, section 7
    #[test]
    fn rfc_core_vector() {
        let mut block = [
            0x7e, 0x87, 0x9a, 0x21, 0x4f, 0x3e, 0xc9, 0x86, 0x7c, 0xa9, 0x40, 0xe6, 0x41, 0x71,
            0x8f, 0x26, 0xba, 0xee, 0x55, 0x5b, 0x8c, 0x61, 0xc1, 0xb5, 0x0d, 0xf8, 0x46, 0x11,
            0x6d, 0xcd, 0x3b, 0x1d, 0xee, 0x24, 0xf3, 0x19, 0xdf, 0x9b, 0x3d, 0x85, 0x14, 0x12,
            0x1e, 0x4b, 0x5a, 0xc5, 0xaa, 0x32, 0x76, 0x02, 0x1d, 0x29, 0x09, 0xc7, 0x48, 0x29,
            0xed, 0xeb, 0xc6, 0x8d, 0xb8, 0xb8, 0xc2, 0x5e,
        ];
        let expected = [
            0xa4, 0x1f, 0x85, 0x9c, 0x66, 0x08, 0xcc, 0x99, 0x3b, 0x81, 0xca, 0xcb, 0x02, 0x0c,
            0xef, 0x05, 0x04, 0x4b, 0x21, 0x81, 0xa2, 0xfd, 0x33, 0x7d, 0xfd, 0x7b, 0x1c, 0x63,
            0x96, 0x68, 0x2f, 0x29, 0xb4, 0x39, 0x31, 0x68, 0xe3, 0xc9, 0xe6, 0xbc, 0xfe, 0x6b,
            0xc5, 0xb7, 0xa0, 0x6d, 0x96, 0xba, 0xe4, 0x24, 0xcc, 0x10, 0x2c, 0x91, 0x74, 0x5c,
            0x24, 0xad, 0x67, 0x3d, 0xc7, 0x61, 0x8f, 0x81,
        ];
        salsa20_8(&mut block);
        assert_eq!(block, expected);
    }

    // the all-zero block is the core's well-known fixed point
    #[test]
    fn zero_block_fixed_point() {
        let mut block = [0; 64];
        salsa20_8(&mut block);
        assert_eq!(block, [0; 64]);
    }
}
