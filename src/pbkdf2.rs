use crate::{error::Error, hmac::HmacSha256};

const H_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256: fills `output` from `password` and `salt` with
/// `rounds` iterations per block. The block counter is big-endian and
/// 1-indexed; the final block is truncated to whatever remains of `output`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pbkdf2(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> Result<(), Error> {
    if rounds == 0 {
        return Err(Error::InvalidParams);
    }
    // at most 2^32 - 1 blocks of 32 bytes
    if output.is_empty() || (output.len() - 1) / H_LEN >= 0xffff_ffff {
        return Err(Error::InvalidOutputLen);
    }
    let hmac = HmacSha256::new_from_slice(password);
    for (i, chunk) in output.chunks_mut(H_LEN).enumerate() {
        block(i as u32, chunk, &hmac, salt, rounds);
    }
    Ok(())
}

#[inline(always)]
fn block(i: u32, chunk: &mut [u8], hmac: &HmacSha256, salt: &[u8], rounds: u32) {
    for v in chunk.iter_mut() {
        *v = 0;
    }
    let mut prev = {
        let mut mac = hmac.clone();
        mac.update(salt);
        mac.update(&(i + 1).to_be_bytes());
        let u = mac.finalize_fixed();
        xor(chunk, &u);
        u
    };
    for _ in 1..rounds {
        let mut mac = hmac.clone();
        mac.update(&prev);
        prev = mac.finalize_fixed();
        xor(chunk, &prev);
    }
}

#[inline(always)]
fn xor(res: &mut [u8], u: &[u8]) {
    debug_assert!(u.len() >= res.len(), "length mismatch in xor");
    res.iter_mut().zip(u.iter()).for_each(|(a, b)| *a ^= b);
}
