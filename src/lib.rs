//! The scrypt password-based key derivation function (RFC 7914), plus a
//! self-describing `$s0$` password hash record for storage and verification.
//!
//! scrypt is memory-hard: deriving a key walks an N·128·r-byte vector in a
//! data-dependent order, so an attacker cannot trade that memory away for
//! circuit area. Cost is set by `(log2 N, r, p)`; see [`Params`].

#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

mod error;
mod hmac;
mod params;
mod password;
mod pbkdf2;
mod romix;
mod salsa;

pub use error::Error;
pub use params::Params;
pub use password::{hash_password, hash_password_with, verify_password};
use pbkdf2::pbkdf2;
use zeroize::Zeroize;

/// Derives `output.len()` bytes from `password` and `salt`.
///
/// The three stages are PBKDF2-HMAC-SHA256 expansion to p·128·r bytes, one
/// memory-hard mixing pass per 128·r-byte slice, and a final PBKDF2 keyed by
/// the password over the mixed bytes. The p passes touch disjoint slices, so
/// they run here sequentially over a single reused mixing array; the result
/// does not depend on their order.
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    if output.is_empty() || (output.len() - 1) / 32 >= 0xffff_ffff {
        return Err(Error::InvalidOutputLen);
    }
    let n = params.n();
    let r128 = params.block_len();
    let mut b = vec![0; r128 * params.p() as usize];
    pbkdf2(password, salt, 1, &mut b)?;
    // the data-dependent reads need the whole array resident; surface
    // allocation failure instead of aborting
    let mut v = Vec::new();
    if v.try_reserve_exact(n * r128).is_err() {
        b.zeroize();
        return Err(Error::OutOfMemory);
    }
    v.resize(n * r128, 0);
    let mut t = vec![0; r128];
    for chunk in b.chunks_mut(r128) {
        romix::ro_mix(chunk, &mut v, &mut t, n);
    }
    let res = pbkdf2(password, &b, 1, output);
    b.zeroize();
    v.zeroize();
    t.zeroize();
    res
}

/// String-input convenience form of [`scrypt`]: both `password` and `salt`
/// contribute their UTF-8 bytes, and the cost is given as `(log2 N, r, p)`.
pub fn derive(
    password: &str,
    salt: &str,
    log_n: u8,
    r: u32,
    p: u32,
    len: usize,
) -> Result<Vec<u8>, Error> {
    let params = Params::new(log_n, r, p)?;
    let mut output = vec![0; len];
    scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)?;
    Ok(output)
}

/// [`derive`] with [`Params::RECOMMENDED`].
pub fn derive_default(password: &str, salt: &str, len: usize) -> Result<Vec<u8>, Error> {
    let mut output = vec![0; len];
    scrypt(
        password.as_bytes(),
        salt.as_bytes(),
        &Params::RECOMMENDED,
        &mut output,
    )?;
    Ok(output)
}
