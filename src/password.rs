//! Self-describing password hash records.
//!
//! A record looks like
//! `$s0$000e0801$MTIzNDU2Nzg5MGFiY2RlZg==$Yt/WCkVVnAM9AOiAA39Fqkc5uvmXmJVSsROW7zliyzs=`:
//! a version tag, the packed parameter word as eight lowercase hex digits,
//! then the base64 salt and derived key.

use crate::{error::Error, params::Params, scrypt};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

const VERSION_TAG: &str = "s0";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Hashes `password` with the recommended parameters into a storable record.
pub fn hash_password(password: &str) -> Result<String, Error> {
    hash_password_with(password, &Params::RECOMMENDED)
}

/// Hashes `password` with caller-chosen parameters. The record stores r and
/// p in one byte each, so values above 255 are rejected rather than
/// truncated.
pub fn hash_password_with(password: &str, params: &Params) -> Result<String, Error> {
    let packed = pack(params)?;
    let mut salt = [0; SALT_LEN];
    OsRng.try_fill_bytes(&mut salt)?;
    let mut key = [0; KEY_LEN];
    scrypt(password.as_bytes(), &salt, params, &mut key)?;
    let record = format!(
        "${VERSION_TAG}${packed:08x}${}${}",
        STANDARD.encode(salt),
        STANDARD.encode(key)
    );
    key.zeroize();
    Ok(record)
}

/// Checks `password` against a record produced by [`hash_password`].
///
/// Malformed records and mismatching passwords are indistinguishable to the
/// caller; both come back `false`. The key comparison runs in constant time.
#[must_use]
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let Ok(record) = Record::parse(encoded) else {
        return false;
    };
    let mut key = [0; KEY_LEN];
    if scrypt(password.as_bytes(), &record.salt, &record.params, &mut key).is_err() {
        return false;
    }
    let matches = bool::from(key.ct_eq(&record.key));
    key.zeroize();
    matches
}

struct Record {
    params: Params,
    salt: [u8; SALT_LEN],
    key: [u8; KEY_LEN],
}

impl Drop for Record {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl Record {
    fn parse(encoded: &str) -> Result<Self, Error> {
        let mut fields = encoded.split('$');
        // the record opens with a separator, so the first field is empty
        if fields.next() != Some("") {
            return Err(Error::MalformedRecord);
        }
        if fields.next() != Some(VERSION_TAG) {
            return Err(Error::MalformedRecord);
        }
        let hex = fields.next().ok_or(Error::MalformedRecord)?;
        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedRecord);
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| Error::MalformedRecord)?;
        let params = unpack(packed)?;
        let salt = decode_field::<SALT_LEN>(fields.next())?;
        let key = decode_field::<KEY_LEN>(fields.next())?;
        if fields.next().is_some() {
            return Err(Error::MalformedRecord);
        }
        Ok(Self { params, salt, key })
    }
}

fn decode_field<const N: usize>(field: Option<&str>) -> Result<[u8; N], Error> {
    let mut bytes = STANDARD
        .decode(field.ok_or(Error::MalformedRecord)?)
        .map_err(|_| Error::MalformedRecord)?;
    let out = <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| Error::MalformedRecord);
    bytes.zeroize();
    out
}

// big-endian packed word: log2(N) in bits 31..16, r in 15..8, p in 7..0
fn pack(params: &Params) -> Result<u32, Error> {
    let (r, p) = (params.r(), params.p());
    if r > 0xff || p > 0xff {
        return Err(Error::InvalidParams);
    }
    Ok(u32::from(params.log_n()) << 16 | r << 8 | p)
}

fn unpack(packed: u32) -> Result<Params, Error> {
    let log_n = u8::try_from(packed >> 16).map_err(|_| Error::MalformedRecord)?;
    let r = (packed >> 8) & 0xff;
    let p = packed & 0xff;
    // an out-of-range triple makes the record itself unusable, so it is a
    // format defect here, not a caller parameter error
    Params::new(log_n, r, p).map_err(|_| Error::MalformedRecord)
}
