use crate::error::Error;

/// scrypt cost parameters.
///
/// `log_n` is the base-2 logarithm of the CPU/memory cost N, the same form
/// the password-hash record packs; `r` scales the working-block size and
/// `p` the number of independent mixing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    log_n: u8,
    r: u32,
    p: u32,
}

impl Params {
    /// Interactive-login defaults: N = 2^14, r = 8, p = 1, i.e. 16 MiB of
    /// mixing state.
    pub const RECOMMENDED: Self = Self {
        log_n: 14,
        r: 8,
        p: 1,
    };

    /// Validates a parameter triple. N must be a power of two between 2 and
    /// 2^63 with N < 2^(128·r/8), r and p must be positive with
    /// r·p < 2^30, and every buffer the derivation needs must fit in the
    /// address space.
    #[allow(clippy::cast_possible_truncation, clippy::checked_conversions)]
    pub fn new(log_n: u8, r: u32, p: u32) -> Result<Self, Error> {
        if log_n == 0 || log_n > 63 || u32::from(log_n) >= usize::BITS {
            return Err(Error::InvalidParams);
        }
        if r == 0 || p == 0 {
            return Err(Error::InvalidParams);
        }
        // N < 2^(128 * r / 8)
        if u64::from(log_n) >= 16 * u64::from(r) {
            return Err(Error::InvalidParams);
        }
        // p <= ((2^32 - 1) * 32) / (128 * r), rearranged
        if u64::from(r) * u64::from(p) >= 1 << 30 {
            return Err(Error::InvalidParams);
        }
        let block_len = (r as usize).checked_mul(128).ok_or(Error::InvalidParams)?;
        block_len
            .checked_mul(p as usize)
            .ok_or(Error::InvalidParams)?;
        block_len
            .checked_mul(1 << log_n)
            .ok_or(Error::InvalidParams)?;
        Ok(Self { log_n, r, p })
    }

    #[must_use]
    pub const fn log_n(&self) -> u8 {
        self.log_n
    }

    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }

    pub(crate) const fn n(&self) -> usize {
        1 << self.log_n
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn block_len(&self) -> usize {
        128 * self.r as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::error::Error;

    #[test]
    fn accepts_rfc_parameter_sets() {
        for (log_n, r, p) in [(4, 1, 1), (10, 8, 16), (14, 8, 1), (20, 8, 1)] {
            let params = Params::new(log_n, r, p).unwrap();
            assert_eq!(params.log_n(), log_n);
            assert_eq!(params.r(), r);
            assert_eq!(params.p(), p);
        }
    }

    #[test]
    fn rejects_out_of_range_triples() {
        // N = 1
        assert!(matches!(Params::new(0, 1, 1), Err(Error::InvalidParams)));
        // log2(N) above the representable range
        assert!(matches!(Params::new(64, 8, 1), Err(Error::InvalidParams)));
        // r = 0 and p = 0
        assert!(matches!(Params::new(14, 0, 1), Err(Error::InvalidParams)));
        assert!(matches!(Params::new(14, 8, 0), Err(Error::InvalidParams)));
        // log2(N) >= 16 * r
        assert!(matches!(Params::new(16, 1, 1), Err(Error::InvalidParams)));
        assert!(matches!(Params::new(32, 2, 1), Err(Error::InvalidParams)));
        // r * p at the product bound
        assert!(matches!(
            Params::new(14, 1 << 15, 1 << 15),
            Err(Error::InvalidParams)
        ));
    }

    #[test]
    fn boundary_cost_factors() {
        // largest cost admitted for r = 1
        assert!(Params::new(15, 1, 1).is_ok());
        assert!(matches!(Params::new(16, 1, 1), Err(Error::InvalidParams)));
    }

    #[test]
    fn sizing_helpers() {
        let params = Params::new(10, 8, 16).unwrap();
        assert_eq!(params.n(), 1024);
        assert_eq!(params.block_len(), 1024);
    }
}
