// Seeded derivation of the per-run key, IV and plaintext blocks.
// One fresh seed per field, threaded through an explicit cursor so no seed
// is ever consumed twice across the whole test suite.

use crate::error::VectorError;
use crate::mt19937::Mt19937;

pub const KEY_HEX_CHARS: usize = 64;
pub const IV_HEX_CHARS: usize = 32;
pub const BLOCK_HEX_CHARS: usize = 32;

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Draws `n` uniform symbols from the lowercase hex alphabet after a full
/// reseed at `seed`. The same (seed, n) pair always yields the same string;
/// the sampling procedure (53-bit double, index = floor(r * 16)) is frozen
/// together with the PRNG in [`Mt19937`].
pub fn derive_hex(seed: u64, n: usize) -> String {
    let mut rng = Mt19937::from_seed(seed);
    let mut out = String::with_capacity(n);
    for _ in 0..n {
        let idx = (rng.next_f64() * 16.0) as usize;
        out.push(HEX_ALPHABET[idx] as char);
    }
    out
}

/// Explicit seed cursor: `take` hands out the current seed and advances past
/// it. Replaces hidden global PRNG state with a value the caller threads
/// through derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCursor(u64);

impl SeedCursor {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next unused seed, without consuming it.
    pub fn peek(&self) -> u64 {
        self.0
    }

    pub fn take(&mut self) -> Result<u64, VectorError> {
        let s = self.0;
        self.0 = s
            .checked_add(1)
            .ok_or(VectorError::ArithmeticOverflow { seed: s })?;
        Ok(s)
    }
}

/// Material for one run, in derivation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMaterial {
    /// Base seed the run was derived from.
    pub seed: u64,
    /// 64 hex chars (32 bytes).
    pub key: String,
    /// 32 hex chars (16 bytes).
    pub iv: String,
    /// 32 hex chars (16 bytes) each.
    pub plaintext: Vec<String>,
}

/// Derives key, IV and `num_blocks` plaintext blocks starting at `seed`,
/// consuming `num_blocks + 2` consecutive seeds. Returns the material and the
/// first seed left unused, which is the safe base for the next run.
pub fn derive_run_material(
    seed: u64,
    num_blocks: usize,
) -> Result<(RunMaterial, u64), VectorError> {
    let mut cursor = SeedCursor::new(seed);
    let key = derive_hex(cursor.take()?, KEY_HEX_CHARS);
    let iv = derive_hex(cursor.take()?, IV_HEX_CHARS);
    let mut plaintext = Vec::with_capacity(num_blocks);
    for _ in 0..num_blocks {
        plaintext.push(derive_hex(cursor.take()?, BLOCK_HEX_CHARS));
    }
    let material = RunMaterial { seed, key, iv, plaintext };
    Ok((material, cursor.peek()))
}
