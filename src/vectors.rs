// Assembles full verification runs and chains seeds across a suite.

use crate::aes_ctr;
use crate::error::VectorError;
use crate::material;

/// Guard band between consecutive run base seeds, on top of the block count.
/// Matches the spacing used for previously generated vector sets, so suites
/// regenerated from the same root seed line up file-for-file.
pub const RUN_SEED_GAP: u64 = 1_000_000;

/// One complete stimulus/response vector for the design under test.
/// Immutable once generated; all fields are lowercase fixed-width hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub id: u32,
    /// Base seed the material was derived from.
    pub seed: u64,
    pub key: String,
    pub iv: String,
    pub plaintext: Vec<String>,
    /// Positionally aligned with `plaintext`.
    pub ciphertext: Vec<String>,
    /// First seed this run did not consume.
    pub next_seed: u64,
}

/// Derives material at `seed` and runs the reference encryption.
/// `id` is only a label; derivation depends on the seed alone.
pub fn generate_run(seed: u64, id: u32, num_blocks: usize) -> Result<Run, VectorError> {
    let (mat, next_seed) = material::derive_run_material(seed, num_blocks)?;
    let ciphertext = aes_ctr::encrypt_ctr_hex(&mat.key, &mat.iv, &mat.plaintext)?;
    Ok(Run {
        id,
        seed,
        key: mat.key,
        iv: mat.iv,
        plaintext: mat.plaintext,
        ciphertext,
        next_seed,
    })
}

/// Generates `num_runs` independent runs starting at `root_seed`, spacing
/// base seeds `blocks_per_run + RUN_SEED_GAP` apart. The returned length is
/// the aggregate run count the persistence layer indexes by.
pub fn generate_suite(
    root_seed: u64,
    num_runs: u32,
    blocks_per_run: usize,
) -> Result<Vec<Run>, VectorError> {
    let mut runs = Vec::with_capacity(num_runs as usize);
    let mut seed = root_seed;
    for id in 0..num_runs {
        runs.push(generate_run(seed, id, blocks_per_run)?);
        seed = seed
            .checked_add(blocks_per_run as u64)
            .and_then(|s| s.checked_add(RUN_SEED_GAP))
            .ok_or(VectorError::ArithmeticOverflow { seed })?;
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_consumes_exactly_key_iv_and_block_seeds() {
        let run = generate_run(0, 0, 3).unwrap();
        assert_eq!(run.next_seed, 5);
        assert_eq!(run.plaintext.len(), 3);
        assert_eq!(run.ciphertext.len(), 3);
    }

    #[test]
    fn id_labels_but_does_not_derive() {
        let a = generate_run(77, 0, 2).unwrap();
        let b = generate_run(77, 9, 2).unwrap();
        assert_eq!(a.key, b.key);
        assert_eq!(a.ciphertext, b.ciphertext);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn runs_are_reproducible() {
        let a = generate_run(123_456, 1, 8).unwrap();
        let b = generate_run(123_456, 1, 8).unwrap();
        assert_eq!(a, b);
    }

    // Chaining one run's next_seed into the next run must keep every field
    // on the frozen schedule: run at seed 5 begins where run at 0 stopped.
    #[test]
    fn dense_chaining_from_next_seed() {
        let first = generate_run(0, 0, 3).unwrap();
        let second = generate_run(first.next_seed, 1, 2).unwrap();
        assert_eq!(second.seed, 5);
        assert_eq!(
            second.key,
            "9bcfbe07fae17389034ec2c2920d33fd4f8a3fbfe45221490a54d757b0f0bd0c"
        );
        assert_eq!(second.iv, "cd740a7c5c4cb68a38c4cad51cc713a4");
        assert_eq!(
            second.ciphertext,
            [
                "9de38e4e7cf9024ca0cc248ba3e3c4db",
                "ac879a15aa87e1a4757d0e0024c9c014",
            ]
        );
    }

    #[test]
    fn suite_seed_ranges_are_disjoint() {
        let blocks = 16usize;
        let runs = generate_suite(0, 5, blocks).unwrap();
        assert_eq!(runs.len(), 5);
        for pair in runs.windows(2) {
            // each run consumes [seed, next_seed); the next base must start
            // at or after that
            assert_eq!(pair[0].next_seed, pair[0].seed + blocks as u64 + 2);
            assert!(pair[1].seed >= pair[0].next_seed);
            assert_eq!(pair[1].seed, pair[0].seed + blocks as u64 + RUN_SEED_GAP);
        }
    }

    #[test]
    fn suite_matches_individually_generated_runs() {
        let runs = generate_suite(0, 3, 4).unwrap();
        for (i, run) in runs.iter().enumerate() {
            let expected = generate_run(run.seed, i as u32, 4).unwrap();
            assert_eq!(*run, expected);
        }
    }

    #[test]
    fn suite_near_seed_exhaustion_fails_cleanly() {
        let err = generate_suite(u64::MAX - 1, 2, 4).unwrap_err();
        assert!(matches!(err, VectorError::ArithmeticOverflow { .. }));
    }
}
