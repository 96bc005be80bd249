use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, slot) pair.
///
/// Implementation detail:
/// - Derives a per-agent 64-bit seed as `seed ^ slot`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs
///   are equal, so a whole batch replays from one command-line seed.
#[inline]
pub fn rng_for_agent(seed: u64, slot: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed ^ slot)
}
