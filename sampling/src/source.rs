use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::{OsError, OsRng, RngCore, TryRngCore};
use rug::Integer;
use rug::integer::Order;

/// Deterministic, seedable stream of randomness.
///
/// Production callers seed it once from [new_seed] and [Source::branch] it for
/// every independent consumer; tests seed it with a fixed array.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh 32-byte seed from the operating system.
pub fn new_seed() -> Result<[u8; 32], OsError> {
    let mut seed: [u8; 32] = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    Ok(seed)
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Seeds a new [Source] from the operating system RNG.
    pub fn from_os_rng() -> Result<Source, OsError> {
        Ok(Source::new(new_seed()?))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    /// Uniform integer in `[0, 2^bits)`.
    pub fn next_integer_bits(&mut self, bits: u32) -> Integer {
        let mut bytes: Vec<u8> = vec![0u8; bits.div_ceil(8) as usize];
        self.fill_bytes(&mut bytes);
        Integer::from_digits(&bytes, Order::Lsf).keep_bits(bits)
    }

    /// Uniform integer in `[0, max)`, sampled by rejection on the
    /// `max.significant_bits()` low bits.
    pub fn next_integer_below(&mut self, max: &Integer) -> Integer {
        assert!(*max > 0, "invalid bound: max={} <= 0", max);
        let bits: u32 = max.significant_bits();
        let mut x: Integer = self.next_integer_bits(bits);
        while x >= *max {
            x = self.next_integer_bits(bits);
        }
        x
    }

    /// Uniform integer in `[min, max)`.
    pub fn next_integer_range(&mut self, min: &Integer, max: &Integer) -> Integer {
        assert!(min < max, "invalid range: min={} >= max={}", min, max);
        let width: Integer = Integer::from(max - min);
        self.next_integer_below(&width) + min
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
