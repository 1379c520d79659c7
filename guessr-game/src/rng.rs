//! Secret sampling and the seeded random streams behind it.
use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use sha2::Sha256;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::range::GuessRange;

/// Source of uniformly distributed secrets.
///
/// Implementations are not required to be cryptographically strong.
pub trait SecretSource {
    /// Draw an integer uniformly from `[range.min, range.max]`.
    fn sample(&mut self, range: GuessRange) -> i32;
}

/// Draw a value uniformly from the inclusive range using any RNG.
pub fn sample_uniform<R: Rng>(rng: &mut R, range: GuessRange) -> i32 {
    rng.gen_range(range.min()..=range.max())
}

/// Independent random streams derived from one user-visible seed.
///
/// Secrets and celebration visuals draw from separate streams so a
/// celebration never shifts the sequence of secrets.
#[derive(Debug)]
pub struct RngBundle {
    secret: RefCell<CountingRng<SmallRng>>,
    celebration: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let secret = CountingRng::new(derive_stream_seed(seed, b"secret"));
        let celebration = CountingRng::new(derive_stream_seed(seed, b"celebration"));
        Self {
            secret: RefCell::new(secret),
            celebration: RefCell::new(celebration),
        }
    }

    /// Access the secret RNG stream.
    #[must_use]
    pub fn secret(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.secret.borrow_mut()
    }

    /// Access the celebration RNG stream.
    #[must_use]
    pub fn celebration(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.celebration.borrow_mut()
    }
}

impl SecretSource for Rc<RngBundle> {
    fn sample(&mut self, range: GuessRange) -> i32 {
        sample_uniform(&mut *self.secret(), range)
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    /// Seed a standalone stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Seed a standalone secret stream the same way [`RngBundle`] does.
    #[must_use]
    pub fn for_secrets(user_seed: u64) -> Self {
        Self::new(derive_stream_seed(user_seed, b"secret"))
    }
}

impl<R: RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

impl<R: RngCore> SecretSource for CountingRng<R> {
    fn sample(&mut self, range: GuessRange) -> i32 {
        sample_uniform(self, range)
    }
}

/// Replays a fixed list of secrets, cycling and clamping into the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSecrets {
    values: Vec<i32>,
    index: usize,
}

impl FixedSecrets {
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    /// A source that always yields the same secret.
    #[must_use]
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl SecretSource for FixedSecrets {
    fn sample(&mut self, range: GuessRange) -> i32 {
        if self.values.is_empty() {
            return range.min();
        }
        let value = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        value.clamp(range.min(), range.max())
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
