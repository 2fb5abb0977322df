//! UUIDv4-related functionality

use super::{DefaultRng, RandSource};
use crate::{Builder, Error, Uuid};

/// Represents a UUIDv4 generator that fills every non-reserved bit from a random source.
///
/// # Examples
///
/// ```rust
/// use rfc4122::generator::RandomGenerator;
///
/// let mut g = RandomGenerator::new()?;
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomGenerator<R = DefaultRng> {
    /// The random number generator used by the generator.
    rng: R,
}

impl RandomGenerator {
    /// Creates a generator backed by [`DefaultRng`].
    pub fn new() -> Result<Self, Error> {
        DefaultRng::new().map(Self::with_rng)
    }
}

impl<R: RandSource> RandomGenerator<R> {
    /// Creates a generator with a specified random source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill(&mut bytes)?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomGenerator;
    use crate::generator::tests::FailingRng;
    use crate::{Error, Variant};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = {
        let mut g = RandomGenerator::new().unwrap();
        (0..N_SAMPLES).map(|_| g.generate().unwrap().into()).collect()
    });

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        let mut g = RandomGenerator::with_rand08(rand::thread_rng());
        for _ in 0..1_000 {
            let e = g.generate().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(4));
        }
    }

    /// Reports an unavailable random source instead of generating
    #[test]
    fn reports_an_unavailable_random_source_instead_of_generating() {
        let mut g = RandomGenerator::with_rng(FailingRng);
        assert!(matches!(
            g.generate(),
            Err(Error::RandomSourceUnavailable(_))
        ));
    }

    /// Accepts an explicitly chosen insecure source
    #[cfg(feature = "small_rng")]
    #[test]
    fn accepts_an_explicitly_chosen_insecure_source() {
        use crate::generator::InsecureRng;
        let mut a = RandomGenerator::with_rng(InsecureRng::seed_from_u64(42));
        let mut b = RandomGenerator::with_rng(InsecureRng::seed_from_u64(42));
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate().unwrap().version(), Some(4));
    }
}
