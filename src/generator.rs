//! UUID generators and the randomness sources they draw on.
//!
//! | Generator               | Versions | State                        |
//! | ----------------------- | -------- | ---------------------------- |
//! | [`RandomGenerator`]     | 4        | random number generator      |
//! | [`uuid3`] / [`uuid5`]   | 3, 5     | none                         |
//! | [`TimeGenerator`]       | 1, 6     | clock sequence behind a lock |
//!
//! Every generator takes its randomness from a [`RandSource`]. [`DefaultRng`] and [`OsRandom`]
//! are cryptographically strong. A weaker source is only used when a caller passes one in
//! explicitly; failures of the source are reported as [`Error::RandomSourceUnavailable`] and
//! never papered over.

use std::fmt;

use rand::rngs::{adapter::ReseedingRng, OsRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Core;

use crate::Error;

pub mod name;
pub mod node;
pub mod random;
pub mod time;
pub mod with_rand08;


pub use name::{uuid3, uuid5};
pub use node::{NodeId, NodeSource, RandomNode, SystemNode};
pub use random::RandomGenerator;
pub use time::{TimeGenerator, TimeVersion};

/// A trait that defines the minimum random number generator interface for the generators.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        (**self).try_fill(dest)
    }
}

/// The operating system's random number generator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        OsRng.try_fill_bytes(dest).map_err(Error::from)
    }
}

/// The default random number generator.
///
/// This is ChaCha12 wrapped in [`ReseedingRng`] and periodically reseeded from the operating
/// system, the strategy `rand::rngs::ThreadRng` also follows.
pub struct DefaultRng(ReseedingRng<ChaCha12Core, OsRng>);

impl DefaultRng {
    /// Number of bytes generated before reseeding.
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// Creates a generator seeded from the operating system.
    pub fn new() -> Result<Self, Error> {
        let core = ChaCha12Core::from_rng(OsRng)?;
        Ok(Self(ReseedingRng::new(core, Self::RESEED_THRESHOLD, OsRng)))
    }
}

impl RandSource for DefaultRng {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(Error::from)
    }
}

impl fmt::Debug for DefaultRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultRng").finish_non_exhaustive()
    }
}

#[cfg(feature = "small_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "small_rng")))]
pub use insecure::InsecureRng;

#[cfg(feature = "small_rng")]
mod insecure {
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    use super::RandSource;
    use crate::Error;

    /// A fast random number generator that is NOT cryptographically secure.
    ///
    /// Identifiers produced with this source are predictable to anyone who learns its state.
    /// It is never selected implicitly; pass it to a generator constructor to opt in.
    #[derive(Clone, Debug)]
    pub struct InsecureRng(SmallRng);

    impl InsecureRng {
        /// Creates a generator seeded from the operating system.
        pub fn from_entropy() -> Self {
            Self(SmallRng::from_entropy())
        }

        /// Creates a generator from a fixed seed, yielding a reproducible sequence.
        pub fn seed_from_u64(seed: u64) -> Self {
            Self(SmallRng::seed_from_u64(seed))
        }
    }

    impl RandSource for InsecureRng {
        fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.0.try_fill_bytes(dest).map_err(Error::from)
        }
    }
}
