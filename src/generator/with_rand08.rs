//! Integration with `rand` (v0.8) crate.

use rand::RngCore;

use super::{RandSource, RandomGenerator};
use crate::Error;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// The caller vouches for the strength of the wrapped generator.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(Error::from)
    }
}

impl<T: RngCore> RandomGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::generator::RandomGenerator;
    ///
    /// let mut g = RandomGenerator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rng(Adapter(rng))
    }
}
