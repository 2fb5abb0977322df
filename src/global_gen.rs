//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::generator::{
    DefaultRng, RandomGenerator, SystemNode, TimeGenerator, TimeVersion,
};
use crate::timestamp::SystemClock;
use crate::{Error, Uuid};

/// The process-wide generators, created on first use.
struct GlobalGenInner {
    #[cfg(unix)]
    pid: u32,
    random: RandomGenerator<DefaultRng>,
    time: TimeGenerator<SystemClock>,
}

impl GlobalGenInner {
    fn new() -> Result<Self, Error> {
        let mut rng = DefaultRng::new()?;
        let time = TimeGenerator::with_parts(&mut rng, &SystemNode::detect(), SystemClock)?;
        Ok(Self {
            #[cfg(unix)]
            pid: std::process::id(),
            random: RandomGenerator::with_rng(rng),
            time,
        })
    }

    /// Returns true if the process ID has changed (i.e., upon Unix forks), in which case the
    /// generators must be recreated to keep parent and child from sharing state.
    fn is_stale(&self) -> bool {
        #[cfg(unix)]
        return self.pid != std::process::id();

        #[cfg(not(unix))]
        false
    }
}

/// Runs `f` with the process-wide generators, creating them if none exist yet.
fn with_global_gen<T>(f: impl FnOnce(&mut GlobalGenInner) -> Result<T, Error>) -> Result<T, Error> {
    static G: OnceLock<Mutex<Option<GlobalGenInner>>> = OnceLock::new();
    let mut guard = G
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let inner = match guard.take() {
        Some(inner) if !inner.is_stale() => inner,
        _ => GlobalGenInner::new()?,
    };
    f(guard.insert(inner))
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose clock sequence guarantees process-wide
/// uniqueness of the UUIDs it returns.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    with_global_gen(|g| g.time.generate(TimeVersion::V1))
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    with_global_gen(|g| g.random.generate())
}

/// Generates a UUIDv6 object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid6()?;
/// println!("{}", uuid); // e.g., "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid6() -> Result<Uuid, Error> {
    with_global_gen(|g| g.time.generate(TimeVersion::V6))
}
