//! Time-based UUIDs (versions 1 and 6)

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use super::{NodeId, NodeSource, OsRandom, RandSource, SystemNode};
use crate::timestamp::{Clock, SystemClock, Timestamp};
use crate::{Builder, Error, Uuid};

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// The field layout of a time-based UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TimeVersion {
    /// Version 1: the timestamp is stored lowest bits first.
    V1,

    /// Version 6: the timestamp is stored highest bits first, so UUIDs sort by creation time.
    V6,
}

impl TimeVersion {
    fn build(self, ts: Timestamp, clock_seq: u16, node: NodeId) -> Uuid {
        match self {
            Self::V1 => Builder::from_gregorian_v1(ts, clock_seq, node),
            Self::V6 => Builder::from_gregorian_v6(ts, clock_seq, node),
        }
        .into_uuid()
    }
}

/// The last timestamp seen and the 14-bit clock sequence.
#[derive(Clone, Eq, PartialEq, Debug)]
struct ClockSequence {
    last_timestamp: u64,
    clock_seq: u16,
}

impl ClockSequence {
    /// Records `ts` and returns the clock sequence to embed with it.
    ///
    /// The sequence moves on whenever the clock fails to advance past the last timestamp.
    fn advance(&mut self, ts: Timestamp) -> u16 {
        let ts = ts.ticks();
        if ts <= self.last_timestamp {
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
            debug!(
                "clock did not advance ({} <= {}); clock sequence now {}",
                ts, self.last_timestamp, self.clock_seq
            );
        }
        self.last_timestamp = self.last_timestamp.max(ts);
        self.clock_seq
    }
}

#[derive(Debug)]
struct Inner<C> {
    state: ClockSequence,
    clock: C,
}

/// Represents a generator of version 1 and version 6 UUIDs.
///
/// The generator owns a clock sequence that is randomly initialized and then incremented
/// whenever the clock reads the same or an earlier timestamp than the previous call, so
/// successive calls return distinct UUIDs even when the clock resolution is coarse or the clock
/// moves back. Reading the clock and updating the sequence happen under one lock, so a generator
/// can be shared between threads (e.g. in an `Arc`).
///
/// The state lives as long as the generator and is not persisted.
///
/// # Examples
///
/// ```rust
/// use rfc4122::generator::TimeGenerator;
///
/// let g = TimeGenerator::new()?;
/// let a = g.generate_v6()?;
/// let b = g.generate_v6()?;
/// assert_eq!(a.version(), Some(6));
/// assert_ne!(a, b);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Debug)]
pub struct TimeGenerator<C = SystemClock> {
    inner: Mutex<Inner<C>>,
    node: NodeId,
}

impl TimeGenerator {
    /// Creates a generator that reads the system clock, embeds this host's hardware address (or
    /// a random multicast node if none is found) and seeds the clock sequence from the operating
    /// system.
    pub fn new() -> Result<Self, Error> {
        Self::with_parts(&mut OsRandom, &SystemNode::detect(), SystemClock)
    }
}

impl<C: Clock> TimeGenerator<C> {
    /// Creates a generator from its collaborators.
    ///
    /// `rng` seeds the clock sequence and, if `node` supplies no identifier, a random multicast
    /// node. Fails with [`Error::RandomSourceUnavailable`] if `rng` fails.
    pub fn with_parts<R, N>(rng: &mut R, node: &N, clock: C) -> Result<Self, Error>
    where
        R: RandSource + ?Sized,
        N: NodeSource + ?Sized,
    {
        let node = match node.node() {
            Some(node) => node,
            None => {
                let node = NodeId::random(rng)?;
                warn!("no node identifier available; using random multicast node {}", node);
                node
            }
        };

        let mut seed = [0u8; 2];
        rng.try_fill(&mut seed)?;
        let state = ClockSequence {
            last_timestamp: 0,
            clock_seq: u16::from_be_bytes(seed) & MAX_CLOCK_SEQ,
        };

        Ok(Self {
            inner: Mutex::new(Inner { state, clock }),
            node,
        })
    }

    /// Returns the node identifier embedded in generated UUIDs.
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Generates a new UUIDv1 object from the current time.
    pub fn generate_v1(&self) -> Result<Uuid, Error> {
        self.generate(TimeVersion::V1)
    }

    /// Generates a new UUIDv6 object from the current time.
    pub fn generate_v6(&self) -> Result<Uuid, Error> {
        self.generate(TimeVersion::V6)
    }

    /// Generates a new UUID of `version` from the current time.
    pub fn generate(&self, version: TimeVersion) -> Result<Uuid, Error> {
        let mut inner = self.lock();
        let ts = inner.clock.now()?;
        let clock_seq = inner.state.advance(ts);
        Ok(version.build(ts, clock_seq, self.node))
    }

    /// Generates a new UUID of `version` from the timestamp passed instead of the clock.
    pub fn generate_core(&self, ts: Timestamp, version: TimeVersion) -> Uuid {
        let clock_seq = self.lock().state.advance(ts);
        version.build(ts, clock_seq, self.node)
    }

    fn lock(&self) -> MutexGuard<'_, Inner<C>> {
        // the state is two integers and stays consistent even if a holder panicked
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
