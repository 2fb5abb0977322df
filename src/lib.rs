//! RFC 4122 UUIDs: generation, parsing, formatting and comparison
//!
//! ```rust
//! use rfc4122::{uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |     time_hi           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi |  clk_seq_low  |         node (0-1)        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 4-bit `ver` field holds the version: `1` and `6` for time-based, `3` and `5` for
//!   name-based, `4` for random UUIDs.
//! - The 2-bit `var` field is set at `10` for every UUID this library generates.
//! - Version 1 spreads the 60-bit Gregorian timestamp over `time_low`, `time_mid` and
//!   `time_hi` lowest bits first; version 6 stores it highest bits first so that UUIDs sort
//!   by creation time.
//!
//! # Byte orders
//!
//! [`Uuid`] always holds the standard big-endian layout, and the string form never depends on
//! the byte order. The nonstandard GUID layout, with the first three fields little-endian, is
//! available through [`codec::GuidCodec`] or [`Uuid::to_bytes_le`].
//!
//! # Crate features
//!
//! - `global_gen` (default): [`uuid1`], [`uuid4`] and [`uuid6`] backed by process-wide
//!   generators.
//! - `bigint`: computes decimal representations with `num-bigint` instead of `u128`.
//! - `small_rng`: provides the fast but predictable [`generator::InsecureRng`].
//! - `serde`: `Serialize` and `Deserialize` implementations.
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Uuid, Variant};

pub mod builder;
pub use builder::Builder;

pub mod codec;

pub mod fields;
pub use fields::Fields;

pub mod generator;
pub use generator::{uuid3, uuid5};

pub mod timestamp;

pub mod wide;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4, uuid6};
