//! Conversions between UUID values and their binary and textual representations.
//!
//! Two binary layouts exist: the standard RFC 4122 layout ([`StandardCodec`]) and the nonstandard
//! layout used by Microsoft GUIDs ([`GuidCodec`]), which stores `time_low`, `time_mid` and
//! `time_hi_and_version` little-endian. Both share the same canonical string form; the layout
//! only shows in the bytes.

use fstr::FStr;

use crate::{Error, Fields, Uuid};

/// A binary layout for UUID values.
pub trait Codec {
    /// Reads a UUID from 16 bytes in this layout.
    fn decode(&self, bytes: [u8; 16]) -> Uuid;

    /// Writes a UUID as 16 bytes in this layout.
    fn encode(&self, uuid: &Uuid) -> [u8; 16];

    /// Reads the six RFC 4122 fields from 16 bytes in this layout.
    fn fields(&self, bytes: &[u8; 16]) -> Fields {
        self.decode(*bytes).fields()
    }
}

/// The standard big-endian layout of RFC 4122.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StandardCodec;

impl Codec for StandardCodec {
    fn decode(&self, bytes: [u8; 16]) -> Uuid {
        Uuid::from_bytes(bytes)
    }

    fn encode(&self, uuid: &Uuid) -> [u8; 16] {
        *uuid.as_bytes()
    }
}

/// The nonstandard GUID layout with the first three fields stored little-endian.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GuidCodec;

impl Codec for GuidCodec {
    fn decode(&self, bytes: [u8; 16]) -> Uuid {
        Uuid::from_bytes(Fields::from_bytes_le(&bytes).to_bytes())
    }

    fn encode(&self, uuid: &Uuid) -> [u8; 16] {
        uuid.fields().to_bytes_le()
    }

    fn fields(&self, bytes: &[u8; 16]) -> Fields {
        Fields::from_bytes_le(bytes)
    }
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes the 8-4-4-4-12 lowercase hexadecimal form.
pub(crate) fn encode_hyphenated(bytes: &[u8; 16]) -> FStr<36> {
    let mut buffer = [0u8; 36];
    let mut buf_iter = buffer.iter_mut();
    for (i, e) in bytes.iter().enumerate() {
        let e = *e as usize;
        *buf_iter.next().unwrap() = DIGITS[e >> 4];
        *buf_iter.next().unwrap() = DIGITS[e & 15];
        if i == 3 || i == 5 || i == 7 || i == 9 {
            *buf_iter.next().unwrap() = b'-';
        }
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer consists of ASCII hex digits and hyphens only
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Writes the 32-digit lowercase hexadecimal form.
pub(crate) fn encode_simple(bytes: &[u8; 16]) -> FStr<32> {
    let mut buffer = [0u8; 32];
    for (dst, e) in buffer.chunks_exact_mut(2).zip(bytes) {
        dst[0] = DIGITS[(*e >> 4) as usize];
        dst[1] = DIGITS[(*e & 15) as usize];
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer consists of ASCII hex digits only
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Parses a UUID string.
///
/// Accepts the 8-4-4-4-12 hyphenated form or 32 contiguous hex digits, in either letter case,
/// optionally wrapped in braces and optionally prefixed by `urn:uuid:`. Anything else, including
/// surrounding whitespace, is rejected with [`Error::InvalidFormat`] carrying the input as given.
///
/// # Examples
///
/// ```rust
/// use rfc4122::codec::parse;
///
/// let a = parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
/// let b = parse("urn:uuid:{6BA7B8109DAD11D180B400C04FD430C8}")?;
/// assert_eq!(a, b);
/// assert!(parse("not-a-uuid").is_err());
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn parse(src: &str) -> Result<Uuid, Error> {
    const URN_PREFIX: &[u8] = b"urn:uuid:";
    let err = || Error::InvalidFormat(src.to_owned());

    let mut text = src.as_bytes();
    if text.len() >= URN_PREFIX.len() && text[..URN_PREFIX.len()].eq_ignore_ascii_case(URN_PREFIX)
    {
        text = &text[URN_PREFIX.len()..];
    }
    if let [b'{', inner @ .., b'}'] = text {
        text = inner;
    }

    let hyphenated = match text.len() {
        36 => true,
        32 => false,
        _ => return Err(err()),
    };

    let mut dst = [0u8; 16];
    let mut iter = text.iter().copied();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = iter.next().and_then(hex_value).ok_or_else(err)?;
        let lo = iter.next().and_then(hex_value).ok_or_else(err)?;
        *e = (hi << 4) | lo;
        if hyphenated && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(b'-') {
            return Err(err());
        }
    }
    if iter.next().is_none() {
        Ok(Uuid::from_bytes(dst))
    } else {
        Err(err())
    }
}

fn hex_value(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}
