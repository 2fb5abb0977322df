//! Assembly of UUID values from raw bytes, fields and generator output.

use crate::codec::Codec;
use crate::generator::NodeId;
use crate::timestamp::Timestamp;
use crate::{Error, Fields, Uuid, Variant};

/// A builder that stamps version and variant bits onto 16 bytes and yields an immutable [`Uuid`].
///
/// Generators hand their raw output to a `Builder`, so the version and variant bits are written
/// exactly once, when the value is created.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Builder, Variant};
///
/// let uuid = Builder::from_random_bytes([0xff; 16]).into_uuid();
/// assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
/// assert_eq!(uuid.version(), Some(4));
/// assert_eq!(uuid.variant(), Variant::Var10);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Builder([u8; 16]);

impl Builder {
    /// Starts from bytes in the standard layout, taken as is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Starts from bytes in the layout of `codec`, taken as is.
    pub fn decode<C: Codec + ?Sized>(codec: &C, bytes: [u8; 16]) -> Self {
        Self(*codec.decode(bytes).as_bytes())
    }

    /// Starts from field values, checking that they carry `variant`.
    pub fn from_fields(fields: &Fields, variant: Variant) -> Result<Self, Error> {
        fields.validate(variant)?;
        Ok(Self(fields.to_bytes()))
    }

    /// Creates a version 4 UUID from random bytes.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes).with_rfc4122(4)
    }

    /// Creates a version 3 UUID from the leading bytes of an MD5 digest.
    pub const fn from_md5_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes).with_rfc4122(3)
    }

    /// Creates a version 5 UUID from the leading bytes of a SHA-1 digest.
    pub const fn from_sha1_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes).with_rfc4122(5)
    }

    /// Creates a version 1 UUID; only the lower 14 bits of `clock_seq` are used.
    pub fn from_gregorian_v1(ts: Timestamp, clock_seq: u16, node: NodeId) -> Self {
        Self(Fields::from_gregorian_v1(ts, clock_seq, node).to_bytes())
    }

    /// Creates a version 6 UUID; only the lower 14 bits of `clock_seq` are used.
    pub fn from_gregorian_v6(ts: Timestamp, clock_seq: u16, node: NodeId) -> Self {
        Self(Fields::from_gregorian_v6(ts, clock_seq, node).to_bytes())
    }

    /// Sets the RFC 4122 variant and the version nibble.
    ///
    /// Fails with [`Error::InvalidFields`] if `version` does not fit in four bits.
    pub const fn with_version(self, version: u8) -> Result<Self, Error> {
        if version > 0x0f {
            Err(Error::InvalidFields("version does not fit in four bits"))
        } else {
            Ok(self.with_rfc4122(version))
        }
    }

    /// Sets the variant bits, leaving the version nibble untouched.
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.0[8] = variant.apply_to(self.0[8]);
        self
    }

    const fn with_rfc4122(mut self, version: u8) -> Self {
        self.0[6] = (version << 4) | (self.0[6] & 0x0f);
        self.with_variant(Variant::Var10)
    }

    /// Returns the built value.
    pub const fn into_uuid(self) -> Uuid {
        Uuid::from_bytes(self.0)
    }
}
