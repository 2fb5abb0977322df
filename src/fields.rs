//! The six RFC 4122 subfields of a UUID.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |         time_hi_and_version   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The standard layout stores every field big-endian. The nonstandard (GUID) layout stores
//! `time_low`, `time_mid` and `time_hi_and_version` little-endian and leaves the rest untouched.
//!
//! Version 6 reuses the same positions but fills them with the most significant timestamp bits
//! first, so the first three fields then hold `time_high`, `time_mid` and `time_low_and_version`.

use crate::{generator::NodeId, timestamp::Timestamp, Error, Variant};

/// Field values of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    time_low: u32,
    time_mid: u16,
    time_hi_and_version: u16,
    clock_seq_hi_and_reserved: u8,
    clock_seq_low: u8,
    node: NodeId,
}

impl Fields {
    /// Creates a set of field values.
    pub const fn new(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq_hi_and_reserved: u8,
        clock_seq_low: u8,
        node: NodeId,
    ) -> Self {
        Self {
            time_low,
            time_mid,
            time_hi_and_version,
            clock_seq_hi_and_reserved,
            clock_seq_low,
            node,
        }
    }

    /// Creates version 1 fields with the timestamp split lowest bits first.
    pub const fn from_gregorian_v1(ts: Timestamp, clock_seq: u16, node: NodeId) -> Self {
        let ticks = ts.ticks();
        Self::new(
            ticks as u32,
            (ticks >> 32) as u16,
            0x1000 | ((ticks >> 48) as u16 & 0x0fff),
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            clock_seq as u8,
            node,
        )
    }

    /// Creates version 6 fields with the timestamp split highest bits first.
    pub const fn from_gregorian_v6(ts: Timestamp, clock_seq: u16, node: NodeId) -> Self {
        let ticks = ts.ticks();
        Self::new(
            (ticks >> 28) as u32,
            (ticks >> 12) as u16,
            0x6000 | (ticks as u16 & 0x0fff),
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            clock_seq as u8,
            node,
        )
    }

    /// Reads fields from the standard big-endian layout.
    pub fn from_bytes(src: &[u8; 16]) -> Self {
        Self::from_parts(
            u32::from_be_bytes([src[0], src[1], src[2], src[3]]),
            u16::from_be_bytes([src[4], src[5]]),
            u16::from_be_bytes([src[6], src[7]]),
            src,
        )
    }

    /// Reads fields from the nonstandard layout with the first three fields little-endian.
    pub fn from_bytes_le(src: &[u8; 16]) -> Self {
        Self::from_parts(
            u32::from_le_bytes([src[0], src[1], src[2], src[3]]),
            u16::from_le_bytes([src[4], src[5]]),
            u16::from_le_bytes([src[6], src[7]]),
            src,
        )
    }

    fn from_parts(time_low: u32, time_mid: u16, time_hi_and_version: u16, src: &[u8; 16]) -> Self {
        Self::new(
            time_low,
            time_mid,
            time_hi_and_version,
            src[8],
            src[9],
            NodeId::from([src[10], src[11], src[12], src[13], src[14], src[15]]),
        )
    }

    /// Writes fields in the standard big-endian layout.
    pub fn to_bytes(&self) -> [u8; 16] {
        self.to_parts(
            self.time_low.to_be_bytes(),
            self.time_mid.to_be_bytes(),
            self.time_hi_and_version.to_be_bytes(),
        )
    }

    /// Writes fields in the nonstandard layout with the first three fields little-endian.
    pub fn to_bytes_le(&self) -> [u8; 16] {
        self.to_parts(
            self.time_low.to_le_bytes(),
            self.time_mid.to_le_bytes(),
            self.time_hi_and_version.to_le_bytes(),
        )
    }

    fn to_parts(&self, time_low: [u8; 4], time_mid: [u8; 2], time_hi: [u8; 2]) -> [u8; 16] {
        let mut dst = [0u8; 16];
        dst[..4].copy_from_slice(&time_low);
        dst[4..6].copy_from_slice(&time_mid);
        dst[6..8].copy_from_slice(&time_hi);
        dst[8] = self.clock_seq_hi_and_reserved;
        dst[9] = self.clock_seq_low;
        dst[10..].copy_from_slice(self.node.as_bytes());
        dst
    }

    /// Checks that the variant bits of `clock_seq_hi_and_reserved` denote `variant`.
    pub fn validate(&self, variant: Variant) -> Result<(), Error> {
        if self.variant() == variant {
            Ok(())
        } else {
            Err(Error::InvalidFields(
                "clock_seq_hi_and_reserved does not carry the requested variant",
            ))
        }
    }

    /// Returns the `time_low` field.
    pub const fn time_low(&self) -> u32 {
        self.time_low
    }

    /// Returns the `time_mid` field.
    pub const fn time_mid(&self) -> u16 {
        self.time_mid
    }

    /// Returns the `time_hi_and_version` field.
    pub const fn time_hi_and_version(&self) -> u16 {
        self.time_hi_and_version
    }

    /// Returns the `clock_seq_hi_and_reserved` field.
    pub const fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.clock_seq_hi_and_reserved
    }

    /// Returns the `clock_seq_low` field.
    pub const fn clock_seq_low(&self) -> u8 {
        self.clock_seq_low
    }

    /// Returns the `node` field.
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the variant encoded in `clock_seq_hi_and_reserved`.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.clock_seq_hi_and_reserved)
    }

    /// Returns the version nibble if the variant is the RFC 4122 one.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some((self.time_hi_and_version >> 12) as u8),
            _ => None,
        }
    }

    /// Returns the 14-bit clock sequence of a time-based UUID.
    pub fn clock_seq(&self) -> Result<u16, Error> {
        self.time_based_version()?;
        Ok(u16::from(self.clock_seq_hi_and_reserved & 0x3f) << 8 | u16::from(self.clock_seq_low))
    }

    /// Returns the timestamp of a version 1 or version 6 UUID.
    pub fn timestamp(&self) -> Result<Timestamp, Error> {
        let time_low = u64::from(self.time_low);
        let time_mid = u64::from(self.time_mid);
        let time_hi = u64::from(self.time_hi_and_version & 0x0fff);
        let ticks = match self.time_based_version()? {
            1 => time_hi << 48 | time_mid << 32 | time_low,
            _ => time_low << 28 | time_mid << 12 | time_hi,
        };
        Timestamp::from_ticks(ticks)
    }

    fn time_based_version(&self) -> Result<u8, Error> {
        match self.version() {
            Some(v @ (1 | 6)) => Ok(v),
            Some(_) => Err(Error::UnsupportedOperation(
                "not a time-based UUID (version 1 or 6)",
            )),
            None => Err(Error::UnsupportedOperation("not an RFC 4122 variant UUID")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fields;
    use crate::{generator::NodeId, timestamp::Timestamp, Error, Variant};

    const BYTES: [u8; 16] = [
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ];

    /// Decomposes the standard layout
    #[test]
    fn decomposes_the_standard_layout() {
        let fields = Fields::from_bytes(&BYTES);
        assert_eq!(fields.time_low(), 0x6ba7b810);
        assert_eq!(fields.time_mid(), 0x9dad);
        assert_eq!(fields.time_hi_and_version(), 0x11d1);
        assert_eq!(fields.clock_seq_hi_and_reserved(), 0x80);
        assert_eq!(fields.clock_seq_low(), 0xb4);
        assert_eq!(fields.node(), NodeId::from([0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]));
        assert_eq!(fields.variant(), Variant::Var10);
        assert_eq!(fields.version(), Some(1));
        assert_eq!(fields.clock_seq(), Ok(0xb4));
        assert_eq!(fields.to_bytes(), BYTES);
    }

    /// Decomposes the nonstandard layout
    #[test]
    fn decomposes_the_nonstandard_layout() {
        let le = [
            0x10, 0xb8, 0xa7, 0x6b, 0xad, 0x9d, 0xd1, 0x11, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ];
        let fields = Fields::from_bytes_le(&le);
        assert_eq!(fields, Fields::from_bytes(&BYTES));
        assert_eq!(fields.to_bytes_le(), le);
    }

    /// Places timestamps per version layout
    #[test]
    fn places_timestamps_per_version_layout() {
        let ts = Timestamp::from_ticks(0x0123_4567_89ab_cdef).unwrap();
        let node = NodeId::from([1, 2, 3, 4, 5, 6]);

        let v1 = Fields::from_gregorian_v1(ts, 0x3fff, node);
        assert_eq!(v1.time_low(), 0x89ab_cdef);
        assert_eq!(v1.time_mid(), 0x4567);
        assert_eq!(v1.time_hi_and_version(), 0x1123);
        assert_eq!(v1.timestamp(), Ok(ts));
        assert_eq!(v1.clock_seq(), Ok(0x3fff));

        let v6 = Fields::from_gregorian_v6(ts, 0x1234, node);
        assert_eq!(v6.time_low(), 0x1234_5678);
        assert_eq!(v6.time_mid(), 0x9abc);
        assert_eq!(v6.time_hi_and_version(), 0x6def);
        assert_eq!(v6.clock_seq_hi_and_reserved(), 0x92);
        assert_eq!(v6.timestamp(), Ok(ts));
        assert_eq!(v6.clock_seq(), Ok(0x1234));
    }

    /// Rejects mismatched variant bits
    #[test]
    fn rejects_mismatched_variant_bits() {
        let fields = Fields::from_bytes(&BYTES);
        assert_eq!(fields.validate(Variant::Var10), Ok(()));
        assert!(matches!(
            fields.validate(Variant::Var110),
            Err(Error::InvalidFields(_))
        ));
    }

    /// Refuses version-dependent queries on other versions and variants
    #[test]
    fn refuses_version_dependent_queries_on_other_versions_and_variants() {
        let mut bytes = BYTES;
        bytes[6] = 0x41;
        let v4 = Fields::from_bytes(&bytes);
        assert!(matches!(v4.timestamp(), Err(Error::UnsupportedOperation(_))));

        bytes[6] = 0x11;
        bytes[8] = 0xc0;
        let microsoft = Fields::from_bytes(&bytes);
        assert_eq!(microsoft.version(), None);
        assert!(matches!(
            microsoft.clock_seq(),
            Err(Error::UnsupportedOperation(_))
        ));
    }
}
