use std::{fmt, str};

use fstr::FStr;

use crate::codec::{self, Codec, GuidCodec};
use crate::generator::NodeId;
use crate::timestamp::Timestamp;
use crate::wide::{Calculator, DefaultCalculator};
use crate::{Error, Fields};

/// Represents a Universally Unique IDentifier.
///
/// The value holds the 16 bytes in the standard RFC 4122 (big-endian) layout. Equality compares
/// the bytes, and ordering follows the bytes read as an unsigned 128-bit big-endian integer, so
/// [`Uuid::NIL`] is the smallest value and [`Uuid::MAX`] the largest.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8u128.to_be_bytes());

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8u128.to_be_bytes());

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8u128.to_be_bytes());

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self =
        Self(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8u128.to_be_bytes());

    /// Creates an object from a byte array in the standard layout.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte array in the nonstandard layout, where the first three
    /// fields are stored little-endian.
    pub fn from_bytes_le(bytes: [u8; 16]) -> Self {
        GuidCodec.decode(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the bytes in the nonstandard layout, where the first three fields are stored
    /// little-endian.
    pub fn to_bytes_le(&self) -> [u8; 16] {
        GuidCodec.encode(self)
    }

    /// Returns true if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns true if this is the Max UUID.
    pub const fn is_max(&self) -> bool {
        u128::from_be_bytes(self.0) == u128::MAX
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not belong to the
    /// RFC 4122 variant.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Decomposes the UUID into its six RFC 4122 fields.
    pub fn fields(&self) -> Fields {
        Fields::from_bytes(&self.0)
    }

    /// Returns the embedded timestamp of a version 1 or version 6 UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x: Uuid = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse()?;
    /// let dt = x.timestamp()?.to_datetime()?;
    /// assert_eq!(dt.unix_timestamp(), 1_645_557_742);
    ///
    /// assert!(Uuid::NAMESPACE_DNS.timestamp().is_ok());
    /// assert!(Uuid::NIL.timestamp().is_err());
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn timestamp(&self) -> Result<Timestamp, Error> {
        self.fields().timestamp()
    }

    /// Returns the 14-bit clock sequence of a version 1 or version 6 UUID.
    pub fn clock_seq(&self) -> Result<u16, Error> {
        self.fields().clock_seq()
    }

    /// Returns the node identifier of a version 1 or version 6 UUID.
    pub fn node(&self) -> Result<NodeId, Error> {
        let fields = self.fields();
        fields.clock_seq().map(|_| fields.node())
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        codec::encode_hyphenated(&self.0)
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    pub fn simple(&self) -> FStr<32> {
        codec::encode_simple(&self.0)
    }

    /// Returns the URN representation (`urn:uuid:` followed by the 8-4-4-4-12 form).
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.encode())
    }

    /// Creates an object from a string representation.
    ///
    /// See [`codec::parse`] for the accepted formats.
    pub fn parse_str(src: &str) -> Result<Self, Error> {
        codec::parse(src)
    }

    /// Returns the 128-bit value as a decimal string without leading zeros.
    pub fn to_decimal(&self) -> String {
        DefaultCalculator::to_decimal(&self.0)
    }

    /// Creates an object from the decimal string representation of its 128-bit value.
    pub fn from_decimal(src: &str) -> Result<Self, Error> {
        DefaultCalculator::from_decimal(src).map(Self)
    }
}

/// The reserved variants of UUIDs, named after the bit pattern of the variant field.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Var0,

    /// `10x`: the RFC 4122 variant.
    Var10,

    /// `110`: reserved for Microsoft backward compatibility.
    Var110,

    /// `111`: reserved for future definition.
    Var111,
}

impl Variant {
    /// Reads the variant from the `clock_seq_hi_and_reserved` octet.
    pub const fn from_octet(octet: u8) -> Self {
        match octet >> 5 {
            0..=3 => Self::Var0,
            4 | 5 => Self::Var10,
            6 => Self::Var110,
            _ => Self::Var111,
        }
    }

    /// Returns the octet with its variant bits replaced by this variant's pattern.
    pub const fn apply_to(&self, octet: u8) -> u8 {
        match self {
            Self::Var0 => octet & 0x7f,
            Self::Var10 => 0x80 | (octet & 0x3f),
            Self::Var110 => 0xc0 | (octet & 0x1f),
            Self::Var111 => 0xe0 | (octet & 0x1f),
        }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from a string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        codec::parse(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "2ed6657d-e927-568b-95e1-2665a8aea6a2",
                    &[
                        46, 214, 101, 125, 233, 39, 86, 139, 149, 225, 38, 101, 168, 174, 166, 162,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::Error;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(u128, &'static str)] {
        &[
            (0, "00000000-0000-0000-0000-000000000000"),
            (u128::MAX, "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                0x6ba7b810_9dad_11d1_80b4_00c04fd430c8,
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                0x2ed6657d_e927_568b_95e1_2665a8aea6a2,
                "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            ),
            (
                0x017f22e2_79b0_7cc3_98c4_dc0c0c07398f,
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (value, text) in prepare_cases() {
            let e = Uuid::from(*value);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
            assert_eq!(Ok(e), format!("{{{}}}", text).parse());
            assert_eq!(Ok(e), format!("urn:uuid:{}", text).parse());
            assert_eq!(Ok(e), text.replace('-', "").parse());
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(e.urn(), format!("urn:uuid:{}", text));
            assert_eq!(&e.simple() as &str, text.replace('-', ""));
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "not-a-uuid",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "0180a8f0-5b847438-ab50-f06991838802",
            "0180a8f05b84-7438-ab50-f0699183880211",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082",
            "0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
            "0180a8f05b847438ab50f068decfbfd",
            "urn:uuid:",
            "uuid:0180a8f0-5b84-7438-ab50-f06d3ea24429",
        ];

        for e in cases {
            assert_eq!(e.parse::<Uuid>(), Err(Error::InvalidFormat(e.to_owned())));
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil() && !Uuid::NIL.is_max());
        assert!(Uuid::MAX.is_max() && !Uuid::MAX.is_nil());
        assert_eq!(Uuid::NIL.to_decimal(), "0");
        assert_eq!(
            Uuid::MAX.to_decimal(),
            "340282366920938463463374607431768211455"
        );
    }

    /// Orders values as unsigned 128-bit integers
    #[test]
    fn orders_values_as_unsigned_128_bit_integers() {
        let one = Uuid::from(1u128);
        let two = Uuid::from(2u128);
        let high = Uuid::from(1u128 << 127);
        assert!(Uuid::NIL < one && one < two && two < high && high < Uuid::MAX);

        for _ in 0..1_000 {
            let (a, b): (u128, u128) = rand::random();
            assert_eq!(Uuid::from(a).cmp(&Uuid::from(b)), a.cmp(&b));
        }
    }

    /// Compares equal only with identical bytes
    #[test]
    fn compares_equal_only_with_identical_bytes() {
        let a = Uuid::NAMESPACE_DNS;
        let b: Uuid = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, Uuid::NAMESPACE_URL);
        assert_ne!(Some(a), None);
    }

    /// Reports variant and version
    #[test]
    fn reports_variant_and_version() {
        let cases = [
            ("00000000-0000-0000-0000-000000000000", Variant::Var0, None),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", Variant::Var111, None),
            ("6ba7b810-9dad-11d1-80b4-00c04fd430c8", Variant::Var10, Some(1)),
            ("2ed6657d-e927-568b-95e1-2665a8aea6a2", Variant::Var10, Some(5)),
            ("2ed6657d-e927-468b-b5e1-2665a8aea6a2", Variant::Var10, Some(4)),
            ("2ed6657d-e927-468b-c5e1-2665a8aea6a2", Variant::Var110, None),
            ("2ed6657d-e927-468b-75e1-2665a8aea6a2", Variant::Var0, None),
        ];
        for (text, variant, version) in cases {
            let e: Uuid = text.parse().unwrap();
            assert_eq!(e.variant(), variant, "{}", text);
            assert_eq!(e.version(), version, "{}", text);
        }
    }

    /// Extracts time-based fields only from time-based UUIDs
    #[test]
    fn extracts_time_based_fields_only_from_time_based_uuids() {
        let v1: Uuid = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse().unwrap();
        assert_eq!(v1.timestamp().unwrap().ticks(), 0x1ec_9414_c232_ab00);
        assert_eq!(v1.clock_seq(), Ok(0x33c8));
        assert_eq!(v1.node().unwrap().to_string(), "9f:6b:de:ce:d8:46");

        let v6: Uuid = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse().unwrap();
        assert_eq!(v6.timestamp(), v1.timestamp());
        assert_eq!(v6.node(), v1.node());

        let v4: Uuid = "919108f7-52d1-4320-9bac-f847db4148a8".parse().unwrap();
        assert!(matches!(v4.timestamp(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(v4.node(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(
            Uuid::MAX.clock_seq(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (value, _) in prepare_cases() {
            let e = Uuid::from(*value);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes_le(e.to_bytes_le()), e);
            assert_eq!(Uuid::from_decimal(&e.to_decimal()), Ok(e));
            assert_eq!(e.to_decimal(), value.to_string());
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase().as_str()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Swaps the first three fields in the little-endian layout
    #[test]
    fn swaps_the_first_three_fields_in_the_little_endian_layout() {
        let e = Uuid::NAMESPACE_DNS;
        assert_eq!(
            e.to_bytes_le(),
            [
                0x10, 0xb8, 0xa7, 0x6b, 0xad, 0x9d, 0xd1, 0x11, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
                0x30, 0xc8
            ]
        );
        assert_eq!(Uuid::from_bytes_le(e.to_bytes_le()).to_string(), e.to_string());
    }
}
