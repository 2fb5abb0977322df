//! Name-based UUIDs (versions 3 and 5)
//!
//! The namespace bytes followed by the name bytes are hashed with MD5 (version 3) or SHA-1
//! (version 5), and the first 16 bytes of the digest become the UUID. The output depends on the
//! inputs only: the same namespace and name always yield the same UUID.

use digest::Digest;
use md5::Md5;
use sha1::Sha1;

use crate::{Builder, Uuid};

/// Generates a UUIDv3 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Builder::from_md5_bytes(hash::<Md5>(namespace, name.as_ref())).into_uuid()
}

/// Generates a UUIDv5 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Builder::from_sha1_bytes(hash::<Sha1>(namespace, name.as_ref())).into_uuid()
}

/// Returns the leading 16 bytes of the digest of `namespace || name`.
fn hash<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();
    let mut dst = [0u8; 16];
    dst.copy_from_slice(&digest[..16]);
    dst
}
