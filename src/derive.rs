// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use tracing::trace;
use uuid::Uuid;

/// RFC 9562 namespace for fully-qualified domain names.
pub const NAMESPACE_DNS: Uuid = Uuid::NAMESPACE_DNS;

/// RFC 9562 namespace for URLs.
pub const NAMESPACE_URL: Uuid = Uuid::NAMESPACE_URL;

/// Derives a deterministic name-based UUID (version 8) from a namespace and
/// a name.
///
/// The value is the first 16 bytes of `BLAKE3(namespace || name)` with the
/// version and variant bits stamped in: equal inputs always derive the same
/// UUID, and the same name under different namespaces derives different ones.
pub fn v8_blake3(namespace: &Uuid, name: &[u8]) -> Uuid {
    let mut hasher = blake3::Hasher::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let hash = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash.as_bytes()[..16]);

    trace!("Derived v8 UUID from {} name bytes", name.len());
    Uuid::new_v8(bytes)
}
