// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use uuid::Uuid;
use uuid_simd::UuidExt;

/// Returns a random UUID v4.
#[inline]
pub fn random_uuid_v4() -> Uuid {
    Uuid::new_v4()
}

/// Returns a fresh random UUID v4 rendered as hyphenated lowercase text.
pub fn uuid_v4() -> String {
    Uuid::new_v4().format_hyphenated().to_string()
}
