// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt::Display;

use uuid::Uuid;
use uuid_simd::UuidExt;

pub const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";
pub const MAX_UUID: &str = "ffffffff-ffff-ffff-ffff-ffffffffffff";

static ERROR_MESSAGE: &str = "Not a valid UUID";

fn invalid(err: impl Display) -> String {
    [ERROR_MESSAGE, ". ", &err.to_string()].concat()
}

/// Parses the textual form of a UUID into its value.
pub fn parse(value: &str) -> Result<Uuid, String> {
    Uuid::try_parse(value).map_err(invalid)
}

/// Renders a 16-byte slice as hyphenated lowercase UUID text.
pub fn stringify(bytes: &[u8]) -> Result<String, String> {
    let uuid = Uuid::from_slice(bytes).map_err(invalid)?;
    Ok(uuid.format_hyphenated().to_string())
}

pub fn validate(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// Returns the version nibble of a UUID in text form (4 for random UUIDs,
/// 8 for derived ones, 15 for MAX).
pub fn version(value: &str) -> Result<u8, String> {
    let uuid = Uuid::parse_str(value).map_err(invalid)?;
    Ok(uuid.get_version_num() as u8)
}
