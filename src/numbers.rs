// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#[inline(always)]
pub fn to_dec(number: i64) -> String {
    itoa::Buffer::new().format(number).into()
}

/// Formats the sum of two numbers as a string.
///
/// The sum is computed in `i128`, so any pair of operands renders the exact
/// mathematical result with no wrapping or saturation.
pub fn sum_as_string(a: i64, b: i64) -> String {
    itoa::Buffer::new().format(a as i128 + b as i128).into()
}
