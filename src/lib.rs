// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
mod derive;
mod encoding;
mod numbers;
mod random;

pub use uuid::Uuid;

pub use self::{
    derive::{v8_blake3, NAMESPACE_DNS, NAMESPACE_URL},
    encoding::{parse, stringify, validate, version, MAX_UUID, NIL_UUID},
    numbers::{sum_as_string, to_dec},
    random::{random_uuid_v4, uuid_v4},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
