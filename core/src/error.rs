// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Error-type for initia-core.

use thiserror::Error;

use crate::codec::Format;

/// The initia-core error type.
///
/// Conversions are pure: the first invalid field aborts the conversion and
/// is reported through exactly one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Structurally invalid input, such as bad JSON, undecodable protobuf,
    /// a missing required field, an unknown enum value or a bad timestamp.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A numeric string that violates the rule of its field.
    #[error("unparsable number in `{field}`: {value:?}")]
    UnparsableNumber {
        /// Wire name of the offending field.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
    /// A discriminator that is not registered for the family.
    #[error("unrecognized {family} type `{tag}` in {format} format")]
    UnrecognizedType {
        /// Name of the polymorphic family.
        family: &'static str,
        /// Format the tag was read from.
        format: Format,
        /// The unknown tag.
        tag: String,
    },
    /// The variant has no representation in the requested format.
    #[error("`{type_url}` cannot be converted to {format} format")]
    UnsupportedConversion {
        /// Type URL of the variant.
        type_url: &'static str,
        /// The requested format.
        format: Format,
    },
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MalformedInput(format!("missing field `{field}`"))
    }

    pub(crate) fn unparsable(field: &'static str, value: &str) -> Self {
        Self::UnparsableNumber {
            field,
            value: value.to_owned(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
