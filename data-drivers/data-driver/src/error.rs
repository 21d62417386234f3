// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Error-type for initia-data-driver.

use std::io;
use std::str::Utf8Error;

use initia_core::Format;

use crate::config::FamilyKind;

/// The transcoder error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload could not be decoded or re-encoded.
    #[error(transparent)]
    Codec(#[from] initia_core::Error),
    /// The payload exceeds the configured limit.
    #[error("payload of {len} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Payload length.
        len: usize,
        /// Configured `max_payload_len`.
        limit: usize,
    },
    /// The payload belongs to a family the configuration leaves out.
    #[error("family {family} is disabled ({format} tag `{tag}`)")]
    FamilyDisabled {
        /// The family owning the tag.
        family: FamilyKind,
        /// Format of the payload.
        format: Format,
        /// The type tag found in the payload.
        tag: String,
    },
    /// A JSON payload is not valid UTF-8.
    #[error("json payload is not utf-8: {0}")]
    Utf8(#[from] Utf8Error),
    /// The configuration file could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    /// The configuration file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),
}
