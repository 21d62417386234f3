// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Transcoder between the Amino JSON, Data JSON and Protobuf renditions of
//! the `initia-core` entity families.
//!
//! A payload is self-describing in every format: JSON carries its `type` or
//! `@type` tag and Protobuf payloads are encoded `google.protobuf.Any`
//! messages. The [`Transcoder`] peeks the tag, finds the enabled family
//! whose registry knows it and decodes against that family.
//!
//! ```no_run
//! use initia_data_driver::{DriverConfig, Format, Transcoder};
//!
//! # fn main() -> Result<(), initia_data_driver::Error> {
//! let transcoder = Transcoder::new(DriverConfig::load("driver.toml")?);
//! let amino = br#"{"type":"cosmos-sdk/TextProposal","value":{"title":"t","description":"d"}}"#;
//! let proto = transcoder.transcode(Format::Amino, amino, Format::Proto)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod transcoder;

pub use config::{DriverConfig, FamilyKind, DEFAULT_MAX_PAYLOAD_LEN};
pub use error::Error;
pub use initia_core::Format;
pub use transcoder::{Entity, Transcoder};
