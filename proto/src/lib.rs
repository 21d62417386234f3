// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Protobuf message definitions for the subset of the Cosmos SDK and IBC
//! schema consumed by `initia-core`.
//!
//! The structs mirror the upstream `.proto` files field-for-field: field
//! numbers and wire types must match the chain's schema registry. Enum fields
//! are kept as plain `int32` on the wire and interpreted by `initia-core`.
//! Oneof groups are flattened into their optional member fields, which is
//! wire compatible.

#![deny(missing_docs)]

pub mod cosmos;
pub mod google;
pub mod ibc;

pub use prost::Message;
