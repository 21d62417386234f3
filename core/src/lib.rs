// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Typed Cosmos SDK entities and their three wire encodings.
//!
//! Every entity implements [`Convertible`] and converts losslessly between
//! legacy Amino JSON, the REST Data JSON and Protobuf binary. Polymorphic
//! fields (public keys, accounts, proposal contents, authorizations and
//! messages) are closed families dispatched through a per-family
//! [`Registry`](registry::Registry).

#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

pub mod auth;
pub mod authz;
pub mod bank;
pub mod codec;
pub mod coin;
pub mod distribution;
mod error;
pub mod gov;
pub mod key;
pub mod msg;
pub mod num;
pub mod registry;
pub mod staking;
pub mod time;

#[cfg(any(feature = "faker", test))]
pub mod faker;

pub use codec::{
    from_amino_json, from_data_json, from_proto_bytes, pack_any,
    to_amino_json, to_data_json, to_proto_bytes, unpack_any, AminoAny,
    Convertible, DataAny, Format, Packable, Tagged,
};
pub use error::Error;
pub use initia_proto as proto;
pub use registry::{Family, Registry};
