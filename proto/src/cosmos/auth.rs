// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.auth` packages.

/// `cosmos.auth.v1beta1` package.
pub mod v1beta1 {
    use crate::google::protobuf::Any;

    /// Base account holding an address, a public key and replay counters.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct BaseAccount {
        /// Bech32 account address.
        #[prost(string, tag = "1")]
        pub address: ::prost::alloc::string::String,
        /// Packed public key, absent until the first signed transaction.
        #[prost(message, optional, tag = "2")]
        pub pub_key: ::core::option::Option<Any>,
        /// Account number assigned at creation.
        #[prost(uint64, tag = "3")]
        pub account_number: u64,
        /// Replay protection counter.
        #[prost(uint64, tag = "4")]
        pub sequence: u64,
    }
}
