// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.crypto` packages.

/// `cosmos.crypto.secp256k1` package.
pub mod secp256k1 {
    /// Compressed secp256k1 public key.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct PubKey {
        /// 33-byte compressed point.
        #[prost(bytes = "vec", tag = "1")]
        pub key: ::prost::alloc::vec::Vec<u8>,
    }
}

/// `cosmos.crypto.ed25519` package.
pub mod ed25519 {
    /// Ed25519 public key.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct PubKey {
        /// 32-byte key.
        #[prost(bytes = "vec", tag = "1")]
        pub key: ::prost::alloc::vec::Vec<u8>,
    }
}
