// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.bank` packages.

/// `cosmos.bank.v1beta1` package.
pub mod v1beta1 {
    use crate::cosmos::base::v1beta1::Coin;

    /// Transfers coins between two accounts.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgSend {
        /// Sender address.
        #[prost(string, tag = "1")]
        pub from_address: ::prost::alloc::string::String,
        /// Recipient address.
        #[prost(string, tag = "2")]
        pub to_address: ::prost::alloc::string::String,
        /// Transferred coins.
        #[prost(message, repeated, tag = "3")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }

    /// Authorizes a grantee to send up to a spend limit.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct SendAuthorization {
        /// Maximum amount the grantee may send.
        #[prost(message, repeated, tag = "1")]
        pub spend_limit: ::prost::alloc::vec::Vec<Coin>,
        /// Recipients the grantee may send to; empty means any.
        #[prost(string, repeated, tag = "2")]
        pub allow_list: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
}
