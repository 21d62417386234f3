// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.authz` packages.

/// `cosmos.authz.v1beta1` package.
pub mod v1beta1 {
    use crate::google::protobuf::{Any, Timestamp};

    /// Authorizes any message of the given type URL.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct GenericAuthorization {
        /// Message type URL.
        #[prost(string, tag = "1")]
        pub msg: ::prost::alloc::string::String,
    }

    /// An authorization with an optional expiration.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Grant {
        /// Packed authorization.
        #[prost(message, optional, tag = "1")]
        pub authorization: ::core::option::Option<Any>,
        /// Expiration time, absent for grants that never expire.
        #[prost(message, optional, tag = "2")]
        pub expiration: ::core::option::Option<Timestamp>,
    }

    /// Grants an authorization from granter to grantee.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgGrant {
        /// Granter address.
        #[prost(string, tag = "1")]
        pub granter: ::prost::alloc::string::String,
        /// Grantee address.
        #[prost(string, tag = "2")]
        pub grantee: ::prost::alloc::string::String,
        /// The grant.
        #[prost(message, optional, tag = "3")]
        pub grant: ::core::option::Option<Grant>,
    }

    /// Revokes a previously granted authorization.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgRevoke {
        /// Granter address.
        #[prost(string, tag = "1")]
        pub granter: ::prost::alloc::string::String,
        /// Grantee address.
        #[prost(string, tag = "2")]
        pub grantee: ::prost::alloc::string::String,
        /// Type URL of the revoked message.
        #[prost(string, tag = "3")]
        pub msg_type_url: ::prost::alloc::string::String,
    }
}
