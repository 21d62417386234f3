// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.params` packages.

/// `cosmos.params.v1beta1` package.
pub mod v1beta1 {
    /// A single parameter update.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct ParamChange {
        /// Module subspace.
        #[prost(string, tag = "1")]
        pub subspace: ::prost::alloc::string::String,
        /// Parameter key.
        #[prost(string, tag = "2")]
        pub key: ::prost::alloc::string::String,
        /// JSON encoded value.
        #[prost(string, tag = "3")]
        pub value: ::prost::alloc::string::String,
    }

    /// Governance proposal changing module parameters.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct ParameterChangeProposal {
        /// Proposal title.
        #[prost(string, tag = "1")]
        pub title: ::prost::alloc::string::String,
        /// Proposal description.
        #[prost(string, tag = "2")]
        pub description: ::prost::alloc::string::String,
        /// Requested changes.
        #[prost(message, repeated, tag = "3")]
        pub changes: ::prost::alloc::vec::Vec<ParamChange>,
    }
}
