// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Types of the `ibc` packages.

/// `ibc.core` packages.
pub mod core {
    /// `ibc.core.client` package.
    pub mod client {
        /// `ibc.core.client.v1` package.
        pub mod v1 {
            /// Governance proposal substituting an expired or frozen client.
            #[derive(Clone, PartialEq, Eq, ::prost::Message)]
            pub struct ClientUpdateProposal {
                /// Proposal title.
                #[prost(string, tag = "1")]
                pub title: ::prost::alloc::string::String,
                /// Proposal description.
                #[prost(string, tag = "2")]
                pub description: ::prost::alloc::string::String,
                /// Client identifier of the client to be updated.
                #[prost(string, tag = "3")]
                pub subject_client_id: ::prost::alloc::string::String,
                /// Client identifier of the substitute client.
                #[prost(string, tag = "4")]
                pub substitute_client_id: ::prost::alloc::string::String,
            }
        }
    }
}
