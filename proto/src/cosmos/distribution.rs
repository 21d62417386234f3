// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.distribution` packages.

/// `cosmos.distribution.v1beta1` package.
pub mod v1beta1 {
    /// Withdraws the rewards of a delegation.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgWithdrawDelegatorReward {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Validator operator address.
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
    }
}
