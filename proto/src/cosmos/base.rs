// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.base` packages.

/// `cosmos.base.v1beta1` package.
pub mod v1beta1 {
    /// A token amount of a single denomination.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Coin {
        /// Denomination.
        #[prost(string, tag = "1")]
        pub denom: ::prost::alloc::string::String,
        /// Decimal integer amount.
        #[prost(string, tag = "2")]
        pub amount: ::prost::alloc::string::String,
    }
}
