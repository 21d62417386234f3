// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.vesting` packages.

/// `cosmos.vesting.v1beta1` package.
pub mod v1beta1 {
    use crate::cosmos::auth::v1beta1::BaseAccount;
    use crate::cosmos::base::v1beta1::Coin;

    /// Fields shared by every vesting account.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct BaseVestingAccount {
        /// Underlying account.
        #[prost(message, optional, tag = "1")]
        pub base_account: ::core::option::Option<BaseAccount>,
        /// Coins locked at account creation.
        #[prost(message, repeated, tag = "2")]
        pub original_vesting: ::prost::alloc::vec::Vec<Coin>,
        /// Vested coins that are delegated.
        #[prost(message, repeated, tag = "3")]
        pub delegated_free: ::prost::alloc::vec::Vec<Coin>,
        /// Still-vesting coins that are delegated.
        #[prost(message, repeated, tag = "4")]
        pub delegated_vesting: ::prost::alloc::vec::Vec<Coin>,
        /// Unix time, in seconds, at which vesting ends.
        #[prost(int64, tag = "5")]
        pub end_time: i64,
    }

    /// Vests linearly between `start_time` and `end_time`.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct ContinuousVestingAccount {
        /// Shared vesting fields.
        #[prost(message, optional, tag = "1")]
        pub base_vesting_account: ::core::option::Option<BaseVestingAccount>,
        /// Unix time, in seconds, at which vesting starts.
        #[prost(int64, tag = "2")]
        pub start_time: i64,
    }

    /// Vests everything at `end_time`.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct DelayedVestingAccount {
        /// Shared vesting fields.
        #[prost(message, optional, tag = "1")]
        pub base_vesting_account: ::core::option::Option<BaseVestingAccount>,
    }

    /// One step of a periodic vesting schedule.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Period {
        /// Duration of the period in seconds.
        #[prost(int64, tag = "1")]
        pub length: i64,
        /// Coins released at the end of the period.
        #[prost(message, repeated, tag = "2")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }

    /// Vests according to a list of periods.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct PeriodicVestingAccount {
        /// Shared vesting fields.
        #[prost(message, optional, tag = "1")]
        pub base_vesting_account: ::core::option::Option<BaseVestingAccount>,
        /// Unix time, in seconds, at which the first period starts.
        #[prost(int64, tag = "2")]
        pub start_time: i64,
        /// Vesting schedule.
        #[prost(message, repeated, tag = "3")]
        pub vesting_periods: ::prost::alloc::vec::Vec<Period>,
    }
}
