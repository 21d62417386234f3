// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.staking` packages.

/// `cosmos.staking.v1beta1` package.
pub mod v1beta1 {
    use crate::cosmos::base::v1beta1::Coin;
    use crate::google::protobuf::Timestamp;

    /// Bonded shares owned by a delegator on a validator.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Delegation {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Validator operator address.
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        /// Shares as a scaled 18-decimal integer string.
        #[prost(string, tag = "3")]
        pub shares: ::prost::alloc::string::String,
    }

    /// One pending unbonding.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct UnbondingDelegationEntry {
        /// Height at which the unbonding started.
        #[prost(int64, tag = "1")]
        pub creation_height: i64,
        /// Time at which the unbonding completes.
        #[prost(message, optional, tag = "2")]
        pub completion_time: ::core::option::Option<Timestamp>,
        /// Tokens initially scheduled.
        #[prost(string, tag = "3")]
        pub initial_balance: ::prost::alloc::string::String,
        /// Tokens still to be received.
        #[prost(string, tag = "4")]
        pub balance: ::prost::alloc::string::String,
    }

    /// All pending unbondings of a delegator from a validator.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct UnbondingDelegation {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Validator operator address.
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        /// Pending entries.
        #[prost(message, repeated, tag = "3")]
        pub entries: ::prost::alloc::vec::Vec<UnbondingDelegationEntry>,
    }

    /// Delegates coins to a validator.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgDelegate {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Validator operator address.
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        /// Delegated amount.
        #[prost(message, optional, tag = "3")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// Undelegates coins from a validator.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgUndelegate {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Validator operator address.
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        /// Undelegated amount.
        #[prost(message, optional, tag = "3")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// Moves a delegation from one validator to another.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgBeginRedelegate {
        /// Delegator address.
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        /// Source validator operator address.
        #[prost(string, tag = "2")]
        pub validator_src_address: ::prost::alloc::string::String,
        /// Destination validator operator address.
        #[prost(string, tag = "3")]
        pub validator_dst_address: ::prost::alloc::string::String,
        /// Redelegated amount.
        #[prost(message, optional, tag = "4")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// A list of validator addresses.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Validators {
        /// Operator addresses.
        #[prost(string, repeated, tag = "1")]
        pub address: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }

    /// Authorizes a grantee to perform staking operations.
    ///
    /// `allow_list` and `deny_list` form the `validators` oneof.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct StakeAuthorization {
        /// Optional cap on the delegated amount.
        #[prost(message, optional, tag = "1")]
        pub max_tokens: ::core::option::Option<Coin>,
        /// Validators the grantee may act on.
        #[prost(message, optional, tag = "2")]
        pub allow_list: ::core::option::Option<Validators>,
        /// Validators the grantee may not act on.
        #[prost(message, optional, tag = "3")]
        pub deny_list: ::core::option::Option<Validators>,
        /// `AuthorizationType` code.
        #[prost(int32, tag = "4")]
        pub authorization_type: i32,
    }
}
