// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! `cosmos.gov` packages.

/// `cosmos.gov.v1beta1` package.
pub mod v1beta1 {
    use crate::cosmos::base::v1beta1::Coin;
    use crate::google::protobuf::{Any, Timestamp};

    /// Free-text governance proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct TextProposal {
        /// Proposal title.
        #[prost(string, tag = "1")]
        pub title: ::prost::alloc::string::String,
        /// Proposal description.
        #[prost(string, tag = "2")]
        pub description: ::prost::alloc::string::String,
    }

    /// Vote counts of a proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct TallyResult {
        /// Yes votes.
        #[prost(string, tag = "1")]
        pub yes: ::prost::alloc::string::String,
        /// Abstain votes.
        #[prost(string, tag = "2")]
        pub abstain: ::prost::alloc::string::String,
        /// No votes.
        #[prost(string, tag = "3")]
        pub no: ::prost::alloc::string::String,
        /// No-with-veto votes.
        #[prost(string, tag = "4")]
        pub no_with_veto: ::prost::alloc::string::String,
    }

    /// A submitted proposal and its lifecycle timestamps.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Proposal {
        /// Proposal identifier.
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        /// Packed proposal content.
        #[prost(message, optional, tag = "2")]
        pub content: ::core::option::Option<Any>,
        /// `ProposalStatus` code.
        #[prost(int32, tag = "3")]
        pub status: i32,
        /// Tally result.
        #[prost(message, optional, tag = "4")]
        pub final_tally_result: ::core::option::Option<TallyResult>,
        /// Submission time.
        #[prost(message, optional, tag = "5")]
        pub submit_time: ::core::option::Option<Timestamp>,
        /// End of the deposit period.
        #[prost(message, optional, tag = "6")]
        pub deposit_end_time: ::core::option::Option<Timestamp>,
        /// Total deposit.
        #[prost(message, repeated, tag = "7")]
        pub total_deposit: ::prost::alloc::vec::Vec<Coin>,
        /// Start of the voting period.
        #[prost(message, optional, tag = "8")]
        pub voting_start_time: ::core::option::Option<Timestamp>,
        /// End of the voting period.
        #[prost(message, optional, tag = "9")]
        pub voting_end_time: ::core::option::Option<Timestamp>,
    }

    /// A vote option with its weight.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct WeightedVoteOption {
        /// `VoteOption` code.
        #[prost(int32, tag = "1")]
        pub option: i32,
        /// Weight as a scaled 18-decimal integer string.
        #[prost(string, tag = "2")]
        pub weight: ::prost::alloc::string::String,
    }

    /// A vote cast on a proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Vote {
        /// Proposal identifier.
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        /// Voter address.
        #[prost(string, tag = "2")]
        pub voter: ::prost::alloc::string::String,
        /// Weighted options.
        #[prost(message, repeated, tag = "4")]
        pub options: ::prost::alloc::vec::Vec<WeightedVoteOption>,
    }

    /// A deposit made on a proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Deposit {
        /// Proposal identifier.
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        /// Depositor address.
        #[prost(string, tag = "2")]
        pub depositor: ::prost::alloc::string::String,
        /// Deposited coins.
        #[prost(message, repeated, tag = "3")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }

    /// Submits a legacy content proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgSubmitProposal {
        /// Packed proposal content.
        #[prost(message, optional, tag = "1")]
        pub content: ::core::option::Option<Any>,
        /// Initial deposit.
        #[prost(message, repeated, tag = "2")]
        pub initial_deposit: ::prost::alloc::vec::Vec<Coin>,
        /// Proposer address.
        #[prost(string, tag = "3")]
        pub proposer: ::prost::alloc::string::String,
    }

    /// Casts a single-option vote.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgVote {
        /// Proposal identifier.
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        /// Voter address.
        #[prost(string, tag = "2")]
        pub voter: ::prost::alloc::string::String,
        /// `VoteOption` code.
        #[prost(int32, tag = "3")]
        pub option: i32,
    }

    /// Adds a deposit to a proposal.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct MsgDeposit {
        /// Proposal identifier.
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        /// Depositor address.
        #[prost(string, tag = "2")]
        pub depositor: ::prost::alloc::string::String,
        /// Deposited coins.
        #[prost(message, repeated, tag = "3")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }
}
