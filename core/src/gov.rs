// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Governance: legacy proposals, their contents, votes, deposits and the
//! related messages.

mod content;
mod msgs;
mod proposal;
mod vote;

pub use content::{
    ClientUpdateProposal, ClientUpdateProposalJson, ParamChange,
    ParameterChangeProposal, ParameterChangeProposalJson, ProposalContent,
    TextProposal, TextProposalJson,
};
pub use msgs::{
    MsgDeposit, MsgSubmitProposal, MsgSubmitProposalJson, MsgVote,
    MsgVoteAmino, MsgVoteData,
};
pub use proposal::{
    ProposalLegacy, ProposalLegacyAmino, ProposalLegacyData, ProposalStatus,
    TallyResult, TallyResultJson,
};
pub use vote::{
    Deposit, DepositJson, Vote, VoteAmino, VoteData, VoteOption,
    WeightedVoteOption, WeightedVoteOptionAmino, WeightedVoteOptionData,
};
