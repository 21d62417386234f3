// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

use super::{DepositJson, ProposalContent, VoteOption};
use crate::codec::{required, AminoAny, Convertible, DataAny, Tagged};
use crate::coin::{CoinJson, Coins};
use crate::num::parse_u64;
use crate::proto::cosmos::gov::v1beta1 as pb;
use crate::Error;

/// Submits a legacy content proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSubmitProposal {
    /// Proposal content.
    pub content: ProposalContent,
    /// Deposit made at submission.
    pub initial_deposit: Coins,
    /// Proposer address.
    pub proposer: String,
}

/// JSON schema of [`MsgSubmitProposal`], generic over the content envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgSubmitProposalJson<C> {
    /// Enveloped content.
    pub content: C,
    /// Initial deposit.
    pub initial_deposit: Vec<CoinJson>,
    /// Proposer address.
    pub proposer: String,
}

impl Tagged for MsgSubmitProposal {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/MsgSubmitProposal");
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
}

impl Convertible for MsgSubmitProposal {
    type Amino = MsgSubmitProposalJson<AminoAny>;
    type Data = MsgSubmitProposalJson<DataAny>;
    type Proto = pb::MsgSubmitProposal;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(MsgSubmitProposalJson {
            content: self.content.to_amino()?,
            initial_deposit: self.initial_deposit.to_json(),
            proposer: self.proposer.clone(),
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            content: ProposalContent::from_amino(amino.content)?,
            initial_deposit: Coins::from_json(amino.initial_deposit)?,
            proposer: amino.proposer,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(MsgSubmitProposalJson {
            content: self.content.to_data()?,
            initial_deposit: self.initial_deposit.to_json(),
            proposer: self.proposer.clone(),
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            content: ProposalContent::from_data(data.content)?,
            initial_deposit: Coins::from_json(data.initial_deposit)?,
            proposer: data.proposer,
        })
    }

    fn to_proto(&self) -> Result<pb::MsgSubmitProposal, Error> {
        Ok(pb::MsgSubmitProposal {
            content: Some(self.content.to_proto()?),
            initial_deposit: self.initial_deposit.to_proto(),
            proposer: self.proposer.clone(),
        })
    }

    fn from_proto(proto: pb::MsgSubmitProposal) -> Result<Self, Error> {
        Ok(Self {
            content: ProposalContent::from_proto(required(
                "content",
                proto.content,
            )?)?,
            initial_deposit: Coins::from_proto(proto.initial_deposit)?,
            proposer: proto.proposer,
        })
    }
}

/// Casts a single-option vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgVote {
    /// Proposal id.
    pub proposal_id: u64,
    /// Voter address.
    pub voter: String,
    /// Chosen option.
    pub option: VoteOption,
}

/// Amino schema of [`MsgVote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgVoteAmino {
    /// Decimal proposal id.
    pub proposal_id: String,
    /// Voter address.
    pub voter: String,
    /// Option code.
    pub option: i32,
}

/// Data schema of [`MsgVote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgVoteData {
    /// Decimal proposal id.
    pub proposal_id: String,
    /// Voter address.
    pub voter: String,
    /// `VOTE_OPTION_*` name.
    pub option: String,
}

impl Tagged for MsgVote {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/MsgVote");
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.MsgVote";
}

impl Convertible for MsgVote {
    type Amino = MsgVoteAmino;
    type Data = MsgVoteData;
    type Proto = pb::MsgVote;

    fn to_amino(&self) -> Result<MsgVoteAmino, Error> {
        Ok(MsgVoteAmino {
            proposal_id: self.proposal_id.to_string(),
            voter: self.voter.clone(),
            option: self.option.code(),
        })
    }

    fn from_amino(amino: MsgVoteAmino) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: parse_u64("proposal_id", &amino.proposal_id)?,
            voter: amino.voter,
            option: VoteOption::from_code(amino.option)?,
        })
    }

    fn to_data(&self) -> Result<MsgVoteData, Error> {
        Ok(MsgVoteData {
            proposal_id: self.proposal_id.to_string(),
            voter: self.voter.clone(),
            option: self.option.name().to_owned(),
        })
    }

    fn from_data(data: MsgVoteData) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: parse_u64("proposal_id", &data.proposal_id)?,
            voter: data.voter,
            option: VoteOption::from_name(&data.option)?,
        })
    }

    fn to_proto(&self) -> Result<pb::MsgVote, Error> {
        Ok(pb::MsgVote {
            proposal_id: self.proposal_id,
            voter: self.voter.clone(),
            option: self.option.code(),
        })
    }

    fn from_proto(proto: pb::MsgVote) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: proto.proposal_id,
            voter: proto.voter,
            option: VoteOption::from_code(proto.option)?,
        })
    }
}

/// Adds coins to a proposal's deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgDeposit {
    /// Proposal id.
    pub proposal_id: u64,
    /// Depositor address.
    pub depositor: String,
    /// Deposited coins.
    pub amount: Coins,
}

impl Tagged for MsgDeposit {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/MsgDeposit");
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.MsgDeposit";
}

impl Convertible for MsgDeposit {
    type Amino = DepositJson;
    type Data = DepositJson;
    type Proto = pb::MsgDeposit;

    fn to_amino(&self) -> Result<DepositJson, Error> {
        Ok(DepositJson {
            proposal_id: self.proposal_id.to_string(),
            depositor: self.depositor.clone(),
            amount: self.amount.to_json(),
        })
    }

    fn from_amino(amino: DepositJson) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: parse_u64("proposal_id", &amino.proposal_id)?,
            depositor: amino.depositor,
            amount: Coins::from_json(amino.amount)?,
        })
    }

    fn to_data(&self) -> Result<DepositJson, Error> {
        self.to_amino()
    }

    fn from_data(data: DepositJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::MsgDeposit, Error> {
        Ok(pb::MsgDeposit {
            proposal_id: self.proposal_id,
            depositor: self.depositor.clone(),
            amount: self.amount.to_proto(),
        })
    }

    fn from_proto(proto: pb::MsgDeposit) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: proto.proposal_id,
            depositor: proto.depositor,
            amount: Coins::from_proto(proto.amount)?,
        })
    }
}
