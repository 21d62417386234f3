// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

use crate::codec::Convertible;
use crate::coin::{CoinJson, Coins};
use crate::num::{parse_u64, Dec};
use crate::proto::cosmos::gov::v1beta1 as pb;
use crate::Error;

wire_enum! {
    /// A voter's choice.
    VoteOption {
        /// Default, invalid value.
        Unspecified = 0 => "VOTE_OPTION_UNSPECIFIED",
        /// Yes.
        Yes = 1 => "VOTE_OPTION_YES",
        /// Abstain.
        Abstain = 2 => "VOTE_OPTION_ABSTAIN",
        /// No.
        No = 3 => "VOTE_OPTION_NO",
        /// No with veto.
        NoWithVeto = 4 => "VOTE_OPTION_NO_WITH_VETO",
    }
}

/// A vote option carrying part of the voter's weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedVoteOption {
    /// The option.
    pub option: VoteOption,
    /// Share of the voting power, between 0 and 1.
    pub weight: Dec,
}

/// Amino schema of [`WeightedVoteOption`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedVoteOptionAmino {
    /// Option code.
    pub option: i32,
    /// Decimal weight.
    pub weight: String,
}

/// Data schema of [`WeightedVoteOption`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedVoteOptionData {
    /// `VOTE_OPTION_*` name.
    pub option: String,
    /// Decimal weight.
    pub weight: String,
}

impl Convertible for WeightedVoteOption {
    type Amino = WeightedVoteOptionAmino;
    type Data = WeightedVoteOptionData;
    type Proto = pb::WeightedVoteOption;

    fn to_amino(&self) -> Result<WeightedVoteOptionAmino, Error> {
        Ok(WeightedVoteOptionAmino {
            option: self.option.code(),
            weight: self.weight.to_string(),
        })
    }

    fn from_amino(amino: WeightedVoteOptionAmino) -> Result<Self, Error> {
        Ok(Self {
            option: VoteOption::from_code(amino.option)?,
            weight: Dec::parse("weight", &amino.weight)?,
        })
    }

    fn to_data(&self) -> Result<WeightedVoteOptionData, Error> {
        Ok(WeightedVoteOptionData {
            option: self.option.name().to_owned(),
            weight: self.weight.to_string(),
        })
    }

    fn from_data(data: WeightedVoteOptionData) -> Result<Self, Error> {
        Ok(Self {
            option: VoteOption::from_name(&data.option)?,
            weight: Dec::parse("weight", &data.weight)?,
        })
    }

    fn to_proto(&self) -> Result<pb::WeightedVoteOption, Error> {
        Ok(pb::WeightedVoteOption {
            option: self.option.code(),
            weight: self.weight.to_scaled_string(),
        })
    }

    fn from_proto(proto: pb::WeightedVoteOption) -> Result<Self, Error> {
        Ok(Self {
            option: VoteOption::from_code(proto.option)?,
            weight: Dec::parse_scaled("weight", &proto.weight)?,
        })
    }
}

/// A vote cast on a proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    /// Proposal id.
    pub proposal_id: u64,
    /// Voter address.
    pub voter: String,
    /// Weighted options.
    pub options: Vec<WeightedVoteOption>,
}

/// Amino schema of [`Vote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteAmino {
    /// Decimal proposal id.
    pub proposal_id: String,
    /// Voter address.
    pub voter: String,
    /// Weighted options.
    pub options: Vec<WeightedVoteOptionAmino>,
}

/// Data schema of [`Vote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteData {
    /// Decimal proposal id.
    pub proposal_id: String,
    /// Voter address.
    pub voter: String,
    /// Weighted options.
    pub options: Vec<WeightedVoteOptionData>,
}

impl Convertible for Vote {
    type Amino = VoteAmino;
    type Data = VoteData;
    type Proto = pb::Vote;

    fn to_amino(&self) -> Result<VoteAmino, Error> {
        Ok(VoteAmino {
            proposal_id: self.proposal_id.to_string(),
            voter: self.voter.clone(),
            options: self
                .options
                .iter()
                .map(WeightedVoteOption::to_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_amino(amino: VoteAmino) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: parse_u64("proposal_id", &amino.proposal_id)?,
            voter: amino.voter,
            options: amino
                .options
                .into_iter()
                .map(WeightedVoteOption::from_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn to_data(&self) -> Result<VoteData, Error> {
        Ok(VoteData {
            proposal_id: self.proposal_id.to_string(),
            voter: self.voter.clone(),
            options: self
                .options
                .iter()
                .map(WeightedVoteOption::to_data)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_data(data: VoteData) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: parse_u64("proposal_id", &data.proposal_id)?,
            voter: data.voter,
            options: data
                .options
                .into_iter()
                .map(WeightedVoteOption::from_data)
                .collect::<Result<_, _>>()?,
        })
    }

    fn to_proto(&self) -> Result<pb::Vote, Error> {
        Ok(pb::Vote {
            proposal_id: self.proposal_id,
            voter: self.voter.clone(),
            options: self
                .options
                .iter()
                .map(WeightedVoteOption::to_proto)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_proto(proto: pb::Vote) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: proto.proposal_id,
            voter: proto.voter,
            options: proto
                .options
                .into_iter()
                .map(WeightedVoteOption::from_proto)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// A deposit made on a proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    /// Proposal id.
    pub proposal_id: u64,
    /// Depositor address.
    pub depositor: String,
    /// Deposited coins.
    pub amount: Coins,
}

/// JSON schema of [`Deposit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositJson {
    /// Decimal proposal id.
    pub proposal_id: String,
    /// Depositor address.
    pub depositor: String,
    /// Deposited coins.
    pub amount: Vec<CoinJson>,
}

impl Convertible for Deposit {
    type Amino = DepositJson;
    type Data = DepositJson;
    type Proto = pb::Deposit;

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

    fn to_proto(&self) -> Result<pb::Deposit, Error> {
        Ok(pb::Deposit {
            proposal_id: self.proposal_id,
            depositor: self.depositor.clone(),
            amount: self.amount.to_proto(),
        })
    }

    fn from_proto(proto: pb::Deposit) -> Result<Self, Error> {
        Ok(Self {
            proposal_id: proto.proposal_id,
            depositor: proto.depositor,
            amount: Coins::from_proto(proto.amount)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{
        from_proto_bytes, to_amino_json, to_data_json, to_proto_bytes,
    };

    #[test]
    fn weight_is_decimal_in_json_and_scaled_in_proto(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vote = Vote {
            proposal_id: 4,
            voter: "init1voter".into(),
            options: vec![
                WeightedVoteOption {
                    option: VoteOption::Yes,
                    weight: Dec::parse("weight", "0.7")?,
                },
                WeightedVoteOption {
                    option: VoteOption::NoWithVeto,
                    weight: Dec::parse("weight", "0.3")?,
                },
            ],
        };

        assert_eq!(
            to_amino_json(&vote)?["options"][0],
            json!({"option": 1, "weight": "0.700000000000000000"})
        );
        assert_eq!(
            to_data_json(&vote)?["options"][1],
            json!({"option": "VOTE_OPTION_NO_WITH_VETO", "weight": "0.300000000000000000"})
        );

        let proto = vote.to_proto()?;
        assert_eq!(proto.options[0].weight, "700000000000000000");
        assert_eq!(from_proto_bytes::<Vote>(&to_proto_bytes(&vote)?)?, vote);
        Ok(())
    }
}
