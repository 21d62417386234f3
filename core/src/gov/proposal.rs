// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProposalContent;
use crate::codec::{required, AminoAny, Convertible, DataAny};
use crate::coin::{CoinJson, Coins};
use crate::num::{parse_u64, Int};
use crate::proto::cosmos::gov::v1beta1 as pb;
use crate::{time, Error};

wire_enum! {
    /// Lifecycle stage of a proposal.
    ProposalStatus {
        /// Default, invalid value.
        Unspecified = 0 => "PROPOSAL_STATUS_UNSPECIFIED",
        /// Waiting for the minimum deposit.
        DepositPeriod = 1 => "PROPOSAL_STATUS_DEPOSIT_PERIOD",
        /// Open for votes.
        VotingPeriod = 2 => "PROPOSAL_STATUS_VOTING_PERIOD",
        /// Accepted.
        Passed = 3 => "PROPOSAL_STATUS_PASSED",
        /// Refused.
        Rejected = 4 => "PROPOSAL_STATUS_REJECTED",
        /// Passed but its execution failed.
        Failed = 5 => "PROPOSAL_STATUS_FAILED",
    }
}

/// Vote counts of a proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyResult {
    /// Yes.
    pub yes: Int,
    /// Abstain.
    pub abstain: Int,
    /// No.
    pub no: Int,
    /// No with veto.
    pub no_with_veto: Int,
}

/// JSON schema of [`TallyResult`]; every count is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResultJson {
    /// Yes.
    pub yes: String,
    /// Abstain.
    pub abstain: String,
    /// No.
    pub no: String,
    /// No with veto.
    pub no_with_veto: String,
}

impl Convertible for TallyResult {
    type Amino = TallyResultJson;
    type Data = TallyResultJson;
    type Proto = pb::TallyResult;

    fn to_amino(&self) -> Result<TallyResultJson, Error> {
        Ok(TallyResultJson {
            yes: self.yes.to_string(),
            abstain: self.abstain.to_string(),
            no: self.no.to_string(),
            no_with_veto: self.no_with_veto.to_string(),
        })
    }

    fn from_amino(amino: TallyResultJson) -> Result<Self, Error> {
        Ok(Self {
            yes: Int::parse("yes", &amino.yes)?,
            abstain: Int::parse("abstain", &amino.abstain)?,
            no: Int::parse("no", &amino.no)?,
            no_with_veto: Int::parse("no_with_veto", &amino.no_with_veto)?,
        })
    }

    fn to_data(&self) -> Result<TallyResultJson, Error> {
        self.to_amino()
    }

    fn from_data(data: TallyResultJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::TallyResult, Error> {
        Ok(pb::TallyResult {
            yes: self.yes.to_string(),
            abstain: self.abstain.to_string(),
            no: self.no.to_string(),
            no_with_veto: self.no_with_veto.to_string(),
        })
    }

    fn from_proto(proto: pb::TallyResult) -> Result<Self, Error> {
        Ok(Self {
            yes: Int::parse("yes", &proto.yes)?,
            abstain: Int::parse("abstain", &proto.abstain)?,
            no: Int::parse("no", &proto.no)?,
            no_with_veto: Int::parse("no_with_veto", &proto.no_with_veto)?,
        })
    }
}

/// A `v1beta1` governance proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalLegacy {
    /// Proposal id.
    pub id: u64,
    /// What the proposal does.
    pub content: ProposalContent,
    /// Lifecycle stage.
    pub status: ProposalStatus,
    /// Vote counts.
    pub final_tally_result: TallyResult,
    /// Submission time.
    pub submit_time: DateTime<Utc>,
    /// End of the deposit period.
    pub deposit_end_time: DateTime<Utc>,
    /// Sum of all deposits.
    pub total_deposit: Coins,
    /// Start of the voting period.
    pub voting_start_time: DateTime<Utc>,
    /// End of the voting period.
    pub voting_end_time: DateTime<Utc>,
}

/// Amino schema of [`ProposalLegacy`]: `id` and an integer status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalLegacyAmino {
    /// Decimal id.
    pub id: String,
    /// Enveloped content.
    pub content: AminoAny,
    /// Status code.
    pub status: i32,
    /// Vote counts.
    pub final_tally_result: TallyResultJson,
    /// RFC 3339 submission time.
    pub submit_time: String,
    /// RFC 3339 deposit end.
    pub deposit_end_time: String,
    /// Total deposit.
    pub total_deposit: Vec<CoinJson>,
    /// RFC 3339 voting start.
    pub voting_start_time: String,
    /// RFC 3339 voting end.
    pub voting_end_time: String,
}

/// Data schema of [`ProposalLegacy`]: `proposal_id` and a named status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalLegacyData {
    /// Decimal id.
    pub proposal_id: String,
    /// Enveloped content.
    pub content: DataAny,
    /// `PROPOSAL_STATUS_*` name.
    pub status: String,
    /// Vote counts.
    pub final_tally_result: TallyResultJson,
    /// RFC 3339 submission time.
    pub submit_time: String,
    /// RFC 3339 deposit end.
    pub deposit_end_time: String,
    /// Total deposit.
    pub total_deposit: Vec<CoinJson>,
    /// RFC 3339 voting start.
    pub voting_start_time: String,
    /// RFC 3339 voting end.
    pub voting_end_time: String,
}

impl Convertible for ProposalLegacy {
    type Amino = ProposalLegacyAmino;
    type Data = ProposalLegacyData;
    type Proto = pb::Proposal;

    fn to_amino(&self) -> Result<ProposalLegacyAmino, Error> {
        Ok(ProposalLegacyAmino {
            id: self.id.to_string(),
            content: self.content.to_amino()?,
            status: self.status.code(),
            final_tally_result: self.final_tally_result.to_amino()?,
            submit_time: time::to_json(&self.submit_time),
            deposit_end_time: time::to_json(&self.deposit_end_time),
            total_deposit: self.total_deposit.to_json(),
            voting_start_time: time::to_json(&self.voting_start_time),
            voting_end_time: time::to_json(&self.voting_end_time),
        })
    }

    fn from_amino(amino: ProposalLegacyAmino) -> Result<Self, Error> {
        Ok(Self {
            id: parse_u64("id", &amino.id)?,
            content: ProposalContent::from_amino(amino.content)?,
            status: ProposalStatus::from_code(amino.status)?,
            final_tally_result: TallyResult::from_amino(
                amino.final_tally_result,
            )?,
            submit_time: time::from_json("submit_time", &amino.submit_time)?,
            deposit_end_time: time::from_json(
                "deposit_end_time",
                &amino.deposit_end_time,
            )?,
            total_deposit: Coins::from_json(amino.total_deposit)?,
            voting_start_time: time::from_json(
                "voting_start_time",
                &amino.voting_start_time,
            )?,
            voting_end_time: time::from_json(
                "voting_end_time",
                &amino.voting_end_time,
            )?,
        })
    }

    fn to_data(&self) -> Result<ProposalLegacyData, Error> {
        Ok(ProposalLegacyData {
            proposal_id: self.id.to_string(),
            content: self.content.to_data()?,
            status: self.status.name().to_owned(),
            final_tally_result: self.final_tally_result.to_data()?,
            submit_time: time::to_json(&self.submit_time),
            deposit_end_time: time::to_json(&self.deposit_end_time),
            total_deposit: self.total_deposit.to_json(),
            voting_start_time: time::to_json(&self.voting_start_time),
            voting_end_time: time::to_json(&self.voting_end_time),
        })
    }

    fn from_data(data: ProposalLegacyData) -> Result<Self, Error> {
        Ok(Self {
            id: parse_u64("proposal_id", &data.proposal_id)?,
            content: ProposalContent::from_data(data.content)?,
            status: ProposalStatus::from_name(&data.status)?,
            final_tally_result: TallyResult::from_data(
                data.final_tally_result,
            )?,
            submit_time: time::from_json("submit_time", &data.submit_time)?,
            deposit_end_time: time::from_json(
                "deposit_end_time",
                &data.deposit_end_time,
            )?,
            total_deposit: Coins::from_json(data.total_deposit)?,
            voting_start_time: time::from_json(
                "voting_start_time",
                &data.voting_start_time,
            )?,
            voting_end_time: time::from_json(
                "voting_end_time",
                &data.voting_end_time,
            )?,
        })
    }

    fn to_proto(&self) -> Result<pb::Proposal, Error> {
        Ok(pb::Proposal {
            proposal_id: self.id,
            content: Some(self.content.to_proto()?),
            status: self.status.code(),
            final_tally_result: Some(self.final_tally_result.to_proto()?),
            submit_time: Some(time::to_proto(&self.submit_time)),
            deposit_end_time: Some(time::to_proto(&self.deposit_end_time)),
            total_deposit: self.total_deposit.to_proto(),
            voting_start_time: Some(time::to_proto(&self.voting_start_time)),
            voting_end_time: Some(time::to_proto(&self.voting_end_time)),
        })
    }

    fn from_proto(proto: pb::Proposal) -> Result<Self, Error> {
        Ok(Self {
            id: proto.proposal_id,
            content: ProposalContent::from_proto(required(
                "content",
                proto.content,
            )?)?,
            status: ProposalStatus::from_code(proto.status)?,
            final_tally_result: TallyResult::from_proto(required(
                "final_tally_result",
                proto.final_tally_result,
            )?)?,
            submit_time: time::from_proto_required(
                "submit_time",
                proto.submit_time,
            )?,
            deposit_end_time: time::from_proto_required(
                "deposit_end_time",
                proto.deposit_end_time,
            )?,
            total_deposit: Coins::from_proto(proto.total_deposit)?,
            voting_start_time: time::from_proto_required(
                "voting_start_time",
                proto.voting_start_time,
            )?,
            voting_end_time: time::from_proto_required(
                "voting_end_time",
                proto.voting_end_time,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_and_names() -> Result<(), Error> {
        assert_eq!(ProposalStatus::from_code(2)?, ProposalStatus::VotingPeriod);
        assert_eq!(
            ProposalStatus::from_name("PROPOSAL_STATUS_PASSED")?.code(),
            3
        );
        assert!(matches!(
            ProposalStatus::from_code(9),
            Err(Error::MalformedInput(_))
        ));
        assert!(ProposalStatus::from_name("passed").is_err());
        Ok(())
    }

    #[test]
    fn tally_counts_are_required() {
        let json = serde_json::json!({"yes": "1", "abstain": "0", "no": "0"});
        assert!(matches!(
            crate::codec::from_data_json::<TallyResult>(json),
            Err(Error::MalformedInput(msg)) if msg.contains("no_with_veto")
        ));
    }
}
