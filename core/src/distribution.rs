// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Distribution module.

use serde::{Deserialize, Serialize};

use crate::codec::{Convertible, Tagged};
use crate::proto::cosmos::distribution::v1beta1 as pb;
use crate::Error;

/// Withdraws the rewards a delegation has accrued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgWithdrawDelegatorReward {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
}

/// JSON schema of [`MsgWithdrawDelegatorReward`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWithdrawDelegatorRewardJson {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
}

// the legacy amino name predates the message rename
impl Tagged for MsgWithdrawDelegatorReward {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/MsgWithdrawDelegationReward");
    const TYPE_URL: &'static str =
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
}

impl Convertible for MsgWithdrawDelegatorReward {
    type Amino = MsgWithdrawDelegatorRewardJson;
    type Data = MsgWithdrawDelegatorRewardJson;
    type Proto = pb::MsgWithdrawDelegatorReward;

    fn to_amino(&self) -> Result<MsgWithdrawDelegatorRewardJson, Error> {
        Ok(MsgWithdrawDelegatorRewardJson {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
        })
    }

    fn from_amino(
        amino: MsgWithdrawDelegatorRewardJson,
    ) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: amino.delegator_address,
            validator_address: amino.validator_address,
        })
    }

    fn to_data(&self) -> Result<MsgWithdrawDelegatorRewardJson, Error> {
        self.to_amino()
    }

    fn from_data(data: MsgWithdrawDelegatorRewardJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::MsgWithdrawDelegatorReward, Error> {
        Ok(pb::MsgWithdrawDelegatorReward {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
        })
    }

    fn from_proto(
        proto: pb::MsgWithdrawDelegatorReward,
    ) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: proto.delegator_address,
            validator_address: proto.validator_address,
        })
    }
}
