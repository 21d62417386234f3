// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Bank module: transfers and send authorizations.

use serde::{Deserialize, Serialize};

use crate::codec::{Convertible, Tagged};
use crate::coin::{CoinJson, Coins};
use crate::proto::cosmos::bank::v1beta1 as pb;
use crate::Error;

/// Transfers coins from one account to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSend {
    /// Sender.
    pub from_address: String,
    /// Recipient.
    pub to_address: String,
    /// Transferred coins.
    pub amount: Coins,
}

/// JSON schema of [`MsgSend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSendJson {
    /// Sender.
    pub from_address: String,
    /// Recipient.
    pub to_address: String,
    /// Transferred coins.
    pub amount: Vec<CoinJson>,
}

impl Tagged for MsgSend {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/MsgSend");
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgSend";
}

impl Convertible for MsgSend {
    type Amino = MsgSendJson;
    type Data = MsgSendJson;
    type Proto = pb::MsgSend;

    fn to_amino(&self) -> Result<MsgSendJson, Error> {
        Ok(MsgSendJson {
            from_address: self.from_address.clone(),
            to_address: self.to_address.clone(),
            amount: self.amount.to_json(),
        })
    }

    fn from_amino(amino: MsgSendJson) -> Result<Self, Error> {
        Ok(Self {
            from_address: amino.from_address,
            to_address: amino.to_address,
            amount: Coins::from_json(amino.amount)?,
        })
    }

    fn to_data(&self) -> Result<MsgSendJson, Error> {
        self.to_amino()
    }

    fn from_data(data: MsgSendJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::MsgSend, Error> {
        Ok(pb::MsgSend {
            from_address: self.from_address.clone(),
            to_address: self.to_address.clone(),
            amount: self.amount.to_proto(),
        })
    }

    fn from_proto(proto: pb::MsgSend) -> Result<Self, Error> {
        Ok(Self {
            from_address: proto.from_address,
            to_address: proto.to_address,
            amount: Coins::from_proto(proto.amount)?,
        })
    }
}

/// Lets a grantee send up to `spend_limit` on the granter's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendAuthorization {
    /// Remaining spendable coins.
    pub spend_limit: Coins,
    /// Allowed recipients; empty allows any.
    pub allow_list: Vec<String>,
}

/// JSON schema of [`SendAuthorization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendAuthorizationJson {
    /// Remaining spendable coins.
    pub spend_limit: Vec<CoinJson>,
    /// Allowed recipients.
    #[serde(default)]
    pub allow_list: Vec<String>,
}

impl Tagged for SendAuthorization {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/SendAuthorization");
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.SendAuthorization";
}

impl Convertible for SendAuthorization {
    type Amino = SendAuthorizationJson;
    type Data = SendAuthorizationJson;
    type Proto = pb::SendAuthorization;

    fn to_amino(&self) -> Result<SendAuthorizationJson, Error> {
        Ok(SendAuthorizationJson {
            spend_limit: self.spend_limit.to_json(),
            allow_list: self.allow_list.clone(),
        })
    }

    fn from_amino(amino: SendAuthorizationJson) -> Result<Self, Error> {
        Ok(Self {
            spend_limit: Coins::from_json(amino.spend_limit)?,
            allow_list: amino.allow_list,
        })
    }

    fn to_data(&self) -> Result<SendAuthorizationJson, Error> {
        self.to_amino()
    }

    fn from_data(data: SendAuthorizationJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::SendAuthorization, Error> {
        Ok(pb::SendAuthorization {
            spend_limit: self.spend_limit.to_proto(),
            allow_list: self.allow_list.clone(),
        })
    }

    fn from_proto(proto: pb::SendAuthorization) -> Result<Self, Error> {
        Ok(Self {
            spend_limit: Coins::from_proto(proto.spend_limit)?,
            allow_list: proto.allow_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{from_amino_json, to_amino_json};

    #[test]
    fn duplicate_denoms_merge_on_decode() -> Result<(), Box<dyn std::error::Error>> {
        let msg: MsgSend = from_amino_json(json!({
            "from_address": "init1from",
            "to_address": "init1to",
            "amount": [
                {"denom": "uusdc", "amount": "5"},
                {"denom": "uinit", "amount": "10"},
                {"denom": "uusdc", "amount": "7"}
            ]
        }))?;
        assert_eq!(
            to_amino_json(&msg)?["amount"],
            json!([
                {"denom": "uinit", "amount": "10"},
                {"denom": "uusdc", "amount": "12"}
            ])
        );
        Ok(())
    }
}
