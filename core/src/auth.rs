// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Accounts.

mod vesting;

pub use vesting::{
    BaseVestingAccount, BaseVestingAccountJson, ContinuousVestingAccount,
    ContinuousVestingAccountJson, DelayedVestingAccount,
    DelayedVestingAccountJson, Period, PeriodJson, PeriodicVestingAccount,
    PeriodicVestingAccountJson,
};

use serde::{Deserialize, Serialize};

use crate::codec::{AminoAny, Convertible, DataAny, Tagged};
use crate::key::PublicKey;
use crate::num::parse_u64;
use crate::proto::cosmos::auth::v1beta1 as pb;
use crate::Error;

/// The base account every other account type embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAccount {
    /// Bech32 address.
    pub address: String,
    /// Public key, unknown until the account first signs.
    pub public_key: Option<PublicKey>,
    /// Account number.
    pub account_number: u64,
    /// Sequence number.
    pub sequence: u64,
}

/// Amino schema of [`BaseAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAccountAmino {
    /// Bech32 address.
    pub address: String,
    /// Enveloped public key.
    pub public_key: Option<AminoAny>,
    /// Decimal account number.
    pub account_number: String,
    /// Decimal sequence.
    pub sequence: String,
}

/// Data schema of [`BaseAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAccountData {
    /// Bech32 address.
    pub address: String,
    /// Enveloped public key.
    pub pub_key: Option<DataAny>,
    /// Decimal account number.
    pub account_number: String,
    /// Decimal sequence.
    pub sequence: String,
}

impl Tagged for BaseAccount {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/BaseAccount");
    const TYPE_URL: &'static str = "/cosmos.auth.v1beta1.BaseAccount";
}

impl Convertible for BaseAccount {
    type Amino = BaseAccountAmino;
    type Data = BaseAccountData;
    type Proto = pb::BaseAccount;

    fn to_amino(&self) -> Result<BaseAccountAmino, Error> {
        Ok(BaseAccountAmino {
            address: self.address.clone(),
            public_key: self
                .public_key
                .as_ref()
                .map(PublicKey::to_amino)
                .transpose()?,
            account_number: self.account_number.to_string(),
            sequence: self.sequence.to_string(),
        })
    }

    fn from_amino(amino: BaseAccountAmino) -> Result<Self, Error> {
        Ok(Self {
            public_key: amino
                .public_key
                .map(PublicKey::from_amino)
                .transpose()?,
            account_number: parse_u64("account_number", &amino.account_number)?,
            sequence: parse_u64("sequence", &amino.sequence)?,
            address: amino.address,
        })
    }

    fn to_data(&self) -> Result<BaseAccountData, Error> {
        Ok(BaseAccountData {
            address: self.address.clone(),
            pub_key: self
                .public_key
                .as_ref()
                .map(PublicKey::to_data)
                .transpose()?,
            account_number: self.account_number.to_string(),
            sequence: self.sequence.to_string(),
        })
    }

    fn from_data(data: BaseAccountData) -> Result<Self, Error> {
        Ok(Self {
            public_key: data.pub_key.map(PublicKey::from_data).transpose()?,
            account_number: parse_u64("account_number", &data.account_number)?,
            sequence: parse_u64("sequence", &data.sequence)?,
            address: data.address,
        })
    }

    fn to_proto(&self) -> Result<pb::BaseAccount, Error> {
        Ok(pb::BaseAccount {
            address: self.address.clone(),
            pub_key: self
                .public_key
                .as_ref()
                .map(PublicKey::to_proto)
                .transpose()?,
            account_number: self.account_number,
            sequence: self.sequence,
        })
    }

    fn from_proto(proto: pb::BaseAccount) -> Result<Self, Error> {
        Ok(Self {
            public_key: proto.pub_key.map(PublicKey::from_proto).transpose()?,
            account_number: proto.account_number,
            sequence: proto.sequence,
            address: proto.address,
        })
    }
}

family! {
    /// Any account type known to the chain.
    Account = "Account" {
        /// Plain account.
        Base(BaseAccount),
        /// Linearly vesting account.
        ContinuousVesting(ContinuousVestingAccount),
        /// Account vesting everything at its end time.
        DelayedVesting(DelayedVestingAccount),
        /// Account vesting in periods.
        PeriodicVesting(PeriodicVestingAccount),
    }
}

impl Account {
    /// The embedded base account.
    pub fn base_account(&self) -> &BaseAccount {
        match self {
            Account::Base(account) => account,
            Account::ContinuousVesting(account) => {
                &account.base_vesting_account.base_account
            }
            Account::DelayedVesting(account) => {
                &account.base_vesting_account.base_account
            }
            Account::PeriodicVesting(account) => {
                &account.base_vesting_account.base_account
            }
        }
    }

    /// Bech32 address.
    pub fn address(&self) -> &str {
        &self.base_account().address
    }

    /// Account number.
    pub fn account_number(&self) -> u64 {
        self.base_account().account_number
    }

    /// Sequence number.
    pub fn sequence(&self) -> u64 {
        self.base_account().sequence
    }

    /// Public key, if the account has one.
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.base_account().public_key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{
        from_amino_json, from_data_json, to_amino_json, to_data_json,
    };
    use crate::key::Ed25519PublicKey;

    fn account(public_key: Option<PublicKey>) -> BaseAccount {
        BaseAccount {
            address: "init1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn5gk6ty".into(),
            public_key,
            account_number: 7,
            sequence: 42,
        }
    }

    #[test]
    fn key_name_differs_per_format() -> Result<(), Box<dyn std::error::Error>> {
        let key = PublicKey::from(Ed25519PublicKey::new([9u8; 32]));
        let account = account(Some(key));

        let amino = to_amino_json(&account)?;
        assert_eq!(amino["public_key"]["type"], "tendermint/PubKeyEd25519");
        assert!(amino.get("pub_key").is_none());

        let data = to_data_json(&account)?;
        assert_eq!(data["pub_key"]["@type"], "/cosmos.crypto.ed25519.PubKey");
        assert!(data.get("public_key").is_none());
        assert_eq!(data["account_number"], "7");
        Ok(())
    }

    #[test]
    fn null_public_key() -> Result<(), Box<dyn std::error::Error>> {
        let json = json!({
            "address": "init1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn5gk6ty",
            "pub_key": null,
            "account_number": "7",
            "sequence": "42"
        });
        let decoded: BaseAccount = from_data_json(json.clone())?;
        assert_eq!(decoded, account(None));
        assert_eq!(to_data_json(&decoded)?, json);

        let amino = to_amino_json(&decoded)?;
        assert!(amino["public_key"].is_null());
        assert_eq!(from_amino_json::<BaseAccount>(amino)?, decoded);
        Ok(())
    }

    #[test]
    fn accessors_reach_the_base_account() {
        let account = Account::from(DelayedVestingAccount {
            base_vesting_account: BaseVestingAccount {
                base_account: account(None),
                original_vesting: Default::default(),
                delegated_free: Default::default(),
                delegated_vesting: Default::default(),
                end_time: 1_700_000_000,
            },
        });
        assert_eq!(account.account_number(), 7);
        assert_eq!(account.sequence(), 42);
        assert!(account.public_key().is_none());
        assert_eq!(
            account.address(),
            "init1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn5gk6ty"
        );
    }
}
