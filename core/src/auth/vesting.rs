// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Vesting accounts.
//!
//! The JSON schemas are generic over the embedded base account schema, which
//! is the only part that differs between Amino and Data. Nested accounts are
//! never enveloped.

use serde::{Deserialize, Serialize};

use super::{BaseAccount, BaseAccountAmino, BaseAccountData};
use crate::codec::{required, Convertible, Tagged};
use crate::coin::{CoinJson, Coins};
use crate::num::parse_i64;
use crate::proto::cosmos::vesting::v1beta1 as pb;
use crate::Error;

/// Vesting state shared by every vesting account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVestingAccount {
    /// The embedded account.
    pub base_account: BaseAccount,
    /// Coins locked at genesis of the schedule.
    pub original_vesting: Coins,
    /// Delegated coins that had already vested.
    pub delegated_free: Coins,
    /// Delegated coins still vesting.
    pub delegated_vesting: Coins,
    /// Unix time at which everything has vested.
    pub end_time: i64,
}

/// JSON schema of [`BaseVestingAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseVestingAccountJson<B> {
    /// The embedded account.
    pub base_account: B,
    /// Original vesting coins.
    pub original_vesting: Vec<CoinJson>,
    /// Delegated free coins.
    pub delegated_free: Vec<CoinJson>,
    /// Delegated vesting coins.
    pub delegated_vesting: Vec<CoinJson>,
    /// Decimal unix end time.
    pub end_time: String,
}

impl<B> BaseVestingAccountJson<B> {
    fn encode(account: &BaseVestingAccount, base_account: B) -> Self {
        Self {
            base_account,
            original_vesting: account.original_vesting.to_json(),
            delegated_free: account.delegated_free.to_json(),
            delegated_vesting: account.delegated_vesting.to_json(),
            end_time: account.end_time.to_string(),
        }
    }

    fn decode(
        self,
        base_account: impl FnOnce(B) -> Result<BaseAccount, Error>,
    ) -> Result<BaseVestingAccount, Error> {
        Ok(BaseVestingAccount {
            base_account: base_account(self.base_account)?,
            original_vesting: Coins::from_json(self.original_vesting)?,
            delegated_free: Coins::from_json(self.delegated_free)?,
            delegated_vesting: Coins::from_json(self.delegated_vesting)?,
            end_time: parse_i64("end_time", &self.end_time)?,
        })
    }
}

impl Convertible for BaseVestingAccount {
    type Amino = BaseVestingAccountJson<BaseAccountAmino>;
    type Data = BaseVestingAccountJson<BaseAccountData>;
    type Proto = pb::BaseVestingAccount;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(BaseVestingAccountJson::encode(self, self.base_account.to_amino()?))
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        amino.decode(BaseAccount::from_amino)
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(BaseVestingAccountJson::encode(self, self.base_account.to_data()?))
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        data.decode(BaseAccount::from_data)
    }

    fn to_proto(&self) -> Result<pb::BaseVestingAccount, Error> {
        Ok(pb::BaseVestingAccount {
            base_account: Some(self.base_account.to_proto()?),
            original_vesting: self.original_vesting.to_proto(),
            delegated_free: self.delegated_free.to_proto(),
            delegated_vesting: self.delegated_vesting.to_proto(),
            end_time: self.end_time,
        })
    }

    fn from_proto(proto: pb::BaseVestingAccount) -> Result<Self, Error> {
        Ok(Self {
            base_account: BaseAccount::from_proto(required(
                "base_account",
                proto.base_account,
            )?)?,
            original_vesting: Coins::from_proto(proto.original_vesting)?,
            delegated_free: Coins::from_proto(proto.delegated_free)?,
            delegated_vesting: Coins::from_proto(proto.delegated_vesting)?,
            end_time: proto.end_time,
        })
    }
}

/// Account that releases all coins at `end_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedVestingAccount {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccount,
}

/// JSON schema of [`DelayedVestingAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayedVestingAccountJson<B> {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccountJson<B>,
}

impl Tagged for DelayedVestingAccount {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/DelayedVestingAccount");
    const TYPE_URL: &'static str =
        "/cosmos.vesting.v1beta1.DelayedVestingAccount";
}

impl Convertible for DelayedVestingAccount {
    type Amino = DelayedVestingAccountJson<BaseAccountAmino>;
    type Data = DelayedVestingAccountJson<BaseAccountData>;
    type Proto = pb::DelayedVestingAccount;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(DelayedVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_amino()?,
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_amino(
                amino.base_vesting_account,
            )?,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(DelayedVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_data()?,
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_data(
                data.base_vesting_account,
            )?,
        })
    }

    fn to_proto(&self) -> Result<pb::DelayedVestingAccount, Error> {
        Ok(pb::DelayedVestingAccount {
            base_vesting_account: Some(self.base_vesting_account.to_proto()?),
        })
    }

    fn from_proto(proto: pb::DelayedVestingAccount) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_proto(required(
                "base_vesting_account",
                proto.base_vesting_account,
            )?)?,
        })
    }
}

/// Account that vests linearly between `start_time` and `end_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuousVestingAccount {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccount,
    /// Unix time at which vesting starts.
    pub start_time: i64,
}

/// JSON schema of [`ContinuousVestingAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousVestingAccountJson<B> {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccountJson<B>,
    /// Decimal unix start time.
    pub start_time: String,
}

impl Tagged for ContinuousVestingAccount {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/ContinuousVestingAccount");
    const TYPE_URL: &'static str =
        "/cosmos.vesting.v1beta1.ContinuousVestingAccount";
}

impl Convertible for ContinuousVestingAccount {
    type Amino = ContinuousVestingAccountJson<BaseAccountAmino>;
    type Data = ContinuousVestingAccountJson<BaseAccountData>;
    type Proto = pb::ContinuousVestingAccount;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(ContinuousVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_amino()?,
            start_time: self.start_time.to_string(),
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_amino(
                amino.base_vesting_account,
            )?,
            start_time: parse_i64("start_time", &amino.start_time)?,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(ContinuousVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_data()?,
            start_time: self.start_time.to_string(),
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_data(
                data.base_vesting_account,
            )?,
            start_time: parse_i64("start_time", &data.start_time)?,
        })
    }

    fn to_proto(&self) -> Result<pb::ContinuousVestingAccount, Error> {
        Ok(pb::ContinuousVestingAccount {
            base_vesting_account: Some(self.base_vesting_account.to_proto()?),
            start_time: self.start_time,
        })
    }

    fn from_proto(proto: pb::ContinuousVestingAccount) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_proto(required(
                "base_vesting_account",
                proto.base_vesting_account,
            )?)?,
            start_time: proto.start_time,
        })
    }
}

/// One step of a periodic vesting schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Duration of the period in seconds.
    pub length: i64,
    /// Coins released at the end of the period.
    pub amount: Coins,
}

/// JSON schema of [`Period`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodJson {
    /// Decimal length in seconds.
    pub length: String,
    /// Released coins.
    pub amount: Vec<CoinJson>,
}

impl Convertible for Period {
    type Amino = PeriodJson;
    type Data = PeriodJson;
    type Proto = pb::Period;

    fn to_amino(&self) -> Result<PeriodJson, Error> {
        Ok(PeriodJson {
            length: self.length.to_string(),
            amount: self.amount.to_json(),
        })
    }

    fn from_amino(amino: PeriodJson) -> Result<Self, Error> {
        Ok(Self {
            length: parse_i64("length", &amino.length)?,
            amount: Coins::from_json(amino.amount)?,
        })
    }

    fn to_data(&self) -> Result<PeriodJson, Error> {
        self.to_amino()
    }

    fn from_data(data: PeriodJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::Period, Error> {
        Ok(pb::Period {
            length: self.length,
            amount: self.amount.to_proto(),
        })
    }

    fn from_proto(proto: pb::Period) -> Result<Self, Error> {
        Ok(Self {
            length: proto.length,
            amount: Coins::from_proto(proto.amount)?,
        })
    }
}

/// Account that vests in consecutive periods from `start_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicVestingAccount {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccount,
    /// Unix time at which the first period starts.
    pub start_time: i64,
    /// The schedule.
    pub vesting_periods: Vec<Period>,
}

/// JSON schema of [`PeriodicVestingAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicVestingAccountJson<B> {
    /// Vesting state.
    pub base_vesting_account: BaseVestingAccountJson<B>,
    /// Decimal unix start time.
    pub start_time: String,
    /// The schedule.
    pub vesting_periods: Vec<PeriodJson>,
}

impl Tagged for PeriodicVestingAccount {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/PeriodicVestingAccount");
    const TYPE_URL: &'static str =
        "/cosmos.vesting.v1beta1.PeriodicVestingAccount";
}

impl Convertible for PeriodicVestingAccount {
    type Amino = PeriodicVestingAccountJson<BaseAccountAmino>;
    type Data = PeriodicVestingAccountJson<BaseAccountData>;
    type Proto = pb::PeriodicVestingAccount;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(PeriodicVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_amino()?,
            start_time: self.start_time.to_string(),
            vesting_periods: self
                .vesting_periods
                .iter()
                .map(Period::to_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_amino(
                amino.base_vesting_account,
            )?,
            start_time: parse_i64("start_time", &amino.start_time)?,
            vesting_periods: amino
                .vesting_periods
                .into_iter()
                .map(Period::from_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(PeriodicVestingAccountJson {
            base_vesting_account: self.base_vesting_account.to_data()?,
            start_time: self.start_time.to_string(),
            vesting_periods: self
                .vesting_periods
                .iter()
                .map(Period::to_data)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_data(
                data.base_vesting_account,
            )?,
            start_time: parse_i64("start_time", &data.start_time)?,
            vesting_periods: data
                .vesting_periods
                .into_iter()
                .map(Period::from_data)
                .collect::<Result<_, _>>()?,
        })
    }

    fn to_proto(&self) -> Result<pb::PeriodicVestingAccount, Error> {
        Ok(pb::PeriodicVestingAccount {
            base_vesting_account: Some(self.base_vesting_account.to_proto()?),
            start_time: self.start_time,
            vesting_periods: self
                .vesting_periods
                .iter()
                .map(Period::to_proto)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_proto(proto: pb::PeriodicVestingAccount) -> Result<Self, Error> {
        Ok(Self {
            base_vesting_account: BaseVestingAccount::from_proto(required(
                "base_vesting_account",
                proto.base_vesting_account,
            )?)?,
            start_time: proto.start_time,
            vesting_periods: proto
                .vesting_periods
                .into_iter()
                .map(Period::from_proto)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Account;
    use crate::codec::{from_amino_json, from_proto_bytes, to_amino_json};
    use crate::coin::Coin;

    fn delayed() -> DelayedVestingAccount {
        DelayedVestingAccount {
            base_vesting_account: BaseVestingAccount {
                base_account: BaseAccount {
                    address: "init1vesting".into(),
                    public_key: None,
                    account_number: 3,
                    sequence: 0,
                },
                original_vesting: Coin::new("uinit", 1_000_000u64).into(),
                delegated_free: Coins::new(),
                delegated_vesting: Coin::new("uinit", 250u64).into(),
                end_time: 1_735_689_600,
            },
        }
    }

    #[test]
    fn nested_values_are_not_enveloped() -> Result<(), Box<dyn std::error::Error>> {
        let amino = to_amino_json(&Account::from(delayed()))?;
        assert_eq!(amino["type"], "cosmos-sdk/DelayedVestingAccount");
        let nested = &amino["value"]["base_vesting_account"];
        assert!(nested.get("type").is_none());
        assert_eq!(nested["base_account"]["account_number"], "3");
        assert_eq!(nested["end_time"], "1735689600");
        assert_eq!(from_amino_json::<Account>(amino)?, Account::from(delayed()));
        Ok(())
    }

    #[test]
    fn proto_requires_base_vesting_account() {
        let empty = prost::Message::encode_to_vec(&pb::DelayedVestingAccount::default());
        assert!(matches!(
            from_proto_bytes::<DelayedVestingAccount>(&empty),
            Err(Error::MalformedInput(msg)) if msg.contains("base_vesting_account")
        ));
    }
}
