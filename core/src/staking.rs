// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Staking module: delegations, unbondings, delegation messages and stake
//! authorizations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{required, Convertible, Tagged};
use crate::coin::{Coin, CoinJson};
use crate::num::{parse_i64, Dec, Int};
use crate::proto::cosmos::staking::v1beta1 as pb;
use crate::{time, Error};

/// Shares a delegator holds on a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
    /// Delegation shares.
    pub shares: Dec,
}

/// JSON schema of [`Delegation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationJson {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
    /// Decimal shares.
    pub shares: String,
}

impl Convertible for Delegation {
    type Amino = DelegationJson;
    type Data = DelegationJson;
    type Proto = pb::Delegation;

    fn to_amino(&self) -> Result<DelegationJson, Error> {
        Ok(DelegationJson {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            shares: self.shares.to_string(),
        })
    }

    fn from_amino(amino: DelegationJson) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: amino.delegator_address,
            validator_address: amino.validator_address,
            shares: Dec::parse("shares", &amino.shares)?,
        })
    }

    fn to_data(&self) -> Result<DelegationJson, Error> {
        self.to_amino()
    }

    fn from_data(data: DelegationJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::Delegation, Error> {
        Ok(pb::Delegation {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            shares: self.shares.to_scaled_string(),
        })
    }

    fn from_proto(proto: pb::Delegation) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: proto.delegator_address,
            validator_address: proto.validator_address,
            shares: Dec::parse_scaled("shares", &proto.shares)?,
        })
    }
}

/// One pending unbonding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbondingDelegationEntry {
    /// Height at which unbonding started.
    pub creation_height: i64,
    /// Time at which the tokens are released.
    pub completion_time: DateTime<Utc>,
    /// Tokens initially scheduled for release.
    pub initial_balance: Int,
    /// Tokens still to be released.
    pub balance: Int,
}

/// JSON schema of [`UnbondingDelegationEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbondingDelegationEntryJson {
    /// Decimal height.
    pub creation_height: String,
    /// RFC 3339 completion time.
    pub completion_time: String,
    /// Decimal initial balance.
    pub initial_balance: String,
    /// Decimal balance.
    pub balance: String,
}

impl Convertible for UnbondingDelegationEntry {
    type Amino = UnbondingDelegationEntryJson;
    type Data = UnbondingDelegationEntryJson;
    type Proto = pb::UnbondingDelegationEntry;

    fn to_amino(&self) -> Result<UnbondingDelegationEntryJson, Error> {
        Ok(UnbondingDelegationEntryJson {
            creation_height: self.creation_height.to_string(),
            completion_time: time::to_json(&self.completion_time),
            initial_balance: self.initial_balance.to_string(),
            balance: self.balance.to_string(),
        })
    }

    fn from_amino(amino: UnbondingDelegationEntryJson) -> Result<Self, Error> {
        Ok(Self {
            creation_height: parse_i64(
                "creation_height",
                &amino.creation_height,
            )?,
            completion_time: time::from_json(
                "completion_time",
                &amino.completion_time,
            )?,
            initial_balance: Int::parse(
                "initial_balance",
                &amino.initial_balance,
            )?,
            balance: Int::parse("balance", &amino.balance)?,
        })
    }

    fn to_data(&self) -> Result<UnbondingDelegationEntryJson, Error> {
        self.to_amino()
    }

    fn from_data(data: UnbondingDelegationEntryJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::UnbondingDelegationEntry, Error> {
        Ok(pb::UnbondingDelegationEntry {
            creation_height: self.creation_height,
            completion_time: Some(time::to_proto(&self.completion_time)),
            initial_balance: self.initial_balance.to_string(),
            balance: self.balance.to_string(),
        })
    }

    fn from_proto(proto: pb::UnbondingDelegationEntry) -> Result<Self, Error> {
        Ok(Self {
            creation_height: proto.creation_height,
            completion_time: time::from_proto_required(
                "completion_time",
                proto.completion_time,
            )?,
            initial_balance: Int::parse(
                "initial_balance",
                &proto.initial_balance,
            )?,
            balance: Int::parse("balance", &proto.balance)?,
        })
    }
}

/// All pending unbondings of a delegator from one validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbondingDelegation {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
    /// Pending entries, oldest first.
    pub entries: Vec<UnbondingDelegationEntry>,
}

/// JSON schema of [`UnbondingDelegation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbondingDelegationJson {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
    /// Pending entries.
    pub entries: Vec<UnbondingDelegationEntryJson>,
}

impl Convertible for UnbondingDelegation {
    type Amino = UnbondingDelegationJson;
    type Data = UnbondingDelegationJson;
    type Proto = pb::UnbondingDelegation;

    fn to_amino(&self) -> Result<UnbondingDelegationJson, Error> {
        Ok(UnbondingDelegationJson {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            entries: self
                .entries
                .iter()
                .map(UnbondingDelegationEntry::to_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_amino(amino: UnbondingDelegationJson) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: amino.delegator_address,
            validator_address: amino.validator_address,
            entries: amino
                .entries
                .into_iter()
                .map(UnbondingDelegationEntry::from_amino)
                .collect::<Result<_, _>>()?,
        })
    }

    fn to_data(&self) -> Result<UnbondingDelegationJson, Error> {
        self.to_amino()
    }

    fn from_data(data: UnbondingDelegationJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::UnbondingDelegation, Error> {
        Ok(pb::UnbondingDelegation {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            entries: self
                .entries
                .iter()
                .map(UnbondingDelegationEntry::to_proto)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_proto(proto: pb::UnbondingDelegation) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: proto.delegator_address,
            validator_address: proto.validator_address,
            entries: proto
                .entries
                .into_iter()
                .map(UnbondingDelegationEntry::from_proto)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// JSON schema shared by [`MsgDelegate`] and [`MsgUndelegate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateJson {
    /// Delegator address.
    pub delegator_address: String,
    /// Validator operator address.
    pub validator_address: String,
    /// Amount.
    pub amount: CoinJson,
}

macro_rules! delegate_msg {
    ($(#[$meta:meta])* $name:ident, $amino:literal, $url:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            /// Delegator address.
            pub delegator_address: String,
            /// Validator operator address.
            pub validator_address: String,
            /// Amount.
            pub amount: Coin,
        }

        impl Tagged for $name {
            const AMINO_TYPE: Option<&'static str> = Some($amino);
            const TYPE_URL: &'static str = $url;
        }

        impl Convertible for $name {
            type Amino = DelegateJson;
            type Data = DelegateJson;
            type Proto = pb::$name;

            fn to_amino(&self) -> Result<DelegateJson, Error> {
                Ok(DelegateJson {
                    delegator_address: self.delegator_address.clone(),
                    validator_address: self.validator_address.clone(),
                    amount: self.amount.to_amino()?,
                })
            }

            fn from_amino(amino: DelegateJson) -> Result<Self, Error> {
                Ok(Self {
                    delegator_address: amino.delegator_address,
                    validator_address: amino.validator_address,
                    amount: Coin::from_amino(amino.amount)?,
                })
            }

            fn to_data(&self) -> Result<DelegateJson, Error> {
                self.to_amino()
            }

            fn from_data(data: DelegateJson) -> Result<Self, Error> {
                Self::from_amino(data)
            }

            fn to_proto(&self) -> Result<pb::$name, Error> {
                Ok(pb::$name {
                    delegator_address: self.delegator_address.clone(),
                    validator_address: self.validator_address.clone(),
                    amount: Some(self.amount.to_proto()?),
                })
            }

            fn from_proto(proto: pb::$name) -> Result<Self, Error> {
                Ok(Self {
                    delegator_address: proto.delegator_address,
                    validator_address: proto.validator_address,
                    amount: Coin::from_proto(required("amount", proto.amount)?)?,
                })
            }
        }
    };
}

delegate_msg!(
    /// Delegates coins to a validator.
    MsgDelegate,
    "cosmos-sdk/MsgDelegate",
    "/cosmos.staking.v1beta1.MsgDelegate"
);

delegate_msg!(
    /// Starts unbonding coins from a validator.
    MsgUndelegate,
    "cosmos-sdk/MsgUndelegate",
    "/cosmos.staking.v1beta1.MsgUndelegate"
);

/// Moves a delegation between validators without unbonding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgBeginRedelegate {
    /// Delegator address.
    pub delegator_address: String,
    /// Source validator.
    pub validator_src_address: String,
    /// Destination validator.
    pub validator_dst_address: String,
    /// Amount.
    pub amount: Coin,
}

/// JSON schema of [`MsgBeginRedelegate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBeginRedelegateJson {
    /// Delegator address.
    pub delegator_address: String,
    /// Source validator.
    pub validator_src_address: String,
    /// Destination validator.
    pub validator_dst_address: String,
    /// Amount.
    pub amount: CoinJson,
}

impl Tagged for MsgBeginRedelegate {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/MsgBeginRedelegate");
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
}

impl Convertible for MsgBeginRedelegate {
    type Amino = MsgBeginRedelegateJson;
    type Data = MsgBeginRedelegateJson;
    type Proto = pb::MsgBeginRedelegate;

    fn to_amino(&self) -> Result<MsgBeginRedelegateJson, Error> {
        Ok(MsgBeginRedelegateJson {
            delegator_address: self.delegator_address.clone(),
            validator_src_address: self.validator_src_address.clone(),
            validator_dst_address: self.validator_dst_address.clone(),
            amount: self.amount.to_amino()?,
        })
    }

    fn from_amino(amino: MsgBeginRedelegateJson) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: amino.delegator_address,
            validator_src_address: amino.validator_src_address,
            validator_dst_address: amino.validator_dst_address,
            amount: Coin::from_amino(amino.amount)?,
        })
    }

    fn to_data(&self) -> Result<MsgBeginRedelegateJson, Error> {
        self.to_amino()
    }

    fn from_data(data: MsgBeginRedelegateJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::MsgBeginRedelegate, Error> {
        Ok(pb::MsgBeginRedelegate {
            delegator_address: self.delegator_address.clone(),
            validator_src_address: self.validator_src_address.clone(),
            validator_dst_address: self.validator_dst_address.clone(),
            amount: Some(self.amount.to_proto()?),
        })
    }

    fn from_proto(proto: pb::MsgBeginRedelegate) -> Result<Self, Error> {
        Ok(Self {
            delegator_address: proto.delegator_address,
            validator_src_address: proto.validator_src_address,
            validator_dst_address: proto.validator_dst_address,
            amount: Coin::from_proto(required("amount", proto.amount)?)?,
        })
    }
}

wire_enum! {
    /// Staking operation a [`StakeAuthorization`] covers.
    AuthorizationType {
        /// Default, invalid value.
        Unspecified = 0 => "AUTHORIZATION_TYPE_UNSPECIFIED",
        /// `MsgDelegate`.
        Delegate = 1 => "AUTHORIZATION_TYPE_DELEGATE",
        /// `MsgUndelegate`.
        Undelegate = 2 => "AUTHORIZATION_TYPE_UNDELEGATE",
        /// `MsgBeginRedelegate`.
        Redelegate = 3 => "AUTHORIZATION_TYPE_REDELEGATE",
    }
}

/// Validator restriction of a [`StakeAuthorization`]; exactly one list is
/// set on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakeValidators {
    /// Only these validators.
    Allow(Vec<String>),
    /// Any validator but these.
    Deny(Vec<String>),
}

/// JSON schema of a validator list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorsJson {
    /// Operator addresses.
    pub address: Vec<String>,
}

/// Lets a grantee delegate, undelegate or redelegate on the granter's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeAuthorization {
    /// Cap on the amount, `None` for unlimited.
    pub max_tokens: Option<Coin>,
    /// Validator restriction.
    pub validators: StakeValidators,
    /// Covered operation.
    pub authorization_type: AuthorizationType,
}

/// JSON schema of [`StakeAuthorization`], generic over the authorization
/// type encoding (code in Amino, name in Data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeAuthorizationJson<T> {
    /// Optional cap.
    pub max_tokens: Option<CoinJson>,
    /// Allowed validators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_list: Option<ValidatorsJson>,
    /// Denied validators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_list: Option<ValidatorsJson>,
    /// Covered operation.
    pub authorization_type: T,
}

impl StakeValidators {
    fn from_lists(
        allow: Option<Vec<String>>,
        deny: Option<Vec<String>>,
    ) -> Result<Self, Error> {
        match (allow, deny) {
            (Some(allow), None) => Ok(Self::Allow(allow)),
            (None, Some(deny)) => Ok(Self::Deny(deny)),
            (Some(_), Some(_)) => Err(Error::malformed(
                "stake authorization sets both allow_list and deny_list",
            )),
            (None, None) => Err(Error::malformed(
                "stake authorization sets neither allow_list nor deny_list",
            )),
        }
    }

    fn allow(&self) -> Option<&Vec<String>> {
        match self {
            Self::Allow(list) => Some(list),
            Self::Deny(_) => None,
        }
    }

    fn deny(&self) -> Option<&Vec<String>> {
        match self {
            Self::Deny(list) => Some(list),
            Self::Allow(_) => None,
        }
    }
}

impl StakeAuthorization {
    fn to_json<T>(
        &self,
        authorization_type: T,
    ) -> Result<StakeAuthorizationJson<T>, Error> {
        let list = |address: &Vec<String>| ValidatorsJson {
            address: address.clone(),
        };
        Ok(StakeAuthorizationJson {
            max_tokens: self
                .max_tokens
                .as_ref()
                .map(Coin::to_amino)
                .transpose()?,
            allow_list: self.validators.allow().map(list),
            deny_list: self.validators.deny().map(list),
            authorization_type,
        })
    }

    fn from_json<T>(
        json: StakeAuthorizationJson<T>,
        authorization_type: impl FnOnce(T) -> Result<AuthorizationType, Error>,
    ) -> Result<Self, Error> {
        Ok(Self {
            max_tokens: json.max_tokens.map(Coin::from_amino).transpose()?,
            validators: StakeValidators::from_lists(
                json.allow_list.map(|list| list.address),
                json.deny_list.map(|list| list.address),
            )?,
            authorization_type: authorization_type(json.authorization_type)?,
        })
    }
}

impl Tagged for StakeAuthorization {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/StakeAuthorization");
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.StakeAuthorization";
}

impl Convertible for StakeAuthorization {
    type Amino = StakeAuthorizationJson<i32>;
    type Data = StakeAuthorizationJson<String>;
    type Proto = pb::StakeAuthorization;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        self.to_json(self.authorization_type.code())
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Self::from_json(amino, AuthorizationType::from_code)
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        self.to_json(self.authorization_type.name().to_owned())
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Self::from_json(data, |name| AuthorizationType::from_name(&name))
    }

    fn to_proto(&self) -> Result<pb::StakeAuthorization, Error> {
        let list = |address: &Vec<String>| pb::Validators {
            address: address.clone(),
        };
        Ok(pb::StakeAuthorization {
            max_tokens: self
                .max_tokens
                .as_ref()
                .map(Coin::to_proto)
                .transpose()?,
            allow_list: self.validators.allow().map(list),
            deny_list: self.validators.deny().map(list),
            authorization_type: self.authorization_type.code(),
        })
    }

    fn from_proto(proto: pb::StakeAuthorization) -> Result<Self, Error> {
        Ok(Self {
            max_tokens: proto.max_tokens.map(Coin::from_proto).transpose()?,
            validators: StakeValidators::from_lists(
                proto.allow_list.map(|list| list.address),
                proto.deny_list.map(|list| list.address),
            )?,
            authorization_type: AuthorizationType::from_code(
                proto.authorization_type,
            )?,
        })
    }
}
