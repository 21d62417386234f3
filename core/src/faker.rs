// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Random entity generators for tests, behind the `faker` feature.
//!
//! Every generated value is valid in all three formats, so it must survive
//! any encode/decode round trip unchanged.

use chrono::{DateTime, Utc};
use fake::{Dummy, Fake, Faker};
use rand::Rng;

use crate::auth::{
    Account, BaseAccount, BaseVestingAccount, ContinuousVestingAccount,
    DelayedVestingAccount, Period, PeriodicVestingAccount,
};
use crate::authz::{
    Authorization, AuthorizationGrant, GenericAuthorization, MsgGrant,
    MsgRevoke,
};
use crate::bank::{MsgSend, SendAuthorization};
use crate::coin::{Coin, Coins};
use crate::distribution::MsgWithdrawDelegatorReward;
use crate::gov::{
    ClientUpdateProposal, Deposit, MsgDeposit, MsgSubmitProposal, MsgVote,
    ParamChange, ParameterChangeProposal, ProposalContent, ProposalLegacy,
    ProposalStatus, TallyResult, TextProposal, Vote, VoteOption,
    WeightedVoteOption,
};
use crate::key::{Ed25519PublicKey, PublicKey, Secp256k1PublicKey};
use crate::msg::Msg;
use crate::num::{Dec, Int};
use crate::staking::{
    AuthorizationType, Delegation, MsgBeginRedelegate, MsgDelegate,
    MsgUndelegate, StakeAuthorization, StakeValidators,
    UnbondingDelegation, UnbondingDelegationEntry,
};

const DENOMS: [&str; 4] = [
    "uinit",
    "uusdc",
    "ueth",
    "move/944f8dd8dc49f96c25fea9849f16436dcfa6d564eec802f3ef7f8b3ea85368ff",
];
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// A bech32-looking address with the given human-readable prefix.
pub fn address<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let data: String = (0..38)
        .map(|_| {
            char::from(BECH32_CHARSET[rng.gen_range(0..BECH32_CHARSET.len())])
        })
        .collect();
    format!("{prefix}1{data}")
}

/// A UTC timestamp between 1970 and 2100 with random nanoseconds.
pub fn timestamp<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let seconds = rng.gen_range(0..4_102_444_800i64);
    let nanos = match rng.gen_range(0..3) {
        0 => 0,
        1 => rng.gen_range(0..1_000u32) * 1_000_000,
        _ => rng.gen_range(0..1_000_000_000u32),
    };
    DateTime::from_timestamp(seconds, nanos).expect("in range")
}

fn text<R: Rng + ?Sized>(rng: &mut R) -> String {
    Faker.fake_with_rng(rng)
}

fn list<T, R, F>(rng: &mut R, max: usize, mut item: F) -> Vec<T>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    let len = rng.gen_range(0..=max);
    (0..len).map(|_| item(rng)).collect()
}

impl<T> Dummy<T> for Int {
    fn dummy_with_rng<R: Rng + ?Sized>(_config: &T, rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Int::from(rng.gen_range(0..1_000u64)),
            1 => Int::from(rng.gen_range(0..u128::MAX)),
            // wider than any primitive
            _ => Int::from(
                num_bigint::BigInt::from(rng.gen_range(0..u128::MAX))
                    * num_bigint::BigInt::from(rng.gen_range(1..u128::MAX)),
            ),
        }
    }
}

impl<T> Dummy<T> for Dec {
    fn dummy_with_rng<R: Rng + ?Sized>(_config: &T, rng: &mut R) -> Self {
        let scaled = rng.gen_range(-(1i128 << 100)..(1i128 << 100));
        Dec::from_scaled(scaled.into())
    }
}

impl<T> Dummy<T> for Coin {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        Coin {
            denom: DENOMS[rng.gen_range(0..DENOMS.len())].to_owned(),
            amount: Int::dummy_with_rng(config, rng),
        }
    }
}

impl<T> Dummy<T> for Coins {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        list(rng, 4, |rng| Coin::dummy_with_rng(config, rng))
            .into_iter()
            .collect()
    }
}

impl<T> Dummy<T> for PublicKey {
    fn dummy_with_rng<R: Rng + ?Sized>(_config: &T, rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            let mut key = [0u8; 33];
            rng.fill(&mut key[..]);
            key[0] = 2 + (key[0] & 1);
            Secp256k1PublicKey::new(key).into()
        } else {
            let mut key = [0u8; 32];
            rng.fill(&mut key[..]);
            Ed25519PublicKey::new(key).into()
        }
    }
}

impl<T> Dummy<T> for BaseAccount {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        BaseAccount {
            address: address(rng, "init"),
            public_key: rng
                .gen_bool(0.7)
                .then(|| PublicKey::dummy_with_rng(config, rng)),
            account_number: rng.gen_range(0..u64::MAX),
            sequence: rng.gen_range(0..1_000_000),
        }
    }
}

impl<T> Dummy<T> for BaseVestingAccount {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        BaseVestingAccount {
            base_account: BaseAccount::dummy_with_rng(config, rng),
            original_vesting: Coins::dummy_with_rng(config, rng),
            delegated_free: Coins::dummy_with_rng(config, rng),
            delegated_vesting: Coins::dummy_with_rng(config, rng),
            end_time: rng.gen_range(0..4_102_444_800),
        }
    }
}

impl<T> Dummy<T> for Account {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => BaseAccount::dummy_with_rng(config, rng).into(),
            1 => ContinuousVestingAccount {
                base_vesting_account: BaseVestingAccount::dummy_with_rng(
                    config, rng,
                ),
                start_time: rng.gen_range(0..4_102_444_800),
            }
            .into(),
            2 => DelayedVestingAccount {
                base_vesting_account: BaseVestingAccount::dummy_with_rng(
                    config, rng,
                ),
            }
            .into(),
            _ => PeriodicVestingAccount {
                base_vesting_account: BaseVestingAccount::dummy_with_rng(
                    config, rng,
                ),
                start_time: rng.gen_range(0..4_102_444_800),
                vesting_periods: list(rng, 4, |rng| Period {
                    length: rng.gen_range(1..31_536_000),
                    amount: Coins::dummy_with_rng(config, rng),
                }),
            }
            .into(),
        }
    }
}

impl<T> Dummy<T> for ProposalContent {
    fn dummy_with_rng<R: Rng + ?Sized>(_config: &T, rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => TextProposal {
                title: text(rng),
                description: text(rng),
            }
            .into(),
            1 => ParameterChangeProposal {
                title: text(rng),
                description: text(rng),
                changes: list(rng, 3, |rng| ParamChange {
                    subspace: text(rng),
                    key: text(rng),
                    value: format!("\"{}\"", rng.gen_range(0..1_000_000u32)),
                }),
            }
            .into(),
            _ => ClientUpdateProposal {
                title: text(rng),
                description: text(rng),
                subject_client_id: format!(
                    "07-tendermint-{}",
                    rng.gen_range(0..100u32)
                ),
                substitute_client_id: format!(
                    "07-tendermint-{}",
                    rng.gen_range(0..100u32)
                ),
            }
            .into(),
        }
    }
}

impl<T> Dummy<T> for TallyResult {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        TallyResult {
            yes: Int::dummy_with_rng(config, rng),
            abstain: Int::dummy_with_rng(config, rng),
            no: Int::dummy_with_rng(config, rng),
            no_with_veto: Int::dummy_with_rng(config, rng),
        }
    }
}

impl<T> Dummy<T> for ProposalLegacy {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        let statuses = ProposalStatus::ALL;
        ProposalLegacy {
            id: rng.gen_range(1..u64::MAX),
            content: ProposalContent::dummy_with_rng(config, rng),
            status: statuses[rng.gen_range(0..statuses.len())],
            final_tally_result: TallyResult::dummy_with_rng(config, rng),
            submit_time: timestamp(rng),
            deposit_end_time: timestamp(rng),
            total_deposit: Coins::dummy_with_rng(config, rng),
            voting_start_time: timestamp(rng),
            voting_end_time: timestamp(rng),
        }
    }
}

fn vote_option<R: Rng + ?Sized>(rng: &mut R) -> VoteOption {
    VoteOption::ALL[rng.gen_range(0..VoteOption::ALL.len())]
}

impl<T> Dummy<T> for Vote {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        Vote {
            proposal_id: rng.gen_range(1..u64::MAX),
            voter: address(rng, "init"),
            options: list(rng, 4, |rng| WeightedVoteOption {
                option: vote_option(rng),
                weight: Dec::dummy_with_rng(config, rng),
            }),
        }
    }
}

impl<T> Dummy<T> for Deposit {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        Deposit {
            proposal_id: rng.gen_range(1..u64::MAX),
            depositor: address(rng, "init"),
            amount: Coins::dummy_with_rng(config, rng),
        }
    }
}

impl<T> Dummy<T> for Delegation {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        Delegation {
            delegator_address: address(rng, "init"),
            validator_address: address(rng, "initvaloper"),
            shares: Dec::dummy_with_rng(config, rng),
        }
    }
}

impl<T> Dummy<T> for UnbondingDelegation {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        UnbondingDelegation {
            delegator_address: address(rng, "init"),
            validator_address: address(rng, "initvaloper"),
            entries: list(rng, 3, |rng| UnbondingDelegationEntry {
                creation_height: rng.gen_range(1..i64::MAX),
                completion_time: timestamp(rng),
                initial_balance: Int::dummy_with_rng(config, rng),
                balance: Int::dummy_with_rng(config, rng),
            }),
        }
    }
}

impl<T> Dummy<T> for Authorization {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => GenericAuthorization {
                msg: "/cosmos.gov.v1beta1.MsgVote".to_owned(),
            }
            .into(),
            1 => SendAuthorization {
                spend_limit: Coins::dummy_with_rng(config, rng),
                allow_list: list(rng, 2, |rng| address(rng, "init")),
            }
            .into(),
            _ => {
                let validators =
                    list(rng, 3, |rng| address(rng, "initvaloper"));
                let types = AuthorizationType::ALL;
                StakeAuthorization {
                    max_tokens: rng
                        .gen_bool(0.5)
                        .then(|| Coin::dummy_with_rng(config, rng)),
                    validators: if rng.gen_bool(0.5) {
                        StakeValidators::Allow(validators)
                    } else {
                        StakeValidators::Deny(validators)
                    },
                    authorization_type: types[rng.gen_range(0..types.len())],
                }
                .into()
            }
        }
    }
}

impl<T> Dummy<T> for AuthorizationGrant {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        AuthorizationGrant {
            authorization: Authorization::dummy_with_rng(config, rng),
            expiration: rng.gen_bool(0.5).then(|| timestamp(rng)),
        }
    }
}

impl<T> Dummy<T> for Msg {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &T, rng: &mut R) -> Self {
        let delegator = address(rng, "init");
        let validator = address(rng, "initvaloper");
        match rng.gen_range(0..10) {
            0 => MsgSend {
                from_address: delegator,
                to_address: address(rng, "init"),
                amount: Coins::dummy_with_rng(config, rng),
            }
            .into(),
            1 => MsgDelegate {
                delegator_address: delegator,
                validator_address: validator,
                amount: Coin::dummy_with_rng(config, rng),
            }
            .into(),
            2 => MsgUndelegate {
                delegator_address: delegator,
                validator_address: validator,
                amount: Coin::dummy_with_rng(config, rng),
            }
            .into(),
            3 => MsgBeginRedelegate {
                delegator_address: delegator,
                validator_src_address: validator,
                validator_dst_address: address(rng, "initvaloper"),
                amount: Coin::dummy_with_rng(config, rng),
            }
            .into(),
            4 => MsgWithdrawDelegatorReward {
                delegator_address: delegator,
                validator_address: validator,
            }
            .into(),
            5 => MsgSubmitProposal {
                content: ProposalContent::dummy_with_rng(config, rng),
                initial_deposit: Coins::dummy_with_rng(config, rng),
                proposer: delegator,
            }
            .into(),
            6 => MsgVote {
                proposal_id: rng.gen_range(1..u64::MAX),
                voter: delegator,
                option: vote_option(rng),
            }
            .into(),
            7 => MsgDeposit {
                proposal_id: rng.gen_range(1..u64::MAX),
                depositor: delegator,
                amount: Coins::dummy_with_rng(config, rng),
            }
            .into(),
            8 => MsgGrant {
                granter: delegator,
                grantee: address(rng, "init"),
                grant: AuthorizationGrant::dummy_with_rng(config, rng),
            }
            .into(),
            _ => MsgRevoke {
                granter: delegator,
                grantee: address(rng, "init"),
                msg_type_url: "/cosmos.bank.v1beta1.MsgSend".to_owned(),
            }
            .into(),
        }
    }
}
