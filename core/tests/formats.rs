// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use chrono::{DateTime, Utc};
use initia_core::auth::Account;
use initia_core::coin::Coin;
use initia_core::gov::{
    ProposalContent, ProposalLegacy, ProposalStatus, TallyResult, TextProposal,
};
use initia_core::msg::Msg;
use initia_core::num::Int;
use initia_core::{
    from_amino_json, from_data_json, from_proto_bytes, to_amino_json,
    to_data_json, to_proto_bytes, Error,
};

use common::{assert_canonical_json, configure_logger};

const PROPOSAL_DATA: &str = include_str!("fixtures/proposal_legacy_data.json");
const PROPOSAL_AMINO: &str =
    include_str!("fixtures/proposal_legacy_amino.json");
const VESTING_DATA: &str =
    include_str!("fixtures/delayed_vesting_account_data.json");
const VESTING_AMINO: &str =
    include_str!("fixtures/delayed_vesting_account_amino.json");
const SUBMIT_AMINO: &str =
    include_str!("fixtures/msg_submit_proposal_amino.json");

const BIG_AMOUNT: &str = "123456789012345678901234";

fn utc(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn voting_proposal() -> ProposalLegacy {
    ProposalLegacy {
        id: 1,
        content: TextProposal {
            title: "Test".into(),
            description: "Desc".into(),
        }
        .into(),
        status: ProposalStatus::VotingPeriod,
        final_tally_result: TallyResult {
            yes: Int::from(100u64),
            ..TallyResult::default()
        },
        submit_time: utc("2024-01-01T00:00:00Z"),
        deposit_end_time: utc("2024-01-03T00:00:00Z"),
        total_deposit: Coin::new("uinit", 1_000_000u64).into(),
        voting_start_time: utc("2024-01-02T00:00:00Z"),
        voting_end_time: utc("2024-01-09T00:00:00.5Z"),
    }
}

#[test]
fn proposal_legacy_data() -> Result<(), Box<dyn std::error::Error>> {
    configure_logger();

    let proposal = voting_proposal();
    let data = to_data_json(&proposal)?;
    assert_eq!(data["proposal_id"], "1");
    assert_eq!(data["status"], "PROPOSAL_STATUS_VOTING_PERIOD");
    assert_eq!(data["content"]["@type"], "/cosmos.gov.v1beta1.TextProposal");
    assert!(data.get("id").is_none());
    assert_canonical_json(&data, PROPOSAL_DATA)?;

    let decoded: ProposalLegacy = from_data_json(data)?;
    assert_eq!(decoded, proposal);
    Ok(())
}

#[test]
fn proposal_legacy_amino() -> Result<(), Box<dyn std::error::Error>> {
    let proposal = voting_proposal();
    let amino = to_amino_json(&proposal)?;
    assert_eq!(amino["id"], "1");
    assert_eq!(amino["status"], 2);
    assert_eq!(amino["content"]["type"], "cosmos-sdk/TextProposal");
    assert_canonical_json(&amino, PROPOSAL_AMINO)?;

    let decoded: ProposalLegacy = from_amino_json(amino)?;
    assert_eq!(decoded, proposal);
    Ok(())
}

#[test]
fn proposal_legacy_formats_agree() -> Result<(), Box<dyn std::error::Error>> {
    let from_data: ProposalLegacy =
        from_data_json(serde_json::from_str(PROPOSAL_DATA)?)?;
    let from_amino: ProposalLegacy =
        from_amino_json(serde_json::from_str(PROPOSAL_AMINO)?)?;
    let from_proto: ProposalLegacy =
        from_proto_bytes(&to_proto_bytes(&from_data)?)?;

    assert_eq!(from_data, from_amino);
    assert_eq!(from_data, from_proto);
    assert_eq!(from_data, voting_proposal());
    Ok(())
}

#[test]
fn proposal_missing_tally_field_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut json: serde_json::Value = serde_json::from_str(PROPOSAL_DATA)?;
    json["final_tally_result"]
        .as_object_mut()
        .expect("tally object")
        .remove("no");
    let err = from_data_json::<ProposalLegacy>(json).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)), "{err}");
    Ok(())
}

#[test]
fn vesting_account_formats_agree() -> Result<(), Box<dyn std::error::Error>> {
    let from_data: Account = from_data_json(serde_json::from_str(VESTING_DATA)?)?;
    let from_amino: Account =
        from_amino_json(serde_json::from_str(VESTING_AMINO)?)?;
    assert_eq!(from_data, from_amino);

    assert_eq!(from_data.account_number(), 25);
    assert_eq!(from_data.sequence(), 3);
    assert!(from_data.public_key().is_some());

    assert_canonical_json(&to_data_json(&from_amino)?, VESTING_DATA)?;
    assert_canonical_json(&to_amino_json(&from_data)?, VESTING_AMINO)?;

    let from_proto: Account = from_proto_bytes(&to_proto_bytes(&from_data)?)?;
    assert_eq!(from_proto, from_data);
    Ok(())
}

#[test]
fn big_amount_survives_every_format() -> Result<(), Box<dyn std::error::Error>> {
    let account: Account = from_data_json(serde_json::from_str(VESTING_DATA)?)?;
    let Account::DelayedVesting(vesting) = &account else {
        panic!("expected a delayed vesting account, got {account:?}");
    };
    let amount = vesting
        .base_vesting_account
        .original_vesting
        .get("uinit")
        .expect("uinit vesting");
    assert_eq!(amount.to_string(), BIG_AMOUNT);

    let amino = to_amino_json(&account)?;
    assert_eq!(
        amino["value"]["base_vesting_account"]["original_vesting"][0]["amount"],
        BIG_AMOUNT
    );

    let proto = initia_core::Convertible::to_proto(vesting)?;
    let original = &proto
        .base_vesting_account
        .expect("base vesting account")
        .original_vesting;
    assert_eq!(original[0].amount, BIG_AMOUNT);

    let back: Account = from_proto_bytes(&to_proto_bytes(&account)?)?;
    assert_eq!(back, account);
    Ok(())
}

#[test]
fn submit_proposal_nests_content_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let msg: Msg = from_amino_json(serde_json::from_str(SUBMIT_AMINO)?)?;
    let Msg::SubmitProposal(submit) = &msg else {
        panic!("expected MsgSubmitProposal, got {msg:?}");
    };
    assert!(matches!(submit.content, ProposalContent::ParameterChange(_)));

    let data = to_data_json(&msg)?;
    assert_eq!(data["@type"], "/cosmos.gov.v1beta1.MsgSubmitProposal");
    assert_eq!(
        data["content"]["@type"],
        "/cosmos.params.v1beta1.ParameterChangeProposal"
    );
    assert_eq!(data["content"]["changes"][0]["key"], "MaxValidators");

    assert_eq!(from_data_json::<Msg>(data)?, msg);
    assert_canonical_json(&to_amino_json(&msg)?, SUBMIT_AMINO)?;
    Ok(())
}

#[test]
fn timestamps_round_trip_exactly() -> Result<(), Box<dyn std::error::Error>> {
    for text in [
        "1970-01-01T00:00:00Z",
        "2024-01-09T00:00:00.500Z",
        "2024-01-09T00:00:00.000001Z",
        "2024-01-09T00:00:00.123456789Z",
    ] {
        let mut proposal = voting_proposal();
        proposal.submit_time = utc(text);

        let data = to_data_json(&proposal)?;
        assert_eq!(data["submit_time"], text);
        let from_data: ProposalLegacy = from_data_json(data)?;
        let from_proto: ProposalLegacy =
            from_proto_bytes(&to_proto_bytes(&proposal)?)?;
        assert_eq!(from_data, proposal);
        assert_eq!(from_proto, proposal);
    }
    Ok(())
}
