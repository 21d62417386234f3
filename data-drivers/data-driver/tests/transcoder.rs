// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io::Write;

use base64::prelude::*;
use initia_core::gov::{ProposalContent, TextProposal};
use initia_core::msg::Msg;
use initia_data_driver::{
    DriverConfig, Entity, Error, FamilyKind, Format, Transcoder,
};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

// Any { "/cosmos.gov.v1beta1.TextProposal", TextProposal { "t", "d" } }
const TEXT_PROTO_B64: &str =
    "CiAvY29zbW9zLmdvdi52MWJldGExLlRleHRQcm9wb3NhbBIGCgF0EgFk";

fn configure_logger() {
    let directive =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::new(directive);
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn text_amino() -> Vec<u8> {
    json!({
        "type": "cosmos-sdk/TextProposal",
        "value": {"title": "t", "description": "d"}
    })
    .to_string()
    .into_bytes()
}

fn text_entity() -> Entity {
    Entity::ProposalContent(ProposalContent::Text(TextProposal {
        title: "t".into(),
        description: "d".into(),
    }))
}

#[test]
fn decode_dispatches_by_tag() -> Result<(), Box<dyn std::error::Error>> {
    configure_logger();
    let transcoder = Transcoder::default();

    let entity = transcoder.decode(Format::Amino, &text_amino())?;
    assert_eq!(entity, text_entity());
    assert_eq!(entity.family(), FamilyKind::ProposalContent);

    let proto = BASE64_STANDARD.decode(TEXT_PROTO_B64)?;
    assert_eq!(transcoder.decode(Format::Proto, &proto)?, text_entity());
    Ok(())
}

#[test]
fn amino_to_proto_matches_reference_bytes()
-> Result<(), Box<dyn std::error::Error>> {
    let transcoder = Transcoder::default();
    let proto = transcoder.transcode(Format::Amino, &text_amino(), Format::Proto)?;
    assert_eq!(BASE64_STANDARD.encode(proto), TEXT_PROTO_B64);
    Ok(())
}

#[test]
fn proto_to_data_emits_type_url() -> Result<(), Box<dyn std::error::Error>> {
    let transcoder = Transcoder::default();
    let proto = BASE64_STANDARD.decode(TEXT_PROTO_B64)?;
    let data = transcoder.transcode(Format::Proto, &proto, Format::Data)?;
    let data: Value = serde_json::from_slice(&data)?;
    assert_eq!(
        data,
        json!({
            "@type": "/cosmos.gov.v1beta1.TextProposal",
            "title": "t",
            "description": "d"
        })
    );
    Ok(())
}

#[test]
fn type_url_resolves_amino_names() -> Result<(), Box<dyn std::error::Error>> {
    let transcoder = Transcoder::default();
    let withdraw = json!({
        "type": "cosmos-sdk/MsgWithdrawDelegationReward",
        "value": {
            "delegator_address": "init1delegator",
            "validator_address": "initvaloper1validator"
        }
    });
    let url = transcoder.type_url(Format::Amino, withdraw.to_string().as_bytes())?;
    assert_eq!(url, "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward");

    let entity = transcoder.decode(Format::Amino, withdraw.to_string().as_bytes())?;
    assert!(matches!(entity, Entity::Msg(Msg::WithdrawDelegatorReward(_))));
    Ok(())
}

#[test]
fn unknown_tag_is_unrecognized() {
    let transcoder = Transcoder::default();
    let payload = json!({"@type": "/cosmos.gov.v1beta1.UnknownProposal"});
    let err = transcoder.decode(Format::Data, payload.to_string().as_bytes());
    assert!(matches!(
        err,
        Err(Error::Codec(initia_core::Error::UnrecognizedType {
            format: Format::Data,
            ..
        }))
    ));
}

#[test]
fn disabled_family_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let transcoder = Transcoder::new(
        DriverConfig::default().with_families([FamilyKind::Msg]),
    );
    assert!(matches!(
        transcoder.decode(Format::Amino, &text_amino()),
        Err(Error::FamilyDisabled {
            family: FamilyKind::ProposalContent,
            format: Format::Amino,
            ..
        })
    ));
    assert!(matches!(
        transcoder.encode(&text_entity(), Format::Data),
        Err(Error::FamilyDisabled { .. })
    ));
    Ok(())
}

#[test]
fn pretty_json_is_indented() -> Result<(), Box<dyn std::error::Error>> {
    let compact = Transcoder::default().encode(&text_entity(), Format::Amino)?;
    let pretty = Transcoder::new(DriverConfig::default().with_pretty_json(true))
        .encode(&text_entity(), Format::Amino)?;

    assert!(!compact.contains(&b'\n'));
    assert!(pretty.contains(&b'\n'));
    assert_eq!(
        serde_json::from_slice::<Value>(&compact)?,
        serde_json::from_slice::<Value>(&pretty)?
    );
    Ok(())
}

#[test]
fn config_loads_from_file() -> Result<(), Box<dyn std::error::Error>> {
    configure_logger();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "max_payload_len = 64")?;
    writeln!(file, r#"families = ["ProposalContent"]"#)?;

    let config = DriverConfig::load(file.path())?;
    assert_eq!(config.max_payload_len, 64);
    assert!(!config.pretty_json);
    assert_eq!(config.families, vec![FamilyKind::ProposalContent]);

    let transcoder = Transcoder::new(config);
    let oversized = vec![b' '; 65];
    assert!(matches!(
        transcoder.decode(Format::Amino, &oversized),
        Err(Error::PayloadTooLarge { len: 65, limit: 64 })
    ));
    Ok(())
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("tempdir: {err}"),
    };
    let result = DriverConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
