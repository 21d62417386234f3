// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use initia_core::authz::{Authorization, GenericAuthorization};
use initia_core::gov::{ClientUpdateProposal, ProposalContent, TextProposal};
use initia_core::key::PublicKey;
use initia_core::proto::google::protobuf::Any;
use initia_core::proto::Message;
use initia_core::{
    from_amino_json, from_data_json, from_proto_bytes, pack_any, to_amino_json,
    unpack_any, Error, Family, Format,
};
use serde_json::json;

use common::configure_logger;

fn text_proposal() -> TextProposal {
    TextProposal {
        title: "Test".into(),
        description: "Desc".into(),
    }
}

#[test]
fn text_proposal_dispatch_in_every_format() -> Result<(), Box<dyn std::error::Error>> {
    configure_logger();
    let expected = ProposalContent::Text(text_proposal());

    let amino = json!({
        "type": "cosmos-sdk/TextProposal",
        "value": {"title": "Test", "description": "Desc"}
    });
    assert_eq!(from_amino_json::<ProposalContent>(amino)?, expected);

    let data = json!({
        "@type": "/cosmos.gov.v1beta1.TextProposal",
        "title": "Test",
        "description": "Desc"
    });
    assert_eq!(from_data_json::<ProposalContent>(data)?, expected);

    let any = pack_any(&text_proposal())?;
    assert_eq!(any.type_url, "/cosmos.gov.v1beta1.TextProposal");
    let bytes = any.encode_to_vec();
    assert_eq!(from_proto_bytes::<ProposalContent>(&bytes)?, expected);
    Ok(())
}

#[test]
fn unknown_amino_type_is_unrecognized() {
    let amino = json!({
        "type": "cosmos-sdk/UnknownProposal",
        "value": {"title": "Test", "description": "Desc"}
    });
    assert_eq!(
        from_amino_json::<ProposalContent>(amino),
        Err(Error::UnrecognizedType {
            family: "ProposalContent",
            format: Format::Amino,
            tag: "cosmos-sdk/UnknownProposal".into(),
        })
    );
}

#[test]
fn unknown_data_and_proto_types_are_unrecognized() {
    let data = json!({"@type": "/cosmos.gov.v1beta1.UnknownProposal"});
    assert!(matches!(
        from_data_json::<ProposalContent>(data),
        Err(Error::UnrecognizedType { format: Format::Data, .. })
    ));

    let any = Any {
        type_url: "/cosmos.gov.v1beta1.UnknownProposal".into(),
        value: vec![],
    };
    assert!(matches!(
        from_proto_bytes::<ProposalContent>(&any.encode_to_vec()),
        Err(Error::UnrecognizedType { format: Format::Proto, .. })
    ));
}

#[test]
fn tags_are_scoped_to_their_family() {
    // a valid key tag is still unknown to the content family
    let amino = json!({"type": "tendermint/PubKeySecp256k1", "value": "AA=="});
    assert!(matches!(
        from_amino_json::<ProposalContent>(amino.clone()),
        Err(Error::UnrecognizedType { family: "ProposalContent", .. })
    ));
    assert!(from_amino_json::<PublicKey>(amino).is_ok());
}

#[test]
fn every_registry_is_complete_across_formats() {
    fn check<F: Family>(amino: usize, urls: usize) {
        let registry = F::registry();
        assert_eq!(registry.tags(Format::Amino).len(), amino, "{}", registry.family());
        assert_eq!(registry.tags(Format::Data), registry.tags(Format::Proto));
        assert_eq!(registry.tags(Format::Data).len(), urls);
    }
    check::<PublicKey>(2, 2);
    check::<initia_core::auth::Account>(4, 4);
    check::<ProposalContent>(3, 3);
    check::<Authorization>(3, 3);
    check::<initia_core::msg::Msg>(10, 10);
}

#[test]
fn unpack_any_checks_type_url() -> Result<(), Box<dyn std::error::Error>> {
    let any = pack_any(&text_proposal())?;
    assert_eq!(unpack_any::<TextProposal>(&any)?, text_proposal());
    assert_eq!(
        unpack_any::<ClientUpdateProposal>(&any),
        Err(Error::UnrecognizedType {
            family: "ClientUpdateProposal",
            format: Format::Proto,
            tag: "/cosmos.gov.v1beta1.TextProposal".into(),
        })
    );
    Ok(())
}

#[test]
fn ibc_content_uses_ibc_amino_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let content = ProposalContent::from(ClientUpdateProposal {
        title: "Revive client".into(),
        description: "Substitute the frozen client".into(),
        subject_client_id: "07-tendermint-0".into(),
        substitute_client_id: "07-tendermint-5".into(),
    });
    let amino = to_amino_json(&content)?;
    assert_eq!(amino["type"], "ibc/ClientUpdateProposal");
    assert_eq!(content.type_url(), "/ibc.core.client.v1.ClientUpdateProposal");
    assert_eq!(from_amino_json::<ProposalContent>(amino)?, content);
    Ok(())
}

#[test]
fn generic_authorization_dispatch() -> Result<(), Box<dyn std::error::Error>> {
    let data = json!({
        "@type": "/cosmos.authz.v1beta1.GenericAuthorization",
        "msg": "/cosmos.gov.v1beta1.MsgVote"
    });
    let auth: Authorization = from_data_json(data)?;
    assert_eq!(
        auth,
        Authorization::Generic(GenericAuthorization {
            msg: "/cosmos.gov.v1beta1.MsgVote".into()
        })
    );
    Ok(())
}

#[test]
fn malformed_envelope_is_rejected() {
    let missing_type = json!({"value": {"title": "t", "description": "d"}});
    assert!(matches!(
        from_amino_json::<ProposalContent>(missing_type),
        Err(Error::MalformedInput(_))
    ));
    assert!(matches!(
        from_proto_bytes::<ProposalContent>(&[0xff, 0xff, 0xff]),
        Err(Error::MalformedInput(_))
    ));
}
