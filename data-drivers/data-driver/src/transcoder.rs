// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use initia_core::auth::Account;
use initia_core::authz::Authorization;
use initia_core::gov::ProposalContent;
use initia_core::key::PublicKey;
use initia_core::msg::Msg;
use initia_core::proto::google::protobuf::Any;
use initia_core::proto::Message;
use initia_core::{
    to_amino_json, to_data_json, to_proto_bytes, AminoAny, Convertible,
    DataAny, Family, Format,
};
use tracing::{debug, warn};

use crate::{DriverConfig, Error, FamilyKind};

/// A decoded value of any family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// A public key.
    PublicKey(PublicKey),
    /// An account.
    Account(Account),
    /// Governance proposal content.
    ProposalContent(ProposalContent),
    /// An authz authorization.
    Authorization(Authorization),
    /// A transaction message.
    Msg(Msg),
}

impl Entity {
    /// The family the value belongs to.
    pub fn family(&self) -> FamilyKind {
        match self {
            Entity::PublicKey(_) => FamilyKind::PublicKey,
            Entity::Account(_) => FamilyKind::Account,
            Entity::ProposalContent(_) => FamilyKind::ProposalContent,
            Entity::Authorization(_) => FamilyKind::Authorization,
            Entity::Msg(_) => FamilyKind::Msg,
        }
    }

    /// Type URL of the held variant.
    pub fn type_url(&self) -> &'static str {
        match self {
            Entity::PublicKey(v) => v.type_url(),
            Entity::Account(v) => v.type_url(),
            Entity::ProposalContent(v) => v.type_url(),
            Entity::Authorization(v) => v.type_url(),
            Entity::Msg(v) => v.type_url(),
        }
    }
}

/// A parsed, not yet dispatched payload.
enum Envelope {
    Amino(AminoAny),
    Data(DataAny),
    Proto(Any),
}

impl Envelope {
    fn parse(format: Format, payload: &[u8]) -> Result<Self, Error> {
        let envelope = match format {
            Format::Amino => Envelope::Amino(from_json(payload)?),
            Format::Data => Envelope::Data(from_json(payload)?),
            Format::Proto => Envelope::Proto(
                Any::decode(payload).map_err(initia_core::Error::from)?,
            ),
        };
        Ok(envelope)
    }

    fn tag(&self) -> &str {
        match self {
            Envelope::Amino(any) => &any.r#type,
            Envelope::Data(any) => &any.type_url,
            Envelope::Proto(any) => &any.type_url,
        }
    }

    fn format(&self) -> Format {
        match self {
            Envelope::Amino(_) => Format::Amino,
            Envelope::Data(_) => Format::Data,
            Envelope::Proto(_) => Format::Proto,
        }
    }

    fn decode<F: Family>(self) -> Result<F, initia_core::Error> {
        let registry = F::registry();
        match self {
            Envelope::Amino(any) => registry.decode_amino(any),
            Envelope::Data(any) => registry.decode_data(any),
            Envelope::Proto(any) => registry.decode_proto(&any),
        }
    }
}

fn from_json<T: serde::de::DeserializeOwned>(
    payload: &[u8],
) -> Result<T, Error> {
    let text = std::str::from_utf8(payload)?;
    Ok(serde_json::from_str(text).map_err(initia_core::Error::from)?)
}

fn knows(family: FamilyKind, format: Format, tag: &str) -> bool {
    match family {
        FamilyKind::PublicKey => PublicKey::registry().contains(format, tag),
        FamilyKind::Account => Account::registry().contains(format, tag),
        FamilyKind::ProposalContent => {
            ProposalContent::registry().contains(format, tag)
        }
        FamilyKind::Authorization => {
            Authorization::registry().contains(format, tag)
        }
        FamilyKind::Msg => Msg::registry().contains(format, tag),
    }
}

/// Decodes self-describing payloads of the enabled families and re-encodes
/// them in any format.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    config: DriverConfig,
}

impl Transcoder {
    /// Creates a transcoder with the given settings.
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// The transcoder's settings.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Decodes a payload of any enabled family.
    ///
    /// # Errors
    /// - [`Error::PayloadTooLarge`] above `max_payload_len`.
    /// - [`Error::FamilyDisabled`] if only a disabled family knows the tag.
    /// - [`Error::Codec`] with [`initia_core::Error::UnrecognizedType`] if no
    ///   family knows the tag, or with the decoding failure of the family
    ///   that does.
    pub fn decode(
        &self,
        format: Format,
        payload: &[u8],
    ) -> Result<Entity, Error> {
        self.check_len(payload)?;
        let envelope = Envelope::parse(format, payload)?;
        let family = self.family_of(&envelope)?;
        debug!(
            event = "decoding payload",
            %family,
            %format,
            tag = envelope.tag(),
            len = payload.len(),
        );

        let entity = match family {
            FamilyKind::PublicKey => Entity::PublicKey(envelope.decode()?),
            FamilyKind::Account => Entity::Account(envelope.decode()?),
            FamilyKind::ProposalContent => {
                Entity::ProposalContent(envelope.decode()?)
            }
            FamilyKind::Authorization => {
                Entity::Authorization(envelope.decode()?)
            }
            FamilyKind::Msg => Entity::Msg(envelope.decode()?),
        };
        Ok(entity)
    }

    /// Encodes an entity. JSON output is UTF-8, indented when `pretty_json`
    /// is set; Protobuf output is an encoded `Any`.
    pub fn encode(
        &self,
        entity: &Entity,
        format: Format,
    ) -> Result<Vec<u8>, Error> {
        let family = entity.family();
        if !self.config.is_enabled(family) {
            return Err(Error::FamilyDisabled {
                family,
                format,
                tag: entity.type_url().to_owned(),
            });
        }

        let bytes = match entity {
            Entity::PublicKey(v) => self.encode_as(v, format),
            Entity::Account(v) => self.encode_as(v, format),
            Entity::ProposalContent(v) => self.encode_as(v, format),
            Entity::Authorization(v) => self.encode_as(v, format),
            Entity::Msg(v) => self.encode_as(v, format),
        }?;
        debug!(
            event = "encoded entity",
            %family,
            %format,
            type_url = entity.type_url(),
            len = bytes.len(),
        );
        Ok(bytes)
    }

    /// Re-encodes a payload from one format into another.
    pub fn transcode(
        &self,
        from: Format,
        payload: &[u8],
        to: Format,
    ) -> Result<Vec<u8>, Error> {
        let entity = self.decode(from, payload)?;
        self.encode(&entity, to)
    }

    /// Type URL of the variant a payload holds, whatever its format.
    ///
    /// Only the envelope is parsed; the body is not decoded.
    pub fn type_url(
        &self,
        format: Format,
        payload: &[u8],
    ) -> Result<&'static str, Error> {
        self.check_len(payload)?;
        let envelope = Envelope::parse(format, payload)?;
        let family = self.family_of(&envelope)?;
        let tag = envelope.tag();
        let type_url = match family {
            FamilyKind::PublicKey => {
                PublicKey::registry().type_url(format, tag)
            }
            FamilyKind::Account => Account::registry().type_url(format, tag),
            FamilyKind::ProposalContent => {
                ProposalContent::registry().type_url(format, tag)
            }
            FamilyKind::Authorization => {
                Authorization::registry().type_url(format, tag)
            }
            FamilyKind::Msg => Msg::registry().type_url(format, tag),
        };
        type_url.ok_or_else(|| {
            initia_core::Error::UnrecognizedType {
                family: "Entity",
                format,
                tag: tag.to_owned(),
            }
            .into()
        })
    }

    fn check_len(&self, payload: &[u8]) -> Result<(), Error> {
        let limit = self.config.max_payload_len;
        if payload.len() > limit {
            return Err(Error::PayloadTooLarge {
                len: payload.len(),
                limit,
            });
        }
        Ok(())
    }

    fn family_of(&self, envelope: &Envelope) -> Result<FamilyKind, Error> {
        let format = envelope.format();
        let tag = envelope.tag();
        let Some(family) = FamilyKind::ALL
            .into_iter()
            .find(|family| knows(*family, format, tag))
        else {
            warn!(event = "unrecognized payload", %format, tag);
            return Err(initia_core::Error::UnrecognizedType {
                family: "Entity",
                format,
                tag: tag.to_owned(),
            }
            .into());
        };

        if !self.config.is_enabled(family) {
            warn!(event = "disabled family", %family, %format, tag);
            return Err(Error::FamilyDisabled {
                family,
                format,
                tag: tag.to_owned(),
            });
        }
        Ok(family)
    }

    fn encode_as<T: Convertible>(
        &self,
        value: &T,
        format: Format,
    ) -> Result<Vec<u8>, Error> {
        let json = match format {
            Format::Amino => to_amino_json(value)?,
            Format::Data => to_data_json(value)?,
            Format::Proto => return Ok(to_proto_bytes(value)?),
        };
        let bytes = if self.config.pretty_json {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        };
        Ok(bytes.map_err(initia_core::Error::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT_AMINO: &str = r#"{"type":"cosmos-sdk/TextProposal","value":{"title":"t","description":"d"}}"#;

    #[test]
    fn json_payload_must_be_utf8() {
        let transcoder = Transcoder::default();
        assert!(matches!(
            transcoder.decode(Format::Data, &[0x7b, 0xff, 0x7d]),
            Err(Error::Utf8(_))
        ));
    }

    #[test]
    fn payload_limit_is_inclusive() -> Result<(), Error> {
        let limit = TEXT_AMINO.len();
        let transcoder =
            Transcoder::new(DriverConfig::default().with_max_payload_len(limit));
        transcoder.decode(Format::Amino, TEXT_AMINO.as_bytes())?;

        let transcoder = Transcoder::new(
            DriverConfig::default().with_max_payload_len(limit - 1),
        );
        assert!(matches!(
            transcoder.decode(Format::Amino, TEXT_AMINO.as_bytes()),
            Err(Error::PayloadTooLarge { len, .. }) if len == limit
        ));
        Ok(())
    }

    #[test]
    fn type_url_reads_only_the_envelope() -> Result<(), Error> {
        let payload =
            br#"{"@type":"/cosmos.gov.v1beta1.TextProposal","title":5}"#;
        let transcoder = Transcoder::default();
        assert_eq!(
            transcoder.type_url(Format::Data, payload)?,
            "/cosmos.gov.v1beta1.TextProposal"
        );
        assert!(matches!(
            transcoder.decode(Format::Data, payload),
            Err(Error::Codec(_))
        ));
        Ok(())
    }

    #[test]
    fn tags_belong_to_one_family() {
        for format in Format::ALL {
            for family in FamilyKind::ALL {
                let registry_tags = match family {
                    FamilyKind::PublicKey => PublicKey::registry().tags(format),
                    FamilyKind::Account => Account::registry().tags(format),
                    FamilyKind::ProposalContent => {
                        ProposalContent::registry().tags(format)
                    }
                    FamilyKind::Authorization => {
                        Authorization::registry().tags(format)
                    }
                    FamilyKind::Msg => Msg::registry().tags(format),
                };
                for tag in registry_tags {
                    let owners = FamilyKind::ALL
                        .into_iter()
                        .filter(|other| knows(*other, format, tag))
                        .count();
                    assert_eq!(owners, 1, "{tag}");
                }
            }
        }
    }
}
