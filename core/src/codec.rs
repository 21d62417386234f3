// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The codec contract shared by every entity and the generic drivers built
//! on top of it.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use prost::Message;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proto::google::protobuf::Any;
use crate::Error;

/// The three wire representations of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Legacy JSON, polymorphic values wrapped in `{type, value}`.
    Amino,
    /// REST JSON, polymorphic values discriminated by `@type`.
    Data,
    /// Protobuf binary, polymorphic values packed in `Any`.
    Proto,
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: [Format; 3] = [Format::Amino, Format::Data, Format::Proto];
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Amino => "amino",
            Format::Data => "data",
            Format::Proto => "proto",
        };
        f.write_str(name)
    }
}

/// A typed entity with one wire schema per format.
///
/// The associated types are declarative schemas: serde structs for the two
/// JSON formats and a prost message for protobuf. Implementations only map
/// fields, applying the rules of [`num`](crate::num) and
/// [`time`](crate::time).
pub trait Convertible: Sized {
    /// Amino JSON schema.
    type Amino: Serialize + DeserializeOwned;
    /// Data JSON schema.
    type Data: Serialize + DeserializeOwned;
    /// Protobuf message.
    type Proto: Message + Default;

    /// Converts to the Amino schema.
    fn to_amino(&self) -> Result<Self::Amino, Error>;
    /// Builds the entity from its Amino schema.
    fn from_amino(amino: Self::Amino) -> Result<Self, Error>;
    /// Converts to the Data schema.
    fn to_data(&self) -> Result<Self::Data, Error>;
    /// Builds the entity from its Data schema.
    fn from_data(data: Self::Data) -> Result<Self, Error>;
    /// Converts to the protobuf message.
    fn to_proto(&self) -> Result<Self::Proto, Error>;
    /// Builds the entity from its protobuf message.
    fn from_proto(proto: Self::Proto) -> Result<Self, Error>;
}

/// Discriminators of a polymorphic variant.
pub trait Tagged {
    /// Amino `type`, `None` when the variant has no Amino form.
    const AMINO_TYPE: Option<&'static str>;
    /// Protobuf type URL, also used as the Data `@type`.
    const TYPE_URL: &'static str;
}

/// Amino envelope of a polymorphic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AminoAny {
    /// Amino type tag.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The variant's Amino value.
    pub value: Value,
}

/// Data envelope of a polymorphic value: the variant's fields next to an
/// `@type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAny {
    /// Type URL.
    #[serde(rename = "@type")]
    pub type_url: String,
    /// The variant's Data fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Object-safe packing of a variant into any of the three envelopes.
///
/// Implemented for every [`Convertible`] + [`Tagged`] type.
pub trait Packable: Send + Sync {
    /// Protobuf type URL of the variant.
    fn type_url(&self) -> &'static str;
    /// Amino type of the variant, if any.
    fn amino_type(&self) -> Option<&'static str>;
    /// Wraps the Amino value in `{type, value}`.
    fn amino_any(&self) -> Result<AminoAny, Error>;
    /// Adds `@type` to the Data fields.
    fn data_any(&self) -> Result<DataAny, Error>;
    /// Packs the protobuf encoding in an `Any`.
    fn pack_any(&self) -> Result<Any, Error>;
}

impl<T> Packable for T
where
    T: Convertible + Tagged + Send + Sync,
{
    fn type_url(&self) -> &'static str {
        T::TYPE_URL
    }

    fn amino_type(&self) -> Option<&'static str> {
        T::AMINO_TYPE
    }

    fn amino_any(&self) -> Result<AminoAny, Error> {
        let tag = T::AMINO_TYPE.ok_or(Error::UnsupportedConversion {
            type_url: T::TYPE_URL,
            format: Format::Amino,
        })?;
        Ok(AminoAny {
            r#type: tag.to_owned(),
            value: to_amino_json(self)?,
        })
    }

    fn data_any(&self) -> Result<DataAny, Error> {
        let fields = match to_data_json(self)? {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::malformed(format!(
                    "data of `{}` is not an object: {other}",
                    T::TYPE_URL
                )));
            }
        };
        Ok(DataAny {
            type_url: T::TYPE_URL.to_owned(),
            fields,
        })
    }

    fn pack_any(&self) -> Result<Any, Error> {
        pack_any(self)
    }
}

/// Encodes the entity as Amino JSON.
pub fn to_amino_json<T: Convertible>(value: &T) -> Result<Value, Error> {
    Ok(serde_json::to_value(value.to_amino()?)?)
}

/// Decodes the entity from Amino JSON.
pub fn from_amino_json<T: Convertible>(json: Value) -> Result<T, Error> {
    T::from_amino(serde_json::from_value(json)?)
}

/// Encodes the entity as Data JSON.
pub fn to_data_json<T: Convertible>(value: &T) -> Result<Value, Error> {
    Ok(serde_json::to_value(value.to_data()?)?)
}

/// Decodes the entity from Data JSON.
pub fn from_data_json<T: Convertible>(json: Value) -> Result<T, Error> {
    T::from_data(serde_json::from_value(json)?)
}

/// Encodes the entity as protobuf bytes.
pub fn to_proto_bytes<T: Convertible>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(value.to_proto()?.encode_to_vec())
}

/// Decodes the entity from protobuf bytes.
pub fn from_proto_bytes<T: Convertible>(bytes: &[u8]) -> Result<T, Error> {
    T::from_proto(T::Proto::decode(bytes)?)
}

/// Packs the entity's protobuf encoding in an `Any` under its type URL.
pub fn pack_any<T: Convertible + Tagged>(value: &T) -> Result<Any, Error> {
    Ok(Any {
        type_url: T::TYPE_URL.to_owned(),
        value: to_proto_bytes(value)?,
    })
}

/// Unpacks an `Any` holding exactly `T`.
///
/// # Errors
/// [`Error::UnrecognizedType`] if the type URL is not `T`'s.
pub fn unpack_any<T: Convertible + Tagged>(any: &Any) -> Result<T, Error> {
    if any.type_url != T::TYPE_URL {
        return Err(Error::UnrecognizedType {
            family: short_type_name::<T>(),
            format: Format::Proto,
            tag: any.type_url.clone(),
        });
    }
    from_proto_bytes(&any.value)
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

pub(crate) fn required<T>(
    field: &'static str,
    value: Option<T>,
) -> Result<T, Error> {
    value.ok_or_else(|| Error::missing(field))
}

pub(crate) fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub(crate) fn decode_bytes(
    field: &'static str,
    text: &str,
) -> Result<Vec<u8>, Error> {
    STANDARD
        .decode(text)
        .map_err(|err| Error::malformed(format!("{field}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_any_flattens_fields() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::json!({
            "@type": "/cosmos.gov.v1beta1.TextProposal",
            "title": "t",
            "description": "d"
        });
        let any: DataAny = serde_json::from_value(json.clone())?;
        assert_eq!(any.type_url, "/cosmos.gov.v1beta1.TextProposal");
        assert_eq!(any.fields.len(), 2);
        assert_eq!(serde_json::to_value(&any)?, json);
        Ok(())
    }

    #[test]
    fn amino_any_uses_type_key() -> Result<(), Box<dyn std::error::Error>> {
        let any = AminoAny {
            r#type: "cosmos-sdk/TextProposal".into(),
            value: serde_json::json!({"title": "t"}),
        };
        let json = serde_json::to_value(&any)?;
        assert_eq!(json["type"], "cosmos-sdk/TextProposal");
        assert_eq!(json["value"]["title"], "t");
        Ok(())
    }

    #[test]
    fn bytes_are_standard_base64() {
        assert_eq!(encode_bytes(&[0xfb, 0xff]), "+/8=");
        assert_eq!(decode_bytes("key", "+/8="), Ok(vec![0xfb, 0xff]));
        assert!(matches!(
            decode_bytes("key", "-_8"),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn format_display() {
        let names: Vec<_> =
            Format::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["amino", "data", "proto"]);
    }
}
