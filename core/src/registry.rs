// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Type-tag dispatch for polymorphic families.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::{
    from_amino_json, from_data_json, from_proto_bytes, AminoAny, Convertible,
    DataAny, Format, Packable, Tagged,
};
use crate::proto::google::protobuf::Any;
use crate::Error;

type JsonDecoder<F> = fn(Value) -> Result<F, Error>;
type ProtoDecoder<F> = fn(&[u8]) -> Result<F, Error>;

/// A closed set of variants decoded by type tag.
pub trait Family: Sized + 'static {
    /// The family's process-wide registry.
    fn registry() -> &'static Registry<Self>;

    /// The concrete variant held by this value.
    fn variant(&self) -> &dyn Packable;

    /// Type URL of the held variant.
    fn type_url(&self) -> &'static str {
        self.variant().type_url()
    }
}

/// Tag-to-decoder tables of one family, one table per format.
///
/// All three tables are filled by [`Registry::register`] from the variant's
/// [`Tagged`] constants, so a variant is either known in every format it has
/// a tag for or in none.
pub struct Registry<F> {
    family: &'static str,
    amino: HashMap<&'static str, JsonDecoder<F>>,
    data: HashMap<&'static str, JsonDecoder<F>>,
    proto: HashMap<&'static str, ProtoDecoder<F>>,
    amino_urls: HashMap<&'static str, &'static str>,
}

impl<F> Registry<F> {
    /// Creates an empty registry for the named family.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            amino: HashMap::new(),
            data: HashMap::new(),
            proto: HashMap::new(),
            amino_urls: HashMap::new(),
        }
    }

    /// Registers variant `V` under its Amino type and type URL.
    ///
    /// # Panics
    /// If one of `V`'s tags is already registered.
    #[must_use]
    pub fn register<V>(mut self) -> Self
    where
        V: Convertible + Tagged + Into<F>,
    {
        fn json_amino<V: Convertible + Into<F>, F>(
            value: Value,
        ) -> Result<F, Error> {
            from_amino_json::<V>(value).map(Into::into)
        }

        fn json_data<V: Convertible + Into<F>, F>(
            value: Value,
        ) -> Result<F, Error> {
            from_data_json::<V>(value).map(Into::into)
        }

        fn proto<V: Convertible + Into<F>, F>(
            bytes: &[u8],
        ) -> Result<F, Error> {
            from_proto_bytes::<V>(bytes).map(Into::into)
        }

        if let Some(tag) = V::AMINO_TYPE {
            insert(self.family, &mut self.amino, tag, json_amino::<V, F>);
            self.amino_urls.insert(tag, V::TYPE_URL);
        }
        insert(self.family, &mut self.data, V::TYPE_URL, json_data::<V, F>);
        insert(self.family, &mut self.proto, V::TYPE_URL, proto::<V, F>);
        self
    }

    /// Name of the family.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Whether `tag` is registered for `format`.
    pub fn contains(&self, format: Format, tag: &str) -> bool {
        match format {
            Format::Amino => self.amino.contains_key(tag),
            Format::Data => self.data.contains_key(tag),
            Format::Proto => self.proto.contains_key(tag),
        }
    }

    /// Type URL of the variant registered under `tag` for `format`, found
    /// without decoding the payload.
    pub fn type_url(&self, format: Format, tag: &str) -> Option<&'static str> {
        match format {
            Format::Amino => self.amino_urls.get(tag).copied(),
            Format::Data => self.data.get_key_value(tag).map(|(url, _)| *url),
            Format::Proto => {
                self.proto.get_key_value(tag).map(|(url, _)| *url)
            }
        }
    }

    /// Registered tags for `format`, sorted.
    pub fn tags(&self, format: Format) -> Vec<&'static str> {
        let mut tags: Vec<_> = match format {
            Format::Amino => self.amino.keys().copied().collect(),
            Format::Data => self.data.keys().copied().collect(),
            Format::Proto => self.proto.keys().copied().collect(),
        };
        tags.sort_unstable();
        tags
    }

    /// Decodes an Amino envelope.
    pub fn decode_amino(&self, any: AminoAny) -> Result<F, Error> {
        let decode = self.lookup(&self.amino, Format::Amino, &any.r#type)?;
        decode(any.value)
    }

    /// Decodes a Data envelope.
    pub fn decode_data(&self, any: DataAny) -> Result<F, Error> {
        let decode = self.lookup(&self.data, Format::Data, &any.type_url)?;
        decode(Value::Object(any.fields))
    }

    /// Decodes a packed `Any`.
    pub fn decode_proto(&self, any: &Any) -> Result<F, Error> {
        let decode = self.lookup(&self.proto, Format::Proto, &any.type_url)?;
        decode(&any.value)
    }

    fn lookup<D: Copy>(
        &self,
        table: &HashMap<&'static str, D>,
        format: Format,
        tag: &str,
    ) -> Result<D, Error> {
        match table.get(tag) {
            Some(decode) => {
                debug!(event = "dispatch", family = self.family, %format, tag);
                Ok(*decode)
            }
            None => {
                warn!(
                    event = "unknown tag",
                    family = self.family,
                    %format,
                    tag
                );
                Err(Error::UnrecognizedType {
                    family: self.family,
                    format,
                    tag: tag.to_owned(),
                })
            }
        }
    }
}

fn insert<D>(
    family: &'static str,
    table: &mut HashMap<&'static str, D>,
    tag: &'static str,
    decode: D,
) {
    assert!(
        table.insert(tag, decode).is_none(),
        "duplicate {family} tag `{tag}`"
    );
}
