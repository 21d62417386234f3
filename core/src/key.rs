// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Public keys.
//!
//! Amino carries the key as a bare base64 string under the envelope's
//! `value`; Data carries it under `key`.

use serde::{Deserialize, Serialize};

use crate::codec::{decode_bytes, encode_bytes, Convertible, Tagged};
use crate::proto::cosmos::crypto::{ed25519, secp256k1};
use crate::Error;

/// Data schema shared by both key types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyData {
    /// Base64 key bytes.
    pub key: String,
}

macro_rules! public_key {
    ($(#[$meta:meta])* $name:ident, $pb:path, $amino:literal, $url:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Raw key bytes.
            pub key: Vec<u8>,
        }

        impl $name {
            /// Wraps raw key bytes.
            pub fn new(key: impl Into<Vec<u8>>) -> Self {
                Self { key: key.into() }
            }
        }

        impl Tagged for $name {
            const AMINO_TYPE: Option<&'static str> = Some($amino);
            const TYPE_URL: &'static str = $url;
        }

        impl Convertible for $name {
            type Amino = String;
            type Data = PublicKeyData;
            type Proto = $pb;

            fn to_amino(&self) -> Result<String, Error> {
                Ok(encode_bytes(&self.key))
            }

            fn from_amino(amino: String) -> Result<Self, Error> {
                Ok(Self::new(decode_bytes("key", &amino)?))
            }

            fn to_data(&self) -> Result<PublicKeyData, Error> {
                Ok(PublicKeyData {
                    key: encode_bytes(&self.key),
                })
            }

            fn from_data(data: PublicKeyData) -> Result<Self, Error> {
                Ok(Self::new(decode_bytes("key", &data.key)?))
            }

            fn to_proto(&self) -> Result<$pb, Error> {
                let mut proto = <$pb as Default>::default();
                proto.key = self.key.clone();
                Ok(proto)
            }

            fn from_proto(proto: $pb) -> Result<Self, Error> {
                Ok(Self::new(proto.key))
            }
        }
    };
}

public_key!(
    /// A compressed secp256k1 public key.
    Secp256k1PublicKey,
    secp256k1::PubKey,
    "tendermint/PubKeySecp256k1",
    "/cosmos.crypto.secp256k1.PubKey"
);

public_key!(
    /// An ed25519 public key.
    Ed25519PublicKey,
    ed25519::PubKey,
    "tendermint/PubKeyEd25519",
    "/cosmos.crypto.ed25519.PubKey"
);

family! {
    /// Public key of an account.
    PublicKey = "PublicKey" {
        /// secp256k1 key.
        Secp256k1(Secp256k1PublicKey),
        /// ed25519 key.
        Ed25519(Ed25519PublicKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{
        from_amino_json, from_proto_bytes, to_amino_json, to_data_json,
        to_proto_bytes,
    };
    use crate::proto::google::protobuf::Any;
    use prost::Message;

    #[test]
    fn amino_value_is_bare_base64() -> Result<(), Box<dyn std::error::Error>> {
        let key = PublicKey::from(Secp256k1PublicKey::new([2u8; 33]));
        let amino = to_amino_json(&key)?;
        assert_eq!(amino["type"], "tendermint/PubKeySecp256k1");
        assert!(amino["value"].is_string());
        assert_eq!(from_amino_json::<PublicKey>(amino)?, key);

        let data = to_data_json(&key)?;
        assert_eq!(data["@type"], "/cosmos.crypto.secp256k1.PubKey");
        assert_eq!(data["key"], encode_bytes(&[2u8; 33]));
        Ok(())
    }

    #[test]
    fn proto_carries_raw_key_bytes() -> Result<(), Box<dyn std::error::Error>>
    {
        let key = Ed25519PublicKey::new([7u8; 32]);
        let proto = key.to_proto()?;
        assert_eq!(proto.key, vec![7u8; 32]);
        assert_eq!(Ed25519PublicKey::from_proto(proto)?, key);

        let bytes = to_proto_bytes(&PublicKey::from(key.clone()))?;
        let any = Any::decode(bytes.as_slice())?;
        assert_eq!(any.type_url, "/cosmos.crypto.ed25519.PubKey");
        let decoded: PublicKey = from_proto_bytes(&bytes)?;
        assert_eq!(decoded, PublicKey::from(key));
        Ok(())
    }
}
