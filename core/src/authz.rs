// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Authz module: authorizations, grants and the grant/revoke messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bank::SendAuthorization;
use crate::codec::{required, AminoAny, Convertible, DataAny, Tagged};
use crate::proto::cosmos::authz::v1beta1 as pb;
use crate::staking::StakeAuthorization;
use crate::{time, Error};

/// Authorizes any message of type `msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericAuthorization {
    /// Type URL of the authorized message.
    pub msg: String,
}

/// JSON schema of [`GenericAuthorization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericAuthorizationJson {
    /// Type URL of the authorized message.
    pub msg: String,
}

impl Tagged for GenericAuthorization {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/GenericAuthorization");
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.GenericAuthorization";
}

impl Convertible for GenericAuthorization {
    type Amino = GenericAuthorizationJson;
    type Data = GenericAuthorizationJson;
    type Proto = pb::GenericAuthorization;

    fn to_amino(&self) -> Result<GenericAuthorizationJson, Error> {
        Ok(GenericAuthorizationJson {
            msg: self.msg.clone(),
        })
    }

    fn from_amino(amino: GenericAuthorizationJson) -> Result<Self, Error> {
        Ok(Self { msg: amino.msg })
    }

    fn to_data(&self) -> Result<GenericAuthorizationJson, Error> {
        self.to_amino()
    }

    fn from_data(data: GenericAuthorizationJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::GenericAuthorization, Error> {
        Ok(pb::GenericAuthorization {
            msg: self.msg.clone(),
        })
    }

    fn from_proto(proto: pb::GenericAuthorization) -> Result<Self, Error> {
        Ok(Self { msg: proto.msg })
    }
}

family! {
    /// What a grant authorizes.
    Authorization = "Authorization" {
        /// Any message of a type.
        Generic(GenericAuthorization),
        /// Bank sends.
        Send(SendAuthorization),
        /// Staking operations.
        Stake(StakeAuthorization),
    }
}

/// An authorization and its optional expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationGrant {
    /// Granted authorization.
    pub authorization: Authorization,
    /// Expiration, `None` for no expiry.
    pub expiration: Option<DateTime<Utc>>,
}

/// JSON schema of [`AuthorizationGrant`], generic over the authorization
/// envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationGrantJson<A> {
    /// Enveloped authorization.
    pub authorization: A,
    /// RFC 3339 expiration.
    pub expiration: Option<String>,
}

impl Convertible for AuthorizationGrant {
    type Amino = AuthorizationGrantJson<AminoAny>;
    type Data = AuthorizationGrantJson<DataAny>;
    type Proto = pb::Grant;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(AuthorizationGrantJson {
            authorization: self.authorization.to_amino()?,
            expiration: self.expiration.as_ref().map(time::to_json),
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            authorization: Authorization::from_amino(amino.authorization)?,
            expiration: time::from_json_opt(
                "expiration",
                amino.expiration.as_deref(),
            )?,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(AuthorizationGrantJson {
            authorization: self.authorization.to_data()?,
            expiration: self.expiration.as_ref().map(time::to_json),
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            authorization: Authorization::from_data(data.authorization)?,
            expiration: time::from_json_opt(
                "expiration",
                data.expiration.as_deref(),
            )?,
        })
    }

    fn to_proto(&self) -> Result<pb::Grant, Error> {
        Ok(pb::Grant {
            authorization: Some(self.authorization.to_proto()?),
            expiration: self.expiration.as_ref().map(time::to_proto),
        })
    }

    fn from_proto(proto: pb::Grant) -> Result<Self, Error> {
        Ok(Self {
            authorization: Authorization::from_proto(required(
                "authorization",
                proto.authorization,
            )?)?,
            expiration: proto
                .expiration
                .map(|ts| time::from_proto("expiration", ts))
                .transpose()?,
        })
    }
}

/// Grants an authorization from granter to grantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgGrant {
    /// Granter address.
    pub granter: String,
    /// Grantee address.
    pub grantee: String,
    /// The grant.
    pub grant: AuthorizationGrant,
}

/// JSON schema of [`MsgGrant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgGrantJson<A> {
    /// Granter address.
    pub granter: String,
    /// Grantee address.
    pub grantee: String,
    /// The grant.
    pub grant: AuthorizationGrantJson<A>,
}

impl Tagged for MsgGrant {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/MsgGrant");
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.MsgGrant";
}

impl Convertible for MsgGrant {
    type Amino = MsgGrantJson<AminoAny>;
    type Data = MsgGrantJson<DataAny>;
    type Proto = pb::MsgGrant;

    fn to_amino(&self) -> Result<Self::Amino, Error> {
        Ok(MsgGrantJson {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            grant: self.grant.to_amino()?,
        })
    }

    fn from_amino(amino: Self::Amino) -> Result<Self, Error> {
        Ok(Self {
            granter: amino.granter,
            grantee: amino.grantee,
            grant: AuthorizationGrant::from_amino(amino.grant)?,
        })
    }

    fn to_data(&self) -> Result<Self::Data, Error> {
        Ok(MsgGrantJson {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            grant: self.grant.to_data()?,
        })
    }

    fn from_data(data: Self::Data) -> Result<Self, Error> {
        Ok(Self {
            granter: data.granter,
            grantee: data.grantee,
            grant: AuthorizationGrant::from_data(data.grant)?,
        })
    }

    fn to_proto(&self) -> Result<pb::MsgGrant, Error> {
        Ok(pb::MsgGrant {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            grant: Some(self.grant.to_proto()?),
        })
    }

    fn from_proto(proto: pb::MsgGrant) -> Result<Self, Error> {
        Ok(Self {
            granter: proto.granter,
            grantee: proto.grantee,
            grant: AuthorizationGrant::from_proto(required(
                "grant",
                proto.grant,
            )?)?,
        })
    }
}

/// Revokes the grantee's authorization for one message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgRevoke {
    /// Granter address.
    pub granter: String,
    /// Grantee address.
    pub grantee: String,
    /// Type URL of the revoked message.
    pub msg_type_url: String,
}

/// JSON schema of [`MsgRevoke`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRevokeJson {
    /// Granter address.
    pub granter: String,
    /// Grantee address.
    pub grantee: String,
    /// Type URL of the revoked message.
    pub msg_type_url: String,
}

impl Tagged for MsgRevoke {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/MsgRevoke");
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.MsgRevoke";
}

impl Convertible for MsgRevoke {
    type Amino = MsgRevokeJson;
    type Data = MsgRevokeJson;
    type Proto = pb::MsgRevoke;

    fn to_amino(&self) -> Result<MsgRevokeJson, Error> {
        Ok(MsgRevokeJson {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            msg_type_url: self.msg_type_url.clone(),
        })
    }

    fn from_amino(amino: MsgRevokeJson) -> Result<Self, Error> {
        Ok(Self {
            granter: amino.granter,
            grantee: amino.grantee,
            msg_type_url: amino.msg_type_url,
        })
    }

    fn to_data(&self) -> Result<MsgRevokeJson, Error> {
        self.to_amino()
    }

    fn from_data(data: MsgRevokeJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::MsgRevoke, Error> {
        Ok(pb::MsgRevoke {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            msg_type_url: self.msg_type_url.clone(),
        })
    }

    fn from_proto(proto: pb::MsgRevoke) -> Result<Self, Error> {
        Ok(Self {
            granter: proto.granter,
            grantee: proto.grantee,
            msg_type_url: proto.msg_type_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_amino_json, to_amino_json};

    #[test]
    fn grant_without_expiration() -> Result<(), Box<dyn std::error::Error>> {
        let msg = MsgGrant {
            granter: "init1granter".into(),
            grantee: "init1grantee".into(),
            grant: AuthorizationGrant {
                authorization: GenericAuthorization {
                    msg: "/cosmos.gov.v1beta1.MsgVote".into(),
                }
                .into(),
                expiration: None,
            },
        };
        let amino = to_amino_json(&msg)?;
        assert!(amino["grant"]["expiration"].is_null());
        assert_eq!(
            amino["grant"]["authorization"]["type"],
            "cosmos-sdk/GenericAuthorization"
        );
        assert_eq!(from_amino_json::<MsgGrant>(amino)?, msg);
        Ok(())
    }
}
