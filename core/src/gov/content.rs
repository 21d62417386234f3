// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

use crate::codec::{Convertible, Tagged};
use crate::proto::cosmos::gov::v1beta1 as gov_pb;
use crate::proto::cosmos::params::v1beta1 as params_pb;
use crate::proto::ibc::core::client::v1 as client_pb;
use crate::Error;

/// A free-text proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProposal {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
}

/// JSON schema of [`TextProposal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProposalJson {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
}

impl Tagged for TextProposal {
    const AMINO_TYPE: Option<&'static str> = Some("cosmos-sdk/TextProposal");
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.TextProposal";
}

impl Convertible for TextProposal {
    type Amino = TextProposalJson;
    type Data = TextProposalJson;
    type Proto = gov_pb::TextProposal;

    fn to_amino(&self) -> Result<TextProposalJson, Error> {
        Ok(TextProposalJson {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    fn from_amino(amino: TextProposalJson) -> Result<Self, Error> {
        Ok(Self {
            title: amino.title,
            description: amino.description,
        })
    }

    fn to_data(&self) -> Result<TextProposalJson, Error> {
        self.to_amino()
    }

    fn from_data(data: TextProposalJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<gov_pb::TextProposal, Error> {
        Ok(gov_pb::TextProposal {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    fn from_proto(proto: gov_pb::TextProposal) -> Result<Self, Error> {
        Ok(Self {
            title: proto.title,
            description: proto.description,
        })
    }
}

/// A single parameter update; `value` is the JSON-encoded new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamChange {
    /// Module subspace.
    pub subspace: String,
    /// Parameter key.
    pub key: String,
    /// JSON-encoded value.
    pub value: String,
}

impl From<params_pb::ParamChange> for ParamChange {
    fn from(proto: params_pb::ParamChange) -> Self {
        Self {
            subspace: proto.subspace,
            key: proto.key,
            value: proto.value,
        }
    }
}

impl From<&ParamChange> for params_pb::ParamChange {
    fn from(change: &ParamChange) -> Self {
        Self {
            subspace: change.subspace.clone(),
            key: change.key.clone(),
            value: change.value.clone(),
        }
    }
}

/// Proposal updating module parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterChangeProposal {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Updates applied when the proposal passes.
    pub changes: Vec<ParamChange>,
}

/// JSON schema of [`ParameterChangeProposal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterChangeProposalJson {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Parameter updates.
    pub changes: Vec<ParamChange>,
}

impl Tagged for ParameterChangeProposal {
    const AMINO_TYPE: Option<&'static str> =
        Some("cosmos-sdk/ParameterChangeProposal");
    const TYPE_URL: &'static str =
        "/cosmos.params.v1beta1.ParameterChangeProposal";
}

impl Convertible for ParameterChangeProposal {
    type Amino = ParameterChangeProposalJson;
    type Data = ParameterChangeProposalJson;
    type Proto = params_pb::ParameterChangeProposal;

    fn to_amino(&self) -> Result<ParameterChangeProposalJson, Error> {
        Ok(ParameterChangeProposalJson {
            title: self.title.clone(),
            description: self.description.clone(),
            changes: self.changes.clone(),
        })
    }

    fn from_amino(amino: ParameterChangeProposalJson) -> Result<Self, Error> {
        Ok(Self {
            title: amino.title,
            description: amino.description,
            changes: amino.changes,
        })
    }

    fn to_data(&self) -> Result<ParameterChangeProposalJson, Error> {
        self.to_amino()
    }

    fn from_data(data: ParameterChangeProposalJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<params_pb::ParameterChangeProposal, Error> {
        Ok(params_pb::ParameterChangeProposal {
            title: self.title.clone(),
            description: self.description.clone(),
            changes: self.changes.iter().map(Into::into).collect(),
        })
    }

    fn from_proto(
        proto: params_pb::ParameterChangeProposal,
    ) -> Result<Self, Error> {
        Ok(Self {
            title: proto.title,
            description: proto.description,
            changes: proto.changes.into_iter().map(Into::into).collect(),
        })
    }
}

/// IBC proposal replacing an expired or frozen client with a substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUpdateProposal {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Client to update.
    pub subject_client_id: String,
    /// Client whose state is copied over.
    pub substitute_client_id: String,
}

/// JSON schema of [`ClientUpdateProposal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientUpdateProposalJson {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Client to update.
    pub subject_client_id: String,
    /// Substitute client.
    pub substitute_client_id: String,
}

impl Tagged for ClientUpdateProposal {
    const AMINO_TYPE: Option<&'static str> = Some("ibc/ClientUpdateProposal");
    const TYPE_URL: &'static str = "/ibc.core.client.v1.ClientUpdateProposal";
}

impl Convertible for ClientUpdateProposal {
    type Amino = ClientUpdateProposalJson;
    type Data = ClientUpdateProposalJson;
    type Proto = client_pb::ClientUpdateProposal;

    fn to_amino(&self) -> Result<ClientUpdateProposalJson, Error> {
        Ok(ClientUpdateProposalJson {
            title: self.title.clone(),
            description: self.description.clone(),
            subject_client_id: self.subject_client_id.clone(),
            substitute_client_id: self.substitute_client_id.clone(),
        })
    }

    fn from_amino(amino: ClientUpdateProposalJson) -> Result<Self, Error> {
        Ok(Self {
            title: amino.title,
            description: amino.description,
            subject_client_id: amino.subject_client_id,
            substitute_client_id: amino.substitute_client_id,
        })
    }

    fn to_data(&self) -> Result<ClientUpdateProposalJson, Error> {
        self.to_amino()
    }

    fn from_data(data: ClientUpdateProposalJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<client_pb::ClientUpdateProposal, Error> {
        Ok(client_pb::ClientUpdateProposal {
            title: self.title.clone(),
            description: self.description.clone(),
            subject_client_id: self.subject_client_id.clone(),
            substitute_client_id: self.substitute_client_id.clone(),
        })
    }

    fn from_proto(
        proto: client_pb::ClientUpdateProposal,
    ) -> Result<Self, Error> {
        Ok(Self {
            title: proto.title,
            description: proto.description,
            subject_client_id: proto.subject_client_id,
            substitute_client_id: proto.substitute_client_id,
        })
    }
}

family! {
    /// Content of a legacy governance proposal.
    ProposalContent = "ProposalContent" {
        /// Free text.
        Text(TextProposal),
        /// Parameter updates.
        ParameterChange(ParameterChangeProposal),
        /// IBC client substitution.
        ClientUpdate(ClientUpdateProposal),
    }
}
