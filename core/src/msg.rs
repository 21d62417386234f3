// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The transaction message family.

use crate::authz::{MsgGrant, MsgRevoke};
use crate::bank::MsgSend;
use crate::distribution::MsgWithdrawDelegatorReward;
use crate::gov::{MsgDeposit, MsgSubmitProposal, MsgVote};
use crate::staking::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};

family! {
    /// Any message a transaction may carry.
    Msg = "Msg" {
        /// Bank transfer.
        Send(MsgSend),
        /// Delegation.
        Delegate(MsgDelegate),
        /// Undelegation.
        Undelegate(MsgUndelegate),
        /// Redelegation.
        BeginRedelegate(MsgBeginRedelegate),
        /// Reward withdrawal.
        WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
        /// Proposal submission.
        SubmitProposal(MsgSubmitProposal),
        /// Vote.
        Vote(MsgVote),
        /// Proposal deposit.
        Deposit(MsgDeposit),
        /// Authorization grant.
        Grant(MsgGrant),
        /// Authorization revocation.
        Revoke(MsgRevoke),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Format;
    use crate::registry::Family;

    #[test]
    fn withdraw_reward_keeps_legacy_amino_name() {
        let registry = Msg::registry();
        assert!(registry.contains(Format::Amino, "cosmos-sdk/MsgWithdrawDelegationReward"));
        assert!(!registry.contains(Format::Amino, "cosmos-sdk/MsgWithdrawDelegatorReward"));
        assert!(registry.contains(
            Format::Proto,
            "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward"
        ));
        assert_eq!(registry.tags(Format::Proto).len(), 10);
    }
}
