// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Types of the `cosmos` packages.

pub mod auth;
pub mod authz;
pub mod bank;
pub mod base;
pub mod crypto;
pub mod distribution;
pub mod gov;
pub mod params;
pub mod staking;
pub mod vesting;
