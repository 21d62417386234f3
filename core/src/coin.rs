// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Coins and coin sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::Convertible;
use crate::num::Int;
use crate::proto::cosmos::base::v1beta1 as pb;
use crate::Error;

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Denomination.
    pub denom: String,
    /// Amount.
    pub amount: Int,
}

impl Coin {
    /// Creates a coin.
    pub fn new(denom: impl Into<String>, amount: impl Into<Int>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// JSON schema of a coin, shared by Amino and Data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinJson {
    /// Denomination.
    pub denom: String,
    /// Decimal amount.
    pub amount: String,
}

impl Convertible for Coin {
    type Amino = CoinJson;
    type Data = CoinJson;
    type Proto = pb::Coin;

    fn to_amino(&self) -> Result<CoinJson, Error> {
        Ok(CoinJson {
            denom: self.denom.clone(),
            amount: self.amount.to_string(),
        })
    }

    fn from_amino(amino: CoinJson) -> Result<Self, Error> {
        Ok(Self {
            amount: Int::parse("amount", &amino.amount)?,
            denom: amino.denom,
        })
    }

    fn to_data(&self) -> Result<CoinJson, Error> {
        self.to_amino()
    }

    fn from_data(data: CoinJson) -> Result<Self, Error> {
        Self::from_amino(data)
    }

    fn to_proto(&self) -> Result<pb::Coin, Error> {
        Ok(pb::Coin {
            denom: self.denom.clone(),
            amount: self.amount.to_string(),
        })
    }

    fn from_proto(proto: pb::Coin) -> Result<Self, Error> {
        Ok(Self {
            amount: Int::parse("amount", &proto.amount)?,
            denom: proto.denom,
        })
    }
}

/// A set of coins keyed by denomination.
///
/// Iteration is sorted by denom; adding a denom that is already present sums
/// the amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coins(BTreeMap<String, Int>);

impl Coins {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coin`, merging with an existing entry of the same denom.
    pub fn add(&mut self, coin: Coin) {
        match self.0.get_mut(&coin.denom) {
            Some(amount) => *amount += &coin.amount,
            None => {
                self.0.insert(coin.denom, coin.amount);
            }
        }
    }

    /// Amount of `denom`, if present.
    pub fn get(&self, denom: &str) -> Option<&Int> {
        self.0.get(denom)
    }

    /// Number of distinct denominations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coins sorted by denom.
    pub fn iter(&self) -> impl Iterator<Item = Coin> + '_ {
        self.0
            .iter()
            .map(|(denom, amount)| Coin::new(denom.clone(), amount.clone()))
    }

    pub(crate) fn to_json(&self) -> Vec<CoinJson> {
        self.0
            .iter()
            .map(|(denom, amount)| CoinJson {
                denom: denom.clone(),
                amount: amount.to_string(),
            })
            .collect()
    }

    pub(crate) fn from_json(coins: Vec<CoinJson>) -> Result<Self, Error> {
        coins
            .into_iter()
            .map(Coin::from_amino)
            .collect::<Result<_, _>>()
    }

    pub(crate) fn to_proto(&self) -> Vec<pb::Coin> {
        self.0
            .iter()
            .map(|(denom, amount)| pb::Coin {
                denom: denom.clone(),
                amount: amount.to_string(),
            })
            .collect()
    }

    pub(crate) fn from_proto(coins: Vec<pb::Coin>) -> Result<Self, Error> {
        coins
            .into_iter()
            .map(Coin::from_proto)
            .collect::<Result<_, _>>()
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        let mut coins = Coins::new();
        for coin in iter {
            coins.add(coin);
        }
        coins
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        std::iter::once(coin).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coins_sort_and_merge() {
        let coins: Coins = [
            Coin::new("uusdc", 5u64),
            Coin::new("uinit", 1u64),
            Coin::new("uusdc", 7u64),
        ]
        .into_iter()
        .collect();

        let denoms: Vec<_> = coins.iter().map(|c| c.denom).collect();
        assert_eq!(denoms, ["uinit", "uusdc"]);
        assert_eq!(coins.get("uusdc"), Some(&Int::from(12u64)));
        assert_eq!(coins.len(), 2);
    }

    #[test]
    fn coin_amount_must_be_integer() {
        let bad = CoinJson {
            denom: "uinit".into(),
            amount: "1.5".into(),
        };
        assert_eq!(
            Coin::from_amino(bad),
            Err(Error::UnparsableNumber {
                field: "amount",
                value: "1.5".into()
            })
        );
    }

    #[test]
    fn json_is_sorted() -> Result<(), Error> {
        let coins = Coins::from_json(vec![
            CoinJson {
                denom: "b".into(),
                amount: "2".into(),
            },
            CoinJson {
                denom: "a".into(),
                amount: "1".into(),
            },
        ])?;
        let json = coins.to_json();
        assert_eq!(json[0].denom, "a");
        assert_eq!(json[1].denom, "b");
        Ok(())
    }
}
