// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use chrono::DateTime;
use initia_core::num::{parse_i64, parse_u64, Dec, Int};
use initia_core::proto::google::protobuf::Timestamp;
use initia_core::time;
use num_bigint::BigInt;
use proptest::prelude::*;

// years 0001 through 9999
const MIN_SECONDS: i64 = -62_135_596_800;
const MAX_SECONDS: i64 = 253_402_300_799;

proptest! {
    #[test]
    fn u64_decimal_strings_parse_exactly(value in any::<u64>()) {
        prop_assert_eq!(parse_u64("n", &value.to_string()), Ok(value));
    }

    #[test]
    fn i64_decimal_strings_parse_exactly(value in any::<i64>()) {
        prop_assert_eq!(parse_i64("n", &value.to_string()), Ok(value));
    }

    #[test]
    fn exponent_and_float_forms_are_rejected(
        mantissa in 1u32..1000,
        exponent in 1u32..20,
    ) {
        let exp = format!("{mantissa}e{exponent}");
        let float = format!("{mantissa}.0");
        prop_assert!(parse_u64("n", &exp).is_err());
        prop_assert!(parse_i64("n", &exp).is_err());
        prop_assert!(Int::parse("n", &exp).is_err());
        prop_assert!(Int::parse("n", &float).is_err());
        prop_assert!(Dec::parse("n", &exp).is_err());
    }

    #[test]
    fn int_text_is_canonical(digits in "[1-9][0-9]{0,60}", negative in any::<bool>()) {
        let text = if negative { format!("-{digits}") } else { digits };
        let int = Int::parse("n", &text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(int.to_string(), text);
    }

    #[test]
    fn dec_text_and_scaled_forms_agree(scaled in any::<i128>()) {
        let dec = Dec::from_scaled(BigInt::from(scaled));
        let text = dec.to_string();
        prop_assert_eq!(text.split_once('.').map(|(_, f)| f.len()), Some(18));
        prop_assert_eq!(Dec::parse("n", &text), Ok(dec.clone()));
        prop_assert_eq!(Dec::parse_scaled("n", &dec.to_scaled_string()), Ok(dec));
    }

    #[test]
    fn short_fractions_are_padded(whole in 0u64..1_000_000, fraction in "[0-9]{1,18}") {
        let dec = Dec::parse("n", &format!("{whole}.{fraction}"))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let expected = format!("{whole}.{fraction:0<18}");
        prop_assert_eq!(dec.to_string(), expected);
    }

    #[test]
    fn timestamps_survive_both_encodings(
        seconds in MIN_SECONDS..=MAX_SECONDS,
        nanos in 0u32..1_000_000_000,
    ) {
        let Some(instant) = DateTime::from_timestamp(seconds, nanos) else {
            return Err(TestCaseError::reject("out of range"));
        };
        let json = time::to_json(&instant);
        prop_assert!(json.ends_with('Z'));
        prop_assert_eq!(time::from_json("t", &json), Ok(instant));
        prop_assert_eq!(time::from_proto("t", time::to_proto(&instant)), Ok(instant));
    }

    #[test]
    fn out_of_range_nanos_are_rejected(
        seconds in 0i64..4_102_444_800,
        nanos in prop_oneof![i32::MIN..0, 1_000_000_000i32..=i32::MAX],
    ) {
        let ts = Timestamp { seconds, nanos };
        prop_assert!(time::from_proto("t", ts).is_err());
    }
}
