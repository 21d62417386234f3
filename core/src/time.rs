// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Timestamp field rules.
//!
//! JSON carries RFC 3339 in UTC with a `Z` suffix and as many sub-second
//! digits as needed to round-trip nanoseconds exactly. Protobuf carries
//! `google.protobuf.Timestamp`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::proto::google::protobuf::Timestamp;
use crate::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Renders a timestamp for JSON.
pub fn to_json(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an RFC 3339 timestamp, normalizing the offset to UTC.
///
/// Leap seconds (`:60`) are rejected: protobuf cannot carry them.
pub fn from_json(
    field: &'static str,
    text: &str,
) -> Result<DateTime<Utc>, Error> {
    let time = DateTime::parse_from_rfc3339(text)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| {
            Error::malformed(format!("{field}: {err}: {text:?}"))
        })?;
    if time.timestamp_subsec_nanos() >= NANOS_PER_SECOND {
        return Err(Error::malformed(format!(
            "{field}: leap second not supported: {text:?}"
        )));
    }
    Ok(time)
}

/// Converts a timestamp to its protobuf message.
///
/// A leap second built in code is folded into the following second.
pub fn to_proto(time: &DateTime<Utc>) -> Timestamp {
    let subsec = time.timestamp_subsec_nanos();
    let carry = i64::from(subsec / NANOS_PER_SECOND);
    Timestamp {
        seconds: time.timestamp() + carry,
        // below 1e9, fits i32
        nanos: (subsec % NANOS_PER_SECOND) as i32,
    }
}

/// Converts a protobuf timestamp, rejecting nanos outside `0..1e9` and
/// seconds outside the representable range.
pub fn from_proto(
    field: &'static str,
    ts: Timestamp,
) -> Result<DateTime<Utc>, Error> {
    let nanos = u32::try_from(ts.nanos)
        .ok()
        .filter(|nanos| *nanos < NANOS_PER_SECOND)
        .ok_or_else(|| {
            Error::malformed(format!(
                "{field}: nanos out of range: {}",
                ts.nanos
            ))
        })?;
    DateTime::from_timestamp(ts.seconds, nanos).ok_or_else(|| {
        Error::malformed(format!(
            "{field}: seconds out of range: {}",
            ts.seconds
        ))
    })
}

/// [`from_json`] for optional fields.
pub(crate) fn from_json_opt(
    field: &'static str,
    text: Option<&str>,
) -> Result<Option<DateTime<Utc>>, Error> {
    text.map(|text| from_json(field, text)).transpose()
}

/// [`from_proto`] for fields the message must carry.
pub(crate) fn from_proto_required(
    field: &'static str,
    ts: Option<Timestamp>,
) -> Result<DateTime<Utc>, Error> {
    from_proto(field, crate::codec::required(field, ts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_renders_without_fraction() -> Result<(), Error> {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert_eq!(to_json(&epoch), "1970-01-01T00:00:00Z");
        assert_eq!(from_json("t", "1970-01-01T00:00:00Z")?, epoch);
        assert_eq!(to_proto(&epoch), Timestamp { seconds: 0, nanos: 0 });
        Ok(())
    }

    #[test]
    fn nanoseconds_survive() -> Result<(), Error> {
        let text = "2023-05-01T12:30:45.123456789Z";
        let time = from_json("t", text)?;
        assert_eq!(to_json(&time), text);
        assert_eq!(from_proto("t", to_proto(&time))?, time);
        Ok(())
    }

    #[test]
    fn offsets_normalize_to_utc() -> Result<(), Error> {
        let time = from_json("t", "2023-05-01T14:30:45+02:00")?;
        assert_eq!(to_json(&time), "2023-05-01T12:30:45Z");
        Ok(())
    }

    #[test]
    fn leap_second_text_is_rejected() {
        assert!(matches!(
            from_json("t", "2016-12-31T23:59:60.5Z"),
            Err(Error::MalformedInput(msg)) if msg.contains("leap second")
        ));
    }

    #[test]
    fn leap_second_value_folds_into_next_second() -> Result<(), Error> {
        let leap = chrono::NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|date| date.and_hms_nano_opt(23, 59, 59, 1_500_000_000))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| Error::malformed("leap second out of range"))?;
        let proto = to_proto(&leap);
        assert_eq!(
            proto,
            Timestamp {
                seconds: 1_483_228_800,
                nanos: 500_000_000
            }
        );
        let back = from_proto("t", proto)?;
        assert_eq!(to_json(&back), "2017-01-01T00:00:00.500Z");
        Ok(())
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(from_json("t", "yesterday"), Err(Error::MalformedInput(_))));
        for nanos in [-1, 1_000_000_000] {
            assert!(matches!(
                from_proto("t", Timestamp { seconds: 0, nanos }),
                Err(Error::MalformedInput(_))
            ));
        }
        assert!(matches!(
            from_proto_required("submit_time", None),
            Err(Error::MalformedInput(msg)) if msg.contains("submit_time")
        ));
    }
}
