// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Well-known types from the `google.protobuf` package.

/// Types of the `google.protobuf` package.
pub mod protobuf {
    /// A serialized message together with the URL describing its type.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Any {
        /// Slash-delimited type path, e.g.
        /// `/cosmos.gov.v1beta1.TextProposal`.
        #[prost(string, tag = "1")]
        pub type_url: ::prost::alloc::string::String,
        /// Binary encoding of the message named by `type_url`.
        #[prost(bytes = "vec", tag = "2")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }

    /// A point in time independent of any time zone, as seconds and
    /// nanoseconds since the Unix epoch.
    #[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
    pub struct Timestamp {
        /// Seconds since the Unix epoch.
        #[prost(int64, tag = "1")]
        pub seconds: i64,
        /// Non-negative sub-second part, in `0..1_000_000_000`.
        #[prost(int32, tag = "2")]
        pub nanos: i32,
    }
}
