// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// Declares an enum encoded as an integer code in Amino and Protobuf and as
/// a `SCREAMING_CASE` name in Data.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value, in code order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Integer code used by Amino and Protobuf.
            pub const fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Name used by Data.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Looks up a value by integer code.
            pub fn from_code(code: i32) -> Result<Self, $crate::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err($crate::Error::MalformedInput(format!(
                        "unknown {} code {other}",
                        stringify!($name)
                    ))),
                }
            }

            /// Looks up a value by name.
            pub fn from_name(name: &str) -> Result<Self, $crate::Error> {
                match name {
                    $( $label => Ok($name::$variant), )+
                    other => Err($crate::Error::MalformedInput(format!(
                        "unknown {} name {other:?}",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Declares a polymorphic family: the enum, `From` impls for each variant,
/// its static [`Registry`](crate::registry::Registry) and the envelope-typed
/// [`Convertible`](crate::codec::Convertible) impl.
macro_rules! family {
    (
        $(#[$meta:meta])*
        $family:ident = $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $family {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        $(
            impl From<$ty> for $family {
                fn from(value: $ty) -> Self {
                    $family::$variant(value)
                }
            }
        )+

        impl $crate::registry::Family for $family {
            fn registry() -> &'static $crate::registry::Registry<Self> {
                static REGISTRY: ::once_cell::sync::Lazy<
                    $crate::registry::Registry<$family>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $crate::registry::Registry::new($label)
                        $( .register::<$ty>() )+
                });
                &REGISTRY
            }

            fn variant(&self) -> &dyn $crate::codec::Packable {
                match self {
                    $( $family::$variant(value) => value as &dyn $crate::codec::Packable, )+
                }
            }
        }

        impl $crate::codec::Convertible for $family {
            type Amino = $crate::codec::AminoAny;
            type Data = $crate::codec::DataAny;
            type Proto = $crate::proto::google::protobuf::Any;

            fn to_amino(&self) -> Result<Self::Amino, $crate::Error> {
                $crate::codec::Packable::amino_any(
                    $crate::registry::Family::variant(self),
                )
            }

            fn from_amino(amino: Self::Amino) -> Result<Self, $crate::Error> {
                <Self as $crate::registry::Family>::registry().decode_amino(amino)
            }

            fn to_data(&self) -> Result<Self::Data, $crate::Error> {
                $crate::codec::Packable::data_any(
                    $crate::registry::Family::variant(self),
                )
            }

            fn from_data(data: Self::Data) -> Result<Self, $crate::Error> {
                <Self as $crate::registry::Family>::registry().decode_data(data)
            }

            fn to_proto(&self) -> Result<Self::Proto, $crate::Error> {
                $crate::codec::Packable::pack_any(
                    $crate::registry::Family::variant(self),
                )
            }

            fn from_proto(proto: Self::Proto) -> Result<Self, $crate::Error> {
                <Self as $crate::registry::Family>::registry().decode_proto(&proto)
            }
        }
    };
}
