///
///
/// The `rfc_enum` declares an enum whose variants carry both a registry code
/// and a canonical name. The generated type implements [`TryFrom`] for the
/// code and [`std::str::FromStr`] for the name.
///
/// # Example
/// ```ignore
/// rfc_enum!{
///     [Eq, PartialEq, Debug]
///     (pub) E: u8;
///     A(0, "a"), B(1, "b"),
/// };
/// # fn main() {
/// #   debug_assert_eq!(E::try_from(0).unwrap(), E::A);
/// #   debug_assert_eq!("b".parse::<E>().unwrap(), E::B);
/// #   debug_assert_eq!(E::A.name(), "a");
/// # }
/// ```
/// This macro will be expanded to:
/// ```ignore
/// #[repr(u8)]
/// #[derive(Eq, PartialEq, Debug)]
/// pub enum E {
///     A = 0,
///     B = 1,
/// }
/// impl E {
///     pub const ALL: &'static [E] = &[E::A, E::B];
///     pub fn name(&self) -> &'static str {
///         match self {
///             Self::A => "a",
///             Self::B => "b",
///         }
///     }
/// }
/// impl TryFrom<u8> for E {
///     type Error = SelectError;
///     fn try_from(val: u8) -> Result<Self, Self::Error> {
///         match val {
///             0 => Ok(Self::A),
///             1 => Ok(Self::B),
///             _ => Err(SelectError::UnknownCode { kind: "E", value: u64::from(val) }),
///         }
///     }
/// }
/// // plus the matching `FromStr` impl over the names
/// ```
macro_rules! rfc_enum {
    (
        $([$($derive_traits:ident),+])?
        $(($visibility:vis))? $name:ident : $val_t:ident;
        $($keys:ident($vals:literal, $names:literal)),* $(,)?
    ) => {

        #[allow(unused)]
        #[repr($val_t)]
        $(#[derive($($derive_traits),+)])?
        $($visibility)? enum $name {
            $($keys = $vals,)*
        }

        #[allow(unused)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$keys),*];

            /// Canonical name of the variant.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$keys => $names,)*
                }
            }
        }

        impl TryFrom<$val_t> for $name {
            type Error = crate::error::SelectError;
            fn try_from(val: $val_t) -> ::core::result::Result<Self, Self::Error> {
                match val {
                    $($vals => ::core::result::Result::Ok(Self::$keys),)*
                    _ => ::core::result::Result::Err(crate::error::SelectError::UnknownCode {
                        kind: stringify!($name),
                        value: u64::from(val),
                    }),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::SelectError;
            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($names => ::core::result::Result::Ok(Self::$keys),)*
                    _ => ::core::result::Result::Err(crate::error::SelectError::UnknownName {
                        kind: stringify!($name),
                        name: s.to_owned(),
                    }),
                }
            }
        }

    };
}
