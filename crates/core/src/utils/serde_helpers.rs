//! Serde utility helpers for case-insensitive enum names

/// Macro to implement case-insensitive name lookup and deserialization for
/// fieldless enums.
///
/// Each variant takes a canonical name plus optional aliases. The macro
/// generates `from_name`, a `NAMES` table of canonical names, and a
/// `Deserialize` impl built on `from_name`.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_names!(
///     MyEnum,
///     Variant1 => "variant1" | "v1",
///     Variant2 => "variant2"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_names {
    ($enum_type:ty, $($variant:ident => $canonical:literal $(| $alias:literal)*),+ $(,)?) => {
        impl $enum_type {
            /// Canonical names accepted by `from_name`
            pub const NAMES: &'static [&'static str] = &[$($canonical),+];

            /// Resolve a case-insensitive name or alias to a variant
            pub fn from_name(name: &str) -> Option<Self> {
                match name.trim().to_lowercase().as_str() {
                    $(
                        $canonical $(| $alias)* => Some(Self::$variant),
                    )+
                    _ => None,
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_name(&s).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        Self::NAMES.join(", ")
                    ))
                })
            }
        }
    };
}
