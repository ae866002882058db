/// Generates a `FromStr` impl for a `ValueEnum`, matching names and aliases
/// case-insensitively and listing the accepted names on failure.
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $error_reason:expr) => {
        impl FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, $crate::primitives::ConfigError> {
                let variants = Self::value_variants();
                if let Some(found) = variants.iter().find(|variant| {
                    variant
                        .to_possible_value()
                        .is_some_and(|value| value.matches(s, true))
                }) {
                    return Ok(*found);
                }

                let accepted: Vec<String> = variants
                    .iter()
                    .filter_map(|variant| variant.to_possible_value())
                    .map(|value| value.get_name().to_string())
                    .collect();

                Err($crate::primitives::ConfigError::ParseError {
                    value: s.to_string(),
                    reason: format!("{} (expected one of: {})", $error_reason, accepted.join(", ")),
                })
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
