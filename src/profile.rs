//! Formatting profiles: the punctuation, symbols, grouping sizes and layout
//! pattern indices the renderers consult.
//!
//! The codec only ever borrows a profile; it never builds or mutates one.
//! A handful of built-in profiles ship as embedded TOML data and are parsed
//! once into a process-wide registry. Anything beyond these is the caller's
//! business to construct.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Error type for built-in profile lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// The named profile is not among the built-ins.
    NotFound(String),
    /// The embedded profile data failed to parse.
    ParseError(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound(name) => write!(f, "Profile not found: {}", name),
            ProfileError::ParseError(msg) => write!(f, "Error parsing profile data: {}", msg),
        }
    }
}

impl std::error::Error for ProfileError {}

type Result<T> = std::result::Result<T, ProfileError>;

/// Per-call snapshot of everything locale-shaped the codec needs: sign and
/// separator strings, group sizes, currency/percent symbols and layout
/// pattern indices, and the symbols used for non-finite values.
///
/// Group size tables are read left to right starting at the decimal point;
/// the last entry repeats indefinitely and an entry of zero stops grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattingProfile {
    pub negative_sign: String,
    pub positive_sign: String,

    pub decimal_separator: String,
    pub group_separator: String,
    pub group_sizes: Vec<u32>,
    pub number_decimal_digits: i32,
    /// Index into the negative number layout table (`(#)`, `-#`, ..).
    pub number_negative_pattern: usize,

    pub currency_symbol: String,
    pub currency_decimal_separator: String,
    pub currency_group_separator: String,
    pub currency_group_sizes: Vec<u32>,
    pub currency_decimal_digits: i32,
    pub currency_positive_pattern: usize,
    pub currency_negative_pattern: usize,

    pub percent_symbol: String,
    pub per_mille_symbol: String,
    pub percent_decimal_separator: String,
    pub percent_group_separator: String,
    pub percent_group_sizes: Vec<u32>,
    pub percent_decimal_digits: i32,
    pub percent_positive_pattern: usize,
    pub percent_negative_pattern: usize,

    pub nan_symbol: String,
    pub positive_infinity_symbol: String,
    pub negative_infinity_symbol: String,
}

impl Default for FormattingProfile {
    /// The invariant profile: ASCII punctuation, `¤` currency symbol,
    /// three-digit grouping.
    fn default() -> Self {
        FormattingProfile {
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),

            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_sizes: vec![3],
            number_decimal_digits: 2,
            number_negative_pattern: 1,

            currency_symbol: "\u{a4}".to_string(),
            currency_decimal_separator: ".".to_string(),
            currency_group_separator: ",".to_string(),
            currency_group_sizes: vec![3],
            currency_decimal_digits: 2,
            currency_positive_pattern: 0,
            currency_negative_pattern: 0,

            percent_symbol: "%".to_string(),
            per_mille_symbol: "\u{2030}".to_string(),
            percent_decimal_separator: ".".to_string(),
            percent_group_separator: ",".to_string(),
            percent_group_sizes: vec![3],
            percent_decimal_digits: 2,
            percent_positive_pattern: 0,
            percent_negative_pattern: 0,

            nan_symbol: "NaN".to_string(),
            positive_infinity_symbol: "Infinity".to_string(),
            negative_infinity_symbol: "-Infinity".to_string(),
        }
    }
}

struct ProfileRegistry {
    profiles: HashMap<String, FormattingProfile>,
}

static REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();

impl ProfileRegistry {
    fn new() -> Self {
        let mut registry = ProfileRegistry {
            profiles: HashMap::new(),
        };
        if let Err(e) = registry.load_embedded_data() {
            // Continue with an empty registry; lookups will report NotFound.
            eprintln!("Failed to load embedded profile data: {}", e);
        }
        registry
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let profiles_toml = include_str!("profiles/builtin.toml");
        let parsed: toml::Value =
            toml::from_str(profiles_toml).map_err(|e| ProfileError::ParseError(e.to_string()))?;

        let table = parsed
            .as_table()
            .ok_or_else(|| ProfileError::ParseError("Root is not a table".to_string()))?;

        for (name, value) in table {
            let profile = parse_profile(name, value)?;
            self.profiles.insert(name.clone(), profile);
        }
        Ok(())
    }
}

/// Parse one profile table, inheriting from the invariant defaults for
/// every key the table leaves out.
fn parse_profile(name: &str, value: &toml::Value) -> Result<FormattingProfile> {
    let table = value
        .as_table()
        .ok_or_else(|| ProfileError::ParseError(format!("{} is not a table", name)))?;

    let mut profile = FormattingProfile::default();

    let get_str = |key: &str, target: &mut String| -> Result<()> {
        if let Some(v) = table.get(key) {
            *target = v
                .as_str()
                .ok_or_else(|| ProfileError::ParseError(format!("{}.{} is not a string", name, key)))?
                .to_string();
        }
        Ok(())
    };
    let get_usize = |key: &str, target: &mut usize| -> Result<()> {
        if let Some(v) = table.get(key) {
            *target = v.as_integer().filter(|&n| n >= 0).ok_or_else(|| {
                ProfileError::ParseError(format!("{}.{} is not a non-negative integer", name, key))
            })? as usize;
        }
        Ok(())
    };
    let get_i32 = |key: &str, target: &mut i32| -> Result<()> {
        if let Some(v) = table.get(key) {
            *target = v.as_integer().filter(|&n| n >= 0).ok_or_else(|| {
                ProfileError::ParseError(format!("{}.{} is not a non-negative integer", name, key))
            })? as i32;
        }
        Ok(())
    };
    let get_sizes = |key: &str, target: &mut Vec<u32>| -> Result<()> {
        if let Some(v) = table.get(key) {
            let arr = v.as_array().ok_or_else(|| {
                ProfileError::ParseError(format!("{}.{} is not an array", name, key))
            })?;
            let mut sizes = Vec::with_capacity(arr.len());
            for entry in arr {
                let n = entry.as_integer().filter(|&n| n >= 0).ok_or_else(|| {
                    ProfileError::ParseError(format!("{}.{} holds a bad group size", name, key))
                })?;
                sizes.push(n as u32);
            }
            *target = sizes;
        }
        Ok(())
    };

    get_str("negative_sign", &mut profile.negative_sign)?;
    get_str("positive_sign", &mut profile.positive_sign)?;
    get_str("decimal_separator", &mut profile.decimal_separator)?;
    get_str("group_separator", &mut profile.group_separator)?;
    get_sizes("group_sizes", &mut profile.group_sizes)?;
    get_i32("number_decimal_digits", &mut profile.number_decimal_digits)?;
    get_usize("number_negative_pattern", &mut profile.number_negative_pattern)?;

    get_str("currency_symbol", &mut profile.currency_symbol)?;
    get_str(
        "currency_decimal_separator",
        &mut profile.currency_decimal_separator,
    )?;
    get_str(
        "currency_group_separator",
        &mut profile.currency_group_separator,
    )?;
    get_sizes("currency_group_sizes", &mut profile.currency_group_sizes)?;
    get_i32(
        "currency_decimal_digits",
        &mut profile.currency_decimal_digits,
    )?;
    get_usize(
        "currency_positive_pattern",
        &mut profile.currency_positive_pattern,
    )?;
    get_usize(
        "currency_negative_pattern",
        &mut profile.currency_negative_pattern,
    )?;

    get_str("percent_symbol", &mut profile.percent_symbol)?;
    get_str("per_mille_symbol", &mut profile.per_mille_symbol)?;
    get_str(
        "percent_decimal_separator",
        &mut profile.percent_decimal_separator,
    )?;
    get_str(
        "percent_group_separator",
        &mut profile.percent_group_separator,
    )?;
    get_sizes("percent_group_sizes", &mut profile.percent_group_sizes)?;
    get_i32("percent_decimal_digits", &mut profile.percent_decimal_digits)?;
    get_usize(
        "percent_positive_pattern",
        &mut profile.percent_positive_pattern,
    )?;
    get_usize(
        "percent_negative_pattern",
        &mut profile.percent_negative_pattern,
    )?;

    get_str("nan_symbol", &mut profile.nan_symbol)?;
    get_str(
        "positive_infinity_symbol",
        &mut profile.positive_infinity_symbol,
    )?;
    get_str(
        "negative_infinity_symbol",
        &mut profile.negative_infinity_symbol,
    )?;

    Ok(profile)
}

fn registry() -> &'static ProfileRegistry {
    REGISTRY.get_or_init(ProfileRegistry::new)
}

/// Fetch a built-in profile by name (`"en-US"`, `"de-DE"`, `"sv-SE"`,
/// `"en-IN"`, or `"invariant"` for the defaults).
///
/// # Examples
/// ```
/// use numstr::profile;
///
/// let en_us = profile::builtin("en-US").unwrap();
/// assert_eq!(en_us.currency_symbol, "$");
/// ```
pub fn builtin(name: &str) -> Result<FormattingProfile> {
    if name == "invariant" {
        return Ok(FormattingProfile::default());
    }
    registry()
        .profiles
        .get(name)
        .cloned()
        .ok_or_else(|| ProfileError::NotFound(name.to_string()))
}

/// Names of every built-in profile, the invariant one included.
pub fn builtin_names() -> Vec<String> {
    let mut names: Vec<String> = registry().profiles.keys().cloned().collect();
    names.push("invariant".to_string());
    names.sort();
    names
}
