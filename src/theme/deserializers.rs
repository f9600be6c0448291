use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::schema::ThemeVariant;

/// A length in a theme document: either a bare number (pixels) or a
/// string with a unit suffix.
#[derive(Deserialize)]
#[serde(untagged)]
enum LengthToken {
    Number(f32),
    Unit(String),
}

fn suffixed(string: &str, suffix: &str) -> Option<f32> {
    string.strip_suffix(suffix)?.parse::<f32>().ok()
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthToken::deserialize(deserializer)? {
        LengthToken::Number(pixels) => Ok(px(pixels)),
        LengthToken::Unit(string) => match suffixed(&string, "px") {
            Some(pixels) => Ok(px(pixels)),
            None => Err(D::Error::custom("expected a number ending with 'px'")),
        },
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthToken::deserialize(deserializer)? {
        LengthToken::Number(pixels) => Ok(AbsoluteLength::Pixels(px(pixels))),
        LengthToken::Unit(string) => {
            if let Some(value) = suffixed(&string, "rem") {
                Ok(AbsoluteLength::Rems(rems(value)))
            } else if let Some(value) = suffixed(&string, "px") {
                Ok(AbsoluteLength::Pixels(px(value)))
            } else {
                Err(D::Error::custom(
                    "expected a number ending with 'rem' or 'px'",
                ))
            }
        }
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthToken::deserialize(deserializer)? {
        LengthToken::Number(pixels) => Ok(AbsoluteLength::Pixels(px(pixels)).into()),
        LengthToken::Unit(string) => {
            if let Some(value) = suffixed(&string, "%") {
                Ok(DefiniteLength::Fraction(value / 100.))
            } else if let Some(value) = suffixed(&string, "rem") {
                Ok(AbsoluteLength::Rems(rems(value)).into())
            } else if let Some(value) = suffixed(&string, "px") {
                Ok(AbsoluteLength::Pixels(px(value)).into())
            } else {
                Err(D::Error::custom(
                    "expected a number ending with '%', 'rem' or 'px'",
                ))
            }
        }
    }
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(string) => Ok(SmallVec::from_buf([string])),
        OneOrMany::Many(list) if list.is_empty() => Err(D::Error::custom("list can't be empty.")),
        OneOrMany::Many(list) => Ok(list),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants = SmallVec::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(variants)
}
