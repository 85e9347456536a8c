//! Request extractors whose rejections are rendered as the app's JSON errors.

use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Deserializer};

use crate::Error;

/// Like [axum::Json], but a rejected body becomes an [Error] so the client
/// always gets the standard error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Like [axum::extract::Path], but a parameter that does not parse becomes
/// [Error::NotFound].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct IdPath<T>(pub T);

/// Like [axum::extract::Query], but a rejected query string becomes
/// [Error::BadRequest].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);

// The web UI sends IDs taken from JSON object keys, so they may arrive as
// strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    String(String),
}

impl TryFrom<IntOrString> for i64 {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(value) => Ok(value),
            IntOrString::String(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Wrong value {value}, can not parse to i64")),
        }
    }
}

/// Deserialize an optional integer that may be encoded as a JSON number or a
/// numeric string. `null` and a missing field both give `None`.
pub fn deserialize_optional_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(value) => i64::try_from(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserialize an integer that may be encoded as a JSON number or a numeric
/// string.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    i64::try_from(IntOrString::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}
