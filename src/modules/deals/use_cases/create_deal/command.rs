// Typed intermediate for a deal submission.
//
// Purpose
// - Turn an arbitrary JSON body into a CreateDeal command before any business rule runs.
//
// Responsibilities
// - Coerce scalar text fields to strings, leave everything else empty.
// - Read prices from numbers or numeric strings. Anything else is absent.
//   Number literals beyond the f64 range read as infinite.
// - Keep coordinates only when they are JSON numbers.
// - Reject bodies that are not a JSON object.

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::value::RawValue;

use crate::modules::deals::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateDeal {
    pub title: String,
    pub platform: String,
    pub retailer: String,
    pub url: String,
    pub price_eur: Option<f64>,
    pub regular_eur: Option<f64>,
    pub ean: Option<String>,
    pub store_lat: Option<f64>,
    pub store_lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Field {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl Field {
    /// `None` for a number literal that does not fit an f64.
    fn read(raw: &RawValue) -> Option<Field> {
        serde_json::from_str(raw.get()).ok()
    }

    fn text(raw: Option<&RawValue>) -> String {
        match raw.and_then(Field::read) {
            Some(Field::Text(text)) => text,
            Some(Field::Number(number)) => number.to_string(),
            Some(Field::Flag(true)) => "true".to_string(),
            _ => String::new(),
        }
    }

    fn number(raw: Option<&RawValue>) -> Option<f64> {
        let raw = raw?;
        match Field::read(raw) {
            Some(Field::Number(number)) => Some(number),
            Some(Field::Text(text)) => text.trim().parse().ok(),
            Some(_) => None,
            None => raw.get().parse().ok(),
        }
    }

    fn coordinate(raw: Option<&RawValue>) -> Option<f64> {
        match raw.and_then(Field::read) {
            Some(Field::Number(number)) => Some(number),
            _ => None,
        }
    }
}

/// Every member is kept as raw JSON so a number literal out of f64 range does not
/// fail the whole body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDealBody {
    title: Option<Box<RawValue>>,
    platform: Option<Box<RawValue>>,
    retailer: Option<Box<RawValue>>,
    url: Option<Box<RawValue>>,
    price_eur: Option<Box<RawValue>>,
    regular_eur: Option<Box<RawValue>>,
    ean: Option<Box<RawValue>>,
    store_lat: Option<Box<RawValue>>,
    store_lng: Option<Box<RawValue>>,
}

impl From<CreateDealBody> for CreateDeal {
    fn from(body: CreateDealBody) -> Self {
        let ean = Field::text(body.ean.as_deref());
        Self {
            title: Field::text(body.title.as_deref()),
            platform: Field::text(body.platform.as_deref()),
            retailer: Field::text(body.retailer.as_deref()),
            url: Field::text(body.url.as_deref()),
            price_eur: Field::number(body.price_eur.as_deref()),
            regular_eur: Field::number(body.regular_eur.as_deref()),
            ean: (!ean.is_empty()).then_some(ean),
            store_lat: Field::coordinate(body.store_lat.as_deref()),
            store_lng: Field::coordinate(body.store_lng.as_deref()),
        }
    }
}

/// Parses a request body. An empty body reads as an empty object.
pub fn parse_payload(payload: &[u8]) -> Result<CreateDeal, ApplicationError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateDeal::default());
    }
    let body: CreateDealBody = serde_json::from_slice(payload)
        .map_err(|err| ApplicationError::InvalidBody(err.to_string()))?;
    Ok(body.into())
}
