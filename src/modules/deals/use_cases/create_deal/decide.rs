// Pure decision function for publishing a deal.
//
// Purpose
// - Normalize and validate a CreateDeal command and derive the discount percentage.
//
// Responsibilities
// - Trim text fields, upper-case the platform, drop a blank EAN.
// - Require title, platform, retailer and url after trimming.
// - Require finite prices, a strictly positive regular price and a representable cut.
// - Pin the market to FR / PHYSICAL.
// - Never perform input or output.

use crate::modules::deals::core::deal::{COUNTRY, FORMAT, NewDeal};
use crate::modules::deals::use_cases::create_deal::command::CreateDeal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("title, platform, retailer and url are required")]
    MissingFields,
    #[error("prices must be finite and the regular price positive")]
    BadPrices,
}

impl DecideError {
    pub fn code(&self) -> &'static str {
        match self {
            DecideError::MissingFields => "missing_fields",
            DecideError::BadPrices => "bad_prices",
        }
    }
}

/// Discount percentage, rounded half up. Negative when the price exceeds the regular price.
///
/// `None` when the percentage is not finite or does not fit an `i64`.
pub fn compute_cut(price_eur: f64, regular_eur: f64) -> Option<i64> {
    let cut = round_half_up(((regular_eur - price_eur) / regular_eur) * 100.0);
    let in_range = cut >= i64::MIN as f64 && cut < i64::MAX as f64;
    in_range.then_some(cut as i64)
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn decide_create(command: CreateDeal) -> Result<NewDeal, DecideError> {
    let title = command.title.trim().to_string();
    let platform = command.platform.trim().to_uppercase();
    let retailer = command.retailer.trim().to_string();
    let url = command.url.trim().to_string();

    if [&title, &platform, &retailer, &url]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(DecideError::MissingFields);
    }

    let (Some(price_eur), Some(regular_eur)) = (command.price_eur, command.regular_eur) else {
        return Err(DecideError::BadPrices);
    };
    if !price_eur.is_finite() || !regular_eur.is_finite() || regular_eur <= 0.0 {
        return Err(DecideError::BadPrices);
    }
    let cut = compute_cut(price_eur, regular_eur)
        .ok_or(DecideError::BadPrices)?;

    Ok(NewDeal {
        title,
        platform,
        retailer,
        url,
        price_eur,
        regular_eur,
        cut,
        country: COUNTRY.to_string(),
        format: FORMAT.to_string(),
        ean: command
            .ean
            .map(|ean| ean.trim().to_string())
            .filter(|ean| !ean.is_empty()),
        store_lat: command.store_lat,
        store_lng: command.store_lng,
    })
}
