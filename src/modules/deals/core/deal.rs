use serde::{Deserialize, Serialize};

/// Country every deal handled by this service belongs to.
pub const COUNTRY: &str = "FR";
/// Only physical editions are listed.
pub const FORMAT: &str = "PHYSICAL";

/// The exact-match scope the store narrows candidates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    pub country: &'static str,
    pub format: &'static str,
}

impl Market {
    pub const FR_PHYSICAL: Market = Market {
        country: COUNTRY,
        format: FORMAT,
    };

    pub fn contains(&self, country: &str, format: &str) -> bool {
        self.country == country && self.format == format
    }
}

/// A deal as persisted by the store.
///
/// Prices and the cut are optional on read: records written by other tools may
/// lack them, and the reader treats missing values as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub retailer: String,
    pub url: String,
    #[serde(default)]
    pub price_eur: Option<f64>,
    #[serde(default)]
    pub regular_eur: Option<f64>,
    #[serde(default)]
    pub cut: Option<i64>,
    pub country: String,
    pub format: String,
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub store_lat: Option<f64>,
    #[serde(default)]
    pub store_lng: Option<f64>,
    pub created_at: i64,
}

impl Deal {
    pub fn cut_or_zero(&self) -> i64 {
        self.cut.unwrap_or(0)
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price_eur.unwrap_or(0.0)
    }
}

/// A validated deal ready to be persisted. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeal {
    pub title: String,
    pub platform: String,
    pub retailer: String,
    pub url: String,
    pub price_eur: f64,
    pub regular_eur: f64,
    pub cut: i64,
    pub country: String,
    pub format: String,
    pub ean: Option<String>,
    pub store_lat: Option<f64>,
    pub store_lng: Option<f64>,
}

impl NewDeal {
    pub fn into_deal(self, id: String, created_at: i64) -> Deal {
        Deal {
            id,
            title: self.title,
            platform: self.platform,
            retailer: self.retailer,
            url: self.url,
            price_eur: Some(self.price_eur),
            regular_eur: Some(self.regular_eur),
            cut: Some(self.cut),
            country: self.country,
            format: self.format,
            ean: self.ean,
            store_lat: self.store_lat,
            store_lng: self.store_lng,
            created_at,
        }
    }
}
