use crate::shared::core::normalize::normalize_opt;

pub const DEFAULT_MIN_DISCOUNT: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 999_999.0;

/// Raw query string parameters, all optional and untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDealsParams {
    pub q: Option<String>,
    pub min_discount: Option<String>,
    pub max_price: Option<String>,
}

impl ListDealsParams {
    /// Builds the parameters from decoded query pairs. The first value of a
    /// repeated key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "minDiscount" => &mut params.min_discount,
                "maxPrice" => &mut params.max_price,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Filters applied to the candidate set after it has been read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DealQuery {
    /// Normalized search text. `None` when absent or normalized to nothing.
    pub text: Option<String>,
    pub min_discount: f64,
    pub max_price: f64,
}

impl Default for DealQuery {
    fn default() -> Self {
        Self {
            text: None,
            min_discount: DEFAULT_MIN_DISCOUNT,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl From<ListDealsParams> for DealQuery {
    /// Malformed thresholds fall back to their defaults instead of failing the request.
    fn from(params: ListDealsParams) -> Self {
        let text = normalize_opt(params.q.as_deref());
        Self {
            text: (!text.is_empty()).then_some(text),
            min_discount: parse_threshold(params.min_discount.as_deref())
                .unwrap_or(DEFAULT_MIN_DISCOUNT),
            max_price: parse_threshold(params.max_price.as_deref())
                .unwrap_or(DEFAULT_MAX_PRICE),
        }
    }
}

fn parse_threshold(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
