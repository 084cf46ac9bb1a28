// In-memory pass over the store's bounded candidate set.
//
// The store narrows by market and recency. Substring and threshold filters need
// the full values, so they run here, followed by a stable sort on the cut.

use crate::modules::deals::core::deal::Deal;
use crate::modules::deals::use_cases::list_deals::query::DealQuery;
use crate::shared::core::normalize::normalize;

/// Maximum number of recent deals read from the store per request.
pub const CANDIDATE_LIMIT: usize = 300;
/// Maximum number of deals returned to the caller.
pub const RESULT_LIMIT: usize = 100;

pub fn filter_and_rank(candidates: Vec<Deal>, query: &DealQuery) -> Vec<Deal> {
    let mut deals: Vec<Deal> = candidates
        .into_iter()
        .filter(|deal| match &query.text {
            Some(text) => normalize(&deal.title).contains(text.as_str()),
            None => true,
        })
        .filter(|deal| deal.cut_or_zero() as f64 >= query.min_discount)
        .filter(|deal| deal.price_or_zero() <= query.max_price)
        .collect();

    deals.sort_by(|a, b| b.cut_or_zero().cmp(&a.cut_or_zero()));
    deals.truncate(RESULT_LIMIT);
    deals
}
