use crate::domain::model::{Product, RatedItem};

pub const DEFAULT_MIN_RATING: f64 = 4.0;

/// Items rated at least [`DEFAULT_MIN_RATING`], in input order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    filter_by_min_rating(items, DEFAULT_MIN_RATING)
}

pub fn filter_by_min_rating(items: &[RatedItem], threshold: f64) -> Vec<RatedItem> {
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= threshold)
        .cloned()
        .collect();
    tracing::debug!(
        "Kept {} of {} items with rating >= {}",
        kept.len(),
        items.len(),
        threshold
    );
    kept
}

/// Flattens any number of sequences one level, keeping call order.
pub fn concatenate_arrays<T, I>(arrays: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    arrays.into_iter().flatten().collect()
}

/// Variadic form of [`concatenate_arrays`]: `concat_arrays![vec![1, 2], vec![3]]`.
#[macro_export]
macro_rules! concat_arrays {
    () => {
        ::std::vec::Vec::new()
    };
    ($($array:expr),+ $(,)?) => {{
        let mut out = ::std::vec::Vec::new();
        $(out.extend($array);)+
        out
    }};
}

/// The product with the strictly greatest price; the first one seen wins ties.
/// Returns `None` for an empty slice.
pub fn most_expensive_product(products: &[Product]) -> Option<&Product> {
    let mut iter = products.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |max, current| {
        if current.price > max.price {
            current
        } else {
            max
        }
    }))
}
