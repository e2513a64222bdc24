use std::future::Future;

/// Performs a binary search from `min` to `max` inclusive to find the index with the greatest
/// value. If no values are found, `None` is returned.
pub(crate) async fn binary_search_greatest<F, V>(
    min: usize,
    max: usize,
    mut f: impl FnMut(usize) -> F,
) -> crate::result::Result<Option<usize>>
where
    F: Future<Output = crate::result::Result<Option<V>>>,
    V: PartialOrd + Clone,
{
    let mut low = min;
    let mut low_value = f(low).await?;
    if low_value.is_none() {
        let original_low = low;
        low += 1;
        let mut high = max + 1;
        while low < high {
            let mid = low + (high - low) / 2;
            match f(mid).await? {
                Some(_) => high = mid,
                None => low = mid + 1,
            };
        }
        if low != original_low {
            low_value = f(low).await?;
        }
    }

    if low_value.is_none() {
        return Ok(None);
    }

    let mut high = max + 1;
    while low < high {
        let mid = low + (high - low) / 2;

        match f(mid).await? {
            None => {
                high = mid;
                continue;
            }
            Some(mid_value) => {
                if &mid_value < low_value.as_ref().unwrap() {
                    high = mid;
                    continue;
                }
            }
        }

        low = mid + 1;
    }

    Ok(Some(low - 1))
}
