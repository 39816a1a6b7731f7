/// Deterministically sort items by a key, preserving input order on ties.
pub fn stable_sorted<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted: Vec<T> = items.into_iter().collect();
    sorted.sort_by_cached_key(key);
    sorted
}
