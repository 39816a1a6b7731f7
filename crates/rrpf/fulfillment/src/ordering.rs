use rrpf_canonical::stable_sorted;

/// Deterministic row ordering for engines.
///
/// Same contract as [`rrpf_canonical::stable_sorted`]: items are ordered by
/// `key`, ties keep their input order.
pub fn stable_order<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    stable_sorted(items, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_key_and_keeps_ties() {
        let rows = vec![("b", 1), ("a", 2), ("b", 0), ("a", 1)];
        let ordered = stable_order(rows, |row| row.0);
        assert_eq!(ordered, vec![("a", 2), ("a", 1), ("b", 1), ("b", 0)]);
    }
}
