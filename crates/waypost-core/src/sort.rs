//! Ordered selection over `(key, payload)` pairs.
//!
//! Networks and result sets are small (tens of vertices or paths), so both
//! sorts favour a simple, predictable shape over asymptotic speed.

/// Sort `items` by key, largest first.
///
/// Partition sort with a middle-index pivot: items whose key is less than the
/// pivot's go after it, everything else goes before it, and both halves are
/// sorted recursively. Worst case is O(n²).
///
/// The relative order of items with equal keys is **unspecified**. Callers
/// must not depend on it.
#[must_use]
pub fn sort_descending<K, T>(mut items: Vec<(K, T)>) -> Vec<(K, T)>
where
    K: PartialOrd + Copy,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = items.remove(items.len() / 2);
    let (lesser, greater_or_equal): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|(key, _)| *key < pivot.0);

    let mut sorted = sort_descending(greater_or_equal);
    sorted.push(pivot);
    sorted.extend(sort_descending(lesser));
    sorted
}

/// Sort `items` by key, smallest first.
///
/// The exact reverse of [`sort_descending`].
#[must_use]
pub fn sort_ascending<K, T>(items: Vec<(K, T)>) -> Vec<(K, T)>
where
    K: PartialOrd + Copy,
{
    let mut sorted = sort_descending(items);
    sorted.reverse();
    sorted
}

/// Sort `items` alphabetically by name, ignoring case.
///
/// Adjacent-swap sort that stops after the first pass with no swaps. Stable:
/// names that compare equal keep their input order.
pub fn sort_by_name_ascending<T>(items: &mut [(String, T)]) {
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if items[j].0.to_uppercase() > items[j + 1].0.to_uppercase() {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Copy, T>(items: &[(K, T)]) -> Vec<K> {
        items.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn empty_and_single() {
        let empty: Vec<(usize, &str)> = Vec::new();
        assert!(sort_descending(empty).is_empty());
        assert_eq!(sort_descending(vec![(3, "a")]), vec![(3, "a")]);
    }

    #[test]
    fn descending_with_duplicates() {
        let sorted = sort_descending(vec![(1, 'a'), (3, 'b'), (2, 'c'), (3, 'd'), (0, 'e')]);
        assert_eq!(keys(&sorted), vec![3, 3, 2, 1, 0]);
    }

    #[test]
    fn already_sorted_inputs() {
        let asc: Vec<(u32, ())> = (0..20).map(|k| (k, ())).collect();
        assert_eq!(keys(&sort_descending(asc)), (0..20).rev().collect::<Vec<_>>());

        let desc: Vec<(u32, ())> = (0..20).rev().map(|k| (k, ())).collect();
        assert_eq!(keys(&sort_descending(desc)), (0..20).rev().collect::<Vec<_>>());
    }

    #[test]
    fn float_keys() {
        let sorted = sort_descending(vec![(2.5, "x"), (10.0, "y"), (0.25, "z")]);
        assert_eq!(keys(&sorted), vec![10.0, 2.5, 0.25]);
    }

    #[test]
    fn ascending_is_reverse() {
        let sorted = sort_ascending(vec![(5, 'a'), (1, 'b'), (3, 'c')]);
        assert_eq!(keys(&sorted), vec![1, 3, 5]);
    }

    #[test]
    fn names_ignore_case() {
        let mut items = vec![
            ("monte brasil".to_string(), 1),
            ("Algar do Carvão".to_string(), 2),
            ("Sé Catedral".to_string(), 3),
            ("Biscoitos".to_string(), 4),
        ];
        sort_by_name_ascending(&mut items);
        let names: Vec<&str> = items.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Algar do Carvão", "Biscoitos", "monte brasil", "Sé Catedral"]
        );
    }

    #[test]
    fn names_sort_is_stable() {
        let mut items = vec![
            ("beta".to_string(), 1),
            ("Alpha".to_string(), 2),
            ("ALPHA".to_string(), 3),
        ];
        sort_by_name_ascending(&mut items);
        let payloads: Vec<i32> = items.iter().map(|(_, p)| *p).collect();
        assert_eq!(payloads, vec![2, 3, 1]);
    }

    #[test]
    fn names_empty_slice() {
        let mut items: Vec<(String, ())> = Vec::new();
        sort_by_name_ascending(&mut items);
        assert!(items.is_empty());
    }
}
