use rand::Rng;

use crate::catalog::model::{CategoryTable, ThreatRecord};
use crate::error::AnalysisError;

/// Smallest number of threats returned when the pool allows it.
pub const MIN_THREATS: usize = 3;

/// Largest number of threats returned.
pub const MAX_THREATS: usize = 5;

/// Pick a random subset of a category's threats.
///
/// The category's list is copied, shuffled, and cut to a length drawn
/// uniformly from `MIN_THREATS..=MAX_THREATS` (or the whole pool if it is
/// smaller). The catalog itself is never touched.
pub fn sample<R: Rng + ?Sized>(
    category: &str,
    table: &CategoryTable,
    rng: &mut R,
) -> Result<Vec<ThreatRecord>, AnalysisError> {
    let pool = table
        .get(category)
        .ok_or_else(|| AnalysisError::UnknownCategory(category.to_string()))?;

    let mut threats = pool.threats.clone();
    shuffle(&mut threats, rng);

    let count = rng.random_range(MIN_THREATS..=MAX_THREATS);
    threats.truncate(count);

    Ok(threats)
}

/// In-place Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn threat(id: &str) -> ThreatRecord {
        ThreatRecord {
            id: id.into(),
            name: format!("{id} name"),
            description: "d".into(),
            severity: "High".into(),
            mitigation: "m".into(),
        }
    }

    fn table_with(pool: usize) -> CategoryTable {
        let threats = (0..pool).map(|i| threat(&format!("T{i:02}"))).collect();
        [(
            "web",
            Category {
                keywords: vec!["website".into()],
                threats,
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn returns_three_to_five_from_large_pool() {
        let table = table_with(10);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let picked = sample("web", &table, &mut rng).unwrap();
            assert!((MIN_THREATS..=MAX_THREATS).contains(&picked.len()));
        }
    }

    #[test]
    fn every_count_in_range_is_reachable() {
        let table = table_with(10);
        let mut rng = StdRng::seed_from_u64(11);

        let counts: HashSet<usize> = (0..200)
            .map(|_| sample("web", &table, &mut rng).unwrap().len())
            .collect();

        assert_eq!(counts, HashSet::from([3, 4, 5]));
    }

    #[test]
    fn small_pool_returns_whole_pool() {
        let table = table_with(2);
        let mut rng = StdRng::seed_from_u64(1);

        let picked = sample("web", &table, &mut rng).unwrap();
        assert_eq!(picked.len(), 2);

        let ids: HashSet<&str> = picked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["T00", "T01"]));
    }

    #[test]
    fn empty_pool_returns_nothing() {
        let table = table_with(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample("web", &table, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn picks_are_distinct_members_of_the_pool() {
        let table = table_with(8);
        let pool: HashSet<String> = table
            .get("web")
            .unwrap()
            .threats
            .iter()
            .map(|t| t.id.clone())
            .collect();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let picked = sample("web", &table, &mut rng).unwrap();
            let ids: HashSet<String> = picked.iter().map(|t| t.id.clone()).collect();
            assert_eq!(ids.len(), picked.len());
            assert!(ids.is_subset(&pool));
        }
    }

    #[test]
    fn same_seed_gives_same_sample() {
        let table = table_with(10);

        let a = sample("web", &table, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sample("web", &table, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_vary() {
        let table = table_with(6);
        let mut rng = StdRng::seed_from_u64(5);

        let subsets: HashSet<Vec<String>> = (0..50)
            .map(|_| {
                sample("web", &table, &mut rng)
                    .unwrap()
                    .into_iter()
                    .map(|t| t.id)
                    .collect()
            })
            .collect();

        assert!(subsets.len() >= 2);
    }

    #[test]
    fn source_table_is_not_mutated() {
        let table = table_with(6);
        let before = table.clone();
        let mut rng = StdRng::seed_from_u64(9);

        sample("web", &table, &mut rng).unwrap();

        assert_eq!(table, before);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let table = table_with(3);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            sample("mobile", &table, &mut rng),
            Err(AnalysisError::UnknownCategory("mobile".into()))
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut StdRng::seed_from_u64(99));

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = StdRng::seed_from_u64(0);

        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![1];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![1]);
    }
}
