use crate::songs::{check_pool, Song};
use anyhow::Result;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Draw `k` distinct songs from the pool, then shuffle them.
///
/// Both steps advance the same generator, so a run seeded once and drawn in
/// card order is reproducible end to end.
pub fn sample_songs<R: Rng + ?Sized>(pool: &[Song], k: usize, rng: &mut R) -> Vec<Song> {
    let k = k.min(pool.len());
    let mut picks: Vec<Song> = index::sample(rng, pool.len(), k)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();
    picks.shuffle(rng);
    picks
}

/// Sample `count` sets of `k` songs, one after another from the same generator.
pub fn sample_sets<R: Rng + ?Sized>(
    pool: &[Song],
    k: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<Song>>> {
    check_pool(pool)?;
    Ok((0..count).map(|_| sample_songs(pool, k, rng)).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::deck::SONGS_PER_CARD;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<Song> {
        (0..n).map(|i| Song::new(format!("Song {i}"))).collect()
    }

    #[test]
    fn same_seed_same_cards() {
        let pool = pool(50);
        let a = sample_sets(&pool, SONGS_PER_CARD, 30, &mut StdRng::seed_from_u64(42))
            .expect("can sample");
        let b = sample_sets(&pool, SONGS_PER_CARD, 30, &mut StdRng::seed_from_u64(42))
            .expect("can sample");
        assert_eq!(a, b);

        let c = sample_sets(&pool, SONGS_PER_CARD, 30, &mut StdRng::seed_from_u64(43))
            .expect("can sample");
        assert_ne!(a, c);
    }

    #[test]
    fn songs_within_a_set_are_distinct() {
        let pool = pool(12);
        let sets = sample_sets(&pool, SONGS_PER_CARD, 100, &mut StdRng::seed_from_u64(7))
            .expect("can sample");
        for set in sets {
            assert_eq!(set.len(), SONGS_PER_CARD);
            let titles: HashSet<&str> = set.iter().map(|s| s.title.as_str()).collect();
            assert_eq!(titles.len(), SONGS_PER_CARD);
        }
    }

    #[test]
    fn exact_pool_uses_every_song() {
        let pool = pool(8);
        let set = sample_songs(&pool, SONGS_PER_CARD, &mut StdRng::seed_from_u64(42));
        let mut titles: Vec<&str> = set.iter().map(|s| s.title.as_str()).collect();
        titles.sort();
        let mut expected: Vec<&str> = pool.iter().map(|s| s.title.as_str()).collect();
        expected.sort();
        assert_eq!(titles, expected);
    }

    #[test]
    fn fewer_cards_is_a_prefix_of_more_cards() {
        // the generator is never reset between cards
        let pool = pool(40);
        let short = sample_sets(&pool, SONGS_PER_CARD, 3, &mut StdRng::seed_from_u64(42))
            .expect("can sample");
        let long = sample_sets(&pool, SONGS_PER_CARD, 10, &mut StdRng::seed_from_u64(42))
            .expect("can sample");
        assert_eq!(short[..], long[..3]);
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool = pool(7);
        assert!(sample_sets(&pool, SONGS_PER_CARD, 1, &mut StdRng::seed_from_u64(42)).is_err());
    }
}
