//! Picks the next country to ask about and builds its multiple-choice question.
//!
//! Selection is a pure function of the active set, the progress book, the
//! recently-asked queue and the random source handed in.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::QuizError;
use crate::model::{
    ActiveSet, CountryRecord, Dataset, ProgressBook, Question, QuizSettings, RecentlyAsked,
};

/// The chosen country together with the updated recency queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub country: CountryRecord,
    pub recent: RecentlyAsked,
    /// Every weak candidate had been asked recently, so the queue was reset.
    pub fell_back: bool,
}

/// The `k` active countries with the fewest points, weakest first.
///
/// Ties keep active-set order.
#[must_use]
pub fn weak_candidates<'a>(
    active: &'a ActiveSet,
    progress: &ProgressBook,
    k: usize,
) -> Vec<&'a CountryRecord> {
    let mut ranked: Vec<&CountryRecord> = active.members().iter().collect();
    ranked.sort_by_key(|record| progress.points(record.country()));
    ranked.truncate(k);
    ranked
}

/// Choose the next country, biased toward weak ones and away from recent ones.
///
/// # Errors
///
/// Returns `QuizError::EmptyActiveSet` if there is nothing to ask.
pub fn pick_country<R: Rng + ?Sized>(
    active: &ActiveSet,
    progress: &ProgressBook,
    mut recent: RecentlyAsked,
    k: usize,
    rng: &mut R,
) -> Result<Pick, QuizError> {
    let weak = weak_candidates(active, progress, k.max(1));
    let fresh: Vec<&CountryRecord> = weak
        .iter()
        .copied()
        .filter(|record| !recent.contains(record.country()))
        .collect();

    let fell_back = fresh.is_empty();
    let pool = if fell_back { &weak } else { &fresh };
    let chosen = (*pool.choose(rng).ok_or(QuizError::EmptyActiveSet)?).clone();

    if fell_back {
        recent.reset_to(chosen.country());
    } else {
        recent.push(chosen.country());
    }

    Ok(Pick {
        country: chosen,
        recent,
        fell_back,
    })
}

/// Build the question for `target`: its capital plus distinct wrong capitals,
/// taken from the first `pool_size` other countries in dataset order.
///
/// # Errors
///
/// Returns `QuizError::InsufficientDistractors` when the pool cannot supply
/// `distractor_count` capitals different from the answer and from each other.
pub fn build_question<R: Rng + ?Sized>(
    target: &CountryRecord,
    dataset: &Dataset,
    pool_size: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let mut seen = HashSet::from([target.capital()]);
    let mut pool: Vec<&str> = dataset
        .records()
        .iter()
        .filter(|record| record.country() != target.country())
        .take(pool_size)
        .map(CountryRecord::capital)
        .filter(|capital| seen.insert(*capital))
        .collect();

    if pool.len() < distractor_count {
        return Err(QuizError::InsufficientDistractors {
            country: target.country().to_owned(),
            needed: distractor_count,
            available: pool.len(),
        });
    }

    pool.shuffle(rng);
    let mut options: Vec<String> = pool
        .into_iter()
        .take(distractor_count)
        .map(str::to_owned)
        .collect();
    options.push(target.capital().to_owned());
    options.shuffle(rng);

    Ok(Question::new(target, options))
}

/// Pick a country and build its question in one step.
///
/// # Errors
///
/// Propagates the errors of [`pick_country`] and [`build_question`].
pub fn next_question<R: Rng + ?Sized>(
    active: &ActiveSet,
    progress: &ProgressBook,
    recent: RecentlyAsked,
    dataset: &Dataset,
    settings: &QuizSettings,
    rng: &mut R,
) -> Result<(Question, RecentlyAsked), QuizError> {
    let pick = pick_country(active, progress, recent, settings.weak_candidates(), rng)?;
    let question = build_question(
        &pick.country,
        dataset,
        settings.distractor_pool(),
        settings.distractor_count(),
        rng,
    )?;
    Ok((question, pick.recent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::model::{RawCountry, Scoring};
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset(n: usize) -> Dataset {
        Dataset::from_raw(
            (0..n).map(|i| RawCountry::new(format!("C{i}"), Some(format!("Cap{i}").as_str()))),
        )
    }

    fn active_of(data: &Dataset, names: &[&str]) -> ActiveSet {
        let saved = names
            .iter()
            .map(|n| data.get(n).unwrap().clone())
            .collect();
        ActiveSet::restore(saved, data).unwrap()
    }

    fn give(progress: &mut ProgressBook, country: &str, points: u32) {
        let scoring = Scoring {
            reward: points,
            penalty: 0,
        };
        progress.record_answer(country, true, scoring, fixed_now());
    }

    #[test]
    fn weak_candidates_rank_by_ascending_points() {
        let data = dataset(8);
        let active = active_of(&data, &["C0", "C1", "C2", "C3", "C4", "C5", "C6"]);
        let mut progress = ProgressBook::default();
        give(&mut progress, "C0", 10);
        give(&mut progress, "C1", 4);
        give(&mut progress, "C2", 8);
        give(&mut progress, "C5", 2);

        let weak: Vec<&str> = weak_candidates(&active, &progress, 5)
            .into_iter()
            .map(CountryRecord::country)
            .collect();
        assert_eq!(weak, vec!["C3", "C4", "C6", "C5", "C1"]);
    }

    #[test]
    fn pick_never_returns_a_recent_country_when_alternatives_exist() {
        let data = dataset(10);
        let active = active_of(&data, &["C0", "C1", "C2", "C3", "C4", "C5", "C6"]);
        let progress = ProgressBook::default();
        let mut recent = RecentlyAsked::new(5);
        for c in ["C0", "C1", "C2", "C3"] {
            recent.push(c);
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let pick = pick_country(&active, &progress, recent.clone(), 5, &mut rng).unwrap();
            assert_eq!(pick.country.country(), "C4");
            assert!(!pick.fell_back);
            assert_eq!(pick.recent.iter().next(), Some("C4"));
            assert_eq!(pick.recent.len(), 5);
        }
    }

    #[test]
    fn pick_records_choice_and_evicts_oldest() {
        let data = dataset(10);
        let active = active_of(&data, &["C0", "C1", "C2", "C3", "C4", "C5", "C6"]);
        let progress = ProgressBook::default();
        let mut recent = RecentlyAsked::new(2);
        recent.push("C5");
        recent.push("C6");

        let pick =
            pick_country(&active, &progress, recent, 5, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(!["C5", "C6"].contains(&pick.country.country()));
        let queue: Vec<&str> = pick.recent.iter().collect();
        assert_eq!(queue, vec![pick.country.country(), "C6"]);
    }

    #[test]
    fn single_country_falls_back_and_resets_queue() {
        let data = dataset(6);
        let active = active_of(&data, &["C2"]);
        let progress = ProgressBook::default();
        let mut recent = RecentlyAsked::new(5);
        let mut rng = StdRng::seed_from_u64(9);

        let first = pick_country(&active, &progress, recent, 5, &mut rng).unwrap();
        assert!(!first.fell_back);
        recent = first.recent;

        for _ in 0..5 {
            let pick = pick_country(&active, &progress, recent, 5, &mut rng).unwrap();
            assert_eq!(pick.country.country(), "C2");
            assert!(pick.fell_back);
            assert_eq!(pick.recent.iter().collect::<Vec<_>>(), vec!["C2"]);
            recent = pick.recent;
        }
    }

    #[test]
    fn two_countries_alternate_then_fall_back() {
        let data = dataset(6);
        let active = active_of(&data, &["C0", "C1"]);
        let progress = ProgressBook::default();
        let mut rng = StdRng::seed_from_u64(5);

        let first = pick_country(&active, &progress, RecentlyAsked::new(5), 5, &mut rng).unwrap();
        let second = pick_country(&active, &progress, first.recent, 5, &mut rng).unwrap();
        assert_ne!(first.country, second.country);
        assert!(!second.fell_back);

        let third = pick_country(&active, &progress, second.recent, 5, &mut rng).unwrap();
        assert!(third.fell_back);
        assert_eq!(third.recent.len(), 1);
        assert_eq!(third.recent.iter().next(), Some(third.country.country()));
    }

    #[test]
    fn empty_active_set_is_an_error() {
        let err = pick_country(
            &ActiveSet::default(),
            &ProgressBook::default(),
            RecentlyAsked::new(5),
            5,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert_eq!(err, QuizError::EmptyActiveSet);
    }

    #[test]
    fn same_draw_gives_same_pick() {
        let data = dataset(12);
        let active = ActiveSet::sample(&data, 8, &mut StdRng::seed_from_u64(2));
        let progress = ProgressBook::default();

        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            pick_country(&active, &progress, RecentlyAsked::new(5), 5, &mut rng)
        };
        let a = pick(77);
        let b = pick(77);
        assert_eq!(a, b);
    }

    #[test]
    fn question_has_four_distinct_options_including_answer() {
        let data = data::world();
        let mut rng = StdRng::seed_from_u64(123);
        for record in data.records().iter().take(60) {
            let q = build_question(record, &data, 20, 3, &mut rng).unwrap();
            assert_eq!(q.options().len(), 4);
            let distinct: HashSet<&String> = q.options().iter().collect();
            assert_eq!(distinct.len(), 4);
            assert!(q.options().iter().any(|o| o == record.capital()));
            assert_eq!(q.correct_answer(), record.capital());
            assert!(q.prompt().contains(record.country()));
        }
    }

    #[test]
    fn distractors_come_from_leading_pool() {
        let data = dataset(40);
        let target = data.get("C30").unwrap().clone();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let q = build_question(&target, &data, 20, 3, &mut rng).unwrap();
            for option in q.options().iter().filter(|o| *o != "Cap30") {
                let idx: usize = option.trim_start_matches("Cap").parse().unwrap();
                assert!(idx < 20, "{option} outside pool");
            }
        }
    }

    #[test]
    fn shared_capitals_are_not_offered_twice() {
        let data = Dataset::from_raw([
            RawCountry::new("A", Some("Same")),
            RawCountry::new("B", Some("Same")),
            RawCountry::new("C", Some("Other")),
            RawCountry::new("D", Some("Third")),
            RawCountry::new("E", Some("Fourth")),
        ]);
        let target = data.get("A").unwrap().clone();
        let q = build_question(&target, &data, 20, 3, &mut StdRng::seed_from_u64(0)).unwrap();

        let mut options: Vec<&str> = q.options().iter().map(String::as_str).collect();
        options.sort_unstable();
        assert_eq!(options, vec!["Fourth", "Other", "Same", "Third"]);
    }

    #[test]
    fn too_small_dataset_reports_missing_distractors() {
        let data = dataset(3);
        let target = data.get("C0").unwrap().clone();
        let err =
            build_question(&target, &data, 20, 3, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientDistractors {
                country: "C0".into(),
                needed: 3,
                available: 2,
            }
        );
    }
}
