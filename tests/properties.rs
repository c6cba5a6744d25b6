use lexorank_core::{
    format_position, generate_ranks, parse_position, split_interval, Bucket, Position, RankError,
    MAX_BATCH,
};
use proptest::prelude::*;

fn symbols(max_len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[0-9A-Za-z]{{1,{}}}", max_len)).unwrap()
}

fn ordered_pair() -> impl Strategy<Value = (String, String)> {
    (symbols(6), symbols(6))
        .prop_filter("bounds must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) })
}

fn position() -> impl Strategy<Value = Position> {
    (0u8..3, symbols(8), proptest::option::of(symbols(4))).prop_map(|(bucket, major, minor)| {
        Position::new(
            Bucket::new(bucket).unwrap(),
            major,
            minor.map(|m| format!(":{}", m)),
        )
    })
}

fn check_batch(lower: Option<&str>, upper: Option<&str>, n: usize, ranks: &[String]) {
    assert_eq!(ranks.len(), n);
    for pair in ranks.windows(2) {
        assert!(pair[0] < pair[1], "not increasing: {:?}", ranks);
    }
    let width = ranks[0].len();
    for rank in ranks {
        assert_eq!(rank.len(), width, "unequal lengths: {:?}", ranks);
        assert!(rank.bytes().all(|b| b.is_ascii_alphanumeric()));
        if let Some(l) = lower {
            assert!(l < rank.as_str(), "{} not above {}", rank, l);
        }
        if let Some(u) = upper {
            assert!(rank.as_str() < u, "{} not below {}", rank, u);
        }
    }
}

proptest! {
    #[test]
    fn prop_ranks_fall_strictly_between((lower, upper) in ordered_pair(), n in 1usize..=20) {
        match split_interval(Some(&lower), Some(&upper), n) {
            Ok(ranks) => check_batch(Some(&lower), Some(&upper), n, &ranks),
            Err(err) => prop_assert_eq!(err, RankError::NoRoomAvailable),
        }
    }

    #[test]
    fn prop_open_upper_always_has_room(lower in symbols(6), n in 1usize..=30) {
        let ranks = split_interval(Some(&lower), None, n).unwrap();
        check_batch(Some(&lower), None, n, &ranks);
    }

    #[test]
    fn prop_open_lower((_, upper) in ordered_pair(), n in 1usize..=20) {
        match split_interval(None, Some(&upper), n) {
            Ok(ranks) => check_batch(None, Some(&upper), n, &ranks),
            Err(err) => prop_assert_eq!(err, RankError::NoRoomAvailable),
        }
    }

    #[test]
    fn prop_oversized_batch_rejected(
        lower in proptest::option::of(symbols(4)),
        n in (MAX_BATCH + 1)..200,
    ) {
        let err = split_interval(lower.as_deref(), None, n).unwrap_err();
        prop_assert_eq!(err, RankError::BatchTooLarge { requested: n, max: MAX_BATCH });
    }

    #[test]
    fn prop_format_round_trip(p in position()) {
        let text = format_position(&p);
        prop_assert_eq!(parse_position(&text).unwrap(), p);
    }

    #[test]
    fn prop_positions_between_bounds(a in position(), b in position(), n in 1usize..=10) {
        prop_assume!(a != b);
        let (lower, upper) = if a < b { (a, b) } else { (b, a) };
        if let Ok(ranks) = generate_ranks(Some(&lower), Some(&upper), n) {
            prop_assert_eq!(ranks.len(), n);
            for pair in ranks.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for rank in &ranks {
                prop_assert!(lower < *rank && *rank < upper);
                prop_assert_eq!(rank.bucket(), lower.bucket());
            }
        }
    }

    #[test]
    fn prop_minor_split_between_identical_majors(
        major in symbols(4),
        (lo, hi) in ordered_pair(),
        n in 1usize..=10,
    ) {
        let bucket = Bucket::default();
        let lower = Position::new(bucket, major.clone(), Some(format!(":{}", lo)));
        let upper = Position::new(bucket, major.clone(), Some(format!(":{}", hi)));
        if let Ok(ranks) = generate_ranks(Some(&lower), Some(&upper), n) {
            for rank in &ranks {
                prop_assert_eq!(rank.major(), major.as_str());
                prop_assert!(lower < *rank && *rank < upper);
            }
        }
    }
}

#[test]
fn test_sentinel_batches_always_fit() {
    for n in 1..=60 {
        let ranks = split_interval(None, None, n).unwrap();
        check_batch(Some("0"), Some("z"), n, &ranks);
    }
}

#[test]
fn test_repeated_appends_stay_sorted() {
    let mut ranks = vec![Position::initial(Bucket::default())];
    for _ in 0..200 {
        let last = ranks.last().cloned();
        let next = generate_ranks(last.as_ref(), None, 1).unwrap();
        ranks.extend(next);
    }
    let text: Vec<String> = ranks.iter().map(format_position).collect();
    let mut sorted = text.clone();
    sorted.sort();
    assert_eq!(text, sorted);
}

#[test]
fn test_repeated_prepends_stay_sorted() {
    let mut ranks = vec![Position::initial(Bucket::default())];
    for _ in 0..200 {
        let first = ranks.first().cloned();
        let next = generate_ranks(None, first.as_ref(), 1).unwrap();
        ranks.splice(0..0, next);
    }
    for pair in ranks.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_repeated_insertions_eventually_need_rerank() {
    // Always inserting directly after the same item narrows the gap until
    // the caller has to re-rank.
    let lower = parse_position("0|a").unwrap();
    let mut upper = parse_position("0|az").unwrap();
    let mut inserted = 0;
    loop {
        match generate_ranks(Some(&lower), Some(&upper), 1) {
            Ok(mut next) => {
                let rank = next.remove(0);
                assert!(lower < rank && rank < upper);
                upper = rank;
                inserted += 1;
            }
            Err(err) => {
                assert_eq!(err, RankError::NoRoomAvailable);
                break;
            }
        }
        assert!(inserted < 1000, "gap never closed");
    }
    assert!(inserted >= 1);
}
