use beat_eval::evaluate;
use beat_eval::metrical::{MetricalVariants, double_tempo};
use beat_eval::metrics::{aml_cemgil, cemgil, continuity, fmeasure, goto, information_gain, pscore};
use beat_eval::preprocess::trim_lead_in;
use proptest::prelude::*;

// Regular grids with a tempo between 60 and 200 BPM
fn grid() -> impl Strategy<Value = Vec<f64>> {
    (5.0f64..10.0, 0.3f64..1.0, 2usize..100)
        .prop_map(|(start, period, n)| (0..n).map(|k| start + k as f64 * period).collect())
}

// Strictly ascending times with gaps from 5 ms to 2 s
fn irregular() -> impl Strategy<Value = Vec<f64>> {
    (5.0f64..10.0, prop::collection::vec(0.005f64..2.0, 1..80)).prop_map(|(start, gaps)| {
        let mut t = start;
        let mut seq = vec![t];
        for gap in gaps {
            t += gap;
            seq.push(t);
        }
        seq
    })
}

proptest! {
    #[test]
    fn percentages_stay_in_range(beats in grid(), annotations in grid()) {
        let f = fmeasure(&beats, &annotations).unwrap();
        prop_assert!((0.0..=100.0).contains(&f));

        let p = pscore(&beats, &annotations).unwrap();
        prop_assert!((0.0..=100.0).contains(&p));

        let g = goto(&beats, &annotations).unwrap();
        prop_assert!(g == 0.0 || g == 100.0);

        let c = continuity(&beats, &annotations).unwrap();
        for score in [c.cml_c, c.cml_t, c.aml_c, c.aml_t] {
            prop_assert!((0.0..=100.0).contains(&score));
        }
        prop_assert!(c.cml_c <= c.cml_t);
        prop_assert!(c.aml_c <= c.aml_t);
    }

    #[test]
    fn allowed_levels_never_lower(beats in grid(), annotations in grid()) {
        let c = continuity(&beats, &annotations).unwrap();
        prop_assert!(c.aml_c >= c.cml_c);
        prop_assert!(c.aml_t >= c.cml_t);

        let cem = cemgil(&beats, &annotations).unwrap();
        prop_assert!(aml_cemgil(&beats, &annotations).unwrap() >= cem);
        prop_assert!(cem >= 0.0);
    }

    #[test]
    fn information_gain_bounded(beats in grid(), annotations in grid()) {
        let ig = information_gain(&beats, &annotations).unwrap();
        prop_assert!(ig >= -1e-9);
        prop_assert!(ig <= 40f64.log2() + 1e-9);
    }

    #[test]
    fn trim_is_idempotent(seq in prop::collection::vec(0.0f64..50.0, 0..64)) {
        let once = trim_lead_in(&seq);
        prop_assert_eq!(trim_lead_in(&once), once.clone());
        prop_assert!(once.iter().all(|&t| t >= 5.0));
    }

    #[test]
    fn lead_in_beats_are_ignored(
        beats in grid(),
        annotations in grid(),
        early in prop::collection::vec(0.0f64..4.9, 0..8),
    ) {
        let mut padded = early.clone();
        padded.sort_by(|a, b| a.total_cmp(b));
        padded.extend(&beats);
        prop_assert_eq!(
            evaluate(&padded, &annotations).unwrap(),
            evaluate(&beats, &annotations).unwrap()
        );
    }

    #[test]
    fn metrical_variant_lengths(annotations in grid()) {
        let n = annotations.len();
        let variants = MetricalVariants::new(&annotations);
        prop_assert_eq!(double_tempo(&annotations).len(), 2 * n - 1);
        prop_assert_eq!(variants.off_beat.len(), n - 1);
        prop_assert_eq!(variants.half_tempo_odd.len() + variants.half_tempo_even.len(), n);
    }

    #[test]
    fn irregular_spacing_stays_in_range(beats in irregular(), annotations in irregular()) {
        for score in [
            fmeasure(&beats, &annotations).unwrap(),
            pscore(&beats, &annotations).unwrap(),
            cemgil(&beats, &annotations).unwrap(),
            aml_cemgil(&beats, &annotations).unwrap(),
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "{score}");
        }
        let c = continuity(&beats, &annotations).unwrap();
        for score in [c.cml_c, c.cml_t, c.aml_c, c.aml_t] {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn irregular_identical_sequences_are_perfect(annotations in irregular()) {
        prop_assert_eq!(pscore(&annotations, &annotations).unwrap(), 100.0);
        prop_assert_eq!(cemgil(&annotations, &annotations).unwrap(), 100.0);
    }
}
