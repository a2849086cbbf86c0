mod integration {
    mod cm {
        extern crate statsketch;

        use self::statsketch::cm::CmSketch;
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::{Rng, SeedableRng};

        const QUANTILES: [f64; 3] = [0.5, 0.9, 0.99];

        fn sketch() -> CmSketch {
            CmSketch::new(0.01, &QUANTILES).unwrap()
        }

        fn feed<I: IntoIterator<Item = f64>>(values: I) -> CmSketch {
            let mut cm = sketch();
            for v in values {
                cm.add_sample(v);
            }
            cm.flush();
            cm
        }

        fn assert_accurate(cm: &CmSketch) {
            let within = |q: f64, lo: f64, hi: f64| {
                let v = cm.query(q).unwrap();
                assert!(lo <= v && v <= hi, "query({}) = {} not in [{}, {}]", q, v, lo, hi);
            };
            within(0.5, 49_000.0, 51_000.0);
            within(0.9, 89_000.0, 91_000.0);
            within(0.99, 98_000.0, 100_000.0);
        }

        #[test]
        fn ascending() {
            let cm = feed((0..100_000).map(f64::from));
            assert_eq!(cm.count(), 100_000);
            assert_accurate(&cm);
        }

        #[test]
        fn descending() {
            let cm = feed((0..100_000).rev().map(f64::from));
            assert_eq!(cm.count(), 100_000);
            assert_accurate(&cm);
        }

        #[test]
        fn scrambled() {
            // 7919 is coprime to 100_000, so this visits every value once.
            let cm = feed((0..100_000u32).map(|i| f64::from((i * 7919) % 100_000)));
            assert_eq!(cm.count(), 100_000);
            assert_eq!(cm.min(), Some(0.0));
            assert_eq!(cm.max(), Some(99_999.0));
            assert_accurate(&cm);
        }

        #[test]
        fn shuffled() {
            let mut rng = StdRng::seed_from_u64(1972);
            let mut values: Vec<f64> = (0..100_000).map(f64::from).collect();
            values.shuffle(&mut rng);
            let cm = feed(values);
            assert_eq!(cm.count(), 100_000);
            // Rank error is bounded by the threshold at the queried rank,
            // 2 * eps * rank / phi.
            for q in QUANTILES {
                let v = cm.query(q).unwrap();
                let target = q * 100_000.0;
                assert!((v - target).abs() <= 2_000.0, "query({}) = {}", q, v);
            }
        }

        #[test]
        fn random_values_stay_within_rank_error() {
            let mut rng = StdRng::seed_from_u64(7);
            let mut values: Vec<f64> = (0..100_000)
                .map(|_| f64::from(rng.random_range(0..(1u32 << 31))))
                .collect();
            let cm = feed(values.iter().cloned());
            values.sort_by(f64::total_cmp);

            for q in QUANTILES {
                let v = cm.query(q).unwrap();
                let rank = values.partition_point(|x| *x < v) as f64;
                let target = (q * values.len() as f64).ceil();
                assert!(
                    (rank - target).abs() <= 0.02 * values.len() as f64,
                    "q {}: rank {} target {}",
                    q,
                    rank,
                    target
                );
            }
        }

        #[test]
        fn empty_has_no_answer() {
            let mut cm = sketch();
            assert_eq!(cm.query(0.5), None);
            cm.flush();
            assert_eq!(cm.query(0.99), None);
            assert_eq!(cm.min(), None);
            assert_eq!(cm.count(), 0);
        }

        #[test]
        fn three_samples() {
            let cm = feed(vec![100.0, 200.0, 300.0]);
            assert_eq!(cm.query(0.5), Some(200.0));
        }

        #[test]
        fn outlier_does_not_move_quantiles() {
            let mut values = vec![1.0; 1000];
            values.push(10_000_000.0);
            let cm = feed(values);
            for q in QUANTILES {
                assert_eq!(cm.query(q), Some(1.0), "quantile {}", q);
            }
            assert_eq!(cm.max(), Some(10_000_000.0));
        }

        #[test]
        fn retained_samples_stay_small() {
            let mut rng = StdRng::seed_from_u64(99);
            let mut cm = sketch();
            for _ in 0..200_000 {
                cm.add_sample(rng.random::<f64>());
            }
            cm.flush();
            assert_eq!(cm.count(), 200_000);
            assert!(cm.len() < 5_000, "{} samples retained", cm.len());
        }
    }
}
