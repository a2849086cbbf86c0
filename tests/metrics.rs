mod integration {
    mod metrics {
        extern crate statsketch;

        use self::statsketch::config::Config;
        use self::statsketch::metrics::{Metric, MetricType, Metrics};
        use self::statsketch::Error;

        #[test]
        fn timer_over_one_to_hundred() {
            let mut m = Metrics::default();
            for v in 1..=100 {
                m.add_sample(MetricType::Timer, "t", f64::from(v)).unwrap();
            }
            let mut seen = 0;
            for (name, metric) in m.iter_mut() {
                if let Metric::Timer(t, None) = metric {
                    assert_eq!(name, "t");
                    assert_eq!(t.count(), 100);
                    assert_eq!(t.sum(), 5050.0);
                    assert_eq!(t.mean(), 50.5);
                    assert!((t.stddev() - 29.011).abs() < 1e-3);
                    assert_eq!(t.min(), 1.0);
                    assert_eq!(t.max(), 100.0);
                    seen += 1;
                }
            }
            assert_eq!(seen, 1);
        }

        #[test]
        fn counter_over_one_to_hundred() {
            let mut m = Metrics::default();
            for v in 1..=100 {
                m.add_sample(MetricType::Counter, "c", f64::from(v)).unwrap();
            }
            for (_, metric) in m.iter_mut() {
                match metric {
                    Metric::Counter(c) => {
                        assert_eq!(c.count(), 100);
                        assert_eq!(c.sum(), 5050.0);
                        assert_eq!(c.squared_sum(), 338_350.0);
                        assert_eq!(c.mean(), 50.5);
                        assert!((c.stddev() - 29.011).abs() < 1e-3);
                        assert_eq!(c.min(), 1.0);
                        assert_eq!(c.max(), 100.0);
                    }
                    other => panic!("unexpected {:?}", other),
                }
            }
        }

        #[test]
        fn configured_from_toml() {
            let config = Config::from_toml(
                r#"
                timer_eps = 0.02
                quantiles = [0.5, 0.9]
                set_precision = 10

                [[histograms]]
                prefix = "api."
                min = 0.0
                max = 100.0
                width = 10.0
                "#,
            )
            .unwrap();
            let mut m = Metrics::new(&config).unwrap();
            m.add_sample(MetricType::Timer, "api.get", 42.0).unwrap();
            m.add_sample(MetricType::Timer, "db.get", 42.0).unwrap();
            m.set_update("users", b"alice").unwrap();

            for (name, metric) in m.iter_mut() {
                match (name, metric) {
                    ("api.get", Metric::Timer(t, Some(h))) => {
                        assert_eq!(t.quantiles(), &[0.5, 0.9]);
                        assert_eq!(h.bins().nth(5).map(|b| b.2), Some(1));
                    }
                    ("db.get", Metric::Timer(_, None)) => {}
                    ("users", Metric::Set(s)) => assert_eq!(s.precision(), 10),
                    (name, other) => panic!("unexpected {} {:?}", name, other),
                }
            }
        }

        #[test]
        fn set_samples_are_rejected() {
            let mut m = Metrics::default();
            match m.add_sample(MetricType::Set, "s", 1.0) {
                Err(Error::UnexpectedMetricType(MetricType::Set)) => {}
                other => panic!("unexpected {:?}", other),
            }
            assert!(m.is_empty());
        }
    }
}
