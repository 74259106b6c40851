#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use infoprobe_core::metrics::{format_value, Counter, CounterVec, Gauge, ObservedCounter};

#[test]
fn unlabeled_counter_renders_zero_before_first_inc() {
    let c = Counter::default();
    let mut out = String::new();
    c.render("get_info_requests_total", "Total requests", &mut out);

    assert_eq!(
        out,
        "# HELP get_info_requests_total Total requests\n\
         # TYPE get_info_requests_total counter\n\
         get_info_requests_total 0\n"
    );
}

#[test]
fn counter_vec_tracks_each_label_set() {
    let c = CounterVec::default();
    c.inc(&[("version", "1.0")]);
    c.inc(&[("version", "1.0")]);
    c.inc(&[("version", "2.0")]);

    assert_eq!(c.get(&[("version", "1.0")]), 2);
    assert_eq!(c.get(&[("version", "2.0")]), 1);
    assert_eq!(c.get(&[("version", "3.0")]), 0);

    let mut out = String::new();
    c.render("by_version", "By version", &mut out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# HELP by_version By version",
            "# TYPE by_version counter",
            "by_version{version=\"1.0\"} 2",
            "by_version{version=\"2.0\"} 1",
        ]
    );
}

#[test]
fn label_order_does_not_split_series() {
    let c = CounterVec::default();
    c.inc(&[("a", "x"), ("b", "y")]);
    c.inc(&[("b", "y"), ("a", "x")]);

    assert_eq!(c.get(&[("a", "x"), ("b", "y")]), 2);
    let mut out = String::new();
    c.render("m", "h", &mut out);
    assert!(out.contains("m{a=\"x\",b=\"y\"} 2\n"));
}

#[test]
fn label_values_are_escaped() {
    let c = CounterVec::default();
    c.inc(&[("version", "say \"hi\"\\\n")]);

    let mut out = String::new();
    c.render("m", "h", &mut out);
    assert!(out.contains(r#"m{version="say \"hi\"\\\n"} 1"#));
}

#[test]
fn gauge_overwrites_previous_value() {
    let g = Gauge::default();
    assert_eq!(g.get(), 0.0);
    g.set(42.5);
    g.set(17.25);
    assert_eq!(g.get(), 17.25);

    let mut out = String::new();
    g.render("cpu_usage_percent", "CPU usage percentage", &mut out);
    assert!(out.contains("# TYPE cpu_usage_percent gauge\n"));
    assert!(out.ends_with("cpu_usage_percent 17.25\n"));
}

#[test]
fn special_floats_use_exposition_spelling() {
    assert_eq!(format_value(f64::NAN), "NaN");
    assert_eq!(format_value(f64::INFINITY), "+Inf");
    assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
    assert_eq!(format_value(3.0), "3");
}

#[test]
fn help_text_newlines_are_escaped() {
    let c = Counter::default();
    let mut out = String::new();
    c.render("m", "line one\nline two", &mut out);
    assert!(out.starts_with("# HELP m line one\\nline two\n"));
}

#[test]
fn observed_counter_never_goes_backwards() {
    let c = ObservedCounter::default();
    c.observe(1.5);
    c.observe(0.75);
    c.observe(f64::NAN);
    assert_eq!(c.get(), 1.5);
    c.observe(2.25);
    assert_eq!(c.get(), 2.25);

    let mut out = String::new();
    c.render("process_cpu_seconds_total", "CPU seconds", &mut out);
    assert!(out.contains("# TYPE process_cpu_seconds_total counter\n"));
    assert!(out.ends_with("process_cpu_seconds_total 2.25\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_not_lost() {
    let total = Arc::new(Counter::default());
    let by_version = Arc::new(CounterVec::default());

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let total = Arc::clone(&total);
        let by_version = Arc::clone(&by_version);
        tasks.push(tokio::spawn(async move {
            for _ in 0..250 {
                total.inc();
                by_version.inc(&[("version", "1.0")]);
            }
        }));
    }
    for t in tasks {
        t.await.expect("task panicked");
    }

    assert_eq!(total.get(), 2000);
    assert_eq!(by_version.get(&[("version", "1.0")]), 2000);
}
