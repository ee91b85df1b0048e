//! Calculator results on the reference texts.

mod common;

use std::io::Write;

use common::{COMPLEX_TEXT, SIMPLE_TEXT, assert_close, fixture_service};
use ru_readability::{CalcError, Calculator, Catalog, MetricValue};
use tempfile::NamedTempFile;

fn index(value: MetricValue) -> f64 {
    match value {
        MetricValue::Index(v) => v,
        MetricValue::Count(n) => panic!("expected an index, got count {n}"),
    }
}

#[test]
fn elementary_on_simple_text() {
    let calc = Calculator::elementary(fixture_service());
    let out = calc.compute(SIMPLE_TEXT).expect("compute");

    assert_eq!(out["num_words"], MetricValue::Count(9));
    assert_eq!(out["num_sentences"], MetricValue::Count(1));
    assert_close(index(out["avg_sent_len"]), 9.0);
    assert_eq!(out["num_letters"], MetricValue::Count(57));
    assert_close(index(out["avg_sent_len_ch"]), 57.0);
    assert_eq!(out["num_syll"], MetricValue::Count(22));
    assert_eq!(out["num_polysyl"], MetricValue::Count(3));
    assert_close(index(out["dep_distance"]), 3.7);
    assert_eq!(out["num_clauses"], MetricValue::Count(2));
}

#[test]
fn composite_on_simple_text() {
    let calc = Calculator::composite(fixture_service());
    let out = calc.compute(SIMPLE_TEXT).expect("compute");

    assert_eq!(
        out.keys().copied().collect::<Vec<_>>(),
        vec!["Flesh_Kincaid", "Coleman_Liau", "SMOG", "ARI", "Syntax_compl"]
    );
    assert_close(index(out["Flesh_Kincaid"]), 48.223888888888894);
    assert_close(index(out["Coleman_Liau"]), 10.614444444444441);
    assert_close(index(out["SMOG"]), 15.363327528659473);
    assert_close(index(out["ARI"]), 11.131166666666665);
    assert_close(index(out["Syntax_compl"]), 0.15780000000000005);
}

#[test]
fn complex_text_plain_indices() {
    let keys = [
        "num_words",
        "num_sentences",
        "num_letters",
        "num_syll",
        "num_polysyl",
        "avg_sent_len",
        "avg_sent_len_ch",
    ];
    let out = Calculator::with_metrics(Catalog::Elementary, fixture_service(), keys)
        .compute(COMPLEX_TEXT)
        .expect("compute");
    assert_eq!(out["num_words"], MetricValue::Count(32));
    assert_eq!(out["num_sentences"], MetricValue::Count(2));
    assert_eq!(out["num_letters"], MetricValue::Count(234));
    assert_eq!(out["num_syll"], MetricValue::Count(101));
    assert_eq!(out["num_polysyl"], MetricValue::Count(22));
    assert_close(index(out["avg_sent_len"]), 16.0);
    assert_close(index(out["avg_sent_len_ch"]), 117.0);

    let out = Calculator::with_metrics(
        Catalog::Composite,
        fixture_service(),
        ["Flesh_Kincaid", "Coleman_Liau", "SMOG", "ARI"],
    )
    .compute(COMPLEX_TEXT)
    .expect("compute");
    assert_close(index(out["Flesh_Kincaid"]), 3.655625000000015);
    assert_close(index(out["Coleman_Liau"]), 17.70125);
    assert_close(index(out["SMOG"]), 29.372789771779903);
    assert_close(index(out["ARI"]), 19.224249999999998);
}

#[test]
fn subset_is_intersection_in_registry_order() {
    let calc = Calculator::with_metrics(
        Catalog::Elementary,
        fixture_service(),
        vec!["num_clauses".to_string(), "SMOG".into(), "num_words".into()],
    );
    let out = calc.compute(SIMPLE_TEXT).expect("compute");
    assert_eq!(
        out.keys().copied().collect::<Vec<_>>(),
        vec!["num_words", "num_clauses"]
    );
}

#[test]
fn empty_text_counts_are_zero() {
    let calc = Calculator::with_metrics(
        Catalog::Elementary,
        fixture_service(),
        ["num_words", "num_sentences", "avg_sent_len", "num_letters"],
    );
    for text in ["", "   \n\t"] {
        let out = calc.compute(text).expect("compute");
        assert!(out.values().all(|v| v.as_f64() == 0.0), "{text:?}: {out:?}");
    }

    let out = Calculator::with_metrics(
        Catalog::Composite,
        fixture_service(),
        ["Flesh_Kincaid", "Coleman_Liau", "SMOG", "ARI"],
    )
    .compute("")
    .expect("compute");
    assert!(out.values().all(|v| v.as_f64() == 0.0));
}

#[test]
fn result_serializes_in_key_order() {
    let out = Calculator::with_metrics(
        Catalog::Elementary,
        fixture_service(),
        ["num_sentences", "num_words"],
    )
    .compute(SIMPLE_TEXT)
    .expect("compute");
    let json = serde_json::to_string(&out).expect("serialize");
    assert_eq!(json, r#"{"num_words":9,"num_sentences":1}"#);
}

#[test]
fn calculator_from_yaml_file() {
    let yaml = r#"
version: "1.0"
parser:
  backend: stub
calculator:
  catalog: elementary
  metrics: ["num_words", "dep_distance", "ARI"]
  use_parallel: true
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let calc = Calculator::from_file(file.path()).expect("config loads");
    assert!(calc.use_parallel());
    assert_eq!(calc.keys().collect::<Vec<_>>(), vec!["num_words", "dep_distance"]);

    let out = calc.compute(SIMPLE_TEXT).expect("compute");
    assert_eq!(out["num_words"], MetricValue::Count(9));
    assert_eq!(out["dep_distance"], MetricValue::Index(1.0));
}

#[test]
fn version_only_yaml_builds_elementary_calculator() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"version: \"1.0\"\n").unwrap();

    let calc = Calculator::from_file(file.path()).expect("config loads");
    assert_eq!(calc.catalog(), Catalog::Elementary);
    assert!(calc.keys().all(|k| k != "Syntax_compl"));

    // Parse-backed keys need a parser backend; the default has none.
    let err = calc.compute(SIMPLE_TEXT).unwrap_err();
    assert!(matches!(err, CalcError::Metric { key: "dep_distance", .. }), "{err}");
}

#[test]
fn version_only_yaml_with_stub_parser_computes() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"version: \"1.0\"\nparser:\n  backend: stub\n").unwrap();

    let calc = Calculator::from_file(file.path()).expect("config loads");
    let out = calc.compute(SIMPLE_TEXT).expect("compute");
    assert_eq!(out.len(), Catalog::Elementary.metrics().len());
    assert_eq!(out["num_words"], MetricValue::Count(9));
    assert_eq!(out["num_clauses"], MetricValue::Count(0));
}
