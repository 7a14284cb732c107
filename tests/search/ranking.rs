//! TF-IDF ranking through the search engine.

use crate::common::word_index;
use sifter::{corpus_from_json, Ranker, SearchEngine, SearchOptions, TfIdfConfig};

const TITLES: &str = r#"[
    {"title": "the foo", "static_quality_score": 0.9},
    {"title": "the foo", "static_quality_score": 0.2},
    {"title": "the foo foo", "static_quality_score": 0.2},
    {"title": "the bar"},
    {"title": "the bar bar"},
    {"title": "the baz"},
    {"title": "the baz"},
    {"title": "the baz baz"}
]"#;

fn ranked_ids(query: &str, config: TfIdfConfig) -> Vec<(u32, f64)> {
    let corpus = corpus_from_json(TITLES).unwrap();
    let index = word_index(&corpus, &["title"]);
    let engine = SearchEngine::new(&corpus, &index);
    let mut ranker = Ranker::tf_idf(&corpus, &index, config);

    engine
        .evaluate(query, &SearchOptions::default(), &mut ranker)
        .into_iter()
        .map(|hit| (hit.document.id.get(), hit.score))
        .collect()
}

#[test]
fn test_static_score_breaks_dynamic_ties() {
    let hits = ranked_ids("foo", TfIdfConfig::default());
    let ids: Vec<u32> = hits.iter().map(|(id, _)| *id).collect();

    // Doc 0 and doc 1 tie on TF-IDF; doc 0 has the better static score.
    // Doc 2 has tf 2 but a low static score.
    assert_eq!(ids[0], 0);
    assert!(hits.iter().all(|(_, score)| *score > 0.0));
    let score_of = |id| hits.iter().find(|(i, _)| *i == id).unwrap().1;
    assert!(score_of(2) > score_of(1));
}

#[test]
fn test_rare_terms_score_higher() {
    let hits = ranked_ids("bar baz", TfIdfConfig::default());
    let score_of = |id| hits.iter().find(|(i, _)| *i == id).unwrap().1;

    // bar is in 2 of 8 documents, baz in 3 of 8
    assert!(score_of(3) > score_of(5));
    assert_eq!(hits[0].0, 4);
}

#[test]
fn test_term_in_every_document_scores_zero() {
    let config = TfIdfConfig {
        static_score_weight: 0.0,
        ..TfIdfConfig::default()
    };
    let hits = ranked_ids("the", config);

    assert_eq!(hits.len(), 8);
    assert!(hits.iter().all(|(_, score)| score.abs() < 1e-8));
    // All tied, so document order decides
    let ids: Vec<u32> = hits.iter().map(|(id, _)| *id).take(3).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_config_from_json_renames_static_field() {
    let corpus = corpus_from_json(
        r#"[{"title": "foo", "boost": 5}, {"title": "foo", "static_quality_score": 9}]"#,
    )
    .unwrap();
    let index = word_index(&corpus, &["title"]);
    let engine = SearchEngine::new(&corpus, &index);
    let config: TfIdfConfig =
        serde_json::from_str(r#"{"static_score_field_name": "boost"}"#).unwrap();
    let mut ranker = Ranker::tf_idf(&corpus, &index, config);

    let hits = engine.evaluate("foo", &SearchOptions::default(), &mut ranker);
    // idf is log10(2/2) = 0, so only the static score counts
    assert_eq!(hits[0].document.id.get(), 0);
    assert_eq!(hits[0].score, 5.0);
    assert_eq!(hits[1].score, 0.0);
}
