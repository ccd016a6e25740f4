//! Retrieval ranking scenarios over the built-in corpus

use quickcheck_macros::quickcheck;

use policypilot::corpus::CorpusStore;
use policypilot::retrieval::{Retriever, DEFAULT_TOP_K};

fn retriever() -> Retriever {
    Retriever::new(CorpusStore::builtin())
}

fn top_key(query: &str) -> Option<String> {
    retriever()
        .retrieve(query)
        .into_iter()
        .next()
        .map(|r| r.document.key)
}

#[test]
fn semester_count_query_finds_calendar() {
    let results = retriever().retrieve("How many semesters are there in an academic year?");
    assert!(results.iter().any(|r| r.document.key == "semesters"));
}

#[test]
fn cost_query_ranks_fees_first() {
    assert_eq!(
        top_key("How much are the tuition fees?").as_deref(),
        Some("fees")
    );
}

#[test]
fn fee_due_date_query_surfaces_fees_document() {
    // "tuition" also fires the refund rule, which may outrank the fees
    // document for this phrasing; fees must still be retrieved
    let results = retriever().retrieve("When are tuition fees due?");
    assert!(results.iter().any(|r| r.document.key == "fees"));
}

#[test]
fn absence_query_finds_attendance_policy() {
    let results = retriever().retrieve("How many absences are allowed in a module?");
    assert!(results.iter().any(|r| r.document.key == "attendance"));
}

#[test]
fn calculator_query_prefers_exam_rules_over_library() {
    let results = retriever().retrieve("Can I bring my calculator to an exam?");
    let pos = |key: &str| results.iter().position(|r| r.document.key == key);
    let calc = pos("calculator_policy").expect("calculator policy retrieved");
    if let Some(lib) = pos("library_regulations") {
        assert!(calc < lib, "calculator policy should outrank library rules");
    }
}

#[test]
fn study_period_query_finds_degree_durations() {
    let results = retriever().retrieve("What is the normal study period for a BA degree?");
    assert!(results.iter().any(|r| r.document.key == "study_periods"));
}

#[test]
fn cost_intent_boosts_fee_documents() {
    // No literal token overlap with the fees title; intent carries it
    let results = retriever().retrieve("how much do I have to pay?");
    assert!(results.iter().any(|r| r.document.key == "fees"));
}

#[test]
fn synonym_phrasings_converge_on_the_same_document() {
    for query in [
        "when are tuition fees due",
        "what is the cost of tuition",
        "how much money do I owe the university",
    ] {
        let results = retriever().retrieve(query);
        assert!(
            results.iter().any(|r| r.document.key == "fees"),
            "query {query:?} should surface the fees document"
        );
    }
}

#[test]
fn results_never_exceed_top_k_and_never_include_zero_scores() {
    for query in [
        "exam",
        "when are exams",
        "library calculator fees semester absence",
        "completely unrelated gibberish",
    ] {
        let results = retriever().retrieve(query);
        assert!(results.len() <= DEFAULT_TOP_K);
        for scored in &results {
            assert!(scored.score > 0);
        }
    }
}

#[quickcheck]
fn retrieval_is_bounded_for_any_input(query: String) -> bool {
    retriever().retrieve(&query).len() <= DEFAULT_TOP_K
}

#[quickcheck]
fn retrieval_is_deterministic_for_any_input(query: String) -> bool {
    let keys = |results: Vec<policypilot::retrieval::ScoredDocument>| {
        results
            .into_iter()
            .map(|r| (r.document.key, r.score))
            .collect::<Vec<_>>()
    };
    keys(retriever().retrieve(&query)) == keys(retriever().retrieve(&query))
}

#[quickcheck]
fn scores_are_sorted_descending_for_any_input(query: String) -> bool {
    let results = retriever().retrieve(&query);
    results.windows(2).all(|pair| pair[0].score >= pair[1].score)
}
