// Integration tests for roomfit

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use roomfit::core::{Catalog, Listing, ListingRecord, Persona};
use roomfit::matching::{vectorize, CorpusVectorizer, MatchingEngine};
use roomfit::config::MatchConfig;
use roomfit::reasoning::{exclude_already_recommended, RecommendationRecord};
use roomfit::{storage, MatchError};

fn persona(person_count: &str, period: &str, significant: &str) -> Persona {
    Persona {
        person_count: person_count.into(),
        period: period.into(),
        identity: "직장인".into(),
        car: "차 있음".into(),
        child: "아이 없음".into(),
        significant: significant.into(),
    }
}

fn default_persona() -> Persona {
    persona("2명", "한달 이상", "조용한 공원 근처 역세권 아파트")
}

fn listing(name: &str, walk: u32, parking: f64, text: &str) -> Listing {
    Listing::new(name, vec!["방두개".into(), "역세권".into()], text, walk, parking)
}

fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        listing("래미안", 5, 1.2, "조용한 공원 근처 단지"),
        listing("자이", 12, 1.5, "역세권 대단지 아파트"),
        listing("힐스테이트", 3, 0.0, "주차 불가 역세권"),
        listing("푸르지오", 8, 0.8, "학교 근처 조용한 아파트"),
        listing("래미안", 2, 2.0, "공원 바로 앞 역세권"),
        listing("아이파크", 10, 0.5, "신축 역세권 공원 조망"),
        listing("더샵", 11, 0.9, "대형 마트 인접"),
        listing("롯데캐슬", 7, 1.1, "조용한 주거 단지"),
    ])
}

fn engine(catalog: Catalog) -> MatchingEngine {
    MatchingEngine::new(catalog, MatchConfig::default()).unwrap()
}

#[test]
fn test_far_listing_excluded_and_duplicates_collapsed() {
    let engine = engine(Catalog::new(vec![
        listing("먼집", 15, 1.2, "조용한 공원"),
        listing("같은집", 5, 1.2, "조용한 공원"),
        listing("같은집", 5, 1.2, "조용한 공원"),
    ]));

    let ranked = engine.recommend(&default_persona(), 5).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].listing.name, "같은집");
}

#[test]
fn test_first_listing_wins_name_collision() {
    let engine = engine(Catalog::new(vec![
        listing("중복", 5, 1.0, "첫번째 설명"),
        listing("중복", 5, 1.0, "두번째 설명 조용한 공원 근처"),
    ]));

    let ranked = engine.recommend(&default_persona(), 10).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].listing.feature_description, "첫번째 설명");
}

#[test]
fn test_absent_detail_sentinel_is_not_text() {
    let catalog = Catalog::new(vec![
        listing("a", 5, 1.0, "조용한 공원"),
        listing("b", 5, 1.0, "없음 없음 역세권"),
    ]);
    let vectorizer = CorpusVectorizer::fit_catalog(&catalog).unwrap();
    let persona = default_persona();

    let plain = listing("c", 5, 1.0, "조용한 공원");
    let sentinel = plain.clone().with_detail("없음");

    assert_eq!(
        vectorize(&plain, &persona, &vectorizer).unwrap(),
        vectorize(&sentinel, &persona, &vectorizer).unwrap()
    );
    assert!(!sentinel.combined_text().contains("없음"));
}

#[test]
fn test_ineligible_listings_never_returned() {
    let engine = engine(mixed_catalog());
    let config = MatchConfig::default();

    for significant in ["조용한 공원", "역세권 대단지", "주차 불가", "마트"] {
        let ranked = engine.recommend(&persona("3명 이상", "2주", significant), 100).unwrap();
        for candidate in &ranked {
            assert!(candidate.listing.walk_minutes <= config.max_walk_minutes);
            assert!(candidate.listing.parking_ratio > config.min_parking_ratio);
        }
    }
}

#[test]
fn test_result_names_are_unique() {
    let engine = engine(mixed_catalog());
    let ranked = engine.recommend(&default_persona(), 100).unwrap();

    let mut names: Vec<&str> = ranked.iter().map(|c| c.listing.name.as_str()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_scores_are_bounded_and_descending() {
    let engine = engine(mixed_catalog());
    let ranked = engine.recommend(&default_persona(), 100).unwrap();

    for candidate in &ranked {
        assert!((-1.0..=1.0).contains(&candidate.score), "score {}", candidate.score);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_recommend_is_idempotent() {
    let engine = engine(mixed_catalog());
    let persona = default_persona();

    let first = engine.recommend(&persona, 100).unwrap();
    let second = engine.recommend(&persona, 100).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_vectors_always_have_equal_length() {
    let catalog = mixed_catalog();
    let vectorizer = CorpusVectorizer::fit_catalog(&catalog).unwrap();

    for significant in ["", "공원", "전혀 모르는 단어들 뿐", "조용한 공원 근처 역세권 아파트 단지 신축"] {
        let persona = persona("1명", "1주", significant);
        for listing in catalog.iter() {
            let (listing_vec, persona_vec) = vectorize(listing, &persona, &vectorizer).unwrap();
            assert_eq!(listing_vec.len(), persona_vec.len());
        }
    }
}

#[test]
fn test_top_n_law() {
    let engine = engine(mixed_catalog());
    // 래미안, 푸르지오, 아이파크, 롯데캐슬
    let eligible_distinct = 4;

    for top_n in [0, 1, 3, 4, 5, 100] {
        let ranked = engine.recommend(&default_persona(), top_n).unwrap();
        assert_eq!(ranked.len(), top_n.min(eligible_distinct));
    }
}

#[test]
fn test_empty_catalog_cannot_be_fitted() {
    let err = MatchingEngine::new(Catalog::default(), MatchConfig::default()).unwrap_err();
    assert_eq!(err, MatchError::EmptyCorpus { documents: 0 });
}

#[test]
fn test_unparseable_persona_fails_recommend() {
    let engine = engine(mixed_catalog());
    let err = engine
        .recommend(&persona("여러명", "한달 이상", "공원"), 5)
        .unwrap_err();
    assert!(matches!(err, MatchError::MalformedPersona { field: "person_count", .. }));
}

#[test]
fn test_record_missing_walk_time_is_malformed() {
    let records = vec![ListingRecord {
        name: Some("래미안".into()),
        tags: Some(vec!["방두개".into()]),
        feature_description: Some("조용한 단지".into()),
        parking_ratio: Some(1.0),
        ..Default::default()
    }];

    let err = MatchingEngine::from_records(records, MatchConfig::default()).unwrap_err();
    assert!(matches!(err, MatchError::MalformedListing { field: "walk time", .. }));
}

#[test]
fn test_catalog_file_to_recommendations() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let lines = [
        r#"{"id":1,"aptName":"래미안","tagList":["방두개","역세권"],"articleFeatureDescription":"조용한 공원 근처","detailDescription":"없음","walkTime":5,"aptParkingCountPerHousehold":1.2,"url":"https://example.com/1","image_url":"https://example.com/1.jpg"}"#,
        r#"{"id":2,"aptName":"자이","tagList":["방세개"],"articleFeatureDescription":"대단지","walkTime":4,"aptParkingCountPerHousehold":1.0,"url":"https://example.com/2","image_url":"https://example.com/2.jpg","is_deleted":true}"#,
        r#"{"id":3,"aptName":"푸르지오","tagList":["방한개"],"articleFeatureDescription":"역세권 원룸","walkTime":3,"aptParkingCountPerHousehold":0.7,"url":"없음","image_url":"https://example.com/3.jpg"}"#,
        r#"{"id":4,"aptName":"롯데캐슬","tagList":["방두개"],"articleFeatureDescription":"공원 조망","walkTime":9,"aptParkingCountPerHousehold":0.9,"url":"https://example.com/4","image_url":"https://example.com/4.jpg"}"#,
    ];
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }

    let load = storage::read_records(file.path()).unwrap();
    assert_eq!(load.records.len(), 2);
    assert_eq!(load.deleted, 1);
    assert_eq!(load.unlinked, 1);

    let catalog = storage::load_catalog(file.path()).unwrap();
    let engine = engine(catalog);
    let ranked = engine.recommend(&default_persona(), 10).unwrap();

    let names: Vec<&str> = ranked.iter().map(|c| c.listing.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"래미안"));
    assert!(names.contains(&"롯데캐슬"));
}

#[test]
fn test_stored_records_filter_next_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.msgpack");

    let engine = engine(mixed_catalog());
    let ranked = engine.recommend(&default_persona(), 100).unwrap();
    let top = &ranked[0];

    let record = RecommendationRecord {
        user_id: 7,
        listing_id: None,
        listing_name: top.listing.name.clone(),
        score: top.score,
        reason: "공원과 가까움".into(),
        created_at: chrono::Utc::now(),
    };
    storage::append_records(&path, &[record]).unwrap();

    let stored = storage::load_records(&path).unwrap();
    let for_user = exclude_already_recommended(&ranked, &stored, 7);
    let for_other = exclude_already_recommended(&ranked, &stored, 8);

    assert_eq!(for_user.len(), ranked.len() - 1);
    assert!(for_user.iter().all(|c| c.listing.name != top.listing.name));
    assert_eq!(for_other, ranked);
}

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let catalog = dir.join("listings.jsonl");
    fs::write(
        &catalog,
        concat!(
            r#"{"id":1,"aptName":"래미안","tagList":["방두개"],"articleFeatureDescription":"조용한 공원 근처","walkTime":5,"aptParkingCountPerHousehold":1.2,"url":"https://example.com/1"}"#,
            "\n",
            r#"{"id":2,"aptName":"자이","tagList":["방세개"],"articleFeatureDescription":"대단지","walkTime":4,"aptParkingCountPerHousehold":1.0,"url":"https://example.com/2","is_deleted":true}"#,
            "\n",
        ),
    )
    .unwrap();

    let persona = dir.join("persona.json");
    fs::write(&persona, serde_json::to_string(&default_persona()).unwrap()).unwrap();

    (persona, catalog)
}

fn run_verbose(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_roomfit"))
        .arg("-v")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run roomfit");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(!output.stderr.is_empty(), "expected verbose diagnostics on stderr");

    let stdout = String::from_utf8(output.stdout).unwrap();
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

#[test]
fn test_verbose_json_output_stays_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let (persona, catalog) = write_inputs(dir.path());
    let persona = persona.to_str().unwrap();
    let catalog = catalog.to_str().unwrap();

    let ranked = run_verbose(&["recommend", "-p", persona, "-c", catalog, "--json"]);
    assert_eq!(ranked.as_array().unwrap().len(), 1);
    assert_eq!(ranked[0]["name"], "래미안");

    let request = run_verbose(&["prompt", "-p", persona, "-c", catalog]);
    assert_eq!(request["candidates"].as_array().unwrap().len(), 1);
    assert_eq!(request["persona"]["period"], "한달 이상");
}
