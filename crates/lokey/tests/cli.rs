//! CLI integration tests for lokey commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a lokey command.
fn lokey() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lokey").unwrap()
}

/// Parses a command's stdout as JSON.
fn json_stdout(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

/// A facets document that resolves fully and generates candidates.
fn facets_fixture() -> &'static str {
    r#"{
        "place_name": "모모카페",
        "category": ["카페"],
        "items": ["라떼", {"name": "브런치", "signature": true}],
        "audience": ["20대"],
        "features": ["주차가능"],
        "vibe": ["조용한"],
        "location": {
            "city": "서울",
            "district": "강남구",
            "dong": "역삼동",
            "confidence": "high",
            "source": "address_parsing"
        }
    }"#
}

mod facets {
    use super::*;

    #[test]
    fn resolves_address_and_reports_category() {
        let output = lokey()
            .args([
                "facets",
                "모모 스팀세차",
                "서울시 성동구 성수동에 있는 세차장입니다",
                "--json",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        assert_eq!(v["category"][0], "세차장");
        assert_eq!(v["location"]["city"], "서울");
        assert_eq!(v["location"]["district"], "성동구");
        assert_eq!(v["location"]["dong"], "성수동");
        assert_eq!(v["location"]["source"], "address_parsing");
    }

    #[test]
    fn alias_in_place_name_wins() {
        let output = lokey()
            .args(["facets", "강남역 모모카페", "라떼가 맛있는 카페", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        assert_eq!(v["location"]["city"], "서울");
        assert_eq!(v["location"]["source"], "alias");
    }

    #[test]
    fn address_flag_overrides_description() {
        let output = lokey()
            .args([
                "facets",
                "모모카페",
                "라떼가 맛있는 카페",
                "--address",
                "서울시 송파 가락동",
                "--json",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        assert_eq!(v["location"]["city"], "서울");
        assert_eq!(v["location"]["dong"], "가락동");
    }

    #[test]
    fn plain_output_lists_location() {
        lokey()
            .args(["facets", "모모카페", "서울시 성동구 성수동 카페"])
            .assert()
            .success()
            .stdout(predicate::str::contains("location:"))
            .stdout(predicate::str::contains("성수동"));
    }

    #[test]
    fn missing_description_is_usage_error() {
        lokey().args(["facets", "모모카페"]).assert().code(2);
    }
}

mod select {
    use super::*;

    #[test]
    fn recommends_at_most_four_keywords() {
        let dir = temp_dir();
        let path = dir.path().join("facets.json");
        fs::write(&path, facets_fixture()).unwrap();

        let output = lokey()
            .args(["select", "--facets"])
            .arg(&path)
            .args(["--no-trends", "--month", "5", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        let recommended = v["recommended"].as_array().unwrap();
        assert!(!recommended.is_empty());
        assert!(recommended.len() <= 4);
        for entry in recommended {
            assert!(entry["phrase"].is_string());
            assert!(entry["phase"].is_string());
            assert!(entry["score"].is_number());
        }
        assert!(v["stats"]["total_candidates"].as_u64().unwrap() > 0);
        assert_eq!(
            v["stats"]["final_count"].as_u64().unwrap() as usize,
            recommended.len()
        );
        assert!(!v["evaluated"].as_array().unwrap().is_empty());
    }

    #[test]
    fn reads_facets_from_stdin() {
        lokey()
            .args(["select", "--facets", "-", "--no-trends", "--month", "1"])
            .write_stdin(facets_fixture())
            .assert()
            .success();
    }

    #[test]
    fn evaluated_is_sorted_by_score() {
        let dir = temp_dir();
        let path = dir.path().join("facets.json");
        fs::write(&path, facets_fixture()).unwrap();

        let output = lokey()
            .args(["select", "--facets"])
            .arg(&path)
            .args(["--no-trends", "--month", "5", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        let scores: Vec<f64> = v["evaluated"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k["score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn missing_file_fails() {
        lokey()
            .args(["select", "--facets", "/nonexistent/facets.json", "--no-trends"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("failed to read"));
    }

    #[test]
    fn invalid_json_fails() {
        let dir = temp_dir();
        let path = dir.path().join("facets.json");
        fs::write(&path, "not json").unwrap();

        lokey()
            .args(["select", "--facets"])
            .arg(&path)
            .arg("--no-trends")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid facets JSON"));
    }

    #[test]
    fn out_of_range_month_fails() {
        lokey()
            .args(["select", "--facets", "-", "--no-trends", "--month", "13"])
            .write_stdin(facets_fixture())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("month"));
    }
}

mod rank {
    use super::*;

    #[test]
    fn builds_pool_and_combinations() {
        let dir = temp_dir();
        let path = dir.path().join("facets.json");
        fs::write(&path, facets_fixture()).unwrap();

        let output = lokey()
            .args(["rank", "--facets"])
            .arg(&path)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        let combos = v["recommended_combinations"].as_array().unwrap();
        assert!(combos.len() <= 4);
        for combo in combos {
            assert!(!combo["keywords"].as_array().unwrap().is_empty());
            assert!(combo["recommendation"].is_string());
        }
        let keywords = v["all_keywords"].as_array().unwrap();
        assert!(!keywords.is_empty());
        assert!(keywords.len() <= 50);
        assert!(!v["warning"].as_str().unwrap().is_empty());
    }

    #[test]
    fn pool_is_sorted_by_priority() {
        let output = lokey()
            .args(["rank", "--facets", "-", "--json"])
            .write_stdin(facets_fixture())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        let priorities: Vec<u64> = v["all_keywords"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k["priority"].as_u64().unwrap())
            .collect();
        assert!(priorities.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn missing_facets_flag_is_usage_error() {
        lokey().arg("rank").assert().code(2);
    }
}

mod guideline {
    use super::*;

    #[test]
    fn renders_markdown_sections() {
        lokey()
            .args(["guideline", "강남 카페", "강남 카페 추천"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## 가이드라인 소개"))
            .stdout(predicate::str::contains("강남 카페"))
            .stdout(predicate::str::contains("## 작성 체크리스트"));
    }

    #[test]
    fn honors_requested_tone() {
        let output = lokey()
            .args(["guideline", "헬스장", "--tone", "데이터 톤", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        assert_eq!(v["tone"], "데이터 톤");
        assert!(v["guideline"].as_str().unwrap().contains("헬스장"));
    }

    #[test]
    fn unknown_tone_falls_back_to_review() {
        let output = lokey()
            .args(["guideline", "헬스장", "--tone", "이상한 톤", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v = json_stdout(&output);
        assert_eq!(v["tone"], "실사 리뷰 톤");
    }

    #[test]
    fn requires_at_least_one_keyword() {
        lokey().arg("guideline").assert().code(2);
    }
}
