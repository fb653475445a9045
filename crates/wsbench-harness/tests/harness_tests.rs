// wsbench - Whitespace Collapse Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the benchmark harness.

use wsbench_collapse::{match_unicode_to_space, CANDIDATES};
use wsbench_harness::{
    standard_fixtures, BenchError, BenchmarkRunner, BenchmarkSuite, Candidate,
    CandidateRegistry, Fixture, HarnessConfig, OutputFormat,
};

const SEED: u64 = 1_234_567;

fn runner() -> BenchmarkRunner {
    BenchmarkRunner::new(HarnessConfig::default().with_pin_core(None))
}

fn quiet_config() -> HarnessConfig {
    HarnessConfig::default().with_pin_core(None)
}

// ===== Correctness =====

#[test]
fn test_reference_candidate_passes_everything() {
    let fixtures = standard_fixtures(SEED);
    let candidate = Candidate::new("reference", match_unicode_to_space);

    let result = runner().measure(&candidate, &fixtures, 0, None).unwrap();
    assert_eq!(result.passes.len(), fixtures.len() - 1);
    assert!(result.all_passed(), "{:?}", result.passes);
}

#[test]
fn test_candidate_pass_patterns() {
    // Columns: dup. spaces, spaces+tabs, spaces+CR/LF, "  " -> " ", " " -> " "
    let expected: &[(&str, [bool; 5])] = &[
        ("match_space_nel_keep", [true, false, false, true, true]),
        ("scan_space_only", [true, false, false, true, true]),
        ("match_unicode_keep", [true, false, false, true, true]),
        ("match_unicode_to_space", [true, true, true, true, true]),
        ("ascii_blank_trim", [true, true, true, false, false]),
        ("is_whitespace_keep", [true, false, false, true, true]),
        ("split_join_spaces", [true, false, false, false, false]),
        ("regex_compiled_spaces", [true, false, false, true, true]),
        ("trim_then_collapse", [true, true, true, false, false]),
        ("regex_ws_runs", [true, false, true, true, true]),
        ("regex_ws_uncompiled", [true, true, true, true, true]),
    ];
    assert_eq!(expected.len(), CANDIDATES.len());

    let fixtures = standard_fixtures(SEED);
    let mut runner = runner();
    for (candidate, (name, passes)) in CandidateRegistry::standard().iter().zip(expected) {
        assert_eq!(candidate.name(), *name);
        let result = runner.measure(candidate, &fixtures, 0, None).unwrap();
        assert_eq!(result.passes, passes.to_vec(), "unexpected outcome for {}", name);
    }
}

#[test]
fn test_warm_up_len_is_fixture_zero_output_length() {
    let fixtures = standard_fixtures(SEED);
    let mut runner = runner();

    for candidate in CandidateRegistry::standard().iter() {
        let expected = candidate.invoke(&fixtures[0].input).chars().count();
        let result = runner.measure(candidate, &fixtures, 0, None).unwrap();
        assert_eq!(result.warm_up_len, expected, "{}", candidate.name());
    }

    let baseline = Candidate::baseline(SEED.to_string());
    let result = runner.measure(&baseline, &fixtures, 0, None).unwrap();
    assert_eq!(result.warm_up_len, SEED.to_string().len());
}

#[test]
fn test_mismatch_does_not_stop_the_run() {
    let fixtures = standard_fixtures(SEED);
    let mut registry = CandidateRegistry::new();
    registry.register_fn("always_wrong", |_| String::from("nope"));
    registry.register_fn("reference", match_unicode_to_space);

    let mut out = Vec::new();
    let report = BenchmarkSuite::new(SEED, registry, quiet_config())
        .run(&mut out)
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert!(report.results[0].passes.iter().all(|p| !p));
    assert!(report.results[1].all_passed());
    assert_eq!(fixtures.len() - 1, report.fixtures.len());
}

// ===== Baseline =====

#[test]
fn test_baseline_rebased_on_itself_reports_zero() {
    let fixtures = standard_fixtures(SEED);
    let baseline = Candidate::baseline(SEED.to_string());
    let mut runner = runner();

    let first = runner.measure(&baseline, &fixtures, 0, None).unwrap();
    assert_eq!(first.reported_elapsed, first.elapsed_ticks);

    let second = runner
        .measure(&baseline, &fixtures, first.elapsed_ticks, None)
        .unwrap();
    assert_eq!(second.rebased(second.elapsed_ticks).reported_elapsed, 0);
    assert_eq!(
        second.reported_elapsed,
        second.elapsed_ticks - first.elapsed_ticks
    );
}

// ===== Contract =====

#[test]
fn test_fixtures_unchanged_by_run() {
    let fixtures = standard_fixtures(SEED);
    let before = fixtures.clone();
    let mut runner = runner();
    for candidate in CandidateRegistry::standard().iter() {
        runner.measure(candidate, &fixtures, 0, None).unwrap();
    }
    assert_eq!(fixtures, before);
}

#[test]
fn test_run_benchmark_writes_one_line() {
    let fixtures = standard_fixtures(SEED);
    let candidate = Candidate::new("reference", match_unicode_to_space);
    let mut out = Vec::new();

    runner()
        .run_benchmark(&candidate, &fixtures, 0, Some("shown"), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("| shown "));
    assert_eq!(text.matches("PASS").count(), 5);
}

#[test]
fn test_too_few_fixtures() {
    let fixtures = vec![Fixture::new("warm-up", "a", "a")];
    let candidate = Candidate::new("reference", match_unicode_to_space);
    let mut out = Vec::new();

    let err = runner()
        .run_benchmark(&candidate, &fixtures, 0, None, &mut out)
        .unwrap_err();
    assert!(matches!(err, BenchError::TooFewFixtures { count: 1 }));
    assert!(out.is_empty());
}

#[test]
#[should_panic(expected = "candidate blew up")]
fn test_candidate_panic_is_not_caught() {
    let fixtures = standard_fixtures(SEED);
    let candidate = Candidate::new("explodes", |_| panic!("candidate blew up"));
    let _ = runner().measure(&candidate, &fixtures, 0, None);
}

// ===== Suite =====

#[test]
fn test_suite_table_output() {
    let mut out = Vec::new();
    let report = BenchmarkSuite::new(SEED, CandidateRegistry::standard(), quiet_config())
        .run(&mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3 + CANDIDATES.len());
    assert!(lines[1].starts_with("| Function Name"));
    assert!(!text.contains("BASELINE"));

    for (line, (name, _)) in lines[3..].iter().zip(CANDIDATES) {
        assert!(line.starts_with(&format!("| {:<25} |", name)));
    }
    assert_eq!(report.seed, SEED);
    assert_eq!(report.fully_passing().count(), 2);
}

#[test]
fn test_suite_filter() {
    let config = quiet_config().with_filter("regex");
    let mut out = Vec::new();
    let report = BenchmarkSuite::new(SEED, CandidateRegistry::standard(), config)
        .run(&mut out)
        .unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["regex_compiled_spaces", "regex_ws_runs", "regex_ws_uncompiled"]
    );
}

#[test]
fn test_suite_json_output() {
    let config = quiet_config().with_format(OutputFormat::Json);
    let mut out = Vec::new();
    BenchmarkSuite::new(SEED, CandidateRegistry::standard(), config)
        .run(&mut out)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["seed"], SEED);
    assert_eq!(value["fixtures"].as_array().unwrap().len(), 5);
    assert_eq!(
        value["results"].as_array().unwrap().len(),
        CANDIDATES.len()
    );
}

#[test]
fn test_suite_rejects_invalid_config() {
    let config = quiet_config().with_name_width(0);
    let mut out = Vec::new();
    let err = BenchmarkSuite::new(SEED, CandidateRegistry::standard(), config)
        .run(&mut out)
        .unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_suite_custom_fixtures() {
    let fixtures = vec![
        Fixture::new("warm-up", "a  b", "a b"),
        Fixture::new("pair", "x \t y", "x y"),
        Fixture::new("single", "z", "z"),
    ];
    let mut registry = CandidateRegistry::new();
    registry.register_fn("reference", match_unicode_to_space);

    let suite = BenchmarkSuite::new(SEED, registry, quiet_config()).with_fixtures(fixtures);
    assert_eq!(suite.fixtures().len(), 3);
    assert_eq!(suite.fixtures()[1].label, "pair");

    let mut out = Vec::new();
    let report = suite.run(&mut out).unwrap();
    assert_eq!(report.fixtures, vec!["pair", "single"]);
    assert_eq!(report.results[0].passes, vec![true, true]);
    assert_eq!(report.results[0].warm_up_len, 3);

    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().next().unwrap().contains("TEST 2"));
    assert!(!text.contains("TEST 3"));
}

#[test]
fn test_suite_rejects_too_few_fixtures() {
    let suite = BenchmarkSuite::new(SEED, CandidateRegistry::standard(), quiet_config())
        .with_fixtures(vec![Fixture::new("warm-up", "a", "a")]);
    let mut out = Vec::new();
    let err = suite.run(&mut out).unwrap_err();
    assert!(matches!(err, BenchError::TooFewFixtures { count: 1 }));
    assert!(out.is_empty());
}
