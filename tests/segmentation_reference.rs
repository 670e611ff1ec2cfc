use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use news_segmenter::{DetectionInput, Segment, SegmentPipelineBuilder, SegmenterConfig};
use serde::Deserialize;

const SUITE_NAME: &str = "segmentation_reference";
const DEFAULT_DELTA_SECS: f64 = 1e-9;

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    id: String,
    input: DetectionInput,
    #[serde(default)]
    config: SegmenterConfig,
    #[serde(default)]
    expected_segments: Option<Vec<Segment>>,
    #[serde(default)]
    expected_error: Option<String>,
}

fn main() {
    let args = Arguments::from_args();
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let delta_secs = env_f64("SEGMENTER_IT_DELTA_SECS", DEFAULT_DELTA_SECS);

    let cases = match load_all_cases(&repo_root.join("test-data/cases")) {
        Ok(cases) => cases,
        Err(err) => {
            run_setup_failure(&args, err);
            return;
        }
    };
    if cases.is_empty() {
        run_setup_failure(
            &args,
            "No reference cases found under test-data/cases.".to_string(),
        );
        return;
    }

    let tests = cases
        .into_iter()
        .map(|(file_stem, case)| {
            let test_name = format!("{SUITE_NAME}::{file_stem}::{}", case.id);
            Trial::test(test_name, move || {
                run_reference_case(&case, delta_secs).map_err(Failed::from)
            })
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

fn run_setup_failure(args: &Arguments, message: String) {
    let test = Trial::test(format!("{SUITE_NAME}::setup"), move || {
        Err(Failed::from(message))
    });
    libtest_mimic::run(args, vec![test]).exit();
}

fn run_reference_case(case: &ReferenceCase, delta_secs: f64) -> Result<(), String> {
    let outcome = SegmentPipelineBuilder::new(case.config.clone())
        .build()
        .and_then(|pipeline| pipeline.process(&case.input));

    match (&case.expected_segments, &case.expected_error, outcome) {
        (Some(expected), None, Ok(output)) => {
            compare_segments(&case.id, expected, &output.segments, delta_secs)
        }
        (None, Some(expected_kind), Err(err)) => {
            if err.kind() == expected_kind.as_str() {
                Ok(())
            } else {
                Err(format!(
                    "{}: expected error '{expected_kind}', got '{}' ({err})",
                    case.id,
                    err.kind()
                ))
            }
        }
        (Some(_), None, Err(err)) => Err(format!(
            "{}: expected segments, got error '{}' ({err})",
            case.id,
            err.kind()
        )),
        (None, Some(expected_kind), Ok(output)) => Err(format!(
            "{}: expected error '{expected_kind}', got {} segments",
            case.id,
            output.segments.len()
        )),
        _ => Err(format!(
            "{}: fixture must set exactly one of expected_segments / expected_error",
            case.id
        )),
    }
}

fn compare_segments(
    id: &str,
    expected: &[Segment],
    observed: &[Segment],
    delta_secs: f64,
) -> Result<(), String> {
    if expected.len() != observed.len() {
        return Err(format!(
            "{id}: segment count mismatch (expected {}, got {})",
            expected.len(),
            observed.len()
        ));
    }

    for (idx, (want, got)) in expected.iter().zip(observed).enumerate() {
        let start_diff = (want.start - got.start).abs();
        let end_diff = (want.end - got.end).abs();
        if start_diff > delta_secs || end_diff > delta_secs {
            return Err(format!(
                "{id}: segment #{idx} mismatch (expected {:.3}..{:.3}, got {:.3}..{:.3})",
                want.start, want.end, got.start, got.end
            ));
        }
    }

    for (idx, pair) in observed.windows(2).enumerate() {
        if pair[1].start < pair[0].end {
            return Err(format!("{id}: segments #{idx} and #{} overlap", idx + 1));
        }
    }
    Ok(())
}

fn load_all_cases(dir: &Path) -> Result<Vec<(String, ReferenceCase)>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|err| format!("Failed to read fixture dir '{}': {err}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|err| format!("Failed to list fixture dir '{}': {err}", dir.display()))?
            .path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut all_cases = Vec::new();
    for path in paths {
        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        for case in load_case_file(&path)? {
            all_cases.push((file_stem.clone(), case));
        }
    }
    Ok(all_cases)
}

fn load_case_file(path: &Path) -> Result<Vec<ReferenceCase>, String> {
    let file = File::open(path)
        .map_err(|err| format!("Failed to open fixture '{}': {err}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Failed to parse fixture '{}': {err}", path.display()))
}

fn env_f64(name: &str, default: f64) -> f64 {
    match env::var(name) {
        Ok(value) => value.trim().parse::<f64>().unwrap_or_else(|err| {
            panic!(
                "Invalid value for {}='{}' (expected f64): {}",
                name, value, err
            )
        }),
        Err(_) => default,
    }
}
