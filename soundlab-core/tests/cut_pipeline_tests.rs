// soundlab-core/tests/cut_pipeline_tests.rs

mod common;

use common::{
    DUMMY_OUTPUT, FailingProber, MockFfmpegSpawner, MockProber, SOURCE_BYTES, config_in,
    entries_in, value_after,
};
use soundlab_core::edit::{Region, ValidationError};
use soundlab_core::{CoreError, cut_audio};
use tempfile::tempdir;

#[test]
fn test_mid_track_cut_extracts_twice_then_joins() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let spawner = MockFfmpegSpawner::new();
    let prober = MockProber::with_duration(10.0);

    let output = cut_audio(
        &spawner,
        &prober,
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(3.0, 7.0),
    )?;

    assert_eq!(output.file_name, "cut.wav");
    assert_eq!(output.mime_type, "audio/wav");
    assert_eq!(output.bytes, DUMMY_OUTPUT);

    let calls = spawner.get_received_calls();
    assert_eq!(calls.len(), 3, "two extractions and one concat: {calls:?}");

    // Extractions run in parallel, so their order is not fixed.
    let extractions = &calls[..2];
    assert!(
        extractions
            .iter()
            .any(|args| value_after(args, "-t") == Some("3") && !args.contains(&"-ss".to_string())),
        "before-segment extraction missing: {extractions:?}"
    );
    assert!(
        extractions
            .iter()
            .any(|args| value_after(args, "-ss") == Some("7") && !args.contains(&"-t".to_string())),
        "after-segment extraction missing: {extractions:?}"
    );

    let concat = &calls[2];
    assert_eq!(value_after(concat, "-f"), Some("concat"));
    assert_eq!(value_after(concat, "-safe"), Some("0"));
    assert_eq!(value_after(concat, "-c"), Some("copy"));

    Ok(())
}

#[test]
fn test_trailing_cut_skips_join() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let spawner = MockFfmpegSpawner::new();

    let output = cut_audio(
        &spawner,
        &MockProber::with_duration(10.0),
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "mp3",
        Region::new(3.0, 10.0),
    )?;

    let calls = spawner.get_received_calls();
    assert_eq!(calls.len(), 1, "single extraction expected: {calls:?}");
    assert_eq!(value_after(&calls[0], "-t"), Some("3"));
    assert!(!calls[0].iter().any(|a| a == "concat"));
    assert!(calls[0].last().unwrap().ends_with("cut.wav"));
    assert_eq!(output.bytes, DUMMY_OUTPUT);

    Ok(())
}

#[test]
fn test_leading_cut_keeps_tail_only() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let spawner = MockFfmpegSpawner::new();

    cut_audio(
        &spawner,
        &MockProber::with_duration(10.0),
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(0.0, 4.0),
    )?;

    let calls = spawner.get_received_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(value_after(&calls[0], "-ss"), Some("4"));

    Ok(())
}

#[test]
fn test_whole_track_cut_rejected_without_engine_work() {
    let tmp = tempdir().unwrap();
    let spawner = MockFfmpegSpawner::new();

    let err = cut_audio(
        &spawner,
        &MockProber::with_duration(10.0),
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(0.0, 10.0),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::WholeTrackCut { .. })
    ));
    assert!(spawner.get_received_calls().is_empty());
    assert_eq!(entries_in(tmp.path()), 0, "working directory left behind");
}

#[test]
fn test_malformed_request_rejected_before_probe() {
    let tmp = tempdir().unwrap();
    let spawner = MockFfmpegSpawner::new();
    let prober = MockProber::with_duration(10.0);

    let err = cut_audio(
        &spawner,
        &prober,
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(5.0, 3.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::InvalidRegion { .. })
    ));

    let err = cut_audio(
        &spawner,
        &prober,
        &config_in(tmp.path()),
        &[],
        "wav",
        Region::new(1.0, 3.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::EmptySource)
    ));

    assert!(prober.probed_paths().is_empty());
    assert!(spawner.get_received_calls().is_empty());
    assert_eq!(entries_in(tmp.path()), 0);
}

#[test]
fn test_engine_failure_surfaces_diagnostics_and_cleans_up() {
    let tmp = tempdir().unwrap();
    let spawner = MockFfmpegSpawner::new();
    spawner.fail_when("concat", 1, &["concat.txt: Invalid data found when processing input"]);

    let err = cut_audio(
        &spawner,
        &MockProber::with_duration(10.0),
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(3.0, 7.0),
    )
    .unwrap_err();

    match err {
        CoreError::CommandFailed(label, status, diagnostics) => {
            assert_eq!(label, "ffmpeg (concat)");
            assert!(!status.success());
            assert!(diagnostics.contains("Invalid data found"));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    assert_eq!(entries_in(tmp.path()), 0, "working directory left behind");
}

#[test]
fn test_probe_failure_is_propagated() {
    let tmp = tempdir().unwrap();
    let spawner = MockFfmpegSpawner::new();

    let err = cut_audio(
        &spawner,
        &FailingProber,
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(3.0, 7.0),
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::FfprobeParse(_)));
    assert!(spawner.get_received_calls().is_empty());
    assert_eq!(entries_in(tmp.path()), 0);
}

#[test]
fn test_missing_segment_output_is_an_engine_failure() {
    let tmp = tempdir().unwrap();
    let spawner = MockFfmpegSpawner::new();
    spawner.skip_output_when("cut.wav");

    let err = cut_audio(
        &spawner,
        &MockProber::with_duration(10.0),
        &config_in(tmp.path()),
        SOURCE_BYTES,
        "wav",
        Region::new(3.0, 10.0),
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::MissingOutput(_, _)));
    assert_eq!(entries_in(tmp.path()), 0);
}
