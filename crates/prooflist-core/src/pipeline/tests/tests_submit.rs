//! Tests for HashPipeline::submit_batch

#![allow(clippy::expect_used)]

use std::sync::Arc;

use tokio::sync::Notify;

use crate::notice::NoticeLevel;
use crate::pipeline::tests::support::{
    numbered_files, pipeline_with_log, FailingFile, GatedFile, RecordingObserver, TestFile,
};
use crate::pipeline::{
    FileError, MemoryFile, PipelineConfig, PipelineError, ProgressPhase, SilentObserver,
};

#[tokio::test]
async fn test_three_file_scenario() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());
    let files = vec![
        MemoryFile::new("a.txt", "abcd"),
        MemoryFile::new("b", Vec::new()),
        MemoryFile::new("report.v1.txt", "quarterly"),
    ];

    let summary = pipeline
        .submit_batch(files, &mut SilentObserver)
        .await
        .expect("batch should be accepted");

    assert_eq!(summary.requested, 3);
    assert_eq!(summary.accepted, 3);
    assert_eq!(summary.hashed, 3);
    assert!(!summary.truncated());

    let results = pipeline.snapshot();
    assert_eq!(results.len(), 3);
    assert_eq!((results[0].name.as_str(), results[0].extension.as_str()), ("a", "txt"));
    assert_eq!(
        results[0].hash,
        "88d4266fd4e6338d13b845fcf289579d209c897823b9217da3e161936f031589"
    );
    assert_eq!((results[1].name.as_str(), results[1].extension.as_str()), ("b", ""));
    assert_eq!(
        (results[2].name.as_str(), results[2].extension.as_str()),
        ("reportv1", "txt")
    );

    let notices = log.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].message, "Successfully processed 3 files!");
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn test_single_file_success_message_is_singular() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());

    pipeline
        .submit_batch(vec![MemoryFile::new("one.bin", "1")], &mut SilentObserver)
        .await
        .expect("batch should be accepted");

    assert_eq!(log.notices()[0].message, "Successfully processed 1 file!");
}

#[tokio::test]
async fn test_batch_over_capacity_is_truncated_with_warning() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());

    let summary = pipeline
        .submit_batch(numbered_files(1005), &mut SilentObserver)
        .await
        .expect("batch should be accepted");

    assert_eq!(pipeline.len(), 1000);
    assert_eq!(summary.requested, 1005);
    assert_eq!(summary.accepted, 1000);
    assert!(summary.truncated());
    assert_eq!(log.count(NoticeLevel::Warning), 1);
    assert_eq!(log.count(NoticeLevel::Error), 0);
    assert_eq!(
        log.notices()[0].message,
        "Only processing first 1000 files. Maximum limit is 1000 files."
    );
}

#[tokio::test]
async fn test_truncation_keeps_the_leading_files() {
    let (pipeline, _log) = pipeline_with_log(PipelineConfig::default().with_max_batch_size(5));
    pipeline
        .submit_batch(numbered_files(3), &mut SilentObserver)
        .await
        .expect("batch should be accepted");

    let summary = pipeline
        .submit_batch(
            vec![
                MemoryFile::new("x.txt", "x"),
                MemoryFile::new("y.txt", "y"),
                MemoryFile::new("z.txt", "z"),
            ],
            &mut SilentObserver,
        )
        .await
        .expect("batch should be accepted");

    assert_eq!(summary.accepted, 2);
    let names: Vec<_> = pipeline.snapshot().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["file0", "file1", "file2", "x", "y"]);
}

#[tokio::test]
async fn test_full_list_rejects_with_limit_error() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default().with_max_batch_size(2));
    pipeline
        .submit_batch(numbered_files(2), &mut SilentObserver)
        .await
        .expect("batch should be accepted");
    let mut observer = RecordingObserver::default();

    let outcome = pipeline
        .submit_batch(numbered_files(1), &mut observer)
        .await;

    assert!(matches!(outcome, Err(PipelineError::LimitReached { limit: 2 })));
    assert_eq!(pipeline.len(), 2);
    assert!(observer.events.is_empty());
    assert_eq!(observer.completions, 0);
    assert!(!pipeline.is_busy());
    let last = log.notices().pop().expect("an error notice was emitted");
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(
        last.message,
        "Maximum limit of 2 files reached. Please clear existing files first."
    );
}

#[tokio::test]
async fn test_empty_batch_is_a_silent_no_op() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());
    let mut observer = RecordingObserver::default();

    let summary = pipeline
        .submit_batch(Vec::<MemoryFile>::new(), &mut observer)
        .await
        .expect("empty batch is accepted");

    assert_eq!(summary.accepted, 0);
    assert!(observer.events.is_empty());
    assert_eq!(observer.completions, 0);
    assert!(log.notices().is_empty());
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn test_failed_file_is_skipped_and_batch_continues() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());
    let files = vec![
        TestFile::Ok(MemoryFile::new("first.txt", "1")),
        TestFile::Failing(FailingFile::new("broken.txt")),
        TestFile::Ok(MemoryFile::new("third.txt", "3")),
    ];
    let mut observer = RecordingObserver::default();

    let summary = pipeline
        .submit_batch(files, &mut observer)
        .await
        .expect("batch should be accepted");

    assert_eq!(summary.hashed, 2);
    assert_eq!(summary.failed(), 1);
    assert!(matches!(&summary.failures[0], FileError::Read { name, .. } if name == "broken.txt"));
    assert_eq!(summary.failures[0].file_name(), "broken.txt");

    let names: Vec<_> = pipeline.snapshot().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["first", "third"]);

    assert_eq!(observer.completions, 1);
    assert_eq!(observer.events.len(), 6);
    assert_eq!(observer.events[3].processed, 2);
    assert_eq!(observer.events[3].phase, ProgressPhase::Between);

    let errors: Vec<_> = log
        .notices()
        .into_iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Error processing broken.txt");
}

#[tokio::test]
async fn test_all_files_failing_still_returns_to_idle() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());
    let files = vec![FailingFile::new("a.bin"), FailingFile::new("b.bin")];
    let mut observer = RecordingObserver::default();

    let summary = pipeline
        .submit_batch(files, &mut observer)
        .await
        .expect("batch should be accepted");

    assert_eq!(summary.hashed, 0);
    assert_eq!(summary.failed(), 2);
    assert!(pipeline.is_empty());
    assert!(!pipeline.is_busy());
    assert_eq!(observer.completions, 1);
    assert_eq!(log.count(NoticeLevel::Error), 2);
}

#[tokio::test]
async fn test_submit_while_busy_is_rejected() {
    let (pipeline, log) = pipeline_with_log(PipelineConfig::default());
    let gate = Arc::new(Notify::new());
    let slow = vec![GatedFile {
        name: "slow.bin".to_string(),
        gate: Arc::clone(&gate),
    }];
    let other = pipeline.clone();
    let mut first_observer = RecordingObserver::default();

    let (first, (second, progress_during, len_during, clear_during)) = tokio::join!(
        pipeline.submit_batch(slow, &mut first_observer),
        async {
            while !other.is_busy() {
                tokio::task::yield_now().await;
            }
            let mut observer = RecordingObserver::default();
            let outcome = other
                .submit_batch(vec![MemoryFile::new("a.txt", "abcd")], &mut observer)
                .await;
            assert!(observer.events.is_empty());
            let progress = other.batch_progress();
            let len = other.len();
            let clear = other.clear();
            gate.notify_one();
            (outcome, progress, len, clear)
        }
    );

    assert!(matches!(second, Err(PipelineError::Busy)));
    assert_eq!(clear_during, Err(PipelineError::Busy));
    assert_eq!(progress_during, Some((0, 1)));
    assert_eq!(len_during, 0);

    let summary = first.expect("first batch should complete");
    assert_eq!(summary.hashed, 1);
    assert_eq!(first_observer.completions, 1);
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.snapshot()[0].name, "slow");
    assert!(!pipeline.is_busy());
    assert_eq!(pipeline.batch_progress(), None);

    let warnings: Vec<_> = log
        .notices()
        .into_iter()
        .filter(|n| n.level == NoticeLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Files are already being processed. Please wait..."
    );
}

#[tokio::test]
async fn test_large_batch_with_yielding_completes_in_order() {
    let (pipeline, _log) = pipeline_with_log(PipelineConfig::default().with_yield_every(50));

    let summary = pipeline
        .submit_batch(numbered_files(120), &mut SilentObserver)
        .await
        .expect("batch should be accepted");

    assert_eq!(summary.hashed, 120);
    let results = pipeline.snapshot();
    assert!(results
        .iter()
        .enumerate()
        .all(|(i, r)| r.name == format!("file{i}")));
}

#[tokio::test]
async fn test_busy_clears_when_batch_future_is_dropped() {
    let (pipeline, _log) = pipeline_with_log(PipelineConfig::default());
    let gate = Arc::new(Notify::new());
    let slow = vec![GatedFile {
        name: "never.bin".to_string(),
        gate,
    }];
    let mut observer = SilentObserver;

    {
        let batch = pipeline.submit_batch(slow, &mut observer);
        tokio::pin!(batch);
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), &mut batch).await;
        assert!(timed_out.is_err());
        assert!(pipeline.is_busy());
    }

    assert!(!pipeline.is_busy());
}
