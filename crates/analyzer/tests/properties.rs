#![forbid(unsafe_code)]

mod common;

use analyzer::{DelayLoadClassifier, DelayLoadReport};
use capture::{AccessedPage, ImageSectionResolver, LoadReason, Process, TraceCapture};
use common::*;
use config::Config;
use proptest::prelude::*;

const PATHS: [&str; 4] = [
    "C:\\Windows\\System32\\a.dll",
    "C:\\Windows\\System32\\b.dll",
    "C:\\Windows\\System32\\c.dll",
    "C:\\Windows\\System32\\d.dll",
];

fn run(capture: &TraceCapture) -> DelayLoadReport {
    DelayLoadClassifier::new(&Config::default())
        .unwrap()
        .classify(capture, &ImageSectionResolver)
}

fn load_reason() -> impl Strategy<Value = LoadReason> {
    prop_oneof![
        Just(LoadReason::StaticDependency),
        Just(LoadReason::Dynamic),
        Just(LoadReason::Other),
    ]
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Code,
    Loader,
    Data,
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Code), Just(Kind::Loader), Just(Kind::Data)]
}

prop_compose! {
    fn arbitrary_capture()(
        loads in prop::collection::vec((0u32..3, 0usize..PATHS.len(), load_reason()), 0..16),
        accesses in prop::collection::vec((0u32..4, 0usize..PATHS.len(), kind()), 0..24),
    ) -> TraceCapture {
        let processes = (0u32..3)
            .map(|pid| {
                let images = loads
                    .iter()
                    .filter(|(owner, _, _)| *owner == pid)
                    .map(|(_, path, reason)| image(PATHS[*path], *reason))
                    .collect();
                process("proc.exe", pid, images)
            })
            .collect();
        let accesses = accesses
            .into_iter()
            .map(|(pid, path, kind)| to_access(&Process::new("proc.exe", pid), PATHS[path], kind))
            .collect();
        build_capture(processes, accesses)
    }
}

fn to_access(process: &Process, path: &str, kind: Kind) -> AccessedPage {
    match kind {
        Kind::Code => code_access(process, path),
        Kind::Loader => loader_access(process, path),
        Kind::Data => access(Some(process.clone()), path, DATA_OFFSET, None),
    }
}

fn loaded_statically(capture: &TraceCapture, process: &str, path: &str) -> bool {
    capture.processes.iter().any(|record| {
        record.process.identity() == process
            && record
                .images
                .iter()
                .any(|image| image.path == path && image.is_static_dependency())
    })
}

proptest! {
    #[test]
    fn classification_is_idempotent(capture in arbitrary_capture()) {
        prop_assert_eq!(run(&capture), run(&capture));
    }

    #[test]
    fn output_is_sorted_and_unique(capture in arbitrary_capture()) {
        let candidates = run(&capture).candidates;
        prop_assert!(candidates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn only_static_dependencies_are_candidates(capture in arbitrary_capture()) {
        for candidate in run(&capture).candidates {
            prop_assert!(loaded_statically(&capture, &candidate.process, &candidate.image));
        }
    }

    #[test]
    fn loader_accesses_never_disqualify(capture in arbitrary_capture(), extra in 1usize..8) {
        let before = run(&capture);
        let mut noisy = capture.clone();
        for candidate in &before.candidates {
            let pid = candidate
                .process
                .trim_end_matches(')')
                .rsplit('(')
                .next()
                .and_then(|pid| pid.parse().ok())
                .unwrap();
            let process = Process::new("proc.exe", pid);
            for _ in 0..extra {
                noisy.reference_set[0]
                    .page_accesses
                    .push(loader_access(&process, &candidate.image));
            }
        }
        prop_assert_eq!(run(&noisy).candidates, before.candidates);
    }

    #[test]
    fn more_code_accesses_only_remove_candidates(
        capture in arbitrary_capture(),
        pid in 0u32..3,
        path in 0usize..PATHS.len(),
    ) {
        let before = run(&capture).candidates;
        let mut more = capture.clone();
        more.reference_set[0]
            .page_accesses
            .push(code_access(&Process::new("proc.exe", pid), PATHS[path]));
        let after = run(&more).candidates;

        prop_assert!(after.iter().all(|candidate| before.contains(candidate)));
        let hit = format!("proc.exe ({pid})");
        prop_assert!(!after.iter().any(|c| c.process == hit && c.image == PATHS[path]));
    }

    #[test]
    fn untouched_static_loads_are_candidates(
        pids in prop::collection::btree_set(0u32..5, 1..5),
    ) {
        let processes = pids
            .iter()
            .map(|pid| {
                let loads = vec![image(PATHS[0], LoadReason::StaticDependency)];
                process("proc.exe", *pid, loads)
            })
            .collect();
        let report = run(&build_capture(processes, vec![]));
        prop_assert_eq!(report.candidates.len(), pids.len());
    }
}
