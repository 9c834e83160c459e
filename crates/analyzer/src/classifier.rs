#![forbid(unsafe_code)]

use crate::domain::{ImageId, ProcessId};
use crate::error::Error;
use crate::loader::LoaderSignature;
use crate::report::{DelayLoadCandidate, DelayLoadReport, PassStats};
use crate::stores::{CandidateKey, Stores};
use capture::{AccessedPage, ImageSectionResolver, Process, SectionResolver, TraceCapture};
use config::Config;
use itertools::Itertools;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, trace};

/// Finds statically loaded images whose code a process never runs outside
/// the loader.
#[derive(Debug, Clone)]
pub struct DelayLoadClassifier {
    code_section_marker: String,
    excluded_processes: HashSet<String>,
    loader: LoaderSignature,
}

/// What a single page access means for candidacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict<'a> {
    UnknownProcess,
    ExcludedProcess,
    NoFile,
    NotImage,
    NotCode,
    Loader,
    Disqualifying(ImageId, &'a Process),
}

impl DelayLoadClassifier {
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.classifier.validate()?;
        Ok(Self {
            code_section_marker: config.classifier.code_section_marker.clone(),
            excluded_processes: config.classifier.excluded_processes.iter().cloned().collect(),
            loader: LoaderSignature::new(&config.classifier),
        })
    }

    /// Run the pass over a decoded capture.
    pub fn classify(
        &self,
        capture: &TraceCapture,
        resolver: &dyn SectionResolver,
    ) -> DelayLoadReport {
        let mut stores = Stores::default();
        let mut stats = PassStats::default();

        self.register_loads(capture, &mut stores, &mut stats);
        self.scan_accesses(capture, resolver, &mut stores, &mut stats);

        let candidates: Vec<DelayLoadCandidate> = stores
            .candidacy
            .eligible()
            .filter_map(|key| {
                let process = stores.processes.get(key.process())?;
                let image = stores.images.get(key.image())?;
                Some(DelayLoadCandidate::new(process.as_str(), image.path.as_str()))
            })
            .sorted()
            .collect();

        stats.processes = stores.processes.len();
        stats.images = stores.images.len();
        stats.candidates = candidates.len();
        info!(
            processes = stats.processes,
            images = stats.images,
            accesses = stats.accesses_scanned,
            disqualifying = stats.disqualifying_accesses,
            candidates = stats.candidates,
            "delay-load classification finished"
        );

        DelayLoadReport { candidates, stats }
    }

    fn register_loads(&self, capture: &TraceCapture, stores: &mut Stores, stats: &mut PassStats) {
        for record in &capture.processes {
            let process_id = stores.ensure_process(&record.process);
            for image in record.images.iter().filter(|image| image.is_loaded()) {
                let image_id = stores.ensure_image(image);
                let eligible = image.is_static_dependency();
                stores
                    .candidacy
                    .observe_load(CandidateKey::new(image_id, process_id), eligible);
            }
        }
        stats.static_candidates = stores.candidacy.eligible().count();
        debug!(
            pairs = stores.candidacy.len(),
            static_candidates = stats.static_candidates,
            "image loads registered"
        );
    }

    fn scan_accesses(
        &self,
        capture: &TraceCapture,
        resolver: &dyn SectionResolver,
        stores: &mut Stores,
        stats: &mut PassStats,
    ) {
        for access in capture.page_accesses() {
            stats.accesses_scanned += 1;
            match self.evaluate(access, stores, resolver) {
                Verdict::UnknownProcess => stats.skipped_unknown_process += 1,
                Verdict::ExcludedProcess => stats.skipped_excluded_process += 1,
                Verdict::NoFile => stats.skipped_no_file += 1,
                Verdict::NotImage => stats.skipped_not_image += 1,
                Verdict::NotCode => stats.skipped_not_code += 1,
                Verdict::Loader => stats.loader_accesses += 1,
                Verdict::Disqualifying(image_id, process) => {
                    stats.disqualifying_accesses += 1;
                    let process_id = stores.ensure_process(process);
                    self.disqualify(stores, image_id, process_id);
                }
            }
        }
    }

    fn evaluate<'a>(
        &self,
        access: &'a AccessedPage,
        stores: &Stores,
        resolver: &dyn SectionResolver,
    ) -> Verdict<'a> {
        let Some(process) = access.process.as_ref() else {
            return Verdict::UnknownProcess;
        };
        if self.excluded_processes.contains(&process.image_name) {
            return Verdict::ExcludedProcess;
        }
        let (Some(page), Some(path)) = (access.page.as_ref(), access.path()) else {
            return Verdict::NoFile;
        };
        let Some((image_id, image)) = stores
            .images
            .id_by_path(path)
            .and_then(|id| Some((id, stores.images.get(id)?)))
        else {
            return Verdict::NotImage;
        };

        let section = resolver.section_name(image, page);
        if !section.is_code(&self.code_section_marker) {
            trace!(%process, path, %section, "access outside code");
            return Verdict::NotCode;
        }
        if self.loader.is_loader_access(access) {
            trace!(%process, path, %section, "loader access");
            return Verdict::Loader;
        }
        Verdict::Disqualifying(image_id, process)
    }

    fn disqualify(&self, stores: &mut Stores, image: ImageId, process: ProcessId) {
        let revoked = stores.candidacy.disqualify(CandidateKey::new(image, process));
        if revoked {
            trace!(
                process = ?stores.processes.get(process),
                image = ?stores.images.get(image).map(|image| image.path.as_str()),
                "code executed outside the loader; candidate revoked"
            );
        }
    }
}

/// Load a capture from disk and classify it with the section tables it
/// carries.
pub fn analyze_file(path: impl AsRef<Path>, config: &Config) -> Result<DelayLoadReport, Error> {
    let classifier = DelayLoadClassifier::new(config)?;
    let capture = TraceCapture::load(path)?;
    Ok(classifier.classify(&capture, &ImageSectionResolver))
}
