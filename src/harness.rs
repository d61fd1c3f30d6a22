use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::collections::FxIndexMap;
use crate::errors::HarnessError;
use crate::metrics::platform_metrics;
use crate::producer::{self, ProducerConfig, SearchKind};
use crate::report::{ResultReport, RunMetadata};

/// Reports per algorithm tag, each group ordered by language tag
pub type ReportGroups = FxIndexMap<String, Vec<(RunMetadata, ResultReport)>>;


/// Inputs of one producer run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub grid_file: PathBuf,
    pub output_file: PathBuf,
    pub heuristic: Option<String>,
}

impl Invocation {

    /// Invocation writing to the conventional result file inside `out_dir`
    pub fn for_producer(
        grid_file: &Path,
        out_dir: &Path,
        metadata: &RunMetadata,
        heuristic: Option<&str>,
    ) -> Self {
        Self {
            grid_file: grid_file.to_path_buf(),
            output_file: out_dir.join(metadata.result_file_name()),
            heuristic: heuristic.map(str::to_string),
        }
    }
}


/// Something that turns a grid file into a result report
/// Reports are found again by their `result_<Algorithm>_<Language>.json` name
pub trait Producer {
    fn metadata(&self) -> RunMetadata;

    /// Run once and load the report it wrote
    fn run(&self, invocation: &Invocation) -> Result<ResultReport, HarnessError>;
}


/// External producer binary called as `program [args..] <grid> <output> [heuristic]`
#[derive(Clone, Debug)]
pub struct CommandProducer {
    pub program: String,
    pub args: Vec<String>,
    pub metadata: RunMetadata,
}

impl CommandProducer {
    pub fn new(program: impl Into<String>, metadata: RunMetadata) -> Self {
        Self { program: program.into(), args: Vec::new(), metadata }
    }

    /// Leading arguments, e.g. the script for an interpreter
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Producer for CommandProducer {
    fn metadata(&self) -> RunMetadata {
        self.metadata.clone()
    }

    fn run(&self, invocation: &Invocation) -> Result<ResultReport, HarnessError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(&invocation.grid_file)
            .arg(&invocation.output_file);
        if let Some(heuristic) = &invocation.heuristic {
            command.arg(heuristic);
        }

        info!("running {:?}", command);
        let status = command.status().map_err(|source| HarnessError::Launch {
            program: self.program.clone(),
            source,
        })?;

        // A failing producer still leaves a report with its status code
        if !invocation.output_file.is_file() {
            return Err(HarnessError::MissingReport {
                program: self.program.clone(),
                code: status.code(),
                report: invocation.output_file.clone(),
            });
        }
        if !status.success() {
            warn!("{} exited with {:?}", self.program, status.code());
        }
        Ok(ResultReport::read_from(&invocation.output_file)?)
    }
}


/// One of this crate's searches, run without spawning a process
#[derive(Clone, Debug)]
pub struct InProcessProducer {
    pub search: SearchKind,
    pub language: String,
}

impl InProcessProducer {
    pub fn new(search: SearchKind) -> Self {
        Self { search, language: producer::LANGUAGE.to_string() }
    }
}

impl Producer for InProcessProducer {
    fn metadata(&self) -> RunMetadata {
        RunMetadata::new(self.search.name(), self.language.clone())
    }

    fn run(&self, invocation: &Invocation) -> Result<ResultReport, HarnessError> {
        let search = match &self.search {
            SearchKind::AStar { .. } => SearchKind::AStar { heuristic: invocation.heuristic.clone() },
            other => other.clone(),
        };
        let config = ProducerConfig {
            grid_file: invocation.grid_file.clone(),
            output_file: invocation.output_file.clone(),
            language: self.language.clone(),
            frame: false,
            search,
        };

        let status = producer::run(&config, platform_metrics().as_ref());
        info!("{}: status {status}", config.search.name());
        Ok(ResultReport::read_from(&invocation.output_file)?)
    }
}


/// Run every producer on `grid_file`, writing reports into `out_dir`
/// A producer that fails does not stop the others
pub fn run_producers(
    producers: &[Box<dyn Producer>],
    grid_file: &Path,
    out_dir: &Path,
    heuristic: Option<&str>,
) -> Vec<(RunMetadata, Result<ResultReport, HarnessError>)> {
    producers
        .iter()
        .map(|p| {
            let metadata = p.metadata();
            let invocation = Invocation::for_producer(grid_file, out_dir, &metadata, heuristic);
            let outcome = p.run(&invocation);
            if let Err(e) = &outcome {
                warn!("{}/{}: {e}", metadata.algorithm, metadata.language);
            }
            (metadata, outcome)
        })
        .collect()
}


/// Load every `result_<Algorithm>_<Language>.json` in `dir`, grouped by algorithm
/// Other files are ignored, unreadable reports are skipped with a warning
pub fn collect_reports(dir: &Path) -> Result<ReportGroups, HarnessError> {
    let entries = fs::read_dir(dir).map_err(|source| HarnessError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut found: Vec<(RunMetadata, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| HarnessError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(metadata) = name.to_str().and_then(RunMetadata::from_file_name) else {
            continue;
        };
        found.push((metadata, entry.path()));
    }
    // read_dir order is platform dependent
    found.sort();

    let mut groups = ReportGroups::default();
    for (metadata, path) in found {
        match ResultReport::read_from(&path) {
            Ok(report) => groups
                .entry(metadata.algorithm.clone())
                .or_default()
                .push((metadata, report)),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    Ok(groups)
}


/// What two reports of the same algorithm disagree on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disagreement {
    Status,
    AlgorithmMap,
    PathLength,
    Path,
}

/// A report that differs from the first report of its group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub reference: RunMetadata,
    pub other: RunMetadata,
    pub kind: Disagreement,
}

/// Compare every report in a group against the group's first report
/// Timing and memory are expected to differ and are not compared
pub fn compare_reports(groups: &ReportGroups) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for reports in groups.values() {
        let Some(((reference_meta, reference), rest)) = reports.split_first() else {
            continue;
        };
        for (meta, report) in rest {
            let checks = [
                (Disagreement::Status, reference.status_code != report.status_code),
                (Disagreement::AlgorithmMap, reference.algorithm_map != report.algorithm_map),
                (Disagreement::PathLength, reference.path_length != report.path_length),
                (Disagreement::Path, reference.path != report.path),
            ];
            for (kind, differs) in checks {
                if differs {
                    warn!(
                        "{}: {} and {} disagree on {kind:?}",
                        reference_meta.algorithm, reference_meta.language, meta.language
                    );
                    mismatches.push(Mismatch {
                        reference: reference_meta.clone(),
                        other: meta.clone(),
                        kind,
                    });
                }
            }
        }
    }
    mismatches
}
