use std::time::{Duration, Instant};

use log::trace;

use crate::errors::SearchError;
use crate::graph_algos::SearchResult;


/// Source of the current process's resident memory
/// Searches never query the platform themselves, producers pass one of these to `measure`
pub trait ProcessMetrics {
    /// Resident set size in bytes, None when the platform can't say
    fn resident_bytes(&self) -> Option<u64>;
}


/// Reports nothing, memory deltas come out as 0
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMetrics;

impl ProcessMetrics for NullMetrics {
    fn resident_bytes(&self) -> Option<u64> {
        None
    }
}


/// Reads `VmRSS` from `/proc/self/status`
#[cfg(target_os = "linux")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcFsMetrics;

#[cfg(target_os = "linux")]
impl ProcessMetrics for ProcFsMetrics {
    fn resident_bytes(&self) -> Option<u64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_vm_rss(&status)
    }
}

/// Best implementation for the target platform
pub fn platform_metrics() -> Box<dyn ProcessMetrics> {
    #[cfg(target_os = "linux")]
    {
        Box::new(ProcFsMetrics)
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(NullMetrics)
    }
}

/// `VmRSS:  1234 kB` -> bytes
pub(crate) fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kib: u64 = line["VmRSS:".len()..]
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kib * 1024)
}


/// Run `f`, returning its value with the wall clock and resident memory change it caused
pub fn measure<T, F>(metrics: &dyn ProcessMetrics, f: F) -> (T, Duration, i64)
where
    F: FnOnce() -> T,
{
    let before = metrics.resident_bytes();
    let started = Instant::now();
    let value = f();
    let elapsed = started.elapsed();
    let after = metrics.resident_bytes();

    let delta = match (before, after) {
        (Some(b), Some(a)) => a as i64 - b as i64,
        _ => 0,
    };
    trace!("measured {elapsed:?}, resident delta {delta} bytes");
    (value, elapsed, delta)
}

/// Run a search and stamp its result with the measured time and memory
pub fn measure_search<F>(metrics: &dyn ProcessMetrics, search: F) -> Result<SearchResult, SearchError>
where
    F: FnOnce() -> Result<SearchResult, SearchError>,
{
    let (result, elapsed, delta) = measure(metrics, search);
    result.map(|mut result| {
        result.elapsed = elapsed;
        result.memory_delta = delta;
        result
    })
}
