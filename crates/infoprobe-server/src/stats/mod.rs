//! OS statistics sampling.
//!
//! Handlers depend on the [`StatsSource`] trait so tests can swap in fixed or
//! failing sources; production uses [`SysinfoSource`].

pub mod host;
mod process;

use infoprobe_core::error::Result;

pub use host::SysinfoSource;

/// One point-in-time reading of host/process statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSample {
    /// Host-wide CPU utilisation since the previous sample, 0..=100.
    pub cpu_percent: f64,
    /// Host memory in use, 0..=100.
    pub memory_percent: f64,
    /// OS threads belonging to this process, at least 1.
    pub thread_count: u64,
    /// Space used on the root filesystem, 0..=100.
    pub disk_percent: f64,
    pub process: ProcessSample,
}

/// Standard `process_*` collector readings for this process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSample {
    /// User plus system CPU time consumed so far.
    pub cpu_seconds: f64,
    pub resident_memory_bytes: u64,
    pub virtual_memory_bytes: u64,
    /// Unix time the process started, in seconds.
    pub start_time_seconds: u64,
    /// Open descriptors and the soft `RLIMIT_NOFILE`; `None` where the OS
    /// does not expose them.
    pub open_fds: Option<u64>,
    pub max_fds: Option<u64>,
}

pub trait StatsSource: Send + Sync {
    /// Take a fresh sample. Fails if any statistic is unavailable; there is no
    /// partial result.
    fn sample(&self) -> Result<HostSample>;

    /// Network name of this host, if it can be determined.
    fn host_name(&self) -> Option<String>;
}

/// Filesystem usage the way `df` reports it: used over (used + available to
/// unprivileged users). Reserved blocks count toward neither side.
pub fn disk_used_percent(used: u64, available: u64) -> f64 {
    percent(used, used.saturating_add(available))
}

/// `part / whole` as a percentage clamped to 0..=100.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}
