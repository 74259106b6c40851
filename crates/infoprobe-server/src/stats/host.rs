//! `sysinfo`-backed stats source.
//!
//! One `System` is kept for the life of the process so CPU usage is the delta
//! between successive scrapes. The lock is held only while sampling.

use std::sync::Mutex;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use infoprobe_core::error::{ProbeError, Result};

use super::{disk_used_percent, percent, process, HostSample, ProcessSample, StatsSource};

pub struct SysinfoSource {
    pid: Pid,
    system: Mutex<System>,
}

impl SysinfoSource {
    pub fn new() -> Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| ProbeError::Sampling(format!("current pid: {e}")))?;

        // Baseline for the first CPU delta.
        let mut system = System::new();
        system.refresh_cpu_usage();

        Ok(Self {
            pid,
            system: Mutex::new(system),
        })
    }

    /// Thread count plus the `process_*` readings for this process.
    fn own_process(&self, system: &mut System) -> Result<(u64, ProcessSample)> {
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::new().with_cpu().with_memory(),
        );
        let me = system
            .process(self.pid)
            .ok_or_else(|| ProbeError::Sampling(format!("process {} not found", self.pid)))?;

        // Task lists are only populated on Linux; elsewhere count the process itself.
        let tasks = me.tasks().map(|t| t.len() as u64).unwrap_or(0);

        let sample = ProcessSample {
            cpu_seconds: process::cpu_seconds()?,
            resident_memory_bytes: me.memory(),
            virtual_memory_bytes: me.virtual_memory(),
            start_time_seconds: me.start_time(),
            open_fds: process::open_fds()?,
            max_fds: process::max_fds()?,
        };
        Ok((tasks.max(1), sample))
    }
}

#[cfg(unix)]
fn root_disk_percent() -> Result<f64> {
    use nix::sys::statvfs::statvfs;

    let st = statvfs("/").map_err(|e| ProbeError::Sampling(format!("statvfs /: {e}")))?;
    let frsize = st.fragment_size() as u64;
    let total = st.blocks() as u64 * frsize;
    let free = st.blocks_free() as u64 * frsize;
    let avail = st.blocks_available() as u64 * frsize;
    if total == 0 {
        return Err(ProbeError::Sampling("root filesystem reports zero capacity".into()));
    }

    let used = total.saturating_sub(free);
    Ok(disk_used_percent(used, avail))
}

#[cfg(not(unix))]
fn root_disk_percent() -> Result<f64> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .first()
        .ok_or_else(|| ProbeError::Sampling("no disks listed".into()))?;

    let total = disk.total_space();
    if total == 0 {
        return Err(ProbeError::Sampling(format!(
            "disk {} reports zero capacity",
            disk.mount_point().display()
        )));
    }
    let avail = disk.available_space();
    let used = total.saturating_sub(avail);
    Ok(disk_used_percent(used, avail))
}

impl StatsSource for SysinfoSource {
    fn sample(&self) -> Result<HostSample> {
        let mut system = self
            .system
            .lock()
            .map_err(|_| ProbeError::Internal("stats sampler lock poisoned".into()))?;

        system.refresh_cpu_usage();
        let cpu_percent = f64::from(system.global_cpu_usage()).max(0.0).min(100.0);

        system.refresh_memory();
        let total = system.total_memory();
        if total == 0 {
            return Err(ProbeError::Sampling("total memory unavailable".into()));
        }
        let used = total.saturating_sub(system.available_memory());
        let memory_percent = percent(used, total);

        let (thread_count, own) = self.own_process(&mut system)?;
        drop(system);

        let disk_percent = root_disk_percent()?;

        Ok(HostSample {
            cpu_percent,
            memory_percent,
            thread_count,
            disk_percent,
            process: own,
        })
    }

    fn host_name(&self) -> Option<String> {
        System::host_name()
    }
}
