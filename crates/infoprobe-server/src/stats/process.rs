//! Per-process readings that `sysinfo` does not cover.

#[cfg(unix)]
mod imp {
    use nix::sys::resource::{getrlimit, getrusage, Resource, UsageWho};
    use nix::sys::time::TimeVal;

    use infoprobe_core::error::{ProbeError, Result};

    pub fn cpu_seconds() -> Result<f64> {
        let usage = getrusage(UsageWho::RUSAGE_SELF)
            .map_err(|e| ProbeError::Sampling(format!("getrusage: {e}")))?;
        Ok(secs(usage.user_time()) + secs(usage.system_time()))
    }

    fn secs(tv: TimeVal) -> f64 {
        tv.tv_sec() as f64 + tv.tv_usec() as f64 / 1_000_000.0
    }

    /// `/proc/self/fd` on Linux, `/dev/fd` on the BSDs and macOS.
    pub fn open_fds() -> Result<Option<u64>> {
        for dir in ["/proc/self/fd", "/dev/fd"] {
            if let Ok(entries) = std::fs::read_dir(dir) {
                return Ok(Some(entries.count() as u64));
            }
        }
        Err(ProbeError::Sampling("no fd directory readable".into()))
    }

    pub fn max_fds() -> Result<Option<u64>> {
        let (soft, _hard) = getrlimit(Resource::RLIMIT_NOFILE)
            .map_err(|e| ProbeError::Sampling(format!("getrlimit NOFILE: {e}")))?;
        Ok(Some(soft as u64))
    }
}

#[cfg(not(unix))]
mod imp {
    use infoprobe_core::error::Result;

    pub fn cpu_seconds() -> Result<f64> {
        Ok(0.0)
    }

    pub fn open_fds() -> Result<Option<u64>> {
        Ok(None)
    }

    pub fn max_fds() -> Result<Option<u64>> {
        Ok(None)
    }
}

pub(crate) use imp::{cpu_seconds, max_fds, open_fds};
