//! Counters and gauges exposed on `/metrics`.
//!
//! Families render in the order they are declared here. The `process_*`
//! families follow the standard process collector naming; the file descriptor
//! pair is only rendered once a sample has reported it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use infoprobe_core::metrics::{Counter, CounterVec, Gauge, ObservedCounter};

use crate::stats::HostSample;

#[derive(Debug, Default)]
pub struct ProbeMetrics {
    pub info_requests: Counter,
    pub info_requests_by_version: CounterVec,
    pub cpu_usage: Gauge,
    pub memory_usage: Gauge,
    pub uptime: Gauge,
    pub thread_count: Gauge,
    pub disk_usage: Gauge,

    pub process_cpu_seconds: ObservedCounter,
    pub process_resident_memory: Gauge,
    pub process_virtual_memory: Gauge,
    pub process_start_time: Gauge,
    pub process_open_fds: Gauge,
    pub process_max_fds: Gauge,
    fds_reported: AtomicBool,
}

impl ProbeMetrics {
    /// Count one `/get_info` request served under `version`.
    pub fn record_info_request(&self, version: &str) {
        self.info_requests.inc();
        self.info_requests_by_version.inc(&[("version", version)]);
    }

    /// Overwrite every gauge with a fresh reading.
    pub fn observe(&self, sample: &HostSample, uptime: Duration) {
        self.cpu_usage.set(sample.cpu_percent);
        self.memory_usage.set(sample.memory_percent);
        self.uptime.set(uptime.as_secs_f64());
        self.thread_count.set(sample.thread_count as f64);
        self.disk_usage.set(sample.disk_percent);

        let p = &sample.process;
        self.process_cpu_seconds.observe(p.cpu_seconds);
        self.process_resident_memory.set(p.resident_memory_bytes as f64);
        self.process_virtual_memory.set(p.virtual_memory_bytes as f64);
        self.process_start_time.set(p.start_time_seconds as f64);
        if let (Some(open), Some(max)) = (p.open_fds, p.max_fds) {
            self.process_open_fds.set(open as f64);
            self.process_max_fds.set(max as f64);
            self.fds_reported.store(true, Ordering::Relaxed);
        }
    }

    /// Render all families in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.info_requests.render(
            "get_info_requests_total",
            "Total number of GET /get_info requests",
            &mut out,
        );
        self.info_requests_by_version.render(
            "get_info_requests_total_by_version",
            "GET /get_info requests by app version",
            &mut out,
        );
        self.cpu_usage.render("cpu_usage_percent", "CPU usage percentage", &mut out);
        self.memory_usage.render("memory_usage_percent", "Memory usage percentage", &mut out);
        self.uptime.render("uptime_seconds", "App uptime in seconds", &mut out);
        self.thread_count.render("thread_count", "Number of active threads", &mut out);
        self.disk_usage.render("disk_usage_percent", "Disk usage percentage", &mut out);

        self.process_cpu_seconds.render(
            "process_cpu_seconds_total",
            "Total user and system CPU time spent in seconds.",
            &mut out,
        );
        self.process_resident_memory.render(
            "process_resident_memory_bytes",
            "Resident memory size in bytes.",
            &mut out,
        );
        self.process_virtual_memory.render(
            "process_virtual_memory_bytes",
            "Virtual memory size in bytes.",
            &mut out,
        );
        self.process_start_time.render(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds.",
            &mut out,
        );
        if self.fds_reported.load(Ordering::Relaxed) {
            self.process_open_fds.render(
                "process_open_fds",
                "Number of open file descriptors.",
                &mut out,
            );
            self.process_max_fds.render(
                "process_max_fds",
                "Maximum number of open file descriptors.",
                &mut out,
            );
        }
        out
    }
}
