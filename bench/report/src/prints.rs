use crate::report::Report;
use colored::Colorize;
use std::fmt::Write;

impl Report {
    pub fn print_summary(&self) {
        print!("{}", self.formatted_summary());
    }

    pub fn formatted_summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", "====== PERFORMANCE TEST RESULTS ======".bold())?;
        writeln!(out, "Test Duration: {:.1} seconds", self.duration_actual_secs)?;
        writeln!(out, "Concurrent Users: {}", self.params.concurrent_users)?;
        writeln!(out, "Target: {}", self.params.target_url)?;

        writeln!(out)?;
        writeln!(out, "{}", "--- REQUEST METRICS ---".blue())?;
        writeln!(out, "Total Requests: {}", self.total_requests)?;
        writeln!(out, "Successful Requests: {}", self.successful_requests)?;
        writeln!(out, "Failed Requests: {}", self.failed_requests)?;
        let success_rate = format!("{:.2}%", self.success_rate);
        let success_rate = if self.failed_requests == 0 {
            success_rate.green()
        } else {
            success_rate.red()
        };
        writeln!(out, "Success Rate: {success_rate}")?;

        if self.latency.is_available() {
            write_latency(out, "Average", self.latency.avg_latency_ms)?;
            write_latency(out, "Min", self.latency.min_latency_ms)?;
            write_latency(out, "Max", self.latency.max_latency_ms)?;
            write_latency(out, "Median", self.latency.median_latency_ms)?;
        } else {
            writeln!(out, "Response Time: N/A (no requests completed)")?;
        }

        writeln!(out)?;
        writeln!(out, "{}", "=== SERVER PERFORMANCE ANALYSIS ===".blue())?;
        writeln!(
            out,
            "Server throughput: {:.2} requests/second",
            self.throughput_rps
        )?;
        writeln!(out, "Memory footprint: {}MB", self.resources.memory_mb)?;
        writeln!(out, "CPU usage: {:.2}%", self.resources.cpu_usage_percent)?;
        writeln!(
            out,
            "Host: {} ({} cores, {}MB), {} {}",
            self.hardware.cpu_name,
            self.hardware.cpu_cores,
            self.hardware.total_memory_mb,
            self.hardware.os_name,
            self.hardware.os_version
        )
    }
}

fn write_latency(out: &mut String, label: &str, value: Option<f64>) -> std::fmt::Result {
    match value {
        Some(ms) => writeln!(out, "Response Time ({label}): {ms:.3} ms"),
        None => writeln!(out, "Response Time ({label}): N/A"),
    }
}
