use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Machine the load was generated from.
#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct BenchmarkHardware {
    pub cpu_name: String,
    pub cpu_cores: usize,
    pub total_memory_mb: u64,
    pub os_name: String,
    pub os_version: String,
}

impl BenchmarkHardware {
    pub fn get_system_info() -> Self {
        let mut sys = System::new();
        sys.refresh_all();

        let cpu_name = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .unwrap_or_else(|| String::from("unknown"));

        Self {
            cpu_name,
            cpu_cores: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            os_name: System::name().unwrap_or_else(|| String::from("unknown")),
            os_version: System::kernel_version().unwrap_or_else(|| String::from("unknown")),
        }
    }
}
