use loadtest_report::resources::ResourceUsage;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::warn;

/// Samples memory and CPU usage of the current process.
///
/// CPU usage is computed by `sysinfo` as the average between two refreshes,
/// so the sampler takes a baseline on creation and every [`sample`] reports
/// the usage since the previous one.
///
/// [`sample`]: ResourceSampler::sample
pub struct ResourceSampler {
    system: System,
    pid: Option<Pid>,
}

impl ResourceSampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(error) => {
                warn!("Cannot resolve current process id, resource usage will be zeroed: {error}");
                None
            }
        };
        let mut sampler = Self {
            system: System::new(),
            pid,
        };
        sampler.refresh();
        sampler
    }

    pub fn sample(&mut self) -> ResourceUsage {
        self.refresh();
        let Some(process) = self.pid.and_then(|pid| self.system.process(pid)) else {
            warn!("Current process not found, resource usage will be zeroed");
            return ResourceUsage::default();
        };

        ResourceUsage::new(
            process.memory() / 1024 / 1024,
            process.cpu_usage() as f64,
        )
    }

    fn refresh(&mut self) {
        if let Some(pid) = self.pid {
            self.system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::nothing().with_cpu().with_memory(),
            );
        }
    }
}

impl Default for ResourceSampler {
    fn default() -> Self {
        Self::new()
    }
}
