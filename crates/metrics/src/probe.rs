//! Process CPU probes.

use anyhow::{anyhow, Result};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Source of per-tick CPU readings for this process, in percent of the whole machine.
pub trait CpuProbe {
    fn cpu_percent(&mut self) -> Result<f32>;
}

/// Reads this process's CPU usage through `sysinfo`.
///
/// `sysinfo` reports usage relative to a single core (so up to `100 * cores`);
/// readings are divided by the logical core count to land in 0-100.
pub struct ProcessCpuProbe {
    system: System,
    pid: Option<Pid>,
    cores: f32,
}

impl Default for ProcessCpuProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessCpuProbe {
    pub fn new() -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            system: System::new(),
            pid: sysinfo::get_current_pid().ok(),
            cores: cores as f32,
        }
    }
}

impl CpuProbe for ProcessCpuProbe {
    fn cpu_percent(&mut self) -> Result<f32> {
        let pid = self
            .pid
            .ok_or_else(|| anyhow!("current process id is unavailable"))?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_cpu(),
        );
        let process = self
            .system
            .process(pid)
            .ok_or_else(|| anyhow!("process {} not found", pid))?;
        Ok(process.cpu_usage() / self.cores)
    }
}

/// Replays a fixed script of readings; `None` entries simulate probe failures.
///
/// Once the script runs out the last entry repeats.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedProbe {
    script: Vec<Option<f32>>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedProbe {
    pub(crate) fn new(script: Vec<Option<f32>>) -> Self {
        Self { script, pos: 0 }
    }
}

#[cfg(test)]
impl CpuProbe for ScriptedProbe {
    fn cpu_percent(&mut self) -> Result<f32> {
        let entry = self
            .script
            .get(self.pos)
            .or_else(|| self.script.last())
            .copied()
            .flatten();
        self.pos = self.pos.saturating_add(1);
        entry.ok_or_else(|| anyhow!("scripted probe failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_probe_replays_then_repeats_last() {
        let mut p = ScriptedProbe::new(vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(p.cpu_percent().unwrap(), 1.0);
        assert!(p.cpu_percent().is_err());
        assert_eq!(p.cpu_percent().unwrap(), 3.0);
        assert_eq!(p.cpu_percent().unwrap(), 3.0);
    }

    #[test]
    fn process_probe_reads_a_finite_percentage() {
        let mut p = ProcessCpuProbe::new();
        // First reading after process start is 0 by sysinfo's definition.
        if let Ok(v) = p.cpu_percent() {
            assert!(v.is_finite());
            assert!(v >= 0.0);
        }
    }
}
