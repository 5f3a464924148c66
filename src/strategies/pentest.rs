//! Exploit-framework simulation (local, randomized).
//!
//! Educational stand-in for a Metasploit run: identifiers are drawn from
//! fixed sets and nothing touches the named target.

use async_trait::async_trait;
use rand::Rng;

use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{ExploitRun, ResultEnvelope};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;
use crate::util::SharedRng;

pub const EXPLOITS: [&str; 5] = [
    "ms17_010_eternalblue",
    "apache_struts2_content_type_ognl",
    "drupal_drupageddon2",
    "jenkins_script_console",
    "tomcat_mgr_upload",
];

pub const PAYLOADS: [&str; 4] = [
    "windows/x64/meterpreter/reverse_tcp",
    "linux/x64/meterpreter/reverse_tcp",
    "java/meterpreter/reverse_tcp",
    "cmd/unix/reverse",
];

const DEFAULT_TARGET: &str = "192.168.1.100";

/// One simulated run: uniform exploit and payload, success iff a uniform draw
/// exceeds 0.7 (a 30% success chance), one session on success.
pub fn simulate<R: Rng>(rng: &mut R, target: &str) -> ExploitRun {
    let exploit = EXPLOITS[rng.gen_range(0..EXPLOITS.len())];
    let payload = PAYLOADS[rng.gen_range(0..PAYLOADS.len())];
    let success = rng.gen::<f64>() > 0.7;

    ExploitRun {
        target: target.to_string(),
        exploit: exploit.to_string(),
        payload: payload.to_string(),
        status: if success { "Success" } else { "Failed" }.to_string(),
        sessions: u32::from(success),
    }
}

pub struct ExploitSimulationStrategy {
    rng: SharedRng,
}

impl ExploitSimulationStrategy {
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl ToolStrategy for ExploitSimulationStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::PenetrationTesting)
    }

    async fn execute(
        &self,
        _descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let target = input.str_or("target", DEFAULT_TARGET);
        let run = simulate(&mut *self.rng.lock(), &target);
        ResultEnvelope::Pentest(run)
    }
}
