//! Fixed-cadence status polling.

use std::time::Duration;

use telemetry_hub_common::DeviceState;

use crate::client::GatewayClient;
use crate::error::Result;
use crate::render;

/// Cadence of the sampling phase: how many polls, how far apart.
///
/// Built from configuration so neither value is an inline constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub iterations: u32,
    pub delay: Duration,
}

/// Poll `/status` on the given schedule, printing one reading line per
/// poll and announcing device state changes observed between polls.
///
/// Polls are spaced `schedule.delay` apart with no pause after the final
/// one. Each iteration is one independent fetch: nothing is retried
/// here, and the first failed fetch aborts the loop with the error
/// unchanged.
pub async fn run(client: &GatewayClient, schedule: PollSchedule) -> Result<()> {
    let mut last_state: Option<DeviceState> = None;

    for i in 0..schedule.iterations {
        if i > 0 {
            tokio::time::sleep(schedule.delay).await;
        }

        let status = client.status().await?;
        tracing::debug!(
            "Poll {}/{}: state {}",
            i + 1,
            schedule.iterations,
            status.state
        );

        if let Some(line) = state_change_announcement(last_state.as_ref(), &status.state) {
            println!("{}", line);
        }
        last_state = Some(status.state.clone());

        println!("{}", render::sample_line(status.sample.as_ref()));
    }

    Ok(())
}

/// The state-change line due for this observation, if any. First
/// observations and unchanged states produce none.
fn state_change_announcement(
    previous: Option<&DeviceState>,
    current: &DeviceState,
) -> Option<String> {
    match previous {
        Some(previous) if previous != current => {
            Some(render::state_change_line(previous, current))
        }
        _ => None,
    }
}
