use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    scheduler::window::{Clock, DropWindow, SystemClock, WaitRange},
    state::BotState,
};

/// Result of a single scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Current time is outside the drop window.
    Idle,
    /// A previous tick is still waiting to fire.
    Busy,
    /// The window closed while waiting; nothing was posted.
    Skipped,
    /// The drop callback ran.
    Fired,
}

/// Decides when drops fire.
///
/// Each tick inside the window arms the scheduler, sleeps for a random delay
/// from the wait range and re-checks the window before firing. Only one tick
/// can be armed at a time; ticks arriving meanwhile are reported as `Busy`.
pub struct DropScheduler<C: Clock> {
    clock: C,
    window: DropWindow,
    wait: WaitRange,
    armed: AtomicBool,
}

/// Disarms the scheduler when the armed tick finishes, however it finishes.
struct ArmedGuard<'a>(&'a AtomicBool);

impl Drop for ArmedGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<C: Clock> DropScheduler<C> {
    /// Creates an idle scheduler.
    ///
    /// # Arguments
    /// - `clock` - Source of local time for window checks
    /// - `window` - Daily window drops may fire in
    /// - `wait` - Range of the random delay between arming and firing
    pub fn new(clock: C, window: DropWindow, wait: WaitRange) -> Self {
        Self {
            clock,
            window,
            wait,
            armed: AtomicBool::new(false),
        }
    }

    /// Whether the clock's current local time is inside the drop window.
    pub fn in_window(&self) -> bool {
        self.window.contains(self.clock.now().time())
    }

    /// Runs one scheduler tick.
    ///
    /// The wait is a tokio sleep, so reaction handling keeps running while a
    /// tick is armed. There is no cancellation: once armed, the tick either
    /// fires or skips after its delay.
    ///
    /// # Arguments
    /// - `fire` - Callback posting the drop, invoked at most once
    ///
    /// # Returns
    /// - `TickOutcome` describing what the tick did
    pub async fn tick<F, Fut>(&self, fire: F) -> TickOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.in_window() {
            return TickOutcome::Idle;
        }

        if self
            .armed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return TickOutcome::Busy;
        }
        let _armed = ArmedGuard(&self.armed);

        let delay = self.wait.sample(&mut rand::rng());
        tracing::debug!("Drop armed, firing in {}s", delay.as_secs());

        tokio::time::sleep(delay).await;

        // The window may have closed during the wait
        if !self.in_window() {
            tracing::debug!("Drop window closed while armed, skipping");
            return TickOutcome::Skipped;
        }

        fire().await;

        TickOutcome::Fired
    }
}

/// Starts the drop scheduler
///
/// Runs a tick every minute. Inside the window a tick arms, waits and then asks
/// the drop service to post a drop through the shared Discord gateway.
///
/// # Arguments
/// - `state`: Shared bot state providing the drop service and gateway
/// - `drop_scheduler`: Scheduler deciding whether the tick fires
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the life of the bot
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the job
pub async fn start_scheduler(
    state: Arc<BotState>,
    drop_scheduler: Arc<DropScheduler<SystemClock>>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();
        let drop_scheduler = drop_scheduler.clone();

        Box::pin(async move {
            let outcome = drop_scheduler
                .tick(|| async {
                    if let Err(e) = state.drops.trigger(state.gateway.as_ref()).await {
                        tracing::error!("Failed to post scheduled drop: {}", e);
                    }
                })
                .await;

            tracing::trace!("Drop scheduler tick: {:?}", outcome);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Drop scheduler started");

    Ok(scheduler)
}
