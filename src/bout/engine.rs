//! Match engine orchestration.
//!
//! The `MatchEngine` owns the one live bout, serializes every command
//! through a single lock, manages the countdown clock task, and publishes
//! an immutable [`Snapshot`] after each transition for renderers to
//! consume.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::MatchConfig;

use super::state::{BoutState, ClockEffect, Command};

// ============================================================================
// Snapshot
// ============================================================================

/// Immutable view of the engine after a command.
///
/// `config` is `None` until a match has ever been resolved; `bout` is
/// `None` whenever the engine is in the pre-match state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The frozen pre-match setup, if one has been resolved.
    pub config: Option<MatchConfig>,
    /// The live bout, absent before start and after a match reset.
    pub bout: Option<BoutState>,
}

impl Snapshot {
    /// Returns whether a match has been launched from configuration.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.bout.is_some()
    }

    /// Returns whether the clock is actively counting down.
    #[must_use]
    pub fn running(&self) -> bool {
        self.bout.as_ref().is_some_and(BoutState::running)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Everything the engine guards behind one lock: the frozen config, the
/// live bout, and the clock task handle. Keeping the handle under the same
/// lock means a command and its clock scheduling effect are applied as one
/// unit, so two racing toggles can never leave a stray timer behind.
#[derive(Default)]
struct EngineInner {
    config: Option<MatchConfig>,
    bout: Option<BoutState>,
    clock: Option<ClockHandle>,
}

struct ClockHandle {
    cancel: CancellationToken,
}

impl EngineInner {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            bout: self.bout.clone(),
        }
    }

    /// Central command dispatch. Commands that reach a state forbidding
    /// them return [`ClockEffect::None`] and change nothing.
    fn apply(&mut self, cmd: Command) -> ClockEffect {
        if cmd == Command::ResetMatch {
            // The only transition out of "started". The last config is
            // retained so the operator can edit rather than retype it.
            if self.bout.take().is_some() {
                info!("match reset to pre-match state");
            }
            return ClockEffect::Stop;
        }

        let (Some(config), Some(bout)) = (&self.config, &mut self.bout) else {
            debug!(?cmd, "command ignored: no match started");
            return ClockEffect::None;
        };
        bout.apply(cmd, config.round_duration_secs)
    }

    fn stop_clock(&mut self) {
        if let Some(handle) = self.clock.take() {
            handle.cancel.cancel();
            debug!("clock task cancelled");
        }
    }
}

/// Match engine holding exactly one bout.
///
/// Every command locks the engine state, applies the transition to
/// completion, and publishes the resulting snapshot before the next
/// command is accepted — ticks can never interleave with score
/// corrections. Clock scheduling follows the transitions: a task is
/// spawned on entering `Running` and cancelled on any transition out of
/// it, so there is never more than one timer and a stale callback is
/// additionally discarded by the central dispatch.
pub struct MatchEngine {
    inner: Mutex<EngineInner>,
    snapshot_tx: watch::Sender<Snapshot>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Creates an engine in the pre-match state.
    #[must_use]
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            inner: Mutex::new(EngineInner::default()),
            snapshot_tx,
        }
    }

    /// Launches a match from a resolved configuration.
    ///
    /// A no-op returning the unchanged snapshot if a match is already
    /// started; editing requires [`Command::ResetMatch`] first. Does not
    /// start the clock.
    ///
    /// # Panics
    ///
    /// Panics if the engine state lock is poisoned.
    pub fn start(&self, config: MatchConfig) -> Snapshot {
        let mut inner = self.inner.lock().expect("engine state lock poisoned");
        if inner.bout.is_some() {
            debug!("start ignored: match already in progress");
            return inner.snapshot();
        }

        info!(
            red = %config.red_name,
            blue = %config.blue_name,
            category = ?config.category,
            duration_secs = config.round_duration_secs,
            "match started"
        );
        inner.bout = Some(config.initial_bout());
        inner.config = Some(config);

        let snapshot = inner.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Applies a command and returns the resulting snapshot.
    ///
    /// Needs `Arc<Self>` because entering `Running` spawns the clock task,
    /// which drives further ticks through this same method.
    ///
    /// # Panics
    ///
    /// Panics if the engine state lock is poisoned.
    #[allow(clippy::significant_drop_tightening)]
    pub fn apply(self: &Arc<Self>, cmd: Command) -> Snapshot {
        let mut inner = self.inner.lock().expect("engine state lock poisoned");
        let effect = inner.apply(cmd);
        match effect {
            ClockEffect::Start => self.start_clock(&mut inner),
            ClockEffect::Stop => inner.stop_clock(),
            ClockEffect::None => {}
        }
        if !matches!(cmd, Command::Tick) {
            debug!(?cmd, ?effect, "command applied");
        }

        let snapshot = inner.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Returns the current snapshot without applying anything.
    ///
    /// # Panics
    ///
    /// Panics if the engine state lock is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner
            .lock()
            .expect("engine state lock poisoned")
            .snapshot()
    }

    /// Subscribes to snapshot updates. The receiver always holds the
    /// latest snapshot; intermediate states may be skipped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Cancels the clock task, if any. The bout state is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the engine state lock is poisoned.
    pub fn shutdown(&self) {
        self.inner
            .lock()
            .expect("engine state lock poisoned")
            .stop_clock();
    }

    /// Spawns the one-second clock task.
    ///
    /// The task issues exactly one [`Command::Tick`] per elapsed second
    /// while the bout is running and exits as soon as the bout leaves
    /// `Running` or the token is cancelled. `MissedTickBehavior::Delay`
    /// keeps a stalled host from delivering a burst of catch-up ticks.
    fn start_clock(self: &Arc<Self>, inner: &mut EngineInner) {
        // A leftover handle here means a toggle raced an expiry; replace it.
        inner.stop_clock();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; consume it so
            // a full second elapses before the clock moves.
            interval.tick().await;
            loop {
                tokio::select! {
                    () = token.cancelled() => {
                        debug!("clock task stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        let snapshot = engine.apply(Command::Tick);
                        if !snapshot.running() {
                            break;
                        }
                    }
                }
            }
        });

        inner.clock = Some(ClockHandle { cancel });
        info!("clock started");
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("MatchEngine")
            .field("started", &snapshot.started())
            .field("running", &snapshot.running())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
