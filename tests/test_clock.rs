//! Countdown clock behavior under paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use ringside::bout::{ClockPhase, Command, MatchEngine};
use ringside::config::MatchConfig;

fn start_engine(duration: u32) -> Arc<MatchEngine> {
    let engine = Arc::new(MatchEngine::new());
    let config = MatchConfig::resolve("Kim", "Lee", None, duration).unwrap();
    engine.start(config);
    engine
}

/// Advances paused tokio time one second at a time, yielding between steps
/// so the clock task observes every interval tick.
async fn advance_secs(n: u32) {
    for _ in 0..n {
        tokio::time::advance(Duration::from_secs(1)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }
}

/// Lets a freshly spawned clock task run up to its first await.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn full_round_runs_down_and_expires() {
    let engine = start_engine(180);
    engine.apply(Command::ToggleClock);
    settle().await;

    advance_secs(180).await;

    let bout = engine.snapshot().bout.unwrap();
    assert_eq!(bout.time_remaining, 0);
    assert_eq!(bout.phase, ClockPhase::Expired);
    assert!(!bout.running());

    // Cannot restart an expired round without a clock reset
    let snapshot = engine.apply(Command::ToggleClock);
    assert!(!snapshot.running());
    advance_secs(10).await;
    assert_eq!(engine.snapshot().bout.unwrap().time_remaining, 0);

    // After a reset the round is startable again
    engine.apply(Command::ResetClock);
    let snapshot = engine.apply(Command::ToggleClock);
    assert!(snapshot.running());
}

#[tokio::test(start_paused = true)]
async fn pause_is_immediate_and_final() {
    let engine = start_engine(180);
    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(30).await;

    engine.apply(Command::ToggleClock);
    let at_pause = engine.snapshot().bout.unwrap().time_remaining;
    assert_eq!(at_pause, 150);

    // Nothing may tick after the pause, no matter how long we wait
    advance_secs(60).await;
    assert_eq!(engine.snapshot().bout.unwrap().time_remaining, at_pause);
}

#[tokio::test(start_paused = true)]
async fn resume_continues_from_paused_time() {
    let engine = start_engine(120);
    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(20).await;

    engine.apply(Command::ToggleClock);
    advance_secs(5).await;

    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(10).await;

    assert_eq!(engine.snapshot().bout.unwrap().time_remaining, 90);
}

#[tokio::test(start_paused = true)]
async fn scoring_while_clock_runs() {
    let engine = start_engine(180);
    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(5).await;

    use ringside::bout::{Points, Side};
    let snapshot = engine.apply(Command::AddScore {
        side: Side::Red,
        points: Points::Two,
    });
    assert!(snapshot.running(), "scoring must not stop the clock");

    advance_secs(5).await;
    let bout = engine.snapshot().bout.unwrap();
    assert_eq!(bout.time_remaining, 170);
    assert_eq!(bout.red_score, 2);
}

#[tokio::test(start_paused = true)]
async fn reset_clock_while_running_stops_it() {
    let engine = start_engine(180);
    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(3).await;

    let snapshot = engine.apply(Command::ResetClock);
    let bout = snapshot.bout.unwrap();
    assert_eq!(bout.time_remaining, 180);
    assert!(!bout.running());

    advance_secs(10).await;
    assert_eq!(engine.snapshot().bout.unwrap().time_remaining, 180);
}

#[tokio::test(start_paused = true)]
async fn watchers_observe_expiry() {
    let engine = start_engine(60);
    let mut rx = engine.subscribe();

    engine.apply(Command::ToggleClock);
    settle().await;
    advance_secs(60).await;

    // The receiver holds the latest snapshot: expired, stopped
    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    let bout = snapshot.bout.unwrap();
    assert_eq!(bout.phase, ClockPhase::Expired);
    assert_eq!(bout.time_remaining, 0);
}
