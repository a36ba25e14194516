//! Join a backend call with the simulated progress timeline.
//!
//! The call and the timeline run concurrently. The combined future resolves
//! once both the call has returned and the timeline floor has elapsed, so a
//! fast backend still shows the full animation and a slow one holds at the
//! cap until it answers.

use plab_core::progress::{ProgressSample, Timeline};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Interval between progress samples handed to the caller.
pub const TICK: Duration = Duration::from_millis(100);

/// Await `call`, taking at least `floor`.
pub async fn with_floor<F: Future>(floor: Duration, call: F) -> F::Output {
    let (output, ()) = tokio::join!(call, tokio::time::sleep(floor));
    output
}

/// Await `call` at least as long as the timeline floor, reporting a sample
/// every [`TICK`].
///
/// The call's own result, success or error, is returned unchanged.
pub async fn run_with_timeline<F, S>(timeline: &Timeline, call: F, mut on_sample: S) -> F::Output
where
    F: Future,
    S: FnMut(ProgressSample),
{
    let started = Instant::now();
    let joined = with_floor(timeline.floor(), call);
    tokio::pin!(joined);

    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            output = &mut joined => {
                on_sample(timeline.sample(started.elapsed()));
                return output;
            }
            _ = ticker.tick() => on_sample(timeline.sample(started.elapsed())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plab_core::progress::Stage;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn fast_call_waits_for_floor() {
        let started = Instant::now();
        let value = with_floor(ms(5_000), async {
            tokio::time::sleep(ms(100)).await;
            7
        })
        .await;

        assert_eq!(value, 7);
        let elapsed = started.elapsed();
        assert!(elapsed >= ms(5_000), "finished early: {elapsed:?}");
        assert!(elapsed < ms(5_100), "overshot: {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_sets_the_pace() {
        let started = Instant::now();
        with_floor(ms(5_000), tokio::time::sleep(ms(8_000))).await;

        let elapsed = started.elapsed();
        assert!(elapsed >= ms(8_000));
        assert!(elapsed < ms(8_100));
    }

    #[tokio::test(start_paused = true)]
    async fn errors_still_wait_for_floor() {
        let started = Instant::now();
        let result: Result<(), &str> = with_floor(ms(2_000), async { Err("boom") }).await;

        assert_eq!(result, Err("boom"));
        assert!(started.elapsed() >= ms(2_000));
    }

    #[tokio::test(start_paused = true)]
    async fn timeline_samples_climb_and_hold_below_hundred() {
        let timeline = Timeline::default();
        let mut samples = Vec::new();

        let value = run_with_timeline(
            &timeline,
            async {
                tokio::time::sleep(ms(9_000)).await;
                "done"
            },
            |sample| samples.push(sample),
        )
        .await;

        assert_eq!(value, "done");
        assert!(samples.len() > 50);
        assert_eq!(samples[0].stage, Stage::Sending);
        assert!(samples.windows(2).all(|w| w[1].percent >= w[0].percent));
        assert!(samples.iter().all(|s| s.percent <= timeline.cap));

        let last = samples.last().unwrap();
        assert_eq!(last.stage, Stage::Collecting);
        assert!((last.percent - timeline.cap).abs() < 1e-9);
    }
}
