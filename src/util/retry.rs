/*!
   Bounded retrying of operations whose success depends on asynchronous
   chain or relayer progress.
*/

use core::time::Duration;
use std::thread::sleep;

use tracing::trace;

use crate::error::Error;

/**
   Bounds for a polled operation: how many attempts to make and how long
   to wait between them.

   The inter-attempt delay starts at `min_interval`, grows by
   `multiplier` after every failed attempt, and is clamped to
   `max_interval`. The scenario uses the default fixed-interval policy
   (multiplier 1), which bounds a full poll at
   `max_attempts * max_interval` in the worst case.
*/
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u16,
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            min_interval: Duration::from_secs(2),
            max_interval: Duration::from_secs(90),
            multiplier: 1,
        }
    }
}

impl RetryPolicy {
    pub const fn new(
        max_attempts: u16,
        min_interval: Duration,
        max_interval: Duration,
        multiplier: u32,
    ) -> Self {
        Self {
            max_attempts,
            min_interval,
            max_interval,
            multiplier,
        }
    }

    /**
       The sequence of delays slept between attempts: one entry fewer
       than `max_attempts`, since nothing is slept before the first
       attempt or after the last.
    */
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let max_interval = self.max_interval;
        let multiplier = self.multiplier;
        let mut delay = self.min_interval.min(max_interval);

        let attempts = usize::from(self.max_attempts.saturating_sub(1));

        core::iter::repeat_with(move || {
            let current = delay;
            delay = delay
                .checked_mul(multiplier)
                .unwrap_or(max_interval)
                .min(max_interval);
            current
        })
        .take(attempts)
    }
}

/**
   Invoke `task` until it succeeds, sleeping between attempts according
   to `policy`. The first success short-circuits; once `max_attempts`
   attempts have failed, the whole poll fails with
   [`Error::retry_timeout`] naming the task.
*/
pub fn retry_until<R>(
    task_name: &str,
    policy: &RetryPolicy,
    task: impl Fn() -> Result<R, Error>,
) -> Result<R, Error> {
    let mut delays = policy.delays();

    for attempt in 1..=policy.max_attempts {
        match task() {
            Ok(res) => return Ok(res),
            Err(e) => {
                trace!(
                    "task {} failed on attempt {}/{}: {}",
                    task_name,
                    attempt,
                    policy.max_attempts,
                    e
                );

                if let Some(delay) = delays.next() {
                    sleep(delay);
                }
            }
        }
    }

    Err(Error::retry_timeout(
        task_name.to_string(),
        policy.max_attempts,
    ))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Instant;

    use eyre::eyre;

    use super::*;
    use crate::error::ErrorDetail;

    const FAST: RetryPolicy =
        RetryPolicy::new(5, Duration::from_millis(1), Duration::from_millis(4), 1);

    #[test]
    fn fixed_interval_delays() {
        let policy = RetryPolicy::new(4, Duration::from_secs(2), Duration::from_secs(90), 1);
        let delays = policy.delays().collect::<Vec<_>>();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(2),
                Duration::from_secs(2),
            ]
        );
    }

    #[test]
    fn backoff_delays_are_clamped() {
        let policy = RetryPolicy::new(6, Duration::from_millis(100), Duration::from_millis(400), 2);
        let delays = policy.delays().collect::<Vec<_>>();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(400),
                Duration::from_millis(400),
            ]
        );
    }

    #[test]
    fn succeeds_on_a_later_attempt() {
        let attempts = Cell::new(0u32);

        let result = retry_until("third time lucky", &FAST, || {
            attempts.set(attempts.get() + 1);
            if attempts.get() < 3 {
                Err(Error::generic(eyre!("not yet")))
            } else {
                Ok(attempts.get())
            }
        });

        assert_eq!(result.unwrap(), 3);
    }

    #[test]
    fn single_attempt_fails_without_waiting() {
        let policy = RetryPolicy::new(1, Duration::from_secs(60), Duration::from_secs(60), 1);
        let attempts = Cell::new(0u32);

        let started = Instant::now();
        let err = retry_until("always failing", &policy, || -> Result<(), Error> {
            attempts.set(attempts.get() + 1);
            Err(Error::generic(eyre!("never")))
        })
        .unwrap_err();

        assert_eq!(attempts.get(), 1);
        assert!(started.elapsed() < Duration::from_secs(60));
        assert!(matches!(err.detail(), ErrorDetail::RetryTimeout(_)));
    }

    #[test]
    fn exhausts_the_attempt_budget() {
        let attempts = Cell::new(0u16);

        let err = retry_until("always failing", &FAST, || -> Result<(), Error> {
            attempts.set(attempts.get() + 1);
            Err(Error::generic(eyre!("never")))
        })
        .unwrap_err();

        assert_eq!(attempts.get(), FAST.max_attempts);
        assert!(matches!(err.detail(), ErrorDetail::RetryTimeout(_)));
    }
}
