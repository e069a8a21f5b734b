//! The race between a request and a timer.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_timer::Delay;
use pin_project_lite::pin_project;

use crate::error::TimeoutError;

pin_project! {
    /// Resolves with the output of `request`, or with a [`TimeoutError`]
    /// converted into the request's error type once `timeout_ms` has elapsed.
    ///
    /// The request is polled before the timer, so a request that is ready on
    /// the same poll the timer fires still wins. Dropping the `Deadline` drops
    /// both branches.
    #[must_use = "futures do nothing unless polled"]
    pub struct Deadline<F> {
        #[pin]
        request: F,
        #[pin]
        timer: Delay,
        timeout_ms: u64,
    }
}

impl<F> Deadline<F> {
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

/// Bound `request` by a deadline of `timeout_ms` milliseconds.
///
/// The timer starts now, not on first poll.
pub fn deadline<F>(request: F, timeout_ms: u64) -> Deadline<F> {
    Deadline {
        request,
        timer: Delay::new(Duration::from_millis(timeout_ms)),
        timeout_ms,
    }
}

impl<F, T, E> Future for Deadline<F>
where
    F: Future<Output = Result<T, E>>,
    E: From<TimeoutError>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Poll::Ready(settled) = this.request.poll(cx) {
            return Poll::Ready(settled);
        }

        match this.timer.poll(cx) {
            Poll::Ready(()) => {
                tracing::warn!(timeout_ms = *this.timeout_ms, "Request deadline elapsed");
                Poll::Ready(Err(TimeoutError::new(*this.timeout_ms).into()))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio_test::{assert_pending, assert_ready, task};

    #[derive(Debug, PartialEq)]
    enum TestError {
        Refused,
        TimedOut(TimeoutError),
    }

    impl From<TimeoutError> for TestError {
        fn from(e: TimeoutError) -> Self {
            TestError::TimedOut(e)
        }
    }

    #[test]
    fn test_ready_request_wins_on_first_poll() {
        let mut fut = task::spawn(deadline(async { Ok::<_, TestError>(7) }, 50));
        assert_eq!(assert_ready!(fut.poll()), Ok(7));
    }

    #[test]
    fn test_ready_failure_passes_through() {
        let mut fut = task::spawn(deadline(
            async { Err::<u8, _>(TestError::Refused) },
            50,
        ));
        assert_eq!(assert_ready!(fut.poll()), Err(TestError::Refused));
    }

    #[test]
    fn test_pending_request_stays_pending_before_deadline() {
        let mut fut = task::spawn(deadline(
            std::future::pending::<Result<(), TestError>>(),
            60_000,
        ));
        assert_pending!(fut.poll());
        assert_pending!(fut.poll());
    }

    #[test]
    fn test_request_ready_alongside_elapsed_timer_wins() {
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        let request = async move { rx.await.map_err(|_| TestError::Refused) };
        let mut fut = task::spawn(deadline(request, 10));

        assert_pending!(fut.poll());

        // Let the timer fire, then settle the request before the next poll.
        std::thread::sleep(Duration::from_millis(60));
        tx.send(5).unwrap();

        assert_eq!(assert_ready!(fut.poll()), Ok(5));
    }

    #[tokio::test]
    async fn test_timer_wins_against_pending_request() {
        let start = Instant::now();
        let result = deadline(std::future::pending::<Result<(), TestError>>(), 40).await;

        assert_eq!(result, Err(TestError::TimedOut(TimeoutError::new(40))));
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_request_finishing_after_deadline_still_times_out() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok::<_, TestError>("late")
        };
        assert_eq!(
            deadline(slow, 20).await,
            Err(TestError::TimedOut(TimeoutError::new(20)))
        );
    }

    #[tokio::test]
    async fn test_request_finishing_before_deadline_wins() {
        let quick = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<_, TestError>("early")
        };
        assert_eq!(deadline(quick, 2_000).await, Ok("early"));
    }

    #[test]
    fn test_timeout_ms_accessor() {
        let fut = deadline(async { Ok::<(), TestError>(()) }, 123);
        assert_eq!(fut.timeout_ms(), 123);
    }
}
