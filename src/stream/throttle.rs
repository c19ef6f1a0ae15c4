//! Latest-wins throttling for progress streams

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Extension trait to add throttling to any Stream
pub trait ThrottleExt: Stream {
    /// Emit at most one item per `period`.
    ///
    /// Items arriving between emissions replace each other, so a slow
    /// subscriber always sees the newest progress rather than a backlog.
    fn throttle(self, period: Duration) -> Throttle<Self>
    where
        Self: Sized,
    {
        Throttle::new(self, period)
    }
}

impl<T: Stream> ThrottleExt for T {}

pin_project! {
    /// A stream combinator that limits emission rate
    pub struct Throttle<S: Stream> {
        #[pin]
        stream: S,
        interval: Interval,
        pending: Option<S::Item>,
        exhausted: bool,
    }
}

impl<S: Stream> Throttle<S> {
    pub fn new(stream: S, period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { stream, interval, pending: None, exhausted: false }
    }
}

impl<S: Stream> Stream for Throttle<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        // Drain whatever is ready, keeping only the newest item
        while !*this.exhausted {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => *this.pending = Some(item),
                Poll::Ready(None) => *this.exhausted = true,
                Poll::Pending => break,
            }
        }

        if this.pending.is_none() {
            return if *this.exhausted { Poll::Ready(None) } else { Poll::Pending };
        }

        ready!(this.interval.poll_tick(cx));
        Poll::Ready(this.pending.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn burst_collapses_to_latest_item() {
        let items: Vec<u32> = futures::stream::iter(1..=10)
            .throttle(Duration::from_millis(10))
            .collect()
            .await;

        // Everything is ready at once, so only the newest survives
        assert_eq!(items, vec![10]);
    }

    #[tokio::test]
    async fn empty_stream_ends() {
        let items: Vec<u32> =
            futures::stream::empty::<u32>().throttle(Duration::from_millis(10)).collect().await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn spaced_items_all_pass() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        let stream = tokio_stream::wrappers::ReceiverStream::new(rx)
            .throttle(Duration::from_millis(5));

        let producer = tokio::spawn(async move {
            for i in 0..3u32 {
                tx.send(i).await.unwrap();
                tokio::time::sleep(Duration::from_millis(30)).await;
            }
        });

        let items: Vec<u32> = stream.collect().await;
        producer.await.unwrap();
        assert_eq!(items, vec![0, 1, 2]);
    }
}
