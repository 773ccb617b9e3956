//! Async functions are accepted; nothing is emitted until the future is polled.

use std::sync::Arc;

use sunset::{channel, deprecated_fn, NoticeQueue};

#[deprecated_fn("use `fetch_v2`")]
async fn fetch(id: u32) -> u32 {
    id
}

fn main() {
    let queue = Arc::new(NoticeQueue::new());
    channel::with_channel(queue.clone(), || drop(fetch(7)));
    assert!(queue.is_empty());
}
