use std::time::Duration;

/// Waits asynchronously for at least `ms` milliseconds.
pub async fn sleep(ms: u64) {
    sleep_for(Duration::from_millis(ms)).await
}

pub async fn sleep_for(duration: Duration) {
    tokio::time::sleep(duration).await
}
