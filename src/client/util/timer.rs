/// How long a toast stays on screen before it closes itself
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Resolve after `ms` milliseconds using the browser's timer
#[cfg(feature = "web")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Without a browser timer the future never resolves, so toasts stay until dismissed
#[cfg(not(feature = "web"))]
pub async fn sleep_ms(_ms: u32) {
    std::future::pending::<()>().await;
}
