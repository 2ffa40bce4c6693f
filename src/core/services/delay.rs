use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

// Browser timer backed delay
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
