use crate::platform::Scheduler;
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// `setTimeout` and the browser microtask queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), task).forget();
    }

    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(sleep(delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_defer_fires_after_delay() {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        BrowserScheduler.defer(Duration::from_millis(10), Box::new(move || flag.set(true)));
        assert!(!fired.get());

        BrowserScheduler.sleep(Duration::from_millis(50)).await;
        assert!(fired.get());
    }
}
