use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-client sliding-window admission control. Keeps one timestamp per
/// admitted request inside the trailing window, so the count is exact rather
/// than smoothed. Prune, check and append happen under a single lock
/// acquisition, which keeps concurrent requests from over-admitting.
pub struct SlidingWindowRateLimiter {
    window: Duration,
    ceiling: usize,
    clients: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(window: Duration, ceiling: usize) -> Self {
        Self {
            window,
            ceiling,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Admit and record the request, or reject without mutating state.
    pub fn admit(&self, client_id: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().expect("rate limiter lock poisoned");
        let log = clients.entry(client_id.to_string()).or_default();

        while let Some(oldest) = log.front() {
            if now.duration_since(*oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }

        if log.len() < self.ceiling {
            log.push_back(now);
            true
        } else {
            false
        }
    }
}
