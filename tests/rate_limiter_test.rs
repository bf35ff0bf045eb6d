use std::thread;
use std::time::Duration;

use tikscribe::application::services::SlidingWindowRateLimiter;

#[test]
fn given_requests_up_to_ceiling_when_admitted_then_next_one_is_rejected() {
    let limiter = SlidingWindowRateLimiter::new(Duration::from_secs(60), 5);

    for _ in 0..5 {
        assert!(limiter.admit("192.0.2.1"));
    }

    assert!(!limiter.admit("192.0.2.1"));
}

#[test]
fn given_window_fully_elapsed_when_admitting_then_client_is_admitted_again() {
    let limiter = SlidingWindowRateLimiter::new(Duration::from_millis(100), 2);

    assert!(limiter.admit("192.0.2.1"));
    assert!(limiter.admit("192.0.2.1"));
    assert!(!limiter.admit("192.0.2.1"));

    thread::sleep(Duration::from_millis(150));

    assert!(limiter.admit("192.0.2.1"));
}

#[test]
fn given_two_clients_when_one_hits_ceiling_then_other_is_unaffected() {
    let limiter = SlidingWindowRateLimiter::new(Duration::from_secs(60), 1);

    assert!(limiter.admit("192.0.2.1"));
    assert!(!limiter.admit("192.0.2.1"));

    assert!(limiter.admit("192.0.2.2"));
}

#[test]
fn given_rejected_attempts_when_window_elapses_then_rejections_did_not_consume_quota() {
    let limiter = SlidingWindowRateLimiter::new(Duration::from_millis(500), 2);

    assert!(limiter.admit("192.0.2.1"));
    assert!(limiter.admit("192.0.2.1"));
    assert!(!limiter.admit("192.0.2.1"));

    thread::sleep(Duration::from_millis(300));
    assert!(!limiter.admit("192.0.2.1"));

    thread::sleep(Duration::from_millis(350));
    assert!(limiter.admit("192.0.2.1"));
}
