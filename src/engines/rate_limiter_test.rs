// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;
use tokio::time::Instant;

#[test]
fn test_glob_matching() {
    let limiter = DomainRateLimiter::new(
        "*vesselfinder.com*",
        Duration::from_secs(1),
        Duration::ZERO,
    ).unwrap();

    assert!(limiter.applies_to("www.vesselfinder.com"));
    assert!(limiter.applies_to("vesselfinder.com"));
    assert!(!limiter.applies_to("example.org"));

    let exact = DomainRateLimiter::new("127.0.0.1", Duration::from_secs(1), Duration::ZERO).unwrap();
    assert!(exact.applies_to("127.0.0.1"));
    assert!(!exact.applies_to("127.0.0.10"));
}

#[tokio::test(start_paused = true)]
async fn test_first_request_is_not_delayed() {
    let limiter = DomainRateLimiter::new(
        "*vesselfinder.com*",
        Duration::from_secs(1),
        Duration::from_secs(1),
    ).unwrap();

    let waited = limiter
        .wait("https://www.vesselfinder.com/vessels/details/1")
        .await;
    assert_eq!(waited, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_same_domain_is_delayed() {
    let limiter = DomainRateLimiter::new(
        "*vesselfinder.com*",
        Duration::from_secs(1),
        Duration::from_millis(500),
    ).unwrap();

    limiter
        .wait("https://www.vesselfinder.com/vessels/details/1")
        .await;
    let start = Instant::now();
    limiter
        .wait("https://www.vesselfinder.com/vessels/details/2")
        .await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_slow_response_does_not_shorten_delay() {
    let limiter = DomainRateLimiter::new(
        "*vesselfinder.com*",
        Duration::from_secs(1),
        Duration::ZERO,
    ).unwrap();

    limiter.wait("https://www.vesselfinder.com/a").await;
    // Page took 900ms to load
    tokio::time::sleep(Duration::from_millis(900)).await;

    let start = Instant::now();
    let waited = limiter.wait("https://www.vesselfinder.com/b").await;

    assert_eq!(waited, Duration::from_secs(1));
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_other_domains_are_not_delayed() {
    let limiter = DomainRateLimiter::new(
        "*vesselfinder.com*",
        Duration::from_secs(1),
        Duration::from_secs(1),
    ).unwrap();

    limiter.wait("https://example.org/a").await;
    let waited = limiter.wait("https://example.org/b").await;
    assert_eq!(waited, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_unparseable_url_is_not_delayed() {
    let limiter = DomainRateLimiter::new("*", Duration::from_secs(1), Duration::ZERO).unwrap();

    limiter.wait("not a url").await;
    assert_eq!(limiter.wait("not a url").await, Duration::ZERO);
}
