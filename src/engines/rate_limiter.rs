// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regex::Regex;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// 按域名限速
///
/// 对匹配通配符的域名，同域的每次后续请求前都完整等待 `delay + jitter`，
/// 其中 jitter 在 `[0, random_delay)` 内随机。等待不扣除上一次响应的耗时
pub struct DomainRateLimiter {
    domain_pattern: Regex,
    delay: Duration,
    random_delay: Duration,
    seen_hosts: Mutex<HashSet<String>>,
}

impl DomainRateLimiter {
    /// 创建限速器
    ///
    /// # 参数
    ///
    /// * `domain_glob` - 域名通配符，`*` 匹配任意字符，例如 `*vesselfinder.com*`
    /// * `delay` - 固定间隔
    /// * `random_delay` - 随机间隔上限
    pub fn new(
        domain_glob: &str,
        delay: Duration,
        random_delay: Duration,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            domain_pattern: glob_to_regex(domain_glob)?,
            delay,
            random_delay,
            seen_hosts: Mutex::new(HashSet::new()),
        })
    }

    /// 域名是否受限速约束
    pub fn applies_to(&self, host: &str) -> bool {
        self.domain_pattern.is_match(host)
    }

    /// 在请求前调用，必要时等待
    ///
    /// 返回实际等待的时长
    pub async fn wait(&self, target_url: &str) -> Duration {
        let host = match url::Url::parse(target_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
        {
            Some(host) => host,
            None => return Duration::ZERO,
        };

        if !self.applies_to(&host) {
            return Duration::ZERO;
        }

        let mut seen_hosts = self.seen_hosts.lock().await;
        if !seen_hosts.contains(&host) {
            seen_hosts.insert(host);
            return Duration::ZERO;
        }

        let waited = self.delay + self.jitter();
        if !waited.is_zero() {
            debug!(host = %host, wait_ms = waited.as_millis() as u64, "Rate limiting request");
            tokio::time::sleep(waited).await;
        }
        waited
    }

    fn jitter(&self) -> Duration {
        let max_ms = self.random_delay.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::random_range(0..max_ms))
    }
}

fn glob_to_regex(glob: &str) -> Result<Regex, regex::Error> {
    let pattern = glob
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{}$", pattern))
}

#[cfg(test)]
#[path = "rate_limiter_test.rs"]
mod tests;
