// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, Fetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, REFERER};
use std::time::{Duration, Instant};
use tracing::debug;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; vesselpix/0.1)";

/// 请求画像
///
/// 引擎创建时固定下来的User-Agent、Referer、Cookie与超时
#[derive(Debug, Clone)]
pub struct RequestProfile {
    pub user_agent: String,
    pub referer: Option<String>,
    pub cookie: Option<String>,
    pub timeout: Duration,
}

impl RequestProfile {
    /// 不带任何伪装请求头，用于下载图片
    pub fn plain(timeout: Duration) -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: None,
            cookie: None,
            timeout,
        }
    }

    /// 按抓取器配置生成
    pub fn from_settings(settings: &ScraperSettings) -> Self {
        Self {
            user_agent: settings.user_agent.clone(),
            referer: settings.referer.clone().filter(|r| !r.is_empty()),
            cookie: settings.cookie.clone().filter(|c| !c.is_empty()),
            timeout: settings.request_timeout(),
        }
    }
}

/// 抓取引擎
///
/// 基于reqwest实现，进程内复用同一个客户端
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建引擎
    ///
    /// # 参数
    ///
    /// * `profile` - 请求画像
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 引擎
    /// * `Err(EngineError)` - 请求头非法或客户端构建失败
    pub fn new(profile: RequestProfile) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        if let Some(referer) = &profile.referer {
            headers.insert(REFERER, header_value(referer)?);
        }
        if let Some(cookie) = &profile.cookie {
            headers.insert(COOKIE, header_value(cookie)?);
        }

        let client = reqwest::Client::builder()
            .user_agent(profile.user_agent)
            .default_headers(headers)
            .timeout(profile.timeout)
            .build()?;

        Ok(Self { client })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, EngineError> {
    HeaderValue::from_str(value).map_err(|e| EngineError::Other(format!("Invalid header: {}", e)))
}

#[async_trait]
impl Fetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// 非2xx响应返回 `EngineError::HttpStatus`
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        let start = Instant::now();
        let response = self.client.get(&request.url).send().await?;

        let status = response.status();
        debug!(url = %request.url, status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(EngineError::HttpStatus {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let body = response.bytes().await?;

        Ok(FetchResponse {
            status_code: status.as_u16(),
            content_type,
            body,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
