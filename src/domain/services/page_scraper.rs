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

use crate::domain::models::image_record::ImageRecord;
use crate::domain::services::extraction_service::ImageExtractor;
use crate::engines::rate_limiter::DomainRateLimiter;
use crate::engines::traits::{EngineError, FetchRequest, Fetcher};
use std::sync::Arc;
use tracing::{info, instrument};

/// 页面抓取服务
///
/// 一次调用 = 限速等待 + 一次GET + 一次提取，不重试
pub struct PageScraper<F: Fetcher> {
    fetcher: Arc<F>,
    limiter: DomainRateLimiter,
    extractor: ImageExtractor,
}

impl<F: Fetcher> PageScraper<F> {
    pub fn new(fetcher: Arc<F>, limiter: DomainRateLimiter, extractor: ImageExtractor) -> Self {
        Self {
            fetcher,
            limiter,
            extractor,
        }
    }

    /// 抓取页面并填充记录
    ///
    /// # 参数
    ///
    /// * `target_url` - 船舶详情页地址
    /// * `record` - 已带有 name / imo 的记录
    ///
    /// # 返回值
    ///
    /// * `Ok(ImageRecord)` - 找到图片时 url / alt 已填充；未找到时原样返回，url 为空
    /// * `Err(EngineError)` - 请求失败或响应状态非2xx
    #[instrument(skip(self, record), fields(imo = ?record.imo))]
    pub async fn scrape(
        &self,
        target_url: &str,
        record: ImageRecord,
    ) -> Result<ImageRecord, EngineError> {
        self.limiter.wait(target_url).await;

        let response = self.fetcher.fetch(&FetchRequest::get(target_url)).await?;
        info!(
            status = response.status_code,
            elapsed_ms = response.response_time_ms,
            "Response received"
        );

        Ok(self.extractor.apply(&response.text(), record))
    }
}
