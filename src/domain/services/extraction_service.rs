// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::ImageRecord;
use scraper::{Html, Selector};
use thiserror::Error;

/// 提取错误类型
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 选择器无法解析
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),
}

/// 页面中匹配到的图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    pub src: String,
    pub alt: String,
}

/// 图片提取服务
///
/// 用CSS选择器在HTML中定位主图，读取其 `src` / `alt` 属性
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    selector: Selector,
}

impl ImageExtractor {
    /// 创建提取器
    ///
    /// # 参数
    ///
    /// * `selector` - CSS选择器，例如 `img.main-photo`
    ///
    /// # 返回值
    ///
    /// * `Ok(ImageExtractor)` - 提取器
    /// * `Err(ExtractionError)` - 选择器非法
    pub fn new(selector: &str) -> Result<Self, ExtractionError> {
        let selector = Selector::parse(selector)
            .map_err(|_| ExtractionError::InvalidSelector(selector.to_string()))?;
        Ok(Self { selector })
    }

    /// 取第一个匹配元素的 `src` / `alt`，缺失的属性视为空字符串
    pub fn extract(&self, html: &str) -> Option<ExtractedImage> {
        let document = Html::parse_document(html);
        let element = document.select(&self.selector).next()?;

        Some(ExtractedImage {
            src: element.value().attr("src").unwrap_or_default().to_string(),
            alt: element.value().attr("alt").unwrap_or_default().to_string(),
        })
    }

    /// 把匹配结果写入记录；没有匹配时原样返回
    pub fn apply(&self, html: &str, mut record: ImageRecord) -> ImageRecord {
        if let Some(image) = self.extract(html) {
            record.url = image.src;
            record.alt = image.alt;
        }
        record
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
