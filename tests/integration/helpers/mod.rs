// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod memory_queue;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::Arc;
use vesselpix::config::settings::{ConsumerSettings, ScraperSettings};
use vesselpix::infrastructure::database::entities::vessel;

/// 内存SQLite，已执行迁移
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
    Migrator::up(db.as_ref(), None).await.unwrap();
    db
}

pub async fn add_vessel(db: &DatabaseConnection, imo: i32, name: &str) {
    vessel::ActiveModel {
        imo: Set(imo),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

/// 指向mock服务器的抓取配置，不限速
pub fn scraper_settings(base_uri: &str) -> ScraperSettings {
    ScraperSettings {
        target_url: format!("{}/vessels/details/{{imo}}", base_uri),
        image_selector: "img.main-photo".to_string(),
        user_agent: "vesselpix-test".to_string(),
        referer: Some("https://www.vesselfinder.com/".to_string()),
        cookie: None,
        domain_glob: "*vesselfinder.com*".to_string(),
        delay_ms: 0,
        random_delay_ms: 0,
        request_timeout_secs: 5,
        include_vessel_fields: true,
        exit_delay_secs: 0,
    }
}

pub fn consumer_settings() -> ConsumerSettings {
    ConsumerSettings {
        download_image: true,
        ack_failed: true,
        verify_output_path: None,
    }
}

pub fn vessel_page(image_src: &str, alt: &str) -> String {
    format!(
        r#"<html><body><div class="main"><img class="main-photo" src="{}" alt="{}"></div></body></html>"#,
        image_src, alt
    )
}
