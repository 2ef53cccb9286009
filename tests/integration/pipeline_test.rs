// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::memory_queue::MemoryQueue;
use super::helpers::{add_vessel, consumer_settings, scraper_settings, setup_db, vessel_page};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use std::time::Duration;
use vesselpix::domain::services::extraction_service::ImageExtractor;
use vesselpix::domain::services::page_scraper::PageScraper;
use vesselpix::engines::rate_limiter::DomainRateLimiter;
use vesselpix::engines::reqwest_engine::{RequestProfile, ReqwestEngine};
use vesselpix::infrastructure::database::entities::image;
use vesselpix::infrastructure::repositories::image_repo_impl::ImageRepositoryImpl;
use vesselpix::infrastructure::repositories::worklist_repo_impl::WorklistRepositoryImpl;
use vesselpix::workers::ingest_worker::IngestWorker;
use vesselpix::workers::scrape_worker::{ScrapeSummary, ScrapeWorker};
use vesselpix::workers::Worker;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

async fn mount_vessel(server: &MockServer, imo: i32, alt: &str) {
    let image_path = format!("/photos/{}.png", imo);
    Mock::given(method("GET"))
        .and(path(format!("/vessels/details/{}", imo)))
        .and(header("referer", "https://www.vesselfinder.com/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(vessel_page(&format!("{}{}", server.uri(), image_path), alt)),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG),
        )
        .mount(server)
        .await;
}

fn scrape_worker(
    db: Arc<DatabaseConnection>,
    queue: Arc<MemoryQueue>,
    base_uri: &str,
) -> ScrapeWorker<WorklistRepositoryImpl, ReqwestEngine, MemoryQueue> {
    let settings = scraper_settings(base_uri);
    let engine = Arc::new(ReqwestEngine::new(RequestProfile::from_settings(&settings)).unwrap());
    let limiter = DomainRateLimiter::new(&settings.domain_glob, Duration::ZERO, Duration::ZERO)
        .unwrap();
    let extractor = ImageExtractor::new(&settings.image_selector).unwrap();
    ScrapeWorker::new(
        Arc::new(WorklistRepositoryImpl::new(db)),
        PageScraper::new(engine, limiter, extractor),
        queue,
        settings,
    )
}

fn ingest_worker(
    db: Arc<DatabaseConnection>,
    queue: Arc<MemoryQueue>,
) -> IngestWorker<MemoryQueue, ImageRepositoryImpl, ReqwestEngine> {
    let downloader =
        Arc::new(ReqwestEngine::new(RequestProfile::plain(Duration::from_secs(5))).unwrap());
    IngestWorker::new(
        queue,
        Arc::new(ImageRepositoryImpl::new(db)),
        downloader,
        consumer_settings(),
    )
}

async fn stored_images(db: &DatabaseConnection) -> Vec<image::Model> {
    image::Entity::find()
        .order_by_asc(image::Column::Id)
        .all(db)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_vessels_flow_from_page_to_images_table() {
    let server = MockServer::start().await;
    mount_vessel(&server, 9811000, "EVER GIVEN").await;
    mount_vessel(&server, 9321483, "EMMA MAERSK").await;

    let db = setup_db().await;
    add_vessel(&db, 9811000, "EVER GIVEN").await;
    add_vessel(&db, 9321483, "EMMA MAERSK").await;

    let queue = Arc::new(MemoryQueue::new());
    let summary = scrape_worker(db.clone(), queue.clone(), &server.uri())
        .run_once()
        .await
        .unwrap();

    assert_eq!(
        summary,
        ScrapeSummary {
            pending: 2,
            published: 2,
            missed: 0,
            failed: 0,
        }
    );
    let records = queue.payloads();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].imo, Some(9321483));
    assert_eq!(records[0].name.as_deref(), Some("EMMA MAERSK"));
    assert_eq!(records[0].alt, "EMMA MAERSK");

    ingest_worker(db.clone(), queue.clone()).run().await.unwrap();

    let rows = stored_images(&db).await;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.image.as_deref() == Some(PNG)));
    assert_eq!(rows[0].imo, Some(9321483));
    assert_eq!(rows[1].imo, Some(9811000));
    assert_eq!(queue.acked(), vec![0, 1]);
    assert_eq!(queue.len(), 0);
}

#[tokio::test]
async fn test_second_pass_skips_vessels_with_images() {
    let server = MockServer::start().await;
    mount_vessel(&server, 9811000, "EVER GIVEN").await;
    mount_vessel(&server, 9321483, "EMMA MAERSK").await;

    let db = setup_db().await;
    add_vessel(&db, 9811000, "EVER GIVEN").await;

    let queue = Arc::new(MemoryQueue::new());
    scrape_worker(db.clone(), queue.clone(), &server.uri())
        .run_once()
        .await
        .unwrap();
    ingest_worker(db.clone(), queue.clone()).run().await.unwrap();

    add_vessel(&db, 9321483, "EMMA MAERSK").await;
    let summary = scrape_worker(db.clone(), queue.clone(), &server.uri())
        .run_once()
        .await
        .unwrap();

    assert_eq!(summary.pending, 1);
    assert_eq!(summary.published, 1);
    let records = queue.payloads();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].imo, Some(9321483));
}

#[tokio::test]
async fn test_page_without_photo_publishes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vessels/details/1234567"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>no photo</body></html>"))
        .mount(&server)
        .await;
    mount_vessel(&server, 9811000, "EVER GIVEN").await;

    let db = setup_db().await;
    add_vessel(&db, 1234567, "GHOST").await;
    add_vessel(&db, 9811000, "EVER GIVEN").await;

    let queue = Arc::new(MemoryQueue::new());
    let summary = scrape_worker(db.clone(), queue.clone(), &server.uri())
        .run_once()
        .await
        .unwrap();

    assert_eq!(summary.missed, 1);
    assert_eq!(summary.published, 1);
    assert_eq!(queue.len(), 1);
}

#[tokio::test]
async fn test_unavailable_page_does_not_stop_the_pass() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vessels/details/1234567"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_vessel(&server, 9811000, "EVER GIVEN").await;

    let db = setup_db().await;
    add_vessel(&db, 1234567, "GHOST").await;
    add_vessel(&db, 9811000, "EVER GIVEN").await;

    let queue = Arc::new(MemoryQueue::new());
    let summary = scrape_worker(db.clone(), queue.clone(), &server.uri())
        .run_once()
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.published, 1);

    ingest_worker(db.clone(), queue.clone()).run().await.unwrap();
    assert_eq!(stored_images(&db).await.len(), 1);
}
