//! Probe semantics against a live in-process HTTP server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::header;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use sondar::{
    Extractor, OpaquePolicy, Page, ProbeConfig, ProbeRunner, Prober, ResourceKind, ResourceRef,
};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// A decodable 1x1 PNG, produced by the same decoder the probe uses.
fn png_bytes() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn fixture_router() -> Router {
    Router::new()
        .route("/ok.css", get(|| async { "body{}" }))
        .route("/post-only", post(|| async { "created" }))
        .route(
            "/img/good.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], png_bytes()) }),
        )
        .route(
            "/img/corrupt.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], "not really a png") }),
        )
        .route(
            "/img/logo.svg",
            get(|| async { ([(header::CONTENT_TYPE, "image/svg+xml")], "<svg/>") }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        )
}

fn prober() -> Prober {
    Prober::new(ProbeConfig::new().with_timeout(Duration::from_secs(2)))
}

#[tokio::test]
async fn head_probe_passes_on_success_status() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::stylesheet(base.join("ok.css").unwrap()))
        .await;
    assert!(outcome.succeeded);
    assert!(outcome.detail.is_none());
}

#[tokio::test]
async fn head_probe_fails_with_status_detail() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::script(base.join("missing.js").unwrap()))
        .await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("404"));
}

#[tokio::test]
async fn opaque_response_is_success_under_lenient_policy() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::link(base.join("post-only").unwrap(), "submit"))
        .await;
    assert!(outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("405"));
}

#[tokio::test]
async fn opaque_response_is_failure_under_strict_policy() {
    let base = serve(fixture_router()).await;
    let prober = Prober::new(
        ProbeConfig::new()
            .with_timeout(Duration::from_secs(2))
            .with_opaque_policy(OpaquePolicy::Strict),
    );
    let outcome = prober
        .probe(ResourceRef::link(base.join("post-only").unwrap(), "submit"))
        .await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("405"));
}

#[tokio::test]
async fn image_probe_accepts_decodable_body() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::image(base.join("img/good.png").unwrap(), None))
        .await;
    assert!(outcome.succeeded);
}

#[tokio::test]
async fn image_probe_rejects_undecodable_body() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::image(
            base.join("img/corrupt.png").unwrap(),
            None,
        ))
        .await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("not a decodable image"));
}

#[tokio::test]
async fn image_probe_accepts_svg_via_content_type() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::image(base.join("img/logo.svg").unwrap(), None))
        .await;
    assert!(outcome.succeeded);
}

#[tokio::test]
async fn image_probe_fails_on_missing_resource() {
    let base = serve(fixture_router()).await;
    let outcome = prober()
        .probe(ResourceRef::image(base.join("img/nope.png").unwrap(), None))
        .await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("404"));
}

#[tokio::test]
async fn probe_times_out_instead_of_stalling() {
    let base = serve(fixture_router()).await;
    let prober = Prober::new(ProbeConfig::new().with_timeout(Duration::from_millis(200)));
    let outcome = prober
        .probe(ResourceRef::link(base.join("slow").unwrap(), "slow"))
        .await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.unwrap().contains("timed out after 200ms"));
}

#[tokio::test]
async fn network_error_is_captured_not_propagated() {
    // Nothing listens on this port
    let url = Url::parse("http://127.0.0.1:1/x.css").unwrap();
    let outcome = prober().probe(ResourceRef::stylesheet(url)).await;
    assert!(!outcome.succeeded);
    assert!(outcome.detail.is_some());
}

#[tokio::test]
async fn concurrent_probes_keep_extraction_order() {
    let router = Router::new()
        .route(
            "/a",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                "a"
            }),
        )
        .route("/b", get(|| async { "b" }))
        .route("/c", get(|| async { "c" }));
    let base = serve(router).await;

    let references: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|path| ResourceRef::link(base.join(path).unwrap(), path))
        .collect();

    let runner = ProbeRunner::new(Prober::new(
        ProbeConfig::new()
            .with_timeout(Duration::from_secs(2))
            .with_concurrency(3),
    ));
    let outcomes = runner.probe_category(&references).await;

    let paths: Vec<_> = outcomes
        .iter()
        .map(|o| o.reference.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/a", "/b", "/c"]);
    assert!(outcomes.iter().all(|o| o.succeeded));
}

#[tokio::test]
async fn page_fetch_records_post_redirect_url() {
    let router = Router::new()
        .route("/", get(|| async { Redirect::permanent("/home") }))
        .route("/home", get(|| async { "<html><body>home</body></html>" }));
    let base = serve(router).await;

    let prober = prober();
    let page = Page::fetch(prober.client(), base.clone()).await.unwrap();
    assert_eq!(page.url().path(), "/home");
    assert!(page.html().contains("home"));
}

#[tokio::test]
async fn page_fetch_fails_on_error_status() {
    let base = serve(Router::new()).await;
    let prober = prober();
    let err = Page::fetch(prober.client(), base.join("gone").unwrap())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load page"));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn full_run_matches_expected_totals() {
    // 3 images (2 loadable, 1 broken), 1 stylesheet, 0 scripts, 1 favicon
    const PAGE_HTML: &str = r#"<html><head>
        <link rel="stylesheet" href="/ok.css">
        <link rel="icon" href="/favicon.ico" sizes="32x32">
    </head><body>
        <img src="/img/good.png" alt="one">
        <img src="/img/also-good.png" alt="two">
        <img src="/img/broken.png" alt="three">
    </body></html>"#;

    let router = fixture_router()
        .route("/", get(|| async { PAGE_HTML }))
        .route(
            "/img/also-good.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], png_bytes()) }),
        )
        .route(
            "/favicon.ico",
            get(|| async { ([(header::CONTENT_TYPE, "image/x-icon")], "ico") }),
        );
    let base = serve(router).await;

    let prober = prober();
    let page = Page::fetch(prober.client(), base).await.unwrap();
    let resources = Extractor::new().extract(page.html(), page.url());
    assert_eq!(resources.total(), 5);

    let report = ProbeRunner::new(prober).run(&resources).await;
    assert_eq!(report.total(), 5);
    assert_eq!(report.passed(), 4);
    assert_eq!(report.failed(), 1);
    assert!((report.success_rate().unwrap() - 80.0).abs() < f64::EPSILON);

    let images = report.category(ResourceKind::Image);
    assert_eq!(images.ok.len(), 2);
    assert_eq!(images.failed.len(), 1);
    assert!(images.failed[0].reference.url.path().ends_with("broken.png"));

    let rendered = report.render();
    assert!(rendered.contains("Images: 2/3 OK"));
    assert!(rendered.contains("broken.png"));
}

#[tokio::test]
async fn run_with_no_resources_reports_zero() {
    let router = Router::new().route("/", get(|| async { "<html><body>bare</body></html>" }));
    let base = serve(router).await;

    let prober = prober();
    let page = Page::fetch(prober.client(), base).await.unwrap();
    let resources = Extractor::new().extract(page.html(), page.url());
    let report = ProbeRunner::new(prober).run(&resources).await;

    assert_eq!(report.total(), 0);
    assert!(report.success_rate().is_none());
    assert!(report.render().contains("All resources passed"));
}
