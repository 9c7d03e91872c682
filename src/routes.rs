use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, get_service},
    Router,
};
use chrono::Utc;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, error};

use crate::catalogue::{
    brand_by_slug, case_study_by_slug, legal_page_by_slug, model_by_slug, sector_by_slug,
    LEGAL_PAGES,
};
use crate::content_loader::{get_post, list_posts, read_legal_page};
use crate::error::Result;
use crate::feeds::{
    atom::atom_feed,
    news_sitemap::news_sitemap,
    sitemap::{robots_txt, site_sitemap},
    ATOM_CONTENT_TYPE, XML_CONTENT_TYPE,
};
use crate::hot_reload::ws_handler;
use crate::markdown::render_markdown_to_html;
use crate::pages::{blog, marketing, render_not_found, render_with_layout, PageMeta};
use crate::state::{AppState, RouterState};

pub fn app(router_state: RouterState) -> Router {
    let config = router_state.app_state.config.clone();
    let static_dir = config.static_dir();

    let mut router = Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/brands", get(brands))
        .route("/brands/{slug}", get(brand_detail))
        .route("/what-we-do", get(what_we_do))
        .route("/what-we-do/{slug}", get(sector_detail))
        .route("/case-studies/{slug}", get(case_study_detail))
        .route("/models/{slug}", get(model_detail))
        .route("/contact", get(contact))
        .route("/blog", get(blog_index))
        .route("/blog/{slug}", get(blog_post))
        .route("/atom", get(atom))
        .route("/feed", get(atom))
        .route("/news-sitemap.xml", get(news_sitemap_xml))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots))
        .nest_service("/assets", get_service(ServeDir::new(&static_dir)))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")));

    for page in LEGAL_PAGES {
        router = router.route(&page.path(), get(legal));
    }

    if config.is_development {
        router = router.route("/ws", get(ws_handler));
    }

    router
        .fallback(fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(router_state)
}

async fn render(state: &AppState, meta: PageMeta, content: &str) -> Html<String> {
    let layout = state.layout_html.read().await;
    Html(render_with_layout(
        &layout,
        &state.config.site_name,
        &meta,
        content,
        state.config.is_development,
    ))
}

async fn not_found(state: &AppState, path: &str) -> Response {
    debug!(path, "not found");
    let body = {
        let template = state.not_found_html.read().await;
        render_not_found(&template, path)
    };
    let meta = PageMeta::new("Page not found", "This page could not be found.", path);
    (StatusCode::NOT_FOUND, render(state, meta, &body).await).into_response()
}

fn xml_response(state: &AppState, content_type: &str, xml: Result<String>) -> Response {
    match xml {
        Ok(xml) => (
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (header::CACHE_CONTROL, state.config.cache_control()),
            ],
            xml,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to generate feed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    not_found(&state, uri.path()).await
}

async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let (meta, body) = marketing::home(&state.config.site_name);
    render(&state, meta, &body).await
}

async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    let (meta, body) = marketing::about(&state.config.site_name);
    render(&state, meta, &body).await
}

async fn brands(State(state): State<Arc<AppState>>) -> Html<String> {
    let (meta, body) = marketing::brands();
    render(&state, meta, &body).await
}

async fn brand_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match brand_by_slug(&slug) {
        Some(brand) => {
            let (meta, body) = marketing::brand(brand);
            render(&state, meta, &body).await.into_response()
        }
        None => not_found(&state, &format!("/brands/{slug}")).await,
    }
}

async fn what_we_do(State(state): State<Arc<AppState>>) -> Html<String> {
    let (meta, body) = marketing::what_we_do();
    render(&state, meta, &body).await
}

async fn contact(State(state): State<Arc<AppState>>) -> Html<String> {
    let (meta, body) = marketing::contact(&state.config.contact_email);
    render(&state, meta, &body).await
}

async fn sector_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match sector_by_slug(&slug) {
        Some(sector) => {
            let (meta, body) = marketing::sector(sector);
            render(&state, meta, &body).await.into_response()
        }
        None => not_found(&state, &format!("/what-we-do/{slug}")).await,
    }
}

async fn case_study_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match case_study_by_slug(&slug) {
        Some(study) => {
            let (meta, body) = marketing::case_study(study);
            render(&state, meta, &body).await.into_response()
        }
        None => not_found(&state, &format!("/case-studies/{slug}")).await,
    }
}

async fn model_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match model_by_slug(&slug) {
        Some(model) => {
            let (meta, body) = marketing::model(model);
            render(&state, meta, &body).await.into_response()
        }
        None => not_found(&state, &format!("/models/{slug}")).await,
    }
}

/// Legal pages are routed by their own path, so the slug is the path itself.
async fn legal(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(page) = legal_page_by_slug(uri.path().trim_start_matches('/')) else {
        return not_found(&state, uri.path()).await;
    };
    match read_legal_page(&state.config.legal_dir(), &page.file_name()).await {
        Some(source) => {
            let (meta, body) = marketing::legal(page, &render_markdown_to_html(&source));
            render(&state, meta, &body).await.into_response()
        }
        None => not_found(&state, uri.path()).await,
    }
}

async fn blog_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let posts = list_posts(&state.config.posts_dir()).await;
    let (meta, body) = blog::index(&state.config, &posts);
    render(&state, meta, &body).await
}

async fn blog_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(post) = get_post(&state.config.posts_dir(), &slug).await else {
        return not_found(&state, &format!("/blog/{slug}")).await;
    };

    let rendered = render_markdown_to_html(&post.body);
    let (meta, body) = blog::post(&state.config, &post, &rendered);
    render(&state, meta, &body).await.into_response()
}

async fn atom(State(state): State<Arc<AppState>>) -> Response {
    let posts = list_posts(&state.config.posts_dir()).await;
    let feed = atom_feed(&state.config, &posts, Utc::now());
    xml_response(&state, ATOM_CONTENT_TYPE, Ok(feed))
}

async fn news_sitemap_xml(State(state): State<Arc<AppState>>) -> Response {
    let posts = list_posts(&state.config.posts_dir()).await;
    let xml = news_sitemap(&state.config, &posts, Utc::now());
    xml_response(&state, XML_CONTENT_TYPE, xml)
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> Response {
    let posts = list_posts(&state.config.posts_dir()).await;
    let xml = site_sitemap(&state.config, &posts, Utc::now());
    xml_response(&state, XML_CONTENT_TYPE, xml)
}

async fn robots(State(state): State<Arc<AppState>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, state.config.cache_control()),
        ],
        robots_txt(&state.config),
    )
        .into_response()
}
