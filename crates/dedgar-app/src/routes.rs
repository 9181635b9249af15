use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod account;
pub mod cert;
pub mod contact;
pub mod kanji;
pub mod pages;
pub mod posts;
pub mod watch;

use account::{login_handler, logout_handler, me_handler, register_handler};
use cert::cert_handler;
use contact::contact_handler;
use kanji::{flashcard_handler, level_handler, selection_handler};
use pages::page;
use posts::{post_handler, posts_handler};
use watch::watch_handler;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let static_dir = Path::new(&state.config.server.static_dir);
    let static_files = ServeDir::new(static_dir);
    let robots = ServeFile::new(static_dir.join("public/robots.txt"));
    let sitemap = ServeFile::new(static_dir.join("public/sitemap.xml"));

    Router::new()
        .route("/", get(posts_handler))
        .route("/about", page("about"))
        .route("/about-us", page("about"))
        .route("/contact", page("contact"))
        .route("/contact-us", page("contact"))
        .route("/privacy", page("privacy"))
        .route("/privacy-policy", page("privacy"))
        .route("/dev", page("dev"))
        .route("/kanjitainer", page("container"))
        .route("/kanjitainer/", page("container"))
        .route("/post-contact", post(contact_handler))
        .route("/post", get(posts_handler))
        .route("/post/", get(posts_handler))
        .route("/posts", get(posts_handler))
        .route("/posts/", get(posts_handler))
        .route("/post/{name}", get(post_handler))
        .route("/posts/{name}", get(post_handler))
        .route("/watch/{show}/{season}/{episode}", get(watch_handler))
        .route("/kanji", get(selection_handler))
        .route("/kanji/", get(selection_handler))
        .route("/kanji/{selection}/{level}", get(level_handler))
        .route("/kanji/{selection}/{level}/{kanji}", get(flashcard_handler))
        .route("/.well-known/acme-challenge/{response}", get(cert_handler))
        .route("/.well-known/acme-challenge/{response}/", get(cert_handler))
        .route("/well-known/acme-challenge/{response}", get(cert_handler))
        .route("/well-known/acme-challenge/{response}/", get(cert_handler))
        .route_service("/robots.txt", robots)
        .route_service("/sitemap.xml", sitemap)
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/me", get(me_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
