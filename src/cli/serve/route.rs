//! Request routing.
//!
//! | Route                    | Body                          |
//! |--------------------------|-------------------------------|
//! | `/`, `/index.html`       | rendered profile page         |
//! | `/sitemap.xml`           | sitemap for the canonical URL |
//! | `/robots.txt`            | crawler directives            |
//! | anything else            | file under `serve.static_dir` |
//!
//! `route` is a pure function of the request line and a resolved context;
//! writing the result to the socket is done by [`super::response::send`].

use super::headers::{CACHE_NONE, cache_control};
use super::path::{request_path, resolve_path};
use super::response::Reply;
use crate::config::{EnvBindings, EnvResolver, ProcessEnv, SeoConfig, SiteConfig};
use crate::embed::page::{NOT_FOUND_HTML, NotFoundVars};
use crate::generator::{page, robots, sitemap};
use crate::log;
use crate::utils::{
    date::DateTimeUtc,
    mime::{
        self,
        types::{HTML, PLAIN, XML},
    },
};
use std::fs;
use tiny_http::Method;

/// Everything a request needs, resolved once per request.
pub struct RouteContext<'a> {
    pub site: &'a SiteConfig,
    pub seo: SeoConfig,
    /// Timestamp used for sitemap `lastmod`.
    pub now: DateTimeUtc,
}

impl<'a> RouteContext<'a> {
    /// Resolve configuration against runtime bindings and the process environment.
    pub fn resolve(site: &'a SiteConfig, runtime: &EnvBindings) -> Self {
        let env = EnvResolver::new(runtime, &ProcessEnv);
        Self {
            site,
            seo: SeoConfig::resolve(&env, site),
            now: DateTimeUtc::now(),
        }
    }
}

/// Map a request to a reply.
///
/// HEAD builds the same reply as GET, body included, so `Content-Length`
/// matches; tiny_http never writes a body for HEAD.
pub fn route(method: &Method, url: &str, ctx: &RouteContext<'_>) -> Reply {
    let path = request_path(url);

    let reply = match method {
        Method::Get | Method::Head => get(path, url, ctx),
        _ => Reply::new(405, PLAIN, "405 Method Not Allowed").with_header("Allow", "GET, HEAD"),
    };
    // Error responses are never cached, whatever the extension.
    let cache = if reply.status < 400 {
        cache_control(path)
    } else {
        CACHE_NONE
    };
    reply.with_header("Cache-Control", cache)
}

fn get(path: &str, url: &str, ctx: &RouteContext<'_>) -> Reply {
    match path {
        "/" | "/index.html" => match page::render_index(&ctx.seo, ctx.site) {
            Ok(html) => Reply::html(html),
            Err(e) => {
                log!("error"; "failed to render page: {e}");
                Reply::internal_error()
            }
        },
        "/sitemap.xml" => {
            let urls = sitemap::site_sitemap_urls(&ctx.seo, ctx.now);
            Reply::new(200, XML, sitemap::generate_sitemap(&urls))
        }
        "/robots.txt" => Reply::new(
            200,
            PLAIN,
            robots::generate_robots_txt(&ctx.seo.sitemap_url()),
        ),
        _ => static_file(path, url, ctx),
    }
}

fn static_file(path: &str, url: &str, ctx: &RouteContext<'_>) -> Reply {
    let Some(file) = resolve_path(url, &ctx.site.serve.static_dir) else {
        return not_found(path);
    };
    match fs::read(&file) {
        Ok(body) => Reply::new(200, mime::from_path(&file), body),
        Err(e) => {
            log!("error"; "failed to read {}: {e}", file.display());
            Reply::internal_error()
        }
    }
}

fn not_found(path: &str) -> Reply {
    let body = NOT_FOUND_HTML.render(&NotFoundVars {
        path: path.to_string(),
    });
    Reply::new(404, HTML, body)
}
