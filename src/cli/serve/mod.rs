//! HTTP server for the portfolio.
//!
//! ```text
//! bind_with_retry ─► incoming_requests ─► rayon pool ─► route ─► send
//! ```
//!
//! Configuration is re-resolved for every request, so process environment
//! changes take effect without a restart.

mod headers;
mod lifecycle;
mod path;
mod response;
mod route;

pub use response::Reply;
pub use route::{RouteContext, route};

use crate::{config::EnvBindings, config::SiteConfig, debug, log};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Worker threads handling requests.
const POOL_THREADS: usize = 4;

/// Bind the configured address and serve until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>, runtime: Arc<EnvBindings>) -> Result<()> {
    let (server, addr) =
        lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    debug!("serve"; "static files from {}", config.serve.static_dir.display());

    run_request_loop(&server, &config, &runtime)?;
    log!("serve"; "stopped");
    Ok(())
}

fn run_request_loop(
    server: &Server,
    config: &Arc<SiteConfig>,
    runtime: &Arc<EnvBindings>,
) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(POOL_THREADS)
        .thread_name(|i| format!("folio-http-{i}"))
        .build()
        .context("Failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let config = Arc::clone(config);
        let runtime = Arc::clone(runtime);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, &runtime) {
                log!("error"; "request error: {e:#}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, runtime: &EnvBindings) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::send(request, Reply::unavailable());
    }

    let ctx = RouteContext::resolve(config, runtime);
    let reply = route(request.method(), request.url(), &ctx);

    if ctx.seo.environment.is_development() {
        log!("request"; "{} {} -> {}", request.method(), request.url(), reply.status);
    } else {
        debug!("request"; "{} {} -> {}", request.method(), request.url(), reply.status);
    }
    response::send(request, reply)
}
