//! `folio render`: run one route without a socket and print the result.

use super::serve::{Reply, RouteContext, route};
use crate::config::{EnvBindings, SiteConfig};
use anyhow::{Result, bail};
use std::io::{self, Write};
use tiny_http::Method;

/// Render `path` to stdout. Fails for 4xx/5xx replies, after printing them.
pub fn render_route(
    config: &SiteConfig,
    runtime: &EnvBindings,
    path: &str,
    include: bool,
) -> Result<()> {
    let ctx = RouteContext::resolve(config, runtime);
    let reply = route(&Method::Get, path, &ctx);

    write_reply(&mut io::stdout().lock(), &reply, include)?;

    if reply.status >= 400 {
        bail!("{path} returned {}", reply.status);
    }
    Ok(())
}

/// Write the body, optionally preceded by an HTTP-style status line and headers.
fn write_reply(out: &mut impl Write, reply: &Reply, include: bool) -> io::Result<()> {
    if include {
        writeln!(out, "HTTP/1.1 {}", reply.status)?;
        writeln!(out, "Content-Type: {}", reply.content_type)?;
        for (name, value) in &reply.headers {
            writeln!(out, "{name}: {value}")?;
        }
        writeln!(out)?;
    }
    out.write_all(&reply.body)?;
    out.flush()
}
