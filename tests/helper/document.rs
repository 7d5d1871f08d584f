//! Document fixtures and mock server setup

use mockito::{Mock, Server, ServerGuard};

/// Trimmed copy of the swc "selecting swc_core" page
pub const SWC_CORE_PAGE: &str = r#"---
title: Selecting the version of swc_core
---

import { Callout } from 'nextra-theme-docs'

# Selecting the version of swc_core

Plugins must be built against a `swc_core` version compatible with the host.

## Compatibility table

### `0.90.x` ~ `0.91.x`

- `@swc/core@1.4.0` ~ `@swc/core@1.4.1`
- `next@14.1.1-canary.52` ~

### `0.79.x` ~ `0.82.x`

- `@swc/core@1.3.63` ~ `@swc/core@1.3.67`
- `next@13.4.10-canary.1` ~ `next@13.4.20`

### `0.78.x`

- Unreleased; no `@swc/core` build uses it.

### `0.76.x` ~ `0.77.x`

- `@swc/core@1.3.58` ~ `@swc/core@1.3.62`
"#;

/// Starts a mock server answering `GET path` with `body`
pub async fn serve_document(path: &str, status: usize, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}
