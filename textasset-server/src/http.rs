// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::{routing::get, Router};
use serde::Deserialize;
use textasset_core::{response, try_get_value, DirAssetStore};

use crate::config::ServerConfig;

/// AssetState is shared by every request handler.
#[derive(Clone, Debug)]
pub struct AssetState {
    pub store: Arc<DirAssetStore>,
    pub default_mode: String,
}

impl AssetState {
    pub fn from_config(config: &ServerConfig) -> AssetState {
        AssetState {
            store: Arc::new(DirAssetStore::new(&config.asset_root)),
            default_mode: config.default_mode.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AssetQuery {
    mode: Option<String>,
}

pub fn router(state: AssetState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/assets/*path", get(get_asset))
        .layer(Extension(state))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_asset(
    Path(path): Path<String>,
    Query(query): Query<AssetQuery>,
    Extension(state): Extension<AssetState>,
) -> Result<String, textasset_core::Response> {
    let mode = query.mode.unwrap_or(state.default_mode);
    let store = state.store;
    // the wildcard capture starts with the route's own '/'
    let lookup = path.strip_prefix('/').unwrap_or(&path).to_owned();

    let result =
        tokio::task::spawn_blocking(move || try_get_value(Some(&*store), &lookup, &mode)).await;
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::warn!(%path, error = %err, "asset request failed");
            Err(response::asset_error(&err))
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "asset read task failed");
            Err(response::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "asset read task failed",
            ))
        }
    }
}

/// serve runs the HTTP server until ctrl-c.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(AssetState::from_config(&config));
    let server = axum::Server::try_bind(&config.listen_addr)
        .with_context(|| format!("binding {}", config.listen_addr))?
        .serve(app.into_make_service());

    tracing::info!(
        addr = %server.local_addr(),
        asset_root = %config.asset_root.display(),
        "textasset listening"
    );

    server
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
