// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::net::SocketAddr;

use axum::Router;

/// TestHttpServer serves `app` on an ephemeral port at `TestHttpServer.addr`.
/// The server will be automatically shut down when TestHttpServer is dropped.
pub(crate) struct TestHttpServer {
    pub(crate) addr: SocketAddr,
    // dropping the sender unblocks the graceful shutdown future
    #[allow(dead_code)]
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestHttpServer {
    pub(crate) fn new(app: Router) -> Self {
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let any_addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let server = axum::Server::bind(&any_addr).serve(app.into_make_service());

        let addr = server.local_addr();

        let server = server.with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(async move {
            server.await.unwrap();
        });

        Self { addr, shutdown_tx }
    }
}
