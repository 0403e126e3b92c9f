// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

pub mod error;
pub mod reader;
pub mod response;
pub mod store;
pub mod text;

pub use error::AssetError;
pub use reader::{get_value, try_get_value};
pub use store::{AssetStore, DirAssetStore, MemoryAssetStore};

pub type Response = axum::http::Response<axum::body::Body>;
