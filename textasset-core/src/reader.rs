// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::io::BufReader;

use crate::error::AssetError;
use crate::store::{normalize_path, AssetStore};
use crate::text;

/// get_value returns the trimmed text of the asset at `path`, or an empty
/// string if there is no store or the asset can't be read.
///
/// A single leading '/' in `path` is ignored. `mode` is reserved and has no
/// effect on the result.
pub fn get_value<S>(store: Option<&S>, path: &str, mode: &str) -> String
where
    S: AssetStore + ?Sized,
{
    match try_get_value(store, path, mode) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(path, error = %err, "text asset unavailable");
            String::new()
        }
    }
}

/// try_get_value is get_value with the failure reason kept, so a missing
/// asset can be told apart from an empty one.
pub fn try_get_value<S>(store: Option<&S>, path: &str, _mode: &str) -> Result<String, AssetError>
where
    S: AssetStore + ?Sized,
{
    let store = store.ok_or(AssetError::MissingStore)?;
    let path = normalize_path(path);

    // the stream is dropped on every return below
    let stream = store
        .open(path)
        .map_err(|err| AssetError::from_io(path, err))?;
    text::read_joined_lines(BufReader::new(stream)).map_err(|err| AssetError::from_io(path, err))
}
