// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::io;

use thiserror::Error;

/// AssetError describes why a text asset could not be produced.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no asset store available")]
    MissingStore,

    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("invalid asset path: {0:?}")]
    InvalidPath(String),

    #[error("reading asset: {0}")]
    Io(#[source] io::Error),
}

impl AssetError {
    /// from_io classifies an I/O error raised while opening or reading `path`.
    pub fn from_io(path: &str, err: io::Error) -> AssetError {
        match err.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path.to_owned()),
            io::ErrorKind::InvalidInput => AssetError::InvalidPath(path.to_owned()),
            _ => AssetError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}

#[test]
fn classifies_io_errors() {
    let err = AssetError::from_io("a.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(err.is_not_found());
    assert_eq!("asset not found: a.txt", err.to_string());

    let err = AssetError::from_io("../a", io::Error::from(io::ErrorKind::InvalidInput));
    assert!(matches!(err, AssetError::InvalidPath(ref p) if p == "../a"));

    let err = AssetError::from_io("a.txt", io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(err, AssetError::Io(_)));
}
