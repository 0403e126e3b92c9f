// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// AssetStore is a read-only source of named byte streams.
///
/// `path` has already been normalized by the caller (see `normalize_path`).
/// A missing asset must be reported as `io::ErrorKind::NotFound`.
pub trait AssetStore {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Box<S> {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

/// normalize_path strips a single leading '/' from an asset path.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// DirAssetStore serves assets from files underneath a root directory.
#[derive(Clone, Debug)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> DirAssetStore {
        DirAssetStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// resolve maps an asset path onto the filesystem, refusing anything
    /// that could land outside of `root`.
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let rel = Path::new(path);
        let well_formed = !path.is_empty()
            && rel
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !well_formed {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset path {:?} escapes the asset root", path),
            ));
        }
        Ok(self.root.join(rel))
    }
}

impl AssetStore for DirAssetStore {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let full_path = self.resolve(path)?;
        let file = File::open(&full_path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is a directory", full_path.display()),
            ));
        }
        Ok(Box::new(file))
    }
}

/// MemoryAssetStore keeps assets in memory, keyed by normalized path.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Arc<[u8]>>,
}

impl MemoryAssetStore {
    pub fn new() -> MemoryAssetStore {
        MemoryAssetStore::default()
    }

    /// insert adds or replaces an asset, returning true if one was replaced.
    pub fn insert(&mut self, path: &str, contents: impl Into<Vec<u8>>) -> bool {
        let contents: Vec<u8> = contents.into();
        self.assets
            .insert(normalize_path(path).to_owned(), contents.into())
            .is_some()
    }

    pub fn remove(&mut self, path: &str) -> bool {
        self.assets.remove(normalize_path(path)).is_some()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<Vec<u8>>> FromIterator<(K, V)> for MemoryAssetStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = MemoryAssetStore::new();
        for (path, contents) in iter {
            store.insert(path.as_ref(), contents);
        }
        store
    }
}

impl AssetStore for MemoryAssetStore {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.assets.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(&contents[..]))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no asset named {:?}", path),
            )),
        }
    }
}
