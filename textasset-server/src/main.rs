// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use textasset_core::{get_value, DirAssetStore};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[allow(dead_code)]
mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
mod config;
mod http;
#[cfg(test)]
mod testing;

#[macro_export]
macro_rules! die(
    ($($arg:tt)*) => { {
        const EXIT_FAILURE: i32 = 1;
        eprintln!($($arg)*);
        std::process::exit(EXIT_FAILURE)
    } }
);

/// usage prints the help text about how to use textasset
fn usage() -> ! {
    let argv0 = std::env::args()
        .next()
        .unwrap_or_else(|| "<textasset>".to_string());
    die!(
        concat!(
            "textasset {}: read text from a bundled asset store.\n\
         \n\
         USAGE:\n",
            "    {} [OPTION...] [ASSET_PATH]\n",
            "\n\
         OPTIONS:\n",
            "    -h, --help          show this message\n",
            "    --config-path PATH  path to a JSON or YAML config file\n",
            "    --asset-root DIR    directory holding the assets (default: assets)\n",
            "    --mode MODE         reader mode, passed through unchanged\n",
            "    --serve             serve assets over HTTP instead of printing one\n",
            "    --listen ADDR       listen address for --serve (default: 127.0.0.1:9110)\n",
        ),
        build_info::PKG_VERSION,
        argv0
    );
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Args {
    pub config_path: Option<PathBuf>,
    pub asset_root: Option<PathBuf>,
    pub mode: Option<String>,
    pub serve: bool,
    pub listen: Option<SocketAddr>,
    pub asset_path: Option<String>,
}

impl Args {
    /// apply overlays command line options on top of `config`.
    fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(asset_root) = &self.asset_root {
            config.asset_root = asset_root.clone();
        }
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(mode) = &self.mode {
            config.default_mode = mode.clone();
        }
        config
    }
}

fn parse_args(mut parsed: pico_args::Arguments) -> Result<Args> {
    let args = Args {
        config_path: parsed.opt_value_from_str("--config-path")?,
        asset_root: parsed.opt_value_from_str("--asset-root")?,
        mode: parsed.opt_value_from_str("--mode")?,
        serve: parsed.contains("--serve"),
        listen: parsed.opt_value_from_str("--listen")?,
        asset_path: parsed.opt_free_from_str()?,
    };

    let rest = parsed.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}", rest);
    }

    Ok(args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn serve(config: ServerConfig) -> Result<()> {
    let num_threads: Option<usize> = {
        std::env::var("CONCURRENCY")
            .ok()
            .and_then(|s| s.parse().ok())
    };

    let mut rt = tokio::runtime::Builder::new_multi_thread();
    rt.enable_all();
    if let Some(thread_count) = num_threads {
        rt.worker_threads(thread_count);
    }
    rt.build()?.block_on(http::serve(config))
}

/// print_value reads one asset from the configured root for print mode.
fn print_value(config: &ServerConfig, path: &str) -> String {
    let store = DirAssetStore::new(&config.asset_root);
    get_value(Some(&store), path, &config.default_mode)
}

fn main() {
    init_logging();

    let mut parsed = pico_args::Arguments::from_env();
    if parsed.contains(["-h", "--help"]) {
        usage();
    }
    let args = parse_args(parsed).unwrap_or_else(|err| {
        eprintln!("ERROR: {:#}", err);
        usage()
    });

    let config = match &args.config_path {
        Some(path) => config::load_config_sync(path).unwrap_or_else(|err| die!("ERROR: {:#}", err)),
        None => ServerConfig::default(),
    };
    let config = args.apply(config);

    if args.serve {
        if args.asset_path.is_some() {
            eprintln!("ERROR: ASSET_PATH and --serve are mutually exclusive arguments");
            usage();
        }
        if let Err(err) = serve(config) {
            die!("ERROR: {:#}", err);
        }
    } else if let Some(asset_path) = &args.asset_path {
        println!("{}", print_value(&config, asset_path));
    } else {
        usage();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(|a| a.into()).collect(),
        ))
    }

    #[test]
    fn print_mode_args() {
        let args = parse(&["--asset-root", "bundle", "--mode", "r", "/greeting.txt"]).unwrap();
        assert_eq!(
            Args {
                asset_root: Some(PathBuf::from("bundle")),
                mode: Some("r".to_owned()),
                asset_path: Some("/greeting.txt".to_owned()),
                ..Default::default()
            },
            args
        );
    }

    #[test]
    fn serve_mode_args() {
        let args = parse(&["--serve", "--listen", "0.0.0.0:9000"]).unwrap();
        assert!(args.serve);
        assert_eq!(Some("0.0.0.0:9000".parse().unwrap()), args.listen);
        assert_eq!(None, args.asset_path);
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        assert!(parse(&["--serve", "--listen", "nowhere"]).is_err());
    }

    #[test]
    fn extra_arguments_are_an_error() {
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn print_value_reads_from_asset_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("greeting.txt"), "Hello\nWorld\n").unwrap();
        let config = ServerConfig {
            asset_root: dir.path().to_owned(),
            ..Default::default()
        };

        assert_eq!("Hello\nWorld", print_value(&config, "/greeting.txt"));
        assert_eq!("Hello\nWorld", print_value(&config, "greeting.txt"));
        assert_eq!("", print_value(&config, "missing.txt"));
    }

    #[test]
    fn command_line_overrides_config() {
        let config = ServerConfig {
            asset_root: PathBuf::from("from-config"),
            default_mode: "config-mode".to_owned(),
            ..Default::default()
        };
        let args = parse(&["--asset-root", "from-args"]).unwrap();

        let merged = args.apply(config.clone());
        assert_eq!(PathBuf::from("from-args"), merged.asset_root);
        assert_eq!("config-mode", merged.default_mode);
        assert_eq!(config.listen_addr, merged.listen_addr);
    }
}
