//! ログ設定
//!
//! 診断ログは stderr、ユーザー向けの出力は stdout に分ける。
//! `RUST_LOG` があればそれを優先する。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// グローバルなtracing subscriberを設定
///
/// 2回目以降の呼び出しは何もしない。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
