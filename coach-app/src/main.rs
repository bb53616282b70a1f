//! # Coach App
//!
//! 从 [`SportConfig`] 构建应用上下文，查找 `tennisCoach` 并打印两行结果。
//! 日志输出到 stderr，标准输出只包含教练的两行报告。

use anyhow::Context;
use coach_app::SportConfig;
use di_impl::ApplicationContext;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let context = ApplicationContext::new(SportConfig).context("应用上下文初始化失败")?;
    debug!(
        "已注册的 Bean: {}",
        serde_json::to_string(&context.all_metadata())?
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    coach_app::run(&context, &mut out)?;

    info!("完成");
    Ok(())
}

/// 初始化日志，默认级别 info，可通过 RUST_LOG 调整
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
