//! 查找并调用教练 Bean
//!
//! 所有查找都在输出之前完成，查找失败时不会写出任何内容

use crate::coach::Coach;
use crate::config::TENNIS_COACH;
use anyhow::Context;
use di_abstractions::{ServiceLocator, ServiceLocatorExt};
use std::io::Write;
use tracing::debug;

/// 查找 `tennisCoach` 并输出其每日训练与运势
pub fn run<L, W>(locator: &L, out: &mut W) -> anyhow::Result<()>
where
    L: ServiceLocator + ?Sized,
    W: Write,
{
    run_with(locator, TENNIS_COACH, out)
}

/// 查找指定名称的教练并输出其每日训练与运势，每项一行
pub fn run_with<L, W>(locator: &L, name: &str, out: &mut W) -> anyhow::Result<()>
where
    L: ServiceLocator + ?Sized,
    W: Write,
{
    let coach = locator
        .get_bean::<dyn Coach>(name)
        .with_context(|| format!("无法获取教练 Bean: {name}"))?;
    debug!("已解析教练 Bean: {}", name);

    let workout = coach.daily_workout();
    let fortune = coach.daily_fortune();

    writeln!(out, "{workout}")?;
    writeln!(out, "{fortune}")?;
    out.flush()?;
    Ok(())
}
