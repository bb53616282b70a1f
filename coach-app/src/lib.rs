//! # Coach App
//!
//! 体育教练示例：通过 [`SportConfig`] 配置源注册教练与运势服务，
//! 再按名称查找 `tennisCoach` 并打印其每日训练与运势。

pub mod coach;
pub mod config;
pub mod driver;
pub mod fortune;

pub use coach::{Coach, TennisCoach};
pub use config::{SportConfig, HAPPY_FORTUNE_SERVICE, TENNIS_COACH};
pub use driver::{run, run_with};
pub use fortune::{FortuneService, HappyFortuneService};
