//! 运势服务

use infrastructure_common::Component;

/// 运势服务接口
pub trait FortuneService: Send + Sync {
    /// 今日运势
    fn fortune(&self) -> String;
}

/// 总是给出好运的运势服务
#[derive(Debug, Default)]
pub struct HappyFortuneService;

impl FortuneService for HappyFortuneService {
    fn fortune(&self) -> String {
        "Today is your lucky day!".to_string()
    }
}

impl Component for HappyFortuneService {
    fn name(&self) -> &'static str {
        crate::config::HAPPY_FORTUNE_SERVICE
    }
}
