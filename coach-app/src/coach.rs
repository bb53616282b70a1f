//! 教练

use crate::fortune::FortuneService;
use std::sync::Arc;

/// 教练接口
pub trait Coach: Send + Sync {
    /// 每日训练内容
    fn daily_workout(&self) -> String;

    /// 每日运势
    fn daily_fortune(&self) -> String;
}

/// 网球教练，运势委托给注入的 [`FortuneService`]
pub struct TennisCoach {
    fortune_service: Arc<dyn FortuneService>,
}

impl TennisCoach {
    /// 创建网球教练
    pub fn new(fortune_service: Arc<dyn FortuneService>) -> Self {
        Self { fortune_service }
    }
}

impl Coach for TennisCoach {
    fn daily_workout(&self) -> String {
        "Play Tennis".to_string()
    }

    fn daily_fortune(&self) -> String {
        self.fortune_service.fortune()
    }
}

impl std::fmt::Debug for TennisCoach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TennisCoach")
            .field("fortune_service", &"<fortune service>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFortune(&'static str);

    impl FortuneService for FixedFortune {
        fn fortune(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn fortune_comes_from_injected_service() {
        let coach = TennisCoach::new(Arc::new(FixedFortune("Rain later")));
        assert_eq!(coach.daily_workout(), "Play Tennis");
        assert_eq!(coach.daily_fortune(), "Rain later");
    }
}
