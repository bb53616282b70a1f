//! 体育配置源

use crate::coach::{Coach, TennisCoach};
use crate::fortune::{FortuneService, HappyFortuneService};
use di_abstractions::{BeanDefinition, BeanRegistry, ConfigurationSource, ServiceLocatorExt};
use infrastructure_common::{Component, DependencyResult};
use std::sync::Arc;

/// 网球教练 Bean 名称
pub const TENNIS_COACH: &str = "tennisCoach";

/// 运势服务 Bean 名称
pub const HAPPY_FORTUNE_SERVICE: &str = "happyFortuneService";

/// 体育配置源
///
/// 注册 `happyFortuneService` 与依赖它的 `tennisCoach`
#[derive(Debug, Default, Clone, Copy)]
pub struct SportConfig;

impl ConfigurationSource for SportConfig {
    fn name(&self) -> &str {
        "SportConfig"
    }

    fn configure(&self, registry: &mut dyn BeanRegistry) -> DependencyResult<()> {
        let fortune_service = HappyFortuneService;
        registry.register(
            BeanDefinition::instance(fortune_service.name(), Arc::new(fortune_service))
                .expose_as::<dyn FortuneService, _>(|service| service as Arc<dyn FortuneService>)
                .description("总是给出好运的运势服务")
                .build(),
        )?;

        registry.register(
            BeanDefinition::factory::<TennisCoach, _>(TENNIS_COACH, |locator| {
                let fortune_service =
                    locator.get_bean::<dyn FortuneService>(HAPPY_FORTUNE_SERVICE)?;
                Ok(Arc::new(TennisCoach::new(fortune_service)))
            })
            .expose_as::<dyn Coach, _>(|coach| coach as Arc<dyn Coach>)
            .description("网球教练")
            .build(),
        )
    }
}
