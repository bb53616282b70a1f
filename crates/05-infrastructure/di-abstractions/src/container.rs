//! 容器配置与配置源抽象
//!
//! 提供依赖注入容器的配置、统计信息和配置源接口

use crate::registry::BeanRegistry;
use crate::resolver::ResolveOptions;
use infrastructure_common::{DependencyResult, ValidationError, ValidationResult};
use serde::Deserialize;

/// 配置源 trait
///
/// 声明一组具名 Bean 及其构造方式，相当于显式的配置类
pub trait ConfigurationSource: Send + Sync {
    /// 配置源名称
    fn name(&self) -> &str;

    /// 向注册表注册 Bean
    fn configure(&self, registry: &mut dyn BeanRegistry) -> DependencyResult<()>;
}

/// 以闭包实现的配置源
pub struct FnConfigurationSource<F> {
    name: String,
    configure: F,
}

impl<F> FnConfigurationSource<F>
where
    F: Fn(&mut dyn BeanRegistry) -> DependencyResult<()> + Send + Sync,
{
    /// 创建新的闭包配置源
    pub fn new(name: impl Into<String>, configure: F) -> Self {
        Self {
            name: name.into(),
            configure,
        }
    }
}

impl<F> ConfigurationSource for FnConfigurationSource<F>
where
    F: Fn(&mut dyn BeanRegistry) -> DependencyResult<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, registry: &mut dyn BeanRegistry) -> DependencyResult<()> {
        (self.configure)(registry)
    }
}

impl<F> std::fmt::Debug for FnConfigurationSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConfigurationSource")
            .field("name", &self.name)
            .finish()
    }
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 是否允许同名 Bean 覆盖先前的定义
    pub allow_bean_overriding: bool,
    /// 是否延迟创建所有单例
    pub lazy_init: bool,
    /// 最大解析深度
    pub max_resolution_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            allow_bean_overriding: false,
            lazy_init: false,
            max_resolution_depth: 100,
        }
    }
}

impl ContainerConfig {
    /// 验证配置
    pub fn validate(&self) -> ValidationResult<()> {
        if self.max_resolution_depth == 0 {
            return Err(ValidationError::value_out_of_range(
                "max_resolution_depth",
                "0",
                "1..",
            ));
        }
        Ok(())
    }

    /// 转换为解析选项
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            max_depth: self.max_resolution_depth,
        }
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册 Bean 数量
    pub registered_beans: usize,
    /// 已创建的单例数量
    pub singletons_created: usize,
    /// 查找总次数
    pub lookups: usize,
    /// 查找失败次数
    pub lookup_failures: usize,
}
