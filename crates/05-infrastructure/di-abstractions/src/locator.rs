//! 服务定位器抽象接口
//!
//! 按名称 + 期望类型查找 Bean

use crate::factory::{unerase, BeanInstance};
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};
use std::sync::Arc;

/// 服务定位器 trait
///
/// 对象安全的核心接口，强类型查找见 [`ServiceLocatorExt`]
pub trait ServiceLocator {
    /// 按名称解析 Bean，并以 `requested` 类型返回擦除后的实例
    ///
    /// 名称未注册时返回 [`DependencyError::BeanNotFound`]，
    /// Bean 不能以 `requested` 类型提供时返回 [`DependencyError::TypeMismatch`]
    fn resolve(&self, name: &str, requested: &TypeInfo) -> DependencyResult<BeanInstance>;

    /// 检查是否注册了指定名称的 Bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 获取所有已注册的 Bean 名称（按字母排序）
    fn bean_names(&self) -> Vec<String>;

    /// 获取指定 Bean 的声明类型
    fn bean_type(&self, name: &str) -> Option<TypeInfo>;

    /// 检查指定 Bean 能否以 `requested` 类型提供
    fn is_type_match(&self, name: &str, requested: &TypeInfo) -> bool;
}

/// 服务定位器强类型扩展
pub trait ServiceLocatorExt: ServiceLocator {
    /// 按名称获取 Bean 并检查类型
    fn get_bean<T>(&self, name: &str) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let requested = TypeInfo::of::<T>();
        let instance = self.resolve(name, &requested)?;
        unerase::<T>(&instance).ok_or_else(|| {
            let actual = self
                .bean_type(name)
                .map_or_else(|| "<unknown>".to_string(), |info| info.name.to_string());
            DependencyError::type_mismatch(name, requested.name, actual)
        })
    }

    /// 按名称获取 Bean，未注册时返回 `None`，其余错误照常返回
    fn try_get_bean<T>(&self, name: &str) -> DependencyResult<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.get_bean::<T>(name) {
            Ok(bean) => Ok(Some(bean)),
            Err(DependencyError::BeanNotFound { .. }) if !self.contains_bean(name) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// 检查指定 Bean 能否以类型 `T` 提供
    fn is_bean_of<T>(&self, name: &str) -> bool
    where
        T: ?Sized + 'static,
    {
        self.is_type_match(name, &TypeInfo::of::<T>())
    }
}

impl<L: ServiceLocator + ?Sized> ServiceLocatorExt for L {}
