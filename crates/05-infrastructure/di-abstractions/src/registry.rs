//! Bean 注册表抽象接口

use crate::factory::{erase, typed_cast, typed_factory, BeanCastFn, BeanFactoryFn, BeanInstance};
use crate::locator::ServiceLocator;
use infrastructure_common::{BeanMetadata, Component, DependencyResult, Lifetime, TypeInfo};
use std::marker::PhantomData;
use std::sync::Arc;

/// Bean 注册表 trait
///
/// 配置源通过此接口声明 Bean，保持对象安全以便以 `&mut dyn BeanRegistry` 传递
pub trait BeanRegistry {
    /// 注册 Bean 定义
    fn register(&mut self, definition: BeanDefinition) -> DependencyResult<()>;

    /// 检查是否已注册指定名称的定义
    fn contains_definition(&self, name: &str) -> bool;

    /// 已注册的定义数量
    fn definition_count(&self) -> usize;
}

/// Bean 注册表便捷扩展
pub trait BeanRegistryExt: BeanRegistry {
    /// 注册由工厂创建的单例 Bean
    fn register_factory<T, F>(&mut self, name: &str, factory: F) -> DependencyResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceLocator) -> DependencyResult<Arc<T>> + Send + Sync + 'static,
    {
        self.register(BeanDefinition::factory::<T, F>(name, factory).build())
    }

    /// 注册现成的实例
    fn register_instance<T>(&mut self, name: &str, instance: Arc<T>) -> DependencyResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register(BeanDefinition::instance(name, instance).build())
    }

    /// 以组件自身名称注册组件实例
    ///
    /// 组件未启用时跳过注册并返回 `false`
    fn register_component<T>(&mut self, component: T) -> DependencyResult<bool>
    where
        T: Component,
    {
        if !component.is_enabled() {
            tracing::debug!("组件未启用，跳过注册: {}", component.name());
            return Ok(false);
        }
        let name = component.name();
        self.register(BeanDefinition::instance(name, Arc::new(component)).build())?;
        Ok(true)
    }
}

impl<R: BeanRegistry + ?Sized> BeanRegistryExt for R {}

/// Bean 实例来源
#[derive(Clone)]
pub enum BeanSource {
    /// 预先创建的共享实例
    Instance(BeanInstance),
    /// 由工厂按需创建
    Factory(BeanFactoryFn),
}

/// 具名 Bean 定义
///
/// 由名称、声明类型和实例来源组成，注册后不可变
#[derive(Clone)]
pub struct BeanDefinition {
    name: String,
    type_info: TypeInfo,
    lifetime: Lifetime,
    lazy: bool,
    description: Option<String>,
    source: BeanSource,
    exposed: Vec<(TypeInfo, BeanCastFn)>,
}

impl std::fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("name", &self.name)
            .field("type_info", &self.type_info)
            .field("lifetime", &self.lifetime)
            .field("lazy", &self.lazy)
            .field(
                "exposed",
                &self.exposed.iter().map(|(info, _)| info.name).collect::<Vec<_>>(),
            )
            .field("source", &"<source>")
            .finish()
    }
}

impl BeanDefinition {
    /// 以工厂创建定义构建器
    pub fn factory<T, F>(name: impl Into<String>, factory: F) -> BeanDefinitionBuilder<T>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceLocator) -> DependencyResult<Arc<T>> + Send + Sync + 'static,
    {
        BeanDefinitionBuilder::new(name.into(), BeanSource::Factory(typed_factory(factory)))
    }

    /// 以现成实例创建定义构建器，实例总是共享的
    pub fn instance<T>(name: impl Into<String>, instance: Arc<T>) -> BeanDefinitionBuilder<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        BeanDefinitionBuilder::new(name.into(), BeanSource::Instance(erase(instance)))
    }

    /// Bean 名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 声明类型
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 是否延迟初始化
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// 是否需要在容器启动时创建
    pub fn is_eager_singleton(&self) -> bool {
        self.lifetime.is_singleton()
            && !self.lazy
            && matches!(self.source, BeanSource::Factory(_))
    }

    /// 创建（或取得）声明类型的实例
    pub fn create(&self, locator: &dyn ServiceLocator) -> DependencyResult<BeanInstance> {
        match &self.source {
            BeanSource::Instance(instance) => Ok(instance.clone()),
            BeanSource::Factory(factory) => factory(locator),
        }
    }

    /// 检查是否能以 `requested` 类型提供
    pub fn provides(&self, requested: &TypeInfo) -> bool {
        self.type_info.id == requested.id
            || self.exposed.iter().any(|(info, _)| info.id == requested.id)
    }

    /// 把声明类型的实例转换为 `requested` 类型
    pub fn view(&self, instance: &BeanInstance, requested: &TypeInfo) -> Option<BeanInstance> {
        if self.type_info.id == requested.id {
            return Some(instance.clone());
        }
        self.exposed
            .iter()
            .find(|(info, _)| info.id == requested.id)
            .and_then(|(_, cast)| cast(instance))
    }

    /// 生成元数据
    pub fn metadata(&self) -> BeanMetadata {
        let mut metadata =
            BeanMetadata::new(self.name.clone(), &self.type_info).with_lifetime(self.lifetime);
        if let Some(description) = &self.description {
            metadata = metadata.with_description(description.clone());
        }
        metadata.lazy = self.lazy;
        metadata.exposed_as = self
            .exposed
            .iter()
            .map(|(info, _)| info.name.to_string())
            .collect();
        metadata
    }
}

/// Bean 定义构建器
///
/// 携带声明类型 `T`，使 [`expose_as`](Self::expose_as) 在编译期检查转换函数
pub struct BeanDefinitionBuilder<T: ?Sized> {
    definition: BeanDefinition,
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T> BeanDefinitionBuilder<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    fn new(name: String, source: BeanSource) -> Self {
        Self {
            definition: BeanDefinition {
                name,
                type_info: TypeInfo::of::<T>(),
                lifetime: Lifetime::Singleton,
                lazy: false,
                description: None,
                source,
                exposed: Vec::new(),
            },
            _marker: PhantomData,
        }
    }

    /// 设置生命周期，对预先创建的实例无效
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        if matches!(self.definition.source, BeanSource::Factory(_)) {
            self.definition.lifetime = lifetime;
        }
        self
    }

    /// 设置是否延迟初始化
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.definition.lazy = lazy;
        self
    }

    /// 设置描述
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.definition.description = Some(description.into());
        self
    }

    /// 额外以类型 `U` 暴露此 Bean
    pub fn expose_as<U, F>(mut self, cast: F) -> Self
    where
        U: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<T>) -> Arc<U> + Send + Sync + 'static,
    {
        let info = TypeInfo::of::<U>();
        if !self.definition.provides(&info) {
            self.definition.exposed.push((info, typed_cast::<T, U, F>(cast)));
        }
        self
    }

    /// 完成构建
    pub fn build(self) -> BeanDefinition {
        self.definition
    }
}

impl<T> From<BeanDefinitionBuilder<T>> for BeanDefinition
where
    T: ?Sized + Send + Sync + 'static,
{
    fn from(builder: BeanDefinitionBuilder<T>) -> Self {
        builder.build()
    }
}
