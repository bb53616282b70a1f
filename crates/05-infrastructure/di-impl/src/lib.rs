//! # 依赖注入具体实现
//!
//! 提供应用上下文 [`ApplicationContext`]：从一个或多个配置源构建，
//! 按名称 + 类型查找 Bean，缓存单例并检测循环依赖。

use di_abstractions::{
    BeanDefinition, BeanInstance, BeanRegistry, ConfigurationSource, ContainerConfig,
    ContainerStats, ResolveContext, ServiceLocator,
};
use infrastructure_common::{
    BeanMetadata, DependencyError, DependencyResult, InfrastructureError, InfrastructureResult,
    TypeInfo,
};
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, ReentrantMutex};
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// 已注册的 Bean 及其单例缓存
struct BeanEntry {
    definition: BeanDefinition,
    singleton: OnceCell<BeanInstance>,
}

impl BeanEntry {
    fn new(definition: BeanDefinition) -> Self {
        Self {
            definition,
            singleton: OnceCell::new(),
        }
    }
}

/// 注册阶段使用的定义表
struct DefinitionRegistry {
    entries: BTreeMap<String, BeanEntry>,
    allow_overriding: bool,
}

impl DefinitionRegistry {
    fn new(allow_overriding: bool) -> Self {
        Self {
            entries: BTreeMap::new(),
            allow_overriding,
        }
    }
}

impl BeanRegistry for DefinitionRegistry {
    fn register(&mut self, definition: BeanDefinition) -> DependencyResult<()> {
        let name = definition.name().to_string();
        if name.is_empty() {
            return Err(DependencyError::RegistrationError {
                name,
                message: "Bean 名称不能为空".to_string(),
            });
        }
        if self.entries.contains_key(&name) {
            if !self.allow_overriding {
                return Err(DependencyError::DuplicateBeanName { name });
            }
            warn!("覆盖 Bean 定义: {}", name);
        }

        debug!(
            "注册 Bean: {} ({}, {})",
            name,
            definition.type_info(),
            definition.lifetime()
        );
        self.entries.insert(name, BeanEntry::new(definition));
        Ok(())
    }

    fn contains_definition(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn definition_count(&self) -> usize {
        self.entries.len()
    }
}

/// 应用上下文
///
/// 构建完成后 Bean 定义不可变；单例在首次查找（或启动预创建）时创建并缓存。
/// 单例创建持有上下文级的可重入锁，同一时刻只有一个线程在创建单例。
pub struct ApplicationContext {
    entries: BTreeMap<String, BeanEntry>,
    config: ContainerConfig,
    source_names: Vec<String>,
    stats: Mutex<ContainerStats>,
    creation_lock: ReentrantMutex<()>,
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("beans", &self.entries.keys().collect::<Vec<_>>())
            .field("sources", &self.source_names)
            .field("config", &self.config)
            .finish()
    }
}

impl ApplicationContext {
    /// 从单个配置源创建上下文
    pub fn new<S>(source: S) -> InfrastructureResult<Self>
    where
        S: ConfigurationSource + 'static,
    {
        Self::builder().add_source(source).build()
    }

    /// 创建构建器
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::new()
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 已应用的配置源名称
    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }

    /// 获取指定 Bean 的元数据
    pub fn bean_metadata(&self, name: &str) -> Option<BeanMetadata> {
        self.entries.get(name).map(|entry| entry.definition.metadata())
    }

    /// 获取所有 Bean 的元数据（按名称排序）
    pub fn all_metadata(&self) -> Vec<BeanMetadata> {
        self.entries
            .values()
            .map(|entry| entry.definition.metadata())
            .collect()
    }

    /// 获取统计信息
    pub fn stats(&self) -> ContainerStats {
        let mut stats = self.stats.lock().clone();
        stats.registered_beans = self.entries.len();
        stats
    }

    fn new_resolve_context(&self) -> RefCell<ResolveContext> {
        RefCell::new(ResolveContext::new(self.config.resolve_options()))
    }

    /// 启动时创建所有非延迟单例
    fn preinstantiate_singletons(&self) -> DependencyResult<()> {
        for (name, entry) in &self.entries {
            if entry.definition.is_eager_singleton() {
                debug!("预创建单例: {}", name);
                self.instance_of(entry, &self.new_resolve_context())?;
            }
        }
        Ok(())
    }

    fn resolve_in(
        &self,
        name: &str,
        requested: &TypeInfo,
        resolve: &RefCell<ResolveContext>,
    ) -> DependencyResult<BeanInstance> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| DependencyError::not_found(name))?;
        let definition = &entry.definition;

        if !definition.provides(requested) {
            return Err(DependencyError::type_mismatch(
                name,
                requested.name,
                definition.type_info().name,
            ));
        }

        let instance = self.instance_of(entry, resolve)?;
        definition.view(&instance, requested).ok_or_else(|| {
            DependencyError::type_mismatch(name, requested.name, definition.type_info().name)
        })
    }

    fn instance_of(
        &self,
        entry: &BeanEntry,
        resolve: &RefCell<ResolveContext>,
    ) -> DependencyResult<BeanInstance> {
        if !entry.definition.lifetime().is_singleton() {
            return self.create(&entry.definition, resolve);
        }
        if let Some(instance) = entry.singleton.get() {
            return Ok(instance.clone());
        }

        let _creation = self.creation_lock.lock();
        if let Some(instance) = entry.singleton.get() {
            return Ok(instance.clone());
        }

        // 先入解析链再进入 OnceCell，循环依赖在重入初始化之前即被拒绝
        resolve.borrow_mut().push(entry.definition.name())?;
        let created = entry.singleton.get_or_try_init(|| {
            let instance = self.create_unchecked(&entry.definition, resolve)?;
            self.stats.lock().singletons_created += 1;
            Ok::<_, DependencyError>(instance)
        });
        resolve.borrow_mut().pop();
        created.cloned()
    }

    fn create(
        &self,
        definition: &BeanDefinition,
        resolve: &RefCell<ResolveContext>,
    ) -> DependencyResult<BeanInstance> {
        resolve.borrow_mut().push(definition.name())?;
        let result = self.create_unchecked(definition, resolve);
        resolve.borrow_mut().pop();
        result
    }

    fn create_unchecked(
        &self,
        definition: &BeanDefinition,
        resolve: &RefCell<ResolveContext>,
    ) -> DependencyResult<BeanInstance> {
        let lookup = DependencyLookup {
            context: self,
            resolve,
        };
        definition.create(&lookup).map_err(|err| {
            if err.is_lookup_error() {
                DependencyError::creation_failed(definition.name(), err)
            } else {
                err
            }
        })
    }

    fn record(
        &self,
        name: &str,
        result: DependencyResult<BeanInstance>,
    ) -> DependencyResult<BeanInstance> {
        let mut stats = self.stats.lock();
        stats.lookups += 1;
        if let Err(err) = &result {
            stats.lookup_failures += 1;
            warn!("查找 Bean 失败: {}: {}", name, err);
        }
        result
    }
}

impl ServiceLocator for ApplicationContext {
    fn resolve(&self, name: &str, requested: &TypeInfo) -> DependencyResult<BeanInstance> {
        let result = self.resolve_in(name, requested, &self.new_resolve_context());
        self.record(name, result)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn bean_type(&self, name: &str) -> Option<TypeInfo> {
        self.entries
            .get(name)
            .map(|entry| entry.definition.type_info().clone())
    }

    fn is_type_match(&self, name: &str, requested: &TypeInfo) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.definition.provides(requested))
    }
}

/// 工厂内部使用的定位器，共享当前查找的解析链
struct DependencyLookup<'a> {
    context: &'a ApplicationContext,
    resolve: &'a RefCell<ResolveContext>,
}

impl ServiceLocator for DependencyLookup<'_> {
    fn resolve(&self, name: &str, requested: &TypeInfo) -> DependencyResult<BeanInstance> {
        self.context.resolve_in(name, requested, self.resolve)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.context.contains_bean(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.context.bean_names()
    }

    fn bean_type(&self, name: &str) -> Option<TypeInfo> {
        self.context.bean_type(name)
    }

    fn is_type_match(&self, name: &str, requested: &TypeInfo) -> bool {
        self.context.is_type_match(name, requested)
    }
}

/// 应用上下文构建器
#[derive(Default)]
pub struct ApplicationContextBuilder {
    config: ContainerConfig,
    sources: Vec<Box<dyn ConfigurationSource>>,
}

impl ApplicationContextBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 添加配置源，按添加顺序应用
    pub fn add_source<S>(mut self, source: S) -> Self
    where
        S: ConfigurationSource + 'static,
    {
        self.sources.push(Box::new(source));
        self
    }

    /// 构建应用上下文
    pub fn build(self) -> InfrastructureResult<ApplicationContext> {
        self.config.validate()?;
        if self.sources.is_empty() {
            return Err(InfrastructureError::BootstrapFailed {
                message: "未提供任何配置源".to_string(),
            });
        }

        let mut registry = DefinitionRegistry::new(self.config.allow_bean_overriding);
        let mut source_names = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            info!("应用配置源: {}", source.name());
            if let Err(err) = source.configure(&mut registry) {
                error!("配置源 {} 注册失败: {}", source.name(), err);
                return Err(err.into());
            }
            source_names.push(source.name().to_string());
        }

        let context = ApplicationContext {
            entries: registry.entries,
            config: self.config,
            source_names,
            stats: Mutex::new(ContainerStats::default()),
            creation_lock: ReentrantMutex::new(()),
        };

        if !context.config.lazy_init {
            if let Err(err) = context.preinstantiate_singletons() {
                error!("预创建单例失败: {}", err);
                return Err(err.into());
            }
        }

        info!("应用上下文构建完成，注册了 {} 个 Bean", context.entries.len());
        Ok(context)
    }
}
