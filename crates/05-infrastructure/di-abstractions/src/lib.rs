//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义 Bean 注册和按名称查找的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceLocator`] - 按名称 + 类型查找 Bean
//! - [`BeanRegistry`] - Bean 注册表接口
//! - [`BeanDefinition`] - 具名 Bean 定义
//! - [`ConfigurationSource`] - 配置源，向注册表声明 Bean

pub mod container;
pub mod factory;
pub mod locator;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use locator::*;
pub use registry::*;
pub use resolver::*;
