//! # Infrastructure Common
//!
//! 基础设施层的公共 traits、元数据与错误类型。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`TypeInfo`] / [`BeanMetadata`] - 类型与 Bean 元数据
//! - [`Lifetime`] - Bean 生命周期
//! - [`DependencyError`] / [`InfrastructureError`] - 错误类型
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的类型安全查找
//! - 显式注册优于注解扫描

pub mod component;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
