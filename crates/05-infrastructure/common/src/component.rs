//! 组件基础接口定义
//!
//! 提供可直接注册到容器中的组件必须实现的基础 trait

use std::fmt::Debug;

/// 组件基础 trait
///
/// 实现此 trait 的类型可以通过组件自身的名称注册到容器中
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件名称，即注册到容器中的 Bean 名称
    fn name(&self) -> &'static str;

    /// 组件是否启用，未启用的组件不会被注册
    fn is_enabled(&self) -> bool {
        true
    }
}
