//! Bean 工厂与类型擦除
//!
//! 容器内部统一以 [`BeanInstance`] 保存实例，其中总是包裹一个 `Arc<T>`，
//! `T` 可以是具体类型，也可以是 `dyn Trait`。

use crate::locator::ServiceLocator;
use infrastructure_common::DependencyResult;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的 Bean 实例
pub type BeanInstance = Arc<dyn Any + Send + Sync>;

/// Bean 工厂函数类型
///
/// 工厂可以通过传入的定位器解析自身依赖
pub type BeanFactoryFn =
    Arc<dyn Fn(&dyn ServiceLocator) -> DependencyResult<BeanInstance> + Send + Sync>;

/// 类型转换函数类型，把声明类型的实例转换为另一种暴露类型
pub type BeanCastFn = Arc<dyn Fn(&BeanInstance) -> Option<BeanInstance> + Send + Sync>;

/// 擦除实例类型
pub fn erase<T>(instance: Arc<T>) -> BeanInstance
where
    T: ?Sized + Send + Sync + 'static,
{
    Arc::new(instance)
}

/// 还原实例类型，类型不符时返回 `None`
pub fn unerase<T>(instance: &BeanInstance) -> Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance.downcast_ref::<Arc<T>>().cloned()
}

/// 包装强类型工厂
pub fn typed_factory<T, F>(factory: F) -> BeanFactoryFn
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(&dyn ServiceLocator) -> DependencyResult<Arc<T>> + Send + Sync + 'static,
{
    Arc::new(move |locator: &dyn ServiceLocator| factory(locator).map(erase::<T>))
}

/// 包装强类型转换
pub fn typed_cast<T, U, F>(cast: F) -> BeanCastFn
where
    T: ?Sized + Send + Sync + 'static,
    U: ?Sized + Send + Sync + 'static,
    F: Fn(Arc<T>) -> Arc<U> + Send + Sync + 'static,
{
    Arc::new(move |instance: &BeanInstance| {
        unerase::<T>(instance).map(|typed| erase::<U>(cast(typed)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Shape: Send + Sync {
        fn sides(&self) -> u32;
    }

    struct Square;

    impl Shape for Square {
        fn sides(&self) -> u32 {
            4
        }
    }

    #[test]
    fn erased_trait_object_round_trips() {
        let shape: Arc<dyn Shape> = Arc::new(Square);
        let erased = erase(shape);
        assert_eq!(unerase::<dyn Shape>(&erased).unwrap().sides(), 4);
        assert!(unerase::<Square>(&erased).is_none());
    }

    #[test]
    fn cast_exposes_concrete_type_as_trait_object() {
        let cast = typed_cast::<Square, dyn Shape, _>(|square| square as Arc<dyn Shape>);
        let erased = erase(Arc::new(Square));
        let exposed = cast(&erased).unwrap();
        assert_eq!(unerase::<dyn Shape>(&exposed).unwrap().sides(), 4);

        let unrelated = erase(Arc::new(7_u8));
        assert!(cast(&unrelated).is_none());
    }
}
