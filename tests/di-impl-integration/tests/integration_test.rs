//! 多配置源组合的集中集成测试

use di_abstractions::{ContainerConfig, ServiceLocator, ServiceLocatorExt};
use di_impl::ApplicationContext;
use di_impl_integration_tests::{
    Inventory, InventorySource, OrderNumber, Shop, ShopSource, INVENTORY, ORDER_NUMBER, SHOP,
};
use infrastructure_common::{DependencyError, InfrastructureError, Lifetime};

fn shop_context() -> ApplicationContext {
    ApplicationContext::builder()
        .add_source(InventorySource)
        .add_source(ShopSource)
        .build()
        .unwrap()
}

/// 通过对象安全的定位器查找，模拟只拿到 `&dyn ServiceLocator` 的调用方
fn stock_through_locator(locator: &dyn ServiceLocator, item: &str) -> anyhow::Result<u32> {
    let inventory = locator.get_bean::<dyn Inventory>(INVENTORY)?;
    Ok(inventory.stock(item))
}

#[test]
fn test_beans_resolve_across_sources() {
    let context = shop_context();
    let shop = context.get_bean::<Shop>(SHOP).unwrap();
    assert!(shop.can_sell("racket"));
    assert!(!shop.can_sell("ball"));
    assert_eq!(context.source_names(), ["InventorySource", "ShopSource"]);
}

#[test]
fn test_source_order_does_not_matter_for_lookup() {
    let context = ApplicationContext::builder()
        .add_source(ShopSource)
        .add_source(InventorySource)
        .build()
        .unwrap();
    assert!(context.get_bean::<Shop>(SHOP).unwrap().can_sell("racket"));
}

#[test]
fn test_missing_source_fails_at_startup() {
    let err = ApplicationContext::new(ShopSource).unwrap_err();
    assert!(matches!(
        err,
        InfrastructureError::DependencyError {
            source: DependencyError::BeanCreationFailed { .. }
        }
    ));
}

#[test]
fn test_missing_source_surfaces_on_lookup_when_lazy() {
    let context = ApplicationContext::builder()
        .with_config(ContainerConfig {
            lazy_init: true,
            ..ContainerConfig::default()
        })
        .add_source(ShopSource)
        .build()
        .unwrap();

    let err = context.get_bean::<Shop>(SHOP).err().unwrap();
    assert!(matches!(err, DependencyError::BeanCreationFailed { ref name, .. } if name == SHOP));
    assert_eq!(context.stats().lookup_failures, 1);
}

#[test]
fn test_dyn_locator_lookup() {
    let context = shop_context();
    assert_eq!(stock_through_locator(&context, "racket").unwrap(), 3);

    let lazy_shop_only = ApplicationContext::builder()
        .with_config(ContainerConfig {
            lazy_init: true,
            ..ContainerConfig::default()
        })
        .add_source(ShopSource)
        .build()
        .unwrap();
    let err = stock_through_locator(&lazy_shop_only, "racket").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DependencyError>(),
        Some(DependencyError::BeanNotFound { name }) if name == INVENTORY
    ));
}

#[test]
fn test_transient_beans_differ_per_lookup() {
    let context = shop_context();
    let first = context.get_bean::<OrderNumber>(ORDER_NUMBER).unwrap();
    let second = context.get_bean::<OrderNumber>(ORDER_NUMBER).unwrap();
    assert_ne!(first, second);
    assert_eq!(second.0, first.0 + 1);
}

#[test]
fn test_metadata_dump_is_serializable() {
    let context = shop_context();
    let json = serde_json::to_value(context.all_metadata()).unwrap();
    let beans = json.as_array().unwrap();
    assert_eq!(beans.len(), 3);

    let order = beans
        .iter()
        .find(|bean| bean["name"] == ORDER_NUMBER)
        .unwrap();
    assert_eq!(order["lifetime"], "transient");
    assert_eq!(
        context.bean_metadata(ORDER_NUMBER).unwrap().lifetime,
        Lifetime::Transient
    );
}
