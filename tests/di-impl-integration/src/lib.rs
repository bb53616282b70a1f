//! 跨 crate 集成测试使用的夹具
//!
//! 两个相互独立的配置源：[`InventorySource`] 提供库存服务，
//! [`ShopSource`] 注册依赖库存服务的商店。

use di_abstractions::{BeanDefinition, BeanRegistry, ConfigurationSource, ServiceLocatorExt};
use infrastructure_common::{DependencyResult, Lifetime};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// 库存 Bean 名称
pub const INVENTORY: &str = "inventory";

/// 商店 Bean 名称
pub const SHOP: &str = "shop";

/// 订单号 Bean 名称
pub const ORDER_NUMBER: &str = "orderNumber";

/// 库存接口
pub trait Inventory: Send + Sync {
    /// 商品数量
    fn stock(&self, item: &str) -> u32;
}

/// 固定库存
#[derive(Debug)]
pub struct FixedInventory;

impl Inventory for FixedInventory {
    fn stock(&self, item: &str) -> u32 {
        match item {
            "racket" => 3,
            _ => 0,
        }
    }
}

/// 商店
pub struct Shop {
    inventory: Arc<dyn Inventory>,
}

impl Shop {
    /// 商品是否可售
    pub fn can_sell(&self, item: &str) -> bool {
        self.inventory.stock(item) > 0
    }
}

/// 订单号，每次查找都生成新的值
#[derive(Debug, PartialEq, Eq)]
pub struct OrderNumber(pub u32);

/// 库存配置源
#[derive(Debug, Default)]
pub struct InventorySource;

impl ConfigurationSource for InventorySource {
    fn name(&self) -> &str {
        "InventorySource"
    }

    fn configure(&self, registry: &mut dyn BeanRegistry) -> DependencyResult<()> {
        registry.register(
            BeanDefinition::instance::<dyn Inventory>(INVENTORY, Arc::new(FixedInventory)).build(),
        )
    }
}

/// 商店配置源，依赖 [`InventorySource`] 提供的库存
#[derive(Debug, Default)]
pub struct ShopSource;

impl ConfigurationSource for ShopSource {
    fn name(&self) -> &str {
        "ShopSource"
    }

    fn configure(&self, registry: &mut dyn BeanRegistry) -> DependencyResult<()> {
        registry.register(
            BeanDefinition::factory::<Shop, _>(SHOP, |locator| {
                let inventory = locator.get_bean::<dyn Inventory>(INVENTORY)?;
                Ok(Arc::new(Shop { inventory }))
            })
            .build(),
        )?;

        let sequence = Arc::new(AtomicU32::new(1));
        registry.register(
            BeanDefinition::factory::<OrderNumber, _>(ORDER_NUMBER, move |_| {
                Ok(Arc::new(OrderNumber(sequence.fetch_add(1, Ordering::SeqCst))))
            })
            .lifetime(Lifetime::Transient)
            .build(),
        )
    }
}
