//! 元数据定义
//!
//! 提供类型和 Bean 的元数据信息

use crate::lifecycle::Lifetime;
use serde::Serialize;
use std::any::TypeId;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 完整类型名称
    pub name: &'static str,
    /// 类型ID
    pub id: TypeId,
}

impl TypeInfo {
    /// 从类型获取类型信息，支持 `dyn Trait` 这样的非 Sized 类型
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// 是否与给定类型相同
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Bean 元数据
///
/// 用于容器自省，可序列化输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeanMetadata {
    /// Bean 名称
    pub name: String,
    /// 声明类型
    pub type_name: String,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 是否延迟初始化
    pub lazy: bool,
    /// 额外暴露的类型
    pub exposed_as: Vec<String>,
    /// 描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BeanMetadata {
    /// 创建新的 Bean 元数据
    pub fn new(name: impl Into<String>, type_info: &TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_name: type_info.name.to_string(),
            lifetime: Lifetime::default(),
            lazy: false,
            exposed_as: Vec::new(),
            description: None,
        }
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter {}
    struct English;

    #[test]
    fn type_info_supports_trait_objects() {
        let info = TypeInfo::of::<dyn Greeter>();
        assert!(info.is::<dyn Greeter>());
        assert!(!info.is::<English>());
        assert!(info.to_string().ends_with("Greeter"));
    }

    #[test]
    fn metadata_serializes_without_empty_description() {
        let meta = BeanMetadata::new("english", &TypeInfo::of::<English>())
            .with_lifetime(Lifetime::Transient);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "english");
        assert_eq!(json["lifetime"], "transient");
        assert!(json.get("description").is_none());
    }
}
