//! Bean 生命周期

use serde::{Deserialize, Serialize};

/// Bean 生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// 单例模式 - 容器生命周期内只创建一个实例
    #[default]
    Singleton,
    /// 瞬时模式 - 每次查找都创建新实例
    Transient,
}

impl Lifetime {
    /// 是否缓存实例
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singleton => write!(f, "singleton"),
            Self::Transient => write!(f, "transient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifetime_is_singleton() {
        assert_eq!(Lifetime::default(), Lifetime::Singleton);
        assert!(Lifetime::Singleton.is_singleton());
        assert!(!Lifetime::Transient.is_singleton());
    }

    #[test]
    fn lifetime_uses_snake_case_names() {
        let parsed: Lifetime = serde_json::from_str("\"transient\"").unwrap();
        assert_eq!(parsed, Lifetime::Transient);
        assert_eq!(Lifetime::Singleton.to_string(), "singleton");
    }
}
