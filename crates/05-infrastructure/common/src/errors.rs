//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("Bean 未注册: {name}")]
    BeanNotFound { name: String },

    #[error("Bean 类型不匹配: {name}, 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Bean 创建失败: {name}, 原因: {source}")]
    BeanCreationFailed {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("依赖解析深度超过上限 {max_depth}: {dependency_chain}")]
    ResolutionDepthExceeded {
        max_depth: usize,
        dependency_chain: String,
    },

    #[error("Bean 名称重复: {name}")]
    DuplicateBeanName { name: String },

    #[error("Bean 注册失败: {name}, 原因: {message}")]
    RegistrationError { name: String, message: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::BeanNotFound { name: name.into() }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 将任意错误包装为 Bean 创建失败
    pub fn creation_failed(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::BeanCreationFailed {
            name: name.into(),
            source: source.into(),
        }
    }

    /// 是否为查找类错误（未注册或类型不匹配）
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::BeanNotFound { .. } | Self::TypeMismatch { .. })
    }
}

/// 验证错误类型
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("字段值超出范围: {field_name}, 值: {value}, 范围: {range}")]
    ValueOutOfRange {
        field_name: String,
        value: String,
        range: String,
    },
}

impl ValidationError {
    /// 创建值超出范围错误
    pub fn value_out_of_range(
        field_name: impl Into<String>,
        value: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self::ValueOutOfRange {
            field_name: field_name.into(),
            value: value.into(),
            range: range.into(),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("验证错误: {source}")]
    ValidationError {
        #[from]
        source: ValidationError,
    },

    #[error("容器启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
