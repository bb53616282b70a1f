//! 解析上下文
//!
//! 记录一次查找过程中的 Bean 解析链，用于检测循环依赖

use infrastructure_common::{DependencyError, DependencyResult};

/// 解析上下文
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    pub resolution_chain: Vec<String>,
    /// 解析选项
    pub options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 添加 Bean 到解析链
    pub fn push(&mut self, name: &str) -> DependencyResult<()> {
        if self.resolution_chain.iter().any(|entry| entry == name) {
            return Err(DependencyError::CircularDependency {
                dependency_chain: self.chain_with(name),
            });
        }
        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(DependencyError::ResolutionDepthExceeded {
                max_depth: self.options.max_depth,
                dependency_chain: self.chain_with(name),
            });
        }
        self.resolution_chain.push(name.to_string());
        Ok(())
    }

    /// 从解析链中移除最后一个 Bean
    pub fn pop(&mut self) {
        self.resolution_chain.pop();
    }

    fn chain_with(&self, name: &str) -> String {
        self.resolution_chain
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// 解析选项
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}
