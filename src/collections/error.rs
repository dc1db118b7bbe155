// ==========================================
// 疫苗接种运动 - 集合层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::error::DomainError;
use thiserror::Error;

/// 集合层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("列表为空")]
    EmptyList,

    #[error("索引越界: index={index}, size={size}")]
    InvalidIndex { index: usize, size: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result 类型别名
pub type CollectionResult<T> = Result<T, CollectionError>;
