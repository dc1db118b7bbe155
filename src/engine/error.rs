// ==========================================
// 疫苗接种运动 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::collections::error::CollectionError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("集合操作失败: {0}")]
    Collection(#[from] CollectionError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
