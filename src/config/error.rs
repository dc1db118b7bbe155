// ==========================================
// 疫苗接种运动 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::collections::error::CollectionError;
use crate::domain::error::DomainError;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 读取错误 =====
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 内容错误 =====
    #[error("配置校验失败: {0}")]
    Validation(String),

    #[error("未知疫苗: {0}")]
    UnknownVaccine(String),

    // ===== 构建错误 =====
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
