// ==========================================
// 疫苗接种运动 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::collections::TryReserveError;
use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 患者已分配另一种疫苗
    #[error("疫苗不一致: 已分配={assigned}, 请求={requested}")]
    InvalidVaccine { assigned: String, requested: String },

    /// 字符串存储分配失败
    #[error("内存分配失败: {0}")]
    Memory(#[from] TryReserveError),
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

/// 复制一份独立持有的字符串
///
/// 通过 try_reserve_exact 申请存储,分配失败以 `DomainError::Memory` 返回而非中止进程
pub(crate) fn owned_copy(src: &str) -> DomainResult<String> {
    let mut dst = String::new();
    dst.try_reserve_exact(src.len())?;
    dst.push_str(src);
    Ok(dst)
}
