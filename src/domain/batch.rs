// ==========================================
// 疫苗接种运动 - 疫苗批次领域模型
// ==========================================
// 职责: 批次值记录（疫苗描述 + 批次号 + 剩余剂量）
// 红线: quantity 不为负；quantity == 0 的批次保留在列表中
// ==========================================

use crate::domain::error::DomainResult;
use crate::domain::vaccine::Vaccine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineBatch {
    pub vaccine: Vaccine, // 疫苗描述（独立持有）
    pub lot_id: i32,      // 物理批次号
    pub quantity: u32,    // 剩余可用剂量
}

impl VaccineBatch {
    /// 构造批次，深拷贝疫苗描述
    pub fn new(lot_id: i32, vaccine: &Vaccine, quantity: u32) -> DomainResult<Self> {
        Ok(Self {
            vaccine: vaccine.duplicate()?,
            lot_id,
            quantity,
        })
    }

    pub fn duplicate(&self) -> DomainResult<Self> {
        Self::new(self.lot_id, &self.vaccine, self.quantity)
    }

    /// 先释放自身，再按 src 重新初始化
    ///
    /// 失败时 self 处于已释放状态
    pub fn copy_from(&mut self, src: &VaccineBatch) -> DomainResult<()> {
        self.release();
        *self = src.duplicate()?;
        Ok(())
    }

    /// 批次相等: 仅比较批次号
    pub fn equals(&self, other: &VaccineBatch) -> bool {
        self.lot_id == other.lot_id
    }

    pub fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }

    /// 释放疫苗描述（幂等）
    pub fn release(&mut self) {
        self.vaccine.name = String::new();
        self.lot_id = 0;
        self.quantity = 0;
    }

    /// 扣减一剂，已耗尽时返回 false
    pub(crate) fn take_dose(&mut self) -> bool {
        match self.quantity.checked_sub(1) {
            Some(rest) => {
                self.quantity = rest;
                true
            }
            None => false,
        }
    }
}
