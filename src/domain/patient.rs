// ==========================================
// 疫苗接种运动 - 患者领域模型
// ==========================================
// 职责: 患者值记录、接种状态判定、单患者接种
// 红线: vaccine 为空时 number_doses == 0 且 lot_id == 0
// ==========================================

use crate::domain::error::{owned_copy, DomainError, DomainResult};
use crate::domain::types::{KnownVaccine, PatientGroup};
use crate::domain::vaccine::Vaccine;
use serde::{Deserialize, Serialize};

// ==========================================
// Patient - 患者
// ==========================================
// 相等性: 只比较 name + id（见 compare）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,            // 患者姓名（非空）
    pub id: i32,                 // 患者编号（>0，队列内唯一）
    pub vaccine: Option<String>, // 首次分配的疫苗名称
    pub lot_id: i32,             // 首剂批次号（仅在 vaccine 有值时有意义）
    pub number_doses: u32,       // 已接种剂次
    pub group: PatientGroup,     // 风险人群
}

impl Patient {
    /// 构造患者记录
    ///
    /// # 参数
    /// - name: 患者姓名（深拷贝），不能为空（前置条件）
    /// - id: 患者编号，必须为正数（前置条件）
    /// - vaccine: 已分配疫苗（深拷贝，可空）
    /// - lot_id: 批次号，vaccine 为空时忽略并置 0
    /// - number_doses: 已接种剂次
    /// - group: 风险人群
    ///
    /// # 返回
    /// - Err(DomainError::Memory): 字符串存储分配失败
    pub fn new(
        name: &str,
        id: i32,
        vaccine: Option<&str>,
        lot_id: i32,
        number_doses: u32,
        group: PatientGroup,
    ) -> DomainResult<Self> {
        assert!(id > 0, "patient id must be positive, got {}", id);
        assert!(!name.is_empty(), "patient name must not be empty");

        let name = owned_copy(name)?;
        let (vaccine, lot_id) = match vaccine {
            Some(v) => (Some(owned_copy(v)?), lot_id),
            None => (None, 0),
        };

        Ok(Self {
            name,
            id,
            vaccine,
            lot_id,
            number_doses,
            group,
        })
    }

    /// 深拷贝患者记录
    pub fn duplicate(&self) -> DomainResult<Self> {
        Self::new(
            &self.name,
            self.id,
            self.vaccine.as_deref(),
            self.lot_id,
            self.number_doses,
            self.group,
        )
    }

    /// 为患者接种一剂指定疫苗
    ///
    /// # 规则
    /// - 已分配其他疫苗 → InvalidVaccine，不做任何修改
    /// - 已分配同一疫苗 → 剂次 +1
    /// - 尚未分配 → 记录疫苗与批次，剂次置 1
    ///
    /// 分配失败时患者保持原状
    pub fn inoculate(&mut self, vaccine_name: &str, lot_id: i32) -> DomainResult<()> {
        match self.vaccine.as_deref() {
            Some(assigned) if assigned != vaccine_name => Err(DomainError::InvalidVaccine {
                assigned: assigned.to_string(),
                requested: vaccine_name.to_string(),
            }),
            Some(_) => {
                self.number_doses += 1;
                Ok(())
            }
            None => {
                self.vaccine = Some(owned_copy(vaccine_name)?);
                self.number_doses = 1;
                self.lot_id = lot_id;
                Ok(())
            }
        }
    }

    /// 疫苗是否适用于该患者
    pub fn is_suitable_for(&self, vaccine: &Vaccine) -> bool {
        vaccine.known().is_suitable_for(self.group)
    }

    /// 是否已完成接种
    ///
    /// 两剂及以上，或已接种一剂单剂疫苗
    pub fn is_vaccinated(&self) -> bool {
        if self.number_doses > 1 {
            return true;
        }
        self.number_doses > 0 && self.has_single_dose_vaccine()
    }

    /// 已分配疫苗是否为单剂疫苗
    pub fn has_single_dose_vaccine(&self) -> bool {
        self.vaccine
            .as_deref()
            .map(|name| KnownVaccine::from_name(name).is_single_dose())
            .unwrap_or(false)
    }

    /// 结构相等: 仅比较姓名与编号
    pub fn compare(&self, other: &Patient) -> bool {
        self.name == other.name && self.id == other.id
    }

    /// 释放持有的字符串存储（幂等）
    pub fn release(&mut self) {
        self.name = String::new();
        self.vaccine = None;
        self.id = 0;
    }
}
