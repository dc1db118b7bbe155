// ==========================================
// 疫苗接种运动 - 疫苗描述与疫苗目录
// ==========================================
// 职责: 疫苗描述符(名称 + 技术)、按名称查找的静态目录
// ==========================================

use crate::domain::error::{owned_copy, DomainResult};
use crate::domain::types::{
    KnownVaccine, VaccineTechnology, ASTRAZENECA_VAC, JANSSEN_VAC, MODERNA_VAC, PFIZER_VAC,
};
use serde::{Deserialize, Serialize};

// ==========================================
// Vaccine - 疫苗描述符
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    pub name: String,                  // 疫苗名称（目录内唯一）
    pub technology: VaccineTechnology, // 疫苗技术
}

impl Vaccine {
    pub fn new(name: &str, technology: VaccineTechnology) -> DomainResult<Self> {
        Ok(Self {
            name: owned_copy(name)?,
            technology,
        })
    }

    /// 深拷贝（字符串存储分配失败时返回错误）
    pub fn duplicate(&self) -> DomainResult<Self> {
        Self::new(&self.name, self.technology)
    }

    /// 规则层识别结果
    pub fn known(&self) -> KnownVaccine {
        KnownVaccine::from_name(&self.name)
    }

    pub fn is_single_dose(&self) -> bool {
        self.known().is_single_dose()
    }
}

// ==========================================
// VaccineCatalog - 疫苗目录
// ==========================================
// 用途: 按技术统计时由疫苗名称反查技术
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineCatalog {
    vaccines: Vec<Vaccine>,
}

impl VaccineCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标准目录: PFIZER / MODERNA / ASTRAZENECA / JANSSEN
    pub fn standard() -> Self {
        let vaccines = vec![
            Vaccine {
                name: PFIZER_VAC.to_string(),
                technology: VaccineTechnology::MessengerRna,
            },
            Vaccine {
                name: MODERNA_VAC.to_string(),
                technology: VaccineTechnology::MessengerRna,
            },
            Vaccine {
                name: ASTRAZENECA_VAC.to_string(),
                technology: VaccineTechnology::ViralVector,
            },
            Vaccine {
                name: JANSSEN_VAC.to_string(),
                technology: VaccineTechnology::ViralVector,
            },
        ];
        Self { vaccines }
    }

    /// 登记疫苗,同名疫苗覆盖原有技术
    pub fn add(&mut self, vaccine: Vaccine) {
        match self.vaccines.iter_mut().find(|v| v.name == vaccine.name) {
            Some(existing) => existing.technology = vaccine.technology,
            None => self.vaccines.push(vaccine),
        }
    }

    /// 按名称查找疫苗（精确匹配）
    pub fn find_by_name(&self, name: &str) -> Option<&Vaccine> {
        self.vaccines.iter().find(|v| v.name == name)
    }

    pub fn len(&self) -> usize {
        self.vaccines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaccines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vaccine> {
        self.vaccines.iter()
    }
}
