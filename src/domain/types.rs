// ==========================================
// 疫苗接种运动 - 领域类型定义
// ==========================================
// 职责: 风险人群、疫苗技术、已知疫苗三个封闭枚举
// 红线: 适用性规则、单剂判定只在此处穷举匹配,新增变体必须逐条复核
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 风险人群 (Patient Group)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatientGroup {
    NursingHomeResident, // 养老院居住者
    HealthcareWorker,    // 医护人员
    AdultOver65,         // 65 岁以上成人
    Comorbid,            // 合并基础疾病
    EssentialWorker,     // 关键岗位人员
    GeneralPopulation,   // 普通人群
}

impl PatientGroup {
    /// 配置/日志中使用的字符串标识
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientGroup::NursingHomeResident => "NURSING_HOME_RESIDENT",
            PatientGroup::HealthcareWorker => "HEALTHCARE_WORKER",
            PatientGroup::AdultOver65 => "ADULT_OVER_65",
            PatientGroup::Comorbid => "COMORBID",
            PatientGroup::EssentialWorker => "ESSENTIAL_WORKER",
            PatientGroup::GeneralPopulation => "GENERAL_POPULATION",
        }
    }
}

impl fmt::Display for PatientGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 疫苗技术 (Vaccine Technology)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaccineTechnology {
    MessengerRna,     // mRNA
    ViralVector,      // 病毒载体
    ProteinSubunit,   // 蛋白亚单位
    InactivatedVirus, // 灭活病毒
}

impl VaccineTechnology {
    pub fn as_str(&self) -> &'static str {
        match self {
            VaccineTechnology::MessengerRna => "MESSENGER_RNA",
            VaccineTechnology::ViralVector => "VIRAL_VECTOR",
            VaccineTechnology::ProteinSubunit => "PROTEIN_SUBUNIT",
            VaccineTechnology::InactivatedVirus => "INACTIVATED_VIRUS",
        }
    }

    /// 全部技术类型（报表按此顺序输出）
    pub fn all() -> [VaccineTechnology; 4] {
        [
            VaccineTechnology::MessengerRna,
            VaccineTechnology::ViralVector,
            VaccineTechnology::ProteinSubunit,
            VaccineTechnology::InactivatedVirus,
        ]
    }
}

impl fmt::Display for VaccineTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 已知疫苗 (Known Vaccine)
// ==========================================
// 用途: 按疫苗名称识别规则相关的产品,供适用性与单剂判定穷举匹配
pub const PFIZER_VAC: &str = "PFIZER";
pub const MODERNA_VAC: &str = "MODERNA";
pub const ASTRAZENECA_VAC: &str = "ASTRAZENECA";
pub const JANSSEN_VAC: &str = "JANSSEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownVaccine {
    Pfizer,
    Moderna,
    AstraZeneca,
    Janssen,
    Other, // 目录中其他疫苗,不触发任何特殊规则
}

impl KnownVaccine {
    /// 按疫苗名称识别（精确匹配）
    pub fn from_name(name: &str) -> Self {
        match name {
            PFIZER_VAC => KnownVaccine::Pfizer,
            MODERNA_VAC => KnownVaccine::Moderna,
            ASTRAZENECA_VAC => KnownVaccine::AstraZeneca,
            JANSSEN_VAC => KnownVaccine::Janssen,
            _ => KnownVaccine::Other,
        }
    }

    /// 是否单剂疫苗（一剂即完成接种）
    pub fn is_single_dose(&self) -> bool {
        match self {
            KnownVaccine::Janssen => true,
            KnownVaccine::Pfizer
            | KnownVaccine::Moderna
            | KnownVaccine::AstraZeneca
            | KnownVaccine::Other => false,
        }
    }

    /// 该疫苗是否可用于指定人群
    ///
    /// # 规则
    /// - AstraZeneca 不用于 65 岁以上及合并基础疾病人群
    /// - 其余组合均可（单剂疫苗同样可作为首剂）
    pub fn is_suitable_for(&self, group: PatientGroup) -> bool {
        match self {
            KnownVaccine::AstraZeneca => !matches!(
                group,
                PatientGroup::AdultOver65 | PatientGroup::Comorbid
            ),
            KnownVaccine::Pfizer
            | KnownVaccine::Moderna
            | KnownVaccine::Janssen
            | KnownVaccine::Other => true,
        }
    }
}
