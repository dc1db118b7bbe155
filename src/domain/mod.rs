// ==========================================
// 疫苗接种运动 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、单记录业务规则
// 红线: 不含集合逻辑,不含流程编排
// ==========================================

pub mod batch;
pub mod error;
pub mod patient;
pub mod types;
pub mod vaccine;

// 重导出核心类型
pub use batch::VaccineBatch;
pub use error::{DomainError, DomainResult};
pub use patient::Patient;
pub use types::{KnownVaccine, PatientGroup, VaccineTechnology};
pub use vaccine::{Vaccine, VaccineCatalog};
