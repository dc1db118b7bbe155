// ==========================================
// 疫苗接种运动 - 集合层
// ==========================================
// 职责: 患者 FIFO 队列、可按下标访问的疫苗批次列表
// 红线: 集合独占持有其中的记录,调用方拿到的是拷贝或借用
// ==========================================

pub mod batch_list;
pub mod error;
pub mod patient_queue;

// 重导出核心类型
pub use batch_list::{batch_order, InoculationOutcome, VaccineBatchList};
pub use error::{CollectionError, CollectionResult};
pub use patient_queue::PatientQueue;
