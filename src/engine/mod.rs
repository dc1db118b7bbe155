// ==========================================
// 疫苗接种运动 - 引擎层
// ==========================================
// 职责: 编排单日接种流程,汇总运动报表
// 红线: 引擎只通过集合层公开操作读写队列与批次
// ==========================================

pub mod error;
pub mod report;
pub mod vaccination_run;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use report::{CampaignReport, CampaignReporter, LotUsage, TechnologyCount, VaccineCount};
pub use vaccination_run::{ConflictRecord, DailyRunReport, VaccinationRun};
