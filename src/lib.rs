// ==========================================
// 疫苗接种运动 - 核心库
// ==========================================
// 职责: 患者队列、疫苗批次列表与接种协议的记账核心
// 分层: domain → collections → engine, config 负责装配
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 集合层 - 患者队列与批次列表
pub mod collections;

// 引擎层 - 单日接种流程与报表
pub mod engine;

// 配置层 - 运动配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{KnownVaccine, PatientGroup, VaccineTechnology};

// 领域实体
pub use domain::{DomainError, Patient, Vaccine, VaccineBatch, VaccineCatalog};

// 集合
pub use collections::{CollectionError, InoculationOutcome, PatientQueue, VaccineBatchList};

// 引擎
pub use engine::{CampaignReport, CampaignReporter, DailyRunReport, EngineError, VaccinationRun};

// 配置
pub use config::{CampaignConfig, ConfigError, RunOptions};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "疫苗接种运动记账核心";
