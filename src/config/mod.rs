// ==========================================
// 疫苗接种运动 - 配置层
// ==========================================
// 职责: 读取 JSON 运动配置,校验后构建目录、批次列表与患者队列
// 存储: campaign.json (路径见 default_config_path)
// ==========================================

pub mod campaign_config;
pub mod error;

// 重导出核心配置类型
pub use campaign_config::{
    default_config_path, resolve_config_path, BatchEntry, CampaignConfig, PatientEntry,
    RunOptions, VaccineEntry,
    CONFIG_PATH_ENV,
};
pub use error::{ConfigError, ConfigResult};
