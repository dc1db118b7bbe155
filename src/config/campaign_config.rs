// ==========================================
// 疫苗接种运动 - 运动配置
// ==========================================
// 职责: 配置文件模型、内容校验、构建运行所需的集合
// 格式: JSON,各段均可省略
// ==========================================

use crate::collections::batch_list::VaccineBatchList;
use crate::collections::patient_queue::PatientQueue;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::batch::VaccineBatch;
use crate::domain::patient::Patient;
use crate::domain::types::{PatientGroup, VaccineTechnology};
use crate::domain::vaccine::{Vaccine, VaccineCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 覆盖配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "VACCINE_CAMPAIGN_CONFIG";

const CONFIG_DIR_NAME: &str = "vaccine-campaign";
const CONFIG_FILE_NAME: &str = "campaign.json";

// ==========================================
// CampaignConfig - 运动配置
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// 疫苗目录（为空时使用标准目录）
    #[serde(default)]
    pub vaccines: Vec<VaccineEntry>,

    /// 批次,按文件顺序进入列表
    #[serde(default)]
    pub batches: Vec<BatchEntry>,

    /// 等待接种的患者,按文件顺序入队
    #[serde(default)]
    pub patients: Vec<PatientEntry>,

    #[serde(default)]
    pub run: RunOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineEntry {
    pub name: String,
    pub technology: VaccineTechnology,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub lot_id: i32,
    pub vaccine: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientEntry {
    pub name: String,
    pub id: i32,
    pub group: PatientGroup,

    #[serde(default)]
    pub vaccine: Option<String>,

    #[serde(default)]
    pub lot_id: i32,

    #[serde(default)]
    pub doses: u32,
}

/// 单日运行参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// 运行前按批次号排序
    #[serde(default = "default_sort_batches")]
    pub sort_batches: bool,

    /// 单日最多处理的患者数（None 表示整条队列）
    #[serde(default)]
    pub max_patients: Option<usize>,
}

fn default_sort_batches() -> bool {
    true
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sort_batches: default_sort_batches(),
            max_patients: None,
        }
    }
}

impl CampaignConfig {
    /// 解析并校验 JSON 配置
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: CampaignConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 读取配置文件
    ///
    /// # 返回
    /// - Err(Io): 文件不存在或不可读
    /// - Err(Parse): JSON 格式错误
    /// - Err(Validation / UnknownVaccine): 内容校验失败
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;

        info!(
            path = %path.display(),
            vaccines = config.vaccines.len(),
            batches = config.batches.len(),
            patients = config.patients.len(),
            "运动配置加载完成"
        );
        Ok(config)
    }

    /// 校验配置内容
    ///
    /// # 规则
    /// - 疫苗名称非空且唯一
    /// - 批次与患者引用的疫苗必须在目录中
    /// - 患者姓名非空,编号为正且唯一
    /// - 未分配疫苗的患者剂次必须为 0
    pub fn validate(&self) -> ConfigResult<()> {
        let mut names = HashSet::new();
        for entry in &self.vaccines {
            if entry.name.is_empty() {
                return Err(ConfigError::Validation("疫苗名称为空".to_string()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "疫苗名称重复: {}",
                    entry.name
                )));
            }
        }

        let catalog = self.build_catalog()?;

        for entry in &self.batches {
            if catalog.find_by_name(&entry.vaccine).is_none() {
                return Err(ConfigError::UnknownVaccine(entry.vaccine.clone()));
            }
        }

        let mut ids = HashSet::new();
        for entry in &self.patients {
            if entry.id <= 0 {
                return Err(ConfigError::Validation(format!(
                    "患者编号必须为正数: {}",
                    entry.id
                )));
            }
            if !ids.insert(entry.id) {
                return Err(ConfigError::Validation(format!("患者编号重复: {}", entry.id)));
            }
            if entry.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "患者姓名为空: id={}",
                    entry.id
                )));
            }
            match entry.vaccine.as_deref() {
                Some(name) if catalog.find_by_name(name).is_none() => {
                    return Err(ConfigError::UnknownVaccine(name.to_string()));
                }
                None if entry.doses != 0 => {
                    return Err(ConfigError::Validation(format!(
                        "患者未分配疫苗但剂次不为 0: id={}",
                        entry.id
                    )));
                }
                _ => {}
            }
        }

        debug!(
            vaccines = catalog.len(),
            batches = self.batches.len(),
            patients = self.patients.len(),
            "运动配置校验通过"
        );
        Ok(())
    }

    /// 构建疫苗目录
    pub fn build_catalog(&self) -> ConfigResult<VaccineCatalog> {
        if self.vaccines.is_empty() {
            return Ok(VaccineCatalog::standard());
        }

        let mut catalog = VaccineCatalog::new();
        for entry in &self.vaccines {
            catalog.add(Vaccine::new(&entry.name, entry.technology)?);
        }
        Ok(catalog)
    }

    /// 构建批次列表（保持文件顺序）
    pub fn build_batch_list(&self, catalog: &VaccineCatalog) -> ConfigResult<VaccineBatchList> {
        let batches = self
            .batches
            .iter()
            .map(|entry| -> ConfigResult<VaccineBatch> {
                let vaccine = catalog
                    .find_by_name(&entry.vaccine)
                    .ok_or_else(|| ConfigError::UnknownVaccine(entry.vaccine.clone()))?;
                Ok(VaccineBatch::new(entry.lot_id, vaccine, entry.quantity)?)
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(batches.into_iter().collect())
    }

    /// 构建患者队列（保持文件顺序）
    pub fn build_patient_queue(&self) -> ConfigResult<PatientQueue> {
        let patients = self
            .patients
            .iter()
            .map(|entry| -> ConfigResult<Patient> {
                if entry.id <= 0 {
                    return Err(ConfigError::Validation(format!(
                        "患者编号必须为正数: {}",
                        entry.id
                    )));
                }
                if entry.name.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "患者姓名为空: id={}",
                        entry.id
                    )));
                }
                Ok(Patient::new(
                    &entry.name,
                    entry.id,
                    entry.vaccine.as_deref(),
                    entry.lot_id,
                    entry.doses,
                    entry.group,
                )?)
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(patients.into_iter().collect())
    }
}

/// 默认配置文件路径
///
/// 优先级:
/// 1. 环境变量 VACCINE_CAMPAIGN_CONFIG
/// 2. 用户配置目录下的 vaccine-campaign/campaign.json（文件存在时）
/// 3. 当前目录下的 campaign.json
pub fn default_config_path() -> PathBuf {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

/// 按给定的环境变量值与用户配置目录解析配置文件路径
pub fn resolve_config_path(env_override: Option<OsString>, config_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_override {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = config_dir {
        let path = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if path.exists() {
            return path;
        }
    }

    PathBuf::from(".").join(CONFIG_FILE_NAME)
}
