// ==========================================
// 疫苗接种运动 - 运动报表
// ==========================================
// 职责: 汇总患者队列与批次列表的聚合计数
// 输出: CampaignReport (JSON 可序列化)
// 红线: 报表只读,输入队列与批次不被修改
// ==========================================

use crate::collections::batch_list::VaccineBatchList;
use crate::collections::patient_queue::PatientQueue;
use crate::domain::types::VaccineTechnology;
use crate::domain::vaccine::VaccineCatalog;
use crate::engine::error::EngineResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct CampaignReport {
    pub generated_at: DateTime<Utc>,
    pub total_patients: usize,
    pub fully_vaccinated: usize,
    pub by_vaccine: Vec<VaccineCount>,
    pub by_technology: Vec<TechnologyCount>,
    pub by_lot: Vec<LotUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineCount {
    pub vaccine: String,
    pub patients: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyCount {
    pub technology: VaccineTechnology,
    pub patients: usize,
}

/// 单个批次的使用情况
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotUsage {
    pub lot_id: i32,
    pub vaccine: String,
    pub patients: usize, // 首剂出自该批次的患者数
    pub remaining: u32,
}

// ==========================================
// CampaignReporter - 报表生成器
// ==========================================
pub struct CampaignReporter;

impl CampaignReporter {
    pub fn new() -> Self {
        Self
    }

    /// 生成运动报表
    ///
    /// 按名称与按技术的计数会消费队列,这里对副本计数
    ///
    /// # 返回
    /// - Err(Collection): 队列复制失败
    #[instrument(skip_all, fields(patients = queue.len(), batches = batches.len()))]
    pub fn build(
        &self,
        queue: &PatientQueue,
        catalog: &VaccineCatalog,
        batches: &VaccineBatchList,
    ) -> EngineResult<CampaignReport> {
        let mut by_vaccine = Vec::with_capacity(catalog.len());
        for vaccine in catalog.iter() {
            by_vaccine.push(VaccineCount {
                vaccine: vaccine.name.clone(),
                patients: queue.duplicate()?.count_by_vaccine_name(&vaccine.name),
            });
        }

        let mut by_technology = Vec::new();
        for technology in VaccineTechnology::all() {
            by_technology.push(TechnologyCount {
                technology,
                patients: queue
                    .duplicate()?
                    .count_by_vaccine_technology(catalog, technology),
            });
        }

        let by_lot: Vec<LotUsage> = batches
            .iter()
            .map(|batch| LotUsage {
                lot_id: batch.lot_id,
                vaccine: batch.vaccine.name.clone(),
                patients: queue.count_by_vaccination_batch(&batch.vaccine.name, batch.lot_id),
                remaining: batch.quantity,
            })
            .collect();

        let report = CampaignReport {
            generated_at: Utc::now(),
            total_patients: queue.len(),
            fully_vaccinated: queue.iter().filter(|p| p.is_vaccinated()).count(),
            by_vaccine,
            by_technology,
            by_lot,
        };

        debug!(
            total = report.total_patients,
            vaccinated = report.fully_vaccinated,
            lots = report.by_lot.len(),
            "运动报表生成完成"
        );
        Ok(report)
    }
}

impl Default for CampaignReporter {
    fn default() -> Self {
        Self::new()
    }
}
