// ==========================================
// 疫苗接种运动 - 单日接种流程
// ==========================================
// 流程:
// 1) 按需对批次列表排序
// 2) 依次出队患者,按剂次尝试接种一剂
// 3) 完成全程的患者转入已完成队列,其余按原顺序回到队尾
// 输出: DailyRunReport (可序列化)
// ==========================================

use crate::collections::batch_list::{InoculationOutcome, VaccineBatchList};
use crate::collections::patient_queue::PatientQueue;
use crate::config::RunOptions;
use crate::engine::error::EngineResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// DailyRunReport - 单日运行报告
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct DailyRunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    // 患者流转
    pub patients_processed: usize,
    pub patients_completed: usize, // 本次完成全程并移出队列
    pub patients_requeued: usize,

    // 剂次
    pub first_doses: usize,
    pub second_doses: usize,
    pub no_suitable_batch: usize,
    pub not_eligible: usize,

    pub conflicts: Vec<ConflictRecord>,
}

impl DailyRunReport {
    pub fn doses_administered(&self) -> usize {
        self.first_doses + self.second_doses
    }
}

/// 首剂疫苗不一致记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRecord {
    pub patient_id: i32,
    pub lot_id: i32,
    pub assigned: String,
    pub batch_vaccine: String,
}

// ==========================================
// VaccinationRun - 接种流程编排
// ==========================================
// 已完成队列跨多次运行累积
pub struct VaccinationRun {
    options: RunOptions,
    completed: PatientQueue,
}

impl VaccinationRun {
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            completed: PatientQueue::new(),
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// 已完成全程接种的患者
    pub fn completed(&self) -> &PatientQueue {
        &self.completed
    }

    /// 取走已完成队列
    pub fn take_completed(&mut self) -> PatientQueue {
        std::mem::take(&mut self.completed)
    }

    /// 执行一天的接种
    ///
    /// # 参数
    /// - queue: 等待队列（处理后仅剩未完成全程的患者）
    /// - batches: 批次列表（余量被扣减）
    ///
    /// # 返回
    /// - Err(Collection): 疫苗名称拷贝失败；出错前已处理的患者与当前患者都回到队尾
    #[instrument(skip_all, fields(queued = queue.len(), batches = batches.len()))]
    pub fn run_day(
        &mut self,
        queue: &mut PatientQueue,
        batches: &mut VaccineBatchList,
    ) -> EngineResult<DailyRunReport> {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();

        info!(run_id = %run_id, "开始单日接种流程");

        // ==========================================
        // 步骤1: 批次排序
        // ==========================================
        if self.options.sort_batches {
            debug!("步骤1: 批次列表排序");
            batches.sort();
        }

        // ==========================================
        // 步骤2: 逐个患者接种
        // ==========================================
        let limit = self
            .options
            .max_patients
            .map_or(queue.len(), |max| max.min(queue.len()));
        debug!(limit, "步骤2: 逐个患者接种");

        let mut report = DailyRunReport {
            run_id,
            started_at,
            finished_at: started_at,
            patients_processed: 0,
            patients_completed: 0,
            patients_requeued: 0,
            first_doses: 0,
            second_doses: 0,
            no_suitable_batch: 0,
            not_eligible: 0,
            conflicts: Vec::new(),
        };
        let mut pending = PatientQueue::new();

        for _ in 0..limit {
            let mut patient = match queue.dequeue() {
                Some(patient) => patient,
                None => break,
            };

            let outcome = match batches.inoculate(&mut patient) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(patient_id = patient.id, error = %e, "接种失败，患者放回队列");
                    pending.push_owned(patient);
                    queue.append(&mut pending);
                    return Err(e.into());
                }
            };
            report.patients_processed += 1;

            match outcome {
                InoculationOutcome::Administered { dose, .. } => {
                    if dose == 1 {
                        report.first_doses += 1;
                    } else {
                        report.second_doses += 1;
                    }
                }
                InoculationOutcome::VaccineConflict {
                    lot_id,
                    assigned,
                    batch_vaccine,
                } => {
                    report.first_doses += 1;
                    report.conflicts.push(ConflictRecord {
                        patient_id: patient.id,
                        lot_id,
                        assigned,
                        batch_vaccine,
                    });
                }
                InoculationOutcome::NoSuitableBatch => report.no_suitable_batch += 1,
                InoculationOutcome::NotEligible => report.not_eligible += 1,
            }

            // ==========================================
            // 步骤3: 分流
            // ==========================================
            if patient.is_vaccinated() {
                report.patients_completed += 1;
                self.completed.push_owned(patient);
            } else {
                report.patients_requeued += 1;
                pending.push_owned(patient);
            }
        }

        queue.append(&mut pending);
        report.finished_at = Utc::now();

        info!(
            run_id = %report.run_id,
            processed = report.patients_processed,
            doses = report.doses_administered(),
            completed = report.patients_completed,
            requeued = report.patients_requeued,
            conflicts = report.conflicts.len(),
            "单日接种流程完成"
        );
        Ok(report)
    }
}

impl Default for VaccinationRun {
    fn default() -> Self {
        Self::new(RunOptions::default())
    }
}
