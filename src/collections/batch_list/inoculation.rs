// ==========================================
// 批次列表 - 接种协议
// ==========================================
// 职责: 从批次列表为患者选定批次并完成一剂接种
// 规则:
// - 首剂: 剂次为 0,取第一个有余量且适用的批次
// - 次剂: 剂次为 1 且非单剂疫苗,取第一个有余量、同名且仍适用的批次
// - 其余情况不接种
// 副作用: 患者剂次 +1,所选批次余量 -1
// ==========================================

use super::core::VaccineBatchList;
use crate::collections::error::CollectionResult;
use crate::domain::error::owned_copy;
use crate::domain::patient::Patient;
use serde::Serialize;
use tracing::{debug, instrument, warn};

// ==========================================
// InoculationOutcome - 接种结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InoculationOutcome {
    /// 剂次状态不需要本次接种
    NotEligible,
    /// 没有可用的批次
    NoSuitableBatch,
    /// 已接种
    Administered {
        dose: u32,
        lot_id: i32,
        vaccine: String,
    },
    /// 已接种，但患者原有疫苗与批次疫苗不一致（原有疫苗保留）
    VaccineConflict {
        lot_id: i32,
        assigned: String,
        batch_vaccine: String,
    },
}

impl InoculationOutcome {
    /// 本次是否实际消耗了一剂
    pub fn is_administered(&self) -> bool {
        matches!(
            self,
            InoculationOutcome::Administered { .. } | InoculationOutcome::VaccineConflict { .. }
        )
    }
}

impl VaccineBatchList {
    /// 按剂次分派首剂或次剂
    #[instrument(level = "debug", skip(self, patient), fields(patient_id = patient.id, doses = patient.number_doses))]
    pub fn inoculate(&mut self, patient: &mut Patient) -> CollectionResult<InoculationOutcome> {
        match patient.number_doses {
            0 => self.inoculate_first_dose(patient),
            1 if !patient.has_single_dose_vaccine() => Ok(self.inoculate_second_dose(patient)),
            _ => Ok(InoculationOutcome::NotEligible),
        }
    }

    /// 首剂接种
    ///
    /// 患者尚无疫苗时记录批次疫苗名称；已有同名疫苗时照常接种；
    /// 已有不同疫苗时保留原疫苗、照常扣减并返回 VaccineConflict
    ///
    /// # 返回
    /// - Err(Domain(Memory)): 疫苗名称拷贝失败，患者与批次均未修改
    pub fn inoculate_first_dose(
        &mut self,
        patient: &mut Patient,
    ) -> CollectionResult<InoculationOutcome> {
        if patient.number_doses != 0 {
            return Ok(InoculationOutcome::NotEligible);
        }

        let candidate = self
            .iter_mut()
            .find(|batch| batch.quantity > 0 && patient.is_suitable_for(&batch.vaccine));
        let batch = match candidate {
            Some(batch) => batch,
            None => {
                debug!(patient_id = patient.id, group = %patient.group, "没有适用的首剂批次");
                return Ok(InoculationOutcome::NoSuitableBatch);
            }
        };

        let conflict = match patient.vaccine.as_deref() {
            Some(assigned) if assigned != batch.vaccine.name => Some(assigned.to_string()),
            _ => None,
        };
        if patient.vaccine.is_none() {
            patient.vaccine = Some(owned_copy(&batch.vaccine.name)?);
        }

        patient.lot_id = batch.lot_id;
        patient.number_doses += 1;
        batch.take_dose();

        match conflict {
            Some(assigned) => {
                warn!(
                    patient_id = patient.id,
                    assigned = %assigned,
                    batch_vaccine = %batch.vaccine.name,
                    lot_id = batch.lot_id,
                    "首剂批次疫苗与患者已分配疫苗不一致"
                );
                Ok(InoculationOutcome::VaccineConflict {
                    lot_id: batch.lot_id,
                    assigned,
                    batch_vaccine: batch.vaccine.name.clone(),
                })
            }
            None => {
                debug!(
                    patient_id = patient.id,
                    vaccine = %batch.vaccine.name,
                    lot_id = batch.lot_id,
                    remaining = batch.quantity,
                    "首剂接种完成"
                );
                Ok(InoculationOutcome::Administered {
                    dose: patient.number_doses,
                    lot_id: batch.lot_id,
                    vaccine: batch.vaccine.name.clone(),
                })
            }
        }
    }

    /// 次剂接种
    ///
    /// 仅当剂次为 1、已分配疫苗且该疫苗不是单剂疫苗时进行
    pub fn inoculate_second_dose(&mut self, patient: &mut Patient) -> InoculationOutcome {
        if patient.number_doses != 1 || patient.has_single_dose_vaccine() {
            return InoculationOutcome::NotEligible;
        }
        let assigned = match patient.vaccine.as_deref() {
            Some(name) => name,
            None => return InoculationOutcome::NotEligible,
        };

        let candidate = self.iter_mut().find(|batch| {
            batch.quantity > 0
                && batch.vaccine.name == assigned
                && patient.is_suitable_for(&batch.vaccine)
        });
        let batch = match candidate {
            Some(batch) => batch,
            None => {
                debug!(patient_id = patient.id, vaccine = %assigned, "没有可用的次剂批次");
                return InoculationOutcome::NoSuitableBatch;
            }
        };

        batch.take_dose();
        patient.number_doses += 1;

        debug!(
            patient_id = patient.id,
            vaccine = %batch.vaccine.name,
            lot_id = batch.lot_id,
            remaining = batch.quantity,
            "次剂接种完成"
        );
        InoculationOutcome::Administered {
            dose: patient.number_doses,
            lot_id: batch.lot_id,
            vaccine: batch.vaccine.name.clone(),
        }
    }
}
