// ==========================================
// 患者队列 - 聚合计数
// ==========================================
// 按疫苗名称、疫苗技术、接种批次统计患者数
// ==========================================

use super::core::PatientQueue;
use crate::domain::types::VaccineTechnology;
use crate::domain::vaccine::VaccineCatalog;

impl PatientQueue {
    /// 统计已分配指定疫苗的患者数（精确匹配名称）
    ///
    /// 逐个出队累计，按值消费队列
    pub fn count_by_vaccine_name(mut self, vaccine_name: &str) -> usize {
        let mut count = 0;
        while let Some(patient) = self.dequeue() {
            if patient.vaccine.as_deref() == Some(vaccine_name) {
                count += 1;
            }
        }
        count
    }

    /// 统计所分配疫苗属于指定技术的患者数
    ///
    /// 疫苗技术从目录反查，目录中不存在的疫苗不计入
    pub fn count_by_vaccine_technology(
        mut self,
        catalog: &VaccineCatalog,
        technology: VaccineTechnology,
    ) -> usize {
        let mut count = 0;
        while let Some(patient) = self.dequeue() {
            let matches = patient
                .vaccine
                .as_deref()
                .and_then(|name| catalog.find_by_name(name))
                .map(|vaccine| vaccine.technology == technology)
                .unwrap_or(false);
            if matches {
                count += 1;
            }
        }
        count
    }

    /// 统计从指定批次接种过的患者数（不修改队列）
    ///
    /// # 规则
    /// - vaccine_name 为空 → 0
    /// - 计入条件: 剂次 ≥ 1、疫苗名称一致、批次号一致
    pub fn count_by_vaccination_batch(&self, vaccine_name: &str, lot_id: i32) -> usize {
        if vaccine_name.is_empty() {
            return 0;
        }
        self.iter()
            .filter(|p| {
                p.number_doses >= 1
                    && p.vaccine.as_deref() == Some(vaccine_name)
                    && p.lot_id == lot_id
            })
            .count()
    }
}
