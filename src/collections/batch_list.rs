// ==========================================
// 疫苗接种运动 - 疫苗批次列表
// ==========================================
// 职责: 可按下标访问的单链批次列表,排序与接种协议
// 输入: 批次（按值插入,列表独占持有）
// 输出: 批次查询、排序结果、接种结果（修改批次剩余量与患者剂次）
// ==========================================
// 红线: size 始终等于实际节点数
// 红线: quantity == 0 的批次不自动移除
// ==========================================

mod core;
mod inoculation;
mod sort;


pub use self::core::{Iter, IterMut, VaccineBatchList};
pub use self::inoculation::InoculationOutcome;
pub use self::sort::batch_order;
