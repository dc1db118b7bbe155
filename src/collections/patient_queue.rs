// ==========================================
// 疫苗接种运动 - 患者队列
// ==========================================
// 职责: FIFO 患者队列,到达顺序即服务顺序
// 存储: VecDeque,队首出、队尾入均为 O(1)
// 输入: 入队患者（深拷贝后持有）
// 输出: 出队患者（所有权转移给调用方）、结构比较、聚合计数
// ==========================================
// 注: 聚合计数按值消费队列,需要保留原队列时先 duplicate
// ==========================================

mod compare;
mod core;
mod stats;

#[cfg(test)]
mod tests;

pub use self::core::{Iter, PatientQueue};
