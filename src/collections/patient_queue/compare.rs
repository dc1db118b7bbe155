// ==========================================
// 患者队列 - 结构比较
// ==========================================
// 三种入口结果必须一致: 顺序敏感,患者按 Patient::compare 判等
// - compare: 在副本上调用 compare_recursive
// - compare_recursive: 逐个出队消费双方
// - compare_iterative: 在副本上用 drain_equal 逐个出队
// ==========================================

use super::core::PatientQueue;
use tracing::warn;

impl PatientQueue {
    /// 比较两条队列（主入口，不修改任何一方）
    ///
    /// 长度不同直接判不等；否则对两份深拷贝做 compare_recursive
    pub fn compare(&self, other: &PatientQueue) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match (self.duplicate(), other.duplicate()) {
            (Ok(mut left), Ok(mut right)) => left.compare_recursive(&mut right),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "队列比较时复制失败");
                false
            }
        }
    }

    /// 成对出队比较，消费两条队列
    ///
    /// 遇到不等时停止，双方只剩未比较的部分；需要保留原队列请使用 compare。
    /// 按循环展开，栈深度与队列长度无关。
    pub fn compare_recursive(&mut self, other: &mut PatientQueue) -> bool {
        loop {
            if self.is_empty() && other.is_empty() {
                return true;
            }
            match (self.dequeue(), other.dequeue()) {
                (Some(p1), Some(p2)) if p1.compare(&p2) => {}
                _ => return false,
            }
        }
    }

    /// 迭代比较，在内部拷贝上消费，不修改任何一方
    pub fn compare_iterative(&self, other: &PatientQueue) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        match (self.duplicate(), other.duplicate()) {
            (Ok(mut left), Ok(mut right)) => Self::drain_equal(&mut left, &mut right),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "队列比较时复制失败");
                false
            }
        }
    }

    fn drain_equal(left: &mut PatientQueue, right: &mut PatientQueue) -> bool {
        while let Some(p1) = left.dequeue() {
            match right.dequeue() {
                Some(p2) if p1.compare(&p2) => {}
                _ => return false,
            }
        }
        right.is_empty()
    }
}

impl PartialEq for PatientQueue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}
