// ==========================================
// 批次列表 - 快速排序
// ==========================================
// 排序键:
// 1) lot_id 升序
// 2) lot_id 相同时疫苗名称降序
// 算法: 末元素为轴的 Lomuto 划分,显式栈代替递归
// ==========================================

use super::core::VaccineBatchList;
use crate::domain::batch::VaccineBatch;
use std::cmp::Ordering;
use tracing::debug;

/// 批次默认顺序
///
/// # 返回
/// Ordering::Less 表示 a 排在 b 之前
pub fn batch_order(a: &VaccineBatch, b: &VaccineBatch) -> Ordering {
    match a.lot_id.cmp(&b.lot_id) {
        Ordering::Equal => b.vaccine.name.cmp(&a.vaccine.name),
        other => other,
    }
}

impl VaccineBatchList {
    /// 按默认顺序原地排序，少于 2 个元素时不做任何事
    pub fn sort(&mut self) {
        self.sort_by(batch_order);
    }

    /// 按比较器原地快速排序（交换批次内容，不移动节点）
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&VaccineBatch, &VaccineBatch) -> Ordering,
    {
        if self.size < 2 {
            return;
        }

        let mut slots: Vec<&mut VaccineBatch> = self.iter_mut().collect();
        let mut ranges = vec![(0usize, slots.len() - 1)];
        let mut partitions = 0usize;

        while let Some((low, high)) = ranges.pop() {
            if low >= high {
                continue;
            }
            let pivot = partition(&mut slots, low, high, &mut compare);
            partitions += 1;

            if pivot > low {
                ranges.push((low, pivot - 1));
            }
            ranges.push((pivot + 1, high));
        }

        debug!(batches = slots.len(), partitions, "批次列表排序完成");
    }
}

/// Lomuto 划分，返回轴最终所在下标
fn partition<F>(slots: &mut [&mut VaccineBatch], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&VaccineBatch, &VaccineBatch) -> Ordering,
{
    let mut store = low;
    for j in low..high {
        if compare(&*slots[j], &*slots[high]) != Ordering::Greater {
            swap_contents(slots, store, j);
            store += 1;
        }
    }
    swap_contents(slots, store, high);
    store
}

fn swap_contents(slots: &mut [&mut VaccineBatch], a: usize, b: usize) {
    if a == b {
        return;
    }
    let (low, high) = (a.min(b), a.max(b));
    let (left, right) = slots.split_at_mut(high);
    std::mem::swap(&mut *left[low], &mut *right[0]);
}
