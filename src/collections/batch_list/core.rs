use crate::collections::error::{CollectionError, CollectionResult};
use crate::domain::batch::VaccineBatch;
use std::fmt;
use tracing::debug;

// ==========================================
// ListNode - 列表节点
// ==========================================
pub(super) struct ListNode {
    pub(super) batch: VaccineBatch,
    pub(super) next: Option<Box<ListNode>>,
}

// ==========================================
// VaccineBatchList - 疫苗批次列表
// ==========================================
// 下标 0 为表头
pub struct VaccineBatchList {
    pub(super) first: Option<Box<ListNode>>,
    pub(super) size: usize,
}

impl VaccineBatchList {
    /// 创建空列表
    pub fn new() -> Self {
        Self {
            first: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// 在 index 位置之前插入批次（按值持有，不再拷贝）
    ///
    /// # 参数
    /// - index: 取值范围 [0, size]，等于 size 时追加到表尾
    ///
    /// # 返回
    /// - Err(InvalidIndex): index 超出范围
    pub fn insert(&mut self, batch: VaccineBatch, index: usize) -> CollectionResult<()> {
        if index > self.size {
            return Err(CollectionError::InvalidIndex {
                index,
                size: self.size,
            });
        }

        let lot_id = batch.lot_id;
        let slot = self.slot_at(index);
        let next = slot.take();
        *slot = Some(Box::new(ListNode { batch, next }));
        self.size += 1;

        debug!(lot_id, index, size = self.size, "批次已插入");
        Ok(())
    }

    /// 删除 index 位置的批次
    ///
    /// # 返回
    /// - Err(EmptyList): 列表为空（优先于下标检查）
    /// - Err(InvalidIndex): index 不在 [0, size) 内
    pub fn delete(&mut self, index: usize) -> CollectionResult<()> {
        if self.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        if index >= self.size {
            return Err(CollectionError::InvalidIndex {
                index,
                size: self.size,
            });
        }

        let slot = self.slot_at(index);
        if let Some(node) = slot.take() {
            let ListNode { batch, next } = *node;
            *slot = next;
            debug!(lot_id = batch.lot_id, index, "批次已删除");
        }
        self.size -= 1;
        Ok(())
    }

    /// 按下标读取批次（从表头线性查找）
    pub fn get(&self, index: usize) -> Option<&VaccineBatch> {
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut VaccineBatch> {
        self.iter_mut().nth(index)
    }

    /// index 位置的批次号
    pub fn lot_id(&self, index: usize) -> Option<i32> {
        self.get(index).map(|batch| batch.lot_id)
    }

    /// index 位置的批次号，负数或越界时返回 -1
    pub fn get_lot_id(&self, index: isize) -> i32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.lot_id(i))
            .unwrap_or(-1)
    }

    /// 交换两个位置上的批次内容（节点本身不动）
    ///
    /// # 返回
    /// - Err(InvalidIndex): 两个下标相同，或任一下标越界
    pub fn swap(&mut self, index_a: usize, index_b: usize) -> CollectionResult<()> {
        let size = self.size;
        if index_a == index_b {
            return Err(CollectionError::InvalidIndex {
                index: index_a,
                size,
            });
        }
        let (low, high) = (index_a.min(index_b), index_a.max(index_b));
        let out_of_range = CollectionError::InvalidIndex { index: high, size };
        if high >= size {
            return Err(out_of_range);
        }

        let mut cursor = self.first.as_deref_mut();
        for _ in 0..low {
            cursor = cursor.and_then(|node| node.next.as_deref_mut());
        }
        let low_node = cursor.ok_or_else(|| out_of_range.clone())?;

        let mut far = low_node.next.as_deref_mut();
        for _ in 0..(high - low - 1) {
            far = far.and_then(|node| node.next.as_deref_mut());
        }
        let high_node = far.ok_or(out_of_range)?;

        std::mem::swap(&mut low_node.batch, &mut high_node.batch);
        Ok(())
    }

    /// 深拷贝整张列表，保持原顺序
    pub fn duplicate(&self) -> CollectionResult<VaccineBatchList> {
        let mut dst = VaccineBatchList::new();
        let mut tail = &mut dst.first;
        for batch in self.iter() {
            let node = tail.insert(Box::new(ListNode {
                batch: batch.duplicate()?,
                next: None,
            }));
            tail = &mut node.next;
        }
        dst.size = self.size;

        debug!(batches = dst.size, "批次列表复制完成");
        Ok(dst)
    }

    /// 指定疫苗的剩余总剂量
    pub fn available_doses(&self, vaccine_name: &str) -> u64 {
        self.iter()
            .filter(|batch| batch.vaccine.name == vaccine_name)
            .map(|batch| u64::from(batch.quantity))
            .sum()
    }

    /// 释放全部节点（幂等）
    pub fn clear(&mut self) {
        let mut cursor = self.first.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.first.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            next: self.first.as_deref_mut(),
        }
    }

    /// 第 index 个节点所在的槽位（index == size 时为表尾空槽）
    fn slot_at(&mut self, index: usize) -> &mut Option<Box<ListNode>> {
        let mut slot = &mut self.first;
        for _ in 0..index {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        slot
    }
}

impl Default for VaccineBatchList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VaccineBatchList {
    fn drop(&mut self) {
        self.clear();
    }
}

/// 按迭代顺序构建列表（首个元素位于下标 0）
impl FromIterator<VaccineBatch> for VaccineBatchList {
    fn from_iter<I: IntoIterator<Item = VaccineBatch>>(iter: I) -> Self {
        let mut list = VaccineBatchList::new();
        let mut count = 0;
        let mut tail = &mut list.first;
        for batch in iter {
            let node = tail.insert(Box::new(ListNode { batch, next: None }));
            tail = &mut node.next;
            count += 1;
        }
        list.size = count;
        list
    }
}

impl fmt::Debug for VaccineBatchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// 调试输出: 每行一个批次
impl fmt::Display for VaccineBatchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for batch in self.iter() {
            writeln!(
                f,
                "{}) lotId {} quantity {}",
                batch.vaccine.name, batch.lot_id, batch.quantity
            )?;
        }
        Ok(())
    }
}

// ==========================================
// 迭代器
// ==========================================
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a VaccineBatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.batch
        })
    }
}

pub struct IterMut<'a> {
    next: Option<&'a mut ListNode>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut VaccineBatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.batch
        })
    }
}

impl<'a> IntoIterator for &'a VaccineBatchList {
    type Item = &'a VaccineBatch;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
