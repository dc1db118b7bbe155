use crate::collections::error::CollectionResult;
use crate::domain::patient::Patient;
use std::collections::{vec_deque, VecDeque};
use std::fmt;
use tracing::debug;

// ==========================================
// PatientQueue - 患者队列
// ==========================================
// 存储: 环形缓冲区,队首出、队尾入均为 O(1)
// 状态: head() == None 当且仅当队列为空
pub struct PatientQueue {
    pub(super) patients: VecDeque<Patient>,
}

impl PatientQueue {
    /// 创建空队列
    pub fn new() -> Self {
        Self {
            patients: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// 入队（深拷贝患者挂到队尾）
    ///
    /// # 返回
    /// - Err(Domain(Memory)): 拷贝失败，队列保持不变
    pub fn enqueue(&mut self, patient: &Patient) -> CollectionResult<()> {
        let copy = patient.duplicate()?;
        self.push_owned(copy);
        Ok(())
    }

    /// 把已持有的患者挂到队尾（不再拷贝）
    pub(crate) fn push_owned(&mut self, patient: Patient) {
        self.patients.push_back(patient);
    }

    /// 出队，队首患者的所有权转移给调用方
    ///
    /// # 返回
    /// - None: 队列为空
    pub fn dequeue(&mut self) -> Option<Patient> {
        self.patients.pop_front()
    }

    /// 只读查看队首
    pub fn head(&self) -> Option<&Patient> {
        self.patients.front()
    }

    /// 深拷贝整条队列，保持顺序
    ///
    /// 中途失败时已构造的部分随返回的错误一起释放
    pub fn duplicate(&self) -> CollectionResult<PatientQueue> {
        let mut dst = PatientQueue::new();
        dst.patients.reserve(self.len());
        for patient in self.iter() {
            dst.push_owned(patient.duplicate()?);
        }

        debug!(patients = dst.len(), "患者队列复制完成");
        Ok(dst)
    }

    /// 把 other 的全部患者按原顺序接到队尾，other 变为空队列
    pub fn append(&mut self, other: &mut PatientQueue) {
        self.patients.append(&mut other.patients);
    }

    /// 释放全部患者（幂等）
    pub fn clear(&mut self) {
        self.patients.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.patients.iter(),
        }
    }
}

impl Default for PatientQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// 按迭代顺序直接持有患者（不再拷贝）
impl FromIterator<Patient> for PatientQueue {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        Self {
            patients: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for PatientQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// 调试输出: 每行一个患者
impl fmt::Display for PatientQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.iter().enumerate() {
            writeln!(
                f,
                "{}) {} group {} {} dosis {} {} batch {}",
                i,
                p.name,
                p.group,
                p.id,
                p.number_doses,
                p.vaccine.as_deref().unwrap_or("-"),
                p.lot_id
            )?;
        }
        Ok(())
    }
}

// ==========================================
// Iter - 按服务顺序只读遍历
// ==========================================
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, Patient>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Patient;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a PatientQueue {
    type Item = &'a Patient;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
