use super::PatientQueue;
use crate::domain::patient::Patient;
use crate::domain::types::{
    PatientGroup, VaccineTechnology, ASTRAZENECA_VAC, JANSSEN_VAC, MODERNA_VAC, PFIZER_VAC,
};
use crate::domain::vaccine::VaccineCatalog;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_patient(name: &str, id: i32) -> Patient {
    Patient::new(name, id, None, 0, 0, PatientGroup::GeneralPopulation).unwrap()
}

fn create_vaccinated_patient(name: &str, id: i32, vaccine: &str, lot_id: i32, doses: u32) -> Patient {
    Patient::new(name, id, Some(vaccine), lot_id, doses, PatientGroup::GeneralPopulation).unwrap()
}

fn queue_of(patients: &[Patient]) -> PatientQueue {
    let mut queue = PatientQueue::new();
    for p in patients {
        queue.enqueue(p).unwrap();
    }
    queue
}

fn ids(queue: &PatientQueue) -> Vec<i32> {
    queue.iter().map(|p| p.id).collect()
}

// ==========================================
// 基本操作
// ==========================================

#[test]
fn test_new_queue_is_empty() {
    let queue = PatientQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.head().is_none());
}

#[test]
fn test_enqueue_dequeue_round_trip() {
    let original = create_test_patient("Ada", 1);
    let mut queue = PatientQueue::new();
    queue.enqueue(&original).unwrap();

    let dequeued = queue.dequeue().unwrap();
    assert!(dequeued.compare(&original));
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_fifo_order() {
    let mut queue = queue_of(&[
        create_test_patient("A", 1),
        create_test_patient("B", 2),
        create_test_patient("C", 3),
    ]);
    assert_eq!(queue.head().unwrap().id, 1);
    assert_eq!(queue.dequeue().unwrap().id, 1);
    queue.enqueue(&create_test_patient("D", 4)).unwrap();
    assert_eq!(ids(&queue), vec![2, 3, 4]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_enqueue_stores_independent_copy() {
    let mut original = create_test_patient("Ada", 1);
    let queue = queue_of(&[original.clone()]);
    original.name.push_str(" Lovelace");
    assert_eq!(queue.head().unwrap().name, "Ada");
}

#[test]
fn test_enqueue_after_drain_reuses_empty_state() {
    let mut queue = queue_of(&[create_test_patient("A", 1)]);
    queue.dequeue();
    queue.enqueue(&create_test_patient("B", 2)).unwrap();
    assert_eq!(ids(&queue), vec![2]);
}

#[test]
fn test_clear_is_idempotent() {
    let mut queue = queue_of(&[create_test_patient("A", 1), create_test_patient("B", 2)]);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn test_duplicate_preserves_order_and_independence() {
    let mut queue = queue_of(&[
        create_test_patient("A", 1),
        create_test_patient("B", 2),
        create_test_patient("C", 3),
    ]);
    let copy = queue.duplicate().unwrap();
    queue.dequeue();
    assert_eq!(ids(&copy), vec![1, 2, 3]);
    assert_eq!(copy.len(), 3);
    assert_eq!(ids(&queue), vec![2, 3]);
}

#[test]
fn test_long_queue_drops_without_recursion() {
    let queue: PatientQueue = (1..=200_000)
        .map(|id| create_test_patient("X", id))
        .collect();
    assert_eq!(queue.len(), 200_000);
    assert_eq!(queue.head().unwrap().id, 1);
    drop(queue);
}

#[test]
fn test_many_enqueues_stay_linear() {
    let patient = create_test_patient("X", 1);
    let mut queue = PatientQueue::new();
    for _ in 0..200_000 {
        queue.enqueue(&patient).unwrap();
    }
    assert_eq!(queue.len(), 200_000);

    let mut drained = 0;
    while queue.dequeue().is_some() {
        drained += 1;
    }
    assert_eq!(drained, 200_000);
    assert!(queue.is_empty());
}

#[test]
fn test_compare_recursive_on_deep_queues_uses_constant_stack() {
    // 小栈线程上比较 30 万个患者,逐层递归会栈溢出
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let mut left: PatientQueue = (1..=300_000)
                .map(|id| create_test_patient("X", id))
                .collect();
            let mut right = left.duplicate().unwrap();
            let equal = left.compare_recursive(&mut right);
            (equal, left.len(), right.len())
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), (true, 0, 0));
}

#[test]
fn test_append_moves_all_nodes_in_order() {
    let mut queue = queue_of(&[create_test_patient("A", 1)]);
    let mut rest = queue_of(&[create_test_patient("B", 2), create_test_patient("C", 3)]);
    queue.append(&mut rest);
    assert_eq!(ids(&queue), vec![1, 2, 3]);
    assert_eq!(queue.len(), 3);
    assert!(rest.is_empty());
    assert_eq!(rest.len(), 0);
}

// ==========================================
// 结构比较
// ==========================================

#[test]
fn test_all_compare_variants_agree_on_duplicate() {
    let queue = queue_of(&[create_test_patient("A", 1), create_test_patient("B", 2)]);
    let copy = queue.duplicate().unwrap();

    assert!(queue.compare(&copy));
    assert!(queue.compare_iterative(&copy));

    let mut left = queue.duplicate().unwrap();
    let mut right = copy.duplicate().unwrap();
    assert!(left.compare_recursive(&mut right));

    // compare / compare_iterative 不修改原队列
    assert_eq!(queue.len(), 2);
    assert_eq!(copy.len(), 2);
}

#[test]
fn test_compare_is_order_sensitive() {
    let a = create_test_patient("A", 1);
    let b = create_test_patient("B", 2);
    let ab = queue_of(&[a.clone(), b.clone()]);
    let ba = queue_of(&[b, a]);

    assert!(!ab.compare(&ba));
    assert!(!ab.compare_iterative(&ba));
    let mut left = ab.duplicate().unwrap();
    let mut right = ba.duplicate().unwrap();
    assert!(!left.compare_recursive(&mut right));
    assert_ne!(ab, ba);
}

#[test]
fn test_compare_prefix_is_not_equal() {
    let short = queue_of(&[create_test_patient("A", 1)]);
    let long = queue_of(&[create_test_patient("A", 1), create_test_patient("B", 2)]);

    assert!(!short.compare(&long));
    assert!(!short.compare_iterative(&long));
    assert!(!long.compare_iterative(&short));
    let mut left = short.duplicate().unwrap();
    let mut right = long.duplicate().unwrap();
    assert!(!left.compare_recursive(&mut right));
}

#[test]
fn test_compare_empty_queues() {
    let a = PatientQueue::new();
    let b = PatientQueue::new();
    assert!(a.compare(&b));
    assert!(a.compare_iterative(&b));
    let mut left = PatientQueue::new();
    let mut right = PatientQueue::new();
    assert!(left.compare_recursive(&mut right));
}

#[test]
fn test_compare_recursive_stops_at_first_mismatch() {
    let mut left = queue_of(&[
        create_test_patient("A", 1),
        create_test_patient("B", 2),
        create_test_patient("C", 3),
        create_test_patient("D", 4),
    ]);
    let mut right = queue_of(&[
        create_test_patient("A", 1),
        create_test_patient("X", 9),
        create_test_patient("C", 3),
    ]);
    assert!(!left.compare_recursive(&mut right));
    // 不等的一对已出队，其余保留
    assert_eq!(ids(&left), vec![3, 4]);
    assert_eq!(ids(&right), vec![3]);
}

#[test]
fn test_compare_variants_agree_on_unequal_lengths() {
    let short = queue_of(&[create_test_patient("A", 1), create_test_patient("B", 2)]);
    let long = queue_of(&[
        create_test_patient("A", 1),
        create_test_patient("B", 2),
        create_test_patient("C", 3),
    ]);

    for (a, b) in [(&short, &long), (&long, &short)] {
        let mut left = a.duplicate().unwrap();
        let mut right = b.duplicate().unwrap();
        assert!(!a.compare(b));
        assert!(!a.compare_iterative(b));
        assert!(!left.compare_recursive(&mut right));
    }
}

#[test]
fn test_compare_ignores_vaccination_state() {
    let plain = queue_of(&[create_test_patient("A", 1)]);
    let vaccinated = queue_of(&[create_vaccinated_patient("A", 1, PFIZER_VAC, 3, 2)]);
    assert!(plain.compare(&vaccinated));
}

#[test]
fn test_compare_recursive_consumes_inputs() {
    let mut left = queue_of(&[create_test_patient("A", 1), create_test_patient("B", 2)]);
    let mut right = queue_of(&[create_test_patient("A", 1), create_test_patient("C", 3)]);
    assert!(!left.compare_recursive(&mut right));
    // 第二个元素不等时已出队，双方都已空
    assert!(left.is_empty());
    assert!(right.is_empty());
}

// ==========================================
// 聚合计数
// ==========================================

fn mixed_queue() -> PatientQueue {
    queue_of(&[
        create_vaccinated_patient("A", 1, PFIZER_VAC, 10, 2),
        create_vaccinated_patient("B", 2, PFIZER_VAC, 11, 1),
        create_vaccinated_patient("C", 3, JANSSEN_VAC, 20, 1),
        create_vaccinated_patient("D", 4, ASTRAZENECA_VAC, 30, 1),
        create_test_patient("E", 5),
        create_vaccinated_patient("F", 6, "SPUTNIK", 40, 1),
    ])
}

#[test]
fn test_count_by_vaccine_name() {
    let queue = mixed_queue();
    assert_eq!(queue.duplicate().unwrap().count_by_vaccine_name(PFIZER_VAC), 2);
    assert_eq!(queue.duplicate().unwrap().count_by_vaccine_name(MODERNA_VAC), 0);
    assert_eq!(queue.duplicate().unwrap().count_by_vaccine_name("pfizer"), 0);
    assert_eq!(queue.len(), 6);
}

#[test]
fn test_count_by_vaccine_technology() {
    let queue = mixed_queue();
    let catalog = VaccineCatalog::standard();
    let viral_vector = queue
        .duplicate()
        .unwrap()
        .count_by_vaccine_technology(&catalog, VaccineTechnology::ViralVector);
    let mrna = queue
        .duplicate()
        .unwrap()
        .count_by_vaccine_technology(&catalog, VaccineTechnology::MessengerRna);
    // SPUTNIK 不在目录中，不计入
    assert_eq!(viral_vector, 2);
    assert_eq!(mrna, 2);
}

#[test]
fn test_count_by_vaccination_batch() {
    let queue = mixed_queue();
    assert_eq!(queue.count_by_vaccination_batch(PFIZER_VAC, 10), 1);
    assert_eq!(queue.count_by_vaccination_batch(PFIZER_VAC, 11), 1);
    assert_eq!(queue.count_by_vaccination_batch(JANSSEN_VAC, 10), 0);
    assert_eq!(queue.len(), 6);
}

#[test]
fn test_count_by_vaccination_batch_empty_name_is_zero() {
    let queue = mixed_queue();
    assert_eq!(queue.count_by_vaccination_batch("", 10), 0);
    assert_eq!(queue.count_by_vaccination_batch("", 0), 0);
}

#[test]
fn test_display_dump_lists_patients_in_order() {
    let queue = queue_of(&[
        create_vaccinated_patient("A", 1, PFIZER_VAC, 10, 2),
        create_test_patient("B", 2),
    ]);
    let dump = queue.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0) A group GENERAL_POPULATION 1 dosis 2 PFIZER batch 10"));
    assert!(lines[1].starts_with("1) B"));
}
