// ==========================================
// 运动报表集成测试
// ==========================================
// 测试目标: 报表计数与 JSON 结构
// ==========================================


use test_helpers::{batch_list, queue_of, PatientBuilder, SAMPLE_CONFIG};
use vaccine_campaign::config::CampaignConfig;
use vaccine_campaign::domain::types::{
    PatientGroup, VaccineTechnology, ASTRAZENECA_VAC, JANSSEN_VAC, MODERNA_VAC, PFIZER_VAC,
};
use vaccine_campaign::domain::VaccineCatalog;
use vaccine_campaign::engine::{CampaignReporter, LotUsage, VaccinationRun};

#[test]
fn test_report_after_sample_day() {
    let config = CampaignConfig::from_json_str(SAMPLE_CONFIG).unwrap();
    let catalog = config.build_catalog().unwrap();
    let mut batches = config.build_batch_list(&catalog).unwrap();
    let mut queue = config.build_patient_queue().unwrap();

    let mut run = VaccinationRun::new(config.run.clone());
    run.run_day(&mut queue, &mut batches).unwrap();

    let mut all = queue.duplicate().unwrap();
    all.append(&mut run.take_completed());
    let report = CampaignReporter::new().build(&all, &catalog, &batches).unwrap();

    assert_eq!(report.total_patients, 4);
    assert_eq!(report.fully_vaccinated, 2);

    let by_vaccine: Vec<(&str, usize)> = report
        .by_vaccine
        .iter()
        .map(|c| (c.vaccine.as_str(), c.patients))
        .collect();
    assert_eq!(
        by_vaccine,
        vec![
            (PFIZER_VAC, 2),
            (MODERNA_VAC, 0),
            (ASTRAZENECA_VAC, 1),
            (JANSSEN_VAC, 1),
        ]
    );

    assert_eq!(report.by_technology[0].technology, VaccineTechnology::MessengerRna);
    assert_eq!(report.by_technology[0].patients, 2);
    assert_eq!(report.by_technology[1].technology, VaccineTechnology::ViralVector);
    assert_eq!(report.by_technology[1].patients, 2);

    assert_eq!(
        report.by_lot,
        vec![
            LotUsage {
                lot_id: 10,
                vaccine: ASTRAZENECA_VAC.to_string(),
                patients: 1,
                remaining: 2,
            },
            LotUsage {
                lot_id: 20,
                vaccine: PFIZER_VAC.to_string(),
                patients: 2,
                remaining: 0,
            },
            LotUsage {
                lot_id: 30,
                vaccine: JANSSEN_VAC.to_string(),
                patients: 1,
                remaining: 0,
            },
        ]
    );
}

#[test]
fn test_report_json_shape() {
    let catalog = VaccineCatalog::standard();
    let batches = batch_list(&[(1, MODERNA_VAC, 3)]);
    let queue = queue_of(vec![
        PatientBuilder::new(1)
            .name("Ana")
            .group(PatientGroup::Comorbid)
            .vaccinated(MODERNA_VAC, 1, 2)
            .build(),
    ]);

    let report = CampaignReporter::new().build(&queue, &catalog, &batches).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_patients"], 1);
    assert_eq!(json["fully_vaccinated"], 1);
    assert_eq!(json["by_technology"][0]["technology"], "MESSENGER_RNA");
    assert_eq!(json["by_lot"][0]["patients"], 1);
    assert_eq!(json["by_lot"][0]["remaining"], 3);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_empty_campaign_report() {
    let catalog = VaccineCatalog::standard();
    let batches = batch_list(&[]);
    let queue = queue_of(Vec::new());

    let report = CampaignReporter::new().build(&queue, &catalog, &batches).unwrap();
    assert_eq!(report.total_patients, 0);
    assert!(report.by_lot.is_empty());
    assert!(report.by_vaccine.iter().all(|c| c.patients == 0));
    assert_eq!(report.by_technology.len(), 4);
}
