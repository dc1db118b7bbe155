// ==========================================
// 疫苗接种运动 - 命令行入口
// ==========================================
// 用法: vaccine-campaign [配置文件路径]
// 输出: stdout 打印单日运行报告与运动报表 (JSON)
// ==========================================

use anyhow::Context;
use std::path::PathBuf;
use vaccine_campaign::config::{default_config_path, CampaignConfig};
use vaccine_campaign::engine::{CampaignReporter, VaccinationRun};
use vaccine_campaign::logging;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", vaccine_campaign::APP_NAME);
    tracing::info!("系统版本: {}", vaccine_campaign::VERSION);
    tracing::info!("==================================================");

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    tracing::info!("使用配置文件: {}", config_path.display());

    let config = CampaignConfig::from_file(&config_path)
        .with_context(|| format!("无法加载配置文件: {}", config_path.display()))?;

    let catalog = config.build_catalog().context("疫苗目录构建失败")?;
    let mut batches = config
        .build_batch_list(&catalog)
        .context("批次列表构建失败")?;
    let mut queue = config.build_patient_queue().context("患者队列构建失败")?;

    let mut run = VaccinationRun::new(config.run.clone());
    let day = run
        .run_day(&mut queue, &mut batches)
        .context("单日接种流程失败")?;

    // 报表覆盖仍在等待的患者与已完成的患者
    let mut all_patients = queue.duplicate().context("患者队列复制失败")?;
    all_patients.append(&mut run.take_completed());
    let campaign = CampaignReporter::new()
        .build(&all_patients, &catalog, &batches)
        .context("运动报表生成失败")?;

    let output = serde_json::json!({
        "run": day,
        "campaign": campaign,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
