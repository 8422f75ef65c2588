//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging and the store the way a presentation layer would.
//! - Drive one scripted session and print the dashboard summary as stable
//!   `key=value` lines.

use log::info;
use profile_core::{
    core_version, init_from_config, AppStore, DashboardSummary, EntryForm, ProfileField,
    ProfileForm, WizardConfig, ONGOING_END_DATE, SERVICE_A_ID,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("profile_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = WizardConfig::from_env()?;
    let logging = init_from_config(&config)?;
    info!(
        "event=cli_start module=cli status=ok max_entries={} logging={}",
        config.max_entries, logging
    );

    let store = AppStore::from_config(&config);
    let mut profile = ProfileForm::from_state(&store.get_state());
    profile.set_field(ProfileField::Name, "山田 太郎")?;
    profile.set_field(ProfileField::Address, "〒150-0001 東京都渋谷区神宮前1-1-1")?;
    profile.set_field(ProfileField::Phone, "090-1234-5678")?;

    let mut educations = EntryForm::educations(config.max_entries);
    educations.set_field("schoolName", "○○大学")?;
    educations.set_field("startDate", "2016-04")?;
    educations.set_field("endDate", "2020-03")?;
    let list = educations.add(&profile.draft().educations)?;
    profile.set_educations(list);

    let mut work = EntryForm::work_histories(config.max_entries);
    work.set_field("companyName", "株式会社サンプル")?;
    work.set_field("department", "開発部")?;
    work.set_field("position", "エンジニア")?;
    work.set_field("startDate", "2020-04")?;
    work.set_field("endDate", ONGOING_END_DATE)?;
    let list = work.add(&profile.draft().work_histories)?;
    profile.set_work_histories(list);

    let mut qualifications = EntryForm::qualifications(config.max_entries);
    qualifications.set_field("qualificationName", "普通自動車第一種運転免許")?;
    qualifications.set_field("acquisitionDate", "2016-08")?;
    let list = qualifications.add(&profile.draft().qualifications)?;
    profile.set_qualifications(list);

    for warning in profile.warnings() {
        println!("warning={warning}");
    }
    profile.submit(&store)?;
    store.toggle_service(SERVICE_A_ID);

    let summary = DashboardSummary::from_state(&store.get_state(), store.max_entries());
    println!("profile_core version={}", core_version());
    println!("completion_percentage={}", summary.completion_percentage);
    println!("total_history_count={}", summary.total_history_count);
    println!("connection_rate={}", summary.connection_rate);
    println!(
        "educations={}/{}",
        summary.educations.count, summary.educations.max_entries
    );
    println!(
        "work_histories={}/{}",
        summary.work_histories.count, summary.work_histories.max_entries
    );
    println!(
        "qualifications={}/{}",
        summary.qualifications.count, summary.qualifications.max_entries
    );
    for service in &summary.connected_services {
        println!("connected_service={}", service.id);
    }
    Ok(())
}
