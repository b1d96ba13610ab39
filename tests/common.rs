#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use frontdesk::forms::{CompanyForm, DeliveryForm, VisitorForm};
use frontdesk::models::DeliveryType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fd() -> Command {
    cargo_bin_cmd!("frontdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frontdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI (no config file is written in test mode)
pub fn init_db(db_path: &str) {
    fd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn at(h: u32, m: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 16, h, m, 0).unwrap()
}

pub fn visitor_form(name: &str, host: &str, floor: &str) -> VisitorForm {
    VisitorForm {
        name: name.to_string(),
        host: host.to_string(),
        floor: floor.to_string(),
        purpose: "Họp".to_string(),
        ..VisitorForm::default()
    }
}

pub fn delivery_form(recipient: &str, kind: DeliveryType) -> DeliveryForm {
    DeliveryForm {
        recipient: recipient.to_string(),
        kind,
        ..DeliveryForm::default()
    }
}

pub fn company_form(name: &str, floor: &str) -> CompanyForm {
    CompanyForm {
        name: name.to_string(),
        floor: floor.to_string(),
        ..CompanyForm::default()
    }
}
