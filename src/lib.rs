//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod industry_db;
pub mod scenario;
pub mod tco;
pub mod ui_cli;
pub mod vendor_db;
