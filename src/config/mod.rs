// ==========================================
// 神秘圣诞老人 - 配置层
// ==========================================
// 职责: 运行所需的三个文件路径
// ==========================================

pub mod app_config;

pub use app_config::{AppConfig, DEFAULT_DATA_DIR, DEFAULT_ROSTER_FILE};
