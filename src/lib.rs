// ==========================================
// 神秘圣诞老人 - 核心库
// ==========================================
// 输入: 名单文件 + 上一轮结果文件
// 输出: 本轮分配结果 CSV
// 约束: 不分配给自己 / 不重复上一轮对象 / 整体为双射
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 参与者 / 历史 / 分配结果
pub mod domain;

// 导入层 - 名单与历史文件
pub mod importer;

// 引擎层 - 分配算法
pub mod engine;

// 导出层 - 结果文件
pub mod exporter;

// 配置层 - 文件路径
pub mod config;

// 应用层 - 流程编排
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{AppError, AppResult, RunSummary, SecretSantaApp};
pub use config::AppConfig;
pub use domain::{Assignment, AssignmentRow, History, Participant};
pub use engine::{AssignmentEngine, AssignmentError, RandomSource};
pub use exporter::WriteError;
pub use importer::LoadError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "神秘圣诞老人分配工具";
