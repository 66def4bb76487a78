// ==========================================
// 神秘圣诞老人 - 应用层
// ==========================================
// 职责: 组合导入 / 引擎 / 导出,集中处理失败
// ==========================================

pub mod error;
pub mod secret_santa_app;

pub use error::{AppError, AppResult};
pub use secret_santa_app::{RunSummary, SecretSantaApp};
