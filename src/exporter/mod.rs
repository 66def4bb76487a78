// ==========================================
// 神秘圣诞老人 - 导出层
// ==========================================
// 职责: 完整分配 → 平面分隔文件
// ==========================================

pub mod csv_writer;
pub mod error;

pub use csv_writer::write_assignments;
pub use error::{WriteError, WriteResult};
