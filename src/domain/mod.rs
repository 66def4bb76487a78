// ==========================================
// 神秘圣诞老人 - 领域模型层
// ==========================================
// 职责: 定义参与者、历史、分配结果
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod participant;

// 重导出核心类型
pub use assignment::{Assignment, AssignmentRow};
pub use participant::{History, HistoryEntry, Participant, RosterRecord};
