// ==========================================
// 神秘圣诞老人 - 引擎层
// ==========================================
// 职责: 在参与者与历史之上生成新一轮分配
// 红线: 引擎不读写文件
// ==========================================

pub mod assignment_engine;
pub mod eligibility;
pub mod error;
pub mod random_source;

// 重导出核心引擎
pub use assignment_engine::AssignmentEngine;
pub use eligibility::eligible_recipients;
pub use error::{AssignmentError, AssignmentResult};
pub use random_source::RandomSource;
