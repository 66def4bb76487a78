// ==========================================
// 神秘圣诞老人 - 引擎层错误类型
// ==========================================

use thiserror::Error;

/// 分配引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// 贪心过程中某参与者已无任何候选对象（不回溯、不重试）
    #[error("无法为 {participant} 分配对象：候选集合为空")]
    Impossible { participant: String },
}

/// Result 类型别名
pub type AssignmentResult<T> = Result<T, AssignmentError>;
