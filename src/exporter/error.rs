// ==========================================
// 神秘圣诞老人 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("目标目录不存在: {0}")]
    DirectoryNotFound(String),

    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("结果文件落盘失败: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result 类型别名
pub type WriteResult<T> = Result<T, WriteError>;
