// ==========================================
// 神秘圣诞老人 - 应用层错误类型
// ==========================================
// 职责: 汇总各层错误,附带文件路径,生成用户提示
// ==========================================

use crate::engine::error::AssignmentError;
use crate::exporter::error::WriteError;
use crate::i18n::t_with_args;
use crate::importer::error::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 名单或历史文件无法读取 / 解析
    #[error("数据加载失败 ({}): {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// 贪心分配走入死路
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// 结果文件写出失败
    #[error("结果写出失败 ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

impl AppError {
    /// 当前语言下的用户提示
    pub fn user_message(&self) -> String {
        match self {
            AppError::Load { path, source } => t_with_args(
                "load.failed",
                &[
                    ("path", path.display().to_string().as_str()),
                    ("reason", source.to_string().as_str()),
                ],
            ),
            AppError::Assignment(AssignmentError::Impossible { participant }) => {
                t_with_args("assign.impossible", &[("name", participant.as_str())])
            }
            AppError::Write { path, source } => t_with_args(
                "write.failed",
                &[
                    ("path", path.display().to_string().as_str()),
                    ("reason", source.to_string().as_str()),
                ],
            ),
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
