// ==========================================
// 神秘圣诞老人 - 运行配置
// ==========================================
// 职责: 三个路径（名单 / 历史 / 输出）
// 来源: 位置参数，缺省按当前年份生成默认文件名
// ==========================================

use chrono::{Datelike, Local};
use std::path::PathBuf;

/// 默认文件目录
pub const DEFAULT_DATA_DIR: &str = "files";

/// 默认名单文件
pub const DEFAULT_ROSTER_FILE: &str = "Employee-List.xlsx";

/// 运行配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 名单文件（Employee_Name, Employee_EmailID）
    pub roster_path: PathBuf,
    /// 上一轮结果文件（Employee_Name, Secret_Child_Name）
    pub history_path: PathBuf,
    /// 本轮输出文件
    pub output_path: PathBuf,
}

impl AppConfig {
    pub fn new(
        roster_path: impl Into<PathBuf>,
        history_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            roster_path: roster_path.into(),
            history_path: history_path.into(),
            output_path: output_path.into(),
        }
    }

    /// 指定年份的默认配置
    ///
    /// - 名单: files/Employee-List.xlsx
    /// - 历史: files/Secret-Santa-Game-Result-{year-1}.xlsx
    /// - 输出: files/Secret-Santa-Assignments-{year}.csv
    pub fn for_year(year: i32) -> Self {
        let dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            roster_path: dir.join(DEFAULT_ROSTER_FILE),
            history_path: dir.join(format!("Secret-Santa-Game-Result-{}.xlsx", year - 1)),
            output_path: dir.join(format!("Secret-Santa-Assignments-{}.csv", year)),
        }
    }

    /// 从位置参数读取（不含程序名）
    ///
    /// 用法: secret-santa [roster_path] [history_path] [output_path]
    ///
    /// 缺省的参数按当前年份取默认值，多余参数忽略。
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_args_for_year(args, Local::now().year())
    }

    pub fn from_args_for_year<I, S>(args: I, year: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let defaults = Self::for_year(year);
        let mut args = args
            .into_iter()
            .map(|arg| {
                let arg: String = arg.into();
                arg.trim().to_string()
            })
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            roster_path: args.next().unwrap_or(defaults.roster_path),
            history_path: args.next().unwrap_or(defaults.history_path),
            output_path: args.next().unwrap_or(defaults.output_path),
        }
    }
}
