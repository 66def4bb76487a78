// ==========================================
// 神秘圣诞老人 - 数据质量校验器实现
// ==========================================
// 职责: 名单校验（主键非空且唯一）+ 历史清洗
// ==========================================

use crate::domain::participant::{History, HistoryEntry, RosterRecord};
use crate::importer::error::{LoadError, LoadResult};
use crate::importer::field_mapper::columns;
use std::collections::HashSet;
use tracing::warn;

pub struct DqValidator;

impl DqValidator {
    /// 校验名单
    ///
    /// # 规则
    /// - 名单不能为空
    /// - Employee_Name 非空（错误）
    /// - Employee_Name 唯一（错误，名字即参与者标识）
    /// - Employee_EmailID 为空（警告，不阻断）
    pub fn validate_roster(&self, records: &[RosterRecord]) -> LoadResult<()> {
        if records.is_empty() {
            return Err(LoadError::EmptyRoster);
        }

        let mut seen_names = HashSet::new();

        for record in records {
            if record.name.is_empty() {
                return Err(LoadError::EmptyField {
                    row: record.row_number,
                    column: columns::EMPLOYEE_NAME.to_string(),
                });
            }

            if !seen_names.insert(record.name.as_str()) {
                return Err(LoadError::DuplicateParticipant {
                    row: record.row_number,
                    name: record.name.clone(),
                });
            }

            if record.email.is_empty() {
                warn!(row = record.row_number, name = %record.name, "参与者邮箱为空");
            }
        }

        Ok(())
    }

    /// 历史记录 → History
    ///
    /// # 规则
    /// - 名字或上一轮对象为空的行跳过（警告）
    /// - 同名多行时后者覆盖前者（警告）
    pub fn build_history(&self, entries: Vec<HistoryEntry>) -> History {
        let mut history = History::new();

        for entry in entries {
            if entry.name.is_empty() || entry.previous_recipient.is_empty() {
                warn!(row = entry.row_number, "历史记录不完整，已跳过");
                continue;
            }

            let row = entry.row_number;
            if let Some(replaced) = history.insert(entry.name.clone(), entry.previous_recipient) {
                warn!(
                    row,
                    name = %entry.name,
                    replaced = %replaced,
                    "历史记录重复，以后出现的行为准"
                );
            }
        }

        history
    }
}
