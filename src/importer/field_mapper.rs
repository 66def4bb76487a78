// ==========================================
// 神秘圣诞老人 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 名单记录 / 历史记录
// 列名: Employee_Name / Employee_EmailID / Secret_Child_Name
// ==========================================

use crate::domain::participant::{HistoryEntry, RosterRecord};
use crate::importer::error::{LoadError, LoadResult};
use crate::importer::file_parser::RawTable;

/// 标准列名
pub mod columns {
    pub const EMPLOYEE_NAME: &str = "Employee_Name";
    pub const EMPLOYEE_EMAIL: &str = "Employee_EmailID";
    pub const SECRET_CHILD_NAME: &str = "Secret_Child_Name";
    pub const SECRET_CHILD_EMAIL: &str = "Secret_Child_EmailID";
}

/// 名单必需列
pub const ROSTER_COLUMNS: [&str; 2] = [columns::EMPLOYEE_NAME, columns::EMPLOYEE_EMAIL];

/// 历史必需列
pub const HISTORY_COLUMNS: [&str; 2] = [columns::EMPLOYEE_NAME, columns::SECRET_CHILD_NAME];

pub struct FieldMapper;

impl FieldMapper {
    /// 校验必需列存在（多余列忽略）
    pub fn require_columns(&self, table: &RawTable, required: &[&str]) -> LoadResult<()> {
        match required.iter().find(|column| !table.has_column(column)) {
            Some(column) => Err(LoadError::MissingColumn {
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// 映射名单行，保持源顺序
    pub fn map_roster(&self, table: &RawTable) -> LoadResult<Vec<RosterRecord>> {
        self.require_columns(table, &ROSTER_COLUMNS)?;

        Ok(table
            .rows
            .iter()
            .map(|row| RosterRecord {
                name: row.get(columns::EMPLOYEE_NAME).to_string(),
                email: row.get(columns::EMPLOYEE_EMAIL).to_string(),
                row_number: row.row_number,
            })
            .collect())
    }

    /// 映射历史行，保持源顺序
    pub fn map_history(&self, table: &RawTable) -> LoadResult<Vec<HistoryEntry>> {
        self.require_columns(table, &HISTORY_COLUMNS)?;

        Ok(table
            .rows
            .iter()
            .map(|row| HistoryEntry {
                name: row.get(columns::EMPLOYEE_NAME).to_string(),
                previous_recipient: row.get(columns::SECRET_CHILD_NAME).to_string(),
                row_number: row.row_number,
            })
            .collect())
    }
}
