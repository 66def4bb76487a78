// ==========================================
// 神秘圣诞老人 - 记录加载器
// ==========================================
// 流程: 文件解析 → 字段映射 → 数据质量校验
// 红线: 无内部状态,以自由函数形式提供
// ==========================================

use crate::domain::participant::{History, Participant};
use crate::importer::dq_validator::DqValidator;
use crate::importer::error::LoadResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{FileParser, UniversalFileParser};
use std::path::Path;
use tracing::{debug, info, instrument};

/// 加载名单，按源文件顺序返回参与者
///
/// # 错误
/// - 文件不存在 / 格式不支持 / 解析失败
/// - 缺少 Employee_Name 或 Employee_EmailID 列
/// - 名单为空、名字为空或重复
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_roster(path: &Path) -> LoadResult<Vec<Participant>> {
    let table = UniversalFileParser.parse_table(path)?;
    debug!(rows = table.rows.len(), "名单文件解析完成");

    let records = FieldMapper.map_roster(&table)?;
    DqValidator.validate_roster(&records)?;

    let participants: Vec<Participant> = records.into_iter().map(Participant::from).collect();
    info!(count = participants.len(), "名单加载完成");

    Ok(participants)
}

/// 加载上一轮分配历史
///
/// 表头存在但无数据行时返回空 History。
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_history(path: &Path) -> LoadResult<History> {
    let table = UniversalFileParser.parse_table(path)?;
    debug!(rows = table.rows.len(), "历史文件解析完成");

    let entries = FieldMapper.map_history(&table)?;
    let history = DqValidator.build_history(entries);
    info!(count = history.len(), "历史记录加载完成");

    Ok(history)
}
