// ==========================================
// 神秘圣诞老人 - 文件解析器实现
// ==========================================
// 职责: 文件读取与解析 → 表头 + 行记录
// 支持: Excel (.xlsx/.xls/.xlsm/.ods) / CSV (.csv)
// ==========================================

use crate::importer::error::{LoadError, LoadResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - 解析结果
// ==========================================
/// 原始行记录（列名 → 已 TRIM 的单元格文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 源文件行号（表头为第 1 行）
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

impl RawRow {
    /// 读取单元格，列不存在时返回空串
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

/// 解析后的表格：表头 + 非空数据行（保持源顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// 由表头 + (行号, 行单元格) 构造，跳过完全空白的行
    fn from_cells<I, R, S>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (usize, R)>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = RawTable {
            headers,
            rows: Vec::new(),
        };

        for (row_number, cells) in rows {
            let mut values = HashMap::new();
            for (col_idx, cell) in cells.into_iter().enumerate() {
                if let Some(header) = table.headers.get(col_idx) {
                    values.insert(header.clone(), cell.as_ref().trim().to_string());
                }
            }

            // 跳过完全空白的行
            if values.values().all(|v| v.is_empty()) {
                continue;
            }

            table.rows.push(RawRow { row_number, values });
        }

        table
    }
}

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

// ==========================================
// FileParser Trait
// ==========================================
/// 文件解析接口
pub trait FileParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable>;
}

fn ensure_exists(path: &Path) -> LoadResult<()> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(LoadError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(idx + 2);
            rows.push((row_number, record.iter().map(str::to_string).collect::<Vec<_>>()));
        }

        Ok(RawTable::from_cells(headers, rows))
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
/// 读取第一个工作表，首行为表头
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !matches!(ext.as_str(), "xlsx" | "xls" | "xlsm" | "ods") {
            return Err(LoadError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| LoadError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        // 区域可能不从 A1 开始，行号按工作表绝对位置计算
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| LoadError::ExcelParseError("Excel 文件无表头行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect();

        let data: Vec<(usize, Vec<String>)> = rows
            .enumerate()
            .map(|(idx, row)| {
                let cells = row.iter().map(|cell| cell.to_string()).collect();
                (first_row + idx + 2, cells)
            })
            .collect();

        Ok(RawTable::from_cells(headers, data))
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_table(file_path),
            "xlsx" | "xls" | "xlsm" | "ods" => ExcelParser.parse_table(file_path),
            other => {
                ensure_exists(file_path)?;
                Err(LoadError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}
