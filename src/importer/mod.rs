// ==========================================
// 神秘圣诞老人 - 导入层
// ==========================================
// 职责: 名单 / 历史文件 → 有序记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_loader;

// 重导出核心类型
pub use dq_validator::DqValidator;
pub use error::{LoadError, LoadResult};
pub use field_mapper::{columns, FieldMapper};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, RawTable, UniversalFileParser};
pub use record_loader::{load_history, load_roster};
