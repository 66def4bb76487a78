// ==========================================
// 神秘圣诞老人 - CSV 结果写出
// ==========================================
// 职责: 完整分配 → CSV（每个参与者一行,保持输入顺序）
// 红线: 先写临时文件,全部成功后再替换目标文件,不留半成品
// ==========================================

use crate::domain::assignment::Assignment;
use crate::exporter::error::{WriteError, WriteResult};
use csv::WriterBuilder;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// 写出分配结果，返回写出的行数
///
/// # 列
/// Employee_Name, Employee_EmailID, Secret_Child_Name, Secret_Child_EmailID
///
/// # 错误
/// - 目标目录不存在
/// - 写入 / 落盘失败（目标文件保持原状）
#[instrument(skip_all, fields(path = %output_path.display()))]
pub fn write_assignments(assignment: &Assignment, output_path: &Path) -> WriteResult<usize> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(WriteError::DirectoryNotFound(dir.display().to_string()));
    }

    let temp_file = NamedTempFile::new_in(dir)?;
    debug!(temp = %temp_file.path().display(), "临时文件已创建");

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(temp_file);

    let rows = assignment.rows();
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let temp_file = writer
        .into_inner()
        .map_err(|e| WriteError::Io(e.into_error()))?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(output_path)?;

    info!(rows = rows.len(), "分配结果已写出");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::AssignmentRow;
    use crate::domain::participant::{History, Participant};
    use crate::engine::AssignmentEngine;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn sample_assignment() -> Assignment {
        let history: History = [("Alice", "Bob"), ("Bob", "Charlie"), ("Charlie", "Alice")]
            .into_iter()
            .collect();
        let participants = vec![
            Participant::new("Alice", "alice@example.com"),
            Participant::new("Bob", "bob@example.com"),
            Participant::new("Charlie", "charlie@example.com"),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        AssignmentEngine::new()
            .assign(participants, &history, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_write_assignments_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let written = write_assignments(&sample_assignment(), &path).unwrap();

        assert_eq!(written, 3);
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID")
        );
        assert_eq!(lines.next(), Some("Alice,alice@example.com,Charlie,charlie@example.com"));
        assert_eq!(lines.next(), Some("Bob,bob@example.com,Alice,alice@example.com"));
        assert_eq!(lines.next(), Some("Charlie,charlie@example.com,Bob,bob@example.com"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_written_rows_deserialize_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let assignment = sample_assignment();

        write_assignments(&assignment, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<AssignmentRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, assignment.rows());
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale").unwrap();

        write_assignments(&sample_assignment(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Employee_Name"));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_assignments(&sample_assignment(), &path).unwrap_err();

        assert!(matches!(err, WriteError::DirectoryNotFound(_)));
        assert!(!path.exists());
    }
}
