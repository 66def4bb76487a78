// ==========================================
// 导入层集成测试
// ==========================================
// 覆盖: 真实导出格式（BOM、多余列、空白、空行）下的名单与历史加载
//       以及 xlsx 工作簿（去空白、跳过空行、工作表行号）

use secret_santa::importer::{load_history, load_roster, FileParser, UniversalFileParser};
use secret_santa::LoadError;

use test_helpers::Workspace;

#[test]
fn test_roster_with_bom_extra_columns_and_blank_lines() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_raw(
            "roster.csv",
            "\u{feff}No,Employee_Name,Employee_EmailID,Dept\n\
             1, Alice ,alice@example.com,R&D\n\
             ,,,\n\
             2,Bob, bob@example.com ,Ops\n",
        )
        .unwrap();

    let participants = load_roster(&path).unwrap();

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].name(), "Alice");
    assert_eq!(participants[1].email(), "bob@example.com");
}

#[test]
fn test_roster_duplicate_name_reports_row() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_raw(
            "roster.csv",
            "Employee_Name,Employee_EmailID\nAlice,a@x\nBob,b@x\nAlice,a2@x\n",
        )
        .unwrap();

    let err = load_roster(&path).unwrap_err();

    match err {
        LoadError::DuplicateParticipant { row, name } => {
            assert_eq!(row, 4);
            assert_eq!(name, "Alice");
        }
        other => panic!("期望 DuplicateParticipant，实际 {:?}", other),
    }
}

#[test]
fn test_history_from_previous_output_file() {
    // 上一轮的输出文件可直接作为本轮历史
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_history("history.csv", &[("Alice", "Bob"), ("Bob", "Alice")])
        .unwrap();

    let history = load_history(&path).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.previous_recipient("Alice"), Some("Bob"));
    assert_eq!(history.previous_recipient("Bob"), Some("Alice"));
}

#[test]
fn test_history_incomplete_rows_are_skipped() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_raw(
            "history.csv",
            "Employee_Name,Secret_Child_Name\nAlice,Bob\nBob,\n,Charlie\nCharlie,Alice\n",
        )
        .unwrap();

    let history = load_history(&path).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.previous_recipient("Bob"), None);
    assert_eq!(history.previous_recipient("Charlie"), Some("Alice"));
}

#[test]
fn test_history_missing_child_column() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_raw("history.csv", "Employee_Name,Employee_EmailID\nAlice,a@x\n")
        .unwrap();

    let err = load_history(&path).unwrap_err();

    assert!(matches!(err, LoadError::MissingColumn { column } if column == "Secret_Child_Name"));
}

#[test]
fn test_unsupported_extension() {
    let ws = Workspace::new().unwrap();
    let path = ws.write_raw("roster.json", "[]").unwrap();

    let err = load_roster(&path).unwrap_err();

    assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "json"));
}

// ==========================================
// xlsx 工作簿
// ==========================================

#[test]
fn test_roster_from_xlsx() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_xlsx(
            "roster.xlsx",
            &[
                &["Employee_Name", "Employee_EmailID", "Dept"],
                &[" Alice ", " alice@example.com ", "R&D"],
                &[],
                &["Bob", "bob@example.com", "Ops"],
            ],
        )
        .unwrap();

    let participants = load_roster(&path).unwrap();

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].name(), "Alice");
    assert_eq!(participants[0].email(), "alice@example.com");
    assert_eq!(participants[1].name(), "Bob");
    assert!(participants.iter().all(|p| p.recipient().is_none()));

    // 空行被跳过，行号仍为工作表行号（表头为第 1 行）
    let table = UniversalFileParser.parse_table(&path).unwrap();
    let row_numbers: Vec<usize> = table.rows.iter().map(|r| r.row_number).collect();
    assert_eq!(row_numbers, vec![2, 4]);
}

#[test]
fn test_roster_xlsx_duplicate_reports_sheet_row() {
    // 表头位于第 3 行，数据区不从 A1 开始
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_xlsx(
            "roster.xlsx",
            &[
                &[],
                &[],
                &["Employee_Name", "Employee_EmailID"],
                &["Alice", "a@x"],
                &[],
                &["Alice ", "a2@x"],
            ],
        )
        .unwrap();

    let err = load_roster(&path).unwrap_err();

    match err {
        LoadError::DuplicateParticipant { row, name } => {
            assert_eq!(row, 6);
            assert_eq!(name, "Alice");
        }
        other => panic!("期望 DuplicateParticipant，实际 {:?}", other),
    }
}

#[test]
fn test_history_from_xlsx() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_xlsx(
            "history.xlsx",
            &[
                &[
                    "Employee_Name",
                    "Employee_EmailID",
                    "Secret_Child_Name",
                    "Secret_Child_EmailID",
                ],
                &["Alice", "a@x", "Bob", "b@x"],
                &[],
                &[" Bob", "b@x", "Charlie ", "c@x"],
                &["Charlie", "c@x", "Alice", "a@x"],
            ],
        )
        .unwrap();

    let history = load_history(&path).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.previous_recipient("Alice"), Some("Bob"));
    assert_eq!(history.previous_recipient("Bob"), Some("Charlie"));
    assert_eq!(history.previous_recipient("Charlie"), Some("Alice"));
}
