// ==========================================
// 神秘圣诞老人 - 参与者与历史记录
// ==========================================
// 职责: 定义参与者实体、名单记录、上一轮历史映射
// 红线: 不含文件读取逻辑,不含分配逻辑
// ==========================================

use std::collections::HashMap;

// ==========================================
// Participant - 参与者
// ==========================================
/// 参与者（名单中的一行）
///
/// 名字在同一名单内唯一，作为参与者标识。
/// 加载后除 `recipient` 外不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    email: String,
    /// 本轮分配到的对象，指向同一集合内的下标（非拥有引用）
    recipient: Option<usize>,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            recipient: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// 本轮分配对象在所属集合中的下标
    pub fn recipient(&self) -> Option<usize> {
        self.recipient
    }

    pub(crate) fn assign_recipient(&mut self, index: usize) {
        self.recipient = Some(index);
    }
}

// ==========================================
// RosterRecord - 名单原始记录
// ==========================================
/// 名单文件映射后的记录（Employee_Name, Employee_EmailID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub name: String,
    pub email: String,
    /// 源文件行号（表头为第 1 行）
    pub row_number: usize,
}

impl From<RosterRecord> for Participant {
    fn from(record: RosterRecord) -> Self {
        Participant::new(record.name, record.email)
    }
}

// ==========================================
// HistoryEntry - 历史分配记录
// ==========================================
/// 历史文件映射后的记录（Employee_Name, Secret_Child_Name）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub previous_recipient: String,
    pub row_number: usize,
}

// ==========================================
// History - 上一轮分配映射
// ==========================================
/// 上一轮分配: 参与者名字 → 上一轮对象名字
///
/// 可以为空或只覆盖部分参与者，缺失条目不构成约束。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    previous: HashMap<String, String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条历史分配，返回被覆盖的旧值（同名多行时后者生效）
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        previous_recipient: impl Into<String>,
    ) -> Option<String> {
        self.previous.insert(name.into(), previous_recipient.into())
    }

    /// 查询某参与者上一轮的对象
    pub fn previous_recipient(&self, name: &str) -> Option<&str> {
        self.previous.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

impl<N: Into<String>, R: Into<String>> FromIterator<(N, R)> for History {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        let mut history = History::new();
        for (name, previous_recipient) in iter {
            history.insert(name, previous_recipient);
        }
        history
    }
}
