// ==========================================
// 神秘圣诞老人 - 分配结果
// ==========================================
// 职责: 完整分配（双射）及导出行结构
// 红线: Assignment 只由引擎在整轮成功后构造,不存在部分结果
// ==========================================

use crate::domain::participant::Participant;
use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 完整分配
// ==========================================
/// 一轮完整分配
///
/// 参与者按输入顺序保存，每个参与者的 `recipient` 均已赋值，
/// 且每个下标恰好作为对象出现一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    participants: Vec<Participant>,
}

impl Assignment {
    /// 由引擎在全部参与者都已分配后调用
    pub(crate) fn from_assigned(participants: Vec<Participant>) -> Self {
        debug_assert!(participants.iter().all(|p| p.recipient().is_some()));
        Self { participants }
    }

    /// 参与者（输入顺序）
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// (送礼人, 对象) 对，按输入顺序
    pub fn pairs(&self) -> impl Iterator<Item = (&Participant, &Participant)> + '_ {
        self.participants.iter().filter_map(move |giver| {
            giver
                .recipient()
                .and_then(|idx| self.participants.get(idx))
                .map(|recipient| (giver, recipient))
        })
    }

    /// 按名字查询对象
    pub fn recipient_of(&self, name: &str) -> Option<&Participant> {
        self.pairs()
            .find(|(giver, _)| giver.name() == name)
            .map(|(_, recipient)| recipient)
    }

    /// 导出行（输入顺序）
    pub fn rows(&self) -> Vec<AssignmentRow> {
        self.pairs()
            .map(|(giver, recipient)| AssignmentRow {
                employee_name: giver.name().to_string(),
                employee_email: giver.email().to_string(),
                secret_child_name: recipient.name().to_string(),
                secret_child_email: recipient.email().to_string(),
            })
            .collect()
    }
}

// ==========================================
// AssignmentRow - 导出行
// ==========================================
/// 输出文件中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    #[serde(rename = "Employee_Name")]
    pub employee_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub employee_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub secret_child_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub secret_child_email: String,
}
