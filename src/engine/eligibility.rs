// ==========================================
// 神秘圣诞老人 - 候选资格纯函数
// ==========================================
// 职责: 计算某参与者本轮的候选对象集合
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::participant::{History, Participant};

/// 候选对象下标（保持候选池顺序）
///
/// # 规则
/// - 候选池 = 尚未被分配为对象的参与者
/// - 排除送礼人自身
/// - 排除送礼人上一轮的对象（若历史中有记录）
///
/// # 参数
/// - participants: 全部参与者（输入顺序）
/// - pool: 候选池中参与者的下标
/// - giver: 送礼人下标
/// - history: 上一轮分配
pub fn eligible_recipients(
    participants: &[Participant],
    pool: &[usize],
    giver: usize,
    history: &History,
) -> Vec<usize> {
    let previous = participants
        .get(giver)
        .and_then(|p| history.previous_recipient(p.name()));

    pool.iter()
        .copied()
        .filter(|&candidate| candidate != giver)
        .filter(|&candidate| {
            previous.map_or(true, |prev| participants[candidate].name() != prev)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Participant> {
        ["Alice", "Bob", "Charlie"]
            .iter()
            .map(|n| Participant::new(*n, format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    #[test]
    fn test_excludes_self() {
        let eligible = eligible_recipients(&people(), &[0, 1, 2], 1, &History::new());
        assert_eq!(eligible, vec![0, 2]);
    }

    #[test]
    fn test_excludes_previous_recipient() {
        let history: History = [("Alice", "Bob")].into_iter().collect();
        let eligible = eligible_recipients(&people(), &[0, 1, 2], 0, &history);
        assert_eq!(eligible, vec![2]);
    }

    #[test]
    fn test_only_pool_members() {
        let eligible = eligible_recipients(&people(), &[2], 0, &History::new());
        assert_eq!(eligible, vec![2]);
    }

    #[test]
    fn test_history_naming_outsider_is_no_constraint() {
        let history: History = [("Alice", "Zed")].into_iter().collect();
        let eligible = eligible_recipients(&people(), &[0, 1, 2], 0, &history);
        assert_eq!(eligible, vec![1, 2]);
    }

    #[test]
    fn test_empty_when_everything_excluded() {
        let history: History = [("Alice", "Bob")].into_iter().collect();
        let eligible = eligible_recipients(&people(), &[0, 1], 0, &history);
        assert!(eligible.is_empty());
    }
}
