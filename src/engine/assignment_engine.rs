// ==========================================
// 神秘圣诞老人 - 分配引擎
// ==========================================
// 职责: 贪心随机匹配,生成满足约束的完整双射
// 约束: 不分配给自己 / 不重复上一轮的对象
// 红线: 按输入顺序逐个处理,不回溯;任一参与者候选为空即整轮失败
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::participant::{History, Participant};
use crate::engine::eligibility::eligible_recipients;
use crate::engine::error::{AssignmentError, AssignmentResult};
use crate::engine::random_source::RandomSource;
use tracing::{debug, error, info, instrument};

// ==========================================
// AssignmentEngine - 分配引擎
// ==========================================
pub struct AssignmentEngine;

impl AssignmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// 执行一轮分配
    ///
    /// # 流程
    /// 1. 候选池初始化为全部参与者
    /// 2. 按输入顺序处理每个参与者:
    ///    候选 = 候选池 - 自己 - 上一轮对象;
    ///    候选为空 → `AssignmentError::Impossible`;
    ///    否则均匀随机抽取一个,并从候选池移除
    /// 3. 全部处理完后候选池为空,返回完整分配
    ///
    /// # 说明
    /// - 贪心过程可能在存在合法解时失败,调用方可整体重跑
    /// - 失败时不返回任何部分结果
    #[instrument(skip_all, fields(participants = participants.len(), history = history.len()))]
    pub fn assign<S: RandomSource + ?Sized>(
        &self,
        mut participants: Vec<Participant>,
        history: &History,
        rng: &mut S,
    ) -> AssignmentResult<Assignment> {
        let mut pool: Vec<usize> = (0..participants.len()).collect();

        for giver in 0..participants.len() {
            let eligible = eligible_recipients(&participants, &pool, giver, history);

            if eligible.is_empty() {
                let name = participants[giver].name().to_string();
                error!(participant = %name, remaining = pool.len(), "候选集合为空，分配失败");
                return Err(AssignmentError::Impossible { participant: name });
            }

            let chosen = eligible[rng.pick_index(eligible.len())];
            debug!(
                giver = %participants[giver].name(),
                eligible = eligible.len(),
                recipient = %participants[chosen].name(),
                "已抽取对象"
            );

            participants[giver].assign_recipient(chosen);
            pool.retain(|&idx| idx != chosen);
        }

        debug_assert!(pool.is_empty());
        info!(count = participants.len(), "分配完成");

        Ok(Assignment::from_assigned(participants))
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
