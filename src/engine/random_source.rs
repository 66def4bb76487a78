// ==========================================
// 神秘圣诞老人 - 随机源
// ==========================================
// 职责: 抽签所用的随机源接口，由调用方注入
// ==========================================

use rand::Rng;

/// 随机源接口
///
/// 任何 `rand::Rng` 都可直接作为随机源使用（`thread_rng()`、`StdRng` 等）；
/// 测试可提供按脚本返回下标的实现。
pub trait RandomSource {
    /// 在 `[0, len)` 中均匀抽取一个下标，调用方保证 `len > 0`
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
