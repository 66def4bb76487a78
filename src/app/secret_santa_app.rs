// ==========================================
// 神秘圣诞老人 - 应用编排
// ==========================================
// 流程: 加载名单 → 加载历史 → 分配 → 写出
// 红线: 任一步失败立即终止,失败时不产生输出文件
// ==========================================

use crate::app::error::{AppError, AppResult};
use crate::config::AppConfig;
use crate::domain::assignment::Assignment;
use crate::engine::{AssignmentEngine, RandomSource};
use crate::exporter::write_assignments;
use crate::importer::{load_history, load_roster};
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// 一次成功运行的摘要
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub assignment: Assignment,
    pub output_path: PathBuf,
    pub rows_written: usize,
}

pub struct SecretSantaApp {
    config: AppConfig,
    engine: AssignmentEngine,
}

impl SecretSantaApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: AssignmentEngine::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 使用线程随机源运行一轮
    pub fn run(&self) -> AppResult<RunSummary> {
        self.run_with(&mut rand::thread_rng())
    }

    /// 使用指定随机源运行一轮
    #[instrument(skip_all, fields(
        roster = %self.config.roster_path.display(),
        history = %self.config.history_path.display(),
        output = %self.config.output_path.display()
    ))]
    pub fn run_with<S: RandomSource + ?Sized>(&self, rng: &mut S) -> AppResult<RunSummary> {
        let result = self.execute(rng);
        if let Err(e) = &result {
            error!(error = %e, "运行终止");
        }
        result
    }

    fn execute<S: RandomSource + ?Sized>(&self, rng: &mut S) -> AppResult<RunSummary> {
        let config = &self.config;

        // 两个输入都加载成功后才开始分配
        let participants = load_roster(&config.roster_path).map_err(|source| AppError::Load {
            path: config.roster_path.clone(),
            source,
        })?;
        let history = load_history(&config.history_path).map_err(|source| AppError::Load {
            path: config.history_path.clone(),
            source,
        })?;

        let assignment = self.engine.assign(participants, &history, rng)?;

        let rows_written =
            write_assignments(&assignment, &config.output_path).map_err(|source| {
                AppError::Write {
                    path: config.output_path.clone(),
                    source,
                }
            })?;

        info!(rows = rows_written, "本轮分配已完成");

        Ok(RunSummary {
            assignment,
            output_path: config.output_path.clone(),
            rows_written,
        })
    }
}
