// ==========================================
// 神秘圣诞老人 - 命令行入口
// ==========================================
// 用法:
//   secret-santa [roster_path] [history_path] [output_path]
//
// 缺省路径: files/Employee-List.xlsx
//           files/Secret-Santa-Game-Result-{去年}.xlsx
//           files/Secret-Santa-Assignments-{今年}.csv
// ==========================================

use secret_santa::i18n::t_with_args;
use secret_santa::{logging, AppConfig, SecretSantaApp};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("{} v{}", secret_santa::APP_NAME, secret_santa::VERSION);

    let config = AppConfig::from_args(std::env::args().skip(1));
    tracing::info!(
        roster = %config.roster_path.display(),
        history = %config.history_path.display(),
        output = %config.output_path.display(),
        "运行配置"
    );

    match SecretSantaApp::new(config).run() {
        Ok(summary) => {
            println!(
                "{}",
                t_with_args(
                    "write.saved",
                    &[
                        ("path", summary.output_path.display().to_string().as_str()),
                        ("count", summary.rows_written.to_string().as_str()),
                    ],
                )
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
