use std::path::PathBuf;

use advanced_calculator::app::{self, AppContext, Command};
use advanced_calculator::{config, i18n, logging};
use clap::Parser;

/// 과학 함수와 단위 변환을 지원하는 터미널 공학용 계산기
#[derive(Debug, Parser)]
#[command(name = "advanced_calculator", version, about)]
struct Cli {
    /// 언어 코드 (en/ro/es/fr/de, auto)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 기록/통계 파일 디렉터리 (설정 값보다 우선)
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default_at(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        cfg.data_dir = dir;
    }
    if let Err(e) = logging::init_logging(&cfg.log_level, &cfg.log_dir) {
        eprintln!("logging disabled: {e}");
    }

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let translator = i18n::Translator::new_with_pack(&lang, None);
    let mut ctx = AppContext::open(cfg, &cli.config, translator);

    match cli.command {
        Some(command) => app::run_command(&mut ctx, command)?,
        None => app::run(&mut ctx)?,
    }
    Ok(())
}
