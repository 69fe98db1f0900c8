use std::path::{Path, PathBuf};

use clap::Subcommand;
use log::{info, warn};

use crate::config::{self, Config};
use crate::conversion;
use crate::expr::EvalError;
use crate::i18n::{self, keys, Translator};
use crate::ledger::{self, LedgerError};
use crate::session::{format_number, Session};
use crate::ui_cli::{self, MenuChoice};
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 수식 평가 오류
    Evaluation(EvalError),
    /// 기록/통계 저장 및 내보내기 오류
    Ledger(LedgerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "conversion failed: {e}"),
            AppError::Evaluation(e) => write!(f, "evaluation failed: {e}"),
            AppError::Ledger(e) => write!(f, "history storage error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<EvalError> for AppError {
    fn from(value: EvalError) -> Self {
        AppError::Evaluation(value)
    }
}

impl From<LedgerError> for AppError {
    fn from(value: LedgerError) -> Self {
        AppError::Ledger(value)
    }
}

/// 대화형 메뉴 없이 한 번만 실행하는 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 수식을 평가하고 결과를 기록한다
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// 값을 한 단위에서 다른 단위로 변환한다
    Convert {
        domain: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 도메인의 단위 목록을 보여준다
    Units { domain: String },
    /// 최근 기록을 보여주거나 지운다
    History {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        clear: bool,
    },
    /// 사용 통계를 보여준다
    Stats,
    /// 기록을 .csv 또는 텍스트 파일로 내보낸다
    Export { path: PathBuf },
}

/// 실행 중 공유되는 상태 묶음.
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub translator: Translator,
    pub session: Session,
}

impl AppContext {
    /// 설정에 지정된 데이터 디렉터리에서 기록을 읽어 컨텍스트를 만든다.
    pub fn open(config: Config, config_path: &Path, translator: Translator) -> Self {
        let session = Session::open(&config.ledger_paths());
        Self {
            config,
            config_path: config_path.to_path_buf(),
            translator,
            session,
        }
    }

    pub fn persist(&self) -> Result<(), AppError> {
        self.session
            .persist(&self.config.ledger_paths(), self.config.history_limit)?;
        Ok(())
    }

    /// 저장 실패는 경고만 남기고 계속 진행한다.
    pub fn persist_or_warn(&self) {
        if let Err(e) = self.persist() {
            warn!("event=persist status=error error={e}");
            eprintln!("{}: {e}", self.translator.t(keys::ERROR_TITLE));
        }
    }

    pub fn set_language(&mut self, code: &str) -> Result<(), AppError> {
        self.translator = Translator::new_with_pack(code, None);
        self.config.language = self.translator.language_code().to_string();
        // 파일에는 언어만 반영한다. 명령행 덮어쓰기 값은 저장하지 않는다.
        let mut stored = config::load_from(&self.config_path).unwrap_or_else(|_| self.config.clone());
        stored.language = self.config.language.clone();
        stored.save_to(&self.config_path)?;
        info!("event=language_change lang={}", self.config.language);
        Ok(())
    }
}

/// 입력 끝(EOF)을 정상 종료 신호(`Ok(false)`)로 바꾼다. 다른 오류는 그대로 둔다.
pub fn end_on_eof(result: Result<bool, AppError>) -> Result<bool, AppError> {
    match result {
        Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            info!("event=input_closed");
            Ok(false)
        }
        other => other,
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 메뉴에서 종료를 고르거나 어느 화면에서든
/// 입력이 끝나면 기록을 저장하고 빠져나온다.
pub fn run(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("\n=== {} ===", ctx.translator.t(keys::APP_TITLE));
    while end_on_eof(menu_step(ctx))? {}
    ctx.persist()?;
    println!("{}", ctx.translator.t(i18n::keys::APP_EXIT));
    Ok(())
}

/// 메뉴 한 번을 처리한다. 계속하면 `true`.
fn menu_step(ctx: &mut AppContext) -> Result<bool, AppError> {
    match ui_cli::main_menu(&ctx.translator)? {
        MenuChoice::Calculator => ui_cli::handle_calculator(ctx)?,
        MenuChoice::Converter => ui_cli::handle_converter(ctx)?,
        MenuChoice::History => ui_cli::handle_history(ctx)?,
        MenuChoice::Statistics => ui_cli::print_statistics(&ctx.translator, &ctx.session),
        MenuChoice::Settings => ui_cli::handle_settings(ctx)?,
        MenuChoice::About => ui_cli::print_about(&ctx.translator),
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

/// 단일 명령을 실행하고 필요하면 기록을 저장한다.
pub fn run_command(ctx: &mut AppContext, command: Command) -> Result<(), AppError> {
    match command {
        Command::Eval { expression } => {
            let expression = expression.join(" ");
            let outcome = ctx.session.calculate(&expression);
            ctx.persist()?;
            let value = outcome?;
            println!("{}", format_number(value));
        }
        Command::Convert {
            domain,
            value,
            from,
            to,
        } => {
            if domain.eq_ignore_ascii_case("currency") {
                eprintln!("{}", ctx.translator.t(keys::STATIC_RATES_NOTE));
            }
            let outcome = ctx.session.convert(&domain, value, &from, &to);
            ctx.persist()?;
            println!("{}", outcome?);
        }
        Command::Units { domain } => {
            let list = units::units_for_name(&domain).map_err(conversion::ConversionError::from)?;
            println!("{}", list.join(" "));
        }
        Command::History { limit, clear } => {
            if clear {
                ctx.session.clear_history();
                ctx.persist()?;
                println!("{}", ctx.translator.t(keys::HISTORY_CLEARED));
            } else {
                let limit = limit.unwrap_or(ctx.config.history_display);
                ui_cli::print_history(&ctx.translator, &ctx.session, limit);
            }
        }
        Command::Stats => ui_cli::print_statistics(&ctx.translator, &ctx.session),
        Command::Export { path } => {
            ledger::export_history(ctx.session.history().entries(), &path)?;
            println!("{} {}", ctx.translator.t(keys::EXPORT_SUCCESS), path.display());
        }
    }
    Ok(())
}
