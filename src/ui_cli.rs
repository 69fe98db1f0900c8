use std::io::{self, Write};
use std::path::Path;

use crate::app::{AppContext, AppError};
use crate::expr::EvalError;
use crate::i18n::{keys, Language, Translator};
use crate::keypad::{self, Key, KeyAction};
use crate::ledger;
use crate::quantity::ConversionDomain;
use crate::session::{format_number, MemoryEvent, Session};
use crate::units;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    Converter,
    History,
    Statistics,
    Settings,
    About,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!();
    println!("1) {} / {}", tr.t(keys::BASIC_TAB), tr.t(keys::SCIENTIFIC_TAB));
    println!("2) {}", tr.t(keys::CONVERTER_TAB));
    println!("3) {}", tr.t(keys::HISTORY_TAB));
    println!("4) {}", tr.t(keys::STATS_BUTTON));
    println!("5) {}", tr.t(keys::LANGUAGE_LABEL).trim_end_matches(':'));
    println!("6) {}", tr.t(keys::ABOUT_TITLE));
    println!("0) {}", tr.t(keys::MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculator),
            "2" => return Ok(MenuChoice::Converter),
            "3" => return Ok(MenuChoice::History),
            "4" => return Ok(MenuChoice::Statistics),
            "5" => return Ok(MenuChoice::Settings),
            "6" => return Ok(MenuChoice::About),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
        }
    }
}

/// 계산기 화면. 버튼 라벨과 정확히 같은 줄은 그 버튼으로 처리하고, 나머지는
/// 입력 버퍼에 붙인 뒤 바로 평가한다. 빈 줄이면 메뉴로 돌아간다.
pub fn handle_calculator(ctx: &mut AppContext) -> Result<(), AppError> {
    println!(
        "\n-- {} / {} --",
        ctx.translator.t(keys::BASIC_TAB),
        ctx.translator.t(keys::SCIENTIFIC_TAB)
    );
    print_pad(&keypad::BASIC_PAD);
    println!();
    print_pad(&keypad::SCIENTIFIC_PAD);
    println!("{}", ctx.translator.t(keys::CALCULATOR_HELP));

    loop {
        if ctx.session.memory() != 0.0 {
            println!("[{}]  M", ctx.session.input().display());
        } else {
            println!("[{}]", ctx.session.input().display());
        }
        let line = read_line(ctx.translator.t(keys::PROMPT_EXPRESSION))?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let outcome = match keypad::find_key(line) {
            Some(key) => ctx.session.apply(key.action),
            None => {
                ctx.session.type_text(line);
                ctx.session.apply(KeyAction::Evaluate)
            }
        };
        match outcome {
            Ok(Some(event)) => print_memory_event(&ctx.translator, event),
            Ok(None) => {}
            Err(e) => print_eval_error(&ctx.translator, &e),
        }
        ctx.persist_or_warn();
    }
}

fn print_memory_event(tr: &Translator, event: MemoryEvent) {
    match event {
        MemoryEvent::Stored(v) => println!("{}: {}", tr.t(keys::MEMORY_STORE), format_number(v)),
        MemoryEvent::Recalled(v) => println!("{}: {}", tr.t(keys::MEMORY_RECALL), format_number(v)),
        MemoryEvent::Cleared => println!("{}", tr.t(keys::MEMORY_CLEAR)),
    }
}

fn print_pad(pad: &[[Key; 5]; 4]) {
    for row in pad {
        let line: Vec<String> = row.iter().map(|k| format!("{:^6}", k.label)).collect();
        println!("{}", line.join(""));
    }
}

/// 단위 변환 화면.
pub fn handle_converter(ctx: &mut AppContext) -> Result<(), AppError> {
    let tr = &ctx.translator;
    println!("\n-- {} --", tr.t(keys::CONVERTER_TAB));
    for (i, domain) in ConversionDomain::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(domain_label(*domain)));
    }
    let domain = loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim().parse::<usize>() {
            Ok(n) if (1..=ConversionDomain::ALL.len()).contains(&n) => {
                break ConversionDomain::ALL[n - 1]
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
        }
    };

    println!("{} {}", tr.t(keys::UNITS_LABEL), units::units_for(domain).join(" "));
    if domain == ConversionDomain::Currency {
        println!("{}", tr.t(keys::STATIC_RATES_NOTE));
    }
    let value = read_f64(tr, &format!("{} ", tr.t(keys::VALUE_LABEL)))?;
    let from_unit = read_line(&format!("{} ", tr.t(keys::FROM_LABEL)))?;
    let to_unit = read_line(&format!("{} ", tr.t(keys::TO_LABEL)))?;

    match ctx
        .session
        .convert(domain.name(), value, from_unit.trim(), to_unit.trim())
    {
        Ok(result) => println!("{} {result}", ctx.translator.t(keys::RESULT_LABEL)),
        Err(e) => println!("{}: {e}", ctx.translator.t(keys::ERROR_TITLE)),
    }
    ctx.persist_or_warn();
    Ok(())
}

fn domain_label(domain: ConversionDomain) -> &'static str {
    match domain {
        ConversionDomain::Length => keys::LENGTH_LABEL,
        ConversionDomain::Weight => keys::WEIGHT_LABEL,
        ConversionDomain::Temperature => keys::TEMPERATURE_LABEL,
        ConversionDomain::Currency => keys::CURRENCY_LABEL,
    }
}

/// 기록 화면. 최근 기록을 보여준 뒤 지우기/내보내기를 고른다.
pub fn handle_history(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("\n-- {} --", ctx.translator.t(keys::HISTORY_TAB));
    print_history(&ctx.translator, &ctx.session, ctx.config.history_display);
    println!(
        "1) {}  2) {}",
        ctx.translator.t(keys::CLEAR_HISTORY),
        ctx.translator.t(keys::EXPORT_BUTTON)
    );
    let sel = read_line(ctx.translator.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => {
            ctx.session.clear_history();
            ctx.persist_or_warn();
            println!("{}", ctx.translator.t(keys::HISTORY_CLEARED));
        }
        "2" => {
            let path = read_line(ctx.translator.t(keys::PROMPT_EXPORT_PATH))?;
            let path = Path::new(path.trim());
            match ledger::export_history(ctx.session.history().entries(), path) {
                Ok(_) => println!(
                    "{} {}",
                    ctx.translator.t(keys::EXPORT_SUCCESS),
                    path.display()
                ),
                Err(e) => println!("{} {e}", ctx.translator.t(keys::EXPORT_ERROR)),
            }
        }
        _ => {}
    }
    Ok(())
}

/// 최근 기록을 새 것부터 출력한다.
pub fn print_history(tr: &Translator, session: &Session, limit: usize) {
    let history = session.history();
    if history.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for entry in history.recent(limit) {
        println!("{entry}\n");
    }
}

pub fn print_statistics(tr: &Translator, session: &Session) {
    let stats = session.statistics();
    println!("\n-- {} --", tr.t(keys::STATS_TITLE));
    println!("{} {}", tr.t(keys::STATS_CALCULATIONS), stats.calculations());
    println!("{} {}", tr.t(keys::STATS_CONVERSIONS), stats.conversions());
    println!("{} {}", tr.t(keys::STATS_ERRORS), stats.errors());
}

pub fn print_about(tr: &Translator) {
    println!("\n-- {} --", tr.t(keys::ABOUT_TITLE));
    println!("{}", tr.t(keys::ABOUT_MESSAGE));
}

/// 언어 설정 메뉴를 처리한다.
pub fn handle_settings(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("\n-- {} --", ctx.translator.t(keys::LANGUAGE_LABEL).trim_end_matches(':'));
    for (i, lang) in Language::ALL.iter().enumerate() {
        let marker = if *lang == ctx.translator.language() { "*" } else { " " };
        println!("{marker}{}) {}", i + 1, lang.native_name());
    }
    let sel = read_line(ctx.translator.t(keys::PROMPT_MENU_SELECT))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim().parse::<usize>() {
        Ok(n) if (1..=Language::ALL.len()).contains(&n) => {
            ctx.set_language(Language::ALL[n - 1].as_code())?;
            println!(
                "{} {}",
                ctx.translator.t(keys::LANGUAGE_CHANGED),
                ctx.translator.language().native_name()
            );
        }
        _ => println!("{}", ctx.translator.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

fn print_eval_error(tr: &Translator, error: &EvalError) {
    println!("{}: {}", tr.t(keys::ERROR_TITLE), tr.t(keys::ERROR_MESSAGE));
    println!("  ({error})");
}

/// 입력 끝(EOF)이면 `UnexpectedEof` 오류를 돌려준다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
