use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const APP_EXIT: &str = "app.exit";
    pub const ABOUT_TITLE: &str = "about.title";
    pub const ABOUT_MESSAGE: &str = "about.message";
    pub const ERROR_TITLE: &str = "error.title";
    pub const ERROR_MESSAGE: &str = "error.message";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";

    pub const RESULT_LABEL: &str = "label.result";
    pub const LANGUAGE_LABEL: &str = "label.language";
    pub const CLEAR_BUTTON: &str = "button.clear";
    pub const CLEAR_HISTORY: &str = "button.clear_history";
    pub const EXPORT_BUTTON: &str = "button.export";
    pub const STATS_BUTTON: &str = "button.stats";

    pub const MEMORY_STORE: &str = "memory.store";
    pub const MEMORY_RECALL: &str = "memory.recall";
    pub const MEMORY_CLEAR: &str = "memory.clear";

    pub const BASIC_TAB: &str = "tab.basic";
    pub const SCIENTIFIC_TAB: &str = "tab.scientific";
    pub const CONVERTER_TAB: &str = "tab.converter";
    pub const HISTORY_TAB: &str = "tab.history";

    pub const LENGTH_LABEL: &str = "domain.length";
    pub const WEIGHT_LABEL: &str = "domain.weight";
    pub const TEMPERATURE_LABEL: &str = "domain.temperature";
    pub const CURRENCY_LABEL: &str = "domain.currency";

    pub const FROM_LABEL: &str = "converter.from";
    pub const TO_LABEL: &str = "converter.to";
    pub const VALUE_LABEL: &str = "converter.value";
    pub const UNITS_LABEL: &str = "converter.units";
    pub const STATIC_RATES_NOTE: &str = "converter.static_rates";

    pub const EXPORT_SUCCESS: &str = "export.success";
    pub const EXPORT_ERROR: &str = "export.error";
    pub const PROMPT_EXPORT_PATH: &str = "export.prompt_path";

    pub const STATS_TITLE: &str = "stats.title";
    pub const STATS_CALCULATIONS: &str = "stats.calculations";
    pub const STATS_CONVERSIONS: &str = "stats.conversions";
    pub const STATS_ERRORS: &str = "stats.errors";

    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_EXPRESSION: &str = "prompt.expression";
    pub const CALCULATOR_HELP: &str = "help.calculator";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_CLEARED: &str = "history.cleared";
    pub const LANGUAGE_CHANGED: &str = "settings.language_changed";
}

const MISSING: &str = "[missing translation]";

/// 지원 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ro,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ro,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    /// 언어 코드 앞부분으로 판별한다. 알 수 없는 코드는 영어.
    pub fn from_code(code: &str) -> Self {
        let c = code.trim().to_lowercase();
        if c.starts_with("ro") {
            Language::Ro
        } else if c.starts_with("es") {
            Language::Es
        } else if c.starts_with("fr") {
            Language::Fr
        } else if c.starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ro => "ro",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// 언어 선택 목록에 쓰는 자국어 이름.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ro => "Română",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만 쓰는 번역기를 만든다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 지정 디렉터리에 없으면 `locales/`를 찾고, 그래도 없으면 내장 문자열만 쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에서만 키를 찾는다.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).map(String::as_str))
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => None,
            Language::Ro => ro(key),
            Language::Es => es(key),
            Language::Fr => fr(key),
            Language::De => de(key),
        };
        built_in.unwrap_or_else(|| en(key))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    if c.is_empty() || c == "auto" {
        return None;
    }
    normalize_locale_string(&c)
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    Language::ALL
        .iter()
        .find(|l| l.as_code() == lang)
        .map(|l| l.as_code().to_string())
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_TITLE => "Advanced Calculator Pro",
        APP_EXIT => "Goodbye.",
        ABOUT_TITLE => "About Calculator",
        ABOUT_MESSAGE => "Advanced Calculator Pro v2.0\n\nFeatures:\n• Scientific calculations\n• Unit conversions\n• History tracking\n• 5-language support\n• Statistics",
        ERROR_TITLE => "Error",
        ERROR_MESSAGE => "Invalid expression. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INVALID_SELECTION => "Invalid selection. Please try again.",
        RESULT_LABEL => "Result:",
        LANGUAGE_LABEL => "Language:",
        CLEAR_BUTTON => "Clear",
        CLEAR_HISTORY => "Clear History",
        EXPORT_BUTTON => "Export",
        STATS_BUTTON => "Statistics",
        MEMORY_STORE => "Memory+",
        MEMORY_RECALL => "Recall",
        MEMORY_CLEAR => "Clear Mem",
        BASIC_TAB => "Basic",
        SCIENTIFIC_TAB => "Scientific",
        CONVERTER_TAB => "Converter",
        HISTORY_TAB => "History",
        LENGTH_LABEL => "Length",
        WEIGHT_LABEL => "Weight",
        TEMPERATURE_LABEL => "Temperature",
        CURRENCY_LABEL => "Currency",
        FROM_LABEL => "From:",
        TO_LABEL => "To:",
        VALUE_LABEL => "Value:",
        UNITS_LABEL => "Units:",
        STATIC_RATES_NOTE => "Note: currency rates are fixed example values, not live data.",
        EXPORT_SUCCESS => "Results exported successfully!",
        EXPORT_ERROR => "Error exporting results.",
        PROMPT_EXPORT_PATH => "File name (.csv or .txt): ",
        STATS_TITLE => "Usage Statistics",
        STATS_CALCULATIONS => "Calculations:",
        STATS_CONVERSIONS => "Conversions:",
        STATS_ERRORS => "Errors:",
        MENU_EXIT => "Exit",
        PROMPT_MENU_SELECT => "Select: ",
        PROMPT_EXPRESSION => "> ",
        CALCULATOR_HELP => "Type an expression, or a key: = C ← M+ MR MC n! 1/x sin cos tan asin acos atan log ln √ x² x³ % abs π e. Empty line returns.",
        HISTORY_EMPTY => "No history yet.",
        HISTORY_CLEARED => "History cleared.",
        LANGUAGE_CHANGED => "Language changed:",
        _ => MISSING,
    }
}

fn ro(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Calculator Avansat Pro",
        APP_EXIT => "La revedere.",
        ABOUT_TITLE => "Despre Calculator",
        ABOUT_MESSAGE => "Calculator Avansat Pro v2.0\n\nFuncționalități:\n• Calcule științifice\n• Conversii unități\n• Istoric calcule\n• Suport 5 limbi\n• Statistici",
        ERROR_TITLE => "Eroare",
        ERROR_MESSAGE => "Expresie invalidă. Vă rugăm încercați din nou.",
        ERROR_INVALID_NUMBER => "Introduceți un număr.",
        INVALID_SELECTION => "Selecție invalidă. Încercați din nou.",
        RESULT_LABEL => "Rezultat:",
        LANGUAGE_LABEL => "Limba:",
        CLEAR_BUTTON => "Șterge",
        CLEAR_HISTORY => "Șterge Istoric",
        EXPORT_BUTTON => "Exportă",
        STATS_BUTTON => "Statistici",
        MEMORY_STORE => "Memorie+",
        MEMORY_RECALL => "Recuperează",
        MEMORY_CLEAR => "Șterge Mem",
        BASIC_TAB => "Bază",
        SCIENTIFIC_TAB => "Științific",
        CONVERTER_TAB => "Convertor",
        HISTORY_TAB => "Istoric",
        LENGTH_LABEL => "Lungime",
        WEIGHT_LABEL => "Greutate",
        TEMPERATURE_LABEL => "Temperatură",
        CURRENCY_LABEL => "Valută",
        FROM_LABEL => "Din:",
        TO_LABEL => "În:",
        VALUE_LABEL => "Valoare:",
        UNITS_LABEL => "Unități:",
        STATIC_RATES_NOTE => "Notă: cursurile valutare sunt valori fixe de exemplu, nu date în timp real.",
        EXPORT_SUCCESS => "Rezultate exportate cu succes!",
        EXPORT_ERROR => "Eroare la exportare.",
        PROMPT_EXPORT_PATH => "Nume fișier (.csv sau .txt): ",
        STATS_TITLE => "Statistici Utilizare",
        STATS_CALCULATIONS => "Calcule:",
        STATS_CONVERSIONS => "Conversii:",
        STATS_ERRORS => "Erori:",
        MENU_EXIT => "Ieșire",
        PROMPT_MENU_SELECT => "Alegeți: ",
        CALCULATOR_HELP => "Introduceți o expresie sau o tastă: = C ← M+ MR MC n! 1/x sin cos tan asin acos atan log ln √ x² x³ % abs π e. Linie goală pentru revenire.",
        HISTORY_EMPTY => "Istoricul este gol.",
        HISTORY_CLEARED => "Istoric șters.",
        LANGUAGE_CHANGED => "Limba a fost schimbată:",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Calculadora Avanzada Pro",
        APP_EXIT => "Adiós.",
        ABOUT_TITLE => "Acerca de la Calculadora",
        ABOUT_MESSAGE => "Calculadora Avanzada Pro v2.0\n\nCaracterísticas:\n• Cálculos científicos\n• Conversiones\n• Historial\n• 5 idiomas\n• Estadísticas",
        ERROR_TITLE => "Error",
        ERROR_MESSAGE => "Expresión inválida. Inténtelo de nuevo.",
        ERROR_INVALID_NUMBER => "Introduzca un número.",
        INVALID_SELECTION => "Selección inválida. Inténtelo de nuevo.",
        RESULT_LABEL => "Resultado:",
        LANGUAGE_LABEL => "Idioma:",
        CLEAR_BUTTON => "Borrar",
        CLEAR_HISTORY => "Borrar Historial",
        EXPORT_BUTTON => "Exportar",
        STATS_BUTTON => "Estadísticas",
        MEMORY_STORE => "Memoria+",
        MEMORY_RECALL => "Recuperar",
        MEMORY_CLEAR => "Borrar Mem",
        BASIC_TAB => "Básico",
        SCIENTIFIC_TAB => "Científico",
        CONVERTER_TAB => "Conversor",
        HISTORY_TAB => "Historial",
        LENGTH_LABEL => "Longitud",
        WEIGHT_LABEL => "Peso",
        TEMPERATURE_LABEL => "Temperatura",
        CURRENCY_LABEL => "Moneda",
        FROM_LABEL => "De:",
        TO_LABEL => "A:",
        VALUE_LABEL => "Valor:",
        UNITS_LABEL => "Unidades:",
        STATIC_RATES_NOTE => "Nota: los tipos de cambio son valores fijos de ejemplo, no datos en tiempo real.",
        EXPORT_SUCCESS => "¡Resultados exportados!",
        EXPORT_ERROR => "Error al exportar.",
        PROMPT_EXPORT_PATH => "Nombre de archivo (.csv o .txt): ",
        STATS_TITLE => "Estadísticas de Uso",
        STATS_CALCULATIONS => "Cálculos:",
        STATS_CONVERSIONS => "Conversiones:",
        STATS_ERRORS => "Errores:",
        MENU_EXIT => "Salir",
        PROMPT_MENU_SELECT => "Seleccione: ",
        CALCULATOR_HELP => "Escriba una expresión o una tecla: = C ← M+ MR MC n! 1/x sin cos tan asin acos atan log ln √ x² x³ % abs π e. Línea vacía para volver.",
        HISTORY_EMPTY => "El historial está vacío.",
        HISTORY_CLEARED => "Historial borrado.",
        LANGUAGE_CHANGED => "Idioma cambiado:",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Calculatrice Avancée Pro",
        APP_EXIT => "Au revoir.",
        ABOUT_TITLE => "À propos",
        ABOUT_MESSAGE => "Calculatrice Avancée Pro v2.0\n\nFonctionnalités:\n• Calculs scientifiques\n• Conversions\n• Historique\n• 5 langues\n• Statistiques",
        ERROR_TITLE => "Erreur",
        ERROR_MESSAGE => "Expression invalide. Réessayez.",
        ERROR_INVALID_NUMBER => "Veuillez saisir un nombre.",
        INVALID_SELECTION => "Choix invalide. Réessayez.",
        RESULT_LABEL => "Résultat:",
        LANGUAGE_LABEL => "Langue:",
        CLEAR_BUTTON => "Effacer",
        CLEAR_HISTORY => "Effacer Historique",
        EXPORT_BUTTON => "Exporter",
        STATS_BUTTON => "Statistiques",
        MEMORY_STORE => "Mémoire+",
        MEMORY_RECALL => "Rappeler",
        MEMORY_CLEAR => "Effacer Mém",
        BASIC_TAB => "Base",
        SCIENTIFIC_TAB => "Scientifique",
        CONVERTER_TAB => "Convertisseur",
        HISTORY_TAB => "Historique",
        LENGTH_LABEL => "Longueur",
        WEIGHT_LABEL => "Poids",
        TEMPERATURE_LABEL => "Température",
        CURRENCY_LABEL => "Devise",
        FROM_LABEL => "De:",
        TO_LABEL => "À:",
        VALUE_LABEL => "Valeur:",
        UNITS_LABEL => "Unités:",
        STATIC_RATES_NOTE => "Remarque : les taux de change sont des valeurs d'exemple fixes, non mises à jour.",
        EXPORT_SUCCESS => "Résultats exportés!",
        EXPORT_ERROR => "Erreur d'exportation.",
        PROMPT_EXPORT_PATH => "Nom du fichier (.csv ou .txt) : ",
        STATS_TITLE => "Statistiques",
        STATS_CALCULATIONS => "Calculs:",
        STATS_CONVERSIONS => "Conversions:",
        STATS_ERRORS => "Erreurs:",
        MENU_EXIT => "Quitter",
        PROMPT_MENU_SELECT => "Choix : ",
        CALCULATOR_HELP => "Saisissez une expression ou une touche : = C ← M+ MR MC n! 1/x sin cos tan asin acos atan log ln √ x² x³ % abs π e. Ligne vide pour revenir.",
        HISTORY_EMPTY => "L'historique est vide.",
        HISTORY_CLEARED => "Historique effacé.",
        LANGUAGE_CHANGED => "Langue modifiée :",
        _ => return None,
    })
}

fn de(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Erweiterter Rechner Pro",
        APP_EXIT => "Auf Wiedersehen.",
        ABOUT_TITLE => "Über",
        ABOUT_MESSAGE => "Erweiterter Rechner Pro v2.0\n\nFunktionen:\n• Wissenschaftliche Berechnungen\n• Umrechnungen\n• Verlauf\n• 5 Sprachen\n• Statistiken",
        ERROR_TITLE => "Fehler",
        ERROR_MESSAGE => "Ungültiger Ausdruck. Bitte erneut versuchen.",
        ERROR_INVALID_NUMBER => "Bitte eine Zahl eingeben.",
        INVALID_SELECTION => "Ungültige Auswahl. Bitte erneut versuchen.",
        RESULT_LABEL => "Ergebnis:",
        LANGUAGE_LABEL => "Sprache:",
        CLEAR_BUTTON => "Löschen",
        CLEAR_HISTORY => "Verlauf Löschen",
        EXPORT_BUTTON => "Exportieren",
        STATS_BUTTON => "Statistiken",
        MEMORY_STORE => "Speicher+",
        MEMORY_RECALL => "Abrufen",
        MEMORY_CLEAR => "Speicher Löschen",
        BASIC_TAB => "Basis",
        SCIENTIFIC_TAB => "Wissenschaftlich",
        CONVERTER_TAB => "Umrechner",
        HISTORY_TAB => "Verlauf",
        LENGTH_LABEL => "Länge",
        WEIGHT_LABEL => "Gewicht",
        TEMPERATURE_LABEL => "Temperatur",
        CURRENCY_LABEL => "Währung",
        FROM_LABEL => "Von:",
        TO_LABEL => "Nach:",
        VALUE_LABEL => "Wert:",
        UNITS_LABEL => "Einheiten:",
        STATIC_RATES_NOTE => "Hinweis: Wechselkurse sind feste Beispielwerte, keine Live-Daten.",
        EXPORT_SUCCESS => "Erfolgreich exportiert!",
        EXPORT_ERROR => "Exportfehler.",
        PROMPT_EXPORT_PATH => "Dateiname (.csv oder .txt): ",
        STATS_TITLE => "Statistiken",
        STATS_CALCULATIONS => "Berechnungen:",
        STATS_CONVERSIONS => "Umrechnungen:",
        STATS_ERRORS => "Fehler:",
        MENU_EXIT => "Beenden",
        PROMPT_MENU_SELECT => "Auswahl: ",
        CALCULATOR_HELP => "Ausdruck oder Taste eingeben: = C ← M+ MR MC n! 1/x sin cos tan asin acos atan log ln √ x² x³ % abs π e. Leere Zeile kehrt zurück.",
        HISTORY_EMPTY => "Der Verlauf ist leer.",
        HISTORY_CLEARED => "Verlauf gelöscht.",
        LANGUAGE_CHANGED => "Sprache geändert:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[stats]\ntitle = \"Stats!\"\n[app]\ntitle = \"Calc\"\n")
            .expect("map");
        assert_eq!(map.get("stats.title").map(String::as_str), Some("Stats!"));
        assert_eq!(map.get("app.title").map(String::as_str), Some("Calc"));
    }

    #[test]
    fn empty_pack_is_ignored() {
        assert!(parse_toml_to_map("").is_none());
        assert!(parse_toml_to_map("not = [valid").is_none());
    }

    #[test]
    fn locale_strings_map_to_supported_codes() {
        assert_eq!(normalize_locale_string("ro_RO.UTF-8").as_deref(), Some("ro"));
        assert_eq!(normalize_locale_string("de-DE").as_deref(), Some("de"));
        assert_eq!(normalize_locale_string("ko_KR"), None);
    }

    #[test]
    fn every_language_has_every_menu_key() {
        for key in [keys::APP_TITLE, keys::ERROR_MESSAGE, keys::STATS_TITLE, keys::CALCULATOR_HELP] {
            for lang in Language::ALL {
                assert_ne!(Translator::new(lang.as_code()).t(key), MISSING, "{key} {lang:?}");
            }
        }
    }
}
