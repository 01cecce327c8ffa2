/// Reply formatting
///
/// Renders a `CardInfo` as the fixed nine-line Telegram Markdown reply.
/// Every missing value shows as the placeholder glyph.

pub mod countries;

pub use countries::country_name_uk;

use crate::card::{Bin, CardInfo};

/// Shown for any absent field
pub const PLACEHOLDER: &str = "—";

/// Base of the regional indicator symbols (🇦)
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Backslash-escape the characters legacy Telegram Markdown treats as markup
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escaped value, or the placeholder
fn field(value: Option<&str>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), escape_markdown)
}

/// Display name for a card network, verbatim when unknown
pub fn scheme_label(scheme: &str) -> &str {
    match scheme.to_lowercase().as_str() {
        "visa" => "Visa",
        "mastercard" => "Mastercard",
        "amex" => "American Express",
        "discover" => "Discover",
        "jcb" => "JCB",
        "unionpay" => "UnionPay",
        _ => scheme,
    }
}

/// Display name for a card type, verbatim when unknown
pub fn type_label(card_type: &str) -> &str {
    match card_type.to_lowercase().as_str() {
        "debit" => "Дебетова",
        "credit" => "Кредитна",
        "charge" => "Charge",
        "prepaid" => "Передплачена",
        _ => card_type,
    }
}

pub fn prepaid_label(prepaid: Option<bool>) -> &'static str {
    match prepaid {
        Some(true) => "Так",
        Some(false) => "Ні",
        None => PLACEHOLDER,
    }
}

/// Flag emoji for an ISO alpha-2 code; empty unless the code is two ASCII letters
pub fn flag_emoji(alpha2: Option<&str>) -> String {
    let Some(code) = alpha2 else {
        return String::new();
    };
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return String::new();
    }

    code.to_ascii_uppercase()
        .bytes()
        .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
        .collect()
}

/// Country display name, falling back to the raw code when unknown
pub fn country_label(alpha2: Option<&str>) -> String {
    match alpha2 {
        Some(code) => country_name_uk(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render the reply for a resolved BIN
pub fn format_card(bin: &Bin, info: &CardInfo) -> String {
    let code = info.country_code();

    [
        format!("💳 *BIN:* `{}`", bin),
        format!("📌 *Система:* {}", field(info.scheme().map(scheme_label))),
        format!("🎯 *Тип:* {}", field(info.card_type().map(type_label))),
        format!("🏷 *Бренд:* {}", field(info.brand())),
        format!("💰 *Prepaid:* {}", prepaid_label(info.prepaid)),
        format!("🏦 *Банк:* {}", field(info.bank_name())),
        format!("🌐 *Сайт:* {}", field(info.bank_url())),
        format!("📞 *Телефон:* {}", field(info.bank_phone())),
        format!(
            "{} *Країна:* {} ({})",
            flag_emoji(code),
            escape_markdown(&country_label(code)),
            field(code)
        ),
    ]
    .join("\n")
}
