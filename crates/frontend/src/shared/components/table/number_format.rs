//! Утилиты форматирования чисел и денег для таблиц и карточек

use rust_decimal::{Decimal, RoundingStrategy};

/// Группирует цифры целой части по индийской системе: последние три цифры,
/// дальше пары ("1234567" -> "12,34,567")
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Форматирует сумму в рупиях, как `Intl.NumberFormat('en-IN', INR)`
///
/// # Примеры
///
/// ```
/// use order_dashboard_frontend::shared::components::table::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::new(123456789, 2)), "₹12,34,567.89");
/// ```
pub fn format_inr(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}₹{}.{}", sign, group_indian(integer_part), decimal_part)
}

/// Форматирует целое число с разделителем тысяч (запятая)
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
