//! Подготовка данных заказа к показу в карточке.

/// Очистка HTML-фрагмента письма от платформы
///
/// Правила:
/// - Разрешены только теги форматирования текста, таблицы и ссылки
/// - Скрипты, стили и обработчики событий удаляются вместе с содержимым
/// - Ссылки допускаются только по http(s) и mailto
pub fn sanitize_email_snippet(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "div", "span", "p", "br", "hr", "a",
            "ul", "ol", "li", "strong", "em", "b", "i", "u", "small",
            "table", "thead", "tbody", "tr", "td", "th",
        ])
        .generic_attributes(maplit::hashset!["class", "title"])
        .url_schemes(maplit::hashset!["http", "https", "mailto"])
        .clean(html)
        .to_string()
}

/// Tracking link that is safe to open, if the order has one.
pub fn safe_tracking_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let lower = url.to_ascii_lowercase();
    let host = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;
    (!host.is_empty()).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_and_handlers_are_removed() {
        let html = r#"<script>alert(1)</script><p onclick="steal()">Your order has shipped</p>"#;
        assert_eq!(sanitize_email_snippet(html), "<p>Your order has shipped</p>");
    }

    #[test]
    fn test_formatting_is_kept() {
        let html = "<p>Order <strong>AMZ-1</strong> delivered</p>";
        assert_eq!(sanitize_email_snippet(html), html);
    }

    #[test]
    fn test_javascript_links_are_dropped() {
        let cleaned = sanitize_email_snippet(r#"<a href="javascript:alert(1)">Track</a>"#);
        assert!(!cleaned.contains("javascript"));
        assert!(cleaned.contains(">Track</a>"));
    }

    #[test]
    fn test_safe_tracking_url() {
        assert_eq!(
            safe_tracking_url(" https://track.example.com/AMZ-1 "),
            Some("https://track.example.com/AMZ-1")
        );
        assert_eq!(safe_tracking_url("HTTP://track.example.com"), Some("HTTP://track.example.com"));
        assert_eq!(safe_tracking_url("javascript:alert(1)"), None);
        assert_eq!(safe_tracking_url(""), None);
        assert_eq!(safe_tracking_url("https://"), None);
    }
}
