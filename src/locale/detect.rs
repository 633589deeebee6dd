use std::sync::LazyLock;

use regex::Regex;

use super::LocaleSet;

/// Leading path segment that looks like a locale: `/bg/...`, `/pt-BR`, `/uk`.
static PATH_LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})?)(?:/|$)").unwrap());

/// Request signals used to pick a locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectInput<'a> {
    pub path: Option<&'a str>,
    /// Value of the `locale` query parameter.
    pub query_locale: Option<&'a str>,
    pub cookie: Option<&'a str>,
    /// Raw `Accept-Language` header.
    pub accept_language: Option<&'a str>,
    /// Overrides the locale set's default when nothing matches.
    pub default_locale: Option<&'a str>,
}

/// Pick a locale from request signals.
///
/// Priority: path > query > cookie > Accept-Language (first range only) >
/// default. The path, header and default go through
/// [`LocaleSet::canonicalize`], so aliases and region subtags are honored.
/// Query and cookie values are stored by the app itself and must name a
/// supported locale exactly. Unsupported values are skipped.
pub fn detect_locale(input: &DetectInput<'_>, locales: &LocaleSet) -> String {
    let from_path = input
        .path
        .and_then(|path| PATH_LOCALE_REGEX.captures(path))
        .and_then(|caps| caps.get(1))
        .and_then(|m| locales.canonicalize(m.as_str()));

    let from_header = || {
        input
            .accept_language
            .and_then(|header| header.split(',').next())
            .and_then(|range| range.split(';').next())
            .and_then(|tag| locales.canonicalize(tag))
    };

    from_path
        .or_else(|| input.query_locale.filter(|q| locales.is_supported(q)))
        .or_else(|| input.cookie.filter(|c| locales.is_supported(c)))
        .or_else(from_header)
        .or_else(|| input.default_locale.and_then(|d| locales.canonicalize(d)))
        .unwrap_or(locales.default_locale())
        .to_string()
}

/// Pick the best supported locale from an `Accept-Language` header.
///
/// Ranges are ordered by their `q` weight (default 1.0, header order breaks
/// ties). Ranges with `q=0` and the `*` wildcard never match. Falls back to
/// the default locale.
pub fn detect_language(accept_language: Option<&str>, locales: &LocaleSet) -> String {
    let Some(header) = accept_language else {
        return locales.default_locale().to_string();
    };

    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|range| {
            let mut parts = range.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (q > 0.0).then_some((tag, q))
        })
        .collect();

    // Stable sort keeps header order for equal weights.
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges
        .iter()
        .find_map(|(tag, _)| locales.canonicalize(tag))
        .unwrap_or(locales.default_locale())
        .to_string()
}
