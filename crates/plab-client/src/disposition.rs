//! File naming for downloaded reports.

use plab_core::enums::ReportFormat;
use plab_core::ids::SessionId;

/// Extract a safe file name from a `Content-Disposition` header value.
///
/// Accepts `filename="x"`, `filename=x` and `filename*=UTF-8''x`; the
/// extended form wins when both are present. Quoted values may contain `;`.
/// Only the final path component is kept.
#[must_use]
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in split_params(header) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename" => plain = Some(unquote(value.trim())),
            "filename*" => extended = decode_extended(value.trim()),
            _ => {}
        }
    }

    extended
        .as_deref()
        .and_then(sanitize)
        .or_else(|| plain.as_deref().and_then(sanitize))
}

/// `research-results-<id>.<format>`, with path separators in the id replaced by `_`.
#[must_use]
pub fn fallback_file_name(session: &SessionId, format: ReportFormat) -> String {
    let id = session.as_str().replace(['/', '\\'], "_");
    format!("research-results-{id}.{format}")
}

/// Split header parameters on `;` outside quoted strings.
fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in header.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(header[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    params.push(header[start..].trim());
    params
}

/// Strip surrounding quotes; inside them `\"` becomes `"`.
fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .map_or_else(|| value.to_string(), |inner| inner.replace("\\\"", "\""))
}

/// `charset'lang'percent-encoded`
fn decode_extended(value: &str) -> Option<String> {
    let value = unquote(value);
    let encoded = value.splitn(3, '\'').nth(2)?;
    urlencoding::decode(encoded).ok().map(|s| s.into_owned())
}

fn sanitize(name: &str) -> Option<String> {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    match base {
        "" | "." | ".." => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"attachment; filename="report.pdf""#, Some("report.pdf"))]
    #[case("attachment; filename=report.json", Some("report.json"))]
    #[case("attachment; filename*=UTF-8''%EB%A6%AC%ED%8F%AC%ED%8A%B8.pdf", Some("리포트.pdf"))]
    #[case(
        r#"attachment; filename="fallback.pdf"; filename*=UTF-8''preferred%20name.pdf"#,
        Some("preferred name.pdf")
    )]
    #[case(r#"attachment; filename="q1;q2.pdf""#, Some("q1;q2.pdf"))]
    #[case(r#"attachment; filename="a \"b\"; c.pdf"; size=10"#, Some(r#"a "b"; c.pdf"#))]
    #[case(r#"attachment; filename="../../etc/passwd""#, Some("passwd"))]
    #[case(r#"attachment; filename="C:\temp\r.pdf""#, Some("r.pdf"))]
    #[case(r#"attachment; filename="""#, None)]
    #[case(r#"attachment; filename="..""#, None)]
    #[case("inline", None)]
    fn parses_disposition(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(filename_from_disposition(header).as_deref(), expected);
    }

    #[test]
    fn broken_extended_form_falls_back_to_plain() {
        let header = r#"attachment; filename*=garbage; filename="plain.pdf""#;
        assert_eq!(
            filename_from_disposition(header).as_deref(),
            Some("plain.pdf")
        );
    }

    #[test]
    fn fallback_name_uses_session_and_format() {
        let session = SessionId::new("res-7").unwrap();
        assert_eq!(
            fallback_file_name(&session, ReportFormat::Pdf),
            "research-results-res-7.pdf"
        );
        assert_eq!(
            fallback_file_name(&session, ReportFormat::Json),
            "research-results-res-7.json"
        );
    }

    #[test]
    fn fallback_name_replaces_path_separators_in_id() {
        let session = SessionId::new("a/b").unwrap();
        assert_eq!(
            fallback_file_name(&session, ReportFormat::Pdf),
            "research-results-a_b.pdf"
        );
        let session = SessionId::new(r"..\x").unwrap();
        assert_eq!(
            fallback_file_name(&session, ReportFormat::Json),
            "research-results-.._x.json"
        );
    }
}
