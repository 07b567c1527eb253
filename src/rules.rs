//! Rewrite rules for flat-to-wrapped response assertions.
//!
//! A rule pairs a compiled matcher with a replacement template that references
//! named capture groups. Matchers are anchored on the whole assertion idiom
//! (and, for message/details checks, on the error-status preamble that
//! precedes it) rather than on bare field names, so unrelated
//! `response["message"]` accesses are left alone.
use crate::config::RewriteConfig;
use anyhow::{anyhow, Context, Result};
use regex::{Regex, RegexBuilder};

/// Name of the rule rewriting `assert.Contains(t, "CODE", response["code"])`.
pub const CODE_CONTAINS_RULE: &str = "code-contains";
/// Name of the rule rewriting message/details equality checks under an error status.
pub const ERROR_FIELD_RULE: &str = "error-field-equal";

const CODE_CONTAINS_PATTERN: &str = concat!(
    r#"^(?P<indent>[ \t]*)assert\.Contains\(t, "(?P<value>\w+)", response\["code"\]\)"#,
    r#"(?P<rest>[^\r\n]*)(?P<cr>\r?)$"#,
);

// `${cr}` carries a CRLF file's `\r` onto every inserted line.
const WRAPPED_CODE_TEMPLATE: &str = concat!(
    "${indent}assert.Equal(t, false, response[\"success\"])${cr}\n",
    "${indent}errorInfo, ok := response[\"error\"].(map[string]interface{})${cr}\n",
    "${indent}assert.True(t, ok, \"error should be a map\")${cr}\n",
    "${indent}assert.Equal(t, \"${value}\", errorInfo[\"code\"])${rest}${cr}",
);

const WRAPPED_FIELD_TEMPLATE: &str = concat!(
    "${preamble}",
    "${indent}assert.Equal(t, false, response[\"success\"])${cr}\n",
    "${indent}errorInfo, ok := response[\"error\"].(map[string]interface{})${cr}\n",
    "${indent}assert.True(t, ok, \"error should be a map\")${cr}\n",
    "${indent}assert.Equal(t, \"${value}\", errorInfo[\"${field}\"])",
);

/// One ordered rewrite step: every match of `matcher` is replaced by `template`.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    matcher: Regex,
    template: String,
}

impl RewriteRule {
    /// Compile a rule. Patterns run in multi-line mode so `^` anchors at line starts.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let matcher = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .with_context(|| format!("compile rewrite rule {name}"))?;
        Ok(Self {
            name,
            matcher,
            template: template.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns `None` when nothing matched, otherwise the rewritten text and the
    /// number of replaced occurrences.
    pub fn apply(&self, text: &str) -> Option<(String, usize)> {
        let replaced = self.matcher.find_iter(text).count();
        if replaced == 0 {
            return None;
        }
        let rewritten = self
            .matcher
            .replace_all(text, self.template.as_str())
            .into_owned();
        Some((rewritten, replaced))
    }
}

/// Build the rule table in application order.
pub fn builtin_rules(config: &RewriteConfig) -> Result<Vec<RewriteRule>> {
    Ok(vec![code_contains_rule()?, error_field_rule(&config.error_statuses)?])
}

/// `assert.Contains(t, "CODE", response["code"])` becomes a success/error-map
/// check plus an equality check on `errorInfo["code"]`.
///
/// Each rewrite declares `errorInfo, ok :=`. A `checkResponse` body holding both
/// a rewritten message/details check and a code check ends up with two
/// declarations in one scope, which `go vet`/`go build` rejects; such blocks
/// need a manual merge after the run.
pub fn code_contains_rule() -> Result<RewriteRule> {
    RewriteRule::new(CODE_CONTAINS_RULE, CODE_CONTAINS_PATTERN, WRAPPED_CODE_TEMPLATE)
}

/// `assert.Equal(t, "...", response["message"|"details"])` directly after an
/// error-status `checkResponse` preamble becomes the nested `errorInfo` check.
pub fn error_field_rule(error_statuses: &[String]) -> Result<RewriteRule> {
    if error_statuses.is_empty() {
        return Err(anyhow!("{ERROR_FIELD_RULE} needs at least one error status"));
    }
    let statuses = error_statuses
        .iter()
        .map(|status| regex::escape(status))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = [
        r#"(?P<preamble>expectedStatus:[ \t]*http\.(?:"#,
        statuses.as_str(),
        r#"),\s+"#,
        r#"checkResponse:[ \t]*func\(t \*testing\.T, w \*httptest\.ResponseRecorder\)[ \t]*\{\s+"#,
        r#"var response map\[string\]interface\{\}\s+"#,
        r#"err := json\.Unmarshal\(w\.Body\.Bytes\(\), &response\)\s+"#,
        r#"assert\.NoError\(t, err\)[ \t]*(?P<cr>\r?)\n(?:[ \t]*\r?\n)*)"#,
        r#"(?P<indent>[ \t]*)"#,
        r#"assert\.Equal\(t, "(?P<value>(?:[^"\\\n]|\\.)*)", response\["(?P<field>message|details)"\]\)"#,
    ]
    .concat();
    RewriteRule::new(ERROR_FIELD_RULE, &pattern, WRAPPED_FIELD_TEMPLATE)
}
