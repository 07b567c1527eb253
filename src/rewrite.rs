//! Ordered application of rewrite rules over a whole document.
use crate::rules::RewriteRule;

/// How many occurrences a single rule replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub replaced: usize,
}

/// Per-rule outcomes, in the order the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl RewriteReport {
    pub fn total(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.replaced).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Rewritten {
    pub text: String,
    pub report: RewriteReport,
    /// False exactly when `text` is byte-identical to the input.
    pub changed: bool,
}

/// Apply `rules` in order; each rule sees the output of the previous one.
///
/// Pure text-to-text: a rule that matches nothing leaves the document as is.
pub fn rewrite(document: &str, rules: &[RewriteRule]) -> Rewritten {
    let mut text = document.to_string();
    let mut report = RewriteReport::default();

    for rule in rules {
        let replaced = match rule.apply(&text) {
            Some((next, replaced)) => {
                text = next;
                replaced
            }
            None => 0,
        };
        tracing::debug!(rule = rule.name(), replaced, "rule applied");
        report.outcomes.push(RuleOutcome {
            rule: rule.name().to_string(),
            replaced,
        });
    }

    let changed = text != document;
    Rewritten {
        text,
        report,
        changed,
    }
}
