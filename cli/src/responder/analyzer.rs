//! # Code Analyzer
//!
//! File: cli/src/responder/analyzer.rs
//!
//! ## Overview
//!
//! Heuristic review of Python-like source text. Every check is a substring
//! count or a regular expression over the raw text; nothing is parsed. False
//! positives and negatives are part of the contract: the checks below are the
//! behavior, not an approximation of it.
//!
//! ## Architecture
//!
//! - `CodeAnalyzer::analyze`: four independent check groups producing `CodeIssues`
//! - `CodeAnalyzer::suggestions`: improvement hints, reported separately
//! - `format_report`: fixed-template text report over `CodeIssues`
//!
//! ## Examples
//!
//! ```rust
//! # use codepal::responder::analyzer::CodeAnalyzer;
//! let analyzer = CodeAnalyzer::new("Codepal");
//! let issues = analyzer.analyze("x=eval('1+1')");
//! assert_eq!(issues.security_issues, vec!["SECURITY: Avoid eval() - it's dangerous!"]);
//! println!("{}", analyzer.format_report(&issues));
//! ```
//!
use regex::Regex;
use serde::Serialize;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    LazyLock,
};
use tracing::debug;

/// Control statement whose line does not end with a colon.
static MISSING_COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(if|for|while|def|class)\s+.*[^:]$").expect("valid missing-colon regex")
});

/// Lowercase letter, word characters, then an uppercase letter (camelCase).
static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]\w*[A-Z]").expect("valid camelCase regex"));

/// Longest line length that passes the style check.
pub const MAX_LINE_LENGTH: usize = 79;

/// Issues found in one piece of code, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeIssues {
    pub syntax_errors: Vec<String>,
    pub style_issues: Vec<String>,
    pub performance_issues: Vec<String>,
    pub security_issues: Vec<String>,
}

impl CodeIssues {
    pub fn total(&self) -> usize {
        self.syntax_errors.len()
            + self.style_issues.len()
            + self.performance_issues.len()
            + self.security_issues.len()
    }
}

#[derive(Debug)]
pub struct CodeAnalyzer {
    bot_name: String,
    issues_found: AtomicU64,
}

impl CodeAnalyzer {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            issues_found: AtomicU64::new(0),
        }
    }

    /// Runs every check and adds the total to the running issue counter.
    pub fn analyze(&self, code: &str) -> CodeIssues {
        let issues = CodeIssues {
            syntax_errors: check_syntax(code),
            style_issues: check_style(code),
            performance_issues: check_performance(code),
            security_issues: check_security(code),
        };
        let total = issues.total() as u64;
        self.issues_found.fetch_add(total, Ordering::Relaxed);
        debug!("Code analysis found {} issue(s)", total);
        issues
    }

    /// Total issues reported across all `analyze` calls.
    pub fn issues_found(&self) -> u64 {
        self.issues_found.load(Ordering::Relaxed)
    }

    pub fn suggestions(&self, code: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if code.contains("def ") && !code.contains("\"\"\"") {
            suggestions.push("Add docstrings to functions".to_string());
        }
        if code.contains("def ") && !code.contains("->") {
            suggestions.push("Add type hints to function signatures".to_string());
        }
        if code.contains("open(") && !code.contains("try:") {
            suggestions.push("Add try-except block for file operations".to_string());
        }
        suggestions
    }

    /// # Format Report (`format_report`)
    ///
    /// Header, then one block per non-empty category in the order syntax,
    /// style, performance, security, then the total. No issues at all gives
    /// the header and a single success line.
    pub fn format_report(&self, issues: &CodeIssues) -> String {
        let mut report = format!("**{} - Code Analysis Report**\n\n", self.bot_name);

        let total = issues.total();
        if total == 0 {
            report.push_str("✅ No issues found! Your code looks good.\n");
            return report;
        }

        let blocks = [
            ("🔴", "Syntax Errors", &issues.syntax_errors),
            ("🟡", "Style Issues", &issues.style_issues),
            ("🟠", "Performance Issues", &issues.performance_issues),
            ("🔴", "Security Issues", &issues.security_issues),
        ];
        for (marker, label, entries) in blocks {
            if entries.is_empty() {
                continue;
            }
            report.push_str(&format!("{} **{}:**\n", marker, label));
            for entry in entries {
                report.push_str(&format!("  • {}\n", entry));
            }
            report.push('\n');
        }

        report.push_str(&format!("**Total Issues: {}**\n", total));
        report
    }
}

fn check_syntax(code: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if MISSING_COLON.is_match(code) {
        issues.push("Missing colon ':' after control statement".to_string());
    }
    // Counts only; `)(` balances.
    if code.matches('(').count() != code.matches(')').count() {
        issues.push("Unmatched parentheses".to_string());
    }
    if code.matches('[').count() != code.matches(']').count() {
        issues.push("Unmatched brackets".to_string());
    }
    issues
}

fn check_style(code: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if CAMEL_CASE.is_match(code) {
        issues.push("Use snake_case for variable names (e.g., my_var not myVar)".to_string());
    }
    if code.contains(';') {
        issues.push("Avoid multiple statements on one line (semicolons)".to_string());
    }
    for (index, line) in code.split('\n').enumerate() {
        let length = line.chars().count();
        if length > MAX_LINE_LENGTH {
            issues.push(format!(
                "Line {} is too long ({} > {} characters)",
                index + 1,
                length,
                MAX_LINE_LENGTH
            ));
        }
    }
    issues
}

fn check_performance(code: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if code.matches("for").count() > 1 {
        issues.push("Consider if nested loops can be optimized".to_string());
    }
    if code.matches('+').count() > 3 && code.contains('"') {
        issues.push("Use str.join() instead of repeated '+' concatenation".to_string());
    }
    if code.contains("list(") {
        issues.push("Consider if list() conversion is necessary".to_string());
    }
    issues
}

fn check_security(code: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if code.contains("eval(") {
        issues.push("SECURITY: Avoid eval() - it's dangerous!".to_string());
    }
    if code.contains("exec(") {
        issues.push("SECURITY: Avoid exec() - it's dangerous!".to_string());
    }
    if code.contains("query") && code.contains('+') {
        issues.push("SECURITY: Check for SQL injection vulnerabilities".to_string());
    }
    issues
}
