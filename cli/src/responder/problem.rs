//! # Problem Solver
//!
//! File: cli/src/responder/problem.rs
//!
//! ## Overview
//!
//! Answers programming problems from the domain records in `lexicon`. When
//! the caller does not name a domain, one is inferred with the same
//! first-match-wins keyword scan the intent classifier uses, defaulting to
//! `python`.
//!
//! Per domain:
//! - `python`: first known error name found in the text, else the list of names
//! - `debugging` / `performance`: the whole tip list, whatever the text says
//! - `web` / `database`: first issue key found in the text, else the key list
//!
//! Also serves code examples and keeps a process-lifetime solved counter.
//!
use super::intent::{first_match, normalize};
use super::lexicon::{self, DomainKnowledge, DomainRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ProblemSolver {
    problems_solved: AtomicU64,
}

impl ProblemSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Solve a Problem (`solve`)
    ///
    /// ## Arguments
    ///
    /// * `problem`: Free-text problem description.
    /// * `domain`: Domain key. `None` or an empty string means "infer it".
    ///
    /// ## Returns
    ///
    /// * `String`: The solution text. An unknown explicit domain yields a
    ///   "no solutions yet" message and is not counted as solved.
    pub fn solve(&self, problem: &str, domain: Option<&str>) -> String {
        let problem = normalize(problem);
        let domain = match domain {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => detect_domain(&problem).to_string(),
        };
        debug!("Solving problem in domain '{}'", domain);

        let Some(record) = lexicon::find_domain(&domain) else {
            return format!(
                "Sorry, I don't have solutions for the '{}' domain yet. Try asking about: Python, Debugging, Performance, Web, or Database.",
                domain
            );
        };

        let solution = solution_for(&problem, record);
        self.problems_solved.fetch_add(1, Ordering::Relaxed);
        debug!("Answered a {} problem", record.category);
        solution
    }

    /// Tip block for a tip-based domain (`debugging`, `performance`).
    pub fn tips(&self, domain: &str) -> Option<String> {
        match lexicon::find_domain(domain).map(|record| &record.knowledge) {
            Some(DomainKnowledge::Tips { heading, tips }) => Some(bulleted(heading, tips)),
            _ => None,
        }
    }

    /// # Code Example (`code_example`)
    ///
    /// Exact lookup of the lowercased topic. The heading title-cases the topic
    /// as typed (`list_comprehension` → `List_Comprehension`).
    pub fn code_example(&self, topic: &str) -> String {
        let key = topic.to_lowercase();
        match lexicon::CODE_EXAMPLES.iter().find(|(k, _)| *k == key) {
            Some((_, code)) => format!(
                "**{} Example:**\n```python\n{}\n```",
                title_case(topic),
                code
            ),
            None => format!("I don't have an example for '{}' yet.", topic),
        }
    }

    pub fn problems_solved(&self) -> u64 {
        self.problems_solved.load(Ordering::Relaxed)
    }
}

/// Keys of every known domain, in table order.
pub fn domain_keys() -> Vec<&'static str> {
    lexicon::DOMAINS.iter().map(|record| record.key).collect()
}

/// Infers a domain from lowercased problem text.
pub fn detect_domain(problem: &str) -> &'static str {
    first_match(lexicon::DOMAIN_KEYWORDS, problem).unwrap_or(lexicon::DEFAULT_DOMAIN)
}

fn solution_for(problem: &str, record: &DomainRecord) -> String {
    match &record.knowledge {
        DomainKnowledge::Errors(errors) => {
            match errors
                .iter()
                .find(|(name, _)| problem.contains(&name.to_lowercase()))
            {
                Some((name, explanation)) => format!("**{} Solution:**\n{}", name, explanation),
                None => format!(
                    "I can help with these Python errors: {}",
                    keys(errors).join(", ")
                ),
            }
        }
        DomainKnowledge::Issues { heading, table } => {
            match table
                .iter()
                .find(|(key, _)| problem.contains(&key.to_lowercase()))
            {
                Some((key, explanation)) => {
                    format!("**{} {} Solution:**\n{}", key, heading, explanation)
                }
                None => format!("I can help with: {}", keys(table).join(", ")),
            }
        }
        DomainKnowledge::Tips { heading, tips } => bulleted(heading, tips),
    }
}

fn keys(table: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}

fn bulleted(heading: &str, items: &[&str]) -> String {
    let lines: Vec<String> = items.iter().map(|item| format!("• {}", item)).collect();
    format!("**{}:**\n{}", heading, lines.join("\n"))
}

/// Upper-cases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}
