//! # Intent Classification
//!
//! File: cli/src/responder/intent.rs
//!
//! ## Overview
//!
//! Decides which response generator handles a message. Classification is a
//! linear walk over an ordered trigger table: the first rule with a trigger
//! substring contained in the normalized input wins. There is no scoring, no
//! tokenization, and no tie-breaking beyond declaration order, so reordering
//! a table changes behavior.
//!
//! ## Architecture
//!
//! - `Intent`: every category a chatbot variant can route to
//! - `TriggerRule`: one row of a trigger table, with an optional guard
//! - `FULL_TRIGGERS` / `SIMPLE_TRIGGERS`: the two chatbot variants' tables
//! - `IntentClassifier`: walks a table
//! - `first_match`: the same walk over any keyed keyword table (used for
//!   problem-domain inference)
//!
//! ## Examples
//!
//! ```rust
//! # use codepal::responder::intent::{Intent, IntentClassifier};
//! let classifier = IntentClassifier::full();
//! assert_eq!(classifier.classify("  HELLO there "), Intent::Greeting);
//! assert_eq!(classifier.classify("hmm"), Intent::Default);
//! ```
//!
/// A classification bucket that selects a response generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Farewell,
    Gratitude,
    HowAreYou,
    Identity,
    Help,
    Joke,
    Time,
    Date,
    Math,
    Dictionary,
    ProblemDomain,
    CodeAnalysis,
    CodeExample,
    LearningResource,
    LearningResourceList,
    LearningPath,
    Version,
    Features,
    About,
    LearningTips,
    DebuggingTips,
    PerformanceTips,
    Menu,
    /// Fallback when no rule matches. Never appears in a trigger table.
    Default,
}

/// One row of a trigger table.
#[derive(Debug)]
pub struct TriggerRule {
    pub intent: Intent,
    pub triggers: &'static [&'static str],
    /// When non-empty, at least one of these must also occur in the input.
    pub guard: &'static [&'static str],
}

impl TriggerRule {
    const fn new(intent: Intent, triggers: &'static [&'static str]) -> Self {
        Self {
            intent,
            triggers,
            guard: &[],
        }
    }

    const fn guarded(
        intent: Intent,
        triggers: &'static [&'static str],
        guard: &'static [&'static str],
    ) -> Self {
        Self {
            intent,
            triggers,
            guard,
        }
    }

    /// `normalized` must already be lowercased and trimmed.
    pub fn matches(&self, normalized: &str) -> bool {
        let triggered = self.triggers.iter().any(|t| normalized.contains(t));
        triggered && (self.guard.is_empty() || self.guard.iter().any(|g| normalized.contains(g)))
    }
}

const LEARNING_WORDS: &[&str] = &["learn", "teach", "resource", "course", "tutorial"];
const TIP_WORDS: &[&str] = &["tips", "advice"];

/// Trigger table of the full chatbot, in routing order.
pub static FULL_TRIGGERS: &[TriggerRule] = &[
    TriggerRule::guarded(
        Intent::ProblemDomain,
        &["help with", "error", "issue", "problem", "fix", "debug"],
        &["error", "exception"],
    ),
    TriggerRule::new(Intent::CodeAnalysis, &["analyze", "check code", "review"]),
    TriggerRule::guarded(Intent::LearningPath, &["learning path", "path for"], LEARNING_WORDS),
    TriggerRule::guarded(Intent::LearningResourceList, &["resources"], LEARNING_WORDS),
    TriggerRule::new(Intent::LearningResource, LEARNING_WORDS),
    TriggerRule::new(Intent::CodeExample, &["example", "show me"]),
    TriggerRule::new(Intent::Version, &["version"]),
    TriggerRule::new(Intent::Features, &["features"]),
    TriggerRule::new(Intent::About, &["about", "capabilities"]),
    TriggerRule::guarded(Intent::LearningTips, &["learning"], TIP_WORDS),
    TriggerRule::guarded(Intent::DebuggingTips, &["debugging"], TIP_WORDS),
    TriggerRule::guarded(Intent::PerformanceTips, &["performance", "optimization"], TIP_WORDS),
    TriggerRule::new(Intent::Menu, &["menu"]),
    TriggerRule::guarded(Intent::Menu, &["command"], &["help"]),
    TriggerRule::new(
        Intent::Greeting,
        &["hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening"],
    ),
    TriggerRule::new(
        Intent::Farewell,
        &["bye", "goodbye", "see you", "farewell", "take care", "gotta go", "talk to you later"],
    ),
    TriggerRule::new(
        Intent::Gratitude,
        &["thank you", "thanks", "thank u", "appreciate", "thanks so much", "thank you so much"],
    ),
    TriggerRule::new(
        Intent::HowAreYou,
        &["how are you", "how's it going", "how do you do", "how're you", "what's up"],
    ),
    TriggerRule::new(
        Intent::Identity,
        &["what's your name", "who are you", "your name", "what do i call you"],
    ),
    TriggerRule::new(
        Intent::Help,
        &["help", "what can you do", "capabilities", "features", "assist"],
    ),
    TriggerRule::new(Intent::Joke, &["tell me a joke", "make me laugh", "joke", "funny"]),
    TriggerRule::new(
        Intent::Time,
        &["what time is it", "current time", "tell me the time", "what's the time"],
    ),
    TriggerRule::new(
        Intent::Date,
        &["what's the date", "today's date", "what date is it", "today is"],
    ),
];

/// Trigger table of the simple chatbot, in routing order.
pub static SIMPLE_TRIGGERS: &[TriggerRule] = &[
    TriggerRule::new(Intent::Greeting, &["hello", "hi", "hey", "greetings"]),
    TriggerRule::new(Intent::Farewell, &["bye", "goodbye", "see you", "farewell"]),
    TriggerRule::new(Intent::Joke, &["joke", "funny", "laugh"]),
    TriggerRule::new(
        Intent::Math,
        &["math", "calculate", "solve", "add", "subtract", "multiply", "divide"],
    ),
    TriggerRule::new(Intent::Dictionary, &["definition", "mean", "dictionary", "word"]),
    TriggerRule::new(Intent::Time, &["time", "what time"]),
    TriggerRule::new(Intent::Date, &["date", "today"]),
    TriggerRule::new(
        Intent::Identity,
        &["name", "who are you", "your name", "creator", "author"],
    ),
    TriggerRule::new(Intent::Help, &["help", "what can you do"]),
];

/// Lowercases and trims input for matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns the key of the first entry whose keyword list has a member
/// contained in `normalized`.
pub fn first_match<K: Copy>(table: &[(K, &[&str])], normalized: &str) -> Option<K> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(key, _)| *key)
}

/// # Intent Classifier (`IntentClassifier`)
///
/// Walks one trigger table. Cheap to construct; holds only a table reference.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier {
    table: &'static [TriggerRule],
}

impl IntentClassifier {
    pub fn new(table: &'static [TriggerRule]) -> Self {
        Self { table }
    }

    pub fn full() -> Self {
        Self::new(FULL_TRIGGERS)
    }

    pub fn simple() -> Self {
        Self::new(SIMPLE_TRIGGERS)
    }

    /// Returns the intent of the first matching rule, or `Intent::Default`.
    pub fn classify(&self, text: &str) -> Intent {
        let normalized = normalize(text);
        self.table
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map_or(Intent::Default, |rule| rule.intent)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_ignores_case_and_whitespace() {
        let classifier = IntentClassifier::full();
        assert_eq!(classifier.classify("Hello"), Intent::Greeting);
        assert_eq!(classifier.classify("   HELLO   "), Intent::Greeting);
        assert_eq!(classifier.classify("\tgoodbye\n"), Intent::Farewell);
    }

    #[test]
    fn test_first_declared_rule_wins() {
        // Greeting is declared before farewell.
        let classifier = IntentClassifier::full();
        assert_eq!(classifier.classify("hello and bye"), Intent::Greeting);
        assert_eq!(classifier.classify("bye, hello"), Intent::Greeting);

        let simple = IntentClassifier::simple();
        assert_eq!(simple.classify("tell me a joke about math"), Intent::Joke);
    }

    #[test]
    fn test_substring_triggers_match_inside_words() {
        // "hi" is contained in "this"; no tokenization is performed.
        let classifier = IntentClassifier::full();
        assert_eq!(classifier.classify("this"), Intent::Greeting);
    }

    #[test]
    fn test_unmatched_input_is_default() {
        let classifier = IntentClassifier::full();
        assert_eq!(classifier.classify("zzz"), Intent::Default);
        assert_eq!(classifier.classify(""), Intent::Default);
    }

    #[test]
    fn test_guards_must_also_match() {
        let classifier = IntentClassifier::full();
        assert_eq!(
            classifier.classify("I have a TypeError"),
            Intent::ProblemDomain
        );
        // "fix" triggers the problem rule, but no "error"/"exception" guard word.
        assert_ne!(classifier.classify("fix my bike"), Intent::ProblemDomain);
        assert_eq!(classifier.classify("help command"), Intent::Menu);
        assert_eq!(classifier.classify("debugging tips"), Intent::DebuggingTips);
        assert_eq!(
            classifier.classify("performance advice"),
            Intent::PerformanceTips
        );
    }

    #[test]
    fn test_learning_rules_are_ordered() {
        let classifier = IntentClassifier::full();
        assert_eq!(
            classifier.classify("learning path for web development"),
            Intent::LearningPath
        );
        assert_eq!(
            classifier.classify("list learning resources"),
            Intent::LearningResourceList
        );
        assert_eq!(
            classifier.classify("learn about python basics"),
            Intent::LearningResource
        );
        // "learning tips" contains "learn", which is declared first.
        assert_eq!(
            classifier.classify("learning tips"),
            Intent::LearningResource
        );
    }

    #[test]
    fn test_simple_table_routes_math_and_dictionary() {
        let classifier = IntentClassifier::simple();
        assert_eq!(classifier.classify("calculate 5 + 3"), Intent::Math);
        assert_eq!(classifier.classify("definition of python"), Intent::Dictionary);
        assert_eq!(classifier.classify("what's the date"), Intent::Date);
        assert_eq!(classifier.classify("5 + 3"), Intent::Default);
    }

    #[test]
    fn test_first_match_scans_keyed_tables() {
        let table: &[(&str, &[&str])] = &[("a", &["x", "y"]), ("b", &["y", "z"])];
        assert_eq!(first_match(table, "zy"), Some("a"));
        assert_eq!(first_match(table, "z"), Some("b"));
        assert_eq!(first_match(table, "q"), None);
    }
}
