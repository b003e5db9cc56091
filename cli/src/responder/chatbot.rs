//! # Chatbot Dispatchers
//!
//! File: cli/src/responder/chatbot.rs
//!
//! ## Overview
//!
//! Two chatbot variants turn a message into a reply:
//!
//! - `Chatbot` (full): routes programming-help requests (problems, code
//!   analysis, learning resources, code examples, tips, about/menu) and
//!   falls back to canned conversation.
//! - `SimpleChatbot`: greetings, jokes, arithmetic, dictionary lookups,
//!   time and date.
//!
//! Both classify with an ordered trigger table (`intent`) and hand the text
//! to the matching generator. Both implement `Responder`, which is all the
//! interactive `chat` command needs.
//!
//! ## Examples
//!
//! ```rust
//! # use codepal::responder::canned::ReplyPicker;
//! # use codepal::responder::chatbot::{BotIdentity, Chatbot, Responder};
//! let bot = Chatbot::new(BotIdentity::default(), ReplyPicker::seeded(7));
//! let reply = bot.reply("Help with TypeError");
//! assert!(reply.starts_with("**TypeError Solution:**"));
//! ```
//!
use super::analyzer::CodeAnalyzer;
use super::canned::{ReplyPicker, SIMPLE_DEFAULT_REPLIES};
use super::dictionary::define;
use super::intent::{Intent, IntentClassifier};
use super::learning::LearningResources;
use super::lexicon::{API_FEATURES, CHAT_FEATURES, SIMPLE_JOKES};
use super::math::compute_math;
use super::problem::{domain_keys, ProblemSolver};
use chrono::Local;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

pub const DEFAULT_NAME: &str = "Codepal";
pub const REPHRASE_REPLY: &str = "I didn't catch that. Could you please rephrase?";
pub const SIMPLE_EMPTY_REPLY: &str = "Please say something!";
pub const ANALYZE_PROMPT: &str =
    "I can analyze your code. Please share the code snippet and I'll provide detailed feedback.";

/// Anything that can answer a chat message.
pub trait Responder: Send + Sync {
    fn reply(&self, input: &str) -> String;
    fn identity(&self) -> &BotIdentity;
}

/// Name and version a bot introduces itself with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub name: String,
    pub version: String,
}

impl Default for BotIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl BotIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Payload of `GET /api/chatbot-info`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatbotInfo {
    pub name: String,
    pub version: String,
    pub features: Vec<&'static str>,
    pub domains: Vec<&'static str>,
    pub total_messages: u64,
}

/// Payload of `GET /api/stats`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatbotStats {
    pub chatbot_name: String,
    pub chatbot_version: String,
    pub total_conversations: u64,
    pub problems_solved: u64,
    pub code_analyses: u64,
    pub available_domains: Vec<&'static str>,
}

// ===============================
// Full chatbot
// ===============================

/// The full programming-help chatbot. Owns the generators and their counters.
#[derive(Debug)]
pub struct Chatbot {
    identity: BotIdentity,
    classifier: IntentClassifier,
    picker: ReplyPicker,
    solver: ProblemSolver,
    analyzer: CodeAnalyzer,
    learning: LearningResources,
    conversations: AtomicU64,
}

impl Chatbot {
    pub fn new(identity: BotIdentity, picker: ReplyPicker) -> Self {
        Self {
            classifier: IntentClassifier::full(),
            picker,
            solver: ProblemSolver::new(),
            analyzer: CodeAnalyzer::new(identity.name.clone()),
            learning: LearningResources::new(identity.name.clone()),
            conversations: AtomicU64::new(0),
            identity,
        }
    }

    pub fn solver(&self) -> &ProblemSolver {
        &self.solver
    }

    pub fn analyzer(&self) -> &CodeAnalyzer {
        &self.analyzer
    }

    pub fn learning(&self) -> &LearningResources {
        &self.learning
    }

    /// Messages answered so far (empty input excluded).
    pub fn conversation_count(&self) -> u64 {
        self.conversations.load(Ordering::Relaxed)
    }

    pub fn info(&self) -> ChatbotInfo {
        ChatbotInfo {
            name: self.identity.name.clone(),
            version: self.identity.version.clone(),
            features: API_FEATURES.to_vec(),
            domains: domain_keys(),
            total_messages: self.conversation_count(),
        }
    }

    pub fn stats(&self) -> ChatbotStats {
        ChatbotStats {
            chatbot_name: self.identity.name.clone(),
            chatbot_version: self.identity.version.clone(),
            total_conversations: self.conversation_count(),
            problems_solved: self.solver.problems_solved(),
            code_analyses: self.analyzer.issues_found(),
            available_domains: domain_keys(),
        }
    }

    /// The command overview shown for "menu" or "help command".
    pub fn help_menu(&self) -> String {
        format!(
            "**{} - Help Menu**\n\n\
             Commands and Topics:\n\
             1️⃣ Problem Solving: \"Help with [Python/Debugging/Performance/Web/Database]\"\n\
             2️⃣ Code Analysis: \"Analyze code [provide code snippet]\"\n\
             3️⃣ Learning: \"Learn about [topic]\" or \"Learning path for [goal]\"\n\
             4️⃣ Examples: \"Show me example of [concept]\"\n\
             5️⃣ Tips: \"Give me [learning/debugging/performance] tips\"\n\
             6️⃣ Info: \"About\", \"Version\", \"Features\"\n\n\
             Example Questions:\n\
             • \"Help with AttributeError\"\n\
             • \"Optimize my code\"\n\
             • \"Learning resources for web development\"\n\
             • \"Show me list comprehension example\"\n\
             • \"Debugging tips\"",
            self.identity.name
        )
    }

    fn route(&self, intent: Intent, input: &str) -> String {
        let name = &self.identity.name;
        match intent {
            Intent::ProblemDomain => self.solver.solve(input, None),
            Intent::CodeAnalysis => ANALYZE_PROMPT.to_string(),
            Intent::LearningPath => {
                let goal = strip_phrases(input, &["learning path for", "path for"]);
                self.learning.path(&goal)
            }
            Intent::LearningResourceList => self.learning.list_all(),
            Intent::LearningResource => {
                let topic = strip_phrases(input, &["learn about", "teach me"]);
                self.learning.resource(&topic)
            }
            Intent::CodeExample => {
                let topic = strip_phrases(input, &["example of", "show me"]);
                self.solver.code_example(&topic)
            }
            Intent::Version => format!(
                "I'm {} version {}, created to help with programming problems and learning!",
                name, self.identity.version
            ),
            Intent::Features => {
                let bullets: Vec<String> = CHAT_FEATURES.iter().map(|f| format!("• {}", f)).collect();
                format!("**{} Features:**\n{}", name, bullets.join("\n"))
            }
            Intent::About => format!(
                "I'm {} - an advanced chatbot designed to solve programming problems, analyze code, and provide learning resources.",
                name
            ),
            Intent::LearningTips => self.learning.tips(),
            Intent::DebuggingTips => self.solver.tips("debugging").unwrap_or_default(),
            Intent::PerformanceTips => self.solver.tips("performance").unwrap_or_default(),
            Intent::Menu => self.help_menu(),
            canned => self.picker.respond(canned, name, &self.identity.version),
        }
    }
}

impl Responder for Chatbot {
    fn reply(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return REPHRASE_REPLY.to_string();
        }
        self.conversations.fetch_add(1, Ordering::Relaxed);
        let intent = self.classifier.classify(input);
        debug!("Classified message as {:?}", intent);
        self.route(intent, input)
    }

    fn identity(&self) -> &BotIdentity {
        &self.identity
    }
}

/// Removes each phrase (case-sensitive, as typed) and trims the result.
fn strip_phrases(input: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(input.to_string(), |text, phrase| text.replace(phrase, ""))
        .trim()
        .to_string()
}

// ===============================
// Simple chatbot
// ===============================

/// The small conversational chatbot: math, dictionary, jokes, clock.
#[derive(Debug)]
pub struct SimpleChatbot {
    identity: BotIdentity,
    classifier: IntentClassifier,
    picker: ReplyPicker,
}

impl SimpleChatbot {
    pub fn new(identity: BotIdentity, picker: ReplyPicker) -> Self {
        Self {
            identity,
            classifier: IntentClassifier::simple(),
            picker,
        }
    }

    pub fn joke(&self) -> String {
        self.picker
            .pick(SIMPLE_JOKES)
            .map(|joke| joke.to_string())
            .unwrap_or_default()
    }

    pub fn math(&self, problem: &str) -> String {
        compute_math(problem)
    }

    pub fn define(&self, text: &str) -> String {
        define(text)
    }

    pub fn help(&self) -> String {
        SIMPLE_HELP.replace("{name}", &self.identity.name)
    }

    fn route(&self, intent: Intent, input: &str) -> String {
        let name = &self.identity.name;
        match intent {
            Intent::Greeting => format!("Hello! I'm {}. How can I help you today?", name),
            Intent::Farewell => "Goodbye! Have a great day!".to_string(),
            Intent::Joke => self.joke(),
            Intent::Math => compute_math(input),
            Intent::Dictionary => define(input),
            Intent::Time => format!("Current time: {}", Local::now().format("%H:%M:%S")),
            Intent::Date => format!("Today is: {}", Local::now().format("%A, %B %d, %Y")),
            Intent::Identity => format!(
                "I'm {} v{}\nA rule-based assistant for math, jokes, and definitions.",
                name, self.identity.version
            ),
            Intent::Help => self.help(),
            _ => self
                .picker
                .pick(SIMPLE_DEFAULT_REPLIES)
                .map(|reply| reply.render(name, &self.identity.version))
                .unwrap_or_default(),
        }
    }
}

impl Responder for SimpleChatbot {
    fn reply(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return SIMPLE_EMPTY_REPLY.to_string();
        }
        let intent = self.classifier.classify(input);
        debug!("Classified message as {:?}", intent);
        self.route(intent, input)
    }

    fn identity(&self) -> &BotIdentity {
        &self.identity
    }
}

const SIMPLE_HELP: &str = "\
╔══════════════════════════════════════════════════════════╗
║     {name} - Help Menu
╚══════════════════════════════════════════════════════════╝

📚 AVAILABLE FEATURES:

1️⃣ JOKES & FUN
   - \"Tell me a joke\"
   - \"Make me laugh\"
   - \"Funny\"

2️⃣ MATHEMATICS
   - Addition: \"calculate 5 + 3\"
   - Subtraction: \"calculate 10 - 2\"
   - Multiplication: \"multiply 5 * 4\"
   - Division: \"divide 20 / 4\"
   - Square: \"calculate square 9\"
   - Square Root: \"calculate sqrt 16\"

3️⃣ DICTIONARY & DEFINITIONS
   - \"definition of python\"
   - \"what does algorithm mean\"
   - \"dictionary api\"

4️⃣ TIME & DATE
   - \"what time is it\"
   - \"what's the date\"
   - \"today\"

5️⃣ INFORMATION
   - \"who are you\"
   - \"what can you do\"
   - \"help\"

6️⃣ GREETINGS
   - \"hello\" / \"hi\"
   - \"goodbye\" / \"bye\"

Need help? Just type \"help\" anytime!";
