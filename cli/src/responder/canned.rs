//! # Canned Replies
//!
//! File: cli/src/responder/canned.rs
//!
//! ## Overview
//!
//! Intents such as greeting, farewell, or joke are answered by picking one
//! reply uniformly at random from a candidate list. Candidates are templates:
//! `{name}` and `{version}` are replaced with the bot's identity, and clock
//! replies are formatted from the current wall-clock time on every call.
//!
//! The random source is injected (`ReplyPicker::seeded`) so tests and
//! `--seed` runs are deterministic.
//!
use super::intent::Intent;
use chrono::Local;
use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// One candidate reply.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Fixed text; may contain `{name}` and `{version}`.
    Text(&'static str),
    /// `{now}` in `template` is replaced by the local time rendered with the
    /// strftime-style `format`.
    Clock {
        template: &'static str,
        format: &'static str,
    },
}

impl Reply {
    pub fn render(&self, name: &str, version: &str) -> String {
        match self {
            Reply::Text(text) => fill_identity(text, name, version),
            Reply::Clock { template, format } => {
                let now = Local::now().format(format).to_string();
                fill_identity(template, name, version).replace("{now}", &now)
            }
        }
    }
}

fn fill_identity(text: &str, name: &str, version: &str) -> String {
    text.replace("{name}", name).replace("{version}", version)
}

/// Candidate replies of the full chatbot, per intent.
pub static FULL_REPLIES: &[(Intent, &[Reply])] = &[
    (
        Intent::Greeting,
        &[
            Reply::Text("Hello! I'm {name}. How can I help you today?"),
            Reply::Text("Hi there! I'm {name}. What can I do for you?"),
            Reply::Text("Greetings! I'm {name}. How may I assist you?"),
            Reply::Text("Hey! I'm {name}. Nice to meet you. What do you need?"),
        ],
    ),
    (
        Intent::Farewell,
        &[
            Reply::Text("Goodbye! Have a great day!"),
            Reply::Text("See you later! Take care!"),
            Reply::Text("Bye! Thanks for chatting with me!"),
            Reply::Text("Farewell! Come back soon!"),
        ],
    ),
    (
        Intent::Gratitude,
        &[
            Reply::Text("You're welcome! Happy to help!"),
            Reply::Text("My pleasure! Anything else?"),
            Reply::Text("Glad I could help! Let me know if you need anything else."),
            Reply::Text("No problem! I'm here to help."),
        ],
    ),
    (
        Intent::HowAreYou,
        &[
            Reply::Text("I'm doing great, thanks for asking! How about you?"),
            Reply::Text("I'm good! Ready to help you with anything!"),
            Reply::Text("Doing well! What can I do for you?"),
            Reply::Text("All systems operational and ready to chat!"),
        ],
    ),
    (
        Intent::Identity,
        &[
            Reply::Text("I'm {name} (v{version}), your advanced problem-solving assistant!"),
            Reply::Text("You can call me {name}. I solve problems and teach programming!"),
            Reply::Text("I'm {name}, here to help you with coding and learning!"),
        ],
    ),
    (
        Intent::Help,
        &[
            Reply::Text("{name} can solve programming problems, analyze code, provide learning resources, and much more!"),
            Reply::Text("I'm {name}! I can help with debugging, performance optimization, code analysis, and learning Python."),
            Reply::Text("As {name}, I can assist with general conversations, solve coding problems, and teach programming!"),
        ],
    ),
    (
        Intent::Joke,
        &[
            Reply::Text("Why did the programmer quit his job? Because he didn't get arrays!"),
            Reply::Text("Why do programmers prefer dark mode? Because light attracts bugs!"),
            Reply::Text("How many programmers does it take to change a light bulb? None, that's a hardware problem!"),
            Reply::Text("Why did Python go to the gym? To get more fit in the fit() function!"),
        ],
    ),
    (
        Intent::Time,
        &[
            Reply::Clock { template: "The current time is {now}", format: "%H:%M:%S" },
            Reply::Clock { template: "It's {now} right now.", format: "%I:%M %p" },
            Reply::Clock { template: "According to my clock, it's {now}", format: "%H:%M" },
        ],
    ),
    (
        Intent::Date,
        &[
            Reply::Clock { template: "Today is {now}", format: "%A, %B %d, %Y" },
            Reply::Clock { template: "The date is {now}", format: "%m/%d/%Y" },
            Reply::Clock { template: "It's {now}", format: "%A, %B %d" },
        ],
    ),
    (
        Intent::Default,
        &[
            Reply::Text("That's interesting! Tell me more."),
            Reply::Text("I see. Could you elaborate?"),
            Reply::Text("Interesting point! How does that relate to what you're working on?"),
            Reply::Text("I understand. What else would you like to know?"),
            Reply::Text("Got it! Is there anything else I can help you with?"),
            Reply::Text("That's great! Do you have any other questions?"),
        ],
    ),
];

/// Fallback chatter of the simple chatbot.
pub static SIMPLE_DEFAULT_REPLIES: &[Reply] = &[
    Reply::Text("That's interesting! Tell me more."),
    Reply::Text("I see. Could you elaborate?"),
    Reply::Text("Interesting! Do you need help with anything?"),
    Reply::Text("I'm here to help! Ask me about math, jokes, or definitions."),
    Reply::Text("Can you rephrase that? Or try asking me a joke!"),
    Reply::Text("Got it! Do you want help with math or a joke?"),
];

/// Candidate list for `intent`, falling back to the `Default` list.
pub fn candidates(intent: Intent) -> &'static [Reply] {
    FULL_REPLIES
        .iter()
        .find(|(candidate, _)| *candidate == intent)
        .or_else(|| FULL_REPLIES.iter().find(|(c, _)| *c == Intent::Default))
        .map(|(_, replies)| *replies)
        .unwrap_or(&[])
}

/// # Reply Picker (`ReplyPicker`)
///
/// Uniform random choice over candidate lists, behind a mutex so one picker
/// can be shared by concurrent requests.
#[derive(Debug)]
pub struct ReplyPicker {
    rng: Mutex<StdRng>,
}

impl ReplyPicker {
    /// A picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A deterministic picker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Picks one item; `None` only for an empty slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut *self.rng.lock())
    }

    /// `respond(intent)`: a rendered random candidate for `intent`.
    pub fn respond(&self, intent: Intent, name: &str, version: &str) -> String {
        self.pick(candidates(intent))
            .map(|reply| reply.render(name, version))
            .unwrap_or_default()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(intent: Intent) -> Vec<String> {
        candidates(intent)
            .iter()
            .map(|r| r.render("Codepal", "2.0"))
            .collect()
    }

    #[test]
    fn test_respond_picks_from_the_intent_list() {
        let picker = ReplyPicker::seeded(1);
        let options = rendered(Intent::Farewell);
        for _ in 0..20 {
            let reply = picker.respond(Intent::Farewell, "Codepal", "2.0");
            assert!(options.contains(&reply), "unexpected reply: {reply}");
        }
    }

    #[test]
    fn test_identity_placeholders_are_filled() {
        let reply = Reply::Text("I'm {name} (v{version})").render("Rusty", "3.1");
        assert_eq!(reply, "I'm Rusty (v3.1)");
    }

    #[test]
    fn test_clock_replies_render_fresh_time() {
        let reply = Reply::Clock {
            template: "Year {now}",
            format: "%Y",
        }
        .render("Codepal", "2.0");
        assert_eq!(reply, format!("Year {}", Local::now().format("%Y")));
        assert!(!reply.contains("{now}"));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = ReplyPicker::seeded(42);
        let b = ReplyPicker::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.respond(Intent::Default, "Codepal", "2.0"),
                b.respond(Intent::Default, "Codepal", "2.0")
            );
        }
    }

    #[test]
    fn test_intents_without_a_list_use_default_chatter() {
        assert_eq!(candidates(Intent::Math).len(), candidates(Intent::Default).len());
        assert!(ReplyPicker::seeded(3).pick::<u8>(&[]).is_none());
    }
}
