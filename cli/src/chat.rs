//! # Interactive Chat
//!
//! File: cli/src/chat.rs
//!
//! ## Overview
//!
//! A line-oriented REPL for talking to a chatbot from the terminal, without
//! starting the HTTP server. Each input line gets one reply. `quit` or `exit`
//! (any case) ends the session, as does end of input.
//!
//! ## Examples
//!
//! ```bash
//! codepal chat
//! codepal chat --simple --seed 7
//! echo "calculate 5 + 3" | codepal chat --simple
//! ```
//!
use crate::core::error::Result;
use crate::responder::canned::ReplyPicker;
use crate::responder::chatbot::{BotIdentity, Chatbot, Responder, SimpleChatbot};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Command-line arguments of `codepal chat`.
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Talk to the simple chatbot (math, jokes, dictionary) instead of the full one.
    #[arg(long)]
    pub simple: bool,

    /// Seed for reply selection. Omit for random replies.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name the bot introduces itself with.
    #[arg(long, default_value = crate::responder::chatbot::DEFAULT_NAME)]
    pub name: String,
}

const EXIT_WORDS: &[&str] = &["quit", "exit"];

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the requested chatbot and runs the REPL on stdin/stdout.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let identity = BotIdentity::named(args.name);
    let picker = ReplyPicker::from_seed(args.seed);

    let bot: Box<dyn Responder> = if args.simple {
        Box::new(SimpleChatbot::new(identity, picker))
    } else {
        Box::new(Chatbot::new(identity, picker))
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(bot.as_ref(), stdin.lock(), stdout.lock())
}

/// # Run REPL (`run_repl`)
///
/// ## Arguments
///
/// * `bot`: The chatbot answering each line.
/// * `input`: Source of user lines.
/// * `output`: Where prompts and replies are written.
///
/// ## Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_repl<R: BufRead, W: Write>(bot: &dyn Responder, input: R, mut output: W) -> Result<()> {
    let name = bot.identity().name.clone();
    writeln!(
        output,
        "Chat with {}! Type 'quit' to exit.",
        name
    )
    .context("Failed to write to stdout")?;

    let mut lines = input.lines();
    loop {
        write!(output, "You: ").context("Failed to write to stdout")?;
        output.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            debug!("End of input, leaving chat");
            writeln!(output).context("Failed to write to stdout")?;
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();

        if EXIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
            writeln!(output, "{}: Goodbye!", name).context("Failed to write to stdout")?;
            break;
        }

        let reply = bot.reply(trimmed);
        writeln!(output, "{}: {}", name, reply).context("Failed to write to stdout")?;
    }

    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(bot: &dyn Responder, input: &str) -> String {
        let mut output = Vec::new();
        run_repl(bot, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_replies_to_each_line_until_quit() {
        let bot = SimpleChatbot::new(BotIdentity::default(), ReplyPicker::seeded(1));
        let out = transcript(&bot, "calculate 5 + 3\nQUIT\nhello\n");
        assert!(out.starts_with("Chat with Codepal! Type 'quit' to exit.\n"));
        assert!(out.contains("Codepal: Result: 8.0\n"));
        assert!(out.contains("Codepal: Goodbye!\n"));
        assert!(!out.contains("How can I help you today?"));
    }

    #[test]
    fn test_end_of_input_ends_the_session() {
        let bot = Chatbot::new(BotIdentity::named("Rusty"), ReplyPicker::seeded(1));
        let out = transcript(&bot, "Help with TypeError");
        assert!(out.contains("Rusty: **TypeError Solution:**"));
        assert!(out.ends_with("You: \n"));
    }
}
