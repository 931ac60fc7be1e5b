//! Terminal presentation
//!
//! Draws the envelope, the letter and the error toast from the actions the
//! reveal state machine emits.

use colored::{ColoredString, Colorize};

use fumi::{LookupFailure, ResolvedGuest, RevealAction, RevealState};

use crate::config::Config;

/// Characters per line of the letter body
const LETTER_WIDTH: usize = 18;

/// Hint text; tapping it is the hidden reset gesture
pub const HINT_TEXT: &str = "※ お名前は漢字・ふりがなのどちらでも検索できます";

fn maroon(s: &str) -> ColoredString {
    s.truecolor(107, 45, 36)
}

fn brown(s: &str) -> ColoredString {
    s.truecolor(139, 107, 94)
}

fn terracotta(s: &str) -> ColoredString {
    s.truecolor(184, 92, 71)
}

pub fn title(config: &Config) {
    println!();
    println!("  {}", maroon("Message for You !").bold());
    println!("  {}", brown(&config.subtitle));
    println!();
}

pub fn envelope_art(open: bool) -> &'static str {
    if open {
        concat!(
            "     /\\______________/\\\n",
            "    /                  \\\n",
            "   +--------------------+\n",
            "   |\\                  /|\n",
            "   |  \\      ♥       /  |\n",
            "   |                    |\n",
            "   +--------------------+",
        )
    } else {
        concat!(
            "   +--------------------+\n",
            "   |\\                  /|\n",
            "   |  \\              /  |\n",
            "   |    \\    ♥     /    |\n",
            "   |      \\______/      |\n",
            "   |                    |\n",
            "   +--------------------+",
        )
    }
}

pub fn envelope(open: bool) {
    println!("{}", terracotta(envelope_art(open)));
    println!();
}

pub fn hint() {
    println!("  {}", brown(HINT_TEXT).dimmed());
}

pub fn error_toast(failure: LookupFailure) {
    println!("  {} {}", terracotta("ⓘ"), maroon(failure.message()));
}

/// Split text into lines of at most `width` characters, keeping line breaks
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let chars: Vec<char> = paragraph.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width.max(1)) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}

pub fn letter_text(guest: &ResolvedGuest, signature: &str) -> String {
    let mut out = String::new();
    out.push_str("  ╭────────────────────────────────────────╮\n");
    out.push_str("     Dear\n");
    out.push_str(&format!("     {}\n", guest.name));
    out.push_str("     ── ♥ ──\n\n");

    if guest.message.trim().is_empty() {
        out.push_str("     メッセージがありません\n");
    } else {
        for line in wrap(&guest.message, LETTER_WIDTH) {
            out.push_str(&format!("     {}\n", line));
        }
    }

    out.push('\n');
    out.push_str(&format!("     {}\n", signature));
    out.push_str("  ╰────────────────────────────────────────╯");
    out
}

pub fn letter(guest: &ResolvedGuest, signature: &str) {
    println!();
    println!("{}", maroon(&letter_text(guest, signature)));
    println!();
}

/// Render one machine action
pub fn action(action: &RevealAction, config: &Config) {
    match action {
        RevealAction::EnterState(RevealState::Searching) => {
            println!("  {}", brown("検索中..."));
        }
        RevealAction::EnterState(state) => {
            tracing::debug!("Entered {}", state);
        }
        RevealAction::EnvelopeOpened => envelope(true),
        RevealAction::EnvelopeClosed => envelope(false),
        RevealAction::ShowLetter(guest) => letter(guest, &config.signature),
        RevealAction::ShowError(failure) => error_toast(*failure),
        RevealAction::ClearLetter
        | RevealAction::ClearError
        | RevealAction::FetchDirectory { .. }
        | RevealAction::SaveGuest(_) => {}
    }
}

pub fn actions(actions: &[RevealAction], config: &Config) {
    for a in actions {
        action(a, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_by_chars() {
        assert_eq!(wrap("あいうえおかきくけこ", 4), vec!["あいうえ", "おかきく", "けこ"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        assert_eq!(wrap("一行目\n\n三行目", 10), vec!["一行目", "", "三行目"]);
    }

    #[test]
    fn test_letter_shows_name_message_and_signature() {
        let guest = ResolvedGuest {
            name: "鈴木太郎".to_string(),
            message: "来てくれてありがとう".to_string(),
        };
        let text = letter_text(&guest, "裏岡 雅史 & 三木 悠夏子");

        assert!(text.contains("Dear"));
        assert!(text.contains("鈴木太郎"));
        assert!(text.contains("来てくれてありがとう"));
        assert!(text.contains("裏岡 雅史 & 三木 悠夏子"));
    }

    #[test]
    fn test_letter_without_message() {
        let guest = ResolvedGuest {
            name: "鈴木太郎".to_string(),
            message: "  ".to_string(),
        };
        assert!(letter_text(&guest, "").contains("メッセージがありません"));
    }

    #[test]
    fn test_envelope_art_differs_when_open() {
        assert_ne!(envelope_art(true), envelope_art(false));
    }
}
