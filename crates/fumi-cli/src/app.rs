//! Interactive envelope session
//!
//! Reads names from the terminal, feeds the greeting session and sleeps
//! until each scheduled animation step is due.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;

use fumi::{
    Clock, DomainError, GreetingSession, GuestDirectory, KeyValueStore, RevealEvent, RevealState,
};

use crate::config::Config;
use crate::render;

/// Typing this taps the hint text, which is only drawn while no error shows
const HINT_TAP: &str = ".";
const QUIT: &str = ":q";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Submit(String),
    TapHint,
    DismissError,
    Quit,
}

fn parse_command(line: &str, error_shown: bool) -> Command {
    match line.trim() {
        QUIT => Command::Quit,
        HINT_TAP if !error_shown => Command::TapHint,
        "" if error_shown => Command::DismissError,
        _ => Command::Submit(line.to_string()),
    }
}

pub async fn run<D, S, C>(mut session: GreetingSession<D, S, C>, config: &Config) -> Result<()>
where
    D: GuestDirectory,
    S: KeyValueStore,
    C: Clock + Clone,
{
    render::title(config);

    loop {
        render::envelope(session.machine().envelope_open());
        let error_shown = session.machine().error().is_some();
        if !error_shown {
            render::hint();
        }

        let line = prompt_name(&session)?;

        match parse_command(&line, error_shown) {
            Command::Quit => return Ok(()),
            Command::TapHint => {
                if session.tap_hint()? {
                    println!("  {}", "✓ 保存されたお名前をリセットしました".green());
                }
            }
            Command::DismissError => {
                session.handle(RevealEvent::DismissError).await?;
            }
            Command::Submit(name) => {
                if !session.machine().input_disabled() {
                    session.handle(RevealEvent::EditName(name)).await?;
                }

                let actions = match session.handle(RevealEvent::Submit).await {
                    Ok(actions) => actions,
                    Err(DomainError::EmptyInput) => continue,
                    Err(e) => return Err(e.into()),
                };
                render::actions(&actions, config);
                drive(&mut session, config).await?;

                if session.machine().state() == RevealState::Reading {
                    Input::<String>::new()
                        .with_prompt("Enter で最初の画面に戻る")
                        .allow_empty(true)
                        .interact_text()
                        .context("Failed to read input")?;

                    let actions = session.handle(RevealEvent::Close).await?;
                    render::actions(&actions, config);
                    drive(&mut session, config).await?;
                }
            }
        }
    }
}

/// Sleep through every scheduled step, rendering as they fire
async fn drive<D, S, C>(session: &mut GreetingSession<D, S, C>, config: &Config) -> Result<()>
where
    D: GuestDirectory,
    S: KeyValueStore,
    C: Clock + Clone,
{
    while let Some(deadline) = session.machine().next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        let actions = session.handle(RevealEvent::Tick).await?;
        render::actions(&actions, config);
    }
    Ok(())
}

fn prompt_name<D, S, C>(session: &GreetingSession<D, S, C>) -> Result<String>
where
    D: GuestDirectory,
    S: KeyValueStore,
    C: Clock + Clone,
{
    let machine = session.machine();

    let prompt = if machine.input_disabled() {
        format!("{} (Enter でメッセージを見る)", machine.name().cyan())
    } else {
        "お名前を入力してください (例：鈴木太郎)".to_string()
    };

    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(":q", false), Command::Quit);
        assert_eq!(parse_command(" . ", false), Command::TapHint);
        assert_eq!(
            parse_command("すずき たろう", false),
            Command::Submit("すずき たろう".to_string())
        );
    }

    #[test]
    fn test_empty_line_dismisses_error_only_when_shown() {
        assert_eq!(parse_command("", true), Command::DismissError);
        assert_eq!(parse_command("", false), Command::Submit(String::new()));
    }

    #[test]
    fn test_hint_tap_ignored_while_error_shown() {
        assert_eq!(parse_command(".", true), Command::Submit(".".to_string()));
        assert_eq!(parse_command(".", false), Command::TapHint);
    }
}
