//! Interactive deck shell
//!
//! A line-oriented stand-in for the browser page: each command is one of
//! the page's controls (add, remove, toggle edit mode, click a card, fill
//! the editor fields, save).

use crate::deck::collection::Deck;
use crate::deck::types::FaceKind;
use crate::editor::{
    ClickOutcome, EditController, EditError, EditResult, EditorForm, FaceOutcome,
    FsImageLoader, SaveReport, UiState,
};
use crate::store::kv::KeyValueStore;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "flipdeck> ";
const SUMMARY_CHARS: usize = 40;

const HELP: &str = "\
Commands:
  add                 append a placeholder card
  remove              remove the last card
  toggle              enter or leave edit mode
  click N             click card N (flip in view mode, select in edit mode)
  front TEXT          set the editor's front text
  back TEXT           set the editor's back text
  front-image PATH    set the editor's front image
  back-image PATH     set the editor's back image
  clear               clear the editor fields
  save                apply the editor to the selected card
  show                print the deck
  help                print this help
  quit                leave the shell";

/// One shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Remove,
    Toggle,
    Click(usize),
    FrontText(String),
    BackText(String),
    FrontImage(PathBuf),
    BackImage(PathBuf),
    Clear,
    Save,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid card index: {0}")]
    InvalidIndex(String),
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(&['\r', '\n'][..]);
        // Text arguments keep everything after the one separator
        let (word, text) = match line.split_once(char::is_whitespace) {
            Some((word, text)) => (word, text),
            None => (line, ""),
        };
        let rest = text.trim();

        let path_arg = |command: &'static str| {
            if rest.is_empty() {
                Err(ParseCommandError::MissingArgument {
                    command,
                    expected: "a file path",
                })
            } else {
                Ok(PathBuf::from(rest))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(ShellCommand::Add),
            "remove" => Ok(ShellCommand::Remove),
            "toggle" | "edit" => Ok(ShellCommand::Toggle),
            "click" => {
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument {
                        command: "click",
                        expected: "a card index",
                    });
                }
                rest.parse()
                    .map(ShellCommand::Click)
                    .map_err(|_| ParseCommandError::InvalidIndex(rest.to_string()))
            }
            "front" => Ok(ShellCommand::FrontText(text.to_string())),
            "back" => Ok(ShellCommand::BackText(text.to_string())),
            "front-image" => path_arg("front-image").map(ShellCommand::FrontImage),
            "back-image" => path_arg("back-image").map(ShellCommand::BackImage),
            "clear" => Ok(ShellCommand::Clear),
            "save" => Ok(ShellCommand::Save),
            "show" | "list" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(ParseCommandError::Unknown(word.to_string())),
        }
    }
}

/// What the shell does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    Continue(String),
    Quit,
}

/// List cards with their face summaries, one per line
///
/// `*` marks the selected card, `~` a flipped one.
pub fn format_deck(deck: &Deck, state: UiState) -> String {
    if deck.is_empty() {
        return "No cards yet.".to_string();
    }

    let mut out = String::new();
    for (index, view) in deck.iter().enumerate() {
        let marker = match (state.selected() == Some(index), view.flipped) {
            (true, _) => '*',
            (false, true) => '~',
            (false, false) => ' ',
        };
        let front = FaceKind::classify(&view.card.front).summary(SUMMARY_CHARS);
        let back = FaceKind::classify(&view.card.back).summary(SUMMARY_CHARS);
        let _ = writeln!(out, "{}{:>3}  {}  |  {}", marker, index, front, back);
    }
    out.pop();
    out
}

fn describe_face(outcome: &FaceOutcome) -> String {
    match outcome {
        FaceOutcome::Updated => "updated".to_string(),
        FaceOutcome::Unchanged => "unchanged".to_string(),
        FaceOutcome::Failed(err) => format!("unchanged ({})", err),
    }
}

pub struct Shell<S> {
    controller: EditController<S>,
    form: EditorForm<PathBuf>,
    loader: FsImageLoader,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(controller: EditController<S>) -> Self {
        Self {
            controller,
            form: EditorForm::new(),
            loader: FsImageLoader,
        }
    }

    pub fn controller(&self) -> &EditController<S> {
        &self.controller
    }

    pub fn form(&self) -> &EditorForm<PathBuf> {
        &self.form
    }

    /// Run one command
    pub async fn execute(&mut self, command: ShellCommand) -> EditResult<ShellReply> {
        let message = match command {
            ShellCommand::Add => {
                let index = self.controller.add_card(None)?;
                format!("Added card {}", index)
            }
            ShellCommand::Remove => match self.controller.remove_last()? {
                Some(_) => format!("Removed card {}", self.controller.deck().len()),
                None => "No cards to remove".to_string(),
            },
            ShellCommand::Toggle => {
                let state = self.controller.toggle_edit_mode();
                format!(
                    "Now in {} mode [{}]",
                    if state.is_edit_mode() { "edit" } else { "view" },
                    state.toggle_label(self.controller.locale())
                )
            }
            ShellCommand::Click(index) => match self.controller.click_card(index)? {
                ClickOutcome::Flipped { index, flipped } => format!(
                    "Card {} shows its {}",
                    index,
                    if flipped { "back" } else { "front" }
                ),
                ClickOutcome::Selected(index) => {
                    self.form.reset();
                    format!("Selected card {}", index)
                }
                ClickOutcome::Ignored => "Nothing to do".to_string(),
            },
            ShellCommand::FrontText(_)
            | ShellCommand::BackText(_)
            | ShellCommand::FrontImage(_)
            | ShellCommand::BackImage(_)
            | ShellCommand::Clear
                if !self.controller.state().is_edit_mode() =>
            {
                "The editor is hidden; `toggle` into edit mode first".to_string()
            }
            ShellCommand::FrontText(text) => {
                self.form.front.text = text;
                "Front text set".to_string()
            }
            ShellCommand::BackText(text) => {
                self.form.back.text = text;
                "Back text set".to_string()
            }
            ShellCommand::FrontImage(path) => {
                self.form.front.image = Some(path);
                "Front image set".to_string()
            }
            ShellCommand::BackImage(path) => {
                self.form.back.image = Some(path);
                "Back image set".to_string()
            }
            ShellCommand::Clear => {
                self.form.reset();
                "Editor cleared".to_string()
            }
            ShellCommand::Save => {
                let form = self.form.clone();
                match self.controller.save_card_content(form, &self.loader).await? {
                    SaveReport::NoSelection => "No card selected".to_string(),
                    SaveReport::Discarded { index } => {
                        format!("Card {} is gone; edit dropped", index)
                    }
                    SaveReport::Saved { index, front, back } => format!(
                        "Saved card {}: front {}, back {}",
                        index,
                        describe_face(&front),
                        describe_face(&back)
                    ),
                }
            }
            ShellCommand::Show => self.show(),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(ShellReply::Quit),
        };

        Ok(ShellReply::Continue(message))
    }

    fn show(&self) -> String {
        let state = self.controller.state();
        let mut out = format!(
            "Mode: {} [{}]\n{}",
            state,
            state.toggle_label(self.controller.locale()),
            format_deck(self.controller.deck(), state)
        );

        if state.is_edit_mode() {
            let image_name = |image: &Option<PathBuf>| {
                image
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string())
            };
            let _ = write!(
                out,
                "\nEditor: front text {:?}, front image {}, back text {:?}, back image {}",
                self.form.front.text,
                image_name(&self.form.front.image),
                self.form.back.text,
                image_name(&self.form.back.image)
            );
        }
        out
    }

    /// Read commands from `input` until it ends or `quit`
    ///
    /// Errors from individual commands are printed and the session goes on.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if !line.trim().is_empty() {
                let reply = match line.parse::<ShellCommand>() {
                    Ok(command) => match self.execute(command).await {
                        Ok(ShellReply::Quit) => break,
                        Ok(ShellReply::Continue(message)) => message,
                        Err(EditError::Store(e)) => {
                            tracing::error!(error = %e, "Storage failure in shell");
                            format!("error: {}", e)
                        }
                        Err(e) => format!("error: {}", e),
                    },
                    Err(e) => e.to_string(),
                };
                output.write_all(reply.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }

            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
        }

        output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::types::{Card, Locale};
    use crate::store::cards::CardStore;
    use crate::store::kv::MemoryStore;

    fn shell() -> Shell<MemoryStore> {
        Shell::new(EditController::new(
            CardStore::new(MemoryStore::new()),
            Locale::En,
        ))
    }

    async fn run(shell: &mut Shell<MemoryStore>, line: &str) -> String {
        match shell.execute(line.parse().unwrap()).await.unwrap() {
            ShellReply::Continue(message) => message,
            ShellReply::Quit => "<quit>".to_string(),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add".parse::<ShellCommand>().unwrap(), ShellCommand::Add);
        assert_eq!(
            "click 3".parse::<ShellCommand>().unwrap(),
            ShellCommand::Click(3)
        );
        assert_eq!(
            "front Hello world".parse::<ShellCommand>().unwrap(),
            ShellCommand::FrontText("Hello world".to_string())
        );
        assert_eq!(
            "back  indented".parse::<ShellCommand>().unwrap(),
            ShellCommand::BackText(" indented".to_string())
        );
        assert_eq!(
            "click 3 ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Click(3)
        );
        assert_eq!(
            "back-image ./cat.png".parse::<ShellCommand>().unwrap(),
            ShellCommand::BackImage(PathBuf::from("./cat.png"))
        );
        assert!(matches!(
            "click x".parse::<ShellCommand>(),
            Err(ParseCommandError::InvalidIndex(_))
        ));
        assert!(matches!(
            "front-image".parse::<ShellCommand>(),
            Err(ParseCommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            "dance".parse::<ShellCommand>(),
            Err(ParseCommandError::Unknown(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_session() {
        let mut shell = shell();
        assert_eq!(run(&mut shell, "add").await, "Added card 0");
        assert_eq!(run(&mut shell, "toggle").await, "Now in edit mode [Exit edit mode]");
        assert_eq!(run(&mut shell, "click 0").await, "Selected card 0");
        run(&mut shell, "front Hello").await;
        assert_eq!(
            run(&mut shell, "save").await,
            "Saved card 0: front updated, back unchanged"
        );

        let card = shell.controller().deck().get(0).unwrap().card.clone();
        assert_eq!(card, Card::new("<p>Hello</p>", "<p>Click to edit back</p>"));
    }

    #[tokio::test]
    async fn test_whitespace_text_replaces_face() {
        let mut shell = shell();
        run(&mut shell, "add").await;
        run(&mut shell, "toggle").await;
        run(&mut shell, "click 0").await;
        run(&mut shell, "front    ").await;
        assert_eq!(
            run(&mut shell, "save").await,
            "Saved card 0: front updated, back unchanged"
        );

        let card = shell.controller().deck().get(0).unwrap().card.clone();
        assert_eq!(card.front, "<p>   </p>");
    }

    #[tokio::test]
    async fn test_selecting_resets_editor() {
        let mut shell = shell();
        run(&mut shell, "add").await;
        run(&mut shell, "add").await;
        run(&mut shell, "toggle").await;
        run(&mut shell, "click 0").await;
        run(&mut shell, "front draft").await;
        run(&mut shell, "click 1").await;
        assert!(shell.form().is_empty());
    }

    #[tokio::test]
    async fn test_editor_hidden_in_view_mode() {
        let mut shell = shell();
        run(&mut shell, "add").await;
        assert!(run(&mut shell, "front x").await.contains("toggle"));
        assert!(shell.form().is_empty());
        assert_eq!(run(&mut shell, "save").await, "No card selected");
        assert_eq!(run(&mut shell, "click 0").await, "Card 0 shows its back");
    }

    #[tokio::test]
    async fn test_image_face_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        std::fs::write(&path, b"hi").unwrap();

        let mut shell = shell();
        run(&mut shell, "add").await;
        run(&mut shell, "toggle").await;
        run(&mut shell, "click 0").await;
        run(&mut shell, &format!("back-image {}", path.display())).await;
        run(&mut shell, "save").await;

        let card = shell.controller().deck().get(0).unwrap().card.clone();
        assert_eq!(card.back, r#"<img src="data:image/png;base64,aGk=" alt="Card image">"#);
    }

    #[tokio::test]
    async fn test_missing_image_reported() {
        let mut shell = shell();
        run(&mut shell, "add").await;
        run(&mut shell, "toggle").await;
        run(&mut shell, "click 0").await;
        run(&mut shell, "front-image /definitely/not/here.png").await;
        let reply = run(&mut shell, "save").await;
        assert!(reply.starts_with("Saved card 0: front unchanged (Failed to read image"));
    }

    #[tokio::test]
    async fn test_run_loop() {
        let mut shell = shell();
        let input: &[u8] = b"add\nadd\nbogus\nclick 9\nremove\nshow\nquit\nadd\n";
        let mut output = Vec::new();
        shell.run(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Unknown command: bogus"));
        assert!(output.contains("error: No card at index 9 (deck has 2 cards)"));
        assert!(output.contains("Removed card 1"));
        assert!(output.contains("Mode: view [Enter edit mode]"));
        assert_eq!(shell.controller().deck().len(), 1);
    }

    #[test]
    fn test_format_deck_markers() {
        let mut deck = Deck::from_cards(vec![
            Card::new("<p>Q1</p>", "<p>A1</p>"),
            Card::new("<p>Q2</p>", "<p>A2</p>"),
        ]);
        deck.toggle_flip(0);

        let listing = format_deck(&deck, UiState::EditSelected(1));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "~  0  Q1  |  A1");
        assert_eq!(lines[1], "*  1  Q2  |  A2");
        assert_eq!(format_deck(&Deck::new(), UiState::View), "No cards yet.");
    }
}
