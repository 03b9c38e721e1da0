//! Terminal window contents: a small command interpreter over the visitor's desktop.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};

use folio_app_contract::{AppLaunch, AppMountContext, AppType};
use leptos::ev::KeyboardEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_TERMINAL_ENTRIES: usize = 200;
const PROMPT: &str = "visitor@folio:~$";
static NEXT_TERMINAL_INSTANCE_ID: AtomicUsize = AtomicUsize::new(1);

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  help            show this list",
    "  whoami          who is on the other side",
    "  about           open the About window",
    "  projects        open the Projects window",
    "  contact         open the Contact window",
    "  ls              list launchable apps",
    "  open <app>      open an app by name",
    "  echo <text>     print text",
    "  clear           clear the screen",
    "  exit            close this terminal",
];

#[derive(Debug, Clone, PartialEq)]
/// Result of interpreting one input line.
pub enum CommandOutcome {
    /// Lines to append to the transcript.
    Output(Vec<String>),
    /// Reset the transcript.
    Clear,
    /// Close the hosting window.
    Exit,
    /// Ask the window manager to open an app, with a confirmation line.
    Open {
        /// Launch request forwarded to the host.
        launch: AppLaunch,
        /// Line echoed to the transcript.
        message: String,
    },
    /// Blank input; nothing to do.
    Empty,
}

fn open_outcome(app_type: AppType) -> CommandOutcome {
    CommandOutcome::Open {
        message: format!("opening {}...", app_type.display_name()),
        launch: AppLaunch::for_app(app_type),
    }
}

/// Interprets a single input line.
pub fn interpret(line: &str) -> CommandOutcome {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => CommandOutcome::Empty,
        "help" => CommandOutcome::Output(HELP_LINES.iter().map(|l| l.to_string()).collect()),
        "whoami" => CommandOutcome::Output(vec!["visitor".to_string()]),
        "about" => open_outcome(AppType::About),
        "projects" => open_outcome(AppType::Projects),
        "contact" => open_outcome(AppType::Contact),
        "ls" => CommandOutcome::Output(
            AppType::KNOWN
                .iter()
                .map(|app| format!("{:<10} {}", app.as_str(), app.display_name()))
                .collect(),
        ),
        "clear" | "cls" => CommandOutcome::Clear,
        "exit" => CommandOutcome::Exit,
        "echo" => CommandOutcome::Output(vec![rest.to_string()]),
        "open" if rest.is_empty() => {
            CommandOutcome::Output(vec!["usage: open <app>".to_string()])
        }
        "open" => match AppType::parse(rest) {
            AppType::Unknown => CommandOutcome::Output(vec![format!("open: no such app: {rest}")]),
            app_type => open_outcome(app_type),
        },
        other => CommandOutcome::Output(vec![format!("{other}: command not found")]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum TerminalTranscriptEntry {
    Prompt { command: String },
    Output { text: String },
    System { text: String },
}

fn default_terminal_transcript(greeting: Option<&str>) -> Vec<TerminalTranscriptEntry> {
    let mut entries = vec![TerminalTranscriptEntry::System {
        text: greeting.unwrap_or("folio shell").to_string(),
    }];
    entries.push(TerminalTranscriptEntry::System {
        text: "Type `help` for commands.".to_string(),
    });
    entries
}

fn normalize_terminal_transcript(transcript: &mut Vec<TerminalTranscriptEntry>) {
    if transcript.len() > MAX_TERMINAL_ENTRIES {
        let overflow = transcript.len() - MAX_TERMINAL_ENTRIES;
        transcript.drain(0..overflow);
    }
}

fn render_transcript_entry(entry: &TerminalTranscriptEntry) -> String {
    match entry {
        TerminalTranscriptEntry::Prompt { command } => format!("{PROMPT} {command}"),
        TerminalTranscriptEntry::Output { text } | TerminalTranscriptEntry::System { text } => {
            text.clone()
        }
    }
}

/// Next history cursor for an arrow-key step (`-1` older, `1` newer).
fn step_history_cursor(cursor: Option<usize>, direction: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (cursor, direction) {
        (None, -1) => Some(len - 1),
        (Some(index), -1) if index > 0 => Some(index - 1),
        (Some(index), 1) if index + 1 < len => Some(index + 1),
        (Some(_), 1) => None,
        (current, _) => current,
    }
}

#[component]
/// Terminal app window contents.
///
/// `initial_data` may carry a `greeting` string shown as the first transcript line.
pub fn TerminalApp(
    /// Mount context supplied by the hosting window.
    context: AppMountContext,
) -> impl IntoView {
    let input_id = format!(
        "folio-terminal-input-{}",
        NEXT_TERMINAL_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)
    );
    let greeting = context
        .initial_data
        .get("greeting")
        .and_then(Value::as_str)
        .map(str::to_string);
    let greeting = store_value(greeting);
    let host = context.host;

    let input = create_rw_signal(String::new());
    let transcript = create_rw_signal(greeting.with_value(|g| default_terminal_transcript(g.as_deref())));
    let history = create_rw_signal(Vec::<String>::new());
    let history_cursor = create_rw_signal::<Option<usize>>(None);

    let push_lines = move |lines: Vec<TerminalTranscriptEntry>| {
        transcript.update(|entries| {
            entries.extend(lines);
            normalize_terminal_transcript(entries);
        });
    };

    let submit_command = move |command: String| {
        let command = command.trim().to_string();
        input.set(String::new());
        history_cursor.set(None);
        if command.is_empty() {
            return;
        }
        history.update(|items| items.push(command.clone()));
        push_lines(vec![TerminalTranscriptEntry::Prompt {
            command: command.clone(),
        }]);

        match interpret(&command) {
            CommandOutcome::Output(lines) => push_lines(
                lines
                    .into_iter()
                    .map(|text| TerminalTranscriptEntry::Output { text })
                    .collect(),
            ),
            CommandOutcome::Clear => {
                transcript.set(greeting.with_value(|g| default_terminal_transcript(g.as_deref())))
            }
            CommandOutcome::Exit => host.close(),
            CommandOutcome::Open { launch, message } => {
                push_lines(vec![TerminalTranscriptEntry::System { text: message }]);
                host.open(launch);
            }
            CommandOutcome::Empty => {}
        }
    };

    let navigate_history = move |direction: i32| {
        let items = history.get_untracked();
        let next = step_history_cursor(history_cursor.get_untracked(), direction, items.len());
        history_cursor.set(next);
        input.set(next.map(|index| items[index].clone()).unwrap_or_default());
    };

    let indexed_entries = move || {
        transcript
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| (idx, render_transcript_entry(&entry)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=indexed_entries key=|(idx, line)| (*idx, line.clone()) let:entry>
                    <div class="terminal-line">{entry.1}</div>
                </For>
            </div>

            <div class="terminal-input-row">
                <label class="terminal-prompt" for=input_id.clone()>{PROMPT}</label>
                <input
                    id=input_id.clone()
                    class="terminal-input"
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => submit_command(input.get_untracked()),
                            "ArrowUp" => {
                                ev.prevent_default();
                                navigate_history(-1);
                            }
                            "ArrowDown" => {
                                ev.prevent_default();
                                navigate_history(1);
                            }
                            "l" | "L" if ev.ctrl_key() => {
                                ev.prevent_default();
                                transcript.set(
                                    greeting.with_value(|g| default_terminal_transcript(g.as_deref())),
                                );
                            }
                            _ => {}
                        }
                    }
                    placeholder="Try: help"
                    autocomplete="off"
                    spellcheck="false"
                />
            </div>
        </div>
    }
}
