//! Terminal presentation of a [`Screen`].
//!
//! Drawing returns strings so the interactive loop and the one-shot command
//! share the same layout, and so it can be tested with colors disabled.

use std::fmt::Write as _;

use console::style;

use crate::render::{AugmentationPanel, PanelState, PrimaryPanel, Screen, SearchView, SynonymPanel};

const WELCOME: &str = "Type a word to look up its definitions, synonyms, and AI notes.";
const LOADING: &str = "Loading...";

pub fn draw(screen: &Screen) -> String {
    match screen {
        Screen::Welcome => format!("{}\n", style(WELCOME).dim()),
        Screen::Error(message) => format!("{}\n", style(message).red().bold()),
        Screen::Results(view) => draw_view(view),
    }
}

pub fn draw_view(view: &SearchView) -> String {
    let mut out = draw_primary(&view.primary);
    out.push('\n');
    out.push_str(&draw_synonyms(&view.synonyms));
    for panel in view.panels() {
        out.push('\n');
        out.push_str(&draw_panel(panel));
    }
    out
}

pub fn draw_primary(primary: &PrimaryPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style(primary.headword()).bold().cyan());

    if let Some(placeholder) = primary.placeholder() {
        let _ = writeln!(out, "{}", style(placeholder).dim());
        return out;
    }

    let selector: Vec<String> = primary
        .selector()
        .into_iter()
        .map(|control| {
            if control.active {
                style(format!("[{}]", control.label)).bold().to_string()
            } else {
                style(format!(" {} ", control.label)).dim().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", selector.join(" "));

    for (i, item) in primary.definitions().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, item.text);
        if let Some(example) = &item.example {
            let _ = writeln!(out, "     {}", style(format!("\"{example}\"")).italic());
        }
        if let Some(synonyms) = &item.synonyms {
            let _ = writeln!(out, "     {} {}", style("Synonyms:").dim(), synonyms);
        }
    }
    out
}

pub fn draw_synonyms(synonyms: &SynonymPanel) -> String {
    let mut out = format!("{}\n", style("Synonyms").bold());
    match synonyms.message() {
        Some(message) => {
            let _ = writeln!(out, "  {}", style(message).dim());
        }
        None => {
            let chips: Vec<String> = synonyms
                .chips()
                .iter()
                .enumerate()
                .map(|(i, chip)| format!("{} {}", style(format!("{}.", i + 1)).dim(), chip))
                .collect();
            let _ = writeln!(out, "  {}", chips.join("  "));
        }
    }
    out
}

pub fn draw_panel(panel: &AugmentationPanel) -> String {
    let title = style(panel.kind.title()).bold();
    let body = match (&panel.state, panel.body()) {
        (PanelState::Failed, Some(text)) => style(text.to_string()).red().to_string(),
        (_, Some(text)) => text.to_string(),
        (_, None) => style(LOADING).dim().to_string(),
    };
    format!("{title}\n  {body}\n")
}

// =============================================================================
// Menu
// =============================================================================

/// What the interactive loop offers after drawing a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Search,
    Synonym(usize),
    PartOfSpeech(usize),
    Refresh,
    Quit,
}

impl MenuAction {
    pub fn label(&self, screen: &Screen) -> String {
        match self {
            MenuAction::Search => "Search a word".to_string(),
            MenuAction::Synonym(i) => {
                let chip = match screen {
                    Screen::Results(view) => view.synonyms.chip(*i).unwrap_or_default(),
                    _ => "",
                };
                format!("Look up \"{chip}\"")
            }
            MenuAction::PartOfSpeech(i) => {
                let label = match screen {
                    Screen::Results(view) => view
                        .primary
                        .selector()
                        .get(*i)
                        .map(|c| c.label.clone())
                        .unwrap_or_default(),
                    _ => String::new(),
                };
                format!("Show {label} definitions")
            }
            MenuAction::Refresh => "Refresh (AI notes still loading)".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries for the current screen. `pending` is the number of panels still loading.
pub fn menu_actions(screen: &Screen, pending: usize) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Search];

    if let Screen::Results(view) = screen {
        if pending > 0 {
            actions.push(MenuAction::Refresh);
        }
        let active = view.primary.active_index();
        for (i, _) in view.primary.selector().iter().enumerate() {
            if Some(i) != active {
                actions.push(MenuAction::PartOfSpeech(i));
            }
        }
        for i in 0..view.synonyms.chips().len() {
            actions.push(MenuAction::Synonym(i));
        }
    }

    actions.push(MenuAction::Quit);
    actions
}
