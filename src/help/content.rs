/// Key/description pairs shown in the help popup
///
/// An entry with an empty key is a section header; two empty strings are a
/// blank spacer line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Tab / Shift+Tab", "Switch focus (Questions / Ask)"),
    ("PageUp/PageDown", "Scroll the answer"),
    ("Esc / Ctrl+C", "Quit"),
    ("", ""),
    ("", "SUGGESTED QUESTIONS"),
    ("↑/↓ or k/j", "Select a question"),
    ("Enter", "Ask the selected question"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
    ("", ""),
    ("", "ASK"),
    ("Enter", "Ask the typed question"),
    ("", ""),
    ("", "Only one question can be in flight at a time."),
];

pub const HELP_FOOTER: &str = "Press F1, ? or Esc to close";
