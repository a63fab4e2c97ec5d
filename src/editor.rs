//! Editor interaction state machine
//!
//! Owns the buffer text, caret/selection and completion menu, and reacts
//! to discrete input events: automatic delimiter pairing, closer
//! skip-over, context-sensitive indentation and keyword completion.
//! After every event the highlighting pipeline reruns synchronously with
//! the updated caret, so the render spans the host reads are never
//! stale.

use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::error::{EditorError, Result};
use crate::highlight::{self, brackets, IndentStyle, Span};
use crate::input::EditorEvent;
use crate::render::{render_runs, RenderRun};
use crate::session::Session;
use crate::theme::Theme;

/// Change hook invoked with the full text after every buffer mutation
pub type ChangeHook = Box<dyn FnMut(&str)>;

/// Completion menu state
///
/// Lives only while the editor is editable; commit, cancel, a caret move
/// off the word, or entering read-only mode all reset it to closed.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// Whether the menu is showing
    pub open: bool,
    /// Candidate list, in keyword-set order
    pub items: Vec<String>,
    /// Index of the highlighted candidate
    pub selected: usize,
    /// Byte offset where the completed word starts
    pub anchor: usize,
    /// Prefix the candidates were filtered by
    pub prefix: String,
}

impl MenuState {
    /// Reset to closed
    pub fn close(&mut self) {
        *self = MenuState::default();
    }
}

/// Caret/scroll work deferred until the host has applied layout
///
/// One slot, overwritten by each edit: only the latest pending
/// adjustment ever matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTask {
    /// Selection to restore
    pub selection_start: usize,
    pub selection_end: usize,
    /// Caret line index (0-based), for scrolling
    pub caret_line: usize,
    /// Visual caret column (display width), for scrolling
    pub caret_column: usize,
}

/// Construction-time options
pub struct EditorOptions {
    /// Initial buffer contents
    pub value: String,
    /// Language id resolved against the session registry
    pub language: String,
    /// Theme name resolved against the session registry
    pub theme: String,
    /// Start in read-only mode
    pub read_only: bool,
    /// Whether the host should draw line numbers
    pub line_numbers: bool,
    /// Width of one indentation unit, in spaces
    pub indent_width: usize,
    /// Invoked with the new text after every mutation; required unless
    /// read-only
    pub on_change: Option<ChangeHook>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl EditorOptions {
    /// Derive options from a configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            value: String::new(),
            language: config.language.clone(),
            theme: config.theme.clone(),
            read_only: false,
            line_numbers: config.line_numbers,
            indent_width: config.indent_width,
            on_change: None,
        }
    }
}

/// The editing surface state: buffer, caret, menu, computed spans
///
/// Single owner and single writer; the highlighting pipeline only ever
/// reads from it.
pub struct Editor {
    session: Session,
    text: String,
    selection_start: usize,
    selection_end: usize,
    language: String,
    theme: String,
    read_only: bool,
    line_numbers: bool,
    indent_unit: String,
    menu: MenuState,
    spans: Vec<Span>,
    on_change: Option<ChangeHook>,
    pending_layout: Option<LayoutTask>,
}

impl Editor {
    /// Create an editor over a session's registries
    ///
    /// Fails fast with `MissingChangeHook` when editable without a
    /// change hook: silently dropping edits would corrupt the caller's
    /// copy of the text.
    pub fn new(options: EditorOptions, session: Session) -> Result<Self> {
        if !options.read_only && options.on_change.is_none() {
            return Err(EditorError::MissingChangeHook);
        }
        let mut editor = Self {
            session,
            text: options.value,
            selection_start: 0,
            selection_end: 0,
            language: options.language,
            theme: options.theme,
            read_only: options.read_only,
            line_numbers: options.line_numbers,
            indent_unit: " ".repeat(options.indent_width.max(1)),
            menu: MenuState::default(),
            spans: Vec::new(),
            on_change: options.on_change,
            pending_layout: None,
        };
        editor.recompute();
        Ok(editor)
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection as byte offsets (caret when collapsed)
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Caret offset (the selection start)
    pub fn caret(&self) -> usize {
        self.selection_start
    }

    /// Move the selection programmatically
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection_start = floor_boundary(&self.text, start.min(self.text.len()));
        self.selection_end = floor_boundary(&self.text, end.min(self.text.len()))
            .max(self.selection_start);
        self.sync_menu_to_caret();
        self.recompute();
    }

    /// Replace the buffer from the host (external value sync)
    ///
    /// Does not fire the change hook; the host already has this text.
    pub fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
        self.selection_start = floor_boundary(&self.text, self.selection_start.min(self.text.len()));
        self.selection_end = floor_boundary(&self.text, self.selection_end.min(self.text.len()));
        self.menu.close();
        self.schedule_layout();
        self.recompute();
    }

    /// Whether the editor is read-only
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Toggle read-only mode
    ///
    /// Entering read-only closes the menu; leaving it requires a change
    /// hook to have been supplied at construction.
    pub fn set_read_only(&mut self, read_only: bool) -> Result<()> {
        if !read_only && self.on_change.is_none() {
            return Err(EditorError::MissingChangeHook);
        }
        self.read_only = read_only;
        if read_only {
            self.menu.close();
        }
        Ok(())
    }

    /// Completion menu state
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Whether the host should draw line numbers
    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    /// Switch language; unknown ids fall back to the session default
    pub fn set_language(&mut self, id: &str) {
        self.language = id.to_string();
        self.menu.close();
        self.recompute();
    }

    /// Switch theme; unknown names fall back to the session default
    pub fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
    }

    /// Resolved theme
    pub fn theme(&self) -> Option<&Theme> {
        self.session.theme(&self.theme)
    }

    /// The current render span sequence
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text split into labeled runs for the rendering surface
    pub fn render_runs(&self) -> Vec<RenderRun<'_>> {
        render_runs(&self.text, &self.spans)
    }

    /// Take the pending post-layout task, if any
    ///
    /// The host calls this after its next layout pass to restore the
    /// selection and scroll the caret into view with fresh metrics.
    pub fn take_post_layout(&mut self) -> Option<LayoutTask> {
        self.pending_layout.take()
    }

    /// Feed one input event through the state machine
    ///
    /// In read-only mode only navigation applies; every mutating event
    /// is a silent no-op.
    pub fn handle_event(&mut self, event: EditorEvent) {
        if self.read_only {
            self.menu.close();
            match event {
                EditorEvent::ArrowLeft => self.move_caret_left(),
                EditorEvent::ArrowRight => self.move_caret_right(),
                EditorEvent::ArrowUp => self.move_line(true),
                EditorEvent::ArrowDown => self.move_line(false),
                _ => {}
            }
            self.recompute();
            return;
        }

        match event {
            EditorEvent::Insert(ch) if closing_delimiter(ch).is_some() => self.insert_pair(ch),
            EditorEvent::Insert(ch) if is_closer(ch) => self.insert_closer(ch),
            EditorEvent::Insert(ch) => self.insert_literal(ch),
            EditorEvent::CompleteTrigger => self.update_completions(true),
            EditorEvent::ArrowDown if self.menu.open => {
                self.menu.selected = (self.menu.selected + 1) % self.menu.items.len();
            }
            EditorEvent::ArrowUp if self.menu.open => {
                let count = self.menu.items.len();
                self.menu.selected = (self.menu.selected + count - 1) % count;
            }
            EditorEvent::Enter | EditorEvent::Indent if self.menu.open => self.commit_completion(),
            EditorEvent::Escape => self.menu.close(),
            EditorEvent::Enter => self.insert_line_break(),
            EditorEvent::Indent => self.indent(),
            EditorEvent::Outdent => self.outdent(),
            EditorEvent::Backspace => self.backspace(),
            EditorEvent::ArrowLeft => {
                self.move_caret_left();
                self.sync_menu_to_caret();
            }
            EditorEvent::ArrowRight => {
                self.move_caret_right();
                self.sync_menu_to_caret();
            }
            EditorEvent::ArrowUp => {
                self.move_line(true);
                self.menu.close();
            }
            EditorEvent::ArrowDown => {
                self.move_line(false);
                self.menu.close();
            }
        }

        // Recompute with the updated caret so the active bracket pair
        // reflects the new position, not the pre-edit one
        self.recompute();
    }

    // --- mutation primitives ---

    /// Replace `[start, end)` with `insert`, set the new selection and
    /// fire the change hook
    fn apply_edit(&mut self, start: usize, end: usize, insert: &str, sel_start: usize, sel_end: usize) {
        let mut next = String::with_capacity(self.text.len() + insert.len());
        next.push_str(&self.text[..start]);
        next.push_str(insert);
        next.push_str(&self.text[end..]);
        self.text = next;
        self.selection_start = sel_start;
        self.selection_end = sel_end;
        if let Some(hook) = self.on_change.as_mut() {
            hook(&self.text);
        }
        self.schedule_layout();
    }

    /// Overwrite the pending post-layout slot with the current caret
    fn schedule_layout(&mut self) {
        let caret = self.selection_start;
        let start = line_start(&self.text, caret);
        self.pending_layout = Some(LayoutTask {
            selection_start: self.selection_start,
            selection_end: self.selection_end,
            caret_line: self.text[..caret].matches('\n').count(),
            caret_column: UnicodeWidthStr::width(&self.text[start..caret]),
        });
    }

    /// Rerun the full pipeline against the current text and caret
    fn recompute(&mut self) {
        let caret = Some(self.selection_start);
        self.spans = match self.session.language(&self.language) {
            Some(lang) => highlight::highlight(&self.text, lang, caret),
            None => brackets::analyze(&self.text, &[], caret).into_spans(),
        };
    }

    // --- per-event behavior ---

    /// Opening delimiter: wrap the selection or insert the pair
    fn insert_pair(&mut self, open: char) {
        let close = closing_delimiter(open).unwrap_or(open);
        let (s, e) = (self.selection_start, self.selection_end);
        let mut insert = String::new();
        insert.push(open);
        insert.push_str(&self.text[s..e]);
        insert.push(close);
        if s != e {
            // Keep the original content selected
            self.apply_edit(s, e, &insert, s + 1, e + 1);
        } else {
            self.apply_edit(s, e, &insert, s + 1, s + 1);
        }
    }

    /// Closing delimiter: skip over an identical character at the caret
    fn insert_closer(&mut self, ch: char) {
        let (s, e) = (self.selection_start, self.selection_end);
        if s == e && self.text[s..].chars().next() == Some(ch) {
            // No mutation, just step over it
            self.selection_start = s + ch.len_utf8();
            self.selection_end = self.selection_start;
            self.schedule_layout();
        } else {
            self.insert_literal(ch);
        }
    }

    /// Plain insertion, replacing any selection
    fn insert_literal(&mut self, ch: char) {
        let (s, e) = (self.selection_start, self.selection_end);
        let caret = s + ch.len_utf8();
        self.apply_edit(s, e, &ch.to_string(), caret, caret);
        if is_word_char(ch) || self.menu.open {
            self.update_completions(false);
        }
    }

    /// Delete the selection or the character before the caret
    fn backspace(&mut self) {
        let (s, e) = (self.selection_start, self.selection_end);
        if s != e {
            self.apply_edit(s, e, "", s, s);
        } else if s > 0 {
            let prev = floor_boundary(&self.text, s - 1);
            self.apply_edit(prev, s, "", prev, prev);
        } else {
            return;
        }
        if self.menu.open {
            self.update_completions(false);
        }
    }

    /// Indent: one unit at the caret, or prefix every selected line
    fn indent(&mut self) {
        let unit = self.indent_unit.clone();
        let (s, e) = (self.selection_start, self.selection_end);
        if s == e {
            self.apply_edit(s, e, &unit, s + unit.len(), s + unit.len());
            return;
        }
        let start = line_start(&self.text, s);
        let lines: Vec<&str> = self.text[start..e].split('\n').collect();
        let delta = unit.len() * lines.len();
        let indented = lines
            .iter()
            .map(|l| format!("{}{}", unit, l))
            .collect::<Vec<_>>()
            .join("\n");
        self.apply_edit(start, e, &indented, s + unit.len(), e + delta);
    }

    /// Outdent: strip up to one unit (or one tab) per selected line
    ///
    /// The selection tracks the actual per-line deltas, clamped to the
    /// first line start.
    fn outdent(&mut self) {
        let (s, e) = (self.selection_start, self.selection_end);
        if s == e {
            return;
        }
        let unit = self.indent_unit.clone();
        let start = line_start(&self.text, s);
        let mut removed_first = 0;
        let mut removed_total = 0;
        let outdented = self.text[start..e]
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let removed = if line.starts_with(&unit) {
                    unit.len()
                } else if line.starts_with('\t') {
                    1
                } else {
                    0
                };
                if i == 0 {
                    removed_first = removed;
                }
                removed_total += removed;
                &line[removed..]
            })
            .collect::<Vec<_>>()
            .join("\n");
        let sel_start = s.saturating_sub(removed_first).max(start);
        let sel_end = e.saturating_sub(removed_total).max(sel_start);
        self.apply_edit(start, e, &outdented, sel_start, sel_end);
    }

    /// Line break with indentation carry-over and language overrides
    fn insert_line_break(&mut self) {
        let pos = self.selection_start;
        let end = self.selection_end;
        let indent = line_indent(&self.text, pos).to_string();
        let style = self
            .session
            .language(&self.language)
            .map(|l| l.indent_style)
            .unwrap_or_default();

        // Colon languages: deepen after a trailing ':'
        if style == IndentStyle::Colon {
            if let Some(p) = prev_non_ws(&self.text, pos) {
                if self.text[p..].starts_with(':') {
                    let insert = format!("\n{}{}", indent, self.indent_unit);
                    let caret = pos + insert.len();
                    self.apply_edit(pos, end, &insert, caret, caret);
                    return;
                }
            }
        }

        // Brace languages: expand a matched {|} into three lines
        if style == IndentStyle::Braces {
            if let Some(close) = self.brace_gap_at(pos) {
                let body = format!("\n{}{}", indent, self.indent_unit);
                let insert = format!("{}\n{}}}", body, indent);
                let caret = pos + body.len();
                // Consume the whitespace up to and including the closer
                self.apply_edit(pos, close + 1, &insert, caret, caret);
                return;
            }
        }

        let insert = format!("\n{}", indent);
        let caret = pos + insert.len();
        self.apply_edit(pos, end, &insert, caret, caret);
    }

    /// The closer of an unmasked, matched `{`/`}` pair the caret sits
    /// between, with only whitespace separating the two
    fn brace_gap_at(&self, pos: usize) -> Option<usize> {
        let open = prev_non_ws(&self.text, pos)?;
        let close = next_non_ws(&self.text, pos)?;
        if !self.text[open..].starts_with('{') || !self.text[close..].starts_with('}') {
            return None;
        }
        let lang = self.session.language(&self.language)?;
        let lexical = highlight::tokenize(&self.text, lang);
        let analysis = brackets::analyze(&self.text, &lexical, None);
        if analysis.is_masked(open) || analysis.partner(open) != Some(close) {
            return None;
        }
        Some(close)
    }

    // --- completion menu ---

    /// Refilter the menu against the word at the caret
    ///
    /// Without `force`, an empty prefix never opens the menu; it only
    /// closes a stale one.
    fn update_completions(&mut self, force: bool) {
        if self.read_only {
            return;
        }
        let caret = self.selection_start;
        let (start, prefix) = current_word(&self.text, caret);
        if !force && prefix.is_empty() {
            self.menu.close();
            return;
        }
        let Some(lang) = self.session.language(&self.language) else {
            self.menu.close();
            return;
        };
        let lower = prefix.to_lowercase();
        let items: Vec<String> = lang
            .keywords
            .iter()
            .filter(|k| k.to_lowercase().starts_with(&lower))
            .cloned()
            .collect();
        if items.is_empty() {
            self.menu.close();
            return;
        }
        self.menu = MenuState {
            open: true,
            items,
            selected: 0,
            anchor: start,
            prefix: prefix.to_string(),
        };
    }

    /// Replace anchor..caret with the selected candidate
    fn commit_completion(&mut self) {
        if !self.menu.open || self.menu.items.is_empty() {
            self.menu.close();
            return;
        }
        // Clamp a stale index rather than fail
        let index = self.menu.selected.min(self.menu.items.len() - 1);
        let choice = self.menu.items[index].clone();
        let anchor = self.menu.anchor.min(self.selection_start);
        let caret = self.selection_start;
        self.menu.close();
        let new_caret = anchor + choice.len();
        self.apply_edit(anchor, caret, &choice, new_caret, new_caret);
    }

    /// Close the menu when the caret leaves the completed word
    fn sync_menu_to_caret(&mut self) {
        if !self.menu.open {
            return;
        }
        let (start, prefix) = current_word(&self.text, self.selection_start);
        if start != self.menu.anchor || prefix.is_empty() {
            self.menu.close();
        } else {
            self.update_completions(false);
        }
    }

    // --- caret movement ---

    fn move_caret_left(&mut self) {
        let (s, e) = (self.selection_start, self.selection_end);
        let caret = if s != e {
            s
        } else if s > 0 {
            floor_boundary(&self.text, s - 1)
        } else {
            0
        };
        self.selection_start = caret;
        self.selection_end = caret;
    }

    fn move_caret_right(&mut self) {
        let (s, e) = (self.selection_start, self.selection_end);
        let caret = if s != e {
            e
        } else {
            match self.text[s..].chars().next() {
                Some(ch) => s + ch.len_utf8(),
                None => s,
            }
        };
        self.selection_start = caret;
        self.selection_end = caret;
    }

    /// Vertical movement preserving the byte column where possible
    fn move_line(&mut self, up: bool) {
        let caret = self.selection_start;
        let start = line_start(&self.text, caret);
        let col = caret - start;
        let target = if up {
            if start == 0 {
                0
            } else {
                let prev_start = line_start(&self.text, start - 1);
                let prev_len = start - 1 - prev_start;
                prev_start + col.min(prev_len)
            }
        } else {
            match self.text[start..].find('\n') {
                Some(offset) => {
                    let next_start = start + offset + 1;
                    let next_len = self.text[next_start..]
                        .find('\n')
                        .unwrap_or(self.text.len() - next_start);
                    next_start + col.min(next_len)
                }
                None => self.text.len(),
            }
        };
        let target = floor_boundary(&self.text, target);
        self.selection_start = target;
        self.selection_end = target;
    }
}

// --- text helpers ---

fn closing_delimiter(ch: char) -> Option<char> {
    match ch {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closer(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Byte offset where the line containing `pos` starts
fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

/// Leading whitespace of the line containing `pos`
fn line_indent(text: &str, pos: usize) -> &str {
    let start = line_start(text, pos);
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .find(|&(_, c)| c != ' ' && c != '\t')
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Offset of the last non-whitespace character before `from`
fn prev_non_ws(text: &str, from: usize) -> Option<usize> {
    text[..from]
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
}

/// Offset of the first non-whitespace character at or after `from`
fn next_non_ws(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
}

/// Largest char boundary not past `pos`
fn floor_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// The maximal identifier run ending at the caret
fn current_word(text: &str, caret: usize) -> (usize, &str) {
    let bytes = text.as_bytes();
    let mut start = caret;
    while start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_') {
        start -= 1;
    }
    (start, &text[start..caret])
}
