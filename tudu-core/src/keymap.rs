//! Context-aware keybindings with string key parsing and serde config

use std::collections::HashMap;
use std::hash::Hash;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Trait for user-defined keybinding contexts.
///
/// Implement this for the application's context enum so bindings can be
/// looked up per mode and round-tripped through config files by name.
pub trait BindingContext: Clone + Copy + Eq + Hash {
    /// Context name used as the config-file section key.
    fn name(&self) -> &'static str;

    /// Parse a context from its config-file name.
    fn from_name(name: &str) -> Option<Self>;

    /// All context values (for iteration and config loading).
    fn all() -> &'static [Self];
}

/// Command-to-keys bindings with global and per-context sections.
///
/// Commands are plain strings (`"quit"`, `"todo.new"`); keys are strings in
/// the format accepted by [`parse_key`] (`"q"`, `"ctrl+c"`, `"space"`).
/// Context bindings win over global ones on lookup.
#[derive(Debug, Clone)]
pub struct Keymap<C: BindingContext> {
    global: HashMap<String, Vec<String>>,
    contexts: HashMap<C, HashMap<String, Vec<String>>>,
}

impl<C: BindingContext> Default for Keymap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext> Keymap<C> {
    /// Create an empty keymap.
    pub fn new() -> Self {
        Self {
            global: HashMap::new(),
            contexts: HashMap::new(),
        }
    }

    /// Bind a command in the global section.
    pub fn bind(&mut self, command: impl Into<String>, keys: &[&str]) {
        self.global
            .insert(command.into(), keys.iter().map(|k| k.to_string()).collect());
    }

    /// Bind a command in a specific context.
    pub fn bind_in(&mut self, context: C, command: impl Into<String>, keys: &[&str]) {
        self.contexts
            .entry(context)
            .or_default()
            .insert(command.into(), keys.iter().map(|k| k.to_string()).collect());
    }

    /// Resolve a key event to a command in the given context.
    ///
    /// Context-specific bindings are checked first, then global ones.
    pub fn command_for(&self, key: KeyEvent, context: C) -> Option<&str> {
        if let Some(bindings) = self.contexts.get(&context) {
            if let Some(command) = Self::lookup(key, bindings) {
                return Some(command);
            }
        }
        Self::lookup(key, &self.global)
    }

    fn lookup(key: KeyEvent, bindings: &HashMap<String, Vec<String>>) -> Option<&str> {
        for (command, keys) in bindings {
            for key_str in keys {
                let Some(bound) = parse_key(key_str) else {
                    continue;
                };
                if bound.code == key.code && bound.modifiers == key.modifiers {
                    return Some(command);
                }
            }
        }
        None
    }

    /// First bound key for a command, for help-text display.
    ///
    /// Checks the context section first, then global.
    pub fn key_hint(&self, command: &str, context: C) -> Option<&str> {
        self.contexts
            .get(&context)
            .and_then(|bindings| bindings.get(command))
            .or_else(|| self.global.get(command))
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// Overlay user bindings onto defaults; user entries win per command.
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (command, keys) in user.global {
            defaults.global.insert(command, keys);
        }
        for (context, bindings) in user.contexts {
            let section = defaults.contexts.entry(context).or_default();
            for (command, keys) in bindings {
                section.insert(command, keys);
            }
        }
        defaults
    }
}

impl<C: BindingContext> Serialize for Keymap<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.contexts.len()))?;
        map.serialize_entry("global", &self.global)?;
        for (context, bindings) in &self.contexts {
            map.serialize_entry(context.name(), bindings)?;
        }
        map.end()
    }
}

impl<'de, C: BindingContext> Deserialize<'de> for Keymap<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, HashMap<String, Vec<String>>> =
            HashMap::deserialize(deserializer)?;

        let mut keymap = Keymap::new();
        for (section, bindings) in raw {
            if section == "global" {
                keymap.global = bindings;
            } else if let Some(context) = C::from_name(&section) {
                keymap.contexts.insert(context, bindings);
            }
            // Unknown sections are ignored for forward compatibility.
        }
        Ok(keymap)
    }
}

/// Parse a key string like `"q"`, `"esc"`, `"ctrl+p"`, `"shift+tab"`.
pub fn parse_key(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    // shift+tab arrives from the terminal as BackTab
    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let mut parts = key_str.split('+').collect::<Vec<_>>();
    let key_part = parts.pop()?.trim();

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g. `"ctrl+p"` -> `"^P"`, `"esc"` -> `"Esc"`).
pub fn display_key(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let mut parts = key_str.split('+').collect::<Vec<_>>();
    let key_part = parts.pop().unwrap_or_default();

    let mut prefix = String::new();
    for part in parts {
        match part.trim() {
            "ctrl" | "control" => prefix.push('^'),
            "shift" => prefix.push_str("Shift+"),
            "alt" => prefix.push_str("Alt+"),
            _ => {}
        }
    }

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "Up".to_string(),
        "down" => "Down".to_string(),
        "left" => "Left".to_string(),
        "right" => "Right".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "delete" => "Del".to_string(),
        "insert" => "Ins".to_string(),
        "space" => "Space".to_string(),
        c if c.chars().count() == 1 => {
            let ch = c.chars().next().unwrap_or(' ');
            if ch.is_alphabetic() {
                ch.to_uppercase().collect()
            } else {
                ch.to_string()
            }
        }
        other => {
            let mut s = other.to_string();
            if let Some(first) = s.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            s
        }
    };

    format!("{prefix}{key_display}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestContext {
        List,
        Input,
    }

    impl BindingContext for TestContext {
        fn name(&self) -> &'static str {
            match self {
                TestContext::List => "list",
                TestContext::Input => "input",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "list" => Some(TestContext::List),
                "input" => Some(TestContext::Input),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[TestContext::List, TestContext::Input]
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let key = parse_key("q").unwrap();
        assert_eq!(key.code, KeyCode::Char('q'));
        assert_eq!(key.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key("f12").unwrap().code, KeyCode::F(12));
        assert!(parse_key("f13").is_none());
        assert!(parse_key("bogus").is_none());
    }

    #[test]
    fn test_parse_modifiers() {
        let key = parse_key("ctrl+c").unwrap();
        assert_eq!(key.code, KeyCode::Char('c'));
        assert!(key.modifiers.contains(KeyModifiers::CONTROL));

        let key = parse_key("shift+tab").unwrap();
        assert_eq!(key.code, KeyCode::BackTab);
        assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_command_lookup_prefers_context() {
        let mut keymap: Keymap<TestContext> = Keymap::new();
        keymap.bind("quit", &["q"]);
        keymap.bind_in(TestContext::Input, "input.cancel", &["esc"]);

        let q = parse_key("q").unwrap();
        assert_eq!(keymap.command_for(q, TestContext::List), Some("quit"));
        assert_eq!(keymap.command_for(q, TestContext::Input), Some("quit"));

        let esc = parse_key("esc").unwrap();
        assert_eq!(
            keymap.command_for(esc, TestContext::Input),
            Some("input.cancel")
        );
        assert_eq!(keymap.command_for(esc, TestContext::List), None);
    }

    #[test]
    fn test_merge_user_over_defaults() {
        let mut defaults: Keymap<TestContext> = Keymap::new();
        defaults.bind("quit", &["q"]);
        defaults.bind("help.toggle", &["?"]);

        let mut user: Keymap<TestContext> = Keymap::new();
        user.bind("quit", &["x"]);

        let merged = Keymap::merge(defaults, user);
        let x = parse_key("x").unwrap();
        let q = parse_key("q").unwrap();
        assert_eq!(merged.command_for(x, TestContext::List), Some("quit"));
        assert_eq!(merged.command_for(q, TestContext::List), None);
        assert_eq!(merged.key_hint("help.toggle", TestContext::List), Some("?"));
    }

    #[test]
    fn test_keymap_roundtrips_through_json() {
        let mut keymap: Keymap<TestContext> = Keymap::new();
        keymap.bind("quit", &["q"]);
        keymap.bind_in(TestContext::Input, "input.cancel", &["esc"]);

        let json = serde_json::to_string(&keymap).unwrap();
        let parsed: Keymap<TestContext> = serde_json::from_str(&json).unwrap();

        let esc = parse_key("esc").unwrap();
        assert_eq!(
            parsed.command_for(esc, TestContext::Input),
            Some("input.cancel")
        );
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("q"), "Q");
        assert_eq!(display_key("ctrl+c"), "^C");
        assert_eq!(display_key("esc"), "Esc");
        assert_eq!(display_key("space"), "Space");
        assert_eq!(display_key("shift+tab"), "Shift+Tab");
    }
}
