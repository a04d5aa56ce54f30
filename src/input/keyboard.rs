use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a character typed on the Russian ЙЦУКЕН layout to the QWERTY key in the
/// same position, so the letter bindings work without switching layouts.
pub fn to_qwerty(c: char) -> char {
    match c {
        'й' => 'q', 'Й' => 'Q',
        'о' => 'j', 'О' => 'J',
        'л' => 'k', 'Л' => 'K',
        'п' => 'g', 'П' => 'G',
        'я' => 'z', 'Я' => 'Z',
        'и' => 'b', 'И' => 'B',
        'а' => 'f', 'А' => 'F',
        _ => c,
    }
}

/// Check if a KeyCode is the expected letter, case-insensitively and across layouts
pub fn key_matches(key: &KeyCode, expected: char) -> bool {
    match key {
        KeyCode::Char(c) => to_qwerty(*c).to_ascii_lowercase() == expected,
        _ => false,
    }
}

/// User intents derived from keyboard and mouse input
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    SelectRow(u16),
    Center,
    Reset,

    // Actions
    Choose,
    Quit,
}

/// Map a key event to a user intent
pub fn map_key_to_intent(key: &KeyEvent) -> Option<Intent> {
    let code = &key.code;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ if key_matches(code, 'f') => Some(Intent::PageDown),
            _ if key_matches(code, 'b') => Some(Intent::PageUp),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter => Some(Intent::Choose),
        KeyCode::Up => Some(Intent::MoveUp),
        KeyCode::Down => Some(Intent::MoveDown),
        KeyCode::PageUp => Some(Intent::PageUp),
        KeyCode::PageDown => Some(Intent::PageDown),
        KeyCode::Home => Some(Intent::Reset),
        _ if key_matches(code, 'q') => Some(Intent::Quit),
        _ if key_matches(code, 'k') => Some(Intent::MoveUp),
        _ if key_matches(code, 'j') => Some(Intent::MoveDown),
        _ if key_matches(code, 'g') => Some(Intent::Reset),
        _ if key_matches(code, 'z') => Some(Intent::Center),
        _ => None,
    }
}
