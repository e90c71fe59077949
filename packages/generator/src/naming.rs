//! Identifier helpers: member casing, identifier checks and module file names.

use crate::options::PropertyMode;

const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with",
];

/// Apply the member casing convention.
///
/// Leading underscores are kept. Snake and kebab separators are folded into
/// word boundaries, so `first_name` becomes `firstName` / `FirstName`.
pub fn apply_property_mode(name: &str, mode: PropertyMode) -> String {
    let body = name.trim_start_matches('_');
    let mut out = String::from(&name[..name.len() - body.len()]);

    for (i, segment) in body.split(['_', '-']).filter(|s| !s.is_empty()).enumerate() {
        if i == 0 && mode == PropertyMode::CamelCase {
            out.push_str(&lower_leading(segment));
        } else {
            out.push_str(&upper_first(segment));
        }
    }

    out
}

/// Lowercase the leading uppercase run, leaving the last capital of an
/// acronym that starts the next word (`URLValue` → `urlValue`). A plural
/// `s` closing the segment belongs to the acronym (`IDs` → `ids`).
fn lower_leading(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let plural_acronym = run > 1 && chars.len() == run + 1 && chars[run] == 's';
    let lower = if plural_acronym {
        chars.len()
    } else if run > 1 && run < chars.len() && chars[run].is_lowercase() {
        run - 1
    } else {
        run
    };

    let mut out = String::with_capacity(segment.len());
    for (i, c) in chars.iter().enumerate() {
        if i < lower {
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` is syntactically an identifier (ASCII subset)
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Whether `name` can be used as a declared type name
pub fn is_valid_type_name(name: &str) -> bool {
    is_valid_identifier(name) && !is_reserved_word(name)
}

/// Property key as written in an interface or object literal; quoted when
/// it is not a bare identifier
pub fn property_key(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        crate::validation::string_literal(name)
    }
}

/// Kebab-case file stem for a type name (`OrderLine` → `order-line`)
pub fn file_stem(type_name: &str) -> String {
    let chars: Vec<char> = type_name.chars().collect();
    let mut out = String::with_capacity(type_name.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        if *c == '_' {
            out.push('-');
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
