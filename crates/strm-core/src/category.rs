//! Category label to display folder mapping

use strm_fs::{NamingMode, sanitize_name};

/// Folder names for the known categories, ASCII mode.
const ASCII_FOLDERS: [(&str, &str); 4] = [
    ("tv", "TV"),
    ("movie", "Movies"),
    ("music", "Music"),
    ("other", "Other"),
];

/// Folder names for the known categories, localized.
const LOCALIZED_FOLDERS: [(&str, &str); 4] = [
    ("tv", "Сериалы"),
    ("movie", "Фильмы"),
    ("music", "Музыка"),
    ("other", "Прочее"),
];

/// Map a free-form category label to a display folder name.
///
/// The label is trimmed and lowercased; the four known categories map
/// through the mode's table, an absent or empty label maps to the mode's
/// default folder, and any other label becomes its own sanitized folder
/// rather than falling into the default.
pub fn category_folder(category: Option<&str>, mode: NamingMode) -> String {
    let normalized = category.unwrap_or_default().trim().to_lowercase();

    let (table, default) = if mode.is_ascii() {
        (&ASCII_FOLDERS, "Other")
    } else {
        (&LOCALIZED_FOLDERS, "Прочее")
    };

    if let Some((_, folder)) = table.iter().find(|(key, _)| *key == normalized) {
        return (*folder).to_string();
    }
    if normalized.is_empty() {
        return default.to_string();
    }
    sanitize_name(&normalized, "item", mode)
}
