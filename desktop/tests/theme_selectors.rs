#![cfg(test)]
//! Selectors the shared views render must stay in the unified theme
//! (`ui/assets/theme/main.css`). Rename a class in markup and here together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".theme-light",
    ".theme-dark",
    ".page {",
    ".page-auth",
    ".visually-hidden",
    // Controls
    ".input {",
    ".field--with-action",
    ".field__action",
    ".button {",
    ".button--accent",
    ".button--ghost",
    ".button--danger",
    ".button--success",
    ".button--block",
    // Auth
    ".auth-card",
    ".auth-card__form",
    ".auth-card__error",
    ".auth-card__switch",
    ".locale__select",
    // Translator
    ".translator__header",
    ".translator__actions",
    ".translator__error",
    ".image-grid",
    ".image-card__img",
    ".image-card__remove",
    ".result-box__text",
    ".result-box__placeholder",
    // History
    ".history__table",
    ".history__empty",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
