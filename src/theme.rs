//! Theme Provider
//!
//! Two-valued light/dark selection, applied as a class on the document
//! root so stylesheets can switch on `.dark`. Not persisted.

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Set or clear the `dark` class on the document root element
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let result = if theme.is_dark() {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if result.is_err() {
        web_sys::console::log_1(&"[THEME] failed to update document class".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert!(!Theme::default().is_dark());
    }
}
