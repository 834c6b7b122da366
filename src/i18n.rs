/// Site language. English is the default; the toggle flips between the two.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }

    /// BCP 47 code written to the document element's `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Label shown on the toggle button: the language you would switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "FR",
            Lang::Fr => "EN",
        }
    }

    /// Select the copy for the active language.
    pub fn pick<'a>(self, en: &'a str, fr: &'a str) -> &'a str {
        match self {
            Lang::En => en,
            Lang::Fr => fr,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Lang::En.toggled(), Lang::Fr);
        assert_eq!(Lang::Fr.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled().toggled(), Lang::En);
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Lang::En.toggle_label(), "FR");
        assert_eq!(Lang::Fr.toggle_label(), "EN");
    }

    #[test]
    fn pick_selects_active_copy() {
        assert_eq!(Lang::En.pick("Our Mission", "Notre Mission"), "Our Mission");
        assert_eq!(Lang::Fr.pick("Our Mission", "Notre Mission"), "Notre Mission");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(Lang::default().code(), "en");
    }
}
