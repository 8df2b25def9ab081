//! Design tokens for the page.
//!
//! The tokens are carried in an explicit [`Theme`] value that the page root
//! constructs and hands down as a prop; components surface them to the
//! stylesheet as CSS custom properties. Nothing resolves colors through
//! ambient global state.

/// Color and easing tokens. Built once at the page root, passed by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: Colors,
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Body copy on the dark panels.
    pub grey: &'static str,
    /// Highlighted copy and links.
    pub foreground: &'static str,
    /// Backdrop of the dark panels and the off-canvas layer.
    pub background_dark: &'static str,
    /// The light half-panel behind the contact form.
    pub background_light: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Easing {
    /// Curve for the panel slide.
    pub slide: &'static str,
    /// Curve for the hover arrow under "Get in touch".
    pub arrow: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: Colors {
                grey: "#b5b8bd",
                foreground: "#ffffff",
                background_dark: "#111216",
                background_light: "#ffffff",
            },
            easing: Easing {
                slide: "cubic-bezier(0.5, 0, 0.515, 1)",
                arrow: "cubic-bezier(0.77, 0, 0.175, 1)",
            },
        }
    }
}

impl Theme {
    /// Renders the tokens as inline CSS custom properties. Attached to the
    /// outermost wrapper so every class in the stylesheet can use `var()`.
    pub fn css_vars(&self) -> String {
        format!(
            "--color-grey:{};--color-foreground:{};--bg-dark:{};--bg-light:{};--ease-slide:{};--ease-arrow:{};",
            self.colors.grey,
            self.colors.foreground,
            self.colors.background_dark,
            self.colors.background_light,
            self.easing.slide,
            self.easing.arrow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_vars_carry_every_token() {
        let vars = Theme::default().css_vars();
        for name in [
            "--color-grey",
            "--color-foreground",
            "--bg-dark",
            "--bg-light",
            "--ease-slide",
            "--ease-arrow",
        ] {
            assert!(vars.contains(name), "missing {name} in {vars}");
        }
    }

    #[test]
    fn dark_backdrop_matches_off_canvas_layer() {
        // the off-canvas contact layer must blend into the dark container
        assert_eq!(Theme::default().colors.background_dark, "#111216");
    }
}
