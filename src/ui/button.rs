use super::{escape, escape_attr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// A submit button, or a link styled as one when `href` is set.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    href: Option<&'a str>,
    loading: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Button { label, variant: ButtonVariant::Primary, href: None, loading: false, disabled: false }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn link(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(&self) -> String {
        if let Some(href) = self.href {
            return format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                self.variant.class(),
                escape_attr(href),
                escape(self.label)
            );
        }

        let disabled = if self.disabled || self.loading { " disabled" } else { "" };
        let body = if self.loading {
            r#"<span class="spinner"></span>Loading..."#.to_string()
        } else {
            escape(self.label)
        };
        format!(
            r#"<button type="submit" class="{}" data-submit{}>{}</button>"#,
            self.variant.class(),
            disabled,
            body
        )
    }
}
