use super::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Success,
    Warning,
    Danger,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Danger => "badge badge-danger",
        }
    }
}

pub fn badge(label: &str, variant: BadgeVariant) -> String {
    format!(r#"<span class="{}">{}</span>"#, variant.class(), escape(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variant_class_and_escaped_label() {
        assert_eq!(
            badge("Draft", BadgeVariant::Warning),
            r#"<span class="badge badge-warning">Draft</span>"#
        );
        assert!(badge("<x>", BadgeVariant::Default).contains("&lt;x&gt;"));
    }
}
