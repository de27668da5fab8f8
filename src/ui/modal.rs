use super::{escape, escape_attr, Button, ButtonVariant};

/// The optional submit side of a modal.
#[derive(Debug, Clone)]
pub struct ModalSubmit<'a> {
    /// Form target the body's fields are posted to.
    pub action: &'a str,
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub loading: bool,
}

/// Controlled overlay. Holds no state of its own: the caller decides whether it
/// is open and supplies the body, the cancel target and the submit callback.
#[derive(Debug, Clone)]
pub struct Modal<'a> {
    pub is_open: bool,
    pub title: &'a str,
    pub body: String,
    pub cancel_href: &'a str,
    pub submit: Option<ModalSubmit<'a>>,
}

impl<'a> Modal<'a> {
    pub fn render(&self) -> String {
        if !self.is_open {
            return String::new();
        }

        let cancel = Button::new("Cancel").variant(ButtonVariant::Ghost).link(self.cancel_href).render();
        let header = format!(
            r#"<div class="modal-header"><h2>{}</h2><a class="modal-close" href="{}" aria-label="Close">&times;</a></div>"#,
            escape(self.title),
            escape_attr(self.cancel_href)
        );

        let panel = match &self.submit {
            Some(submit) => {
                let button = Button::new(submit.label).variant(submit.variant).loading(submit.loading).render();
                format!(
                    r#"<form method="post" action="{}" data-modal-form>{}<div class="modal-body">{}</div><div class="modal-footer">{}{}</div></form>"#,
                    escape_attr(submit.action),
                    header,
                    self.body,
                    cancel,
                    button
                )
            }
            None => format!(
                r#"{}<div class="modal-body">{}</div><div class="modal-footer">{}</div>"#,
                header, self.body, cancel
            ),
        };

        format!(r#"<div class="modal-overlay" role="dialog" aria-modal="true"><div class="modal">{}</div></div>"#, panel)
    }
}
