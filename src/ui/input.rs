use super::{escape, escape_attr};

fn label_html(name: &str, label: Option<&str>) -> String {
    label
        .map(|text| format!(r#"<label for="field-{}">{}</label>"#, escape_attr(name), escape(text)))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Input<'a> {
    name: &'a str,
    value: &'a str,
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    input_type: &'a str,
    required: bool,
}

impl<'a> Input<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Input { name, value, label: None, placeholder: None, input_type: "text", required: false }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn input_type(mut self, input_type: &'a str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn render(&self) -> String {
        let placeholder = self
            .placeholder
            .map(|p| format!(r#" placeholder="{}""#, escape_attr(p)))
            .unwrap_or_default();
        format!(
            r#"<div class="field">{}<input id="field-{name}" class="input" type="{}" name="{name}" value="{}"{}{}></div>"#,
            label_html(self.name, self.label),
            escape_attr(self.input_type),
            escape_attr(self.value),
            placeholder,
            if self.required { " required" } else { "" },
            name = escape_attr(self.name),
        )
    }
}

#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    name: &'a str,
    value: &'a str,
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    rows: u8,
}

impl<'a> TextArea<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        TextArea { name, value, label: None, placeholder: None, rows: 4 }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn render(&self) -> String {
        let placeholder = self
            .placeholder
            .map(|p| format!(r#" placeholder="{}""#, escape_attr(p)))
            .unwrap_or_default();
        format!(
            r#"<div class="field">{}<textarea id="field-{name}" class="input" name="{name}" rows="{}"{}>{}</textarea></div>"#,
            label_html(self.name, self.label),
            self.rows,
            placeholder,
            escape(self.value),
            name = escape_attr(self.name),
        )
    }
}

/// Drop-down over `(value, text)` pairs, with an optional leading "nothing" entry.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    name: &'a str,
    selected: &'a str,
    label: Option<&'a str>,
    empty_option: Option<&'a str>,
    options: Vec<(String, String)>,
}

impl<'a> Select<'a> {
    pub fn new(name: &'a str, selected: &'a str, options: Vec<(String, String)>) -> Self {
        Select { name, selected, label: None, empty_option: None, options }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn empty_option(mut self, text: &'a str) -> Self {
        self.empty_option = Some(text);
        self
    }

    pub fn render(&self) -> String {
        let mut options = String::new();
        if let Some(text) = self.empty_option {
            options.push_str(&format!(r#"<option value="">{}</option>"#, escape(text)));
        }
        for (value, text) in &self.options {
            let selected = if value == self.selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_attr(value),
                selected,
                escape(text)
            ));
        }
        format!(
            r#"<div class="field">{}<select id="field-{name}" class="input" name="{name}">{}</select></div>"#,
            label_html(self.name, self.label),
            options,
            name = escape_attr(self.name),
        )
    }
}
