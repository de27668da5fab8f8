use super::{escape, escape_attr};

type CellRenderer<'a, R> = Box<dyn Fn(&R) -> String + 'a>;

/// One table column: a header and a cell renderer. Supplied by the page.
pub struct Column<'a, R> {
    header: &'a str,
    class: Option<&'a str>,
    render: CellRenderer<'a, R>,
}

impl<'a, R> Column<'a, R> {
    /// Plain text cell; the accessor's output is escaped.
    pub fn text(header: &'a str, accessor: impl Fn(&R) -> String + 'a) -> Self {
        Column { header, class: None, render: Box::new(move |row| escape(&accessor(row))) }
    }

    /// Custom renderer producing markup that is inserted as-is.
    pub fn html(header: &'a str, renderer: impl Fn(&R) -> String + 'a) -> Self {
        Column { header, class: None, render: Box::new(renderer) }
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    fn class_attr(&self) -> String {
        self.class
            .map(|c| format!(r#" class="{}""#, escape_attr(c)))
            .unwrap_or_default()
    }
}

pub struct Table<'a, R> {
    columns: Vec<Column<'a, R>>,
    filter_text: Option<CellRenderer<'a, R>>,
}

impl<'a, R> Table<'a, R> {
    pub fn new(columns: Vec<Column<'a, R>>) -> Self {
        Table { columns, filter_text: None }
    }

    /// Text stored on each row for the in-browser search filter.
    pub fn filter_by(mut self, filter_text: impl Fn(&R) -> String + 'a) -> Self {
        self.filter_text = Some(Box::new(filter_text));
        self
    }

    pub fn render(&self, rows: &[&R], loading: bool) -> String {
        if loading {
            return r#"<div class="table-placeholder">Loading...</div>"#.to_string();
        }
        if rows.is_empty() {
            return r#"<div class="table-placeholder">No data available</div>"#.to_string();
        }

        let mut html = String::from(r#"<div class="table-wrap"><table class="table"><thead><tr>"#);
        for column in &self.columns {
            html.push_str(&format!("<th{}>{}</th>", column.class_attr(), escape(column.header)));
        }
        html.push_str("</tr></thead><tbody>");

        for &row in rows {
            match &self.filter_text {
                Some(filter) => {
                    html.push_str(&format!(r#"<tr data-filter="{}">"#, escape_attr(&filter(row).to_lowercase())))
                }
                None => html.push_str("<tr>"),
            }
            for column in &self.columns {
                html.push_str(&format!("<td{}>{}</td>", column.class_attr(), (column.render)(row)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table></div>");
        html
    }
}
