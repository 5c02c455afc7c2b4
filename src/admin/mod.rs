//! Explicit admin configuration for the product changelist and form.
//!
//! A [`ModelAdmin`] enumerates what an admin front end shows: list columns,
//! filters, search fields, inline-editable fields and widget bindings. It is
//! plain data, serialized as-is to whoever renders the admin.

pub mod columns;
pub mod product;
pub mod widgets;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::jalali::DateStyle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminConfigError {
    #[error("{option} references unknown field `{field}`")]
    UnknownField { option: &'static str, field: String },

    #[error("list_editable field `{0}` is not in list_display")]
    EditableNotDisplayed(String),

    #[error("list_editable field `{0}` is the first list_display column and links to the change form")]
    EditableLinkColumn(String),

    #[error("field `{0}` is both read-only and list-editable")]
    ReadonlyEditable(String),

    #[error("column `{0}` cannot be used for ordering")]
    UnsortableColumn(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ModelField {
    pub name: String,
    pub label: String,
    pub help_text: Option<String>,
}

impl ModelField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            help_text: None,
        }
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Stored model field shown as-is.
    Field,
    /// Display-only value derived from one or more fields.
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListColumn {
    pub name: String,
    pub label: String,
    pub kind: ColumnKind,
    /// Model field the column sorts by. `None` on a computed column means
    /// it is not sortable.
    pub order_field: Option<String>,
}

impl ListColumn {
    pub fn field(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            order_field: Some(name.clone()),
            name,
            label: label.into(),
            kind: ColumnKind::Field,
        }
    }

    pub fn computed(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ColumnKind::Computed,
            order_field: None,
        }
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_field = Some(field.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    TextInput,
    NumberInput,
    CheckboxInput,
    /// Two inputs, a Jalali date and a wall-clock time.
    SplitJalaliDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WidgetBinding {
    pub field: String,
    pub widget: WidgetKind,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelAdmin {
    pub model: String,
    pub verbose_name: String,
    pub verbose_name_plural: String,
    pub model_fields: Vec<ModelField>,
    pub list_display: Vec<ListColumn>,
    pub list_filter: Vec<String>,
    pub search_fields: Vec<String>,
    pub list_editable: Vec<String>,
    /// Form fields in display order.
    pub fields: Vec<String>,
    pub readonly_fields: Vec<String>,
    /// `-` prefix for descending.
    pub ordering: Vec<String>,
    pub list_per_page: u64,
    pub widgets: Vec<WidgetBinding>,
    pub media_js: Vec<String>,
    pub date_style: DateStyle,
}

impl ModelAdmin {
    pub fn new(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            verbose_name: model.clone(),
            verbose_name_plural: format!("{model}s"),
            model,
            model_fields: Vec::new(),
            list_display: Vec::new(),
            list_filter: Vec::new(),
            search_fields: Vec::new(),
            list_editable: Vec::new(),
            fields: Vec::new(),
            readonly_fields: Vec::new(),
            ordering: Vec::new(),
            list_per_page: 100,
            widgets: Vec::new(),
            media_js: Vec::new(),
            date_style: DateStyle::default(),
        }
    }

    pub fn with_verbose_names(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.verbose_name = singular.into();
        self.verbose_name_plural = plural.into();
        self
    }

    pub fn with_model_fields(mut self, fields: Vec<ModelField>) -> Self {
        self.model_fields = fields;
        self
    }

    pub fn with_list_display(mut self, columns: Vec<ListColumn>) -> Self {
        self.list_display = columns;
        self
    }

    pub fn with_list_filter(mut self, fields: Vec<impl Into<String>>) -> Self {
        self.list_filter = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search_fields(mut self, fields: Vec<impl Into<String>>) -> Self {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_list_editable(mut self, fields: Vec<impl Into<String>>) -> Self {
        self.list_editable = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields(mut self, fields: Vec<impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_readonly_fields(mut self, fields: Vec<impl Into<String>>) -> Self {
        self.readonly_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ordering(mut self, ordering: Vec<impl Into<String>>) -> Self {
        self.ordering = ordering.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_list_per_page(mut self, per_page: u64) -> Self {
        self.list_per_page = per_page;
        self
    }

    pub fn with_widget(mut self, field: impl Into<String>, widget: WidgetKind) -> Self {
        self.widgets.push(WidgetBinding {
            field: field.into(),
            widget,
        });
        self
    }

    pub fn with_media_js(mut self, path: impl Into<String>) -> Self {
        self.media_js.push(path.into());
        self
    }

    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.model_fields.iter().any(|f| f.name == name)
    }

    pub fn field_label(&self, name: &str) -> Option<&str> {
        self.model_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.label.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&ListColumn> {
        self.list_display.iter().find(|c| c.name == name)
    }

    pub fn is_readonly(&self, field: &str) -> bool {
        self.readonly_fields.iter().any(|f| f == field)
    }

    pub fn is_list_editable(&self, field: &str) -> bool {
        self.list_editable.iter().any(|f| f == field)
    }

    pub fn widget_for(&self, field: &str) -> Option<WidgetKind> {
        self.widgets
            .iter()
            .find(|w| w.field == field)
            .map(|w| w.widget)
    }

    /// Model field a `list_display` column sorts by.
    pub fn order_field_for(&self, column: &str) -> Result<&str, AdminConfigError> {
        self.column(column)
            .and_then(|c| c.order_field.as_deref())
            .ok_or_else(|| AdminConfigError::UnsortableColumn(column.to_string()))
    }

    pub fn validate(&self) -> Result<(), AdminConfigError> {
        let known = |option: &'static str, field: &str| {
            if self.has_field(field) {
                Ok(())
            } else {
                Err(AdminConfigError::UnknownField {
                    option,
                    field: field.to_string(),
                })
            }
        };

        for field in &self.list_filter {
            known("list_filter", field)?;
        }
        for field in &self.search_fields {
            known("search_fields", field)?;
        }
        for field in &self.fields {
            known("fields", field)?;
        }
        for field in &self.readonly_fields {
            known("readonly_fields", field)?;
        }
        for binding in &self.widgets {
            known("widgets", &binding.field)?;
        }
        for column in &self.list_display {
            if column.kind == ColumnKind::Field {
                known("list_display", &column.name)?;
            }
            if let Some(order_field) = &column.order_field {
                known("list_display", order_field)?;
            }
        }
        for entry in &self.ordering {
            known("ordering", entry.trim_start_matches('-'))?;
        }

        for field in &self.list_editable {
            known("list_editable", field)?;
            match self.list_display.iter().position(|c| &c.name == field) {
                None => return Err(AdminConfigError::EditableNotDisplayed(field.clone())),
                Some(0) => return Err(AdminConfigError::EditableLinkColumn(field.clone())),
                Some(_) => {}
            }
            if self.is_readonly(field) {
                return Err(AdminConfigError::ReadonlyEditable(field.clone()));
            }
        }

        Ok(())
    }
}
