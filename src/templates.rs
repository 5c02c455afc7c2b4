//! Tera templates compiled into the binary.

use tera::Tera;

use crate::templatetags;

pub const CHANGELIST_TEMPLATE: &str = "admin/product_changelist.html";

const TEMPLATES: [(&str, &str); 2] = [
    ("admin/base.html", include_str!("../templates/admin/base.html")),
    (
        CHANGELIST_TEMPLATE,
        include_str!("../templates/admin/product_changelist.html"),
    ),
];

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    tera.autoescape_on(vec![".html"]);
    templatetags::register(&mut tera);
    Ok(tera)
}
