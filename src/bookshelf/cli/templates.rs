//! # CLI Templates
//!
//! minijinja templates for terminal output. The environment runs with
//! `trim_blocks` and `lstrip_blocks`, so a line holding only a block tag
//! produces no output; every emitted line is an explicit line in the template.
//!
//! Layout math (widths, truncation, padding) is done in Rust before rendering;
//! templates only choose styles and structure.

pub const SHELF_TEMPLATE: &str = r#"{% for section in sections %}
{% if not loop.first %}

{% endif %}
{{ section.heading | style("heading") }} {{ section.count | style("count") }}
{% for book in section.books %}
  {{ book.id | style("id") }}  {{ book.title | style(section.title_style) }}{{ book.padding }}{{ book.added | style("time") }}
  {{ book.indent }}  {{ book.byline | style("byline") }}
{% else %}
  {{ section.empty | style("hint") }}
{% endfor %}
{% if section.hint %}
  {{ section.hint | style("hint") }}
{% endif %}
{% endfor %}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}
{{ message.content | style(message.style) }}
{% endfor %}
"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for entry in entries %}
{{ entry.key }} = {{ entry.value | style("title") }}
{% endfor %}
"#;
