//! Bistro Schemas - print the built-in page schemas.

use bistro_fields::{default_schemas, FieldDef, ValueKind};

use crate::error::Result;

/// Run the schemas command. Human-readable by default, `--json` for the
/// full serialized declarations.
pub fn run_schemas(json: bool) -> Result<()> {
    let schemas = default_schemas();

    if json {
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    for schema in &schemas {
        println!("template: {}", schema.template);
        for field in &schema.fields {
            match field {
                FieldDef::Scalar(def) => {
                    println!(
                        "  {:<18} {:<12} {}",
                        def.key,
                        kind_label(def.kind),
                        def.label
                    );
                }
                FieldDef::Group(def) => {
                    println!("  {:<18} {:<12} {}", def.key, "group", def.label);
                    for sub in &def.sub_fields {
                        println!(
                            "    .{:<16} {:<12} {}",
                            sub.key,
                            kind_label(sub.kind),
                            sub.label
                        );
                    }
                    println!(
                        "    entries: \"{}\", add: \"{}\"{}{}",
                        def.options.entry_title,
                        def.options.add_label,
                        if def.options.repeatable {
                            ", repeatable"
                        } else {
                            ""
                        },
                        if def.options.sortable { ", sortable" } else { "" }
                    );
                }
            }
        }
        println!();
    }
    Ok(())
}

fn kind_label(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::ShortText => "short-text",
        ValueKind::LongText => "long-text",
        ValueKind::AssetRef => "asset-ref",
    }
}
