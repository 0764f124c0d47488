//! Built-in page schemas for the restaurant site.
//!
//! `default_schemas()` provides the full set of page schemas bistro ships
//! with. They are declared in code and handed to `SchemaRegistry::builder()`
//! at startup, so every process sees the same registry regardless of which
//! template renders first.

use crate::schema::{PageSchema, SchemaRegistry};
use crate::types::{FieldDef, GroupOptions, ScalarDef, ValueKind};
use crate::Result;

/// Template id of the weekly menu page.
pub const TEMPLATE_WEEKLY_MENU: &str = "weekly-menu";
/// Template id of the about page.
pub const TEMPLATE_ABOUT: &str = "about";

/// Heading of the data-driven menu section.
pub const FIELD_DISH_OF_THE_DAY: &str = "dish_of_the_day";
/// Free-text menu description; editable but not placed by the template.
pub const FIELD_MENU_DESCRIPTION: &str = "description";
/// Repeatable list of dishes.
pub const FIELD_DISHES: &str = "dishes";
pub const SUB_FIELD_DISH_NAME: &str = "name";
pub const SUB_FIELD_DISH_DESCRIPTION: &str = "description";
pub const SUB_FIELD_DISH_PRICE: &str = "price";

/// Media reference to the restaurant photo.
pub const FIELD_PHOTO: &str = "photo";
/// History paragraph on the about page.
pub const FIELD_HISTORY: &str = "history";

/// All built-in page schemas.
pub fn default_schemas() -> Vec<PageSchema> {
    vec![
        // =====================================================================
        // Weekly menu page
        // =====================================================================
        PageSchema::new(TEMPLATE_WEEKLY_MENU)
            .field(FieldDef::scalar(
                FIELD_DISH_OF_THE_DAY,
                "Dish of the day",
                ValueKind::ShortText,
            ))
            .field(FieldDef::scalar(
                FIELD_MENU_DESCRIPTION,
                "Menu description",
                ValueKind::LongText,
            ))
            .field(FieldDef::group(
                FIELD_DISHES,
                "Dishes",
                vec![
                    ScalarDef::new(SUB_FIELD_DISH_NAME, "Name", ValueKind::ShortText),
                    ScalarDef::new(
                        SUB_FIELD_DISH_DESCRIPTION,
                        "Description",
                        ValueKind::LongText,
                    ),
                    ScalarDef::new(SUB_FIELD_DISH_PRICE, "Price", ValueKind::ShortText),
                ],
                GroupOptions::new("Dish {#}", "Add dish").sortable(true),
            )),
        // =====================================================================
        // About page
        // =====================================================================
        PageSchema::new(TEMPLATE_ABOUT)
            .field(FieldDef::scalar(
                FIELD_PHOTO,
                "Restaurant photo",
                ValueKind::AssetRef,
            ))
            .field(FieldDef::scalar(
                FIELD_HISTORY,
                "Our history",
                ValueKind::LongText,
            )),
    ]
}

/// Registry holding every built-in schema.
pub fn default_registry() -> Result<SchemaRegistry> {
    let mut builder = SchemaRegistry::builder();
    for schema in default_schemas() {
        builder = builder.schema(schema);
    }
    builder.build()
}
