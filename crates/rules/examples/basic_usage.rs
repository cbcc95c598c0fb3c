//! Basic usage example for fluent-rules.
//!
//! Builds the rule mapping for a small signup form and prints the JSON a
//! validation engine would receive.

use fluent_rules::prelude::*;

fn main() -> Result<(), RuleError> {
    let mapping = rules([
        field("username").required().alpha_dash().between(3, 20),
        field("email")
            .required()
            .email(["dns", "rfc"])?
            .unique(Unique::table("users").column("email")),
        field("password").required().string().min(12).confirmed(),
        field("age").nullable().integer().between(13, 120),
        field("avatar")
            .nullable()
            .image()
            .mimes(["jpg", "png", "webp"])
            .dimensions(Dimensions::new().min_width(100).ratio(1.0)),
        field("company").required_without(["invite_code"]),
    ]);

    for (name, tokens) in &mapping {
        println!("{name}: {tokens:?}");
    }

    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&mapping).expect("mapping serializes")
    );

    Ok(())
}
