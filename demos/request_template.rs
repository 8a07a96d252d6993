use serde_json::json;
use substitutor::{DelimiterConfig, EnvLookup, JsonPathLookup, Lookup, Substitutor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let record = json!({
        "record": {
            "user": { "name": "Ada", "age": 36 },
            "items": [{ "sku": "A-1" }, { "sku": "B-7" }]
        }
    });

    // Record fields first, then environment variables
    let lookup = JsonPathLookup::new(record).or(EnvLookup::new());
    let pass = Substitutor::with_config(DelimiterConfig::dollar_brace(), lookup);

    let template = r#"{
    "user": "${.record.user.name}",
    "age": ${.record.user.age},
    "first_item": "${.record.items[0].sku}",
    "home": "${HOME:-/nonexistent}",
    "literal": "\${not.substituted}"
}"#;

    println!("Template:\n{}\n", template);
    println!("Placeholders:");
    for key in pass.keys(template) {
        println!("  {} (default: {:?})", key.lookup_key, key.default_value);
    }

    let body = pass.replace_str(template)?;
    println!("\nRendered:\n{}", body);

    Ok(())
}
