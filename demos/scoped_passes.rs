use std::collections::HashMap;
use substitutor::{DelimiterConfig, Passes, Substitutor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let template = concat!(
        "GET /users/{.input.id} -> ",
        "{.response.status:-pending} ({.response.user{age > 40}})",
    );

    let input: HashMap<String, String> = [(".id".to_string(), "42".to_string())].into();
    let response: HashMap<String, String> = [
        (".status".to_string(), "200".to_string()),
        (".user{age > 40}".to_string(), "another_user".to_string()),
    ]
    .into();

    let request_pass = Substitutor::with_config(
        DelimiterConfig::braces().with_scope(".input"),
        input.clone(),
    );
    let partial = request_pass.replace_str(template)?;
    println!("After the request pass:  {}", partial);

    let passes = Passes::new()
        .pass(DelimiterConfig::braces().with_scope(".input"), input)
        .pass(DelimiterConfig::braces().with_scope(".response"), response);
    println!("After both passes:       {}", passes.replace_str(template)?);

    println!("Passes: {:?}", passes);

    Ok(())
}
