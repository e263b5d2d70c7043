use dynamic_url::{Config, DynamicUrl, Value};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Route {
    citizen: &'static str,
    hero: &'static str,
}

#[derive(Debug, Serialize)]
struct Filter {
    team: &'static str,
    powers: Vec<&'static str>,
    villain: Option<&'static str>,
}

fn main() -> Result<(), dynamic_url::Error> {
    let mut url = DynamicUrl::new("https://example.com/{citizen}/{hero}");
    url.set_route_params(&Route {
        citizen: "robespierre",
        hero: "ironman",
    })?
    .set_query_params(&Filter {
        team: "avengers",
        powers: vec!["armor", "wit"],
        villain: None,
    })?;
    println!("{url}");

    let dynamic = Value::map()
        .insert("page", 2)
        .insert("sort", Value::map().insert("by", "name").insert("dir", "asc"));
    let config = Config::new().prefix("q").separator(";");
    let mut url = DynamicUrl::new("https://example.com/search");
    url.set_query_params_with(&dynamic, &config)?;
    println!("{}", url.resolve());

    let mut url = DynamicUrl::new("https://example.com/{whatever}/{you}/{like}");
    url.set_route_params("flat/replacement")?;
    println!("{}", url.into_string());

    Ok(())
}
