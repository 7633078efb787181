// Minimal demonstration of the blocking verb surface
// Usage: cargo run --example demo [url]

use webcall_core::{HeaderBuilder, HttpService, UrlBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let url = match args.get(1) {
        Some(url) => url.clone(),
        None => UrlBuilder::new("https://jsonplaceholder.typicode.com").with_endpoint("posts/1"),
    };

    let headers = HeaderBuilder::new().add("Accept", "application/json").build();

    let response = HttpService::default().get(&url, headers)?;
    println!("{}", response.dict());

    Ok(())
}
