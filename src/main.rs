use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let inputs: Vec<&str> = if args.is_empty() {
        vec![
            "https://www.google.com/path/to/file#fragment",
            "http://127.0.0.1:8080",
            "http://www.google.com?a=&&&c=d&e",
            "www.google.com",
            "   ",
            "http://exa mple.com",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for input in inputs {
        println!("{:?}", input);

        match parsed_uri::parse(input) {
            Ok(uri) => print_uri(&uri),
            Err(e) => println!("  ✗ Error: {}", e),
        }
        println!();
    }
}

fn print_uri(uri: &parsed_uri::ParsedUri) {
    println!("  scheme:    {}", display(uri.scheme()));
    if let Some(user_info) = uri.user_info() {
        println!("  user info: {}", user_info);
    }
    println!("  host:      {}", display(uri.host()));
    println!(
        "  port:      {}",
        uri.port().map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("  path:      {}", display(uri.path()));

    if uri.has_query() {
        println!("  query:");
        for (key, value) in uri.queries() {
            println!("    {:?} = {}", key, display(value.as_deref()));
        }
    } else {
        println!("  query:     -");
    }

    println!("  fragment:  {}", display(uri.fragment()));
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
