// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _ _ _
| (_) |
| |_| |_ ____  _   _  ___
| | |  _)    \| | | |/___)
| | | |_| | | | |_| |___ |
|_|_|\___)_|_|_|____/(___/

    Remote Benchmark Runner
"#;
    println!("{}", banner);
}
