// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Step {}\n\n", section + 1));
        content.push_str("Work through the **core** material and check *every* exercise.\n");
        content.push_str("See https://docs.python.org/3/tutorial for background.\n\n");
        for i in 0..3 {
            content.push_str(&format!("{}. Task {} of step {}\n", i + 1, i + 1, section + 1));
            content.push_str("  - Read the [guide](https://example.com/guide)\n");
            content.push_str("    - Take notes\n");
        }
        content.push('\n');
    }

    content
}
