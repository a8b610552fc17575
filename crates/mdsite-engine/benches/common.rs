// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another [link](https://example.com)\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```\nfn example() {}\n```\n\n![image](/img.png)\n\n";
    base.repeat(size)
}
