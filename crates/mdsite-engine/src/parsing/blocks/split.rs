/// Splits a document into blocks on blank lines.
///
/// Only fully-empty lines separate blocks; runs of them count as one
/// separator. A whitespace-only line stays inside its block. Each block is
/// trimmed and empty blocks are dropped. `\r\n` line endings come out as
/// `\n`.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if line.is_empty() {
            flush_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut blocks, &mut current);

    blocks
}

fn flush_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
    current.clear();
}
