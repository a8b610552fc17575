/// Inline code: `` `code` ``.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIMITER: &'static str = "`";
}
