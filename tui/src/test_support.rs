use ratatui::buffer::Buffer;

/// Buffer contents as lines of text with trailing blanks trimmed.
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
