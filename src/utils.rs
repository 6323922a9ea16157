/// Format the size of an archive member for log output, e.g. `1.5 KiB`.
///
/// Chart members are small text files, so sizes stop at MiB.
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 2] = ["KiB", "MiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{size:.1} {unit}")
}

/// Collapse a free-form chart description to a single line, so it reads
/// cleanly in log output.
pub fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
