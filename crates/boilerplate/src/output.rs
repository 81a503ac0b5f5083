use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Print paths relative to `base` as an indented list
pub fn print_paths<'a>(base: &Path, paths: impl IntoIterator<Item = &'a Path>, dirs: bool) {
    for path in paths {
        let rel = path.strip_prefix(base).unwrap_or(path);
        if dirs {
            println!("  {}/", rel.display().to_string().blue());
        } else {
            println!("  {}", rel.display());
        }
    }
}
