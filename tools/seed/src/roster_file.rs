use std::fs;
use std::io;
use std::path::Path;

/// Read one name per line, skipping blank lines and `#` comments
pub fn read_names(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse_names(&fs::read_to_string(path)?))
}

fn parse_names(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let names = parse_names("# cohort 3\nAnn Lee\n\n  Bo Chen  \n# Cy Diaz\n");
        assert_eq!(names, ["Ann Lee", "Bo Chen"]);
    }

    #[test]
    fn empty_file_has_no_names() {
        assert!(parse_names("").is_empty());
    }
}
