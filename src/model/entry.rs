use crate::util::{format_size, format_timestamp};

use super::Item;

/// A directory entry as listed by the directory source
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: String,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: i64,
}

impl Entry {
    /// Display row: size column, date column, then the name (dirs get a trailing slash)
    pub fn display_text(&self) -> String {
        let size = if self.is_dir {
            "<dir>".to_string()
        } else {
            format_size(self.size)
        };
        let name = if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        };
        format!("{:>10}  {:>10}  {}", size, format_timestamp(self.modified), name)
    }

    pub fn into_item(self) -> Item {
        let text = self.display_text();
        Item::new(self.path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, size: u64) -> Entry {
        Entry {
            path: format!("/tmp/{}", name),
            name: name.to_string(),
            is_dir,
            size,
            modified: 0,
        }
    }

    #[test]
    fn test_file_display_text() {
        let text = entry("main.rs", false, 2048).display_text();
        assert!(text.contains("2.0 KB"));
        assert!(text.contains("unknown"));
        assert!(text.ends_with("main.rs"));
    }

    #[test]
    fn test_dir_display_text() {
        let text = entry("src", true, 0).display_text();
        assert!(text.contains("<dir>"));
        assert!(text.ends_with("src/"));
    }

    #[test]
    fn test_into_item_keeps_path_as_value() {
        let item = entry("a.txt", false, 1).into_item();
        assert_eq!(item.value, "/tmp/a.txt");
        assert!(item.text.ends_with("a.txt"));
    }
}
