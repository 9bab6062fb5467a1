//! Path utilities: expand `~/` in configured paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_untouched() {
        assert_eq!(expand_tilde("mealsetu.db"), PathBuf::from("mealsetu.db"));
    }

    #[test]
    fn tilde_resolves_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/data/m.db"), home.join("data/m.db"));
        }
    }
}
