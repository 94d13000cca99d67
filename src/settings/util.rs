use std::path::{Path, PathBuf};

use kitty_theme::app_dirs;

/// Expand a leading `~` to the user's home directory.
pub(super) fn expand_tilde(path: PathBuf) -> PathBuf {
    expand_tilde_with(path, app_dirs::get_home_dir().as_deref())
}

fn expand_tilde_with(path: PathBuf, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path;
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path,
    }
}

/// Expand `~` and anchor relative paths at `base`.
pub(super) fn anchor(path: PathBuf, base: &Path) -> PathBuf {
    let path = expand_tilde(path);
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_replaced_by_home() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_tilde_with(PathBuf::from("~/.config/kitty"), Some(home)),
            PathBuf::from("/home/user/.config/kitty")
        );
        assert_eq!(
            expand_tilde_with(PathBuf::from("~"), Some(home)),
            PathBuf::from("/home/user")
        );
    }

    #[test]
    fn other_paths_are_untouched() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_tilde_with(PathBuf::from("/etc/kitty"), Some(home)),
            PathBuf::from("/etc/kitty")
        );
        assert_eq!(
            expand_tilde_with(PathBuf::from("~other/themes"), Some(home)),
            PathBuf::from("~other/themes")
        );
        assert_eq!(
            expand_tilde_with(PathBuf::from("~/x"), None),
            PathBuf::from("~/x")
        );
    }

    #[test]
    fn relative_paths_are_anchored() {
        let base = Path::new("/conf");
        assert_eq!(
            anchor(PathBuf::from("theme.conf"), base),
            PathBuf::from("/conf/theme.conf")
        );
        assert_eq!(
            anchor(PathBuf::from("/abs/theme.conf"), base),
            PathBuf::from("/abs/theme.conf")
        );
    }
}
