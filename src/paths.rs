use std::path::PathBuf;

/// Returns the directory holding configuration and logs.
///
/// `BUYER_PROFILE_HOME` wins when set, otherwise the platform config
/// directory is used.
pub fn profile_root() -> PathBuf {
    if let Ok(root) = std::env::var("BUYER_PROFILE_HOME")
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    directories::ProjectDirs::from("com", "buyer-profile", "buyer-profile")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".buyer-profile"))
}

/// Returns the path to the log directory.
pub fn logs_dir() -> PathBuf {
    profile_root().join("logs")
}
