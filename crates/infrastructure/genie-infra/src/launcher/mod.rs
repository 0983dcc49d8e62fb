use std::process::Stdio;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Refusing to open non-web address: {0}")]
    Scheme(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hand a URL to the platform's default browser without waiting for it.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(LaunchError::Scheme(url.to_string()));
    }
    tracing::info!("Opening {url}");

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        std::process::Command::new("xdg-open")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
