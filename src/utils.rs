use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    fn app_name(self) -> &'static str {
        match self {
            Profile::Dev => "kudos-dev",
            Profile::Prod => "kudos",
        }
    }
}

/// Get the configuration directory path for kudos
/// If profile is Dev, uses "kudos-dev" instead of "kudos"
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "kudos", profile.app_name())
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path for kudos (used for the log file)
pub fn get_data_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "kudos", profile.app_name())
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Route log output to a file under the data directory. The TUI owns the
/// terminal, so logging to stderr would corrupt the display. Level comes
/// from RUST_LOG, defaulting to info.
pub fn init_logger(profile: Profile) -> Result<(), String> {
    let dir = get_data_dir(profile)
        .ok_or_else(|| "could not determine data directory".to_string())?;
    fs::create_dir_all(&dir).map_err(|e| format!("creating {}: {}", dir.display(), e))?;

    let path = dir.join("kudos.log");
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("opening {}: {}", path.display(), e))?;

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .map_err(|e| e.to_string())
}

/// Parsed key binding information
#[derive(Debug, Clone)]
pub struct ParsedKeyBinding {
    pub key_code: crossterm::event::KeyCode,
    pub requires_ctrl: bool,
}

/// Format a key binding string for display, showing the platform-appropriate
/// modifier. On macOS, "Ctrl+" is shown as "Opt+" (Option key).
pub fn format_key_binding_for_display(key_binding: &str) -> String {
    #[cfg(target_os = "macos")]
    {
        key_binding.replace("Ctrl+", "Opt+")
    }

    #[cfg(not(target_os = "macos"))]
    {
        key_binding.to_string()
    }
}

/// Parse a key binding string from config into a ParsedKeyBinding
/// Supports: single keys ("q", "a", "j"), special keys ("Enter", "Space",
/// "F1"), and the Ctrl modifier ("Ctrl+d")
pub fn parse_key_binding(key_str: &str) -> Result<ParsedKeyBinding, String> {
    let key_str = key_str.trim();

    if let Some(key_part) = key_str.strip_prefix("Ctrl+") {
        let key_code = parse_key_code(key_part)?;
        return Ok(ParsedKeyBinding {
            key_code,
            requires_ctrl: true,
        });
    }

    let key_code = parse_key_code(key_str)?;
    Ok(ParsedKeyBinding {
        key_code,
        requires_ctrl: false,
    })
}

fn parse_key_code(key_str: &str) -> Result<crossterm::event::KeyCode, String> {
    use crossterm::event::KeyCode;

    match key_str {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" | "Escape" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Tab" => Ok(KeyCode::Tab),
        "Space" | " " => Ok(KeyCode::Char(' ')),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "Delete" => Ok(KeyCode::Delete),
        _ => {
            if let Some(n) = key_str
                .strip_prefix('F')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12u8).contains(n))
            {
                return Ok(KeyCode::F(n));
            }
            let mut chars = key_str.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(format!("Unknown key binding: {}", key_str)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn parses_single_characters() {
        let parsed = parse_key_binding("q").unwrap();
        assert_eq!(parsed.key_code, KeyCode::Char('q'));
        assert!(!parsed.requires_ctrl);
    }

    #[test]
    fn parses_special_keys() {
        assert_eq!(parse_key_binding("Enter").unwrap().key_code, KeyCode::Enter);
        assert_eq!(
            parse_key_binding("Space").unwrap().key_code,
            KeyCode::Char(' ')
        );
        assert_eq!(parse_key_binding("F1").unwrap().key_code, KeyCode::F(1));
    }

    #[test]
    fn parses_ctrl_modifier() {
        let parsed = parse_key_binding("Ctrl+d").unwrap();
        assert_eq!(parsed.key_code, KeyCode::Char('d'));
        assert!(parsed.requires_ctrl);
    }

    #[test]
    fn rejects_unknown_bindings() {
        assert!(parse_key_binding("SuperKey").is_err());
        assert!(parse_key_binding("F13").is_err());
    }
}
