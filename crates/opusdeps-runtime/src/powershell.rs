//! PowerShell invocation shared by the Windows adapters.
//!
//! Values are handed to scripts through environment variables so nothing
//! user-controlled is spliced into script text.

use opusdeps_core::{CommandSpec, StdioMode};

pub const POWERSHELL: &str = "powershell";

/// Command that runs `script` non-interactively with stdout captured.
pub fn script(script: &str) -> CommandSpec {
    CommandSpec::new(POWERSHELL)
        .args([
            "-NoProfile",
            "-NonInteractive",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            script,
        ])
        .stdio(StdioMode::Capture)
}

/// Quote one argument for `Start-Process -ArgumentList`, which joins its
/// items with spaces.
pub fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains([' ', '\t', '"']) {
        return arg.to_string();
    }
    format!("\"{}\"", arg.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("--verbose"), "--verbose");
        assert_eq!(quote_arg(r"C:\Program Files\x"), r#""C:\Program Files\x""#);
        assert_eq!(quote_arg(""), r#""""#);
        assert_eq!(quote_arg(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn test_script_is_captured() {
        let spec = script("Write-Output 1");
        assert_eq!(spec.program, "powershell");
        assert_eq!(spec.args.last().map(String::as_str), Some("Write-Output 1"));
        assert_eq!(spec.stdio, StdioMode::Capture);
    }
}
