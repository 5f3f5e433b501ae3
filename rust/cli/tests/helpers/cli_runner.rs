use pokertrack_cli::config::{CONFIG_ENV, DEALER_ENV, HAND_COUNTING_ENV, LOG_ENV, PLAYERS_ENV};
use std::io::Cursor;

const CONFIG_VARS: [&str; 5] = [CONFIG_ENV, PLAYERS_ENV, DEALER_ENV, HAND_COUNTING_ENV, LOG_ENV];

#[derive(Debug, Default)]
pub struct CliRunner;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Sets the given configuration variables, clears the other ones and puts
/// everything back on drop. Callers must hold `#[serial]`.
struct EnvGuard {
    restores: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key, std::env::var(key).ok()));
            let value = pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
            // SAFETY: tests touching the environment run under #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: see EnvGuard::apply
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        CliRunner
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], "")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], input)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        self.run_inner(args, env, input)
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let argv: Vec<String> = std::iter::once("pokertrack".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let code = pokertrack_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliRunner;
    use serial_test::serial;

    #[test]
    #[serial]
    fn run_executes_help_command() {
        let result = CliRunner::new().run(&["--help"]);
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("Usage"));
    }

    #[test]
    #[serial]
    fn env_is_restored_after_run() {
        let before = std::env::var("POKERTRACK_DEALER").ok();
        CliRunner::new().run_with_env(&["cfg"], &[("POKERTRACK_DEALER", "3")], "");
        assert_eq!(std::env::var("POKERTRACK_DEALER").ok(), before);
    }
}
