#![allow(dead_code)]

use holdem_cli::run;

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("holdem").chain(args.iter().copied());
    let exit_code = run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub const CONFIG_VARS: [&str; 7] = [
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_BIG_BLIND",
    "HOLDEM_STARTING_STACK",
    "HOLDEM_PLAYERS",
    "HOLDEM_MAX_HANDS",
];

/// Sets variables for the life of the guard and restores the previous values
/// on drop. Every `HOLDEM_*` variable not named is cleared meanwhile.
pub struct EnvGuard {
    restores: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&'static str, &str)]) -> Self {
        let restores = CONFIG_VARS
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect();
        for key in CONFIG_VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in &self.restores {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
