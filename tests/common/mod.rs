use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

pub mod prelude {
    pub use super::Env;
    pub use anyhow::Result;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;
    pub use predicates::str;
}

pub struct Env {
    pub data_dir: TempDir,
}

impl Env {
    pub fn new() -> Result<Self> {
        Ok(Self {
            data_dir: TempDir::new()?,
        })
    }

    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("paysplit")?;
        cmd.env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir.path());
        Ok(cmd)
    }

    /// Run the binary feeding `lines` on stdin
    pub fn session(&self, lines: &[&str]) -> Result<assert_cmd::assert::Assert> {
        let mut input = lines.join("\n");
        input.push('\n');
        Ok(self.command()?.write_stdin(input).assert())
    }
}
