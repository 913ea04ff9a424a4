use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Target};
use menu_core::config::SystemConfig;

use crate::config_gen;

const CONFIG_PATH: &str = "config.toml";

pub fn init() {
    config_gen::ensure_config_exists(CONFIG_PATH);

    if let Err(e) = menu_shared::config::init(CONFIG_PATH) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger();
}

fn open_log_file(sys_cfg: &SystemConfig) -> anyhow::Result<File> {
    fs::create_dir_all(&sys_cfg.log_path)
        .with_context(|| format!("Failed to create log dir {:?}", sys_cfg.log_path))?;

    let log_file_path = Path::new(&sys_cfg.log_path).join("menu.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file {:?}", log_file_path))
}

fn init_logger() {
    let sys_cfg: SystemConfig = menu_shared::config::get("system");

    struct TeeWriter<W1, W2>(W1, W2);
    impl<W1: Write, W2: Write> Write for TeeWriter<W1, W2> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = self.0.write(buf)?;
            self.1.write_all(&buf[..n])?;
            Ok(n)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            self.0.flush()?;
            self.1.flush()?;
            Ok(())
        }
    }

    // RUST_LOG wins over the config file
    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level));
    match open_log_file(&sys_cfg) {
        Ok(log_file) if sys_cfg.quiet_console => {
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        Ok(log_file) => {
            builder.target(Target::Pipe(Box::new(TeeWriter(std::io::stderr(), log_file))));
        }
        Err(e) => {
            eprintln!("{:#}, logging to stderr only.", e);
            builder.target(Target::Stderr);
        }
    }

    builder.init();
}
