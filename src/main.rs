// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> config --> logging --> Ctrl+C token --> dispatch
//!   Install | Folders | Layout | Compile | Clone | Exists | Copy | Exec | Check
//! any error --> "Error: ..." on stderr, exit code 1
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use yeager_setup::cli::argv::nth_arg;
use yeager_setup::cli::global::GlobalOptions;
use yeager_setup::cli::{self, Command};
use yeager_setup::cmd::check::run_check_command;
use yeager_setup::cmd::clone::run_clone_command;
use yeager_setup::cmd::compile::run_compile_command;
use yeager_setup::cmd::config::{run_inis_command, run_options_command};
use yeager_setup::cmd::exec::run_exec_command;
use yeager_setup::cmd::folders::{run_folders_command, run_layout_command};
use yeager_setup::cmd::fs::{run_copy_command, run_exists_command};
use yeager_setup::cmd::install::run_install_command;
use yeager_setup::config::loader::ConfigLoader;
use yeager_setup::error::{Result, SetupError};
use yeager_setup::logging::{LogConfig, init_logging};
use yeager_setup::tools::ToolContext;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        let program = nth_arg(0).unwrap_or_else(|| "yeager-setup".to_string());
        eprintln!("No command specified. Use `{program} --help` for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => return report(&e),
    };

    if matches!(command, Command::Inis) {
        run_inis_command(&loader.format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let token = CancellationToken::new();
    spawn_interrupt_handler(token.clone());

    let dry = config.global.dry;
    let ctx = ToolContext::new(Arc::new(config), token, dry);

    match dispatch_command(command, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

async fn dispatch_command(command: &Command, ctx: &ToolContext) -> Result<()> {
    let config = ctx.config();
    let dry = ctx.is_dry_run();

    match command {
        Command::Version | Command::Inis => Ok(()),
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Install(args) => run_install_command(args, ctx).await,
        Command::Folders(args) => run_folders_command(args, config).await,
        Command::Layout(args) => run_layout_command(args),
        Command::Compile(args) => run_compile_command(args, ctx).await,
        Command::Clone(args) => run_clone_command(args, ctx).await,
        Command::Exists(args) => {
            run_exists_command(args);
            Ok(())
        }
        Command::Copy(args) => run_copy_command(args, dry).await,
        Command::Exec(args) => run_exec_command(args, dry).await,
        Command::Check(args) => run_check_command(args, ctx).await,
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    if e
        .downcast_ref::<SetupError>()
        .is_some_and(SetupError::is_environment)
    {
        error!("this machine cannot run the installation");
    }
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

/// Cancels `token` on the first Ctrl+C so running tools kill their children.
fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping");
            token.cancel();
        }
    });
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("yeager.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix("YEAGER");

    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    Ok(loader)
}
