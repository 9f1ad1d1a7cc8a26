// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use std::io::Write;
use std::sync::Arc;

use markglobal::app_state::AppState;
use markglobal::bootstrap::{self, BootstrapResult};
use markglobal::config::ValidatedConfig;
use markglobal::contact::EmailSettings;
use markglobal::runtime_paths::RuntimePaths;
use markglobal::{api, cli};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    match parsed_args.mode {
        RunMode::Help => {
            print!("{}", cli::help_text());
            0
        }
        RunMode::Cli(tokens) => System::new()
            .block_on(async { cli::run_cli(&parsed_args.runtime_root, tokens).await }),
        RunMode::Serve => {
            let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
                Ok(result) => result,
                Err(error) => {
                    eprintln!("❌ Bootstrap error: {}", error);
                    eprintln!("❌ Application cannot start with invalid configuration.");
                    return 1;
                }
            };

            match System::new().block_on(run_server(bootstrap)) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("❌ Server failed to start: {}", error);
                    1
                }
            }
        }
    }
}

async fn run_server(bootstrap: BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);
    let runtime_paths = bootstrap.runtime_paths;

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(validated_config.log_level_filter())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|error| {
            eprintln!("❌ Failed to initialize logger: {}", error);
            std::io::Error::other(error.to_string())
        })?;

    log_startup_info(&validated_config, &runtime_paths);

    let app_state = Arc::new(AppState::new(&validated_config, runtime_paths));
    info!(
        "✅ Contact service initialized with collection {}",
        app_state.runtime_paths.contacts_dir.display()
    );

    let workers = validated_config.server.workers;
    let address = {
        let (host, port) = validated_config.server.address_tuple();
        (host.to_string(), port)
    };

    let factory = {
        let app_state_for_app = app_state.clone();

        move || {
            App::new()
                .app_data(web::Data::from(app_state_for_app.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .configure(api::configure)
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(address)?
        .run()
        .await
}

fn log_startup_info(config: &ValidatedConfig, runtime_paths: &RuntimePaths) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );

    let email = EmailSettings::resolve(&config.email);
    info!(
        "SMTP {}:{} (secure: {}), operator address {}",
        email.host, email.port, email.secure, email.admin_address
    );
    if email.username.is_empty() {
        log::warn!("EMAIL_USER is not set; contact emails will fail until it is configured");
    }

    info!(
        "State directory (canonical): {}",
        runtime_paths.state_dir.display()
    );
    info!(
        "Contacts directory (canonical): {}",
        runtime_paths.contacts_dir.display()
    );
    info!("Config file: {}", runtime_paths.config_file.display());
    info!("Runtime root: {}", runtime_paths.root.display());

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

enum RunMode {
    Serve,
    Cli(Vec<String>),
    Help,
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");
    let mut cli_tokens = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            cli_tokens.push(arg);
        }
    }

    if cli_tokens.len() == 1 && cli_tokens[0].eq_ignore_ascii_case("help") {
        return Ok(ParsedArgs {
            runtime_root,
            mode: RunMode::Help,
        });
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    let mode = if cli_tokens.is_empty() {
        RunMode::Serve
    } else {
        RunMode::Cli(cli_tokens)
    };

    Ok(ParsedArgs { runtime_root, mode })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

#[cfg(test)]
mod tests {
    use super::{RunMode, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_serve() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.is_absolute());
    }

    #[test]
    fn parse_args_accepts_runtime_root() {
        let parsed = parse_args_from(args(&["-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_rejects_missing_root_value() {
        match parse_args_from(args(&["-C"])) {
            Err(error) => assert!(error.contains("-C")),
            Ok(_) => panic!("expected missing value error"),
        }
    }

    #[test]
    fn parse_args_ignores_double_dash() {
        let parsed = parse_args_from(args(&["--", "-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_collects_cli_tokens() {
        let parsed =
            parse_args_from(args(&["-C", "runtime", "contacts", "list", "--pending"]))
                .expect("parse args");
        match parsed.mode {
            RunMode::Cli(tokens) => {
                assert_eq!(tokens, args(&["contacts", "list", "--pending"]));
            }
            _ => panic!("expected cli mode"),
        }
    }

    #[test]
    fn parse_args_accepts_help_command_and_flag() {
        let parsed = parse_args_from(args(&["help"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
        let parsed = parse_args_from(args(&["--help", "contacts", "list"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
    }
}
